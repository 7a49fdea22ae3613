//! Configuration loading
//!
//! The site configuration is read once from `site.toml` and then frozen for
//! the rest of the process.

use crate::domain::SiteConfig;
use crate::error::{FolioError, Result};
use std::fs;
use std::path::Path;
use std::sync::OnceLock;
use tracing::debug;

/// Name of the configuration file at the site root
pub const CONFIG_FILE: &str = "site.toml";

static SITE_CONFIG: OnceLock<SiteConfig> = OnceLock::new();

impl SiteConfig {
    /// Load config from site.toml in the given directory
    pub fn load_from_dir(path: &Path) -> Result<Self> {
        let config_path = path.join(CONFIG_FILE);

        let contents = fs::read_to_string(&config_path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                FolioError::NotSiteDirectory(path.to_path_buf())
            } else {
                FolioError::Io(e)
            }
        })?;

        let config: SiteConfig = toml::from_str(&contents)
            .map_err(|e| FolioError::Config(format!("Failed to parse {}: {}", CONFIG_FILE, e)))?;
        config.validate()?;

        debug!(path = %config_path.display(), title = %config.title, "loaded site config");
        Ok(config)
    }

    /// Save config to site.toml in the given directory
    pub fn save_to_dir(&self, path: &Path) -> Result<()> {
        let contents = toml::to_string_pretty(self)
            .map_err(|e| FolioError::Config(format!("Failed to serialize config: {}", e)))?;

        fs::write(path.join(CONFIG_FILE), contents)?;
        Ok(())
    }

    /// Reject values no page could be built with
    pub fn validate(&self) -> Result<()> {
        if self.posts_per_page == 0 || self.projects_per_page == 0 {
            return Err(FolioError::Config(
                "posts_per_page and projects_per_page must be at least 1".to_string(),
            ));
        }
        if let Some(url) = &self.site_url {
            if !(url.starts_with("http://") || url.starts_with("https://")) {
                return Err(FolioError::Config(format!(
                    "site_url must be an absolute http(s) URL, got '{}'",
                    url
                )));
            }
        }
        Ok(())
    }

    /// Freeze `config` as the process-wide configuration.
    ///
    /// The first call wins; later calls return the already installed value.
    pub fn install(config: SiteConfig) -> &'static SiteConfig {
        SITE_CONFIG.get_or_init(|| config)
    }

    /// The installed configuration, or the built-in one if none was installed
    pub fn global() -> &'static SiteConfig {
        SITE_CONFIG.get_or_init(SiteConfig::default)
    }
}
