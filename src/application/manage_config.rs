//! Config inspection use case

use crate::domain::SiteConfig;
use crate::error::{FolioError, Result};

const KEYS: &str = "title, title_header, subtitle, description, site_url, \
    posts_per_page, projects_per_page";

/// Service for reading the site configuration.
///
/// The configuration is frozen for the life of the process, so there is no
/// setter; edit site.toml instead.
pub struct ConfigService<'c> {
    config: &'c SiteConfig,
}

impl<'c> ConfigService<'c> {
    /// Create a new config service
    pub fn new(config: &'c SiteConfig) -> Self {
        ConfigService { config }
    }

    /// Get a single scalar config value
    pub fn get(&self, key: &str) -> Result<String> {
        let config = self.config;
        let optional = |value: &Option<String>| value.clone().unwrap_or_default();

        match key {
            "title" => Ok(config.title.clone()),
            "title_header" => Ok(config.title_header.clone()),
            "subtitle" => Ok(optional(&config.subtitle)),
            "description" => Ok(config.description.clone()),
            "site_url" => Ok(optional(&config.site_url)),
            "posts_per_page" => Ok(config.posts_per_page.to_string()),
            "projects_per_page" => Ok(config.projects_per_page.to_string()),
            _ => Err(FolioError::Config(format!(
                "Unknown config key: '{}'. Valid keys are: {}",
                key, KEYS
            ))),
        }
    }

    /// Full configuration as TOML
    pub fn list(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self.config)?)
    }
}
