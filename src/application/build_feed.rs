//! Feed generation use case
//!
//! Loads the writing collection, sorts it newest first and renders the RSS
//! document served at `/rss.xml`.

use crate::domain::{sort_by_date_desc, Collection, Feed, SiteConfig};
use crate::error::{FolioError, Result};
use crate::infrastructure::{render_rss, ContentRepository};
use std::fs;
use std::path::PathBuf;
use tracing::info;

/// Options for feed generation
#[derive(Debug, Clone, Default)]
pub struct FeedOptions {
    /// Absolute site URL; overrides `site_url` from site.toml
    pub site_url: Option<String>,

    /// Write the document here instead of returning it only
    pub output: Option<PathBuf>,
}

/// Service for building the RSS feed
pub struct BuildFeedService<'c, R: ContentRepository> {
    repository: R,
    config: &'c SiteConfig,
}

impl<'c, R: ContentRepository> BuildFeedService<'c, R> {
    pub fn new(repository: R, config: &'c SiteConfig) -> Self {
        BuildFeedService { repository, config }
    }

    /// Build the feed and return the XML document.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - No site URL is configured or passed in
    /// - A post cannot be loaded
    /// - The rendered channel fails validation
    /// - Writing the output file fails
    pub fn execute(&self, options: &FeedOptions) -> Result<String> {
        let site = options
            .site_url
            .as_deref()
            .or(self.config.site_url.as_deref())
            .ok_or_else(|| {
                FolioError::Config(
                    "A site URL is required to build the feed. \
                    Set site_url in site.toml or pass --site."
                        .to_string(),
                )
            })?;

        let mut posts = self.repository.load_collection(Collection::Writing)?;
        sort_by_date_desc(&mut posts);

        let feed = Feed::from_posts(self.config, site, &posts);
        let xml = render_rss(&feed)?;

        if let Some(path) = &options.output {
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() && !parent.exists() {
                    fs::create_dir_all(parent)?;
                }
            }
            fs::write(path, &xml)?;
            info!(path = %path.display(), items = feed.items.len(), "wrote feed");
        }

        Ok(xml)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::post::fixtures::post;
    use crate::domain::Post;
    use tempfile::TempDir;

    struct MemoryRepository(Vec<Post>);

    impl ContentRepository for MemoryRepository {
        fn load_config(&self) -> Result<SiteConfig> {
            Ok(SiteConfig::default())
        }

        fn load_collection(&self, _collection: Collection) -> Result<Vec<Post>> {
            Ok(self.0.clone())
        }
    }

    fn repository() -> MemoryRepository {
        MemoryRepository(vec![
            post("older", (2023, 6, 1), &[]),
            post("newer", (2024, 6, 15), &[]),
        ])
    }

    #[test]
    fn test_requires_site_url() {
        let config = SiteConfig::default();
        let service = BuildFeedService::new(repository(), &config);
        assert!(matches!(
            service.execute(&FeedOptions::default()),
            Err(FolioError::Config(_))
        ));
    }

    #[test]
    fn test_items_are_newest_first() {
        let config = SiteConfig {
            site_url: Some("https://example.com".to_string()),
            ..SiteConfig::default()
        };
        let service = BuildFeedService::new(repository(), &config);
        let xml = service.execute(&FeedOptions::default()).unwrap();

        let newer = xml.find("https://example.com/writing/newer/").unwrap();
        let older = xml.find("https://example.com/writing/older/").unwrap();
        assert!(newer < older);
        assert!(xml.contains("<pubDate>Sat, 15 Jun 2024 00:00:00 +0000</pubDate>"));
    }

    #[test]
    fn test_option_overrides_config_and_writes_file() {
        let temp = TempDir::new().unwrap();
        let output = temp.path().join("dist/rss.xml");
        let config = SiteConfig {
            site_url: Some("https://config.example.com".to_string()),
            ..SiteConfig::default()
        };
        let service = BuildFeedService::new(repository(), &config);

        let xml = service
            .execute(&FeedOptions {
                site_url: Some("https://override.example.com".to_string()),
                output: Some(output.clone()),
            })
            .unwrap();

        assert!(xml.contains("https://override.example.com/writing/newer/"));
        assert!(!xml.contains("config.example.com"));
        assert_eq!(fs::read_to_string(output).unwrap(), xml);
    }
}
