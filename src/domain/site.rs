//! Site metadata, navigation and listing settings

use crate::domain::post::Collection;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Image {
    pub src: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alt: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    pub text: String,
    pub href: String,
}

impl Link {
    pub fn new(text: &str, href: &str) -> Self {
        Link {
            text: text.to_string(),
            href: href.to_string(),
        }
    }
}

/// Landing page banner
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Hero {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<Image>,
    pub actions: Vec<Link>,
}

/// Newsletter sign-up block
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subscribe {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    pub form_url: String,
}

/// Site-wide configuration, read from `site.toml`.
///
/// Keys absent from the file keep their built-in values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub title: String,
    pub title_header: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    /// Absolute base URL, e.g. `https://example.com`. Required for feeds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub site_url: Option<String>,
    pub posts_per_page: usize,
    pub projects_per_page: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo: Option<Image>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<Image>,
    pub header_nav_links: Vec<Link>,
    pub footer_nav_links: Vec<Link>,
    pub social_links: Vec<Link>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hero: Option<Hero>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subscribe: Option<Subscribe>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        SiteConfig {
            title: "Phi Bya".to_string(),
            title_header: "Phi Bya".to_string(),
            description: "My blog".to_string(),
            subtitle: None,
            site_url: None,
            posts_per_page: 8,
            projects_per_page: 8,
            logo: None,
            image: None,
            header_nav_links: vec![
                Link::new("About", "/"),
                Link::new("Writing", "/writing"),
                Link::new("Projects", "/projects"),
                Link::new("Resume", "/PhiBya-Resume.pdf"),
            ],
            footer_nav_links: vec![Link::new("About", "/")],
            social_links: vec![
                Link::new("LinkedIn", "https://linkedin.com/in/phibya"),
                Link::new("GitHub", "https://github.com/phibya"),
                Link::new(
                    "Scholar",
                    "https://scholar.google.com/citations?user=yw6kjSYAAAAJ&hl=en",
                ),
            ],
            hero: None,
            subscribe: None,
        }
    }
}

impl SiteConfig {
    /// Listing page size for a collection
    pub fn per_page(&self, collection: Collection) -> usize {
        match collection {
            Collection::Writing => self.posts_per_page,
            Collection::Projects => self.projects_per_page,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SiteConfig::default();
        assert_eq!(config.title, "Phi Bya");
        assert_eq!(config.description, "My blog");
        assert_eq!(config.header_nav_links.len(), 4);
        assert_eq!(config.header_nav_links[1], Link::new("Writing", "/writing"));
        assert_eq!(config.footer_nav_links, vec![Link::new("About", "/")]);
        assert_eq!(config.per_page(Collection::Writing), 8);
        assert_eq!(config.per_page(Collection::Projects), 8);
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config: SiteConfig = toml::from_str(
            r#"
            title = "Notebook"
            posts_per_page = 5

            [hero]
            title = "Hi there"
            actions = [{ text = "Read", href = "/writing" }]

            [subscribe]
            form_url = "https://example.com/subscribe"
            "#,
        )
        .unwrap();

        assert_eq!(config.title, "Notebook");
        assert_eq!(config.title_header, "Phi Bya");
        assert_eq!(config.per_page(Collection::Writing), 5);
        assert_eq!(config.per_page(Collection::Projects), 8);
        let hero = config.hero.unwrap();
        assert_eq!(hero.title.as_deref(), Some("Hi there"));
        assert_eq!(hero.actions, vec![Link::new("Read", "/writing")]);
        assert_eq!(
            config.subscribe.unwrap().form_url,
            "https://example.com/subscribe"
        );
    }
}
