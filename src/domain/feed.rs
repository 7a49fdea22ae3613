//! Feed documents built from sorted posts
//!
//! This module only shapes the data; XML rendering lives in
//! `infrastructure::rss`.

use crate::domain::post::Post;
use crate::domain::site::SiteConfig;
use chrono::{DateTime, NaiveTime, Utc};

/// One entry of the feed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedItem {
    pub title: String,
    pub description: String,
    /// Site-relative path, e.g. `/writing/hello/`
    pub link: String,
    /// Publish instant with the time of day cleared (UTC)
    pub pub_date: DateTime<Utc>,
}

impl FeedItem {
    pub fn from_post(post: &Post) -> Self {
        FeedItem {
            title: post.title.clone(),
            description: post.excerpt.clone(),
            link: post.permalink(),
            pub_date: start_of_day(post.publish_date),
        }
    }
}

/// A feed ready to be serialized
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feed {
    pub title: String,
    pub description: String,
    /// Absolute site URL that item links are resolved against
    pub site: String,
    pub items: Vec<FeedItem>,
}

impl Feed {
    /// Build a feed from posts that are already sorted newest first.
    pub fn from_posts(config: &SiteConfig, site: &str, posts: &[Post]) -> Self {
        Feed {
            title: config.title.clone(),
            description: config.description.clone(),
            site: site.to_string(),
            items: posts.iter().map(FeedItem::from_post).collect(),
        }
    }

    /// Resolve a site-relative path against the site URL.
    pub fn absolute_url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.site.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

/// Midnight UTC of the day `instant` falls on
pub fn start_of_day(instant: DateTime<Utc>) -> DateTime<Utc> {
    instant.date_naive().and_time(NaiveTime::MIN).and_utc()
}
