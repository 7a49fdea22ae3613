//! Posts, collections and date ordering

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Named content collections
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Collection {
    /// Blog articles (content/writing)
    #[default]
    Writing,
    /// Portfolio entries (content/projects)
    Projects,
}

impl Collection {
    /// Directory name under `content/`
    pub fn dir_name(&self) -> &'static str {
        match self {
            Collection::Writing => "writing",
            Collection::Projects => "projects",
        }
    }

    /// URL prefix for entries of this collection, with leading and trailing slash
    pub fn route_prefix(&self) -> &'static str {
        match self {
            Collection::Writing => "/writing/",
            Collection::Projects => "/projects/",
        }
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.dir_name())
    }
}

impl FromStr for Collection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "writing" => Ok(Collection::Writing),
            "projects" => Ok(Collection::Projects),
            _ => Err(s.to_string()),
        }
    }
}

/// A content entry (blog article or project)
#[derive(Debug, Clone, PartialEq)]
pub struct Post {
    pub slug: String,
    pub collection: Collection,
    pub title: String,
    pub excerpt: String,
    pub publish_date: DateTime<Utc>,
    pub updated_date: Option<DateTime<Utc>>,
    /// Free-text tags as written by the author (not normalized)
    pub tags: Vec<String>,
    pub body: String,
}

impl Post {
    /// Site-relative link, e.g. `/writing/hello/`
    pub fn permalink(&self) -> String {
        format!("{}{}/", self.collection.route_prefix(), self.slug)
    }
}

/// Order two posts most-recent-first.
///
/// Intended for `sort_by`: a post published later compares `Less`.
pub fn compare_by_date_desc(a: &Post, b: &Post) -> Ordering {
    b.publish_date.cmp(&a.publish_date)
}

/// Sort posts newest first; ties keep their current order.
pub fn sort_by_date_desc(posts: &mut [Post]) {
    posts.sort_by(compare_by_date_desc);
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;
    use chrono::TimeZone;

    pub fn post(slug: &str, date: (i32, u32, u32), tags: &[&str]) -> Post {
        Post {
            slug: slug.to_string(),
            collection: Collection::Writing,
            title: slug.to_uppercase(),
            excerpt: format!("About {}", slug),
            publish_date: Utc
                .with_ymd_and_hms(date.0, date.1, date.2, 12, 0, 0)
                .unwrap(),
            updated_date: None,
            tags: tags.iter().map(|t| t.to_string()).collect(),
            body: String::new(),
        }
    }
}
