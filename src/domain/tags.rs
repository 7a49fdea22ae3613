//! Tag views derived from post front matter
//!
//! Tags are free text. Two tags are the same tag when they normalize to the
//! same slug; the display name is whichever spelling was seen first.

use crate::domain::post::Post;
use std::collections::HashSet;

/// A tag as shown on the site: display name plus normalized identifier
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagView {
    pub name: String,
    pub slug: String,
}

impl TagView {
    pub fn new(name: impl Into<String>, slug: impl Into<String>) -> Self {
        TagView {
            name: name.into(),
            slug: slug.into(),
        }
    }
}

/// Collect the unique tags across `posts`, in first-seen order.
///
/// # Examples
///
/// ```
/// use folio::domain::slug::slugify;
/// use folio::domain::tags::{all_tags, TagView};
/// # use folio::domain::post::{Collection, Post};
/// # use chrono::{TimeZone, Utc};
/// # let post = |tags: &[&str]| Post {
/// #     slug: "p".into(), collection: Collection::Writing, title: "P".into(),
/// #     excerpt: String::new(), publish_date: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
/// #     updated_date: None, tags: tags.iter().map(|t| t.to_string()).collect(), body: String::new(),
/// # };
///
/// let posts = vec![post(&["AI", "ai", "Data"]), post(&["ai"])];
/// assert_eq!(
///     all_tags(&posts, slugify),
///     vec![TagView::new("AI", "ai"), TagView::new("Data", "data")]
/// );
/// ```
pub fn all_tags<F>(posts: &[Post], normalize: F) -> Vec<TagView>
where
    F: Fn(&str) -> String,
{
    let mut seen_names: HashSet<&str> = HashSet::new();
    let mut seen_slugs: HashSet<String> = HashSet::new();
    let mut tags = Vec::new();

    let names = posts
        .iter()
        .flat_map(|post| post.tags.iter())
        .map(String::as_str)
        .filter(|tag| !tag.is_empty());

    for name in names {
        if !seen_names.insert(name) {
            continue;
        }
        let slug = normalize(name);
        if seen_slugs.insert(slug.clone()) {
            tags.push(TagView::new(name, slug));
        }
    }

    tags
}

/// Posts carrying a tag that normalizes to `tag_slug`, in their original order.
pub fn posts_by_tag<'a, F>(posts: &'a [Post], tag_slug: &str, normalize: F) -> Vec<&'a Post>
where
    F: Fn(&str) -> String,
{
    posts
        .iter()
        .filter(|post| post.tags.iter().any(|tag| normalize(tag) == tag_slug))
        .collect()
}

/// Unique tags paired with how many posts carry each of them.
pub fn tag_counts<F>(posts: &[Post], normalize: F) -> Vec<(TagView, usize)>
where
    F: Fn(&str) -> String,
{
    all_tags(posts, &normalize)
        .into_iter()
        .map(|tag| {
            let count = posts_by_tag(posts, &tag.slug, &normalize).len();
            (tag, count)
        })
        .collect()
}
