//! List posts use case

use crate::domain::{paginate, posts_by_tag, slugify, sort_by_date_desc, Collection, Post};
use crate::domain::{Page, SiteConfig};
use crate::error::Result;
use crate::infrastructure::ContentRepository;
use tracing::debug;

/// Options for listing posts
#[derive(Debug, Clone)]
pub struct ListPostsOptions {
    pub collection: Collection,

    /// Keep only posts carrying this tag slug
    pub tag: Option<String>,

    /// 1-based page number
    pub page: usize,
}

impl Default for ListPostsOptions {
    fn default() -> Self {
        ListPostsOptions {
            collection: Collection::Writing,
            tag: None,
            page: 1,
        }
    }
}

/// A page of posts plus its position in the listing
#[derive(Debug, Clone)]
pub struct PostListing {
    pub posts: Vec<Post>,
    pub current: usize,
    pub last: usize,
    pub total: usize,
    pub next_url: Option<String>,
}

impl<'a> From<Page<'a, Post>> for PostListing {
    fn from(page: Page<'a, Post>) -> Self {
        PostListing {
            posts: page.items.to_vec(),
            current: page.current,
            last: page.last,
            total: page.total,
            next_url: page.next_url,
        }
    }
}

/// Service for listing a collection newest first
pub struct ListPostsService<'c, R: ContentRepository> {
    repository: R,
    config: &'c SiteConfig,
}

impl<'c, R: ContentRepository> ListPostsService<'c, R> {
    pub fn new(repository: R, config: &'c SiteConfig) -> Self {
        ListPostsService { repository, config }
    }

    pub fn execute(&self, options: &ListPostsOptions) -> Result<PostListing> {
        let mut posts = self.repository.load_collection(options.collection)?;
        sort_by_date_desc(&mut posts);

        let (posts, base_url) = match &options.tag {
            Some(tag) => {
                let tag = slugify(tag);
                let filtered: Vec<Post> = posts_by_tag(&posts, &tag, slugify)
                    .into_iter()
                    .cloned()
                    .collect();
                debug!(tag = %tag, matched = filtered.len(), "filtered posts by tag");
                (filtered, format!("/tags/{}", tag))
            }
            None => (
                posts,
                options.collection.route_prefix().trim_end_matches('/').to_string(),
            ),
        };

        let per_page = self.config.per_page(options.collection);
        let page = paginate(&posts, per_page, options.page, &base_url)?;
        Ok(page.into())
    }
}
