//! List tags use case

use crate::domain::{slugify, sort_by_date_desc, tag_counts, Collection, TagView};
use crate::error::Result;
use crate::infrastructure::ContentRepository;

/// Service for listing the tags used in a collection.
pub struct ListTagsService<R: ContentRepository> {
    repository: R,
}

impl<R: ContentRepository> ListTagsService<R> {
    /// Create a new list tags service.
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    /// Unique tags with post counts.
    ///
    /// Posts are visited newest first, so a tag's display name is the
    /// spelling used by its most recent post.
    pub fn execute(&self, collection: Collection) -> Result<Vec<(TagView, usize)>> {
        let mut posts = self.repository.load_collection(collection)?;
        sort_by_date_desc(&mut posts);
        Ok(tag_counts(&posts, slugify))
    }
}
