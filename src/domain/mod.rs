//! Domain layer - Content models and pure transformations

pub mod feed;
pub mod front_matter;
pub mod pagination;
pub mod post;
pub mod site;
pub mod slug;
pub mod tags;

pub use feed::{Feed, FeedItem};
pub use pagination::{paginate, Page};
pub use post::{compare_by_date_desc, sort_by_date_desc, Collection, Post};
pub use site::{Hero, Image, Link, SiteConfig, Subscribe};
pub use slug::slugify;
pub use tags::{all_tags, posts_by_tag, tag_counts, TagView};
