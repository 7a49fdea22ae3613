//! Application layer - Use cases and orchestration

pub mod build_feed;
pub mod init;
pub mod list_posts;
pub mod list_tags;
pub mod manage_config;

pub use build_feed::{BuildFeedService, FeedOptions};
pub use list_posts::{ListPostsOptions, ListPostsService, PostListing};
pub use list_tags::ListTagsService;
pub use manage_config::ConfigService;
