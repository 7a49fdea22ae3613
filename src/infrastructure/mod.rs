//! Infrastructure layer - External I/O and persistence

pub mod config;
pub mod repository;
pub mod rss;

pub use repository::{ContentRepository, FileSystemRepository};
pub use rss::render_rss;
