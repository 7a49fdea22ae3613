//! folio - Content utilities for a markdown blog/portfolio site
//!
//! Reads posts with TOML front matter from named collections, derives tag
//! views and paginated listings from them, and renders the RSS feed. Site
//! metadata and navigation live in a `site.toml` that is loaded once and
//! frozen for the process.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::FolioError;
