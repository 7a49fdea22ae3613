//! Error types for folio

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for folio
#[derive(Debug, Error)]
pub enum FolioError {
    #[error("Not a folio site: {0}")]
    NotSiteDirectory(PathBuf),

    #[error("Invalid front matter in {}: {message}", path.display())]
    InvalidFrontMatter { path: PathBuf, message: String },

    #[error("Invalid date in {}: '{value}'", path.display())]
    InvalidDate { path: PathBuf, value: String },

    #[error("Unknown collection: {0}")]
    UnknownCollection(String),

    #[error("Page {page} is out of range (last page is {last})")]
    PageOutOfRange { page: usize, last: usize },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Feed error: {0}")]
    Feed(String),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl FolioError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            FolioError::NotSiteDirectory(_) => 2,
            FolioError::InvalidFrontMatter { .. } | FolioError::InvalidDate { .. } => 3,
            FolioError::PageOutOfRange { .. } => 4,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            FolioError::NotSiteDirectory(path) => {
                format!(
                    "Not a folio site: {}\n\n\
                    Suggestions:\n\
                    • Run 'folio init' in this directory to create a new site\n\
                    • Navigate to a directory containing site.toml\n\
                    • Set FOLIO_ROOT environment variable to your site path",
                    path.display()
                )
            }
            FolioError::InvalidDate { path, value } => {
                format!(
                    "Invalid date in {}: '{}'\n\n\
                    Accepted formats:\n\
                    • 2024-01-15\n\
                    • 2024-01-15T13:45:00\n\
                    • 2024-01-15T13:45:00Z (or any RFC 3339 offset)",
                    path.display(),
                    value
                )
            }
            FolioError::InvalidFrontMatter { path, message } => {
                format!(
                    "Invalid front matter in {}: {}\n\n\
                    Posts start with a TOML block fenced by '+++', e.g.:\n\
                    +++\n\
                    title = \"Hello\"\n\
                    publish_date = 2024-01-15\n\
                    tags = [\"rust\"]\n\
                    +++",
                    path.display(),
                    message
                )
            }
            FolioError::UnknownCollection(name) => {
                format!(
                    "Unknown collection: '{}'\n\n\
                    Valid collections: writing, projects",
                    name
                )
            }
            FolioError::PageOutOfRange { page, last } => {
                format!(
                    "Page {} is out of range (last page is {})\n\n\
                    Example: folio posts --page {}",
                    page, last, last
                )
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using FolioError
pub type Result<T> = std::result::Result<T, FolioError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_site_directory_suggestion() {
        let err = FolioError::NotSiteDirectory(PathBuf::from("/tmp/test"));
        let msg = err.display_with_suggestions();
        assert!(msg.contains("folio init"));
        assert!(msg.contains("FOLIO_ROOT"));
        assert!(msg.contains("Suggestions"));
    }

    #[test]
    fn test_invalid_date_lists_formats() {
        let err = FolioError::InvalidDate {
            path: PathBuf::from("content/writing/a.md"),
            value: "yesterday".to_string(),
        };
        let msg = err.display_with_suggestions();
        assert!(msg.contains("a.md"));
        assert!(msg.contains("'yesterday'"));
        assert!(msg.contains("2024-01-15T13:45:00Z"));
    }

    #[test]
    fn test_unknown_collection_suggestions() {
        let err = FolioError::UnknownCollection("notes".to_string());
        let msg = err.display_with_suggestions();
        assert!(msg.contains("writing, projects"));
    }

    #[test]
    fn test_exit_codes() {
        assert_eq!(FolioError::NotSiteDirectory(PathBuf::new()).exit_code(), 2);
        assert_eq!(
            FolioError::InvalidDate {
                path: PathBuf::new(),
                value: String::new()
            }
            .exit_code(),
            3
        );
        assert_eq!(FolioError::PageOutOfRange { page: 3, last: 2 }.exit_code(), 4);
        assert_eq!(FolioError::Feed("bad".to_string()).exit_code(), 1);
    }

    #[test]
    fn test_other_errors_fallback() {
        let err = FolioError::Config("missing site URL".to_string());
        let msg = err.display_with_suggestions();
        assert_eq!(msg, "Configuration error: missing site URL");
    }
}
