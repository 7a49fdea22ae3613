//! Post file parsing
//!
//! A post file starts with a TOML block fenced by `+++` lines, followed by
//! the markdown body:
//!
//! ```text
//! +++
//! title = "Hello"
//! publish_date = 2024-01-15T13:45:00Z
//! tags = ["Rust", "Web"]
//! +++
//! First paragraph becomes the excerpt when none is given.
//! ```

use crate::domain::post::{Collection, Post};
use crate::error::{FolioError, Result};
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use pulldown_cmark::{Event, Parser as MdParser, Tag, TagEnd};
use serde::Deserialize;
use std::path::Path;

const FENCE: &str = "+++";

#[derive(Debug, Deserialize)]
struct RawFrontMatter {
    title: String,
    slug: Option<String>,
    excerpt: Option<String>,
    publish_date: Option<toml::Value>,
    updated_date: Option<toml::Value>,
    #[serde(default)]
    tags: Vec<String>,
}

/// Split a post file into its front matter and body.
///
/// Returns `None` when the file does not open with a `+++` fence or the
/// closing fence is missing.
pub fn split_front_matter(content: &str) -> Option<(&str, &str)> {
    let content = content.strip_prefix('\u{feff}').unwrap_or(content);
    let rest = content.strip_prefix(FENCE)?;
    let rest = rest
        .strip_prefix("\r\n")
        .or_else(|| rest.strip_prefix('\n'))?;

    let mut offset = 0;
    for line in rest.split_inclusive('\n') {
        if line.trim_end() == FENCE {
            let front = &rest[..offset];
            let body = &rest[offset + line.len()..];
            return Some((front, body));
        }
        offset += line.len();
    }

    None
}

/// Parse a date written as an RFC 3339 timestamp, a local datetime
/// (read as UTC) or a plain date (midnight UTC).
pub fn parse_date(value: &str) -> Option<DateTime<Utc>> {
    let value = value.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.with_timezone(&Utc));
    }

    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(value, format) {
            return Some(naive.and_utc());
        }
    }

    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

fn date_field(path: &Path, value: &toml::Value) -> Result<DateTime<Utc>> {
    let text = match value {
        toml::Value::String(s) => s.clone(),
        toml::Value::Datetime(dt) => dt.to_string(),
        other => other.to_string(),
    };

    parse_date(&text).ok_or_else(|| FolioError::InvalidDate {
        path: path.to_path_buf(),
        value: text,
    })
}

/// Plain text of the first paragraph of a markdown document.
pub fn first_paragraph(markdown: &str) -> String {
    let mut text = String::new();
    let mut in_paragraph = false;

    for event in MdParser::new(markdown) {
        match event {
            Event::Start(Tag::Paragraph) => in_paragraph = true,
            Event::End(TagEnd::Paragraph) if in_paragraph => break,
            Event::Text(t) | Event::Code(t) if in_paragraph => text.push_str(&t),
            Event::SoftBreak | Event::HardBreak if in_paragraph => text.push(' '),
            _ => {}
        }
    }

    text.trim().to_string()
}

/// Parse a post file.
///
/// `path` is used for the default slug (file stem) and for error messages.
/// Missing or malformed `publish_date` values are rejected.
pub fn parse_post(path: &Path, content: &str, collection: Collection) -> Result<Post> {
    let (front, body) =
        split_front_matter(content).ok_or_else(|| FolioError::InvalidFrontMatter {
            path: path.to_path_buf(),
            message: "missing '+++' front matter block".to_string(),
        })?;

    let raw: RawFrontMatter =
        toml::from_str(front).map_err(|e| FolioError::InvalidFrontMatter {
            path: path.to_path_buf(),
            message: e.message().to_string(),
        })?;

    let publish_date = match &raw.publish_date {
        Some(value) => date_field(path, value)?,
        None => {
            return Err(FolioError::InvalidFrontMatter {
                path: path.to_path_buf(),
                message: "missing required key 'publish_date'".to_string(),
            })
        }
    };
    let updated_date = raw
        .updated_date
        .as_ref()
        .map(|value| date_field(path, value))
        .transpose()?;

    let slug = match raw.slug {
        Some(slug) => slug,
        None => path
            .file_stem()
            .and_then(|s| s.to_str())
            .map(str::to_string)
            .ok_or_else(|| FolioError::InvalidFrontMatter {
                path: path.to_path_buf(),
                message: "cannot derive slug from file name".to_string(),
            })?,
    };

    let excerpt = raw.excerpt.unwrap_or_else(|| first_paragraph(body));

    Ok(Post {
        slug,
        collection,
        title: raw.title,
        excerpt,
        publish_date,
        updated_date,
        tags: raw.tags,
        body: body.to_string(),
    })
}
