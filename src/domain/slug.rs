//! Slug normalization
//!
//! Tag helpers take the normalizer as a plain `Fn(&str) -> String` so callers
//! can swap in their own rule; [`slugify`] is the one the site uses.

use deunicode::deunicode;
use regex::Regex;
use std::sync::OnceLock;

fn whitespace_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"\s+").unwrap())
}

fn non_word_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"[^a-z0-9_-]+").unwrap())
}

fn dash_run_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"-{2,}").unwrap())
}

/// Convert free text into a URL-safe identifier.
///
/// ```
/// use folio::domain::slug::slugify;
///
/// assert_eq!(slugify("Machine Learning"), "machine-learning");
/// assert_eq!(slugify("machine-learning"), "machine-learning");
/// assert_eq!(slugify("  Café & Crème  "), "cafe-creme");
/// ```
pub fn slugify(text: &str) -> String {
    let ascii = deunicode(text.trim()).to_lowercase();
    let dashed = whitespace_regex().replace_all(&ascii, "-");
    let cleaned = non_word_regex().replace_all(&dashed, "");
    let collapsed = dash_run_regex().replace_all(&cleaned, "-");
    collapsed.trim_matches('-').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lowercases_and_hyphenates() {
        assert_eq!(slugify("AI"), "ai");
        assert_eq!(slugify("Data Science"), "data-science");
        assert_eq!(slugify("Data   Science"), "data-science");
    }

    #[test]
    fn test_strips_punctuation_and_edges() {
        assert_eq!(slugify("C++ & Rust!"), "c-rust");
        assert_eq!(slugify("--hello--"), "hello");
        assert_eq!(slugify("snake_case"), "snake_case");
    }

    #[test]
    fn test_transliterates_unicode() {
        assert_eq!(slugify("Über Straße"), "uber-strasse");
    }

    #[test]
    fn test_is_idempotent() {
        for input in ["Machine Learning", "C++ & Rust!", "Über", "a--b"] {
            let once = slugify(input);
            assert_eq!(slugify(&once), once, "not idempotent for {input}");
        }
    }

    #[test]
    fn test_empty_and_symbol_only() {
        assert_eq!(slugify(""), "");
        assert_eq!(slugify("!!!"), "");
    }
}
