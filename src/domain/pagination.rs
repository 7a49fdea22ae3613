//! Listing pagination

use crate::error::{FolioError, Result};

/// One page of a paginated listing
#[derive(Debug, Clone, PartialEq)]
pub struct Page<'a, T> {
    pub items: &'a [T],
    /// 1-based page number
    pub current: usize,
    pub last: usize,
    /// Number of items across all pages
    pub total: usize,
    pub per_page: usize,
    pub prev_url: Option<String>,
    pub next_url: Option<String>,
}

/// URL of page `n` under `base`: the first page lives at `base` itself.
pub fn page_url(base: &str, n: usize) -> String {
    let base = base.trim_end_matches('/');
    if n <= 1 {
        if base.is_empty() {
            "/".to_string()
        } else {
            base.to_string()
        }
    } else {
        format!("{}/{}", base, n)
    }
}

/// Slice `items` into the requested 1-based page.
///
/// An empty listing still has one (empty) page.
pub fn paginate<'a, T>(
    items: &'a [T],
    per_page: usize,
    page: usize,
    base_url: &str,
) -> Result<Page<'a, T>> {
    if per_page == 0 {
        return Err(FolioError::Config(
            "Page size must be at least 1".to_string(),
        ));
    }

    let total = items.len();
    let last = total.div_ceil(per_page).max(1);
    if page == 0 || page > last {
        return Err(FolioError::PageOutOfRange { page, last });
    }

    let start = (page - 1) * per_page;
    let end = (start + per_page).min(total);

    Ok(Page {
        items: &items[start..end],
        current: page,
        last,
        total,
        per_page,
        prev_url: (page > 1).then(|| page_url(base_url, page - 1)),
        next_url: (page < last).then(|| page_url(base_url, page + 1)),
    })
}
