//! Free-text filter predicates and pagination helpers used by listings.

use crate::server::error::AppError;

/// Case-insensitive substring filter.
///
/// An absent or blank query matches everything. Matching lowercases both sides with
/// Unicode rules, so `"kyiv"` matches `"Kyiv Boryspil"` and `"KYÏV"` matches `"kyïv"`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextFilter {
    needle: Option<String>,
}

impl TextFilter {
    /// Builds a filter from an optional query parameter.
    pub fn new(query: Option<&str>) -> Self {
        let needle = query
            .map(str::trim)
            .filter(|q| !q.is_empty())
            .map(str::to_lowercase);

        Self { needle }
    }

    /// Whether the filter constrains anything.
    pub fn is_active(&self) -> bool {
        self.needle.is_some()
    }

    /// Returns true when `haystack` contains the query, ignoring case.
    pub fn matches(&self, haystack: &str) -> bool {
        match &self.needle {
            Some(needle) => haystack.to_lowercase().contains(needle.as_str()),
            None => true,
        }
    }

    /// Returns true when any of the given fields contains the query.
    pub fn matches_any<'a>(&self, fields: impl IntoIterator<Item = &'a str>) -> bool {
        match &self.needle {
            Some(_) => fields.into_iter().any(|field| self.matches(field)),
            None => true,
        }
    }
}

/// Computes the page count for a paginated listing.
pub fn total_pages(total: u64, per_page: u64) -> u64 {
    if per_page > 0 {
        total.div_ceil(per_page)
    } else {
        0
    }
}

/// Row offset of a zero-based page.
///
/// # Returns
/// - `Ok(u64)` - `page × per_page`
/// - `Err(AppError::BadRequest)` - The offset overflows or exceeds what SQLite can bind
pub fn page_offset(page: u64, per_page: u64) -> Result<u64, AppError> {
    page.checked_mul(per_page)
        .filter(|offset| *offset <= i64::MAX as u64)
        .ok_or_else(|| {
            AppError::BadRequest(format!(
                "Page {} with {} entries per page is out of range",
                page, per_page
            ))
        })
}
