//! Pagination window arithmetic for search result collections.
//!
//! Every collection resolved through the schema layer reports a `PageInfo`
//! alongside its nodes. The math is offset-based:
//!
//! ```text
//! safe_limit = max(limit, 1)
//! page       = floor(start / safe_limit) + 1
//! page_count = ceil(total / safe_limit)
//! ```
//!
//! A `limit` of `-1` means "all results from `start`": the window is
//! unbounded, so `page_size` becomes the number of results actually
//! returned and both `page` and `page_count` collapse to `1`.

use serde::Serialize;

/// Pagination summary attached to a resolved result collection.
///
/// Serialized field names follow the GraphQL wire shape (`pageSize`,
/// `pageCount`), not Rust casing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    /// Total number of matches for the collection, before windowing.
    pub total: usize,
    /// 1-based page index that `start` falls on.
    pub page: usize,
    /// Requested window size, or the returned count when fetching all.
    pub page_size: usize,
    /// Number of pages needed to cover `total` at `page_size`.
    pub page_count: usize,
}

/// Computes the pagination summary for a result window.
///
/// `total` is the full match count, `start` the zero-based offset of the
/// window, and `limit` the requested window size. A `limit` of `-1`
/// selects the all-results mode described in the module docs; zero and
/// other negative values clamp to `1`.
///
/// The function is pure: no clock, no I/O, no shared state.
///
/// ```
/// use searchfan::compute_page_info;
///
/// let info = compute_page_info(25, 10, 10);
/// assert_eq!(info.page, 2);
/// assert_eq!(info.page_count, 3);
/// ```
#[must_use]
pub fn compute_page_info(total: usize, start: usize, limit: i64) -> PageInfo {
    // Clamped to >= 1, so the cast cannot lose sign.
    #[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
    let safe_limit = limit.max(1) as usize;

    if limit == -1 {
        // All-results mode: the window runs from `start` to the end, and
        // the collection always presents itself as a single page.
        return PageInfo {
            total,
            page: 1,
            page_size: total.saturating_sub(start),
            page_count: 1,
        };
    }

    PageInfo {
        total,
        page: start / safe_limit + 1,
        page_size: safe_limit,
        page_count: total.div_ceil(safe_limit),
    }
}
