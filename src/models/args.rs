//! Argument types for the generated search fields.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::PublicationStatus;

/// Arguments of the top-level `search` field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchRequest {
    /// Fuzzy query string, forwarded verbatim to the match engine.
    pub query: String,
    /// Default locale inherited by every sub-field.
    pub locale: Option<String>,
}

impl SearchRequest {
    /// Creates a request without a locale.
    #[must_use]
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            locale: None,
        }
    }

    /// Sets the inherited locale.
    #[must_use]
    pub fn with_locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = Some(locale.into());
        self
    }
}

/// Pagination argument in either of its two wire forms.
///
/// The two shapes are mutually exclusive per request; interpretation
/// (clamping, defaulting, page-to-offset conversion) belongs to the
/// [`ArgTransformer`](crate::traits::ArgTransformer), not to this type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PaginationArgs {
    /// Page-based form: `{page, pageSize}`.
    Paged {
        /// 1-based page index.
        page: u32,
        /// Entries per page.
        #[serde(rename = "pageSize")]
        page_size: u32,
    },
    /// Offset-based form: `{start, limit}`.
    Windowed {
        /// Zero-based offset of the window.
        start: usize,
        /// Window size, with `-1` meaning all results.
        limit: i64,
    },
}

/// Arguments of a per-content-type sub-field.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContentTypeSearchArgs {
    /// Requested result window.
    pub pagination: Option<PaginationArgs>,
    /// Opaque predicate tree, forwarded to the transformer untouched.
    pub filters: Option<Value>,
    /// Locale override; empty or absent falls back to the parent.
    pub locale: Option<String>,
    /// Publication state filter.
    pub status: Option<PublicationStatus>,
}

impl ContentTypeSearchArgs {
    /// Sets the requested window.
    #[must_use]
    pub const fn with_pagination(mut self, pagination: PaginationArgs) -> Self {
        self.pagination = Some(pagination);
        self
    }

    /// Sets the locale override.
    #[must_use]
    pub fn with_locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = Some(locale.into());
        self
    }

    /// Sets the filter predicate tree.
    #[must_use]
    pub fn with_filters(mut self, filters: Value) -> Self {
        self.filters = Some(filters);
        self
    }

    /// Sets the publication state filter.
    #[must_use]
    pub const fn with_status(mut self, status: PublicationStatus) -> Self {
        self.status = Some(status);
        self
    }
}

/// The effective `(start, limit)` pair a response was windowed with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationWindow {
    /// Zero-based offset of the window.
    pub start: usize,
    /// Window size, with `-1` meaning all results.
    pub limit: i64,
}

impl PaginationWindow {
    /// Creates a window.
    #[must_use]
    pub const fn new(start: usize, limit: i64) -> Self {
        Self { start, limit }
    }
}

/// Transformer output: the requested window plus normalized filters.
#[derive(Debug, Clone, PartialEq)]
pub struct TransformedArgs {
    /// Zero-based offset of the requested window.
    pub start: usize,
    /// Requested window size, with `-1` meaning all results.
    pub limit: i64,
    /// Normalized predicate tree, if any survived the transform.
    pub filters: Option<Value>,
}

impl TransformedArgs {
    /// The requested window as a [`PaginationWindow`].
    #[must_use]
    pub const fn window(&self) -> PaginationWindow {
        PaginationWindow::new(self.start, self.limit)
    }
}
