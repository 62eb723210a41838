//! Response-side types: the parent carrier, shaper output, and the
//! collection handed back to the host schema.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::PaginationWindow;
use crate::context::AuthContext;
use crate::pagination::PageInfo;

/// Carrier produced by the top-level `search` resolver.
///
/// Sub-field resolvers read it, never write it: the same parent value is
/// shared by every sibling, so sibling execution order cannot matter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchParent {
    /// Fuzzy query string every sub-field searches with.
    pub query: String,
    /// Locale inherited by sub-fields that request none of their own.
    pub locale: Option<String>,
    /// Authentication payload captured at the top level.
    pub auth: AuthContext,
}

impl SearchParent {
    /// Creates a carrier.
    #[must_use]
    pub fn new(query: impl Into<String>, locale: Option<String>, auth: AuthContext) -> Self {
        Self {
            query: query.into(),
            locale,
            auth,
        }
    }

    /// Resolves the locale a sub-field should search under.
    ///
    /// A non-empty override wins outright; an absent or empty one falls
    /// back to the inherited locale, which is itself dropped when empty.
    #[must_use]
    pub fn effective_locale(&self, requested: Option<&str>) -> Option<String> {
        match requested {
            Some(locale) if !locale.is_empty() => Some(locale.to_string()),
            _ => self.locale.clone().filter(|locale| !locale.is_empty()),
        }
    }
}

/// Shaper output: windowed nodes plus the pagination args it applied.
///
/// `info.args` echoes the *effective* window. Shapers are free to clamp
/// or default the requested one, and pagination math trusts the echo, not
/// the request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShapedResponse {
    /// Sanitized, windowed record payloads.
    pub nodes: Vec<Value>,
    /// Windowing metadata.
    pub info: ResponseInfo,
}

/// Windowing metadata attached to a shaped response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseInfo {
    /// The window the shaper actually applied.
    pub args: PaginationWindow,
}

/// A resolved per-content-type collection: nodes plus pagination.
///
/// `nodes` is a plain `Vec`, so an empty result is an empty list on the
/// wire, never null.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResultCollection {
    /// Matched records for the requested window.
    pub nodes: Vec<Value>,
    /// Pagination summary over the full match count.
    pub page_info: PageInfo,
}
