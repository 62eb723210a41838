//! Match engine trait.
//!
//! The engine owns everything this crate deliberately does not: fetching
//! candidate records, running the fuzzy-matching algorithm, and ranking
//! the results. The schema layer only requires that the returned set is
//! complete (pre-windowing) and rank-ordered.
//!
//! # Implementor Notes
//!
//! - Methods use `&self` to enable sharing via `Arc<dyn MatchEngine>`
//! - Return every match, not just one page; windowing belongs to the
//!   response shaper and `total` is derived from the set's length
//! - Interpret `filters`, `locale`, and `status` natively; the schema
//!   layer forwards them without inspection
//! - `populate` is reserved for host-initiated calls and is always
//!   `None` when the call originates from a generated resolver

use async_trait::async_trait;
use serde_json::Value;

use crate::Result;
use crate::models::{ContentTypeDescriptor, MatchSet, PublicationStatus};

/// One engine invocation, borrowed from the resolving request.
#[derive(Debug, Clone, Copy)]
pub struct MatchQuery<'a> {
    /// Content type being searched.
    pub content_type: &'a ContentTypeDescriptor,
    /// Fuzzy query string.
    pub query: &'a str,
    /// Normalized predicate tree from the argument transformer.
    pub filters: Option<&'a Value>,
    /// Relation population hints; never set by generated resolvers.
    pub populate: Option<&'a Value>,
    /// Effective locale after parent inheritance.
    pub locale: Option<&'a str>,
    /// Publication state filter, forwarded untransformed.
    pub status: Option<PublicationStatus>,
}

/// Trait for fuzzy match engines.
#[async_trait]
pub trait MatchEngine: Send + Sync {
    /// Runs one fuzzy query and returns the full ranked result.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Upstream`](crate::Error::Upstream) if the fetch
    /// or matching fails; resolvers propagate it untouched.
    async fn get_matches(&self, query: MatchQuery<'_>) -> Result<MatchSet>;
}
