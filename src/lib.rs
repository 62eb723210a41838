//! # Searchfan
//!
//! Fuzzy-search schema extension with typed per-content-type result
//! collections.
//!
//! Searchfan turns a single `search(query, locale)` entry field into a fan
//! of per-content-type sub-collections, each carrying ranked results plus
//! pagination metadata computed from an external fuzzy-matching engine.
//! Registration happens once at schema-build time; resolution happens per
//! request against an immutable content-type snapshot.
//!
//! ## Features
//!
//! - Pure page-window arithmetic ([`compute_page_info`]) including the
//!   inherited all-results (`limit = -1`) behavior
//! - Schema-build-time registration: one collection type and one search
//!   field per registered content type, plus one shared entry field
//! - Strongly-typed resolver contract (parent, args, and context checked
//!   at compile time) instead of dynamically-typed resolver signatures
//! - Collaborator seams as traits: match engine, argument transformer,
//!   response shaper, naming strategy, settings store
//!
//! ## Example
//!
//! ```rust,ignore
//! use searchfan::{ContentTypeSet, SchemaRegistrar};
//!
//! let snapshot = ContentTypeSet::new(descriptors)?;
//! let registrar = SchemaRegistrar::new(snapshot, engine, transformer, shaper);
//! let contributions = registrar.register();
//! // hand the contributions to the host schema builder
//! ```

#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

use thiserror::Error as ThisError;

// Module declarations
pub mod context;
pub mod models;
pub mod pagination;
pub mod schema;
pub mod traits;

// Re-exports for convenience
pub use context::{AuthContext, RequestContext};
pub use models::{
    ContentTypeDescriptor, ContentTypeSearchArgs, ContentTypeSet, MatchSet, PaginationArgs,
    PaginationWindow, PublicationStatus, RankedMatch, ResponseInfo, SearchParent, SearchRequest,
    SearchResultCollection, ShapedResponse, TransformedArgs,
};
pub use pagination::{PageInfo, compute_page_info};
pub use schema::{
    CollectionResolver, CollectionTypeDef, FieldDef, FieldResolver, InputValueDef,
    SchemaContribution, SchemaRegistrar, SearchQueryResolver, TypeRef,
};
pub use traits::{
    ArgBuildOptions, ArgTransformer, DefaultNaming, MatchEngine, MatchQuery, NamingStrategy,
    ResponseShaper, SettingsStore, StaticSettings, TransformOptions,
};

/// Error type for searchfan operations.
///
/// Uses `thiserror` for automatic `Display` and `Error` trait implementations.
///
/// # Error Variant Triggers
///
/// | Variant | Raised When |
/// |---------|-------------|
/// | `InvalidInput` | Duplicate content-type names in a snapshot, malformed registry input |
/// | `Upstream` | The match engine or response shaper reports a transport-level failure |
/// | `EmptyResponse` | The response shaper returns nothing without reporting an error |
///
/// A content type that is requested but absent from the snapshot is NOT an
/// error: the field resolves to an absent value so a stale request cannot
/// take down sibling fields.
#[derive(Debug, ThisError)]
pub enum Error {
    /// Invalid input was provided.
    ///
    /// Raised when:
    /// - A content-type snapshot contains duplicate names
    /// - Registry input is malformed and cannot be snapshotted
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// An upstream collaborator failed.
    ///
    /// Raised when:
    /// - The match engine fails while querying (`get_matches`)
    /// - The response shaper fails while shaping (`shape`)
    ///
    /// Resolvers never swallow this variant; it bubbles to the host's
    /// field-level error surface alongside sibling fields that succeeded.
    #[error("upstream '{operation}' failed: {cause}")]
    Upstream {
        /// The collaborator operation that failed.
        operation: String,
        /// The underlying cause.
        cause: String,
    },

    /// The response shaper returned no response despite reporting success.
    ///
    /// Raised when:
    /// - `ResponseShaper::shape` resolves to `Ok(None)`
    ///
    /// Carries the transport context's staged response message so the
    /// caller receives an actionable error instead of a silently null
    /// field.
    #[error("shaper returned no response: {message}")]
    EmptyResponse {
        /// Message staged on the in-flight transport response.
        message: String,
    },
}

/// Result type alias for searchfan operations.
pub type Result<T> = std::result::Result<T, Error>;
