//! Data models for searchfan.
//!
//! This module contains the core data structures passed between the
//! registrar, the resolvers, and the host's collaborators.

mod args;
mod content_type;
mod matches;
mod response;

pub use args::{
    ContentTypeSearchArgs, PaginationArgs, PaginationWindow, SearchRequest, TransformedArgs,
};
pub use content_type::{ContentTypeDescriptor, ContentTypeSet, PublicationStatus};
pub use matches::{MatchSet, RankedMatch};
pub use response::{ResponseInfo, SearchParent, SearchResultCollection, ShapedResponse};
