//! Response shaper trait.
//!
//! The shaper turns a ranked match set into the windowed, sanitized node
//! list a collection presents. Authorization-driven field stripping and
//! window clamping happen here, on the host's side of the seam.

use async_trait::async_trait;

use crate::Result;
use crate::context::AuthContext;
use crate::models::{ContentTypeDescriptor, MatchSet, PaginationWindow, ShapedResponse};

/// Trait for response shaping.
///
/// # Implementor Notes
///
/// - Methods use `&self` to enable sharing via `Arc<dyn ResponseShaper>`
/// - The returned `info.args` must echo the window actually applied;
///   pagination math is computed from the echo, not the request, so a
///   clamped or defaulted window stays consistent with the nodes
/// - Return `Ok(None)` when no response can be produced for the caller
///   (the transport's staged status message becomes the error)
#[async_trait]
pub trait ResponseShaper: Send + Sync {
    /// Windows and sanitizes a ranked match set.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Upstream`](crate::Error::Upstream) if shaping
    /// fails outright; resolvers propagate it untouched.
    async fn shape(
        &self,
        matches: MatchSet,
        content_type: &ContentTypeDescriptor,
        auth: &AuthContext,
        window: PaginationWindow,
    ) -> Result<Option<ShapedResponse>>;
}
