//! Argument transformer trait.

use serde_json::Value;

use crate::models::{ContentTypeDescriptor, PaginationArgs, TransformedArgs};

/// Options for one transform call.
#[derive(Debug, Clone, Copy)]
pub struct TransformOptions<'a> {
    /// Content type the arguments target.
    pub content_type: &'a ContentTypeDescriptor,
    /// Whether pagination arguments should be interpreted at all.
    pub use_pagination: bool,
}

/// Trait for argument transformation.
///
/// Turns wire-shape arguments into an effective `(start, limit)` window
/// plus normalized filters. Interpretation policy (defaults, clamping,
/// page-to-offset conversion) is the host's; generated resolvers always
/// call with `use_pagination: true` and pass the output downstream
/// without second-guessing it.
///
/// Transformation is pure and synchronous; implementations must not
/// perform I/O.
pub trait ArgTransformer: Send + Sync {
    /// Transforms sub-field arguments into their effective form.
    fn transform(
        &self,
        pagination: Option<PaginationArgs>,
        filters: Option<Value>,
        options: TransformOptions<'_>,
    ) -> TransformedArgs;
}
