//! Settings store trait.

use crate::models::ContentTypeDescriptor;

/// Trait for reading the searchable content type registry.
///
/// The registrar reads the store exactly once, at schema-construction
/// time, and bakes the result into an immutable snapshot. Resolvers
/// never see the store again, so implementations do not need to be
/// consistent across calls.
pub trait SettingsStore: Send + Sync {
    /// Returns the configured content types, in registration order.
    fn content_types(&self) -> Vec<ContentTypeDescriptor>;
}

/// In-memory settings store over a literal descriptor list.
#[derive(Debug, Clone, Default)]
pub struct StaticSettings {
    content_types: Vec<ContentTypeDescriptor>,
}

impl StaticSettings {
    /// Creates a store over the given descriptors.
    #[must_use]
    pub const fn new(content_types: Vec<ContentTypeDescriptor>) -> Self {
        Self { content_types }
    }
}

impl SettingsStore for StaticSettings {
    fn content_types(&self) -> Vec<ContentTypeDescriptor> {
        self.content_types.clone()
    }
}
