//! Content type registry types.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

use crate::{Error, Result};

/// One searchable content type, as configured by the host.
///
/// `name` is the exact-match lookup key used during resolution; the other
/// fields drive type and field naming in the generated schema surface.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentTypeDescriptor {
    /// Unique registry key, e.g. `api::article.article`.
    pub name: String,
    /// GraphQL type name of the underlying entity, e.g. `Article`.
    pub type_name: String,
    /// Plural form used for the resolver field name, e.g. `articles`.
    pub plural_name: String,
}

impl ContentTypeDescriptor {
    /// Creates a descriptor.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        type_name: impl Into<String>,
        plural_name: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            type_name: type_name.into(),
            plural_name: plural_name.into(),
        }
    }
}

/// Publication state filter for sub-field queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PublicationStatus {
    /// Only published entries.
    Published,
    /// Only draft entries.
    Draft,
}

impl PublicationStatus {
    /// Returns the status as a string slice.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Published => "published",
            Self::Draft => "draft",
        }
    }
}

impl fmt::Display for PublicationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Immutable snapshot of the configured content types.
///
/// Taken once at schema-construction time and shared with every resolver,
/// so a settings change never shifts behavior mid-request. Duplicate
/// `name`s are rejected at construction; downstream code can rely on
/// lookups being unambiguous.
#[derive(Debug, Clone)]
pub struct ContentTypeSet {
    descriptors: Arc<[ContentTypeDescriptor]>,
}

impl ContentTypeSet {
    /// Builds a snapshot from a descriptor list, preserving order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] if two descriptors share a `name`.
    pub fn new(descriptors: Vec<ContentTypeDescriptor>) -> Result<Self> {
        let mut seen = HashSet::new();
        for descriptor in &descriptors {
            if !seen.insert(descriptor.name.as_str()) {
                return Err(Error::InvalidInput(format!(
                    "duplicate content type name '{}'",
                    descriptor.name
                )));
            }
        }
        Ok(Self {
            descriptors: descriptors.into(),
        })
    }

    /// Looks up a descriptor by its exact registry name.
    #[must_use]
    pub fn find(&self, name: &str) -> Option<&ContentTypeDescriptor> {
        self.descriptors.iter().find(|d| d.name == name)
    }

    /// Iterates descriptors in their configured order.
    pub fn iter(&self) -> impl Iterator<Item = &ContentTypeDescriptor> {
        self.descriptors.iter()
    }

    /// Returns the descriptors as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[ContentTypeDescriptor] {
        &self.descriptors
    }

    /// Number of configured content types.
    #[must_use]
    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    /// Returns true if no content types are configured.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }
}
