//! Schema extension registrar.
//!
//! Registration runs once, at schema-construction time, and produces a
//! flat contribution list the host applies to its schema builder:
//!
//! ```text
//! for each content type (reverse registration order):
//!     <pluralName>(...) on SearchResponse   resolver field
//!     <CollectionName>Search                object type
//! search(query, locale) on Query            shared entry field
//! ```
//!
//! The registrar snapshots its settings up front; nothing is read live
//! at query time, so registration is deterministic and repeatable.

mod contribution;
mod resolver;

pub use contribution::{
    CollectionTypeDef, FieldDef, InputValueDef, PAGINATION_TYPE, SEARCH_RESPONSE_TYPE,
    SchemaContribution, TypeRef,
};
pub use resolver::{CollectionResolver, FieldResolver, SearchQueryResolver};

use std::sync::Arc;

use tracing::instrument;

use crate::Result;
use crate::models::ContentTypeSet;
use crate::traits::{
    ArgBuildOptions, ArgTransformer, DefaultNaming, MatchEngine, NamingStrategy, ResponseShaper,
    SettingsStore,
};

/// Builds the search surface for a configured set of content types.
///
/// Collaborators are injected once and shared into every resolver the
/// registrar produces.
pub struct SchemaRegistrar {
    content_types: ContentTypeSet,
    engine: Arc<dyn MatchEngine>,
    transformer: Arc<dyn ArgTransformer>,
    shaper: Arc<dyn ResponseShaper>,
    naming: Arc<dyn NamingStrategy>,
}

impl SchemaRegistrar {
    /// Creates a registrar with the default naming strategy.
    #[must_use]
    pub fn new(
        content_types: ContentTypeSet,
        engine: Arc<dyn MatchEngine>,
        transformer: Arc<dyn ArgTransformer>,
        shaper: Arc<dyn ResponseShaper>,
    ) -> Self {
        Self {
            content_types,
            engine,
            transformer,
            shaper,
            naming: Arc::new(DefaultNaming),
        }
    }

    /// Creates a registrar by snapshotting a settings store.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`](crate::Error::InvalidInput) if the
    /// store holds duplicate content type names.
    pub fn from_settings(
        store: &dyn SettingsStore,
        engine: Arc<dyn MatchEngine>,
        transformer: Arc<dyn ArgTransformer>,
        shaper: Arc<dyn ResponseShaper>,
    ) -> Result<Self> {
        let content_types = ContentTypeSet::new(store.content_types())?;
        Ok(Self::new(content_types, engine, transformer, shaper))
    }

    /// Replaces the naming strategy.
    #[must_use]
    pub fn with_naming(mut self, naming: Arc<dyn NamingStrategy>) -> Self {
        self.naming = naming;
        self
    }

    /// The snapshot this registrar was built over.
    #[must_use]
    pub const fn content_types(&self) -> &ContentTypeSet {
        &self.content_types
    }

    /// Builds every contribution of the search surface.
    ///
    /// Pure over the snapshot: repeated calls produce the same names in
    /// the same order. Per-type contributions come first, in reverse
    /// registration order with each resolver field directly before its
    /// collection type; the shared `Query.search` field comes last.
    #[instrument(skip(self), fields(content_types = self.content_types.len()))]
    #[must_use]
    pub fn register(&self) -> Vec<SchemaContribution> {
        let mut contributions = Vec::with_capacity(self.content_types.len() * 2 + 1);

        for descriptor in self.content_types.as_slice().iter().rev() {
            let field = FieldDef::new(
                self.naming.field_name(descriptor),
                TypeRef::named(self.naming.search_type_name(descriptor)),
            )
            .with_args(
                self.naming
                    .build_args(descriptor, ArgBuildOptions { multiple: true }),
            );

            tracing::debug!(
                content_type = %descriptor.name,
                field = %field.name,
                collection_type = %self.naming.search_type_name(descriptor),
                "Registered search field"
            );

            contributions.push(SchemaContribution::SearchField {
                field,
                resolver: CollectionResolver::new(
                    descriptor.clone(),
                    self.content_types.clone(),
                    Arc::clone(&self.engine),
                    Arc::clone(&self.transformer),
                    Arc::clone(&self.shaper),
                ),
            });
            contributions.push(SchemaContribution::CollectionType(CollectionTypeDef::new(
                self.naming.search_type_name(descriptor),
                self.naming.type_name(descriptor),
            )));
        }

        contributions.push(SchemaContribution::QueryField {
            field: FieldDef::new("search", TypeRef::named(SEARCH_RESPONSE_TYPE))
                .with_arg(
                    InputValueDef::new("query", TypeRef::named("String").non_null())
                        .with_description("The query string by which the models are searched"),
                )
                .with_arg(
                    InputValueDef::new("locale", TypeRef::named("String"))
                        .with_description("The locale by which to filter the models"),
                ),
            resolver: SearchQueryResolver,
        });

        tracing::info!(
            content_types = self.content_types.len(),
            contributions = contributions.len(),
            "Registered search schema surface"
        );

        contributions
    }
}
