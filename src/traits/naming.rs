//! Naming strategy trait and the default derivation.
//!
//! Every name in the generated surface (the per-type collection types,
//! the resolver fields, the argument types) flows through one strategy
//! object, so hosts with their own naming conventions can swap a single
//! implementation instead of post-processing the contributions.

use crate::models::ContentTypeDescriptor;
use crate::schema::{InputValueDef, TypeRef};

/// Options for building a sub-field's argument list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArgBuildOptions {
    /// Whether the content type holds many entries. Single-entry types
    /// take no pagination or filter arguments.
    pub multiple: bool,
}

impl Default for ArgBuildOptions {
    /// Collection kinds are the norm; defaults to `multiple: true`.
    fn default() -> Self {
        Self { multiple: true }
    }
}

/// Trait for schema naming strategies.
pub trait NamingStrategy: Send + Sync {
    /// Name of the host's response-collection type, e.g. `ArticleCollection`.
    fn collection_name(&self, descriptor: &ContentTypeDescriptor) -> String;

    /// Name of the resolver field added to `SearchResponse`, e.g. `articles`.
    fn field_name(&self, descriptor: &ContentTypeDescriptor) -> String;

    /// GraphQL type name of the underlying entity, e.g. `Article`.
    fn type_name(&self, descriptor: &ContentTypeDescriptor) -> String;

    /// Name of the entity's filters input type, e.g. `ArticleFiltersInput`.
    fn filters_input_name(&self, descriptor: &ContentTypeDescriptor) -> String;

    /// Name of the synthesized search collection type.
    ///
    /// Derived from [`collection_name`](Self::collection_name), so two
    /// types can only collide here by sharing a collection name.
    fn search_type_name(&self, descriptor: &ContentTypeDescriptor) -> String {
        format!("{}Search", self.collection_name(descriptor))
    }

    /// Builds the argument list of a sub-field.
    fn build_args(
        &self,
        descriptor: &ContentTypeDescriptor,
        options: ArgBuildOptions,
    ) -> Vec<InputValueDef>;
}

/// Default naming derivation.
///
/// Derives everything from the descriptor: `<TypeName>Collection`,
/// `<TypeName>FiltersInput`, and the plural name as the field name. The
/// standard argument set is `pagination`, `filters`, `locale`, `status`,
/// with the first two dropped for single-entry types.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultNaming;

impl NamingStrategy for DefaultNaming {
    fn collection_name(&self, descriptor: &ContentTypeDescriptor) -> String {
        format!("{}Collection", descriptor.type_name)
    }

    fn field_name(&self, descriptor: &ContentTypeDescriptor) -> String {
        descriptor.plural_name.clone()
    }

    fn type_name(&self, descriptor: &ContentTypeDescriptor) -> String {
        descriptor.type_name.clone()
    }

    fn filters_input_name(&self, descriptor: &ContentTypeDescriptor) -> String {
        format!("{}FiltersInput", descriptor.type_name)
    }

    fn build_args(
        &self,
        descriptor: &ContentTypeDescriptor,
        options: ArgBuildOptions,
    ) -> Vec<InputValueDef> {
        let mut args = Vec::with_capacity(4);
        if options.multiple {
            args.push(InputValueDef::new(
                "pagination",
                TypeRef::named("PaginationArg"),
            ));
            args.push(InputValueDef::new(
                "filters",
                TypeRef::named(self.filters_input_name(descriptor)),
            ));
        }
        args.push(InputValueDef::new("locale", TypeRef::named("String")));
        args.push(InputValueDef::new(
            "status",
            TypeRef::named("PublicationStatus"),
        ));
        args
    }
}
