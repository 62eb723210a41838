//! Schema contribution types.
//!
//! A contribution is one addition the registrar asks the host schema
//! builder to make: a synthesized object type, a resolver field on the
//! shared response type, or the top-level query field. Contributions are
//! plain values so hosts can translate them into whatever builder API
//! they use, and tests can audit the produced surface directly.

use std::fmt;

use super::resolver::{CollectionResolver, SearchQueryResolver};

/// Name of the shared response type every sub-field hangs off.
pub const SEARCH_RESPONSE_TYPE: &str = "SearchResponse";

/// Name of the host's pagination summary type.
pub const PAGINATION_TYPE: &str = "Pagination";

/// Reference to a GraphQL type, with list and non-null wrappers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeRef {
    /// A named type, e.g. `Article`.
    Named(String),
    /// A non-null wrapper, e.g. `Article!`.
    NonNull(Box<TypeRef>),
    /// A list wrapper, e.g. `[Article]`.
    List(Box<TypeRef>),
}

impl TypeRef {
    /// References a named type.
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self::Named(name.into())
    }

    /// Wraps this reference as non-null.
    #[must_use]
    pub fn non_null(self) -> Self {
        Self::NonNull(Box::new(self))
    }

    /// Wraps this reference in a list.
    #[must_use]
    pub fn list(self) -> Self {
        Self::List(Box::new(self))
    }
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Named(name) => write!(f, "{name}"),
            Self::NonNull(inner) => write!(f, "{inner}!"),
            Self::List(inner) => write!(f, "[{inner}]"),
        }
    }
}

/// One argument of a contributed field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputValueDef {
    /// Argument name.
    pub name: String,
    /// Argument type.
    pub ty: TypeRef,
    /// Optional description surfaced in the host schema.
    pub description: Option<String>,
}

impl InputValueDef {
    /// Creates an argument without a description.
    #[must_use]
    pub fn new(name: impl Into<String>, ty: TypeRef) -> Self {
        Self {
            name: name.into(),
            ty,
            description: None,
        }
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// One field contributed to an object type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDef {
    /// Field name.
    pub name: String,
    /// Field output type.
    pub ty: TypeRef,
    /// Field arguments, in declaration order.
    pub args: Vec<InputValueDef>,
}

impl FieldDef {
    /// Creates a field with no arguments.
    #[must_use]
    pub fn new(name: impl Into<String>, ty: TypeRef) -> Self {
        Self {
            name: name.into(),
            ty,
            args: Vec::new(),
        }
    }

    /// Appends one argument.
    #[must_use]
    pub fn with_arg(mut self, arg: InputValueDef) -> Self {
        self.args.push(arg);
        self
    }

    /// Replaces the argument list.
    #[must_use]
    pub fn with_args(mut self, args: Vec<InputValueDef>) -> Self {
        self.args = args;
        self
    }
}

/// A synthesized per-content-type collection object type.
///
/// Every instance carries the same two fields: a non-null list of
/// non-null nodes, and a non-null pagination summary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectionTypeDef {
    /// Type name, e.g. `ArticleCollectionSearch`.
    pub name: String,
    /// Node type name, e.g. `Article`.
    pub node_type: String,
}

impl CollectionTypeDef {
    /// Creates a collection type definition.
    #[must_use]
    pub fn new(name: impl Into<String>, node_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            node_type: node_type.into(),
        }
    }

    /// The two fields every search collection exposes.
    #[must_use]
    pub fn fields(&self) -> Vec<FieldDef> {
        vec![
            FieldDef::new(
                "nodes",
                TypeRef::named(&self.node_type).non_null().list().non_null(),
            ),
            FieldDef::new("pageInfo", TypeRef::named(PAGINATION_TYPE).non_null()),
        ]
    }
}

/// One addition to the host schema.
#[derive(Debug)]
pub enum SchemaContribution {
    /// A synthesized collection type to define.
    CollectionType(CollectionTypeDef),
    /// A resolver field to add on [`SEARCH_RESPONSE_TYPE`].
    SearchField {
        /// The field to add.
        field: FieldDef,
        /// Its resolver.
        resolver: CollectionResolver,
    },
    /// The single `search` field to add on `Query`.
    QueryField {
        /// The field to add.
        field: FieldDef,
        /// Its resolver.
        resolver: SearchQueryResolver,
    },
}

impl SchemaContribution {
    /// Name of the type or field this contribution adds.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::CollectionType(def) => &def.name,
            Self::SearchField { field, .. } | Self::QueryField { field, .. } => &field.name,
        }
    }

    /// The type this contribution extends, or `None` for new types.
    #[must_use]
    pub const fn parent_type(&self) -> Option<&'static str> {
        match self {
            Self::CollectionType(_) => None,
            Self::SearchField { .. } => Some(SEARCH_RESPONSE_TYPE),
            Self::QueryField { .. } => Some("Query"),
        }
    }

    /// The contributed field, for field contributions.
    #[must_use]
    pub const fn field(&self) -> Option<&FieldDef> {
        match self {
            Self::CollectionType(_) => None,
            Self::SearchField { field, .. } | Self::QueryField { field, .. } => Some(field),
        }
    }
}
