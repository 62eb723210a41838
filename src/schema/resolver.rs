//! Field resolvers for the generated search surface.
//!
//! Resolution fans out: the top-level resolver does nothing but stage a
//! parent value, and every per-content-type sub-field independently runs
//! the full match-shape-paginate pipeline against that shared parent.
//! Sub-fields own no mutable state and cache nothing, so sibling fields
//! can resolve concurrently in any order.

use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use tracing::instrument;

use crate::context::RequestContext;
use crate::models::{
    ContentTypeDescriptor, ContentTypeSearchArgs, ContentTypeSet, SearchParent, SearchRequest,
    SearchResultCollection,
};
use crate::pagination::compute_page_info;
use crate::traits::{ArgTransformer, MatchEngine, MatchQuery, ResponseShaper, TransformOptions};
use crate::{Error, Result};

/// Trait for typed field resolvers.
///
/// The associated types pin a resolver to its position in the schema:
/// the parent value it reads, the argument shape it decodes, and the
/// output it produces. Wiring a resolver under the wrong parent type
/// fails at compile time instead of at query time.
#[async_trait]
pub trait FieldResolver: Send + Sync {
    /// Parent value the field hangs off.
    type Parent: Send + Sync;
    /// Decoded field arguments.
    type Args: Send;
    /// Resolved output.
    type Output;

    /// Resolves one field invocation.
    ///
    /// # Errors
    ///
    /// Returns an error when resolution fails; hosts surface it as a
    /// field error on their side of the seam.
    async fn resolve(
        &self,
        parent: &Self::Parent,
        args: Self::Args,
        ctx: &RequestContext,
    ) -> Result<Self::Output>;
}

/// Resolver of the top-level `Query.search` field.
///
/// Pure hand-off: copies the query, the inherited locale, and the
/// caller's auth payload into the parent value every sub-field reads.
/// No matching happens until a sub-field is selected.
#[derive(Debug, Clone, Copy, Default)]
pub struct SearchQueryResolver;

#[async_trait]
impl FieldResolver for SearchQueryResolver {
    type Parent = ();
    type Args = SearchRequest;
    type Output = SearchParent;

    async fn resolve(
        &self,
        _parent: &(),
        args: SearchRequest,
        ctx: &RequestContext,
    ) -> Result<SearchParent> {
        Ok(SearchParent::new(args.query, args.locale, ctx.auth.clone()))
    }
}

/// Resolver of one per-content-type sub-field on `SearchResponse`.
///
/// Produced by the registrar with its descriptor and the shared snapshot
/// baked in. `None` output means the field resolves to null: the content
/// type was absent from the snapshot, which is configuration drift, not
/// a request failure.
pub struct CollectionResolver {
    content_type: ContentTypeDescriptor,
    content_types: ContentTypeSet,
    engine: Arc<dyn MatchEngine>,
    transformer: Arc<dyn ArgTransformer>,
    shaper: Arc<dyn ResponseShaper>,
}

impl CollectionResolver {
    pub(crate) fn new(
        content_type: ContentTypeDescriptor,
        content_types: ContentTypeSet,
        engine: Arc<dyn MatchEngine>,
        transformer: Arc<dyn ArgTransformer>,
        shaper: Arc<dyn ResponseShaper>,
    ) -> Self {
        Self {
            content_type,
            content_types,
            engine,
            transformer,
            shaper,
        }
    }

    /// The content type this resolver serves.
    #[must_use]
    pub const fn content_type(&self) -> &ContentTypeDescriptor {
        &self.content_type
    }
}

impl fmt::Debug for CollectionResolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CollectionResolver")
            .field("content_type", &self.content_type.name)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl FieldResolver for CollectionResolver {
    type Parent = SearchParent;
    type Args = ContentTypeSearchArgs;
    type Output = Option<SearchResultCollection>;

    #[instrument(
        skip(self, parent, args, ctx),
        fields(content_type = %self.content_type.name)
    )]
    async fn resolve(
        &self,
        parent: &SearchParent,
        args: ContentTypeSearchArgs,
        ctx: &RequestContext,
    ) -> Result<Option<SearchResultCollection>> {
        let locale = parent.effective_locale(args.locale.as_deref());

        let transformed = self.transformer.transform(
            args.pagination,
            args.filters,
            TransformOptions {
                content_type: &self.content_type,
                use_pagination: true,
            },
        );

        // Re-resolve against the snapshot; a miss means the field exists
        // but its content type does not, and the field degrades to null.
        let Some(content_type) = self.content_types.find(&self.content_type.name) else {
            tracing::warn!(
                content_type = %self.content_type.name,
                "Content type missing from snapshot, resolving to empty"
            );
            metrics::counter!("search_lookup_miss_total").increment(1);
            return Ok(None);
        };

        let matches = self
            .engine
            .get_matches(MatchQuery {
                content_type,
                query: &parent.query,
                filters: transformed.filters.as_ref(),
                populate: None,
                locale: locale.as_deref(),
                status: args.status,
            })
            .await?;

        // The full ranked set, not the windowed page, is the total.
        let total = matches.len();

        let shaped = self
            .shaper
            .shape(matches, content_type, &parent.auth, transformed.window())
            .await?;

        let Some(shaped) = shaped else {
            metrics::counter!("search_resolution_failures_total").increment(1);
            return Err(Error::EmptyResponse {
                message: ctx.response_message.clone(),
            });
        };

        // Pagination math trusts the window the shaper echoed, which may
        // differ from the requested one.
        let window = shaped.info.args;
        let page_info = compute_page_info(total, window.start, window.limit);

        tracing::debug!(
            content_type = %self.content_type.name,
            total,
            page = page_info.page,
            page_size = page_info.page_size,
            "Resolved search collection"
        );
        metrics::counter!("search_resolutions_total").increment(1);

        Ok(Some(SearchResultCollection {
            nodes: shaped.nodes,
            page_info,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::AuthContext;
    use crate::models::{MatchSet, PaginationArgs, PaginationWindow, ResponseInfo, ShapedResponse};
    use crate::models::{RankedMatch, TransformedArgs};
    use serde_json::{Value, json};
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

    struct FlagEngine {
        called: AtomicBool,
    }

    #[async_trait]
    impl MatchEngine for FlagEngine {
        async fn get_matches(&self, _query: MatchQuery<'_>) -> Result<MatchSet> {
            self.called.store(true, Ordering::SeqCst);
            Ok(MatchSet::new(vec![RankedMatch::new(json!({"id": 1}), 1.0)]))
        }
    }

    struct CountingTransformer {
        calls: AtomicUsize,
    }

    impl ArgTransformer for CountingTransformer {
        fn transform(
            &self,
            _pagination: Option<PaginationArgs>,
            filters: Option<Value>,
            _options: TransformOptions<'_>,
        ) -> TransformedArgs {
            self.calls.fetch_add(1, Ordering::SeqCst);
            TransformedArgs {
                start: 0,
                limit: 10,
                filters,
            }
        }
    }

    struct EchoShaper;

    #[async_trait]
    impl ResponseShaper for EchoShaper {
        async fn shape(
            &self,
            matches: MatchSet,
            _content_type: &ContentTypeDescriptor,
            _auth: &AuthContext,
            window: PaginationWindow,
        ) -> Result<Option<ShapedResponse>> {
            Ok(Some(ShapedResponse {
                nodes: matches.into_records(),
                info: ResponseInfo { args: window },
            }))
        }
    }

    #[tokio::test]
    async fn test_snapshot_miss_resolves_to_none() {
        let snapshot = ContentTypeSet::new(vec![ContentTypeDescriptor::new(
            "api::article.article",
            "Article",
            "articles",
        )])
        .unwrap();
        let engine = Arc::new(FlagEngine {
            called: AtomicBool::new(false),
        });
        let transformer = Arc::new(CountingTransformer {
            calls: AtomicUsize::new(0),
        });

        // A resolver whose descriptor is absent from the snapshot.
        let resolver = CollectionResolver::new(
            ContentTypeDescriptor::new("api::page.page", "Page", "pages"),
            snapshot,
            engine.clone(),
            transformer.clone(),
            Arc::new(EchoShaper),
        );

        let parent = SearchParent::new("q", None, AuthContext::default());
        let resolved = resolver
            .resolve(&parent, ContentTypeSearchArgs::default(), &RequestContext::new())
            .await
            .unwrap();

        assert!(resolved.is_none());
        assert!(!engine.called.load(Ordering::SeqCst));
        // Arguments are transformed before the lookup happens.
        assert_eq!(transformer.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_resolver_resolves_through_snapshot_hit() {
        let descriptor = ContentTypeDescriptor::new("api::article.article", "Article", "articles");
        let snapshot = ContentTypeSet::new(vec![descriptor.clone()]).unwrap();
        let resolver = CollectionResolver::new(
            descriptor,
            snapshot,
            Arc::new(FlagEngine {
                called: AtomicBool::new(false),
            }),
            Arc::new(CountingTransformer {
                calls: AtomicUsize::new(0),
            }),
            Arc::new(EchoShaper),
        );

        let parent = SearchParent::new("q", None, AuthContext::default());
        let collection = resolver
            .resolve(&parent, ContentTypeSearchArgs::default(), &RequestContext::new())
            .await
            .unwrap()
            .unwrap();

        assert_eq!(collection.page_info.total, 1);
        assert_eq!(collection.nodes.len(), 1);
    }

    #[tokio::test]
    async fn test_query_resolver_stages_parent() {
        let ctx = RequestContext::new().with_auth(AuthContext::for_subject("caller"));
        let request = SearchRequest::new("weather").with_locale("en");

        let parent = SearchQueryResolver
            .resolve(&(), request, &ctx)
            .await
            .unwrap();

        assert_eq!(parent.query, "weather");
        assert_eq!(parent.locale.as_deref(), Some("en"));
        assert_eq!(parent.auth.subject.as_deref(), Some("caller"));
    }

    #[tokio::test]
    async fn test_query_resolver_keeps_absent_locale() {
        let parent = SearchQueryResolver
            .resolve(&(), SearchRequest::new("q"), &RequestContext::new())
            .await
            .unwrap();

        assert_eq!(parent.locale, None);
    }
}
