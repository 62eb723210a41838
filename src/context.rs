//! Per-request context handed through the resolver chain.
//!
//! The schema layer never reaches into ambient state. Whatever the host
//! framework knows about the caller (authentication payload, transport
//! status line) is captured into a [`RequestContext`] value up front and
//! passed down explicitly, which keeps resolvers trivially testable.

use serde::Serialize;

/// Authentication payload extracted from the host request.
///
/// Carried opaquely: the schema layer forwards it to the match engine and
/// response shaper but never interprets it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AuthContext {
    /// Authenticated principal, if the request carried one.
    pub subject: Option<String>,
    /// Scopes or roles granted to the principal.
    pub scopes: Vec<String>,
}

impl AuthContext {
    /// Creates an authenticated context for `subject` with no scopes.
    #[must_use]
    pub fn for_subject(subject: impl Into<String>) -> Self {
        Self {
            subject: Some(subject.into()),
            scopes: Vec::new(),
        }
    }

    /// Adds a granted scope.
    #[must_use]
    pub fn with_scope(mut self, scope: impl Into<String>) -> Self {
        self.scopes.push(scope.into());
        self
    }
}

/// Snapshot of the host request a resolver runs inside.
#[derive(Debug, Clone, Default)]
pub struct RequestContext {
    /// Authentication payload forwarded to collaborators.
    pub auth: AuthContext,
    /// Transport status line, surfaced verbatim when shaping fails with
    /// no response of its own.
    pub response_message: String,
}

impl RequestContext {
    /// Creates an anonymous context with an empty status line.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the authentication payload.
    #[must_use]
    pub fn with_auth(mut self, auth: AuthContext) -> Self {
        self.auth = auth;
        self
    }

    /// Sets the transport status line.
    #[must_use]
    pub fn with_response_message(mut self, message: impl Into<String>) -> Self {
        self.response_message = message.into();
        self
    }
}
