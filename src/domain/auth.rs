//! Access gating primitives for protected navigation.
//!
//! The decision itself is a pure function over "does a token exist right
//! now"; the token source is abstracted behind [`AuthStore`] so the ambient
//! session store can be swapped out in tests.

/// Session key under which the opaque access token is stored.
pub const ACCESS_TOKEN_KEY: &str = "access_token";

/// Route unauthenticated visitors are sent to.
pub const LOGIN_ROUTE: &str = "/login";

/// Capability that answers whether an access token is currently present.
///
/// Presence only: the token value is never read or validated here.
pub trait AuthStore {
    fn has_token(&self) -> bool;
}

/// The navigation a visitor asked for.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RouteDescriptor {
    path: String,
}

impl RouteDescriptor {
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &str {
        &self.path
    }
}

/// Outcome of evaluating a protected navigation attempt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NavigationDecision {
    /// Send the visitor to `target` instead of the requested route.
    Redirect { target: String },
    /// Let the requested route render unchanged.
    Render(RouteDescriptor),
}

/// Decides whether a protected navigation may proceed.
///
/// Evaluated anew on every navigation attempt; a missing token is a normal
/// branch, not an error.
pub fn evaluate(is_authenticated: bool, route: RouteDescriptor) -> NavigationDecision {
    if !is_authenticated {
        return NavigationDecision::Redirect {
            target: LOGIN_ROUTE.to_string(),
        };
    }
    NavigationDecision::Render(route)
}
