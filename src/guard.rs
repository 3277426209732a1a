//! # Route Guard
//!
//! Gates navigation to the admin views on the presence of a stored token.
//!
//! The guard never talks to the network and never inspects the token: a non-empty
//! value under [`TOKEN_KEY`](crate::token_store::TOKEN_KEY) is enough. It is meant to
//! be consulted on every navigation.

use crate::token_store::TokenStore;
use std::sync::Arc;
use tracing::{debug, warn};

/// The views of the front end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    Registration,
    Login,
    Members,
    Admin,
    AddProduct,
    /// Any path the route table does not know.
    Other(String),
}

impl Route {
    pub fn from_path(path: &str) -> Self {
        let trimmed = match path.trim_end_matches('/') {
            "" => "/",
            p => p,
        };
        match trimmed {
            "/" => Route::Home,
            "/registration" => Route::Registration,
            "/login" => Route::Login,
            "/members" => Route::Members,
            "/admin" => Route::Admin,
            "/admin/add-product" => Route::AddProduct,
            other => Route::Other(other.to_string()),
        }
    }

    pub fn path(&self) -> &str {
        match self {
            Route::Home => "/",
            Route::Registration => "/registration",
            Route::Login => "/login",
            Route::Members => "/members",
            Route::Admin => "/admin",
            Route::AddProduct => "/admin/add-product",
            Route::Other(path) => path,
        }
    }

    /// Whether the view is wrapped by the guard.
    pub fn requires_auth(&self) -> bool {
        matches!(self, Route::Admin | Route::AddProduct)
    }
}

/// Outcome of a navigation check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardDecision {
    /// Render the requested view.
    Allow(Route),
    /// Send the user to `to` instead.
    Redirect { to: Route },
}

impl GuardDecision {
    pub fn is_allowed(&self) -> bool {
        matches!(self, GuardDecision::Allow(_))
    }
}

/// Pure decision: protected routes need a non-empty token.
pub fn decide(route: Route, token: Option<&str>) -> GuardDecision {
    let logged_in = token.is_some_and(|t| !t.is_empty());
    if route.requires_auth() && !logged_in {
        GuardDecision::Redirect { to: Route::Login }
    } else {
        GuardDecision::Allow(route)
    }
}

/// Route guard bound to a token store.
#[derive(Clone)]
pub struct RouteGuard {
    tokens: Arc<dyn TokenStore>,
}

impl RouteGuard {
    pub fn new(tokens: Arc<dyn TokenStore>) -> Self {
        Self { tokens }
    }

    /// Checks `route` against the token currently stored.
    ///
    /// An unreadable store is treated as logged out.
    pub fn check(&self, route: Route) -> GuardDecision {
        let token = match self.tokens.token() {
            Ok(token) => token,
            Err(e) => {
                warn!(error = %e, "Token store unreadable, treating as logged out");
                None
            }
        };
        let decision = decide(route, token.as_deref());
        debug!(?decision, "Route checked");
        decision
    }

    pub fn navigate(&self, path: &str) -> GuardDecision {
        self.check(Route::from_path(path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token_store::{MemoryTokenStore, TOKEN_KEY};

    #[test]
    fn test_route_table() {
        assert_eq!(Route::from_path("/"), Route::Home);
        assert_eq!(Route::from_path(""), Route::Home);
        assert_eq!(Route::from_path("/admin/"), Route::Admin);
        assert_eq!(Route::from_path("/admin/add-product"), Route::AddProduct);
        assert_eq!(Route::from_path("/nowhere"), Route::Other("/nowhere".into()));
        assert_eq!(Route::AddProduct.path(), "/admin/add-product");
        assert!(!Route::Members.requires_auth());
    }

    #[test]
    fn test_decide_redirects_iff_token_missing() {
        for route in [Route::Admin, Route::AddProduct] {
            assert_eq!(decide(route.clone(), None), GuardDecision::Redirect { to: Route::Login });
            assert_eq!(decide(route.clone(), Some("")), GuardDecision::Redirect { to: Route::Login });
            assert_eq!(decide(route.clone(), Some("t")), GuardDecision::Allow(route));
        }
        for route in [Route::Home, Route::Login, Route::Registration, Route::Members] {
            assert_eq!(decide(route.clone(), None), GuardDecision::Allow(route));
        }
    }

    #[test]
    fn test_guard_reevaluates_each_navigation() {
        let tokens = Arc::new(MemoryTokenStore::new());
        let guard = RouteGuard::new(tokens.clone());

        assert!(!guard.navigate("/admin").is_allowed());

        tokens.set(TOKEN_KEY, "abc").unwrap();
        assert_eq!(guard.navigate("/admin"), GuardDecision::Allow(Route::Admin));

        tokens.remove(TOKEN_KEY).unwrap();
        assert_eq!(
            guard.navigate("/admin/add-product"),
            GuardDecision::Redirect { to: Route::Login }
        );
    }
}
