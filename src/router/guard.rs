//! Pre-navigation access control.
//!
//! `RouteGuard` decides, before a navigation completes, whether the
//! destination is reachable given the current session state. It is a pure
//! decision function over the static route table and
//! `SessionStore::is_authenticated()`; it never mutates session state and
//! never performs a network call.

use std::sync::Arc;

use crate::auth::SessionStore;

/// Path of the login view.
pub const LOGIN_PATH: &str = "/login";

/// Default landing view for an authenticated session.
pub const DEFAULT_LANDING_PATH: &str = "/dashboard/overview";

/// A statically declared route with its access-control marker.
///
/// A route entry covers its own path and everything nested below it, so
/// `/dashboard` marks the whole authenticated subtree.
#[derive(Debug, Clone, Copy)]
pub struct Route {
    pub path: &'static str,
    pub requires_auth: bool,
}

const ROUTES: &[Route] = &[
    Route { path: "/login", requires_auth: false },
    Route { path: "/register", requires_auth: false },
    Route { path: "/verify-email", requires_auth: false },
    Route { path: "/forgot-password", requires_auth: false },
    Route { path: "/reset-password", requires_auth: false },
    Route { path: "/dashboard", requires_auth: true },
];

/// Result of a guard check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardOutcome {
    /// Let the navigation proceed unchanged.
    Allow,
    /// Navigate somewhere else instead.
    Redirect(String),
}

/// Build the login redirect for an intercepted destination, carrying the
/// full original target (path + query + fragment) in the `redirect`
/// parameter so it can be resumed after re-authentication.
pub fn login_redirect(from: &str) -> String {
    format!("{}?redirect={}", LOGIN_PATH, urlencoding::encode(from))
}

/// Strip query and fragment, leaving the path for route matching.
fn path_of(target: &str) -> &str {
    let end = target.find(['?', '#']).unwrap_or(target.len());
    &target[..end]
}

fn requires_auth(path: &str) -> bool {
    ROUTES.iter().any(|route| {
        route.requires_auth
            && (path == route.path
                || path
                    .strip_prefix(route.path)
                    .is_some_and(|rest| rest.starts_with('/')))
    })
}

pub struct RouteGuard {
    session: Arc<SessionStore>,
}

impl RouteGuard {
    pub fn new(session: Arc<SessionStore>) -> Self {
        Self { session }
    }

    /// Decide whether `target` is reachable right now.
    ///
    /// Rules, evaluated in order:
    /// 1. Destination requires auth and the session is anonymous: redirect
    ///    to the login view with the destination in `redirect`.
    /// 2. Destination is the login view and the session is authenticated:
    ///    redirect to the default landing view.
    /// 3. Otherwise allow.
    pub fn check(&self, target: &str) -> GuardOutcome {
        let path = path_of(target);
        let authenticated = self.session.is_authenticated();

        if requires_auth(path) && !authenticated {
            return GuardOutcome::Redirect(login_redirect(target));
        }
        if path == LOGIN_PATH && authenticated {
            return GuardOutcome::Redirect(DEFAULT_LANDING_PATH.to_string());
        }
        GuardOutcome::Allow
    }
}
