//! Navigation guard run before every route transition.
//!
//! Allow-listed routes pass unconditionally. Everything else requires a
//! locally present session; otherwise the transition is redirected to the
//! entry route and the requested target is dropped.

use std::sync::Arc;

use super::routes::{LOGIN_ROUTE, Route, RouteIntent, SETUP_PASSWORD_ROUTE};

/// Route names reachable without a session.
pub const PUBLIC_ROUTES: &[&str] = &[LOGIN_ROUTE, SETUP_PASSWORD_ROUTE];

/// Local, synchronous session-presence check consulted by the guard.
pub trait SessionCheck: Send + Sync {
    fn is_authenticated(&self) -> bool;
}

/// The two states the guard distinguishes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthState {
    Unauthenticated,
    Authenticated,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    Proceed,
    Redirect(Route),
}

#[derive(Clone)]
pub struct NavigationGuard {
    session: Arc<dyn SessionCheck>,
    entry: Route,
    public_routes: &'static [&'static str],
}

impl NavigationGuard {
    #[must_use]
    pub fn new(session: Arc<dyn SessionCheck>, entry: Route) -> Self {
        Self { session, entry, public_routes: PUBLIC_ROUTES }
    }

    #[must_use]
    pub fn state(&self) -> AuthState {
        if self.session.is_authenticated() {
            AuthState::Authenticated
        } else {
            AuthState::Unauthenticated
        }
    }

    #[must_use]
    pub fn is_public(&self, route_name: &str) -> bool {
        self.public_routes.iter().any(|name| *name == route_name)
    }

    #[must_use]
    pub fn check(&self, intent: &RouteIntent) -> GuardDecision {
        if self.is_public(intent.to.name) {
            return GuardDecision::Proceed;
        }
        match self.state() {
            AuthState::Authenticated => GuardDecision::Proceed,
            AuthState::Unauthenticated => {
                tracing::debug!(to = intent.to.name, entry = self.entry.name, "unauthenticated; redirecting");
                GuardDecision::Redirect(self.entry)
            }
        }
    }
}

#[cfg(test)]
#[path = "guard_test.rs"]
mod tests;
