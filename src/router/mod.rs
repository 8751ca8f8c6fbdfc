//! Client-side routing: route table, navigation guard, scroll restoration.
//!
//! SYSTEM CONTEXT
//! ==============
//! [`Router::navigate`] runs the guard on every transition. The router also
//! implements [`Navigator`], which is how the session-aware fetch issues its
//! forced redirect after a 401. Redirecting to the route that is already
//! current is a no-op, so racing expiries collapse into one transition.

pub mod guard;
pub mod routes;
pub mod scroll;

use std::sync::{Mutex, PoisonError};

use serde::Serialize;

use guard::{AuthState, GuardDecision, NavigationGuard};
use routes::{Route, RouteIntent, RouteTable, split_location};
use scroll::{ScrollPosition, ScrollTarget, scroll_behavior};

/// Side-effect channel for programmatic redirects.
pub trait Navigator: Send + Sync {
    /// Move to the named route. Returns `false` when nothing changed
    /// (unknown route, or already there).
    fn redirect(&self, route_name: &str) -> bool;
}

/// Outcome of one guarded transition.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Navigation {
    pub route: Route,
    /// Whether the guard replaced the requested target with the entry route.
    pub redirected: bool,
    pub scroll: ScrollTarget,
}

pub struct Router {
    table: RouteTable,
    guard: NavigationGuard,
    current: Mutex<Option<Route>>,
}

impl Router {
    #[must_use]
    pub fn new(table: RouteTable, guard: NavigationGuard) -> Self {
        Self { table, guard, current: Mutex::new(None) }
    }

    #[must_use]
    pub fn auth_state(&self) -> AuthState {
        self.guard.state()
    }

    #[must_use]
    pub fn current(&self) -> Option<Route> {
        *self.lock_current()
    }

    fn lock_current(&self) -> std::sync::MutexGuard<'_, Option<Route>> {
        self.current
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    /// Resolve `location`, run the guard, and commit the resulting route.
    pub fn navigate(&self, location: &str, saved_position: Option<ScrollPosition>) -> Navigation {
        let (path, hash) = split_location(location);
        let intent = RouteIntent {
            to: self.table.resolve(path),
            hash: hash.map(str::to_owned),
            from: self.current(),
            saved_position,
        };

        let (intent, redirected) = match self.guard.check(&intent) {
            GuardDecision::Proceed => (intent, false),
            GuardDecision::Redirect(entry) => {
                let redirected = RouteIntent { to: entry, hash: None, from: intent.from, saved_position: None };
                (redirected, true)
            }
        };

        let scroll = scroll_behavior(&intent);
        *self.lock_current() = Some(intent.to);
        tracing::debug!(location, to = intent.to.name, redirected, "navigation committed");

        Navigation { route: intent.to, redirected, scroll }
    }
}

impl Navigator for Router {
    fn redirect(&self, route_name: &str) -> bool {
        let Some(route) = self.table.by_name(route_name) else {
            tracing::warn!(route = route_name, "redirect to unknown route ignored");
            return false;
        };
        let mut current = self.lock_current();
        if *current == Some(route) {
            return false;
        }
        *current = Some(route);
        tracing::info!(route = route.name, "redirected");
        true
    }
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
