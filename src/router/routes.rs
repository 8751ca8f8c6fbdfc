//! Named routes and path resolution.
//!
//! Views are rendered elsewhere; the table only carries what the guard and
//! the redirect path need: names, paths, and the redirect rules.

use serde::Serialize;

use super::scroll::ScrollPosition;

pub const LOGIN_ROUTE: &str = "login";
pub const SIGNUP_ROUTE: &str = "signup";
pub const SETUP_PASSWORD_ROUTE: &str = "setup-password";
pub const HOME_ROUTE: &str = "home";
pub const USER_VNI_ROUTE: &str = "user-vni";

/// A named destination.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Route {
    pub name: &'static str,
    pub path: &'static str,
}

/// The navigation target under evaluation, scoped to one transition.
#[derive(Clone, Debug, PartialEq)]
pub struct RouteIntent {
    pub to: Route,
    /// In-page anchor from the location, including the leading `#`.
    pub hash: Option<String>,
    pub from: Option<Route>,
    /// Position saved by history navigation (back/forward), if any.
    pub saved_position: Option<ScrollPosition>,
}

/// Static route table with path redirects and a catch-all.
#[derive(Clone, Debug)]
pub struct RouteTable {
    routes: Vec<Route>,
    redirects: Vec<(&'static str, Route)>,
    fallback: Route,
}

impl RouteTable {
    /// Routes of the detection dashboard.
    ///
    /// `/` and `/auth` redirect to login, as does any unknown path.
    #[must_use]
    pub fn dashboard() -> Self {
        let login = Route { name: LOGIN_ROUTE, path: "/auth/login" };
        Self {
            routes: vec![
                Route { name: HOME_ROUTE, path: "/home" },
                Route { name: USER_VNI_ROUTE, path: "/home/vni" },
                login,
                Route { name: SIGNUP_ROUTE, path: "/auth/signup" },
                Route { name: SETUP_PASSWORD_ROUTE, path: "/auth/setup-password" },
            ],
            redirects: vec![("/", login), ("/auth", login)],
            fallback: login,
        }
    }

    /// Public entry route every unauthenticated attempt lands on.
    #[must_use]
    pub fn entry(&self) -> Route {
        self.fallback
    }

    /// Look up a route by name.
    #[must_use]
    pub fn by_name(&self, name: &str) -> Option<Route> {
        self.routes.iter().copied().find(|r| r.name == name)
    }

    /// Resolve a path (query and hash already stripped) to a route,
    /// following redirects and the catch-all.
    #[must_use]
    pub fn resolve(&self, path: &str) -> Route {
        let path = normalize_path(path);
        if let Some(route) = self.routes.iter().copied().find(|r| r.path == path) {
            return route;
        }
        self.redirects
            .iter()
            .find(|(from, _)| *from == path)
            .map_or(self.fallback, |(_, to)| *to)
    }
}

/// Split a location into its path and optional `#anchor`, dropping any
/// query string.
#[must_use]
pub fn split_location(location: &str) -> (&str, Option<&str>) {
    let (rest, hash) = match location.find('#') {
        Some(idx) => (&location[..idx], Some(&location[idx..])),
        None => (location, None),
    };
    let path = rest.split_once('?').map_or(rest, |(path, _)| path);
    (path, hash.filter(|h| h.len() > 1))
}

fn normalize_path(path: &str) -> &str {
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() { "/" } else { trimmed }
}

#[cfg(test)]
#[path = "routes_test.rs"]
mod tests;
