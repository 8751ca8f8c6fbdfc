//! Wiring for the session layer: one store shared by the authenticator,
//! the protected fetch, and the guarded router.

use std::sync::Arc;

use crate::auth::Authenticator;
use crate::config::ClientConfig;
use crate::fetch::SessionAwareFetch;
use crate::net::endpoints::Endpoints;
use crate::net::pipeline::RequestPipeline;
use crate::router::Router;
use crate::router::guard::NavigationGuard;
use crate::router::routes::RouteTable;
use crate::session::{FileSessionStore, SessionStore};

pub struct DashboardClient {
    pub auth: Authenticator,
    pub fetch: SessionAwareFetch,
    pub router: Arc<Router>,
}

impl DashboardClient {
    /// Build the client around an existing HTTP client and store.
    #[must_use]
    pub fn new(http: reqwest::Client, endpoints: Endpoints, store: Arc<dyn SessionStore>) -> Self {
        let auth = Authenticator::new(RequestPipeline::with_client(http, store), endpoints);
        let table = RouteTable::dashboard();
        let guard = NavigationGuard::new(Arc::new(auth.clone()), table.entry());
        let router = Arc::new(Router::new(table, guard));
        let fetch = SessionAwareFetch::new(auth.clone(), router.clone());
        Self { auth, fetch, router }
    }

    /// Build the client from config, persisting the session to
    /// `config.session_file`.
    #[must_use]
    pub fn from_config(config: &ClientConfig) -> Self {
        let store = Arc::new(FileSessionStore::new(&config.session_file));
        Self::new(reqwest::Client::new(), Endpoints::new(&config.base_url), store)
    }
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
