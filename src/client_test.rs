use super::*;
use crate::error::AuthError;
use crate::router::routes::{HOME_ROUTE, LOGIN_ROUTE};
use crate::test_support::{empty_store, http_client, mock_api, spawn_api};

#[tokio::test]
async fn login_unlocks_home_and_expiry_sends_router_back_to_login() {
    let base = spawn_api(mock_api()).await;
    let store = empty_store();
    let client = DashboardClient::new(http_client(), Endpoints::new(&base), store.clone());

    assert_eq!(client.router.navigate("/home", None).route.name, LOGIN_ROUTE);

    client.auth.login("a@b.com", "x").await.unwrap();
    assert_eq!(client.router.navigate("/home", None).route.name, HOME_ROUTE);

    // Server-side revocation: the stored token no longer matches.
    store.save(&crate::session::Session::new("revoked", 42)).unwrap();
    let err = client.fetch.current_profile().await.unwrap_err();

    assert!(matches!(err, AuthError::SessionExpired));
    assert_eq!(client.router.current().map(|r| r.name), Some(LOGIN_ROUTE));
    assert!(!client.auth.is_authenticated());
}

#[test]
fn from_config_uses_session_file() {
    let path = std::env::temp_dir().join(format!("dashboard-client-{}-from-config.json", std::process::id()));
    let _ = std::fs::remove_file(&path);
    let config = ClientConfig::new(Some("http://localhost:8080"), Some(path.clone())).unwrap();

    let client = DashboardClient::from_config(&config);
    client
        .auth
        .pipeline()
        .store()
        .save(&crate::session::Session::new("t", 1))
        .unwrap();

    assert!(path.exists());
    assert!(client.auth.is_authenticated());
    client.auth.logout();
    assert!(!path.exists());
}
