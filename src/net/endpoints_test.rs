use super::*;

#[test]
fn endpoints_join_base_without_double_slash() {
    let endpoints = Endpoints::new("http://localhost:8080/");
    assert_eq!(endpoints.login(), "http://localhost:8080/v1/auth/login");
    assert_eq!(endpoints.current_user(), "http://localhost:8080/v1/auth/me");
    assert_eq!(endpoints.detections(), "http://localhost:8080/detections");
}

#[test]
fn endpoints_keep_base_path_prefix() {
    let endpoints = Endpoints::new("https://example.test/api");
    assert_eq!(endpoints.login(), "https://example.test/api/v1/auth/login");
}
