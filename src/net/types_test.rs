use super::*;
use serde_json::json;

// =============================================================================
// detail_message
// =============================================================================

#[test]
fn detail_message_uses_server_detail() {
    assert_eq!(detail_message(r#"{"detail":"bad credentials"}"#, "fallback"), "bad credentials");
}

#[test]
fn detail_message_falls_back_without_detail() {
    assert_eq!(detail_message("{}", "fallback"), "fallback");
    assert_eq!(detail_message(r#"{"detail":null}"#, "fallback"), "fallback");
    assert_eq!(detail_message(r#"{"detail":"  "}"#, "fallback"), "fallback");
}

#[test]
fn detail_message_falls_back_on_non_json_body() {
    assert_eq!(detail_message("<html>502</html>", "fallback"), "fallback");
    assert_eq!(detail_message("", "fallback"), "fallback");
}

#[test]
fn detail_message_ignores_structured_validation_detail() {
    let body = json!({ "detail": [{ "loc": ["body", "email"], "msg": "field required" }] }).to_string();
    assert_eq!(detail_message(&body, "fallback"), "fallback");
}

// =============================================================================
// login payloads
// =============================================================================

#[test]
fn login_response_maps_vni_to_session() {
    let payload: LoginResponse = serde_json::from_value(json!({
        "access_token": "tok1",
        "token_type": "bearer",
        "email": "a@b.com",
        "vni_cliente": 42
    }))
    .unwrap();
    assert_eq!(payload.session(), Session::new("tok1", 42));
}

#[test]
fn login_response_without_token_type_defaults_to_bearer() {
    let payload: LoginResponse =
        serde_json::from_value(json!({ "access_token": "t", "email": "e", "vni_cliente": 1 })).unwrap();
    assert_eq!(payload.token_type, "bearer");
}

#[test]
fn login_response_needs_only_token_and_account_id() {
    let payload: LoginResponse = serde_json::from_value(json!({ "access_token": "tokmin", "vni_cliente": 5 })).unwrap();
    assert!(payload.email.is_none());
    assert_eq!(payload.session(), Session::new("tokmin", 5));
}

#[test]
fn login_response_without_account_id_is_rejected() {
    let result = serde_json::from_value::<LoginResponse>(json!({ "access_token": "t", "email": "e" }));
    assert!(result.is_err());
}

#[test]
fn credentials_serialize_for_login_and_hide_password_in_debug() {
    let creds = Credentials::new("a@b.com", "hunter2");
    assert_eq!(serde_json::to_value(&creds).unwrap(), json!({ "email": "a@b.com", "password": "hunter2" }));
    assert!(!format!("{creds:?}").contains("hunter2"));
}

// =============================================================================
// profile / detections
// =============================================================================

#[test]
fn profile_accepts_integral_float_timestamp() {
    let profile: Profile = serde_json::from_value(json!({
        "email": "a@b.com",
        "vni_cliente": 42,
        "traffic_mirror_target_id": "tmt-0abc",
        "created_at": 1_700_000_000.0
    }))
    .unwrap();
    assert_eq!(profile.account_id, 42);
    assert_eq!(profile.created_at, 1_700_000_000);
}

#[test]
fn profile_serializes_with_wire_names() {
    let profile = Profile {
        email: "a@b.com".into(),
        account_id: 7,
        traffic_mirror_target_id: "tmt".into(),
        created_at: 1,
    };
    let value = serde_json::to_value(&profile).unwrap();
    assert_eq!(value["vni_cliente"], 7);
}

#[test]
fn detection_keeps_extra_fields() {
    let feed: DetectionFeed = serde_json::from_value(json!({
        "detections": [{ "id": "d1", "timestamp": 10, "malware_type": "Zeus", "confidence": 0.93 }],
        "total_count": 1,
        "message": "ok"
    }))
    .unwrap();
    let detection = &feed.detections[0];
    assert_eq!(detection.id, "d1");
    assert_eq!(detection.extra["malware_type"], "Zeus");
    assert!(!detection.extra.contains_key("id"));
}

#[test]
fn detection_rejects_fractional_timestamp() {
    let result = serde_json::from_value::<Detection>(json!({ "id": "d", "timestamp": 1.5 }));
    assert!(result.is_err());
}
