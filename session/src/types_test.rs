use super::*;

// =============================================================================
// User decoding
// =============================================================================

#[test]
fn user_decodes_backend_login_shape() {
    let json = r#"{
        "id": 7,
        "email": "dev@example.com",
        "username": "dev",
        "company_name": "Acme",
        "app_id": "app-123",
        "token": "tok-abc",
        "created_at": "2024-03-05T10:11:12Z"
    }"#;
    let user: User = serde_json::from_str(json).unwrap();
    assert_eq!(user.id, 7);
    assert_eq!(user.username, "dev");
    assert_eq!(user.company_name.as_deref(), Some("Acme"));
    assert_eq!(user.phone_number, None);
    assert_eq!(user.app_id, "app-123");
    assert_eq!(user.token, "tok-abc");
}

#[test]
fn user_empty_optional_strings_become_none() {
    let json = r#"{"id":1,"username":"a","email":"a@b.c","company_name":"","phone_number":"  "}"#;
    let user: User = serde_json::from_str(json).unwrap();
    assert_eq!(user.company_name, None);
    assert_eq!(user.phone_number, None);
}

#[test]
fn user_null_optional_strings_become_none() {
    let json = r#"{"id":1,"username":"a","email":"a@b.c","company_name":null}"#;
    let user: User = serde_json::from_str(json).unwrap();
    assert_eq!(user.company_name, None);
}

#[test]
fn user_serialization_omits_absent_optionals() {
    let user = User {
        id: 1,
        username: "a".to_owned(),
        email: "a@b.c".to_owned(),
        company_name: None,
        phone_number: Some("555".to_owned()),
        app_id: String::new(),
        token: String::new(),
        created_at: String::new(),
    };
    let value = serde_json::to_value(&user).unwrap();
    assert!(value.get("company_name").is_none());
    assert_eq!(value["phone_number"], "555");
}

#[test]
fn created_on_strips_time_component() {
    let user: User =
        serde_json::from_str(r#"{"id":1,"username":"a","email":"a@b.c","created_at":"2024-03-05T10:11:12.5+02:00"}"#)
            .unwrap();
    assert_eq!(user.created_on(), "2024-03-05");
}

#[test]
fn created_on_passes_through_plain_dates() {
    let user: User = serde_json::from_str(r#"{"id":1,"username":"a","email":"a@b.c","created_at":"2024-03-05"}"#).unwrap();
    assert_eq!(user.created_on(), "2024-03-05");
}

// =============================================================================
// Requests and responses
// =============================================================================

#[test]
fn login_response_decodes_token_and_user() {
    let json = r#"{"token":"jwt","expires_at":"2024-03-06T10:00:00Z","user":{"id":2,"username":"b","email":"b@c.d"}}"#;
    let resp: LoginResponse = serde_json::from_str(json).unwrap();
    assert_eq!(resp.token, "jwt");
    assert_eq!(resp.expires_at.as_deref(), Some("2024-03-06T10:00:00Z"));
    assert_eq!(resp.user.id, 2);
}

#[test]
fn register_response_tolerates_missing_message() {
    let json = r#"{"user":{"id":3,"username":"c","email":"c@d.e"}}"#;
    let resp: RegisterResponse = serde_json::from_str(json).unwrap();
    assert_eq!(resp.message, None);
    assert_eq!(resp.user.username, "c");
}

#[test]
fn register_request_omits_blank_optionals() {
    let req = RegisterRequest {
        username: "dev".to_owned(),
        email: "dev@example.com".to_owned(),
        password: "hunter22".to_owned(),
        company_name: None,
        phone_number: None,
    };
    assert_eq!(
        serde_json::to_value(&req).unwrap(),
        serde_json::json!({ "username": "dev", "email": "dev@example.com", "password": "hunter22" })
    );
}

#[test]
fn update_profile_request_serializes_only_present_fields() {
    let req = UpdateProfileRequest { phone_number: Some("555-0100".to_owned()), ..Default::default() };
    assert!(!req.is_empty());
    assert_eq!(serde_json::to_value(&req).unwrap(), serde_json::json!({ "phone_number": "555-0100" }));
}

#[test]
fn update_profile_request_default_is_empty() {
    assert!(UpdateProfileRequest::default().is_empty());
}
