use super::*;

#[test]
fn endpoints_map_to_backend_routes() {
    assert_eq!(Endpoint::Register.path(), "/v2/auth/register");
    assert_eq!(Endpoint::Login.path(), "/v2/auth/login");
    assert_eq!(Endpoint::GetProfile.path(), "/v2/user/profile");
    assert_eq!(Endpoint::UpdateProfile.path(), "/v2/user/profile");
}

#[test]
fn endpoints_use_expected_methods() {
    assert_eq!(Endpoint::Register.method(), Method::Post);
    assert_eq!(Endpoint::Login.method(), Method::Post);
    assert_eq!(Endpoint::GetProfile.method(), Method::Get);
    assert_eq!(Endpoint::UpdateProfile.method(), Method::Put);
}

#[test]
fn url_joins_base_without_double_slash() {
    assert_eq!(Endpoint::Login.url("http://localhost:8080/"), "http://localhost:8080/v2/auth/login");
    assert_eq!(Endpoint::GetProfile.url("https://api.test"), "https://api.test/v2/user/profile");
}

#[test]
fn bearer_formats_header_value() {
    assert_eq!(bearer("abc"), "Bearer abc");
}

#[test]
fn decode_response_parses_success_body() {
    let user: User = decode_response(Endpoint::GetProfile, 200, r#"{"id":1,"username":"a","email":"a@b.c"}"#).unwrap();
    assert_eq!(user.id, 1);
}

#[test]
fn decode_response_accepts_created_status() {
    let resp: RegisterResponse = decode_response(
        Endpoint::Register,
        201,
        r#"{"message":"User created successfully","user":{"id":9,"username":"n","email":"n@e.w"}}"#,
    )
    .unwrap();
    assert_eq!(resp.user.id, 9);
}

#[test]
fn decode_response_surfaces_backend_error() {
    let err = decode_response::<LoginResponse>(Endpoint::Login, 401, r#"{"error":"Invalid credentials"}"#).unwrap_err();
    assert_eq!(err.status, Some(401));
    assert_eq!(err.message, "Invalid credentials");
}

#[test]
fn decode_response_undecodable_success_uses_fallback() {
    let err = decode_response::<User>(Endpoint::UpdateProfile, 200, "not json").unwrap_err();
    assert_eq!(err.status, Some(200));
    assert_eq!(err.message, "Failed to update profile");
}
