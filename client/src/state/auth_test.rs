use session::{LoginRequest, LoginResponse, MemoryTokenStore, RegisterResponse};

use super::*;

// =============================================================================
// Fake backend
// =============================================================================

const VALID_TOKEN: &str = "jwt-valid";
const PASSWORD: &str = "correct-horse";

fn sample_user() -> User {
    User {
        id: 5,
        username: "ops".to_owned(),
        email: "ops@example.com".to_owned(),
        company_name: None,
        phone_number: None,
        app_id: "app-5".to_owned(),
        token: "access-5".to_owned(),
        created_at: String::new(),
    }
}

/// Contexts are `Copy`, so the store they share has to live for the test.
fn leaked_store(token: Option<&str>) -> &'static MemoryTokenStore {
    let store = token.map_or_else(MemoryTokenStore::default, MemoryTokenStore::with_token);
    Box::leak(Box::new(store))
}

/// Accepts `ops@example.com` / `PASSWORD` and only `VALID_TOKEN` as bearer.
#[derive(Clone, Copy, Debug)]
struct FakeApi {
    tokens: &'static MemoryTokenStore,
}

impl FakeApi {
    fn authorize(self, fallback: &str) -> Result<(), RequestError> {
        match self.tokens.load() {
            Some(token) if token == VALID_TOKEN => Ok(()),
            _ => Err(RequestError::from_response(401, r#"{"error":"Unauthorized"}"#, fallback)),
        }
    }
}

impl AuthApi for FakeApi {
    async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, RequestError> {
        if request.email == "ops@example.com" && request.password == PASSWORD {
            Ok(LoginResponse { token: VALID_TOKEN.to_owned(), expires_at: None, user: sample_user() })
        } else {
            Err(RequestError::from_response(401, r#"{"error":"Invalid credentials"}"#, "Login failed"))
        }
    }

    async fn register(&self, request: &RegisterRequest) -> Result<RegisterResponse, RequestError> {
        let user = User { id: 6, username: request.username.clone(), email: request.email.clone(), ..sample_user() };
        Ok(RegisterResponse { message: Some("User created successfully".to_owned()), user })
    }

    async fn get_profile(&self) -> Result<User, RequestError> {
        self.authorize("Failed to load profile")?;
        Ok(sample_user())
    }

    async fn update_profile(&self, request: &UpdateProfileRequest) -> Result<User, RequestError> {
        self.authorize("Failed to update profile")?;
        let mut user = sample_user();
        if let Some(username) = &request.username {
            user.username.clone_from(username);
        }
        Ok(user)
    }
}

type FakeContext = AuthContext<FakeApi, &'static MemoryTokenStore>;

fn fake_context(token: Option<&str>) -> (FakeContext, &'static MemoryTokenStore) {
    let tokens = leaked_store(token);
    (AuthContext::new(FakeApi { tokens }, tokens), tokens)
}

// =============================================================================
// Restore
// =============================================================================

#[test]
fn new_context_starts_unresolved_and_loading() {
    let (ctx, _) = fake_context(None);
    assert_eq!(ctx.state.get_untracked(), SessionState::Unresolved);
    assert!(ctx.loading());
    assert!(ctx.user().is_none());
}

#[tokio::test]
async fn restore_without_token_settles_anonymous() {
    let (ctx, _) = fake_context(None);
    ctx.restore().await;
    assert_eq!(ctx.state.get_untracked(), SessionState::Anonymous);
    assert!(!ctx.loading());
}

#[tokio::test]
async fn restore_with_valid_token_authenticates() {
    let (ctx, tokens) = fake_context(Some(VALID_TOKEN));
    ctx.restore().await;
    assert_eq!(ctx.user(), Some(sample_user()));
    assert_eq!(tokens.load().as_deref(), Some(VALID_TOKEN));
}

#[tokio::test]
async fn restore_with_rejected_token_clears_it() {
    let (ctx, tokens) = fake_context(Some("jwt-stale"));
    ctx.restore().await;
    assert_eq!(ctx.state.get_untracked(), SessionState::Anonymous);
    assert_eq!(tokens.load(), None);
}

#[tokio::test]
async fn restore_runs_only_from_unresolved() {
    let (ctx, _) = fake_context(None);
    ctx.state.set(SessionState::Authenticated(sample_user()));
    ctx.restore().await;
    assert_eq!(ctx.user(), Some(sample_user()));
}

// =============================================================================
// Actions
// =============================================================================

#[tokio::test]
async fn login_sets_user_persists_token_and_routes_to_dashboard() {
    let (ctx, tokens) = fake_context(None);
    ctx.state.set(SessionState::Anonymous);
    let route = ctx.login("ops@example.com".to_owned(), PASSWORD.to_owned()).await.unwrap();
    assert_eq!(route, Route::Dashboard);
    assert_eq!(ctx.user(), Some(sample_user()));
    assert_eq!(tokens.load().as_deref(), Some(VALID_TOKEN));
}

#[tokio::test]
async fn failed_login_leaves_state_and_storage_untouched() {
    let (ctx, tokens) = fake_context(None);
    ctx.state.set(SessionState::Anonymous);
    let err = ctx.login("ops@example.com".to_owned(), "wrong-pass".to_owned()).await.unwrap_err();
    assert_eq!(err.message, "Invalid credentials");
    assert_eq!(ctx.state.get_untracked(), SessionState::Anonymous);
    assert_eq!(tokens.load(), None);
}

#[tokio::test]
async fn register_routes_to_login_without_signing_in() {
    let (ctx, tokens) = fake_context(None);
    ctx.state.set(SessionState::Anonymous);
    let request = RegisterRequest {
        username: "newbie".to_owned(),
        email: "newbie@example.com".to_owned(),
        password: "long-enough".to_owned(),
        ..Default::default()
    };
    assert_eq!(ctx.register(request).await.unwrap(), Route::Login);
    assert_eq!(ctx.state.get_untracked(), SessionState::Anonymous);
    assert_eq!(tokens.load(), None);
}

#[test]
fn logout_resets_to_anonymous_and_clears_token() {
    let (ctx, tokens) = fake_context(Some(VALID_TOKEN));
    ctx.state.set(SessionState::Authenticated(sample_user()));
    assert_eq!(ctx.logout(), Route::Login);
    assert_eq!(ctx.state.get_untracked(), SessionState::Anonymous);
    assert_eq!(tokens.load(), None);

    let (fresh, _) = fake_context(None);
    fresh.logout();
    assert_eq!(fresh.state.get_untracked(), SessionState::Anonymous);
}

#[tokio::test]
async fn profile_update_replaces_signed_in_user() {
    let (ctx, _) = fake_context(Some(VALID_TOKEN));
    ctx.state.set(SessionState::Authenticated(sample_user()));
    let request = UpdateProfileRequest { username: Some("renamed".to_owned()), ..Default::default() };
    let user = ctx.update_profile(request).await.unwrap();
    assert_eq!(user.username, "renamed");
    assert_eq!(ctx.user().map(|u| u.username), Some("renamed".to_owned()));
}

#[tokio::test]
async fn profile_update_does_not_sign_in_anonymous_session() {
    let (ctx, _) = fake_context(Some(VALID_TOKEN));
    ctx.state.set(SessionState::Anonymous);
    let request = UpdateProfileRequest { username: Some("renamed".to_owned()), ..Default::default() };
    ctx.update_profile(request).await.unwrap();
    assert_eq!(ctx.state.get_untracked(), SessionState::Anonymous);
}

// =============================================================================
// Browser defaults outside the browser
// =============================================================================

#[tokio::test]
async fn http_context_without_browser_fails_with_fallback() {
    let api = HttpApi::new("http://localhost:8080");
    let ctx = AuthContext::new(api, api.tokens());
    ctx.state.set(SessionState::Authenticated(sample_user()));
    let request = UpdateProfileRequest { username: Some("renamed".to_owned()), ..Default::default() };
    let err = ctx.update_profile(request).await.unwrap_err();
    assert_eq!(err.message, "Failed to update profile");
    assert_eq!(ctx.user().map(|u| u.username), Some("ops".to_owned()));
}
