//! Session state machine.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser console drives these operations from reactive signals; the
//! CLI drives them through [`Session`]. Either way the persisted token and
//! the in-memory user only change here.
//!
//! STATES
//! ======
//! `Unresolved` -> `Resolving` -> `Authenticated(user)` | `Anonymous`.
//! Login moves to `Authenticated`, logout to `Anonymous`, from any state.
//! Requests are not serialized: overlapping actions apply in resolve order.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::api::AuthApi;
use crate::error::RequestError;
use crate::store::TokenStore;
use crate::types::{LoginRequest, RegisterRequest, UpdateProfileRequest, User};

/// Where the current user is in the authentication lifecycle.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum SessionState {
    /// Startup, before the persisted token has been checked.
    #[default]
    Unresolved,
    /// Persisted token is being exchanged for a profile.
    Resolving,
    Authenticated(User),
    Anonymous,
}

impl SessionState {
    #[must_use]
    pub fn user(&self) -> Option<&User> {
        match self {
            Self::Authenticated(user) => Some(user),
            _ => None,
        }
    }

    /// True until startup restoration has settled.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Unresolved | Self::Resolving)
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated(_))
    }

    #[must_use]
    pub fn is_anonymous(&self) -> bool {
        matches!(self, Self::Anonymous)
    }
}

/// Navigation target produced by a session action.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Route {
    Login,
    Register,
    Dashboard,
}

impl Route {
    #[must_use]
    pub fn path(self) -> &'static str {
        match self {
            Self::Login => "/login",
            Self::Register => "/register",
            Self::Dashboard => "/dashboard",
        }
    }
}

/// Exchange the persisted token for a profile.
///
/// Never fails: a rejected or unreachable restore clears the token and
/// settles on `Anonymous`.
pub async fn restore<A: AuthApi, S: TokenStore>(api: &A, store: &S) -> SessionState {
    if store.load().is_none() {
        log::debug!("no persisted session token");
        return SessionState::Anonymous;
    }
    match api.get_profile().await {
        Ok(user) => {
            log::info!("restored session for user {}", user.id);
            SessionState::Authenticated(user)
        }
        Err(e) => {
            log::warn!("session restore failed, clearing token: {e}");
            store.clear();
            SessionState::Anonymous
        }
    }
}

/// Log in and persist the returned session token.
///
/// # Errors
///
/// Returns the request failure; storage is untouched in that case.
pub async fn login<A: AuthApi, S: TokenStore>(
    api: &A,
    store: &S,
    email: &str,
    password: &str,
) -> Result<User, RequestError> {
    let request = LoginRequest { email: email.to_owned(), password: password.to_owned() };
    let response = api.login(&request).await?;
    store.save(&response.token);
    log::info!("logged in as user {}", response.user.id);
    Ok(response.user)
}

/// Create an account. Does not log in.
///
/// # Errors
///
/// Returns the request failure.
pub async fn register<A: AuthApi>(api: &A, request: &RegisterRequest) -> Result<User, RequestError> {
    let response = api.register(request).await?;
    log::info!("registered user {}", response.user.id);
    Ok(response.user)
}

/// Forget the persisted token.
pub fn logout<S: TokenStore>(store: &S) {
    store.clear();
    log::info!("logged out");
}

/// Owned session for sequential callers (CLI, tests).
pub struct Session<A, S> {
    api: A,
    store: S,
    state: SessionState,
}

impl<A: AuthApi, S: TokenStore> Session<A, S> {
    pub fn new(api: A, store: S) -> Self {
        Self { api, store, state: SessionState::Unresolved }
    }

    #[must_use]
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Run startup restoration and return the settled state.
    pub async fn restore(&mut self) -> &SessionState {
        self.state = SessionState::Resolving;
        self.state = restore(&self.api, &self.store).await;
        &self.state
    }

    /// # Errors
    ///
    /// Returns the request failure; state is left as it was.
    pub async fn login(&mut self, email: &str, password: &str) -> Result<Route, RequestError> {
        let user = login(&self.api, &self.store, email, password).await?;
        self.state = SessionState::Authenticated(user);
        Ok(Route::Dashboard)
    }

    /// # Errors
    ///
    /// Returns the request failure; state is left as it was.
    pub async fn register(&mut self, request: &RegisterRequest) -> Result<Route, RequestError> {
        register(&self.api, request).await?;
        Ok(Route::Login)
    }

    pub fn logout(&mut self) -> Route {
        logout(&self.store);
        self.state = SessionState::Anonymous;
        Route::Login
    }

    /// Send a profile update; the in-memory user is replaced when
    /// authenticated.
    ///
    /// # Errors
    ///
    /// Returns the request failure; state is left as it was.
    pub async fn update_profile(&mut self, request: &UpdateProfileRequest) -> Result<User, RequestError> {
        let user = self.api.update_profile(request).await?;
        if self.state.is_authenticated() {
            self.state = SessionState::Authenticated(user.clone());
        }
        Ok(user)
    }
}
