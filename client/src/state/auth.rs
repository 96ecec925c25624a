//! Auth session provider for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` provides one [`AuthContext`] for the whole tree. Pages read
//! `state` reactively and call the async actions from event handlers; each
//! action performs one request through [`HttpApi`] and then writes the
//! settled [`SessionState`] back into the signal.
//!
//! ORDERING
//! ========
//! Actions are not serialized. If a user triggers overlapping requests, the
//! signal ends up with whichever resolves last.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use session::{AuthApi, RegisterRequest, RequestError, Route, SessionState, TokenStore, UpdateProfileRequest, User};

use crate::net::api::HttpApi;
use crate::util::storage::LocalTokenStore;

/// Session state signal plus the API client and token store that drive it.
///
/// The app always runs with the browser defaults; the parameters exist so
/// the actions can be driven by other `AuthApi` implementations.
#[derive(Clone, Copy, Debug)]
pub struct AuthContext<A = HttpApi, S = LocalTokenStore> {
    pub state: RwSignal<SessionState>,
    api: A,
    tokens: S,
}

impl AuthContext {
    /// Create the context and register it for descendants.
    pub fn provide() -> Self {
        let api = HttpApi::default();
        let ctx = Self::new(api, api.tokens());
        provide_context(ctx);
        ctx
    }

    /// Fetch the context provided by `App`.
    ///
    /// # Panics
    ///
    /// Panics when called outside a tree where [`AuthContext::provide`] ran.
    pub fn expect() -> Self {
        expect_context::<Self>()
    }
}

impl<A, S> AuthContext<A, S>
where
    A: AuthApi + Copy,
    S: TokenStore + Copy,
{
    pub fn new(api: A, tokens: S) -> Self {
        Self { state: RwSignal::new(SessionState::Unresolved), api, tokens }
    }

    pub fn user(&self) -> Option<User> {
        self.state.with(|s| s.user().cloned())
    }

    pub fn loading(&self) -> bool {
        self.state.with(SessionState::is_loading)
    }

    /// Exchange any persisted token for a profile. Only the first call from
    /// `Unresolved` does anything.
    pub async fn restore(self) {
        if !self.state.with_untracked(|s| matches!(s, SessionState::Unresolved)) {
            return;
        }
        self.state.set(SessionState::Resolving);
        let settled = session::session::restore(&self.api, &self.tokens).await;
        self.state.set(settled);
    }

    /// # Errors
    ///
    /// Returns the request failure; the session is left unchanged.
    pub async fn login(self, email: String, password: String) -> Result<Route, RequestError> {
        let user = session::session::login(&self.api, &self.tokens, &email, &password).await?;
        self.state.set(SessionState::Authenticated(user));
        Ok(Route::Dashboard)
    }

    /// # Errors
    ///
    /// Returns the request failure.
    pub async fn register(self, request: RegisterRequest) -> Result<Route, RequestError> {
        session::session::register(&self.api, &request).await?;
        Ok(Route::Login)
    }

    /// Clear the token and the user. Synchronous.
    pub fn logout(self) -> Route {
        session::session::logout(&self.tokens);
        self.state.set(SessionState::Anonymous);
        Route::Login
    }

    /// # Errors
    ///
    /// Returns the request failure; the session is left unchanged.
    pub async fn update_profile(self, request: UpdateProfileRequest) -> Result<User, RequestError> {
        let user = self.api.update_profile(&request).await?;
        self.state.update(|s| {
            if s.is_authenticated() {
                *s = SessionState::Authenticated(user.clone());
            }
        });
        Ok(user)
    }
}
