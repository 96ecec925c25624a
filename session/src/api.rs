//! Endpoint table, response decoding, and the `AuthApi` seam.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser client (`gloo-net`) and the CLI client (`reqwest`) both
//! implement [`AuthApi`]. They share [`Endpoint`] for method/path/fallback
//! lookup and [`decode_response`] for status + body interpretation, so the
//! two transports cannot drift on error semantics.

#![allow(async_fn_in_trait)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::de::DeserializeOwned;

use crate::error::RequestError;
use crate::types::{LoginRequest, LoginResponse, RegisterRequest, RegisterResponse, UpdateProfileRequest, User};

/// HTTP method of an [`Endpoint`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
}

/// The four account endpoints consumed by the console.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Endpoint {
    Register,
    Login,
    GetProfile,
    UpdateProfile,
}

impl Endpoint {
    #[must_use]
    pub fn path(self) -> &'static str {
        match self {
            Self::Register => "/v2/auth/register",
            Self::Login => "/v2/auth/login",
            Self::GetProfile | Self::UpdateProfile => "/v2/user/profile",
        }
    }

    #[must_use]
    pub fn method(self) -> Method {
        match self {
            Self::Register | Self::Login => Method::Post,
            Self::GetProfile => Method::Get,
            Self::UpdateProfile => Method::Put,
        }
    }

    /// Message surfaced when the backend gives no usable error text.
    #[must_use]
    pub fn fallback_message(self) -> &'static str {
        match self {
            Self::Register => "Registration failed",
            Self::Login => "Login failed",
            Self::GetProfile => "Failed to load profile",
            Self::UpdateProfile => "Failed to update profile",
        }
    }

    /// Absolute URL for this endpoint under `base_url`.
    #[must_use]
    pub fn url(self, base_url: &str) -> String {
        format!("{}{}", base_url.trim_end_matches('/'), self.path())
    }
}

/// `Authorization` header value for a session token.
#[must_use]
pub fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

/// Interpret a completed response.
///
/// # Errors
///
/// Non-2xx statuses yield the backend's message (or the endpoint fallback);
/// a 2xx body that does not decode as `T` yields the endpoint fallback.
pub fn decode_response<T: DeserializeOwned>(endpoint: Endpoint, status: u16, body: &str) -> Result<T, RequestError> {
    if !(200..300).contains(&status) {
        return Err(RequestError::from_response(status, body, endpoint.fallback_message()));
    }
    serde_json::from_str(body).map_err(|e| {
        log::warn!("{} {}: undecodable response body: {e}", status, endpoint.path());
        RequestError { status: Some(status), message: endpoint.fallback_message().to_owned() }
    })
}

/// One round trip per call; implementations attach the persisted session
/// token as a bearer header when one exists.
pub trait AuthApi {
    /// `POST /v2/auth/login`.
    async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, RequestError>;

    /// `POST /v2/auth/register`.
    async fn register(&self, request: &RegisterRequest) -> Result<RegisterResponse, RequestError>;

    /// `GET /v2/user/profile`.
    async fn get_profile(&self) -> Result<User, RequestError>;

    /// `PUT /v2/user/profile`.
    async fn update_profile(&self, request: &UpdateProfileRequest) -> Result<User, RequestError>;
}
