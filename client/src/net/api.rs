//! REST client for the CodePush account API.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, with the session
//! token from `localStorage` attached as a bearer header.
//! Server-side (SSR): stubs failing with the endpoint's generic message since
//! these endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every failure is a `RequestError`; status/body interpretation is shared
//! with the CLI through `session::api::decode_response`.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::Serialize;
use serde::de::DeserializeOwned;
use session::api::Endpoint;
use session::{
    AuthApi, LoginRequest, LoginResponse, RegisterRequest, RegisterResponse, RequestError, UpdateProfileRequest, User,
};

use crate::util::storage::LocalTokenStore;

/// Browser API client. `Copy` so it can move freely into event handlers and
/// spawned tasks.
#[derive(Clone, Copy, Debug)]
pub struct HttpApi {
    base_url: &'static str,
    tokens: LocalTokenStore,
}

impl Default for HttpApi {
    fn default() -> Self {
        Self::new(crate::config::api_base_url())
    }
}

impl HttpApi {
    pub fn new(base_url: &'static str) -> Self {
        Self { base_url, tokens: LocalTokenStore }
    }

    pub fn base_url(&self) -> &'static str {
        self.base_url
    }

    /// The token store whose value is attached to each request.
    pub fn tokens(&self) -> LocalTokenStore {
        self.tokens
    }

    async fn send<B, T>(&self, endpoint: Endpoint, body: Option<&B>) -> Result<T, RequestError>
    where
        B: Serialize,
        T: DeserializeOwned,
    {
        #[cfg(feature = "hydrate")]
        {
            use gloo_net::http::Request;
            use session::TokenStore;
            use session::api::{Method, bearer, decode_response};

            let url = endpoint.url(self.base_url);
            let fallback = endpoint.fallback_message();
            log::debug!("{:?} {url}", endpoint.method());

            let mut builder = match endpoint.method() {
                Method::Get => Request::get(&url),
                Method::Post => Request::post(&url),
                Method::Put => Request::put(&url),
            };
            if let Some(token) = self.tokens.load() {
                builder = builder.header("Authorization", &bearer(&token));
            }
            let sent = match body {
                Some(body) => {
                    builder
                        .json(body)
                        .map_err(|e| RequestError::transport(e, fallback))?
                        .send()
                        .await
                }
                None => builder.send().await,
            };
            let response = sent.map_err(|e| RequestError::transport(e, fallback))?;
            let status = response.status();
            let text = response
                .text()
                .await
                .map_err(|e| RequestError::transport(e, fallback))?;
            decode_response(endpoint, status, &text)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = body;
            Err(RequestError::new(endpoint.fallback_message()))
        }
    }
}

impl AuthApi for HttpApi {
    async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, RequestError> {
        self.send(Endpoint::Login, Some(request)).await
    }

    async fn register(&self, request: &RegisterRequest) -> Result<RegisterResponse, RequestError> {
        self.send(Endpoint::Register, Some(request)).await
    }

    async fn get_profile(&self) -> Result<User, RequestError> {
        self.send::<(), _>(Endpoint::GetProfile, None).await
    }

    async fn update_profile(&self, request: &UpdateProfileRequest) -> Result<User, RequestError> {
        self.send(Endpoint::UpdateProfile, Some(request)).await
    }
}
