//! `reqwest` implementation of `session::AuthApi`.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use reqwest::header::AUTHORIZATION;
use serde::Serialize;
use serde::de::DeserializeOwned;
use session::api::{Endpoint, Method, bearer, decode_response};
use session::{
    AuthApi, LoginRequest, LoginResponse, RegisterRequest, RegisterResponse, RequestError, TokenStore,
    UpdateProfileRequest, User,
};

use crate::store::FileTokenStore;

pub struct ReqwestApi {
    http: reqwest::Client,
    base_url: String,
    tokens: FileTokenStore,
}

impl ReqwestApi {
    pub fn new(base_url: &str, tokens: FileTokenStore) -> Self {
        Self { http: reqwest::Client::new(), base_url: base_url.trim_end_matches('/').to_owned(), tokens }
    }

    async fn send<B, T>(&self, endpoint: Endpoint, body: Option<&B>) -> Result<T, RequestError>
    where
        B: Serialize,
        T: DeserializeOwned,
    {
        let url = endpoint.url(&self.base_url);
        let fallback = endpoint.fallback_message();

        let mut request = match endpoint.method() {
            Method::Get => self.http.get(&url),
            Method::Post => self.http.post(&url),
            Method::Put => self.http.put(&url),
        };
        if let Some(token) = self.tokens.load() {
            request = request.header(AUTHORIZATION, bearer(&token));
        }
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request
            .send()
            .await
            .map_err(|e| RequestError::transport(e, fallback))?;
        let status = response.status().as_u16();
        let text = response
            .text()
            .await
            .map_err(|e| RequestError::transport(e, fallback))?;
        tracing::debug!(status, path = endpoint.path(), "api response");

        decode_response(endpoint, status, &text)
    }
}

impl AuthApi for ReqwestApi {
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
