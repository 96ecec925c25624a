//! Wire DTOs for the `/v2` account API.
//!
//! DESIGN
//! ======
//! Field names follow the backend's snake_case JSON. The backend writes empty
//! strings for unset optional profile fields, so those are normalized to
//! `None` on the way in and omitted on the way out.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Deserializer, Serialize};

/// A registered account as returned by login, register and profile calls.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Numeric account identifier.
    pub id: u64,
    /// Display name chosen at registration.
    pub username: String,
    /// Login email.
    pub email: String,
    #[serde(default, deserialize_with = "empty_as_none", skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,
    #[serde(default, deserialize_with = "empty_as_none", skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    /// Application identifier issued at registration.
    #[serde(default)]
    pub app_id: String,
    /// Long-lived access token issued at registration (distinct from the
    /// session token).
    #[serde(default)]
    pub token: String,
    /// RFC 3339 creation timestamp.
    #[serde(default)]
    pub created_at: String,
}

impl User {
    /// Calendar date portion of `created_at` (`YYYY-MM-DD`), or the raw value
    /// when it carries no time component.
    #[must_use]
    pub fn created_on(&self) -> &str {
        self.created_at
            .split_once('T')
            .map_or(self.created_at.as_str(), |(date, _)| date)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct LoginResponse {
    /// Session token to persist and send as `Authorization: Bearer`.
    pub token: String,
    #[serde(default)]
    pub expires_at: Option<String>,
    pub user: User,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct RegisterResponse {
    #[serde(default)]
    pub message: Option<String>,
    pub user: User,
}

/// Partial profile update. Absent fields are left untouched server-side.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct UpdateProfileRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
}

impl UpdateProfileRequest {
    /// True when no field would be sent.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.username.is_none() && self.email.is_none() && self.company_name.is_none() && self.phone_number.is_none()
    }
}

fn empty_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.trim().is_empty()))
}
