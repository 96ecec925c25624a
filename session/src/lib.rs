//! Account session core shared by the browser console and the CLI.
//!
//! This crate owns the wire schema of the CodePush account API, the
//! `RequestError` every front-end surfaces, the `AuthApi` / `TokenStore`
//! seams, and the session state machine that ties them together. HTTP and
//! storage backends live in the consuming crates.

pub mod api;
pub mod error;
pub mod session;
pub mod store;
pub mod types;

pub use api::{AuthApi, Endpoint};
pub use error::RequestError;
pub use session::{Route, Session, SessionState};
pub use store::{MemoryTokenStore, TOKEN_KEY, TokenStore};
pub use types::{LoginRequest, LoginResponse, RegisterRequest, RegisterResponse, UpdateProfileRequest, User};
