//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (form signals, redirects, calls
//! into `AuthContext`) and delegates rendering details to `components`.

pub mod dashboard;
pub mod login;
pub mod register;
