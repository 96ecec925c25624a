//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain so components depend on small focused models.
//! The console only has one domain today: the auth session.

pub mod auth;
