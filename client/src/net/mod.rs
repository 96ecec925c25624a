//! Networking modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` is the browser implementation of `session::AuthApi`. Wire types and
//! response decoding live in the `session` crate.

pub mod api;
