//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns (storage, clipboard,
//! redirects) from page and component logic to improve reuse and testability.

pub mod auth;
pub mod clipboard;
pub mod storage;
