//! Reusable UI components rendered by the dashboard.

pub mod copy_card;
pub mod profile_form;
