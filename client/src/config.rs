//! Build-time client configuration.
//!
//! The browser bundle cannot read the host environment at runtime, so the
//! backend base URL is baked in from `CODEPUSH_API_URL` when compiling.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_API_URL: &str = "http://localhost:8080";

/// Backend base URL without a trailing slash.
pub fn api_base_url() -> &'static str {
    resolve_base_url(option_env!("CODEPUSH_API_URL"))
}

fn resolve_base_url(raw: Option<&'static str>) -> &'static str {
    raw.map(str::trim)
        .filter(|v| !v.is_empty())
        .unwrap_or(DEFAULT_API_URL)
        .trim_end_matches('/')
}
