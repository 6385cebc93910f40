//! Backend origin resolution.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every feature service builds request URLs from [`api_base`]. The origin
//! is fixed at compile time so a deployment only needs to rebuild with
//! `FLUXIVAMED_API_URL` set to point the client at another backend.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Development backend used when no override is compiled in.
pub const DEFAULT_API_BASE: &str = "http://localhost:8080";

/// REST/WebSocket origin for all backend calls, without a trailing slash.
pub fn api_base() -> String {
    normalize_base(option_env!("FLUXIVAMED_API_URL").unwrap_or(DEFAULT_API_BASE))
}

/// Strip trailing slashes so joining with `/api/v1/...` paths stays clean.
pub fn normalize_base(raw: &str) -> String {
    raw.trim().trim_end_matches('/').to_owned()
}
