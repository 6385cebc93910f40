//! Login endpoint client. Registration shares the same exempt prefix.

use crate::auth::session::Session;
use crate::config;
use crate::net::http::{self, ApiError};
use crate::net::types::{AuthResponse, LoginRequest};

/// Exchange credentials for a bearer token. Goes out without an
/// `Authorization` header even when a stale credential is stored.
pub async fn login(session: Session, credentials: &LoginRequest) -> Result<AuthResponse, ApiError> {
    let url = format!("{}/auth/login", config::api_base());
    http::post_json(session, &url, credentials).await
}
