//! Authenticated request helpers over the browser `fetch` API.
//!
//! Client-side (`csr`): real HTTP calls via `gloo-net`. Off-browser the
//! helpers return [`ApiError::Unavailable`] so callers degrade without
//! panicking.
//!
//! ERROR HANDLING
//! ==============
//! The login and registration endpoints are exempt from both the bearer
//! attach and the 401 reaction, so a stale credential can never poison a
//! fresh login attempt. Everywhere else a 401 forces `apply_logout` plus
//! a redirect to the login view tagged `sessionExpired=true`; the error
//! is still returned to the caller so feature-level handling fires too.
//! Concurrent 401s converge on one logout: the handler is a no-op once
//! the store is already empty.

#[cfg(test)]
#[path = "http_test.rs"]
mod http_test;

use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::auth::session::Session;

/// Redirect target for a forced logout, tagged so the login view can show
/// a "session expired" notice.
pub const SESSION_EXPIRED_REDIRECT: &str = "/auth/login?sessionExpired=true";

/// Failure of an HTTP call, preserving the status for feature-level
/// messages (e.g. 401 on login means bad credentials).
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ApiError {
    #[error("HTTP {status}: {message}")]
    Status { status: u16, message: String },
    #[error("falha de rede: {0}")]
    Network(String),
    #[error("resposta ilegível: {0}")]
    Decode(String),
    #[error("indisponível fora do navegador")]
    Unavailable,
}

impl ApiError {
    /// HTTP status of the failure, when the server answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Login and registration must go out without a bearer credential and
/// must not trigger the forced-logout path.
pub fn is_auth_exempt(url: &str) -> bool {
    url.contains("/auth/login") || url.contains("/auth/register")
}

/// `Authorization` header value for a stored credential.
pub fn bearer_header(credential: &str) -> String {
    format!("Bearer {credential}")
}

/// Whether a response status must force a logout for this request target.
pub fn should_force_logout(status: u16, url: &str) -> bool {
    status == 401 && !is_auth_exempt(url)
}

/// Human-readable message for a failed response: the backend's own
/// `{"message": ...}` when present, a generic status line otherwise.
pub fn error_message_from_body(status: u16, body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| v.get("message").and_then(|m| m.as_str()).map(ToOwned::to_owned))
        .unwrap_or_else(|| format!("Erro {status}"))
}

#[cfg(feature = "csr")]
mod browser {
    use super::*;
    use gloo_net::http::{Request, RequestBuilder, Response};

    use crate::auth::token;

    /// Attach the bearer credential on non-exempt requests when one is
    /// stored; public endpoints go out bare and the backend decides.
    pub fn authorized(builder: RequestBuilder, url: &str) -> RequestBuilder {
        if is_auth_exempt(url) {
            return builder;
        }
        match token::read() {
            Some(credential) => builder.header("Authorization", &bearer_header(&credential)),
            None => builder,
        }
    }

    /// Force-logout exactly once per 401 batch, then redirect to login.
    pub fn handle_unauthorized(session: Session) {
        if token::read().is_none() {
            return;
        }
        leptos::logging::warn!("401 recebido; encerrando sessão");
        crate::auth::session::apply_logout(session);
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href(SESSION_EXPIRED_REDIRECT);
        }
    }

    /// Map a response to success or [`ApiError`], reacting to 401s.
    pub async fn check(session: Session, url: &str, resp: Response) -> Result<Response, ApiError> {
        let status = resp.status();
        if should_force_logout(status, url) {
            handle_unauthorized(session);
        }
        if resp.ok() {
            return Ok(resp);
        }
        let body = resp.text().await.unwrap_or_default();
        Err(ApiError::Status {
            status,
            message: error_message_from_body(status, &body),
        })
    }

    pub async fn parse_json<T: DeserializeOwned>(resp: Response) -> Result<T, ApiError> {
        resp.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
    }

    pub async fn send_bare(
        session: Session,
        url: &str,
        builder: RequestBuilder,
    ) -> Result<Response, ApiError> {
        let resp = builder
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        check(session, url, resp).await
    }

    pub async fn send_json<B: Serialize>(
        session: Session,
        url: &str,
        builder: RequestBuilder,
        body: &B,
    ) -> Result<Response, ApiError> {
        let req = builder.json(body).map_err(|e| ApiError::Network(e.to_string()))?;
        let resp = req.send().await.map_err(|e| ApiError::Network(e.to_string()))?;
        check(session, url, resp).await
    }

    pub fn get(url: &str) -> RequestBuilder {
        authorized(Request::get(url), url)
    }

    pub fn post(url: &str) -> RequestBuilder {
        authorized(Request::post(url), url)
    }

    pub fn put(url: &str) -> RequestBuilder {
        authorized(Request::put(url), url)
    }

    pub fn delete(url: &str) -> RequestBuilder {
        authorized(Request::delete(url), url)
    }
}

/// GET a JSON resource.
pub async fn get_json<T: DeserializeOwned>(session: Session, url: &str) -> Result<T, ApiError> {
    #[cfg(feature = "csr")]
    {
        let resp = browser::send_bare(session, url, browser::get(url)).await?;
        browser::parse_json(resp).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (session, url);
        Err(ApiError::Unavailable)
    }
}

/// POST a JSON body and decode a JSON response.
pub async fn post_json<T: DeserializeOwned, B: Serialize>(
    session: Session,
    url: &str,
    body: &B,
) -> Result<T, ApiError> {
    #[cfg(feature = "csr")]
    {
        let resp = browser::send_json(session, url, browser::post(url), body).await?;
        browser::parse_json(resp).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (session, url, body);
        Err(ApiError::Unavailable)
    }
}

/// POST a JSON body, ignoring the response body.
pub async fn post_unit<B: Serialize>(
    session: Session,
    url: &str,
    body: &B,
) -> Result<(), ApiError> {
    #[cfg(feature = "csr")]
    {
        browser::send_json(session, url, browser::post(url), body).await?;
        Ok(())
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (session, url, body);
        Err(ApiError::Unavailable)
    }
}

/// POST an empty JSON object (action endpoints with no payload).
pub async fn post_empty<T: DeserializeOwned>(session: Session, url: &str) -> Result<T, ApiError> {
    post_json(session, url, &serde_json::json!({})).await
}

/// PUT a JSON body and decode a JSON response.
pub async fn put_json<T: DeserializeOwned, B: Serialize>(
    session: Session,
    url: &str,
    body: &B,
) -> Result<T, ApiError> {
    #[cfg(feature = "csr")]
    {
        let resp = browser::send_json(session, url, browser::put(url), body).await?;
        browser::parse_json(resp).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (session, url, body);
        Err(ApiError::Unavailable)
    }
}

/// PUT a JSON body, ignoring the response body.
pub async fn put_unit<B: Serialize>(session: Session, url: &str, body: &B) -> Result<(), ApiError> {
    #[cfg(feature = "csr")]
    {
        browser::send_json(session, url, browser::put(url), body).await?;
        Ok(())
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (session, url, body);
        Err(ApiError::Unavailable)
    }
}

/// DELETE a resource, ignoring the response body.
pub async fn delete(session: Session, url: &str) -> Result<(), ApiError> {
    #[cfg(feature = "csr")]
    {
        browser::send_bare(session, url, browser::delete(url)).await?;
        Ok(())
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (session, url);
        Err(ApiError::Unavailable)
    }
}
