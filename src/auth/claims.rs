//! Tolerant client-side JWT claims decoding.
//!
//! ERROR HANDLING
//! ==============
//! The backend is the real enforcement point; this decoder only surfaces
//! identity hints for the UI. Any structural failure (missing segment, bad
//! base64, invalid JSON) yields an empty [`Claims`] instead of an error so
//! session initialization never blocks on a malformed token. Signatures
//! and expiry are deliberately not verified here.

#[cfg(test)]
#[path = "claims_test.rs"]
mod claims_test;

use base64::Engine as _;
use base64::engine::general_purpose;
use serde::Deserialize;

/// Identity hints decoded from the credential's payload segment.
///
/// Every field is optional: a credential that exists but does not parse
/// produces the default value (no roles, no subject, no name).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Claims {
    pub subject: Option<String>,
    pub full_name: Option<String>,
    pub roles: Vec<String>,
    pub expiry: Option<i64>,
    pub issued_at: Option<i64>,
}

/// Wire shape of the payload segment. Unknown fields are ignored.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct WirePayload {
    sub: Option<String>,
    #[serde(rename = "fullName")]
    full_name: Option<String>,
    scope: Option<Vec<String>>,
    exp: Option<i64>,
    iat: Option<i64>,
}

/// Decode the claims from a bearer credential.
///
/// The credential must split on `.` into at least two segments with the
/// payload second; anything else returns `Claims::default()`.
pub fn decode(credential: &str) -> Claims {
    match try_decode(credential) {
        Some(claims) => claims,
        None => {
            leptos::logging::warn!("credencial JWT ilegível; sessão sem roles");
            Claims::default()
        }
    }
}

fn try_decode(credential: &str) -> Option<Claims> {
    let payload = credential.split('.').nth(1)?;
    let bytes = decode_base64_segment(payload)?;
    let wire: WirePayload = serde_json::from_slice(&bytes).ok()?;
    Some(Claims {
        subject: wire.sub,
        full_name: wire.full_name,
        roles: wire.scope.unwrap_or_default(),
        expiry: wire.exp,
        issued_at: wire.iat,
    })
}

/// Tokens normally arrive base64url-encoded, but some issuers emit the
/// standard alphabet; accept both, with or without padding.
fn decode_base64_segment(segment: &str) -> Option<Vec<u8>> {
    let trimmed = segment.trim_end_matches('=');
    general_purpose::URL_SAFE_NO_PAD
        .decode(trimmed)
        .or_else(|_| general_purpose::STANDARD_NO_PAD.decode(trimmed))
        .ok()
}
