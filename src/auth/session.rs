//! Observable session state derived from the persisted access token.
//!
//! DESIGN
//! ======
//! The session is a projection of the Token Store: whoever holds the
//! [`Session`] signal observes login/logout transitions, and a late
//! subscriber immediately sees the current value (Leptos signals replay
//! their latest state). [`apply_login`] and [`apply_logout`] are the only
//! writers; each updates storage, claims, and the signal in one
//! synchronous step, so observers never see a stale claims set paired
//! with a fresh authenticated flag.
//!
//! Presence of a stored credential counts as "authenticated" even when
//! its payload fails to decode; such a session simply carries no roles.
//! The backend remains the real enforcement point.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use leptos::prelude::*;

use crate::auth::claims::{self, Claims};
use crate::auth::roles;
use crate::auth::token;

/// Shared handle to the live session, provided via context at the app
/// root and injected into every consumer (guard, HTTP layer, UI).
pub type Session = RwSignal<SessionState>;

/// Immutable snapshot of {credential presence, decoded claims}.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionState {
    authenticated: bool,
    claims: Claims,
}

impl SessionState {
    /// Project a session from a (possibly absent) stored credential.
    pub fn from_token(credential: Option<&str>) -> Self {
        match credential {
            Some(credential) => Self {
                authenticated: true,
                claims: claims::decode(credential),
            },
            None => Self::logged_out(),
        }
    }

    /// The canonical unauthenticated state.
    pub fn logged_out() -> Self {
        Self::default()
    }

    /// Existence check only; does not imply the claims parsed or that the
    /// token is unexpired.
    pub fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    /// Granted authorities, empty when unauthenticated or undecodable.
    pub fn roles(&self) -> &[String] {
        &self.claims.roles
    }

    /// Case-insensitive, prefix-normalized role check.
    pub fn has_role(&self, name: &str) -> bool {
        roles::has_role(&self.claims.roles, name)
    }

    /// Display name from the token payload, if present.
    pub fn display_name(&self) -> Option<&str> {
        self.claims.full_name.as_deref()
    }

    /// Subject (login email) from the token payload, if present.
    pub fn subject_email(&self) -> Option<&str> {
        self.claims.subject.as_deref()
    }
}

/// Session at process start: whatever credential survived the last visit.
pub fn init_session() -> SessionState {
    SessionState::from_token(token::read().as_deref())
}

/// Persist a fresh credential and publish the new session atomically.
pub fn apply_login(session: Session, credential: &str) {
    token::save(credential);
    session.set(SessionState::from_token(Some(credential)));
}

/// Drop the credential and publish the logged-out session. Idempotent:
/// logging out twice leaves the same state and storage.
pub fn apply_logout(session: Session) {
    token::clear();
    session.set(SessionState::logged_out());
}
