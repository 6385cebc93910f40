//! Session/authorization core.
//!
//! DESIGN
//! ======
//! The persisted access token ([`token`]) is the single source of truth.
//! [`session`] derives the observable session projection from it through
//! the tolerant claims decoder ([`claims`]); [`guard`] and the HTTP layer
//! read that projection but only the login/logout/expiry paths write it.

pub mod claims;
pub mod guard;
pub mod roles;
pub mod session;
pub mod token;
