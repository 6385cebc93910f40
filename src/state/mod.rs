//! Shared client-side state outside the session core.
//!
//! DESIGN
//! ======
//! State is split by domain so individual components can depend on small
//! focused models. Each struct is provided as an `RwSignal` context at
//! the app root; the session projection itself lives in
//! [`crate::auth::session`].

pub mod notifications;
pub mod ui;
