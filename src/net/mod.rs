//! HTTP boundary: shared request plumbing and the feature services.
//!
//! DESIGN
//! ======
//! Every call goes through [`http`], which attaches the bearer credential
//! (except on the login/registration endpoints) and converts an
//! authentication-failure response into a forced logout. The per-resource
//! modules are thin request builders over [`crate::config::api_base`],
//! mirroring the backend's REST surface.

pub mod auth_api;
pub mod dashboard;
pub mod especialidades;
pub mod hospitais;
pub mod http;
pub mod medicos;
pub mod notifications;
pub mod perfil;
pub mod plantoes;
pub mod types;
pub mod ws;
