//! # fluxivamed
//!
//! Leptos + WASM single-page client for the FluxivaMed medical-shift
//! ("plantão") scheduling platform. Hospital administrators, schedulers,
//! and physicians authenticate against the REST backend and manage
//! hospitals, specialties, physicians, shift postings, availability
//! windows, and their own profiles.
//!
//! The session/authorization core lives under [`auth`]: token persistence,
//! JWT claims decoding, the role predicate, the route guard, and the
//! request authenticator wired through [`net::http`].

pub mod app;
pub mod auth;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point, invoked once by the generated WASM bindings.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::mount_to_body(app::App);
}
