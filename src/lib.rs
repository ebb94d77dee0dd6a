//! # ensemble-client
//!
//! Leptos + WASM front-end for Ensemble, a musician-collaboration
//! platform: a project feed, artist profiles, a follow graph,
//! candidaturas (applications to projects) and a direct-message widget.
//!
//! The crate is a pure browser client; the backend is an external REST
//! collaborator reached through `net`. Session lifecycle and route
//! gating live in `state::session` and are the only pieces allowed to
//! touch the persisted credential.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: installs panic/log hooks and mounts the app.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::mount_to_body(app::App);
}
