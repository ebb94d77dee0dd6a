//! Networking modules for the JSON/REST backend boundary.
//!
//! SYSTEM CONTEXT
//! ==============
//! `http` owns request plumbing and status classification, `api` exposes
//! one function per backend endpoint, `types` defines the wire schema.

pub mod api;
pub mod http;
pub mod types;

pub use http::ApiError;
