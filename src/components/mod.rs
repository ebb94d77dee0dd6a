//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render app chrome and interaction surfaces while reading
//! shared session state from Leptos context providers.

pub mod chat_widget;
pub mod navbar;
pub mod post_card;
pub mod require_auth;
