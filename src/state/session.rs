//! Session lifecycle for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Single source of truth for "who is logged in" and "which credential
//! authorizes requests". Pages read the session through context; every
//! mutation goes through [`SessionManager`], the only writer of both the
//! in-memory state and the persisted token.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use leptos::prelude::*;

use crate::net::ApiError;
use crate::net::types::User;
use crate::util::token_store::{BrowserTokens, TokenStore};

/// Lifecycle status of the browser session.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SessionStatus {
    /// Boot state, before the stored token has been inspected.
    #[default]
    Unknown,
    /// A stored token exists and is being checked against the backend.
    Validating,
    /// The backend confirmed the credential; `user` is present.
    Authenticated,
    /// No usable credential; only public routes may render.
    Anonymous,
}

/// In-memory record of authentication status and current user.
///
/// `user` is present exactly when `status` is `Authenticated`.
#[derive(Clone, Debug, Default)]
pub struct Session {
    pub status: SessionStatus,
    pub user: Option<User>,
    pub token: Option<String>,
}

impl Session {
    /// The bearer token, only while the session is authenticated.
    ///
    /// Callers must not issue authenticated requests when this is `None`.
    #[must_use]
    pub fn credential(&self) -> Option<&str> {
        match self.status {
            SessionStatus::Authenticated => self.token.as_deref(),
            _ => None,
        }
    }

    /// True while the boot-time validation has not settled.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        matches!(
            self.status,
            SessionStatus::Unknown | SessionStatus::Validating
        )
    }

    fn anonymous() -> Self {
        Self {
            status: SessionStatus::Anonymous,
            user: None,
            token: None,
        }
    }
}

/// The session manager wired into the running app.
pub type BrowserSession = SessionManager<BrowserTokens>;

/// Single writer for [`Session`] and the persisted token.
#[derive(Clone, Copy, Debug)]
pub struct SessionManager<S: TokenStore> {
    store: S,
}

impl<S: TokenStore> SessionManager<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Boot-time hydration: read the stored token once. A present token
    /// yields `Validating` (the caller must follow up with
    /// [`Self::finish_validation`]); an absent one yields `Anonymous`.
    /// No network call happens here.
    #[must_use]
    pub fn boot(&self) -> Session {
        match self.store.load() {
            Some(token) => Session {
                status: SessionStatus::Validating,
                user: None,
                token: Some(token),
            },
            None => Session::anonymous(),
        }
    }

    /// Apply the outcome of the boot-time `GET /profile` check.
    ///
    /// Any failure demotes to `Anonymous` and drops the stored token; the
    /// distinction between network, credential and payload failures is
    /// not surfaced. Completions that arrive after the session already
    /// moved on (logout, explicit login) are discarded.
    pub fn finish_validation(&self, session: &mut Session, outcome: Result<User, ApiError>) {
        if session.status != SessionStatus::Validating {
            return;
        }
        match outcome {
            Ok(user) => {
                session.status = SessionStatus::Authenticated;
                session.user = Some(user);
            }
            Err(_) => {
                self.store.clear();
                *session = Session::anonymous();
            }
        }
    }

    /// Install a credential already authenticated by the login endpoint.
    ///
    /// The token is persisted verbatim; a later [`Self::boot`] reads back
    /// the same bytes.
    pub fn login(&self, session: &mut Session, token: String, user: User) {
        self.store.save(&token);
        *session = Session {
            status: SessionStatus::Authenticated,
            user: Some(user),
            token: Some(token),
        };
    }

    /// Drop the credential and return to the anonymous state. Idempotent.
    pub fn logout(&self, session: &mut Session) {
        self.store.clear();
        *session = Session::anonymous();
    }

    /// Central sink for failures of authenticated calls: a rejected
    /// credential ends the session on the spot, so stale tokens never
    /// outlive a single rejected request. Returns the message to show.
    pub fn surface_error(&self, session: &mut Session, err: &ApiError, fallback: &str) -> String {
        if matches!(err, ApiError::Unauthorized) {
            self.logout(session);
        }
        err.user_message(fallback)
    }
}

/// Report a failed authenticated call against the shared session signal.
///
/// Every page funnels API errors through here instead of inspecting
/// statuses itself, so no view can forget to degrade the session on an
/// authorization rejection.
pub fn report_failure<S: TokenStore>(
    manager: &SessionManager<S>,
    session: RwSignal<Session>,
    err: &ApiError,
    fallback: &str,
) -> String {
    session
        .try_update(|s| manager.surface_error(s, err, fallback))
        .unwrap_or_else(|| err.user_message(fallback))
}

/// Route-guard outcome for a protected view.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GateDecision {
    /// Validation still in flight: render a placeholder, do not redirect.
    Wait,
    /// Session authenticated: render the requested view.
    Render,
    /// No session: navigate to the login entry point.
    RedirectToLogin,
}

/// Decide what a protected route may do under `status`.
///
/// Pending statuses render a placeholder instead of redirecting so a
/// slow validation never flashes the login page at a still-valid
/// session.
#[must_use]
pub fn gate(status: SessionStatus) -> GateDecision {
    match status {
        SessionStatus::Unknown | SessionStatus::Validating => GateDecision::Wait,
        SessionStatus::Authenticated => GateDecision::Render,
        SessionStatus::Anonymous => GateDecision::RedirectToLogin,
    }
}
