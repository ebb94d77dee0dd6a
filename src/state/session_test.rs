use super::*;
use crate::util::token_store::MemoryTokens;

fn user(id: i64, nome: &str) -> User {
    User {
        id,
        nome: nome.to_owned(),
        email: format!("{}@example.com", nome.to_lowercase()),
        profile_pic_url: None,
    }
}

fn manager_with(token: Option<&str>) -> (SessionManager<MemoryTokens>, MemoryTokens) {
    let store = MemoryTokens::default();
    if let Some(token) = token {
        store.save(token);
    }
    (SessionManager::new(store.clone()), store)
}

// =============================================================
// Boot
// =============================================================

#[test]
fn boot_without_token_is_anonymous() {
    let (manager, _store) = manager_with(None);
    let session = manager.boot();
    assert_eq!(session.status, SessionStatus::Anonymous);
    assert!(session.user.is_none());
    assert!(session.token.is_none());
}

#[test]
fn boot_with_token_is_validating() {
    let (manager, _store) = manager_with(Some("tok123"));
    let session = manager.boot();
    assert_eq!(session.status, SessionStatus::Validating);
    assert!(session.user.is_none());
    assert_eq!(session.token.as_deref(), Some("tok123"));
}

#[test]
fn pending_session_exposes_no_credential() {
    let (manager, _store) = manager_with(Some("tok123"));
    let session = manager.boot();
    assert!(session.is_pending());
    assert_eq!(session.credential(), None);
}

// =============================================================
// Validation outcomes
// =============================================================

#[test]
fn validation_success_authenticates() {
    let (manager, _store) = manager_with(Some("tok123"));
    let mut session = manager.boot();
    manager.finish_validation(&mut session, Ok(user(1, "Ana")));
    assert_eq!(session.status, SessionStatus::Authenticated);
    assert_eq!(session.user.as_ref().map(|u| u.id), Some(1));
    assert_eq!(session.credential(), Some("tok123"));
}

#[test]
fn validation_rejection_demotes_and_clears_token() {
    let (manager, store) = manager_with(Some("tok123"));
    let mut session = manager.boot();
    manager.finish_validation(&mut session, Err(ApiError::Unauthorized));
    assert_eq!(session.status, SessionStatus::Anonymous);
    assert!(session.user.is_none());
    assert!(session.token.is_none());
    assert_eq!(store.load(), None);
}

#[test]
fn network_failure_during_validation_also_demotes() {
    let (manager, store) = manager_with(Some("tok123"));
    let mut session = manager.boot();
    manager.finish_validation(&mut session, Err(ApiError::Network("offline".to_owned())));
    assert_eq!(session.status, SessionStatus::Anonymous);
    assert_eq!(store.load(), None);
}

#[test]
fn stale_validation_outcome_is_discarded() {
    let (manager, store) = manager_with(Some("tok123"));
    let mut session = manager.boot();
    manager.logout(&mut session);
    manager.finish_validation(&mut session, Ok(user(1, "Ana")));
    assert_eq!(session.status, SessionStatus::Anonymous);
    assert!(session.user.is_none());
    assert_eq!(store.load(), None);
}

// =============================================================
// Login / logout
// =============================================================

#[test]
fn login_persists_token_and_authenticates() {
    let (manager, store) = manager_with(None);
    let mut session = manager.boot();
    manager.login(&mut session, "tok123".to_owned(), user(2, "Bob"));
    assert_eq!(session.status, SessionStatus::Authenticated);
    assert_eq!(session.credential(), Some("tok123"));
    assert_eq!(store.load(), Some("tok123".to_owned()));
}

#[test]
fn relogin_overwrites_token_and_user() {
    let (manager, store) = manager_with(None);
    let mut session = manager.boot();
    manager.login(&mut session, "tok123".to_owned(), user(2, "Bob"));
    manager.login(&mut session, "tok456".to_owned(), user(3, "Carla"));
    assert_eq!(session.user.as_ref().map(|u| u.id), Some(3));
    assert_eq!(store.load(), Some("tok456".to_owned()));
}

#[test]
fn persisted_token_round_trips_byte_for_byte() {
    let token = "v2.eyJpZCI6MX0=.áé-☃";
    let (manager, store) = manager_with(None);
    let mut session = manager.boot();
    manager.login(&mut session, token.to_owned(), user(2, "Bob"));
    assert_eq!(store.load().as_deref(), Some(token));
    assert_eq!(manager.boot().token.as_deref(), Some(token));
}

#[test]
fn logout_clears_state_and_storage() {
    let (manager, store) = manager_with(None);
    let mut session = manager.boot();
    manager.login(&mut session, "tok123".to_owned(), user(2, "Bob"));
    manager.logout(&mut session);
    assert_eq!(session.status, SessionStatus::Anonymous);
    assert!(session.user.is_none());
    assert_eq!(store.load(), None);
}

#[test]
fn logout_is_idempotent() {
    let (manager, store) = manager_with(None);
    let mut session = manager.boot();
    manager.logout(&mut session);
    manager.logout(&mut session);
    assert_eq!(session.status, SessionStatus::Anonymous);
    assert!(session.user.is_none());
    assert_eq!(store.load(), None);
}

// =============================================================
// Centralized failure reporting
// =============================================================

#[test]
fn unauthorized_mid_session_tears_down_the_session() {
    let (manager, store) = manager_with(None);
    let mut session = manager.boot();
    manager.login(&mut session, "tok123".to_owned(), user(2, "Bob"));
    let msg = manager.surface_error(&mut session, &ApiError::Unauthorized, "Sessão expirada.");
    assert_eq!(session.status, SessionStatus::Anonymous);
    assert_eq!(store.load(), None);
    assert_eq!(msg, "Sessão expirada.");
}

#[test]
fn rejected_call_keeps_session_and_prefers_server_message() {
    let (manager, _store) = manager_with(None);
    let mut session = manager.boot();
    manager.login(&mut session, "tok123".to_owned(), user(2, "Bob"));
    let err = ApiError::Rejected {
        status: 400,
        message: "Você já se candidatou a este post.".to_owned(),
    };
    let msg = manager.surface_error(&mut session, &err, "Erro ao se candidatar.");
    assert_eq!(session.status, SessionStatus::Authenticated);
    assert_eq!(msg, "Você já se candidatou a este post.");
}

// =============================================================
// Route guard decisions
// =============================================================

#[test]
fn gate_waits_while_pending() {
    assert_eq!(gate(SessionStatus::Unknown), GateDecision::Wait);
    assert_eq!(gate(SessionStatus::Validating), GateDecision::Wait);
}

#[test]
fn gate_renders_when_authenticated() {
    assert_eq!(gate(SessionStatus::Authenticated), GateDecision::Render);
}

#[test]
fn gate_redirects_when_anonymous() {
    assert_eq!(gate(SessionStatus::Anonymous), GateDecision::RedirectToLogin);
}
