use super::*;

#[test]
fn new_post_requires_title_and_text() {
    assert!(validate_new_post("", "Procuro baixista.").is_err());
    assert!(validate_new_post("Baixista para EP", "").is_err());
    assert!(validate_new_post("   ", "   ").is_err());
}

#[test]
fn new_post_accepts_filled_fields() {
    assert!(validate_new_post("Baixista para EP", "Procuro baixista.").is_ok());
}

#[test]
fn cannot_apply_to_own_post() {
    assert!(!can_apply(1, Some(1)));
}

#[test]
fn can_apply_to_someone_elses_post() {
    assert!(can_apply(1, Some(2)));
}

#[test]
fn cannot_apply_without_a_session_user() {
    assert!(!can_apply(1, None));
}
