use super::*;

// =============================================================
// Password policy
// =============================================================

#[test]
fn senha_rules_all_pass_for_strong_password() {
    assert!(senha_rules("Forte!123").all());
}

#[test]
fn senha_rules_flag_each_missing_class() {
    assert!(!senha_rules("Ab1!").length);
    assert!(!senha_rules("forte!123").uppercase);
    assert!(!senha_rules("FORTE!123").lowercase);
    assert!(!senha_rules("Fortíssima!").digit);
    assert!(!senha_rules("Forte1234").symbol);
}

// =============================================================
// Email shape
// =============================================================

#[test]
fn plausible_email_accepts_common_addresses() {
    assert!(plausible_email("ana@example.com"));
    assert!(plausible_email("a.b+c@sub.example.org"));
}

#[test]
fn plausible_email_rejects_malformed_addresses() {
    assert!(!plausible_email(""));
    assert!(!plausible_email("ana"));
    assert!(!plausible_email("ana@"));
    assert!(!plausible_email("@example.com"));
    assert!(!plausible_email("ana@example"));
    assert!(!plausible_email("ana@.com"));
    assert!(!plausible_email("ana maria@example.com"));
    assert!(!plausible_email("ana@ex@ample.com"));
}

// =============================================================
// Form validation
// =============================================================

#[test]
fn validate_passes_a_complete_form() {
    let errors = validate("Ana Clara", "ana@example.com", "Forte!123", "Forte!123");
    assert!(errors.is_empty());
}

#[test]
fn validate_requires_a_name_of_three_chars() {
    assert_eq!(
        validate("", "ana@example.com", "Forte!123", "Forte!123").nome,
        Some("Nome é obrigatório.".to_owned())
    );
    assert_eq!(
        validate("Al", "ana@example.com", "Forte!123", "Forte!123").nome,
        Some("Nome deve ter pelo menos 3 caracteres.".to_owned())
    );
}

#[test]
fn validate_reports_the_first_failed_password_rule() {
    assert_eq!(
        validate("Ana", "ana@example.com", "curta", "curta").senha,
        Some("Senha deve ter pelo menos 8 caracteres.".to_owned())
    );
    assert_eq!(
        validate("Ana", "ana@example.com", "semcaixaalta1!", "semcaixaalta1!").senha,
        Some("Senha deve conter ao menos uma letra maiúscula.".to_owned())
    );
}

#[test]
fn validate_requires_matching_confirmation() {
    let errors = validate("Ana", "ana@example.com", "Forte!123", "Forte!124");
    assert_eq!(errors.confirma, Some("As senhas não coincidem.".to_owned()));
}

#[test]
fn validate_trims_name_and_email() {
    let errors = validate("  Ana  ", " ana@example.com ", "Forte!123", "Forte!123");
    assert!(errors.is_empty());
}
