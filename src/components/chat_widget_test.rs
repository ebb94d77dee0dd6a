use super::*;

fn contact(last_message: Option<&str>) -> Contact {
    Contact {
        id: 3,
        nome: "Carla".to_owned(),
        email: "carla@example.com".to_owned(),
        profile_pic_url: None,
        last_message: last_message.map(str::to_owned),
        last_message_time: None,
    }
}

#[test]
fn message_class_aligns_by_sender() {
    assert!(message_class(true).contains("--sent"));
    assert!(message_class(false).contains("--received"));
}

#[test]
fn preview_falls_back_to_email() {
    assert_eq!(contact_preview(&contact(None)), "carla@example.com");
    assert_eq!(contact_preview(&contact(Some(""))), "carla@example.com");
}

#[test]
fn preview_keeps_short_messages() {
    assert_eq!(contact_preview(&contact(Some("Olá!"))), "Olá!");
}

#[test]
fn preview_truncates_long_messages_with_ellipsis() {
    let long = "a".repeat(PREVIEW_CHARS + 10);
    let preview = contact_preview(&contact(Some(&long)));
    assert_eq!(preview.chars().count(), PREVIEW_CHARS + 1);
    assert!(preview.ends_with('…'));
}

#[test]
fn preview_truncation_is_character_safe() {
    let accented = "á".repeat(PREVIEW_CHARS + 1);
    let preview = contact_preview(&contact(Some(&accented)));
    assert!(preview.starts_with('á'));
    assert!(preview.ends_with('…'));
}
