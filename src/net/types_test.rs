use super::*;

#[test]
fn login_response_decodes() {
    let raw = r#"{
        "token": "tok123",
        "user": {"id": 1, "nome": "Ana", "email": "ana@example.com",
                 "profile_pic_url": "https://i.pravatar.cc/150?u=1"}
    }"#;
    let resp: LoginResponse = serde_json::from_str(raw).unwrap();
    assert_eq!(resp.token, "tok123");
    assert_eq!(resp.user.id, 1);
    assert_eq!(resp.user.nome, "Ana");
}

#[test]
fn user_tolerates_missing_and_null_picture() {
    let missing: User =
        serde_json::from_str(r#"{"id": 2, "nome": "Bob", "email": "bob@example.com"}"#).unwrap();
    assert_eq!(missing.profile_pic_url, None);

    let null: User = serde_json::from_str(
        r#"{"id": 2, "nome": "Bob", "email": "bob@example.com", "profile_pic_url": null}"#,
    )
    .unwrap();
    assert_eq!(null.profile_pic_url, None);
}

#[test]
fn posts_payload_decodes_with_nullable_fields() {
    let raw = r#"{"posts": [{
        "id": 10, "user_id": 1, "nome": "Ana", "email": "ana@example.com",
        "titulo": "Baixista para EP", "texto": "Procuro baixista.",
        "audio_url": null, "data": "2026-08-01 12:00:00"
    }]}"#;
    let resp: PostsResponse = serde_json::from_str(raw).unwrap();
    assert_eq!(resp.posts.len(), 1);
    let post = &resp.posts[0];
    assert_eq!(post.titulo, "Baixista para EP");
    assert_eq!(post.audio_url, None);
    assert_eq!(post.data.as_deref(), Some("2026-08-01 12:00:00"));
}

#[test]
fn candidatura_status_values_map_to_labels() {
    let mut c: Candidatura = serde_json::from_str(
        r#"{"candidatura_id": 5, "post_id": 10, "texto_post": "Procuro baixista.",
            "nome_candidato": "Bob", "email_candidato": "bob@example.com",
            "data_candidatura": "2026-08-02 09:30:00", "status": null}"#,
    )
    .unwrap();
    assert_eq!(c.status_label(), "Pendente");
    assert!(!c.is_accepted());

    c.status = Some("aceito".to_owned());
    assert!(c.is_accepted());
    assert_eq!(c.status_label(), "Aceita");

    c.status = Some("rejeitado".to_owned());
    assert!(c.is_rejected());
    assert_eq!(c.status_label(), "Rejeitada");
}

#[test]
fn contacts_tolerate_empty_history_fields() {
    let raw = r#"{"contacts": [{
        "id": 3, "nome": "Carla", "email": "carla@example.com",
        "last_message": null, "last_message_time": null
    }]}"#;
    let resp: ContactsResponse = serde_json::from_str(raw).unwrap();
    assert_eq!(resp.contacts[0].last_message, None);
}

#[test]
fn chat_message_defaults_is_sender_when_absent() {
    let raw = r#"{"messages": [{
        "id": 7, "sender_id": 3, "receiver_id": 1,
        "content": "Olá!", "timestamp": "2026-08-02 10:00:00",
        "sender_nome": "Carla", "receiver_nome": "Ana"
    }]}"#;
    let resp: MessagesResponse = serde_json::from_str(raw).unwrap();
    assert!(!resp.messages[0].is_sender);
}

#[test]
fn user_detail_carries_profile_extras() {
    let raw = r#"{"user": {
        "id": 4, "nome": "Duda", "email": "duda@example.com",
        "descricao": "Violonista.", "links_sociais": "https://example.com/duda",
        "is_following": true
    }}"#;
    let resp: UserResponse = serde_json::from_str(raw).unwrap();
    assert_eq!(resp.user.descricao.as_deref(), Some("Violonista."));
    assert!(resp.user.is_following);
}

#[test]
fn empty_message_envelope_decodes() {
    let msg: ApiMessage = serde_json::from_str("{}").unwrap();
    assert_eq!(msg.message, "");
}
