use super::*;

#[test]
fn endpoint_joins_base_and_path() {
    let url = endpoint("/posts");
    assert!(url.starts_with(api_base()));
    assert!(url.ends_with("/posts"));
}

#[test]
fn bearer_header_format() {
    assert_eq!(bearer("tok123"), "Bearer tok123");
}

#[test]
fn status_401_maps_to_unauthorized() {
    assert_eq!(
        classify_failure(401, Some("Token inválido".to_owned())),
        ApiError::Unauthorized
    );
}

#[test]
fn other_statuses_keep_the_server_message() {
    assert_eq!(
        classify_failure(409, Some("Usuário já existe com este email.".to_owned())),
        ApiError::Rejected {
            status: 409,
            message: "Usuário já existe com este email.".to_owned(),
        }
    );
}

#[test]
fn missing_body_message_becomes_empty() {
    assert_eq!(
        classify_failure(500, None),
        ApiError::Rejected {
            status: 500,
            message: String::new(),
        }
    );
}

#[test]
fn user_message_prefers_server_text() {
    let err = ApiError::Rejected {
        status: 400,
        message: "Post não encontrado.".to_owned(),
    };
    assert_eq!(err.user_message("Erro."), "Post não encontrado.");
}

#[test]
fn user_message_falls_back_when_server_is_silent() {
    let err = ApiError::Rejected {
        status: 500,
        message: String::new(),
    };
    assert_eq!(err.user_message("Erro ao carregar posts."), "Erro ao carregar posts.");
}

#[test]
fn network_failures_get_the_connection_message() {
    let err = ApiError::Network("timeout".to_owned());
    assert_eq!(err.user_message("Erro."), "Erro de conexão com o servidor.");
}

#[test]
fn malformed_payload_uses_the_fallback() {
    let err = ApiError::Malformed("missing field `user`".to_owned());
    assert_eq!(err.user_message("Erro ao carregar perfil."), "Erro ao carregar perfil.");
}
