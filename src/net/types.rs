//! Wire DTOs for the backend REST boundary.
//!
//! DESIGN
//! ======
//! Field names mirror the backend JSON verbatim (Portuguese domain
//! vocabulary included) so serde stays declarative. Fields the backend
//! may omit or null are `Option` with `#[serde(default)]`.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// An authenticated user as returned by `/login` and `/profile`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    /// Display name.
    pub nome: String,
    pub email: String,
    #[serde(default)]
    pub profile_pic_url: Option<String>,
}

/// Successful `POST /login` payload, handed to the session manager.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: User,
}

/// Envelope for `GET /profile`.
#[derive(Clone, Debug, Deserialize)]
pub struct ProfileResponse {
    pub user: User,
}

/// Generic `{ "message": ... }` acknowledgement body.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct ApiMessage {
    #[serde(default)]
    pub message: String,
}

/// A project post on the feed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: i64,
    pub user_id: i64,
    /// Author display name, denormalized by the backend.
    pub nome: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub titulo: String,
    pub texto: String,
    #[serde(default)]
    pub audio_url: Option<String>,
    #[serde(default)]
    pub profile_pic_url: Option<String>,
    /// Creation timestamp, preformatted by the backend.
    #[serde(default)]
    pub data: Option<String>,
}

/// Envelope for post list endpoints.
#[derive(Clone, Debug, Deserialize)]
pub struct PostsResponse {
    pub posts: Vec<Post>,
}

/// `POST /posts` acknowledgement carrying the created post.
#[derive(Clone, Debug, Deserialize)]
pub struct PostCreated {
    #[serde(default)]
    pub message: String,
    pub post: Post,
}

/// Full user record from `GET /user/<id>`, including profile extras and
/// the caller's follow relationship.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct UserDetail {
    pub id: i64,
    pub nome: String,
    pub email: String,
    #[serde(default)]
    pub profile_pic_url: Option<String>,
    #[serde(default)]
    pub descricao: Option<String>,
    #[serde(default)]
    pub links_sociais: Option<String>,
    #[serde(default)]
    pub is_following: bool,
}

/// Envelope for `GET /user/<id>`.
#[derive(Clone, Debug, Deserialize)]
pub struct UserResponse {
    pub user: UserDetail,
}

/// Envelope for `GET /search_users`.
#[derive(Clone, Debug, Deserialize)]
pub struct UsersResponse {
    #[serde(default)]
    pub users: Vec<User>,
}

/// Envelope for `GET /followers/<id>`.
#[derive(Clone, Debug, Deserialize)]
pub struct FollowersResponse {
    #[serde(default)]
    pub followers: Vec<User>,
}

/// Envelope for `GET /following/<id>`.
#[derive(Clone, Debug, Deserialize)]
pub struct FollowingResponse {
    #[serde(default)]
    pub following: Vec<User>,
}

/// A received application to one of the session user's posts.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidatura {
    pub candidatura_id: i64,
    pub post_id: i64,
    #[serde(default)]
    pub texto_post: String,
    pub nome_candidato: String,
    #[serde(default)]
    pub email_candidato: String,
    #[serde(default)]
    pub data_candidatura: String,
    /// `"aceito"`, `"rejeitado"`, or null while pending.
    #[serde(default)]
    pub status: Option<String>,
}

impl Candidatura {
    #[must_use]
    pub fn is_accepted(&self) -> bool {
        self.status.as_deref() == Some("aceito")
    }

    #[must_use]
    pub fn is_rejected(&self) -> bool {
        self.status.as_deref() == Some("rejeitado")
    }

    /// Display label; pending applications have no stored status.
    #[must_use]
    pub fn status_label(&self) -> &'static str {
        if self.is_accepted() {
            "Aceita"
        } else if self.is_rejected() {
            "Rejeitada"
        } else {
            "Pendente"
        }
    }
}

/// Envelope for `GET /candidaturas_recebidas_view`.
#[derive(Clone, Debug, Deserialize)]
pub struct CandidaturasResponse {
    #[serde(default)]
    pub candidaturas: Vec<Candidatura>,
}

/// A chat contact with the latest exchanged message, for the widget list.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Contact {
    pub id: i64,
    pub nome: String,
    pub email: String,
    #[serde(default)]
    pub profile_pic_url: Option<String>,
    #[serde(default)]
    pub last_message: Option<String>,
    #[serde(default)]
    pub last_message_time: Option<String>,
}

/// Envelope for `GET /messages/contacts`.
#[derive(Clone, Debug, Deserialize)]
pub struct ContactsResponse {
    #[serde(default)]
    pub contacts: Vec<Contact>,
}

/// A direct message between the session user and a contact.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct ChatMessage {
    pub id: i64,
    pub sender_id: i64,
    pub receiver_id: i64,
    pub content: String,
    #[serde(default)]
    pub timestamp: String,
    #[serde(default)]
    pub sender_nome: String,
    #[serde(default)]
    pub receiver_nome: String,
    /// True when the session user sent this message.
    #[serde(default)]
    pub is_sender: bool,
}

/// Envelope for `GET /messages/<user_id>`.
#[derive(Clone, Debug, Deserialize)]
pub struct MessagesResponse {
    #[serde(default)]
    pub messages: Vec<ChatMessage>,
}
