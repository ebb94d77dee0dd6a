//! REST API helpers, one function per backend endpoint.
//!
//! All plumbing (base URL, bearer header, status classification) lives
//! in [`super::http`]; functions here only name the endpoint, shape the
//! body and unwrap the response envelope.
//!
//! # Errors
//!
//! Every function returns [`ApiError`]; `Unauthorized` must be routed
//! into the session teardown path by the caller (see
//! `state::session::report_failure`).

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde_json::json;

use super::ApiError;
use super::http;
use super::types::{
    ApiMessage, Candidatura, CandidaturasResponse, ChatMessage, Contact, ContactsResponse,
    FollowersResponse, FollowingResponse, LoginResponse, MessagesResponse, Post, PostCreated,
    PostsResponse, ProfileResponse, User, UserDetail, UserResponse, UsersResponse,
};

fn user_endpoint(user_id: i64) -> String {
    format!("/user/{user_id}")
}

fn user_posts_endpoint(user_id: i64) -> String {
    format!("/user/{user_id}/posts")
}

fn follow_endpoint(user_id: i64) -> String {
    format!("/follow/{user_id}")
}

fn unfollow_endpoint(user_id: i64) -> String {
    format!("/unfollow/{user_id}")
}

fn followers_endpoint(user_id: i64) -> String {
    format!("/followers/{user_id}")
}

fn following_endpoint(user_id: i64) -> String {
    format!("/following/{user_id}")
}

fn candidatar_endpoint(post_id: i64) -> String {
    format!("/candidatar/{post_id}")
}

fn candidatura_action_endpoint(candidatura_id: i64, accept: bool) -> String {
    let acao = if accept { "aceitar" } else { "rejeitar" };
    format!("/candidaturas/{candidatura_id}/{acao}")
}

fn conversation_endpoint(contact_id: i64) -> String {
    format!("/messages/{contact_id}")
}

/// Authenticate with `POST /login`. The resulting token and user are
/// handed to the session manager by the login page.
pub async fn login(email: &str, senha: &str) -> Result<LoginResponse, ApiError> {
    http::post_json("/login", None, &json!({ "email": email, "senha": senha })).await
}

/// Create an account with `POST /register`.
pub async fn register(nome: &str, email: &str, senha: &str) -> Result<ApiMessage, ApiError> {
    http::post_json(
        "/register",
        None,
        &json!({ "nome": nome, "email": email, "senha": senha }),
    )
    .await
}

/// Fetch the identity behind `token` with `GET /profile`.
///
/// This is the boot-time validation call: any error means the stored
/// credential is unusable.
pub async fn fetch_profile(token: &str) -> Result<User, ApiError> {
    let resp: ProfileResponse = http::get_json("/profile", Some(token)).await?;
    Ok(resp.user)
}

/// Fetch the feed with `GET /posts` (most recent first).
pub async fn fetch_posts(token: &str) -> Result<Vec<Post>, ApiError> {
    let resp: PostsResponse = http::get_json("/posts", Some(token)).await?;
    Ok(resp.posts)
}

/// Publish a project with `POST /posts`.
pub async fn create_post(
    token: &str,
    titulo: &str,
    texto: &str,
    audio_url: Option<&str>,
) -> Result<PostCreated, ApiError> {
    http::post_json(
        "/posts",
        Some(token),
        &json!({ "titulo": titulo, "texto": texto, "audio_url": audio_url }),
    )
    .await
}

/// Fetch one user's posts with `GET /user/<id>/posts`.
pub async fn fetch_user_posts(token: &str, user_id: i64) -> Result<Vec<Post>, ApiError> {
    let resp: PostsResponse = http::get_json(&user_posts_endpoint(user_id), Some(token)).await?;
    Ok(resp.posts)
}

/// Search artists by name or email with `GET /search_users?q=`.
pub async fn search_users(token: &str, query: &str) -> Result<Vec<User>, ApiError> {
    let resp: UsersResponse =
        http::get_json_query("/search_users", Some(token), &[("q", query)]).await?;
    Ok(resp.users)
}

/// Fetch a user's public profile with `GET /user/<id>`.
pub async fn fetch_user(token: &str, user_id: i64) -> Result<UserDetail, ApiError> {
    let resp: UserResponse = http::get_json(&user_endpoint(user_id), Some(token)).await?;
    Ok(resp.user)
}

/// Follow a user with `POST /follow/<id>`.
pub async fn follow_user(token: &str, user_id: i64) -> Result<ApiMessage, ApiError> {
    http::post_empty(&follow_endpoint(user_id), Some(token)).await
}

/// Unfollow a user with `POST /unfollow/<id>`.
pub async fn unfollow_user(token: &str, user_id: i64) -> Result<ApiMessage, ApiError> {
    http::post_empty(&unfollow_endpoint(user_id), Some(token)).await
}

/// List a user's followers with `GET /followers/<id>`.
pub async fn fetch_followers(token: &str, user_id: i64) -> Result<Vec<User>, ApiError> {
    let resp: FollowersResponse = http::get_json(&followers_endpoint(user_id), Some(token)).await?;
    Ok(resp.followers)
}

/// List who a user follows with `GET /following/<id>`.
pub async fn fetch_following(token: &str, user_id: i64) -> Result<Vec<User>, ApiError> {
    let resp: FollowingResponse = http::get_json(&following_endpoint(user_id), Some(token)).await?;
    Ok(resp.following)
}

/// Update the session user's bio with `PUT /user/me/descricao`.
pub async fn update_descricao(token: &str, descricao: &str) -> Result<ApiMessage, ApiError> {
    http::put_json(
        "/user/me/descricao",
        Some(token),
        &json!({ "descricao": descricao }),
    )
    .await
}

/// Update the session user's social links with `PUT /user/me/links`.
pub async fn update_links(token: &str, links: &str) -> Result<ApiMessage, ApiError> {
    http::put_json("/user/me/links", Some(token), &json!({ "links": links })).await
}

/// Apply to a project with `POST /candidatar/<post_id>`.
pub async fn apply_to_post(token: &str, post_id: i64) -> Result<ApiMessage, ApiError> {
    http::post_empty(&candidatar_endpoint(post_id), Some(token)).await
}

/// List applications received on the session user's posts.
pub async fn fetch_candidaturas(token: &str) -> Result<Vec<Candidatura>, ApiError> {
    let resp: CandidaturasResponse =
        http::get_json("/candidaturas_recebidas_view", Some(token)).await?;
    Ok(resp.candidaturas)
}

/// Accept or reject an application with `POST /candidaturas/<id>/<acao>`.
pub async fn review_candidatura(
    token: &str,
    candidatura_id: i64,
    accept: bool,
) -> Result<ApiMessage, ApiError> {
    http::post_empty(&candidatura_action_endpoint(candidatura_id, accept), Some(token)).await
}

/// Send a direct message with `POST /messages`.
pub async fn send_message(
    token: &str,
    receiver_id: i64,
    message: &str,
) -> Result<ApiMessage, ApiError> {
    http::post_json(
        "/messages",
        Some(token),
        &json!({ "receiver_id": receiver_id, "message": message }),
    )
    .await
}

/// Fetch the conversation with a contact via `GET /messages/<user_id>`.
pub async fn fetch_conversation(token: &str, contact_id: i64) -> Result<Vec<ChatMessage>, ApiError> {
    let resp: MessagesResponse =
        http::get_json(&conversation_endpoint(contact_id), Some(token)).await?;
    Ok(resp.messages)
}

/// List chat contacts via `GET /messages/contacts`.
pub async fn fetch_contacts(token: &str) -> Result<Vec<Contact>, ApiError> {
    let resp: ContactsResponse = http::get_json("/messages/contacts", Some(token)).await?;
    Ok(resp.contacts)
}
