//! Centralized HTTP plumbing: base URL, bearer header, status mapping.
//!
//! Client-side (hydrate): real HTTP via `gloo-net`. Native builds return
//! `ApiError::Network` so pages degrade without a browser.
//!
//! ERROR HANDLING
//! ==============
//! Every endpoint funnels through the helpers here, so an authorization
//! rejection is classified in exactly one place (`ApiError::Unauthorized`)
//! and callers can route it into the session teardown path instead of
//! re-implementing 401 checks per view.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "http_test.rs"]
mod http_test;

use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

/// Failures surfaced by backend calls.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ApiError {
    /// The request never produced an HTTP response.
    #[error("network failure: {0}")]
    Network(String),
    /// The backend rejected the bearer credential (HTTP 401).
    #[error("authorization rejected")]
    Unauthorized,
    /// A success status carried a payload of an unexpected shape.
    #[error("malformed response: {0}")]
    Malformed(String),
    /// Any other non-success status, with the server message when present.
    #[error("status {status}: {message}")]
    Rejected { status: u16, message: String },
}

impl ApiError {
    /// Message suitable for direct display, preferring the server-provided
    /// text and falling back to `fallback` otherwise.
    #[must_use]
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            ApiError::Rejected { message, .. } if !message.is_empty() => message.clone(),
            ApiError::Network(_) => "Erro de conexão com o servidor.".to_owned(),
            _ => fallback.to_owned(),
        }
    }
}

/// Backend origin; override at build time with `ENSEMBLE_API_BASE`.
#[must_use]
pub fn api_base() -> &'static str {
    option_env!("ENSEMBLE_API_BASE").unwrap_or("http://localhost:5000")
}

/// Absolute URL for an API `path` (which must start with `/`).
#[must_use]
pub fn endpoint(path: &str) -> String {
    format!("{}{path}", api_base())
}

#[cfg(any(test, feature = "hydrate"))]
fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

/// Map a non-success status plus body message onto the error taxonomy.
#[cfg(any(test, feature = "hydrate"))]
fn classify_failure(status: u16, message: Option<String>) -> ApiError {
    if status == 401 {
        return ApiError::Unauthorized;
    }
    ApiError::Rejected {
        status,
        message: message.unwrap_or_default(),
    }
}

#[cfg(feature = "hydrate")]
#[derive(serde::Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
}

#[cfg(feature = "hydrate")]
async fn decode<T: DeserializeOwned>(resp: gloo_net::http::Response) -> Result<T, ApiError> {
    if resp.ok() {
        return resp
            .json::<T>()
            .await
            .map_err(|e| ApiError::Malformed(e.to_string()));
    }
    let status = resp.status();
    let message = resp.json::<ErrorBody>().await.ok().and_then(|b| b.message);
    Err(classify_failure(status, message))
}

#[cfg(not(feature = "hydrate"))]
fn offline() -> ApiError {
    ApiError::Network("not available outside the browser".to_owned())
}

/// GET `path`, decoding a JSON body.
pub async fn get_json<T: DeserializeOwned>(path: &str, token: Option<&str>) -> Result<T, ApiError> {
    get_json_query::<T>(path, token, &[]).await
}

/// GET `path` with query parameters, decoding a JSON body.
pub async fn get_json_query<T: DeserializeOwned>(
    path: &str,
    token: Option<&str>,
    query: &[(&str, &str)],
) -> Result<T, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let mut req = gloo_net::http::Request::get(&endpoint(path));
        if !query.is_empty() {
            req = req.query(query.iter().copied());
        }
        if let Some(token) = token {
            req = req.header("Authorization", &bearer(token));
        }
        let resp = req
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        decode(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (path, token, query);
        Err(offline())
    }
}

/// POST `path` with a JSON body, decoding a JSON response.
pub async fn post_json<T: DeserializeOwned, B: Serialize>(
    path: &str,
    token: Option<&str>,
    body: &B,
) -> Result<T, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let mut req = gloo_net::http::Request::post(&endpoint(path));
        if let Some(token) = token {
            req = req.header("Authorization", &bearer(token));
        }
        let resp = req
            .json(body)
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        decode(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (path, token, body);
        Err(offline())
    }
}

/// POST `path` without a body, decoding a JSON response.
pub async fn post_empty<T: DeserializeOwned>(
    path: &str,
    token: Option<&str>,
) -> Result<T, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let mut req = gloo_net::http::Request::post(&endpoint(path));
        if let Some(token) = token {
            req = req.header("Authorization", &bearer(token));
        }
        let resp = req
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        decode(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (path, token);
        Err(offline())
    }
}

/// PUT `path` with a JSON body, decoding a JSON response.
pub async fn put_json<T: DeserializeOwned, B: Serialize>(
    path: &str,
    token: Option<&str>,
    body: &B,
) -> Result<T, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let mut req = gloo_net::http::Request::put(&endpoint(path));
        if let Some(token) = token {
            req = req.header("Authorization", &bearer(token));
        }
        let resp = req
            .json(body)
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        decode(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (path, token, body);
        Err(offline())
    }
}
