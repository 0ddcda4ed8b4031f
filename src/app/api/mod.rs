//! Resource client: the only component that performs network I/O.
//!
//! Thin `reqwest` plumbing plus a normalized error shape. No retries and no
//! caching; every call hits the backend.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::config;

pub mod models;
pub mod resources;

pub use models::*;

// =============================================================================
// Error taxonomy
// =============================================================================

/// How a backend call failed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// Transport failure: backend down or unreachable.
    NetworkUnreachable,
    /// The backend answered with a structured failure message.
    ServerRejected,
    /// Anything else (malformed body, unexpected status without a message).
    Unknown,
}

/// Normalized failure surfaced to screens. `Display` is the user-facing text.
#[derive(Clone, Debug, thiserror::Error)]
#[error("{message}")]
pub struct ApiError {
    pub kind: ErrorKind,
    pub message: String,
}

impl ApiError {
    pub fn network() -> Self {
        ApiError {
            kind: ErrorKind::NetworkUnreachable,
            message: "Erro de conexão. Verifique se o servidor está rodando.".to_string(),
        }
    }

    pub fn rejected(message: impl Into<String>) -> Self {
        ApiError {
            kind: ErrorKind::ServerRejected,
            message: message.into(),
        }
    }

    pub fn unknown(message: impl Into<String>) -> Self {
        ApiError {
            kind: ErrorKind::Unknown,
            message: message.into(),
        }
    }
}

/// Map a transport-level `reqwest` error. Decode failures are not
/// connectivity problems, everything else before a status arrives is.
fn from_transport(err: reqwest::Error) -> ApiError {
    if err.is_decode() {
        ApiError::unknown(err.to_string())
    } else {
        ApiError::network()
    }
}

/// Structured error body the backend sends on rejections.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
}

/// Turn a non-2xx response into `ServerRejected` when it carries a message,
/// `Unknown` otherwise.
async fn check(resp: reqwest::Response) -> Result<reqwest::Response, ApiError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }
    let message = resp
        .json::<ErrorBody>()
        .await
        .ok()
        .and_then(|body| body.message);
    tracing::warn!(%status, ?message, "backend rejected request");
    match message {
        Some(msg) => Err(ApiError::rejected(msg)),
        None => Err(ApiError::unknown(format!("HTTP {status}"))),
    }
}

// =============================================================================
// Verbs
// =============================================================================

fn url(path: &str) -> String {
    format!("{}{}", config::base_url(), path)
}

pub async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    tracing::debug!(path, "GET");
    let resp = reqwest::Client::new()
        .get(url(path))
        .send()
        .await
        .map_err(from_transport)?;
    let resp = check(resp).await?;
    resp.json::<T>()
        .await
        .map_err(|e| ApiError::unknown(e.to_string()))
}

pub async fn post_json<B: Serialize, T: DeserializeOwned>(
    path: &str,
    body: &B,
) -> Result<T, ApiError> {
    tracing::debug!(path, "POST");
    let resp = reqwest::Client::new()
        .post(url(path))
        .json(body)
        .send()
        .await
        .map_err(from_transport)?;
    let resp = check(resp).await?;
    resp.json::<T>()
        .await
        .map_err(|e| ApiError::unknown(e.to_string()))
}

pub async fn put_json<B: Serialize, T: DeserializeOwned>(
    path: &str,
    body: &B,
) -> Result<T, ApiError> {
    tracing::debug!(path, "PUT");
    let resp = reqwest::Client::new()
        .put(url(path))
        .json(body)
        .send()
        .await
        .map_err(from_transport)?;
    let resp = check(resp).await?;
    resp.json::<T>()
        .await
        .map_err(|e| ApiError::unknown(e.to_string()))
}

pub async fn delete(path: &str) -> Result<(), ApiError> {
    tracing::debug!(path, "DELETE");
    let resp = reqwest::Client::new()
        .delete(url(path))
        .send()
        .await
        .map_err(from_transport)?;
    check(resp).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_is_the_user_facing_message() {
        let err = ApiError::rejected("Quarto já reservado");
        assert_eq!(err.to_string(), "Quarto já reservado");
        assert_eq!(err.kind, ErrorKind::ServerRejected);
    }

    #[test]
    fn network_error_has_generic_connectivity_text() {
        let err = ApiError::network();
        assert_eq!(err.kind, ErrorKind::NetworkUnreachable);
        assert!(err.message.contains("conexão"));
    }

    #[test]
    fn error_body_message_is_optional() {
        let body: ErrorBody = serde_json::from_str("{}").unwrap();
        assert!(body.message.is_none());
        let body: ErrorBody = serde_json::from_str(r#"{"message":"nope"}"#).unwrap();
        assert_eq!(body.message.as_deref(), Some("nope"));
    }
}
