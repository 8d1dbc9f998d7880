//! REST API Bindings
//!
//! Frontend bindings to the CRM backend, organized by resource. Every request
//! carries the persisted access token as a bearer header; failures map into a
//! small error taxonomy that call sites turn into toasts (and, for 401s, a
//! session teardown).

mod admin;
mod auth;
mod contacts;
mod dashboard;
mod deals;
mod events;
mod properties;
mod tasks;
mod transactions;

use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::token;

pub use admin::*;
pub use auth::*;
pub use contacts::*;
pub use dashboard::*;
pub use deals::*;
pub use events::*;
pub use properties::*;
pub use tasks::*;
pub use transactions::*;

pub const API_BASE: &str = "/api";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// Request never reached the server, or transport failed mid-flight.
    #[error("{0}")]
    Network(String),
    /// 401; carries the server detail when present.
    #[error("{0}")]
    Unauthorized(String),
    /// 4xx with a field-level or detail message.
    #[error("{0}")]
    Validation(String),
    #[error("record not found")]
    NotFound,
    #[error("server error ({0})")]
    Server(u16),
    #[error("unexpected response: {0}")]
    Decode(String),
}

fn url(path: &str) -> String {
    format!("{API_BASE}{path}")
}

fn authorize(builder: RequestBuilder) -> RequestBuilder {
    match token::load_access_token() {
        Some(access) => builder.header("Authorization", &format!("Bearer {access}")),
        None => builder,
    }
}

/// Maps a non-2xx status plus body text into the error taxonomy.
pub(crate) fn error_from_status(status: u16, body: &str) -> ApiError {
    match status {
        401 => ApiError::Unauthorized(
            extract_detail(body).unwrap_or_else(|| "Authentication required".to_string()),
        ),
        404 => ApiError::NotFound,
        400 | 403 | 409 | 422 => ApiError::Validation(
            extract_detail(body).unwrap_or_else(|| format!("Request rejected ({status})")),
        ),
        500..=599 => ApiError::Server(status),
        other => ApiError::Decode(format!("unexpected status {other}")),
    }
}

/// Pulls the most specific human-readable message out of an error body.
///
/// Bodies arrive as `{"detail": "..."}`, `{"error": "..."}`, a bare string,
/// or a field-keyed map of validation messages.
pub(crate) fn extract_detail(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    match value {
        Value::String(message) => Some(message),
        Value::Object(map) => {
            for key in ["detail", "error"] {
                if let Some(Value::String(message)) = map.get(key) {
                    return Some(message.clone());
                }
            }
            map.into_iter().next().map(|(field, messages)| {
                let text = match messages {
                    Value::String(message) => message,
                    Value::Array(items) => items
                        .into_iter()
                        .filter_map(|item| item.as_str().map(str::to_owned))
                        .collect::<Vec<_>>()
                        .join(", "),
                    other => other.to_string(),
                };
                format!("{field}: {text}")
            })
        }
        _ => None,
    }
}

async fn check_status(response: Response) -> Result<Response, ApiError> {
    if response.ok() {
        return Ok(response);
    }
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    Err(error_from_status(status, &body))
}

async fn decode_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

pub(crate) async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    let response = authorize(Request::get(&url(path)))
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    decode_json(check_status(response).await?).await
}

pub(crate) async fn post_json<B: Serialize, T: DeserializeOwned>(
    path: &str,
    body: &B,
) -> Result<T, ApiError> {
    send_with_body(Request::post(&url(path)), body).await
}

pub(crate) async fn patch_json<B: Serialize, T: DeserializeOwned>(
    path: &str,
    body: &B,
) -> Result<T, ApiError> {
    send_with_body(Request::patch(&url(path)), body).await
}

pub(crate) async fn delete(path: &str) -> Result<(), ApiError> {
    let response = authorize(Request::delete(&url(path)))
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    check_status(response).await?;
    Ok(())
}

async fn send_with_body<B: Serialize, T: DeserializeOwned>(
    builder: RequestBuilder,
    body: &B,
) -> Result<T, ApiError> {
    let payload = serde_json::to_string(body).map_err(|e| ApiError::Decode(e.to_string()))?;
    let response = authorize(builder)
        .header("Content-Type", "application/json")
        .body(payload)
        .map_err(|e| ApiError::Network(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    decode_json(check_status(response).await?).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_detail_shapes() {
        assert_eq!(
            extract_detail(r#"{"detail":"No active account found"}"#),
            Some("No active account found".to_string())
        );
        assert_eq!(
            extract_detail(r#"{"error":"Email already registered."}"#),
            Some("Email already registered.".to_string())
        );
        assert_eq!(
            extract_detail(r#""plain failure""#),
            Some("plain failure".to_string())
        );
        assert_eq!(
            extract_detail(r#"{"email":["Enter a valid email address."]}"#),
            Some("email: Enter a valid email address.".to_string())
        );
        assert_eq!(extract_detail("<html>gateway timeout</html>"), None);
    }

    #[test]
    fn test_error_from_status_taxonomy() {
        assert_eq!(
            error_from_status(401, r#"{"detail":"Token expired"}"#),
            ApiError::Unauthorized("Token expired".to_string())
        );
        assert_eq!(
            error_from_status(400, r#"{"title":["This field is required."]}"#),
            ApiError::Validation("title: This field is required.".to_string())
        );
        assert_eq!(error_from_status(404, ""), ApiError::NotFound);
        assert_eq!(error_from_status(500, ""), ApiError::Server(500));
        assert_eq!(error_from_status(503, "busy"), ApiError::Server(503));
    }

    #[test]
    fn test_error_messages_read_like_toasts() {
        let err = error_from_status(401, "{}");
        assert_eq!(err.to_string(), "Authentication required");
        assert_eq!(error_from_status(404, "").to_string(), "record not found");
        assert_eq!(error_from_status(502, "").to_string(), "server error (502)");
    }
}
