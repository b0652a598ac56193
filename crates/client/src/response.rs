//! Response-body handling shared by all endpoint modules.
//!
//! The backend is not uniform: some endpoints wrap payloads in a
//! `{success, data, message}` envelope, others answer with bare JSON, and a
//! few report failures inside a 200 body. The helpers here normalize all of
//! that into `AppResult`.

use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::warn;

use spliteasy_shared::{AppError, AppResult};

/// The backend's `{success, data, message}` wrapper.
#[derive(Debug, Deserialize)]
pub struct Envelope<T> {
    /// Whether the server considers the request successful. Some endpoints
    /// omit it entirely.
    pub success: Option<bool>,
    /// The payload.
    pub data: Option<T>,
    /// Human-readable message, mostly present on failure.
    pub message: Option<String>,
}

/// Reads a response, classifies HTTP errors, and parses the body as `T`.
pub(crate) async fn parse_json<T: DeserializeOwned>(response: reqwest::Response) -> AppResult<T> {
    let status = response.status().as_u16();
    let body = response.text().await.map_err(transport)?;

    if !(200..300).contains(&status) {
        warn!(status, "request failed");
        return Err(error_from_body(status, &body));
    }

    serde_json::from_str(&body)
        .map_err(|e| AppError::Transport(format!("invalid response body: {e}")))
}

/// Like [`parse_json`], but unwraps the `data` field of the envelope and
/// honors `success: false` bodies sent with a 200 status.
pub(crate) async fn parse_envelope<T: DeserializeOwned>(
    response: reqwest::Response,
) -> AppResult<T> {
    let envelope: Envelope<T> = parse_json(response).await?;
    envelope_message(&envelope)?;
    envelope
        .data
        .ok_or_else(|| AppError::Transport("response envelope carried no data".to_string()))
}

/// Checks only that the server accepted the request; any payload is
/// discarded. Tolerates empty bodies.
pub(crate) async fn expect_success(response: reqwest::Response) -> AppResult<()> {
    let status = response.status().as_u16();
    let body = response.text().await.map_err(transport)?;

    if !(200..300).contains(&status) {
        warn!(status, "request failed");
        return Err(error_from_body(status, &body));
    }

    // A 200 can still carry {"success": false, ...}.
    if let Ok(envelope) = serde_json::from_str::<Envelope<serde_json::Value>>(&body) {
        envelope_message(&envelope)?;
    }
    Ok(())
}

fn envelope_message<T>(envelope: &Envelope<T>) -> AppResult<()> {
    if envelope.success == Some(false) {
        return Err(AppError::Api {
            status: 200,
            message: envelope
                .message
                .clone()
                .unwrap_or_else(|| "request failed".to_string()),
        });
    }
    Ok(())
}

pub(crate) fn transport(err: reqwest::Error) -> AppError {
    AppError::Transport(err.to_string())
}

/// Extracts a message from an error body, which is JSON when the backend
/// produced it and plain text when a proxy did.
fn error_from_body(status: u16, body: &str) -> AppError {
    #[derive(Deserialize)]
    struct ErrorBody {
        message: Option<String>,
        error: Option<String>,
    }

    let message = serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.message.or(b.error))
        .unwrap_or_else(|| body.trim().to_string());

    AppError::from_status(status, message)
}
