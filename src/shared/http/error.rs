use reqwest::StatusCode;

/// Fallback shown when the backend gives no usable message.
pub const GENERIC_FAILURE_MESSAGE: &str = "Something went wrong";

/// A failed backend call. Every gateway performs exactly one attempt and maps
/// any non-2xx response or transport fault into this type.
#[derive(Debug, thiserror::Error)]
pub enum ApiFailure {
    /// The backend answered with a non-success status. `message` is the
    /// server-supplied `message` body field, empty when absent.
    #[error("backend responded {status}: {message}")]
    Status { status: StatusCode, message: String },

    /// The request never produced a usable response.
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
}

impl ApiFailure {
    /// The message worth surfacing to the operator: the server's own words
    /// when it sent any, else the generic fallback.
    pub fn user_message(&self) -> String {
        match self {
            ApiFailure::Status { message, .. } if !message.trim().is_empty() => message.clone(),
            _ => GENERIC_FAILURE_MESSAGE.to_string(),
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(
            self,
            ApiFailure::Status { status, .. } if *status == StatusCode::UNAUTHORIZED
        )
    }
}
