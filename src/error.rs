use reqwest::StatusCode;
use thiserror::Error;

/// Errors returned by client operations.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Base URL is not a valid absolute URL.
    #[error("invalid base URL '{0}'")]
    InvalidBaseUrl(String),

    /// Endpoint path could not be joined to the base URL.
    #[error("invalid endpoint path '{0}'")]
    InvalidPath(String),

    /// API key contains bytes that cannot appear in an HTTP header value.
    #[error("API key is not a valid header value")]
    InvalidApiKey,

    /// HTTP transport-layer failure.
    ///
    /// Covers both completed calls with a non-success status (then
    /// `status_text` and `status_code` are populated from the response) and
    /// calls that failed before a response arrived — connection errors and
    /// timeouts — where both are `None`.
    #[error("{message}")]
    Transport {
        message: String,
        status_text: Option<String>,
        status_code: Option<u16>,
    },

    /// Response body could not be parsed as JSON or did not match the
    /// operation's response shape.
    #[error("failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl ApiError {
    /// Builds the transport error for a request that failed before or during
    /// transmission (connection refused, DNS failure, timeout).
    ///
    /// `reqwest` only attaches a status when the error was derived from a
    /// received response, so plain network failures end up with both status
    /// fields absent.
    pub(crate) fn from_transport(err: reqwest::Error) -> Self {
        let status = err.status();
        Self::Transport {
            message: err.to_string(),
            status_text: status
                .and_then(|s| s.canonical_reason())
                .map(str::to_owned),
            status_code: status.map(|s| s.as_u16()),
        }
    }

    /// Builds the transport error for a completed call with a non-success
    /// status, keeping the response body in the message for diagnostics.
    pub(crate) fn from_status(status: StatusCode, body: &str) -> Self {
        let message = if body.trim().is_empty() {
            format!("request failed with status {}", status.as_u16())
        } else {
            format!("request failed with status {}: {body}", status.as_u16())
        };
        Self::Transport {
            message,
            status_text: status.canonical_reason().map(str::to_owned),
            status_code: Some(status.as_u16()),
        }
    }

    /// Returns true if this error originated in the HTTP transport layer.
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport { .. })
    }

    /// Numeric HTTP status of the failed call, when a response was received.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Transport { status_code, .. } => *status_code,
            _ => None,
        }
    }

    /// Status text of the failed call, when a response was received.
    pub fn status_text(&self) -> Option<&str> {
        match self {
            Self::Transport { status_text, .. } => status_text.as_deref(),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::ApiError;
    use reqwest::StatusCode;

    #[test]
    fn from_status_populates_all_fields() {
        let error = ApiError::from_status(StatusCode::NOT_FOUND, "no such order");
        assert!(error.is_transport());
        assert_eq!(error.status_code(), Some(404));
        assert_eq!(error.status_text(), Some("Not Found"));
        assert!(error.to_string().contains("no such order"));
    }

    #[test]
    fn from_status_with_empty_body_keeps_short_message() {
        let error = ApiError::from_status(StatusCode::INTERNAL_SERVER_ERROR, "  ");
        assert_eq!(error.to_string(), "request failed with status 500");
    }

    #[test]
    fn non_transport_errors_expose_no_status() {
        let error = ApiError::InvalidPath("::".to_owned());
        assert!(!error.is_transport());
        assert_eq!(error.status_code(), None);
        assert_eq!(error.status_text(), None);
    }
}
