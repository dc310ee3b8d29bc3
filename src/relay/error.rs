//! Relay error taxonomy.

use thiserror::Error;

use crate::relay::types::ErrorPayload;

/// Errors from a relay call.
///
/// `Rejected` is the relay saying no (bad bundle, policy, auth); everything
/// else means the answer never arrived intact.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RelayError {
    /// The relay returned a well-formed error response.
    #[error("relay error response: {message}")]
    Rejected { code: Option<i64>, message: String },

    /// The request could not be delivered, or the relay answered with a
    /// non-success status and no error body.
    #[error("transport failure: {0}")]
    Transport(String),

    /// The response arrived but could not be decoded.
    #[error("failed to decode relay response: {0}")]
    Decode(String),

    /// The request body could not be signed.
    #[error("failed to sign relay request: {0}")]
    Signing(String),

    /// The relay URL is unusable.
    #[error("invalid relay url '{url}': {reason}")]
    InvalidEndpoint { url: String, reason: String },
}

/// Result type for relay calls.
pub type RelayResult<T> = Result<T, RelayError>;

impl RelayError {
    /// Whether the relay itself refused the request.
    pub fn is_rejection(&self) -> bool {
        matches!(self, RelayError::Rejected { .. })
    }

    /// Text printed for the operator.
    ///
    /// A rejection is shown as its plain message; every other failure is
    /// shown with full detail.
    pub fn render(&self) -> String {
        match self {
            RelayError::Rejected { .. } => self.to_string(),
            other => format!("error: {:?}", other),
        }
    }
}

impl From<ErrorPayload> for RelayError {
    fn from(payload: ErrorPayload) -> Self {
        match payload {
            ErrorPayload::Object { code, message } => RelayError::Rejected { code, message },
            ErrorPayload::Message(message) => RelayError::Rejected {
                code: None,
                message,
            },
        }
    }
}

impl From<reqwest::Error> for RelayError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            RelayError::Decode(e.to_string())
        } else {
            // Debug keeps the source chain (e.g. "connection refused").
            RelayError::Transport(format!("{:?}", e))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejection_renders_plain() {
        let err = RelayError::Rejected {
            code: Some(-32000),
            message: "bundle already included".into(),
        };
        assert!(err.is_rejection());
        assert_eq!(err.render(), "relay error response: bundle already included");
    }

    #[test]
    fn test_other_errors_render_with_detail() {
        let err = RelayError::Transport("connection refused".into());
        assert!(!err.is_rejection());
        assert_eq!(err.render(), "error: Transport(\"connection refused\")");

        let err = RelayError::Decode("expected value at line 1".into());
        assert!(err.render().starts_with("error: Decode("));
    }

    #[test]
    fn test_from_payload() {
        let err = RelayError::from(ErrorPayload::Message("no".into()));
        assert_eq!(
            err,
            RelayError::Rejected {
                code: None,
                message: "no".into()
            }
        );
    }
}
