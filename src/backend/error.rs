//! Errors raised while talking to the registration backend

use thiserror::Error;

/// Failure of a registration request.
///
/// The variants are kept apart for logging; the form shows the same
/// message for all of them.
#[derive(Debug, Error)]
pub enum SubmitError {
    /// Connection, TLS, or body encoding failure
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server answered outside the 2xx range
    #[error("server responded with status {status}: {body}")]
    Status { status: u16, body: String },

    /// The request task panicked or was cancelled
    #[error("registration task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

impl SubmitError {
    /// HTTP status of the response, if one was received
    pub fn status(&self) -> Option<u16> {
        match self {
            SubmitError::Transport(err) => err.status().map(|s| s.as_u16()),
            SubmitError::Status { status, .. } => Some(*status),
            SubmitError::Task(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_reports_code() {
        let err = SubmitError::Status {
            status: 409,
            body: "duplicate".to_string(),
        };
        assert_eq!(err.status(), Some(409));
        assert_eq!(
            err.to_string(),
            "server responded with status 409: duplicate"
        );
    }

    #[tokio::test]
    async fn test_cancelled_task_has_no_status() {
        let handle = tokio::spawn(std::future::pending::<()>());
        handle.abort();
        let join_err = handle.await.unwrap_err();
        let err = SubmitError::from(join_err);
        assert_eq!(err.status(), None);
        assert!(err.to_string().starts_with("registration task failed"));
    }
}
