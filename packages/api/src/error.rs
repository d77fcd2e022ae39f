use thiserror::Error;

/// Failure talking to the REST API.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApiError {
    /// The request never produced a usable response (network down, CORS,
    /// undecodable body).
    #[error("{0}")]
    Transport(String),

    /// The server answered with a non-2xx status.
    #[error("{}", .message.as_deref().unwrap_or("Request failed"))]
    Rejected { status: u16, message: Option<String> },
}

impl ApiError {
    /// The server-provided message, if the server rejected the request with one.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ApiError::Rejected { message, .. } => message.as_deref(),
            ApiError::Transport(_) => None,
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        ApiError::Transport(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejected_display_uses_server_message() {
        let err = ApiError::Rejected {
            status: 401,
            message: Some("Invalid credentials".to_string()),
        };
        assert_eq!(err.to_string(), "Invalid credentials");
        assert_eq!(err.server_message(), Some("Invalid credentials"));
    }

    #[test]
    fn test_rejected_without_message() {
        let err = ApiError::Rejected {
            status: 500,
            message: None,
        };
        assert_eq!(err.to_string(), "Request failed");
        assert_eq!(err.server_message(), None);
    }
}
