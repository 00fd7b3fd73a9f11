/// Errors raised while talking to the recommendation service
///
/// These never reach the user directly: the fetcher and the bootstrap loader
/// turn every variant into an `Outcome` or a fallback value.
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),

    #[error("Invalid service URL: {0}")]
    InvalidUrl(String),

    #[error("Failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("{endpoint} returned unexpected status {status}")]
    UnexpectedStatus { endpoint: &'static str, status: u16 },
}

impl AppError {
    /// True when the service was never reached (connection, DNS, timeout)
    pub fn is_transport(&self) -> bool {
        match self {
            AppError::HttpClient(e) => e.is_connect() || e.is_timeout() || e.is_request(),
            _ => false,
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unexpected_status_message() {
        let err = AppError::UnexpectedStatus {
            endpoint: "/cities",
            status: 500,
        };
        assert_eq!(err.to_string(), "/cities returned unexpected status 500");
        assert!(!err.is_transport());
    }

    #[test]
    fn test_decode_error_from_serde() {
        let serde_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let err: AppError = serde_err.into();
        assert!(matches!(err, AppError::Decode(_)));
        assert!(err.to_string().starts_with("Failed to decode response"));
    }
}
