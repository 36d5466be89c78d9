use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExchangeError {
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("API error: HTTP {status}, code {code} - {message}")]
    ApiError {
        status: u16,
        code: i32,
        message: String,
    },

    #[error("Deserialization error: HTTP {status} - {message}")]
    DeserializationError { status: u16, message: String },

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("Authentication error: {0}")]
    AuthError(String),

    #[error("Invalid parameters: {0}")]
    InvalidParameters(String),

    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    #[error("Configuration error: {0}")]
    ConfigError(#[from] crate::core::config::ConfigError),
}

impl ExchangeError {
    /// Remote error code, if the failure came back from the exchange
    pub fn api_code(&self) -> Option<i32> {
        match self {
            Self::ApiError { code, .. } => Some(*code),
            _ => None,
        }
    }

    /// HTTP status of the response that caused the failure, if one arrived
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::ApiError { status, .. } | Self::DeserializationError { status, .. } => {
                Some(*status)
            }
            Self::HttpError(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// True for failures raised locally before any request was sent
    pub fn is_local(&self) -> bool {
        matches!(
            self,
            Self::InvalidParameters(_)
                | Self::AuthError(_)
                | Self::SerializationError(_)
                | Self::ConfigurationError(_)
                | Self::ConfigError(_)
        )
    }
}
