use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    /// Transport failure: no response was obtained at all (connection
    /// refused, DNS failure, reset mid-exchange).
    #[error("Network error: {0}")]
    Network(#[source] reqwest::Error),

    /// The remote service responded with a non-success status. Status and
    /// body are carried verbatim.
    #[error("Remote service rejected the request ({status}): {body}")]
    Remote {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("Invalid value for '{field}' ({value}): {reason}")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Validation error: {message}")]
    Validation { message: String },
}

impl ApiError {
    pub fn is_network(&self) -> bool {
        matches!(self, ApiError::Network(_))
    }

    pub fn is_remote_rejection(&self) -> bool {
        matches!(self, ApiError::Remote { .. })
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
