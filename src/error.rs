//! Error types for the CFBD client.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, CfbdError>;

#[derive(Error, Debug)]
pub enum CfbdError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error(
        "no CFBD API key available: pass one explicitly, set the {env_var} \
         environment variable, or store one with `cfbd set-token`"
    )]
    MissingCredential { env_var: &'static str },

    #[error("CFBD API rejected the bearer token (HTTP status {status})")]
    UpstreamAuth { status: u16 },

    #[error("stored CFBD credential is malformed: {reason}")]
    MalformedStoredCredential { reason: String },

    #[error("invalid parameter: {message}")]
    InvalidParam { message: String },

    #[error("unexpected CFBD response shape: {message}")]
    UnexpectedResponse { message: String },

    #[error("could not determine a home directory for the CFBD key file")]
    MissingHomeDir,
}

impl CfbdError {
    /// Shorthand for filter-validation failures.
    pub fn invalid_param(message: impl Into<String>) -> Self {
        CfbdError::InvalidParam {
            message: message.into(),
        }
    }
}
