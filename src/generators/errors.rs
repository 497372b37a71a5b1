use axum::http::StatusCode;
use thiserror::Error;

use crate::app::models::api_error::ApiError;

#[derive(Debug, Error)]
pub enum GeneratorError {
    #[error("API request failed: {status} {body}")]
    UpstreamStatus { status: u16, body: String },
    #[error("API rejected the request: {0}")]
    Rejected(String),
    #[error("upstream request timed out")]
    Timeout,
    #[error("network error: {0}")]
    Network(String),
    #[error("unparseable response: {0}")]
    UnparseableResponse(String),
    #[error("no image generated in response")]
    NoImageData,
    #[error("invalid base64 image data in response")]
    InvalidImageData,
    #[error("failed to persist generated image: {0}")]
    Persist(#[from] std::io::Error),
}

impl GeneratorError {
    pub fn value(&self) -> ApiError {
        let code = match *self {
            Self::Timeout => StatusCode::GATEWAY_TIMEOUT,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };

        ApiError {
            code,
            message: format!("Generation failed: {}", self),
        }
    }
}

impl From<reqwest::Error> for GeneratorError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            Self::Timeout
        } else {
            Self::Network(e.to_string())
        }
    }
}
