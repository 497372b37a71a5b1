use std::time::Duration;

use crate::{app::models::api_error::ApiError, generators::errors::GeneratorError};

/// Outcome of one generation call, with the wall-clock time it took.
#[derive(Debug)]
pub struct GenerationResult {
    pub outcome: Result<String, GeneratorError>,
    pub processing_time: Duration,
}

impl GenerationResult {
    pub fn success(&self) -> bool {
        self.outcome.is_ok()
    }

    pub fn image_url(&self) -> Option<&str> {
        self.outcome.as_deref().ok()
    }

    pub fn error(&self) -> Option<ApiError> {
        self.outcome.as_ref().err().map(GeneratorError::value)
    }
}
