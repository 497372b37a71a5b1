use std::time::Duration;

use axum::{http::StatusCode, Json};
use serde::{Deserialize, Serialize};

use crate::{
    app::{models::api_error::ApiError, util::time::rounded_secs},
    generators::models::generation_result::GenerationResult,
};

pub type GenerateReply = (StatusCode, Json<GenerateResponse>);

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateResponse {
    pub success: bool,
    pub image_url: Option<String>,
    pub error: Option<String>,
    pub processing_time: f64,
}

impl GenerateResponse {
    pub fn from_result(result: GenerationResult) -> GenerateReply {
        let (code, error) = match result.error() {
            Some(api_error) => (api_error.code, Some(api_error.message)),
            None => (StatusCode::OK, None),
        };

        (
            code,
            Json(Self {
                success: result.success(),
                image_url: result.image_url().map(str::to_string),
                error,
                processing_time: rounded_secs(result.processing_time),
            }),
        )
    }

    pub fn from_api_error(api_error: ApiError, elapsed: Duration) -> GenerateReply {
        (
            api_error.code,
            Json(Self {
                success: false,
                image_url: None,
                error: Some(api_error.message),
                processing_time: rounded_secs(elapsed),
            }),
        )
    }
}
