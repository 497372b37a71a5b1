use std::{sync::Arc, time::Instant};

use axum::extract::{Multipart, State};

use crate::app::{
    models::{api_error::ApiError, json_from_request::JsonFromRequest},
    state::AppState,
    util::multipart::multipart::get_form_parts,
};

use super::{
    dtos::{generate_form_dto::GenerateFormDto, generate_json_dto::GenerateJsonDto},
    models::generate_response::{GenerateReply, GenerateResponse},
    service,
};

pub async fn generate(
    State(state): State<Arc<AppState>>,
    multipart: Multipart,
) -> GenerateReply {
    let started_at = Instant::now();

    let result = match get_form_parts(multipart).await {
        Ok(parts) => match GenerateFormDto::from_parts(parts) {
            Ok(dto) => service::generate_from_upload(dto, &state).await,
            Err(e) => Err(e.value()),
        },
        Err(e) => Err(e),
    };

    match result {
        Ok(generation) => GenerateResponse::from_result(generation),
        Err(e) => GenerateResponse::from_api_error(e, started_at.elapsed()),
    }
}

pub async fn generate_json(
    State(state): State<Arc<AppState>>,
    payload: Result<JsonFromRequest<GenerateJsonDto>, ApiError>,
) -> GenerateReply {
    let started_at = Instant::now();

    let result = match payload {
        Ok(JsonFromRequest(dto)) => service::generate_from_json(dto, &state).await,
        Err(e) => Err(e),
    };

    match result {
        Ok(generation) => GenerateResponse::from_result(generation),
        Err(e) => GenerateResponse::from_api_error(e, started_at.elapsed()),
    }
}
