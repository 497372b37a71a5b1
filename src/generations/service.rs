use bytes::Bytes;
use validator::Validate;

use crate::{
    app::{models::api_error::ApiError, state::AppState},
    generators::{
        self,
        models::{generation_result::GenerationResult, reference_image::ReferenceImage},
    },
    images::{self, errors::ImagesApiError},
    prompts,
};

use super::dtos::{generate_form_dto::GenerateFormDto, generate_json_dto::GenerateJsonDto};

pub async fn generate_from_upload(
    dto: GenerateFormDto,
    state: &AppState,
) -> Result<GenerationResult, ApiError> {
    let image = dto.image;
    images::service::validate_file(&image.file_name, image.data.len())?;

    tracing::debug!(
        file_name = %image.file_name,
        mime_type = %image.mime_type,
        size = image.data.len(),
        "received upload"
    );

    let request = GenerationRequest {
        image_bytes: image.data,
        description: dto.description,
        view_angle: dto.view_angle,
        style: dto.style,
    };

    Ok(run_generation(request, state).await?)
}

pub async fn generate_from_json(
    dto: GenerateJsonDto,
    state: &AppState,
) -> Result<GenerationResult, ApiError> {
    if dto.validate().is_err() {
        return Err(ImagesApiError::MissingImage.value());
    }

    let bytes = images::service::decode_base64_image(&dto.image)?;
    images::service::validate_size(bytes.len())?;

    let request = GenerationRequest {
        image_bytes: Bytes::from(bytes),
        description: dto.description,
        view_angle: dto.view_angle,
        style: dto.style,
    };

    Ok(run_generation(request, state).await?)
}

struct GenerationRequest {
    image_bytes: Bytes,
    description: Option<String>,
    view_angle: Option<String>,
    style: Option<String>,
}

async fn run_generation(
    request: GenerationRequest,
    state: &AppState,
) -> Result<GenerationResult, ImagesApiError> {
    let decoded = images::service::verify_upload(request.image_bytes.clone()).await?;

    let view_angle = request.view_angle.unwrap_or_default();
    let style = request.style.unwrap_or_default();
    let prompt = prompts::service::build_prompt(
        request.description.as_deref().unwrap_or_default(),
        &view_angle,
        &style,
    );

    tracing::info!(
        generator = state.generator.name(),
        %view_angle,
        %style,
        width = decoded.width,
        height = decoded.height,
        "generating image"
    );

    let reference_image = ReferenceImage {
        bytes: request.image_bytes,
        mime_type: decoded.mime_type,
    };

    Ok(generators::service::generate(
        state.generator.as_ref(),
        &prompt,
        &reference_image,
        &state.delivery,
    )
    .await)
}
