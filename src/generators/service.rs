use std::time::Instant;

use bytes::Bytes;

use crate::{app::util, images};

use super::{
    errors::GeneratorError,
    models::{
        generated_image::GeneratedImage, generation_result::GenerationResult,
        image_delivery::ImageDelivery, reference_image::ReferenceImage,
    },
    ImageGenerator,
};

/// Runs one generation and resolves it to an image url. Failures are folded
/// into the returned [`GenerationResult`] rather than propagated.
pub async fn generate(
    generator: &dyn ImageGenerator,
    prompt: &str,
    reference_image: &ReferenceImage,
    delivery: &ImageDelivery,
) -> GenerationResult {
    let started_at = Instant::now();

    let outcome = match generator.generate_image(prompt, reference_image).await {
        Ok(image) => deliver(image, delivery).await,
        Err(e) => Err(e),
    };

    let processing_time = started_at.elapsed();

    match &outcome {
        Ok(image_url) => tracing::info!(
            generator = generator.name(),
            %image_url,
            elapsed_ms = processing_time.as_millis() as u64,
            "image generated"
        ),
        Err(e) => tracing::error!(
            generator = generator.name(),
            %e,
            elapsed_ms = processing_time.as_millis() as u64,
            "image generation failed"
        ),
    }

    GenerationResult {
        outcome,
        processing_time,
    }
}

async fn deliver(image: GeneratedImage, delivery: &ImageDelivery) -> Result<String, GeneratorError> {
    match image {
        GeneratedImage::Inline(bytes) => persist(bytes, delivery).await,
        GeneratedImage::Remote(url) if delivery.download_remote_images => {
            let bytes = util::reqwest::get_bytes(&delivery.client, &url).await?;
            persist(bytes, delivery).await
        }
        GeneratedImage::Remote(url) => Ok(url),
    }
}

/// Only decodable images reach the temp dir, always stored as PNG.
async fn persist(bytes: Bytes, delivery: &ImageDelivery) -> Result<String, GeneratorError> {
    let png = tokio::task::spawn_blocking(move || images::service::encode_as_png(bytes))
        .await
        .map_err(|e| {
            tracing::error!(%e, "png encoding task failed");
            GeneratorError::InvalidImageData
        })?
        .map_err(|e| {
            tracing::error!(%e, "generated image could not be decoded");
            GeneratorError::InvalidImageData
        })?;

    Ok(delivery.temp_files.save_png(&png).await?)
}
