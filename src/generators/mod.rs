use std::sync::Arc;

use async_trait::async_trait;
use reqwest::Client;

use crate::app::{envy::Envy, errors::ConfigError};

use self::{
    doubao::service::DoubaoService,
    enums::generator_kind::GeneratorKind,
    errors::GeneratorError,
    imagen::service::ImagenService,
    models::{generated_image::GeneratedImage, reference_image::ReferenceImage},
};

pub mod doubao;
pub mod enums;
pub mod errors;
pub mod imagen;
pub mod models;
pub mod service;

/// An upstream text-to-image API.
#[async_trait]
pub trait ImageGenerator: Send + Sync {
    fn name(&self) -> &'static str;

    async fn generate_image(
        &self,
        prompt: &str,
        reference_image: &ReferenceImage,
    ) -> Result<GeneratedImage, GeneratorError>;
}

pub fn provide_generator(
    envy: &Envy,
    client: Client,
) -> Result<Arc<dyn ImageGenerator>, ConfigError> {
    let kind = envy.generator.as_deref().unwrap_or(GeneratorKind::DOUBAO);

    match kind.trim().to_ascii_lowercase().as_str() {
        GeneratorKind::DOUBAO => Ok(Arc::new(DoubaoService::new(envy, client)?)),
        GeneratorKind::IMAGEN => Ok(Arc::new(ImagenService::new(envy, client)?)),
        _ => Err(ConfigError::UnknownGenerator(kind.to_string())),
    }
}
