use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode};

use crate::{
    app::{
        envy::{non_empty, Envy},
        errors::ConfigError,
    },
    generators::{
        enums::generator_kind::GeneratorKind,
        errors::GeneratorError,
        models::{generated_image::GeneratedImage, reference_image::ReferenceImage},
        ImageGenerator,
    },
};

use super::{
    config::{API_URL, IMAGE_SIZE, MODEL},
    models::input_spec::InputSpec,
    structs::doubao_generate_images_response::DoubaoGenerateImagesResponse,
};

/// Doubao SeeDream on Volcengine ARK.
#[derive(Debug, Clone)]
pub struct DoubaoService {
    client: Client,
    api_key: String,
    api_url: String,
    model: String,
    image_size: String,
}

impl DoubaoService {
    pub fn new(envy: &Envy, client: Client) -> Result<Self, ConfigError> {
        let Some(api_key) = non_empty(&envy.ark_api_key) else {
            return Err(ConfigError::MissingApiKey("ARK_API_KEY"));
        };

        Ok(Self {
            client,
            api_key: api_key.to_string(),
            api_url: non_empty(&envy.ark_api_url).unwrap_or(API_URL).to_string(),
            model: non_empty(&envy.ark_model).unwrap_or(MODEL).to_string(),
            image_size: non_empty(&envy.ark_image_size)
                .unwrap_or(IMAGE_SIZE)
                .to_string(),
        })
    }

    fn provide_input_spec(&self, prompt: &str, reference_image: &ReferenceImage) -> InputSpec {
        InputSpec {
            model: self.model.to_string(),
            prompt: prompt.to_string(),
            image: Some(reference_image.to_data_uri()),
            size: self.image_size.to_string(),
            watermark: false,
        }
    }
}

#[async_trait]
impl ImageGenerator for DoubaoService {
    fn name(&self) -> &'static str {
        GeneratorKind::DOUBAO
    }

    async fn generate_image(
        &self,
        prompt: &str,
        reference_image: &ReferenceImage,
    ) -> Result<GeneratedImage, GeneratorError> {
        let input_spec = self.provide_input_spec(prompt, reference_image);

        let result = self
            .client
            .post(&self.api_url)
            .bearer_auth(&self.api_key)
            .json(&input_spec)
            .send()
            .await;

        match result {
            Ok(res) => parse_response_to_generated_image(res).await,
            Err(e) => {
                tracing::error!(%e, "doubao request failed");
                Err(GeneratorError::from(e))
            }
        }
    }
}

async fn parse_response_to_generated_image(res: Response) -> Result<GeneratedImage, GeneratorError> {
    let status = res.status();
    let text = res.text().await.map_err(|e| {
        tracing::error!(%e, "failed to read doubao response");
        GeneratorError::from(e)
    })?;

    if status != StatusCode::OK {
        tracing::error!(%status, %text, "doubao returned an error status");
        return Err(GeneratorError::UpstreamStatus {
            status: status.as_u16(),
            body: text,
        });
    }

    let response = DoubaoGenerateImagesResponse::from_text(&text).map_err(|e| {
        tracing::error!(%text, "doubao response did not match the expected shape");
        e
    })?;

    response.into_generated_image()
}
