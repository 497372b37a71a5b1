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
    config::{API_URL, ASPECT_RATIO, MODEL, PERSON_GENERATION},
    models::input_spec::{InputSpec, InputSpecInstance, InputSpecParams},
    structs::imagen_predict_response::ImagenPredictResponse,
};

/// Google Imagen through the Gemini API. Text-to-image only, so the
/// reference image never leaves the server.
#[derive(Debug, Clone)]
pub struct ImagenService {
    client: Client,
    api_key: String,
    api_url: String,
    model: String,
}

impl ImagenService {
    pub fn new(envy: &Envy, client: Client) -> Result<Self, ConfigError> {
        let Some(api_key) = non_empty(&envy.google_api_key) else {
            return Err(ConfigError::MissingApiKey("GOOGLE_API_KEY"));
        };

        Ok(Self {
            client,
            api_key: api_key.to_string(),
            api_url: non_empty(&envy.imagen_api_url)
                .unwrap_or(API_URL)
                .trim_end_matches('/')
                .to_string(),
            model: non_empty(&envy.imagen_model).unwrap_or(MODEL).to_string(),
        })
    }

    fn predict_url(&self) -> String {
        format!("{}/models/{}:predict", self.api_url, self.model)
    }
}

fn provide_input_spec(prompt: &str) -> InputSpec {
    InputSpec {
        instances: vec![InputSpecInstance {
            prompt: prompt.to_string(),
        }],
        parameters: InputSpecParams {
            sample_count: 1,
            aspect_ratio: ASPECT_RATIO.to_string(),
            person_generation: PERSON_GENERATION.to_string(),
        },
    }
}

#[async_trait]
impl ImageGenerator for ImagenService {
    fn name(&self) -> &'static str {
        GeneratorKind::IMAGEN
    }

    async fn generate_image(
        &self,
        prompt: &str,
        _reference_image: &ReferenceImage,
    ) -> Result<GeneratedImage, GeneratorError> {
        let result = self
            .client
            .post(self.predict_url())
            .header("x-goog-api-key", &self.api_key)
            .json(&provide_input_spec(prompt))
            .send()
            .await;

        match result {
            Ok(res) => parse_response_to_generated_image(res).await,
            Err(e) => {
                tracing::error!(%e, "imagen request failed");
                Err(GeneratorError::from(e))
            }
        }
    }
}

async fn parse_response_to_generated_image(
    res: Response,
) -> Result<GeneratedImage, GeneratorError> {
    let status = res.status();
    let text = res.text().await.map_err(|e| {
        tracing::error!(%e, "failed to read imagen response");
        GeneratorError::from(e)
    })?;

    if status != StatusCode::OK {
        tracing::error!(%status, %text, "imagen returned an error status");
        return Err(GeneratorError::UpstreamStatus {
            status: status.as_u16(),
            body: text,
        });
    }

    let response = ImagenPredictResponse::from_text(&text).map_err(|e| {
        tracing::error!(%text, "imagen response did not match the expected shape");
        e
    })?;

    response.into_generated_image()
}
