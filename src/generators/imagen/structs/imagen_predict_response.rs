use bytes::Bytes;
use serde::Deserialize;

use crate::generators::{errors::GeneratorError, models::generated_image::GeneratedImage};

#[derive(Debug, Deserialize)]
pub struct ImagenPredictResponse {
    #[serde(default)]
    pub predictions: Vec<ImagenPrediction>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImagenPrediction {
    #[serde(default)]
    pub bytes_base64_encoded: Option<String>,
    #[serde(default)]
    pub mime_type: Option<String>,
    #[serde(default)]
    pub rai_filtered_reason: Option<String>,
}

impl ImagenPredictResponse {
    pub fn from_text(text: &str) -> Result<Self, GeneratorError> {
        serde_json::from_str(text).map_err(|e| GeneratorError::UnparseableResponse(e.to_string()))
    }

    pub fn into_generated_image(self) -> Result<GeneratedImage, GeneratorError> {
        let Some(prediction) = self.predictions.into_iter().next() else {
            return Err(GeneratorError::NoImageData);
        };

        tracing::debug!(mime_type = ?prediction.mime_type, "imagen prediction received");

        match prediction.bytes_base64_encoded {
            Some(encoded) if !encoded.is_empty() => {
                let bytes = base64::decode(encoded).map_err(|e| {
                    tracing::error!(%e, "imagen returned invalid base64");
                    GeneratorError::InvalidImageData
                })?;

                Ok(GeneratedImage::Inline(Bytes::from(bytes)))
            }
            _ => match prediction.rai_filtered_reason {
                Some(reason) => Err(GeneratorError::Rejected(reason)),
                None => Err(GeneratorError::NoImageData),
            },
        }
    }
}
