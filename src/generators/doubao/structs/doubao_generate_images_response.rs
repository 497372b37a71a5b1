use bytes::Bytes;
use serde::Deserialize;

use crate::generators::{errors::GeneratorError, models::generated_image::GeneratedImage};

#[derive(Debug, Deserialize)]
pub struct DoubaoGenerateImagesResponse {
    #[serde(default)]
    pub data: Option<DoubaoImageData>,
    #[serde(default)]
    pub error: Option<DoubaoApiError>,
}

/// ARK answers with either a single record or a list of them under `data`.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum DoubaoImageData {
    List(Vec<DoubaoImage>),
    Single(DoubaoImage),
}

#[derive(Debug, Deserialize)]
pub struct DoubaoImage {
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default, alias = "b64_json")]
    pub b64_image: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct DoubaoApiError {
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

impl DoubaoGenerateImagesResponse {
    pub fn from_text(text: &str) -> Result<Self, GeneratorError> {
        serde_json::from_str(text).map_err(|e| GeneratorError::UnparseableResponse(e.to_string()))
    }

    /// Inline base64 wins over a url when a record carries both.
    pub fn into_generated_image(self) -> Result<GeneratedImage, GeneratorError> {
        let image = match self.data {
            Some(DoubaoImageData::List(images)) => images.into_iter().next(),
            Some(DoubaoImageData::Single(image)) => Some(image),
            None => None,
        };

        let Some(image) = image else {
            return Err(match self.error {
                Some(error) => GeneratorError::Rejected(error.describe()),
                None => GeneratorError::NoImageData,
            });
        };

        if let Some(b64_image) = non_empty(image.b64_image) {
            let bytes = base64::decode(b64_image).map_err(|e| {
                tracing::error!(%e, "doubao returned invalid base64");
                GeneratorError::InvalidImageData
            })?;

            return Ok(GeneratedImage::Inline(Bytes::from(bytes)));
        }

        match non_empty(image.url) {
            Some(url) => Ok(GeneratedImage::Remote(url)),
            None => Err(GeneratorError::NoImageData),
        }
    }
}

impl DoubaoApiError {
    fn describe(&self) -> String {
        match (&self.code, &self.message) {
            (Some(code), Some(message)) => format!("{}: {}", code, message),
            (None, Some(message)) => message.to_string(),
            (Some(code), None) => code.to_string(),
            (None, None) => "unknown error".to_string(),
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|value| !value.trim().is_empty())
}
