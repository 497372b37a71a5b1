use axum::http::StatusCode;

use crate::app::models::api_error::ApiError;

#[derive(Debug, PartialEq, Eq)]
pub enum ImagesApiError {
    MissingImage,
    UnsupportedFormat,
    FileTooLarge,
    PdfNotSupported,
    UndecodableImage,
    DimensionsTooLarge,
    InvalidBase64,
}

impl ImagesApiError {
    pub fn value(&self) -> ApiError {
        let message = match *self {
            Self::MissingImage => "An image file is required.".to_string(),
            Self::UnsupportedFormat => format!(
                "Unsupported file format. Supported formats: {}.",
                super::service::ALLOWED_EXTENSIONS.join(", ")
            ),
            Self::FileTooLarge => "File exceeds the size limit. Maximum allowed: 10MB.".to_string(),
            Self::PdfNotSupported => {
                "PDF support is coming soon, please upload a JPG or PNG for now.".to_string()
            }
            Self::UndecodableImage => {
                "Could not parse the image, please make sure it is a valid image.".to_string()
            }
            Self::DimensionsTooLarge => format!(
                "Image dimensions are too large. Maximum allowed: {0}x{0} pixels.",
                super::service::MAX_DIMENSION
            ),
            Self::InvalidBase64 => "Invalid base64 image data.".to_string(),
        };

        ApiError {
            code: StatusCode::BAD_REQUEST,
            message,
        }
    }
}

impl From<ImagesApiError> for ApiError {
    fn from(e: ImagesApiError) -> Self {
        e.value()
    }
}
