use crate::{
    app::util::multipart::{models::file_properties::FileProperties, multipart::FormParts},
    images::errors::ImagesApiError,
};

#[derive(Debug)]
pub struct GenerateFormDto {
    pub image: FileProperties,
    pub description: Option<String>,
    pub view_angle: Option<String>,
    pub style: Option<String>,
}

impl GenerateFormDto {
    pub const FALLBACK_FILE_NAME: &'static str = "unknown.png";

    pub fn from_parts(mut parts: FormParts) -> Result<Self, ImagesApiError> {
        let Some(mut image) = parts.take_file("image") else {
            return Err(ImagesApiError::MissingImage);
        };

        if image.file_name.trim().is_empty() {
            image.file_name = Self::FALLBACK_FILE_NAME.to_string();
        }

        Ok(Self {
            image,
            description: parts.take_text("description"),
            view_angle: parts.take_text("viewAngle"),
            style: parts.take_text("style"),
        })
    }
}
