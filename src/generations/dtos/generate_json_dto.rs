use serde::Deserialize;
use validator::Validate;

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct GenerateJsonDto {
    #[validate(length(min = 1, message = "image must not be empty."))]
    pub image: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub view_angle: Option<String>,
    #[serde(default)]
    pub style: Option<String>,
}
