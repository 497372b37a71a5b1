use std::collections::HashMap;

use axum::{extract::Multipart, http::StatusCode};

use crate::app::models::api_error::ApiError;

use super::models::file_properties::FileProperties;

/// Fields of a multipart form, split into uploaded files and plain text values.
#[derive(Debug, Default)]
pub struct FormParts {
    pub files: Vec<FileProperties>,
    pub texts: HashMap<String, String>,
}

impl FormParts {
    pub fn take_file(&mut self, field_name: &str) -> Option<FileProperties> {
        let index = self
            .files
            .iter()
            .position(|file| file.field_name == field_name)?;

        Some(self.files.swap_remove(index))
    }

    pub fn take_text(&mut self, field_name: &str) -> Option<String> {
        self.texts.remove(field_name)
    }
}

pub async fn get_form_parts(mut multipart: Multipart) -> Result<FormParts, ApiError> {
    let mut parts = FormParts::default();

    loop {
        let field = match multipart.next_field().await {
            Ok(Some(field)) => field,
            Ok(None) => break,
            Err(e) => {
                tracing::warn!(%e, "failed to read multipart field");
                return Err(ApiError {
                    code: StatusCode::BAD_REQUEST,
                    message: format!("Invalid multipart body: {}", e),
                });
            }
        };

        let field_name = field.name().unwrap_or("file").to_string();

        match field.file_name().map(str::to_string) {
            Some(file_name) => {
                let mime_type = field
                    .content_type()
                    .unwrap_or("application/octet-stream")
                    .to_string();
                let data = field.bytes().await.map_err(|e| {
                    tracing::warn!(%e, %field_name, "failed to read uploaded file");
                    ApiError {
                        code: StatusCode::BAD_REQUEST,
                        message: format!("Failed to read uploaded file: {}", e),
                    }
                })?;

                parts.files.push(FileProperties {
                    field_name,
                    file_name,
                    mime_type,
                    data,
                });
            }
            None => {
                let text = field.text().await.map_err(|e| {
                    tracing::warn!(%e, %field_name, "failed to read form field");
                    ApiError {
                        code: StatusCode::BAD_REQUEST,
                        message: format!("Failed to read form field `{}`: {}", field_name, e),
                    }
                })?;

                parts.texts.insert(field_name, text);
            }
        }
    }

    Ok(parts)
}
