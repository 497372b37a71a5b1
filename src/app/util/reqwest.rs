use std::time::Duration;

use bytes::Bytes;
use reqwest::Client;

use crate::{app::errors::ConfigError, generators::errors::GeneratorError};

pub fn build_client(timeout: Duration) -> Result<Client, ConfigError> {
    Ok(Client::builder().timeout(timeout).build()?)
}

pub async fn get_bytes(client: &Client, url: &str) -> Result<Bytes, GeneratorError> {
    let res = client.get(url).send().await.map_err(|e| {
        tracing::error!(%e, %url, "failed to get url response");
        GeneratorError::from(e)
    })?;

    let status = res.status();
    if !status.is_success() {
        let body = res.text().await.unwrap_or_default();
        tracing::error!(%status, %url, "failed to download image");
        return Err(GeneratorError::UpstreamStatus {
            status: status.as_u16(),
            body,
        });
    }

    res.bytes().await.map_err(|e| {
        tracing::error!(%e, %url, "failed to get bytes from response");
        GeneratorError::from(e)
    })
}
