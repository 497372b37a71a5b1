use thiserror::Error;

/// Startup failures. Any of these keeps the server from binding its port.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read environment: {0}")]
    Environment(#[from] envy::Error),
    #[error("{0} environment variable is required")]
    MissingApiKey(&'static str),
    #[error("unknown generator `{0}`, expected one of: doubao, imagen")]
    UnknownGenerator(String),
    #[error("invalid CORS origin `{0}`")]
    InvalidCorsOrigin(String),
    #[error("failed to build http client: {0}")]
    HttpClient(#[from] reqwest::Error),
    #[error("failed to prepare temp directory: {0}")]
    TempDir(#[from] std::io::Error),
}
