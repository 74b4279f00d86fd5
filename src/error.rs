use thiserror::Error;

#[derive(Error, Debug)]
pub enum SkelloError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("no API key configured. Set it with `skello-extract config --set-api-key YOUR_KEY` or the GEMINI_API_KEY environment variable")]
    MissingApiKey,

    #[error("folder not found: {0}")]
    FolderNotFound(String),

    #[error("no screenshots found in: {0}")]
    NoImagesFound(String),

    #[error("failed to read image {0}: {1}")]
    ImageEncode(String, String),

    #[error("extraction request failed: {0}")]
    ApiCall(String),

    #[error("failed to parse extraction response: {0}")]
    ApiParse(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, SkelloError>;
