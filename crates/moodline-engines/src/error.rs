use thiserror::Error;

#[derive(Debug, Error)]
pub enum SentimentError {
    #[error("Text input is required")]
    EmptyInput,

    #[error("Invalid library. Use vader, textblob, or transformers.")]
    UnknownLibrary(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("neural engine error: {0}")]
    Neural(String),

    #[error("model unavailable: {0}")]
    ModelUnavailable(String),
}

impl SentimentError {
    /// Whether the caller supplied bad input (as opposed to an engine failure).
    #[must_use]
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::EmptyInput | Self::UnknownLibrary(_))
    }
}
