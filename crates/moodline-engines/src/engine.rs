use async_trait::async_trait;

use crate::error::SentimentError;
use crate::types::ScoreResult;

/// Capability shared by every sentiment engine.
///
/// Implementations receive already-trimmed, non-empty text and return the
/// normalized score for it. They hold no per-request state and are shared
/// across concurrent requests behind an `Arc`.
#[async_trait]
pub trait SentimentEngine: Send + Sync {
    /// Score one piece of text.
    ///
    /// # Errors
    ///
    /// Returns [`SentimentError`] when the underlying engine fails.
    async fn score(&self, text: &str) -> Result<ScoreResult, SentimentError>;

    /// Prepare any lazily-loaded resources ahead of the first request.
    ///
    /// In-process engines have nothing to load.
    ///
    /// # Errors
    ///
    /// Returns [`SentimentError`] when the engine cannot be made ready.
    async fn warm_up(&self) -> Result<(), SentimentError> {
        Ok(())
    }
}
