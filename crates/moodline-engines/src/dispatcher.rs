//! Engine selection and result normalization.

use std::sync::Arc;

use moodline_core::{AppConfig, LexiconOverrides};

use crate::engine::SentimentEngine;
use crate::error::SentimentError;
use crate::lexicon::LexiconAnalyzer;
use crate::neural::TeiClassifier;
use crate::polarity::PolarityAnalyzer;
use crate::types::{AnalysisResult, Library};

/// Routes text to one of the three engines and returns a normalized result.
///
/// Engines are constructed once and shared read-only across requests.
#[derive(Clone)]
pub struct Dispatcher {
    lexicon: Arc<dyn SentimentEngine>,
    polarity: Arc<dyn SentimentEngine>,
    neural: Arc<dyn SentimentEngine>,
}

impl std::fmt::Debug for Dispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dispatcher").finish_non_exhaustive()
    }
}

impl Dispatcher {
    #[must_use]
    pub fn new(
        lexicon: Arc<dyn SentimentEngine>,
        polarity: Arc<dyn SentimentEngine>,
        neural: Arc<dyn SentimentEngine>,
    ) -> Self {
        Self {
            lexicon,
            polarity,
            neural,
        }
    }

    /// Build the production engines from application config.
    ///
    /// # Errors
    ///
    /// Returns [`SentimentError::Http`] if the neural engine's HTTP client
    /// cannot be built.
    pub fn from_config(
        config: &AppConfig,
        overrides: Option<&LexiconOverrides>,
    ) -> Result<Self, SentimentError> {
        let lexicon = match overrides {
            Some(overrides) => LexiconAnalyzer::with_overrides(overrides),
            None => LexiconAnalyzer::new(),
        };
        let neural = TeiClassifier::new(&config.tei_url, config.neural_timeout_secs)?;

        tracing::debug!(
            vocabulary = lexicon.vocabulary_size(),
            tei_url = %config.tei_url,
            "sentiment engines constructed"
        );

        Ok(Self::new(
            Arc::new(lexicon),
            Arc::new(PolarityAnalyzer::new()),
            Arc::new(neural),
        ))
    }

    fn engine(&self, library: Library) -> &dyn SentimentEngine {
        match library {
            Library::Lexicon => self.lexicon.as_ref(),
            Library::Polarity => self.polarity.as_ref(),
            Library::Neural => self.neural.as_ref(),
        }
    }

    /// Validate raw request inputs and analyze.
    ///
    /// Empty text is rejected before the selector is looked at.
    ///
    /// # Errors
    ///
    /// - [`SentimentError::EmptyInput`] if `text` is blank after trimming.
    /// - [`SentimentError::UnknownLibrary`] if `selector` names no engine.
    /// - Any engine failure, unchanged.
    pub async fn analyze(
        &self,
        text: &str,
        selector: &str,
    ) -> Result<AnalysisResult, SentimentError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(SentimentError::EmptyInput);
        }
        let library: Library = selector.parse()?;
        self.analyze_with(library, text).await
    }

    /// Analyze with an already-resolved library.
    ///
    /// # Errors
    ///
    /// Returns [`SentimentError::EmptyInput`] for blank text, or the engine's
    /// own error.
    pub async fn analyze_with(
        &self,
        library: Library,
        text: &str,
    ) -> Result<AnalysisResult, SentimentError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(SentimentError::EmptyInput);
        }

        let result = match self.engine(library).score(text).await {
            Ok(result) => result,
            Err(e) => {
                tracing::error!(library = %library, error = %e, "sentiment engine failed");
                return Err(e);
            }
        };

        tracing::debug!(
            library = %library,
            category = %result.category,
            score = result.score,
            "sentiment analyzed"
        );

        Ok(AnalysisResult::new(library, result))
    }

    /// Load lazily-initialized engine resources before serving traffic.
    ///
    /// # Errors
    ///
    /// Returns the first engine warm-up failure.
    pub async fn warm_up(&self) -> Result<(), SentimentError> {
        for library in Library::ALL {
            self.engine(library).warm_up().await?;
        }
        Ok(())
    }
}
