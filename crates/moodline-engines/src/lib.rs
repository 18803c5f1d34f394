//! Sentiment engines and the dispatcher that normalizes their output.
//!
//! Three interchangeable engines score free text: a VADER-style lexicon
//! analyzer, a pattern-style polarity/subjectivity analyzer, and a neural
//! classifier served by TEI. The [`Dispatcher`] resolves a library selector,
//! invokes the matching engine, and returns one [`AnalysisResult`] shape
//! regardless of which engine ran.

pub mod dispatcher;
pub mod engine;
pub mod error;
pub mod lexicon;
pub mod neural;
pub mod normalize;
pub mod polarity;
pub mod types;

pub use dispatcher::Dispatcher;
pub use engine::SentimentEngine;
pub use error::SentimentError;
pub use lexicon::{LexiconAnalyzer, PolarityScores};
pub use neural::{ModelInfo, Prediction, TeiClassifier};
pub use polarity::{PolarityAnalyzer, Sentiment};
pub use types::{AnalysisResult, Category, Library, ScoreResult};
