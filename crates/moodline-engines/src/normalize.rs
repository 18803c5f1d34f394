//! Mapping from each engine's native output to the shared [`ScoreResult`].
//!
//! The lexicon engine uses a symmetric dead-zone around zero while the
//! polarity engine treats only an exact zero as neutral. The two boundaries
//! are deliberately different and must stay that way.

use serde_json::{Map, Value};

use crate::lexicon::PolarityScores;
use crate::neural::Prediction;
use crate::polarity::Sentiment;
use crate::types::{Category, ScoreResult};

/// Compound magnitude at which the lexicon engine leaves the neutral band.
pub const COMPOUND_THRESHOLD: f64 = 0.05;

/// Categorize a lexicon compound score. Both thresholds are inclusive.
#[must_use]
pub fn categorize_compound(compound: f64) -> Category {
    if compound >= COMPOUND_THRESHOLD {
        Category::Positive
    } else if compound <= -COMPOUND_THRESHOLD {
        Category::Negative
    } else {
        Category::Neutral
    }
}

/// Categorize a polarity value. Only exactly zero is neutral.
#[must_use]
pub fn categorize_polarity(polarity: f64) -> Category {
    if polarity > 0.0 {
        Category::Positive
    } else if polarity < 0.0 {
        Category::Negative
    } else {
        Category::Neutral
    }
}

/// Sign-encode a classifier confidence by its predicted label.
///
/// Only `positive` keeps the confidence as-is. Every other label, including
/// ones outside the three-way scheme such as `neutral`, is negated.
#[must_use]
pub fn signed_confidence(category: &Category, confidence: f64) -> f64 {
    if *category == Category::Positive {
        confidence
    } else {
        -confidence
    }
}

#[must_use]
pub fn from_polarity_scores(scores: &PolarityScores) -> ScoreResult {
    let mut details = Map::new();
    details.insert("neg".to_string(), Value::from(scores.neg));
    details.insert("neu".to_string(), Value::from(scores.neu));
    details.insert("pos".to_string(), Value::from(scores.pos));
    details.insert("compound".to_string(), Value::from(scores.compound));

    ScoreResult {
        score: scores.compound,
        category: categorize_compound(scores.compound),
        details,
    }
}

#[must_use]
pub fn from_sentiment(sentiment: &Sentiment) -> ScoreResult {
    let mut details = Map::new();
    details.insert("polarity".to_string(), Value::from(sentiment.polarity));
    details.insert(
        "subjectivity".to_string(),
        Value::from(sentiment.subjectivity),
    );

    ScoreResult {
        score: sentiment.polarity,
        category: categorize_polarity(sentiment.polarity),
        details,
    }
}

/// `details` carries the prediction as the model emitted it, plus the model id.
#[must_use]
pub fn from_prediction(prediction: &Prediction, model_id: &str) -> ScoreResult {
    let category = Category::from_label(&prediction.label);
    let score = signed_confidence(&category, prediction.score);

    let mut details = Map::new();
    details.insert("label".to_string(), Value::from(prediction.label.clone()));
    details.insert("score".to_string(), Value::from(prediction.score));
    details.insert("model".to_string(), Value::from(model_id));

    ScoreResult {
        score,
        category,
        details,
    }
}
