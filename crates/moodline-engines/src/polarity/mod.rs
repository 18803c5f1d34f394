//! Pattern-style polarity and subjectivity scorer.
//!
//! Each known adjective yields an assessment. Intensifiers scale the next
//! assessment, negations damp and flip it, and an exclamation mark boosts
//! the assessment before it. The text's polarity and subjectivity are the
//! means over all assessments.

mod data;

use std::collections::HashMap;

use async_trait::async_trait;
use serde::Serialize;

use crate::engine::SentimentEngine;
use crate::error::SentimentError;
use crate::normalize;
use crate::types::ScoreResult;

use data::{ADJECTIVES, EXCLAMATION_FACTOR, INTENSIFIERS, NEGATIONS, NEGATION_FACTOR};

/// A negation reaches this many tokens ahead.
const NEGATION_WINDOW: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Sentiment {
    /// Valence in `[-1.0, 1.0]`.
    pub polarity: f64,
    /// Opinion-ladenness in `[0.0, 1.0]`.
    pub subjectivity: f64,
}

#[derive(Debug, Clone, Copy)]
struct Assessment {
    polarity: f64,
    subjectivity: f64,
}

#[derive(Debug, Clone)]
pub struct PolarityAnalyzer {
    adjectives: HashMap<&'static str, (f64, f64)>,
    intensifiers: HashMap<&'static str, f64>,
}

impl Default for PolarityAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl PolarityAnalyzer {
    #[must_use]
    pub fn new() -> Self {
        Self {
            adjectives: ADJECTIVES
                .iter()
                .map(|&(word, polarity, subjectivity)| (word, (polarity, subjectivity)))
                .collect(),
            intensifiers: INTENSIFIERS.iter().copied().collect(),
        }
    }

    /// Score `text`. Text without any known adjective scores `(0.0, 0.0)`.
    #[must_use]
    pub fn sentiment(&self, text: &str) -> Sentiment {
        let mut assessments: Vec<Assessment> = Vec::new();
        let mut intensity: Option<f64> = None;
        let mut since_negation: Option<usize> = None;

        for raw in text.split_whitespace() {
            let word = raw
                .trim_matches(|c: char| !c.is_alphanumeric() && c != '\'')
                .to_lowercase();

            if word.is_empty() {
                // bare punctuation
            } else if is_negation(&word) {
                since_negation = Some(0);
                intensity = None;
            } else if let Some(&factor) = self.intensifiers.get(word.as_str()) {
                intensity = Some(factor);
                since_negation = since_negation.map(|d| d + 1);
            } else if let Some(&(polarity, subjectivity)) = self.adjectives.get(word.as_str()) {
                let mut assessment = Assessment {
                    polarity,
                    subjectivity,
                };
                if let Some(factor) = intensity.take() {
                    assessment.polarity = (assessment.polarity * factor).clamp(-1.0, 1.0);
                    assessment.subjectivity = (assessment.subjectivity * factor).clamp(0.0, 1.0);
                }
                if since_negation.is_some_and(|d| d < NEGATION_WINDOW) {
                    assessment.polarity *= NEGATION_FACTOR;
                }
                assessments.push(assessment);
                since_negation = None;
            } else {
                intensity = None;
                since_negation = since_negation.map(|d| d + 1);
            }

            // An exclamation mark emphasizes the most recent assessment.
            if raw.contains('!') {
                if let Some(last) = assessments.last_mut() {
                    last.polarity = (last.polarity * EXCLAMATION_FACTOR).clamp(-1.0, 1.0);
                }
            }
        }

        mean_sentiment(&assessments)
    }
}

#[async_trait]
impl SentimentEngine for PolarityAnalyzer {
    async fn score(&self, text: &str) -> Result<ScoreResult, SentimentError> {
        Ok(normalize::from_sentiment(&self.sentiment(text)))
    }
}

fn is_negation(word: &str) -> bool {
    NEGATIONS.contains(&word) || word.ends_with("n't")
}

#[allow(clippy::cast_precision_loss)]
fn mean_sentiment(assessments: &[Assessment]) -> Sentiment {
    if assessments.is_empty() {
        return Sentiment {
            polarity: 0.0,
            subjectivity: 0.0,
        };
    }
    let n = assessments.len() as f64;
    Sentiment {
        polarity: assessments.iter().map(|a| a.polarity).sum::<f64>() / n,
        subjectivity: assessments.iter().map(|a| a.subjectivity).sum::<f64>() / n,
    }
}
