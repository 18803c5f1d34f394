//! TEI (Text Embeddings Inference) client for sequence-classification models.
//!
//! The model behind TEI is probed once through `/info` before the first
//! prediction. Concurrent early callers share that single probe; a failed
//! probe is not cached, so the next call tries again.

use std::collections::BTreeMap;
use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tokio::sync::OnceCell;

use crate::engine::SentimentEngine;
use crate::error::SentimentError;
use crate::normalize;
use crate::types::ScoreResult;

/// What the one-time probe learned about the served model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelInfo {
    pub model_id: String,
    /// Labels in class-id order.
    pub labels: Vec<String>,
}

impl ModelInfo {
    /// Whether `label` belongs to the model's label set, ignoring case. A
    /// model that published no labels accepts anything.
    #[must_use]
    pub fn knows_label(&self, label: &str) -> bool {
        self.labels.is_empty() || self.labels.iter().any(|l| l.eq_ignore_ascii_case(label))
    }
}

/// A single label/confidence pair as returned by TEI `/predict`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    pub label: String,
    pub score: f64,
}

#[derive(Deserialize)]
struct InfoResponse {
    model_id: String,
    model_type: ModelType,
}

#[derive(Deserialize)]
#[serde(rename_all = "lowercase")]
enum ModelType {
    Classifier(ClassifierConfig),
    Embedding {},
    Reranker {},
}

#[derive(Deserialize)]
struct ClassifierConfig {
    #[serde(default)]
    id2label: BTreeMap<String, String>,
}

#[derive(Serialize)]
struct PredictRequest<'a> {
    inputs: &'a str,
    raw_scores: bool,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum PredictResponse {
    Single(Vec<Prediction>),
    Batch(Vec<Vec<Prediction>>),
}

/// TEI HTTP client for the neural sentiment engine.
#[derive(Debug)]
pub struct TeiClassifier {
    client: reqwest::Client,
    base_url: String,
    model: OnceCell<ModelInfo>,
}

impl TeiClassifier {
    /// Create a new `TeiClassifier`. No network traffic happens until the
    /// first prediction or an explicit warm-up.
    ///
    /// # Errors
    ///
    /// Returns [`SentimentError::Http`] if the HTTP client cannot be built.
    pub fn new(tei_url: &str, timeout_secs: u64) -> Result<Self, SentimentError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()?;
        Ok(Self {
            client,
            base_url: tei_url.trim_end_matches('/').to_string(),
            model: OnceCell::new(),
        })
    }

    /// Model metadata, probing TEI on first use.
    ///
    /// # Errors
    ///
    /// Returns [`SentimentError::ModelUnavailable`] if TEI is unreachable or
    /// does not serve a classifier.
    pub async fn model_info(&self) -> Result<&ModelInfo, SentimentError> {
        self.model.get_or_try_init(|| self.probe_model()).await
    }

    /// Whether the one-time probe has already succeeded.
    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.model.initialized()
    }

    async fn probe_model(&self) -> Result<ModelInfo, SentimentError> {
        let url = format!("{}/info", self.base_url);
        tracing::info!(url = %url, "probing neural sentiment model");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| {
                SentimentError::ModelUnavailable(format!("TEI info request failed: {e}"))
            })?;

        if !response.status().is_success() {
            return Err(SentimentError::ModelUnavailable(format!(
                "TEI info returned status {}",
                response.status()
            )));
        }

        let info: InfoResponse = response
            .json()
            .await
            .map_err(|e| SentimentError::ModelUnavailable(format!("TEI info parse error: {e}")))?;

        let ModelType::Classifier(classifier) = info.model_type else {
            return Err(SentimentError::ModelUnavailable(format!(
                "model '{}' is not a sequence classifier",
                info.model_id
            )));
        };

        let mut ids: Vec<(u32, String)> = classifier
            .id2label
            .into_iter()
            .filter_map(|(id, label)| id.parse::<u32>().ok().map(|id| (id, label)))
            .collect();
        ids.sort_by_key(|(id, _)| *id);
        let labels: Vec<String> = ids.into_iter().map(|(_, label)| label).collect();

        tracing::info!(model_id = %info.model_id, labels = ?labels, "neural sentiment model ready");

        Ok(ModelInfo {
            model_id: info.model_id,
            labels,
        })
    }

    /// Classify `text` and return the highest-confidence prediction.
    ///
    /// # Errors
    ///
    /// Returns [`SentimentError::Neural`] if the request fails, TEI returns a
    /// non-success status, or the response holds no predictions.
    pub async fn predict(&self, text: &str) -> Result<Prediction, SentimentError> {
        let request = PredictRequest {
            inputs: text,
            raw_scores: false,
        };
        let response = self
            .client
            .post(format!("{}/predict", self.base_url))
            .json(&request)
            .send()
            .await
            .map_err(|e| SentimentError::Neural(format!("TEI request failed: {e}")))?;

        if !response.status().is_success() {
            return Err(SentimentError::Neural(format!(
                "TEI returned status {}",
                response.status()
            )));
        }

        let predictions = match response
            .json::<PredictResponse>()
            .await
            .map_err(|e| SentimentError::Neural(format!("TEI response parse error: {e}")))?
        {
            PredictResponse::Single(predictions) => predictions,
            PredictResponse::Batch(batches) => batches.into_iter().next().unwrap_or_default(),
        };

        predictions
            .into_iter()
            .max_by(|a, b| a.score.total_cmp(&b.score))
            .ok_or_else(|| SentimentError::Neural("TEI returned no predictions".to_string()))
    }
}

#[async_trait]
impl SentimentEngine for TeiClassifier {
    async fn score(&self, text: &str) -> Result<ScoreResult, SentimentError> {
        let info = self.model_info().await?;
        let prediction = self.predict(text).await?;
        if !info.knows_label(&prediction.label) {
            tracing::warn!(
                model_id = %info.model_id,
                label = %prediction.label,
                "predicted label is not in the model label set"
            );
        }
        Ok(normalize::from_prediction(&prediction, &info.model_id))
    }

    async fn warm_up(&self) -> Result<(), SentimentError> {
        self.model_info().await.map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_trailing_slash_is_trimmed() {
        let classifier = TeiClassifier::new("http://tei:8080/", 5).unwrap();
        assert_eq!(classifier.base_url, "http://tei:8080");
        assert!(!classifier.is_ready());
    }

    #[test]
    fn info_response_parses_classifier_labels() {
        let json = r#"{
            "model_id": "distilbert-base-uncased-finetuned-sst-2-english",
            "model_type": {"classifier": {"id2label": {"1": "POSITIVE", "0": "NEGATIVE"}, "label2id": {}}}
        }"#;
        let info: InfoResponse = serde_json::from_str(json).unwrap();
        assert!(matches!(info.model_type, ModelType::Classifier(ref c) if c.id2label.len() == 2));
    }

    #[test]
    fn info_response_parses_embedding_models() {
        let json = r#"{"model_id": "bge", "model_type": {"embedding": {"pooling": "cls"}}}"#;
        let info: InfoResponse = serde_json::from_str(json).unwrap();
        assert!(matches!(info.model_type, ModelType::Embedding { .. }));
    }

    #[test]
    fn predict_response_accepts_single_and_batched_shapes() {
        let single = r#"[{"label": "POSITIVE", "score": 0.9}]"#;
        let single: PredictResponse = serde_json::from_str(single).unwrap();
        assert!(matches!(single, PredictResponse::Single(ref p) if p.len() == 1));

        let batch = r#"[[{"label": "NEGATIVE", "score": 0.7}]]"#;
        let batch: PredictResponse = serde_json::from_str(batch).unwrap();
        assert!(matches!(batch, PredictResponse::Batch(ref b) if b[0].len() == 1));
    }

    #[test]
    fn known_labels_match_ignoring_case() {
        let info = ModelInfo {
            model_id: "sst2".to_string(),
            labels: vec!["NEGATIVE".to_string(), "POSITIVE".to_string()],
        };
        assert!(info.knows_label("positive"));
        assert!(!info.knows_label("NEUTRAL"));

        let unlabeled = ModelInfo {
            model_id: "bare".to_string(),
            labels: Vec::new(),
        };
        assert!(unlabeled.knows_label("LABEL_7"));
    }
}
