//! Dispatcher contract tests against recording fake engines.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use moodline_engines::{
    Category, Dispatcher, Library, ScoreResult, SentimentEngine, SentimentError,
};
use serde_json::Map;

#[derive(Default)]
struct RecordingEngine {
    score: f64,
    seen: Mutex<Vec<String>>,
    warmups: AtomicUsize,
}

impl RecordingEngine {
    fn with_score(score: f64) -> Arc<Self> {
        Arc::new(Self {
            score,
            ..Self::default()
        })
    }

    fn seen(&self) -> Vec<String> {
        self.seen.lock().unwrap().clone()
    }
}

#[async_trait]
impl SentimentEngine for RecordingEngine {
    async fn score(&self, text: &str) -> Result<ScoreResult, SentimentError> {
        self.seen.lock().unwrap().push(text.to_string());
        Ok(ScoreResult {
            score: self.score,
            category: Category::Positive,
            details: Map::new(),
        })
    }

    async fn warm_up(&self) -> Result<(), SentimentError> {
        self.warmups.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

struct FailingEngine;

#[async_trait]
impl SentimentEngine for FailingEngine {
    async fn score(&self, _text: &str) -> Result<ScoreResult, SentimentError> {
        Err(SentimentError::ModelUnavailable("offline".to_string()))
    }

    async fn warm_up(&self) -> Result<(), SentimentError> {
        Err(SentimentError::ModelUnavailable("offline".to_string()))
    }
}

struct Fixture {
    lexicon: Arc<RecordingEngine>,
    polarity: Arc<RecordingEngine>,
    neural: Arc<RecordingEngine>,
    dispatcher: Dispatcher,
}

fn fixture() -> Fixture {
    let lexicon = RecordingEngine::with_score(0.1);
    let polarity = RecordingEngine::with_score(0.2);
    let neural = RecordingEngine::with_score(0.3);
    let dispatcher = Dispatcher::new(lexicon.clone(), polarity.clone(), neural.clone());
    Fixture {
        lexicon,
        polarity,
        neural,
        dispatcher,
    }
}

#[tokio::test]
async fn selector_routes_to_matching_engine() {
    let f = fixture();

    let a = f.dispatcher.analyze("hello", "vader").await.unwrap();
    let b = f.dispatcher.analyze("hello", "textblob").await.unwrap();
    let c = f.dispatcher.analyze("hello", "transformers").await.unwrap();

    assert_eq!((a.library.as_str(), a.score), ("vader", 0.1));
    assert_eq!((b.library.as_str(), b.score), ("textblob", 0.2));
    assert_eq!((c.library.as_str(), c.score), ("transformers", 0.3));
    assert_eq!(f.lexicon.seen().len(), 1);
    assert_eq!(f.polarity.seen().len(), 1);
    assert_eq!(f.neural.seen().len(), 1);
}

#[tokio::test]
async fn selector_is_case_insensitive_and_echoed_canonically() {
    let f = fixture();
    for selector in ["VADER", "Vader", "vader"] {
        let result = f.dispatcher.analyze("hello", selector).await.unwrap();
        assert_eq!(result.library, "vader");
    }
    assert_eq!(f.lexicon.seen().len(), 3);
}

#[tokio::test]
async fn engines_receive_trimmed_text() {
    let f = fixture();
    f.dispatcher
        .analyze("  \tI love this!\n ", "vader")
        .await
        .unwrap();
    assert_eq!(f.lexicon.seen(), vec!["I love this!".to_string()]);
}

#[tokio::test]
async fn blank_text_never_reaches_an_engine() {
    let f = fixture();
    for text in ["", "   ", "\n\t"] {
        let err = f.dispatcher.analyze(text, "vader").await.unwrap_err();
        assert!(matches!(err, SentimentError::EmptyInput), "{text:?}");
    }
    assert!(f.lexicon.seen().is_empty());
}

#[tokio::test]
async fn empty_text_wins_over_bad_selector() {
    let f = fixture();
    let err = f.dispatcher.analyze("  ", "foo").await.unwrap_err();
    assert!(matches!(err, SentimentError::EmptyInput));
}

#[tokio::test]
async fn unknown_selector_is_rejected() {
    let f = fixture();
    let err = f.dispatcher.analyze("hello", "foo").await.unwrap_err();
    assert!(matches!(err, SentimentError::UnknownLibrary(ref s) if s == "foo"));
    assert!(err.is_client_error());
    assert!(f.lexicon.seen().is_empty());
    assert!(f.polarity.seen().is_empty());
    assert!(f.neural.seen().is_empty());
}

#[tokio::test]
async fn analyze_with_also_rejects_blank_text() {
    let f = fixture();
    let err = f
        .dispatcher
        .analyze_with(Library::Neural, " ")
        .await
        .unwrap_err();
    assert!(matches!(err, SentimentError::EmptyInput));
    assert!(f.neural.seen().is_empty());
}

#[tokio::test]
async fn engine_failure_propagates_unchanged() {
    let ok = RecordingEngine::with_score(0.0);
    let dispatcher = Dispatcher::new(ok.clone(), ok, Arc::new(FailingEngine));

    let err = dispatcher
        .analyze("hello", "transformers")
        .await
        .unwrap_err();
    assert!(matches!(err, SentimentError::ModelUnavailable(_)));
    assert!(!err.is_client_error());
}

#[tokio::test]
async fn warm_up_visits_every_engine() {
    let f = fixture();
    f.dispatcher.warm_up().await.unwrap();
    assert_eq!(f.lexicon.warmups.load(Ordering::SeqCst), 1);
    assert_eq!(f.polarity.warmups.load(Ordering::SeqCst), 1);
    assert_eq!(f.neural.warmups.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn warm_up_reports_engine_failure() {
    let ok = RecordingEngine::with_score(0.0);
    let dispatcher = Dispatcher::new(ok.clone(), ok, Arc::new(FailingEngine));
    assert!(dispatcher.warm_up().await.is_err());
}
