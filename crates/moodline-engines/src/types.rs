use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::SentimentError;

/// The closed set of engines a request can select.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Library {
    /// VADER-style lexicon engine, selected as `vader`.
    #[default]
    Lexicon,
    /// Pattern-style polarity/subjectivity engine, selected as `textblob`.
    Polarity,
    /// TEI-served classifier, selected as `transformers`.
    Neural,
}

impl Library {
    pub const ALL: [Library; 3] = [Library::Lexicon, Library::Polarity, Library::Neural];

    /// Canonical lower-case selector name echoed in responses.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Library::Lexicon => "vader",
            Library::Polarity => "textblob",
            Library::Neural => "transformers",
        }
    }
}

impl fmt::Display for Library {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Library {
    type Err = SentimentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Library::ALL
            .into_iter()
            .find(|lib| lib.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| SentimentError::UnknownLibrary(s.to_string()))
    }
}

/// Discrete sentiment label attached to a result.
///
/// The neural engine may emit labels outside the three-way scheme; those are
/// carried verbatim in [`Category::Label`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "String", from = "String")]
pub enum Category {
    Positive,
    Negative,
    Neutral,
    Label(String),
}

impl Category {
    /// Build a category from a free-form label, case-folding it first.
    #[must_use]
    pub fn from_label(label: &str) -> Self {
        let folded = label.to_lowercase();
        match folded.as_str() {
            "positive" => Category::Positive,
            "negative" => Category::Negative,
            "neutral" => Category::Neutral,
            _ => Category::Label(folded),
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Category::Positive => "positive",
            Category::Negative => "negative",
            Category::Neutral => "neutral",
            Category::Label(label) => label,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<Category> for String {
    fn from(category: Category) -> Self {
        match category {
            Category::Label(label) => label,
            other => other.as_str().to_string(),
        }
    }
}

impl From<String> for Category {
    fn from(label: String) -> Self {
        Category::from_label(&label)
    }
}

/// Engine output after normalization, before the library name is attached.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreResult {
    pub score: f64,
    pub category: Category,
    /// Engine-specific breakdown. Shape varies per engine.
    pub details: Map<String, Value>,
}

/// The response contract shared by every engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub library: String,
    pub score: f64,
    pub category: Category,
    pub details: Map<String, Value>,
}

impl AnalysisResult {
    #[must_use]
    pub fn new(library: Library, result: ScoreResult) -> Self {
        Self {
            library: library.as_str().to_string(),
            score: result.score,
            category: result.category,
            details: result.details,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn library_parse_is_case_insensitive() {
        for raw in ["vader", "VADER", "Vader"] {
            assert_eq!(raw.parse::<Library>().unwrap(), Library::Lexicon, "{raw}");
        }
        assert_eq!("TextBlob".parse::<Library>().unwrap(), Library::Polarity);
        assert_eq!("Transformers".parse::<Library>().unwrap(), Library::Neural);
    }

    #[test]
    fn library_parse_rejects_unknown_and_blank() {
        for raw in ["foo", "", " vader", "vader2"] {
            let err = raw.parse::<Library>().unwrap_err();
            assert!(matches!(err, SentimentError::UnknownLibrary(ref s) if s == raw));
        }
    }

    #[test]
    fn unknown_library_message_lists_all_choices() {
        let msg = "foo".parse::<Library>().unwrap_err().to_string();
        for lib in Library::ALL {
            assert!(msg.contains(lib.as_str()), "{msg} should mention {lib}");
        }
    }

    #[test]
    fn default_library_is_vader() {
        assert_eq!(Library::default().as_str(), "vader");
    }

    #[test]
    fn category_from_label_folds_case() {
        assert_eq!(Category::from_label("POSITIVE"), Category::Positive);
        assert_eq!(Category::from_label("Negative"), Category::Negative);
        assert_eq!(
            Category::from_label("LABEL_1"),
            Category::Label("label_1".to_string())
        );
    }

    #[test]
    fn category_serializes_as_plain_string() {
        let json = serde_json::to_value(Category::Label("mixed".to_string())).unwrap();
        assert_eq!(json, serde_json::json!("mixed"));
        let json = serde_json::to_value(Category::Neutral).unwrap();
        assert_eq!(json, serde_json::json!("neutral"));
    }

    #[test]
    fn analysis_result_has_stable_top_level_fields() {
        let result = AnalysisResult::new(
            Library::Polarity,
            ScoreResult {
                score: 0.25,
                category: Category::Positive,
                details: Map::new(),
            },
        );
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["library"], "textblob");
        assert_eq!(json["score"], 0.25);
        assert_eq!(json["category"], "positive");
        assert!(json["details"].is_object());
    }
}
