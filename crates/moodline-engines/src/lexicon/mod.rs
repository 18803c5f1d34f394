//! VADER-style rule-based sentiment scorer.
//!
//! Sums per-token valences from a rated lexicon, adjusting each for nearby
//! boosters, negations, ALL-CAPS emphasis and the "but" contrast rule, then
//! squashes the sum into a compound score in `[-1.0, 1.0]`.

mod data;

use std::collections::HashMap;

use async_trait::async_trait;
use moodline_core::LexiconOverrides;
use serde::Serialize;

use crate::engine::SentimentEngine;
use crate::error::SentimentError;
use crate::normalize;
use crate::types::ScoreResult;

use data::{BOOSTERS, C_INCR, LEXICON, NEGATIONS, N_SCALAR};

const EXCLAMATION_INCR: f64 = 0.292;
const MAX_EXCLAMATIONS: usize = 4;
const QUESTION_INCR: f64 = 0.18;
const QUESTION_CAP: f64 = 0.96;
/// Approximates the maximum expected valence sum in `normalize_sum`.
const NORMALIZATION_ALPHA: f64 = 15.0;

/// Raw output of the lexicon engine.
///
/// `neg`, `neu` and `pos` are the proportions of the text falling in each
/// class; `compound` is the normalized aggregate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PolarityScores {
    pub neg: f64,
    pub neu: f64,
    pub pos: f64,
    pub compound: f64,
}

impl PolarityScores {
    const ZERO: Self = Self {
        neg: 0.0,
        neu: 0.0,
        pos: 0.0,
        compound: 0.0,
    };
}

#[derive(Debug, Clone)]
pub struct LexiconAnalyzer {
    lexicon: HashMap<String, f64>,
    boosters: HashMap<&'static str, f64>,
}

impl Default for LexiconAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl LexiconAnalyzer {
    /// Build an analyzer over the built-in lexicon.
    #[must_use]
    pub fn new() -> Self {
        Self {
            lexicon: LEXICON
                .iter()
                .map(|&(word, valence)| (word.to_string(), valence))
                .collect(),
            boosters: BOOSTERS.iter().copied().collect(),
        }
    }

    /// Build an analyzer with extra or replacement valences merged over the
    /// built-in lexicon.
    #[must_use]
    pub fn with_overrides(overrides: &LexiconOverrides) -> Self {
        let mut analyzer = Self::new();
        for (word, valence) in &overrides.words {
            analyzer.lexicon.insert(word.clone(), *valence);
        }
        analyzer
    }

    /// Number of rated tokens known to the analyzer.
    #[must_use]
    pub fn vocabulary_size(&self) -> usize {
        self.lexicon.len()
    }

    /// Score `text`. Text with no tokens scores zero across the board.
    #[must_use]
    pub fn polarity_scores(&self, text: &str) -> PolarityScores {
        let tokens = tokenize(text);
        let lower: Vec<String> = tokens.iter().map(|t| t.to_lowercase()).collect();
        let cap_diff = allcap_differential(&tokens);

        let mut sentiments = Vec::with_capacity(tokens.len());
        for i in 0..tokens.len() {
            let word = lower[i].as_str();
            let kind_of = word == "kind" && lower.get(i + 1).is_some_and(|next| next == "of");
            if kind_of || self.boosters.contains_key(word) {
                sentiments.push(0.0);
                continue;
            }
            sentiments.push(self.sentiment_valence(&tokens, &lower, i, cap_diff));
        }

        but_check(&lower, &mut sentiments);
        score_valence(&sentiments, text)
    }

    fn sentiment_valence(
        &self,
        tokens: &[&str],
        lower: &[String],
        i: usize,
        cap_diff: bool,
    ) -> f64 {
        let Some(&base) = self.lexicon.get(lower[i].as_str()) else {
            return 0.0;
        };
        let mut valence = base;

        // "no" right before a rated word acts as a negator, not a sentiment.
        if lower[i] == "no"
            && lower
                .get(i + 1)
                .is_some_and(|next| self.lexicon.contains_key(next.as_str()))
        {
            valence = 0.0;
        }
        if (i > 0 && lower[i - 1] == "no") || (i > 1 && lower[i - 2] == "no") {
            valence = base * N_SCALAR;
        }

        if cap_diff && is_all_caps(tokens[i]) {
            valence += if valence > 0.0 { C_INCR } else { -C_INCR };
        }

        for start_i in 0..3 {
            if i <= start_i {
                break;
            }
            let prev = i - (start_i + 1);
            if self.lexicon.contains_key(lower[prev].as_str()) {
                continue;
            }
            let mut scalar = self.scalar_inc_dec(tokens[prev], &lower[prev], valence, cap_diff);
            match start_i {
                1 => scalar *= 0.95,
                2 => scalar *= 0.9,
                _ => {}
            }
            valence += scalar;
            valence = negation_check(valence, lower, start_i, i);
        }

        least_check(valence, lower, i)
    }

    fn scalar_inc_dec(&self, token: &str, lower: &str, valence: f64, cap_diff: bool) -> f64 {
        let Some(&boost) = self.boosters.get(lower) else {
            return 0.0;
        };
        let mut scalar = if valence < 0.0 { -boost } else { boost };
        if cap_diff && is_all_caps(token) {
            scalar += if valence > 0.0 { C_INCR } else { -C_INCR };
        }
        scalar
    }
}

#[async_trait]
impl SentimentEngine for LexiconAnalyzer {
    async fn score(&self, text: &str) -> Result<ScoreResult, SentimentError> {
        Ok(normalize::from_polarity_scores(&self.polarity_scores(text)))
    }
}

/// Split on whitespace, stripping surrounding punctuation from words but
/// leaving short tokens (emoticons like `:)`) intact.
fn tokenize(text: &str) -> Vec<&str> {
    text.split_whitespace()
        .map(|token| {
            let stripped = token.trim_matches(|c: char| c.is_ascii_punctuation());
            if stripped.chars().count() <= 2 {
                token
            } else {
                stripped
            }
        })
        .collect()
}

fn is_all_caps(token: &str) -> bool {
    token.chars().any(char::is_uppercase) && !token.chars().any(char::is_lowercase)
}

/// True when some, but not all, tokens are shouted.
fn allcap_differential(tokens: &[&str]) -> bool {
    let caps = tokens.iter().filter(|t| is_all_caps(t)).count();
    caps > 0 && caps < tokens.len()
}

fn is_negation(word: &str) -> bool {
    NEGATIONS.contains(&word) || word.contains("n't")
}

fn negation_check(valence: f64, lower: &[String], start_i: usize, i: usize) -> f64 {
    let is_so_or_this = |w: &str| w == "so" || w == "this";
    match start_i {
        0 if is_negation(&lower[i - 1]) => valence * N_SCALAR,
        1 => {
            if lower[i - 2] == "never" && is_so_or_this(&lower[i - 1]) {
                valence * 1.25
            } else if lower[i - 2] == "without" && lower[i - 1] == "doubt" {
                valence
            } else if is_negation(&lower[i - 2]) {
                valence * N_SCALAR
            } else {
                valence
            }
        }
        2 => {
            if lower[i - 3] == "never"
                && (is_so_or_this(&lower[i - 2]) || is_so_or_this(&lower[i - 1]))
            {
                valence * 1.25
            } else if lower[i - 3] == "without"
                && (lower[i - 2] == "doubt" || lower[i - 1] == "doubt")
            {
                valence
            } else if is_negation(&lower[i - 3]) {
                valence * N_SCALAR
            } else {
                valence
            }
        }
        _ => valence,
    }
}

/// "least good" flips; "at least good" and "very least good" do not.
fn least_check(valence: f64, lower: &[String], i: usize) -> f64 {
    if i == 0 || lower[i - 1] != "least" {
        return valence;
    }
    if i > 1 && (lower[i - 2] == "at" || lower[i - 2] == "very") {
        return valence;
    }
    valence * N_SCALAR
}

/// Dampen sentiment before the first "but" and amplify it after.
fn but_check(lower: &[String], sentiments: &mut [f64]) {
    let Some(but_index) = lower.iter().position(|w| w == "but") else {
        return;
    };
    for (si, sentiment) in sentiments.iter_mut().enumerate() {
        if si < but_index {
            *sentiment *= 0.5;
        } else if si > but_index {
            *sentiment *= 1.5;
        }
    }
}

#[allow(clippy::cast_precision_loss)]
fn punctuation_emphasis(text: &str) -> f64 {
    let exclamations = text.matches('!').count().min(MAX_EXCLAMATIONS);
    let questions = text.matches('?').count();
    let question_amp = match questions {
        0 | 1 => 0.0,
        2 | 3 => questions as f64 * QUESTION_INCR,
        _ => QUESTION_CAP,
    };
    exclamations as f64 * EXCLAMATION_INCR + question_amp
}

fn normalize_sum(sum: f64) -> f64 {
    (sum / (sum * sum + NORMALIZATION_ALPHA).sqrt()).clamp(-1.0, 1.0)
}

fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}

#[allow(clippy::cast_precision_loss)]
fn score_valence(sentiments: &[f64], text: &str) -> PolarityScores {
    if sentiments.is_empty() {
        return PolarityScores::ZERO;
    }

    let punct = punctuation_emphasis(text);
    let sum: f64 = sentiments.iter().sum();
    let adjusted = if sum > 0.0 {
        sum + punct
    } else if sum < 0.0 {
        sum - punct
    } else {
        sum
    };
    let compound = normalize_sum(adjusted);

    let mut pos_sum = 0.0;
    let mut neg_sum = 0.0;
    let mut neu_count = 0usize;
    for &s in sentiments {
        if s > 0.0 {
            pos_sum += s + 1.0;
        } else if s < 0.0 {
            neg_sum += s - 1.0;
        } else {
            neu_count += 1;
        }
    }

    if pos_sum > f64::abs(neg_sum) {
        pos_sum += punct;
    } else if pos_sum < f64::abs(neg_sum) {
        neg_sum -= punct;
    }

    let total = pos_sum + f64::abs(neg_sum) + neu_count as f64;

    PolarityScores {
        neg: round_to((neg_sum / total).abs(), 3),
        neu: round_to((neu_count as f64 / total).abs(), 3),
        pos: round_to((pos_sum / total).abs(), 3),
        compound: round_to(compound, 4),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scores(text: &str) -> PolarityScores {
        LexiconAnalyzer::new().polarity_scores(text)
    }

    fn compound(text: &str) -> f64 {
        scores(text).compound
    }

    #[test]
    fn empty_text_scores_zero() {
        assert_eq!(scores(""), PolarityScores::ZERO);
        assert_eq!(scores("   "), PolarityScores::ZERO);
    }

    #[test]
    fn unrated_text_is_fully_neutral() {
        let s = scores("the table is in the kitchen");
        assert_eq!(s.compound, 0.0);
        assert_eq!(s.neu, 1.0);
        assert_eq!(s.pos, 0.0);
        assert_eq!(s.neg, 0.0);
    }

    #[test]
    fn love_this_matches_reference_breakdown() {
        let s = scores("I love this!");
        assert!((s.compound - 0.6696).abs() < 1e-9, "{s:?}");
        assert!((s.pos - 0.692).abs() < 1e-9, "{s:?}");
        assert!((s.neu - 0.308).abs() < 1e-9, "{s:?}");
        assert_eq!(s.neg, 0.0);
    }

    #[test]
    fn negation_flips_sign() {
        assert!(compound("this is good") > 0.0);
        assert!(compound("this is not good") < 0.0);
        assert!(compound("this isn't good") < 0.0);
    }

    #[test]
    fn no_before_rated_word_negates_it() {
        assert!(compound("no good") < 0.0);
    }

    #[test]
    fn booster_intensifies_and_dampener_softens() {
        let plain = compound("the service was good");
        assert!(compound("the service was very good") > plain);
        assert!(compound("the service was slightly good") < plain);
    }

    #[test]
    fn shouting_a_word_adds_emphasis() {
        assert!(compound("the food was GOOD") > compound("the food was good"));
    }

    #[test]
    fn fully_uppercase_text_gets_no_caps_emphasis() {
        assert_eq!(compound("GOOD FOOD"), compound("good food"));
    }

    #[test]
    fn exclamation_marks_amplify_up_to_four() {
        let one = compound("good!");
        let four = compound("good!!!!");
        let six = compound("good!!!!!!");
        assert!(four > one);
        assert_eq!(four, six);
    }

    #[test]
    fn contrast_after_but_dominates() {
        let c = compound("the food was good but the service was terrible");
        assert!(c < 0.0, "expected negative, got {c}");
    }

    #[test]
    fn at_least_does_not_negate() {
        assert!(compound("at least it was good") > 0.0);
        assert!(compound("least good") < 0.0);
    }

    #[test]
    fn emoticons_are_scored() {
        assert!(compound("see you tomorrow :)") > 0.0);
        assert!(compound("see you tomorrow :(") < 0.0);
    }

    #[test]
    fn overrides_extend_the_lexicon() {
        let mut overrides = LexiconOverrides::default();
        overrides.words.insert("meh".to_string(), -1.5);
        let analyzer = LexiconAnalyzer::with_overrides(&overrides);
        assert!(analyzer.polarity_scores("that was meh").compound < 0.0);
        let builtin = LexiconAnalyzer::new().vocabulary_size();
        assert_eq!(analyzer.vocabulary_size(), builtin + 1);
    }

    #[test]
    fn overrides_replace_builtin_valence() {
        let mut overrides = LexiconOverrides::default();
        overrides.words.insert("sick".to_string(), 2.0);
        let analyzer = LexiconAnalyzer::with_overrides(&overrides);
        let c = analyzer.polarity_scores("that trick was sick").compound;
        assert!(c > 0.0, "got {c}");
    }

    #[test]
    fn compound_stays_within_bounds() {
        let text = "love love love love love love love love love love!!!!";
        let c = compound(text);
        assert!(c <= 1.0 && c > 0.9, "got {c}");
    }

    #[tokio::test]
    async fn engine_normalizes_to_positive_category() {
        let analyzer = LexiconAnalyzer::new();
        let result = analyzer.score("I love this!").await.unwrap();
        assert_eq!(result.category, crate::types::Category::Positive);
        assert!(result.score > 0.0);
        for key in ["neg", "neu", "pos", "compound"] {
            assert!(result.details.contains_key(key), "missing {key}");
        }
    }
}
