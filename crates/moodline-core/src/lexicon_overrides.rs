use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;

use crate::ConfigError;

/// Largest absolute valence accepted for a lexicon entry.
pub const MAX_VALENCE: f64 = 4.0;

/// Extra word valences merged into the lexicon engine at startup.
///
/// ```yaml
/// words:
///   meh: -0.6
///   lit: 2.2
/// ```
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct LexiconOverrides {
    #[serde(default)]
    pub words: BTreeMap<String, f64>,
}

/// Load and validate a lexicon override file.
///
/// Keys are lower-cased on load so lookups stay case-insensitive.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read, parsed, or fails validation.
pub fn load_lexicon_overrides(path: &Path) -> Result<LexiconOverrides, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::LexiconFileIo {
        path: path.display().to_string(),
        source: e,
    })?;

    let raw: LexiconOverrides = serde_yaml::from_str(&content)?;
    validate_overrides(raw)
}

fn validate_overrides(raw: LexiconOverrides) -> Result<LexiconOverrides, ConfigError> {
    let mut words = BTreeMap::new();

    for (word, valence) in raw.words {
        let key = word.trim().to_lowercase();
        if key.is_empty() {
            return Err(ConfigError::Validation(
                "lexicon word must be non-empty".to_string(),
            ));
        }
        if key.split_whitespace().count() > 1 {
            return Err(ConfigError::Validation(format!(
                "lexicon entry '{word}' must be a single token"
            )));
        }
        if !valence.is_finite() || valence.abs() > MAX_VALENCE {
            return Err(ConfigError::Validation(format!(
                "lexicon entry '{word}' has valence {valence}; must be within [-{MAX_VALENCE}, {MAX_VALENCE}]"
            )));
        }
        if words.insert(key.clone(), valence).is_some() {
            return Err(ConfigError::Validation(format!(
                "duplicate lexicon entry: '{key}'"
            )));
        }
    }

    Ok(LexiconOverrides { words })
}
