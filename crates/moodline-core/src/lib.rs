//! Shared configuration for the moodline workspace.
//!
//! Reads process configuration from environment variables (with `.env`
//! support) and loads the optional lexicon override file.

pub mod app_config;
pub mod config;
pub mod lexicon_overrides;

use thiserror::Error;

pub use app_config::{AppConfig, Environment};
pub use config::{load_app_config, load_app_config_from_env};
pub use lexicon_overrides::{load_lexicon_overrides, LexiconOverrides};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },

    #[error("failed to read lexicon overrides at {path}: {source}")]
    LexiconFileIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse lexicon overrides: {0}")]
    LexiconFileParse(#[from] serde_yaml::Error),

    #[error("lexicon override validation failed: {0}")]
    Validation(String),
}
