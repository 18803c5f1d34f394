use crate::app_config::{AppConfig, Environment};
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Decoupled from the real environment so tests can drive it with a `HashMap`.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::net::SocketAddr;
    use std::path::PathBuf;

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let invalid = |var: &str, reason: String| ConfigError::InvalidEnvVar {
        var: var.to_string(),
        reason,
    };

    let bind_addr = or_default("MOODLINE_BIND_ADDR", "0.0.0.0:8000")
        .parse::<SocketAddr>()
        .map_err(|e| invalid("MOODLINE_BIND_ADDR", e.to_string()))?;

    let neural_timeout_secs = or_default("MOODLINE_NEURAL_TIMEOUT_SECS", "30")
        .parse::<u64>()
        .map_err(|e| invalid("MOODLINE_NEURAL_TIMEOUT_SECS", e.to_string()))?;
    if neural_timeout_secs == 0 {
        return Err(invalid(
            "MOODLINE_NEURAL_TIMEOUT_SECS",
            "must be greater than zero".to_string(),
        ));
    }

    let warmup_raw = or_default("MOODLINE_NEURAL_WARMUP", "true");
    let neural_warmup = parse_bool(&warmup_raw).ok_or_else(|| {
        invalid(
            "MOODLINE_NEURAL_WARMUP",
            format!("expected true or false, got '{warmup_raw}'"),
        )
    })?;

    let tei_url = or_default("MOODLINE_TEI_URL", "http://localhost:8080")
        .trim_end_matches('/')
        .to_string();
    if !(tei_url.starts_with("http://") || tei_url.starts_with("https://")) {
        return Err(invalid(
            "MOODLINE_TEI_URL",
            format!("'{tei_url}' is not an http(s) URL"),
        ));
    }

    let lexicon_overrides_path = lookup("MOODLINE_LEXICON_OVERRIDES")
        .ok()
        .filter(|v| !v.trim().is_empty())
        .map(PathBuf::from);

    Ok(AppConfig {
        env: parse_environment(&or_default("MOODLINE_ENV", "development")),
        bind_addr,
        log_level: or_default("MOODLINE_LOG_LEVEL", "info"),
        tei_url,
        neural_timeout_secs,
        neural_warmup,
        lexicon_overrides_path,
    })
}

/// Parse a string into an `Environment` variant.
///
/// Unrecognized values default to `Environment::Development`.
fn parse_environment(s: &str) -> Environment {
    match s {
        "production" => Environment::Production,
        "test" => Environment::Test,
        _ => Environment::Development,
    }
}

fn parse_bool(s: &str) -> Option<bool> {
    match s.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
