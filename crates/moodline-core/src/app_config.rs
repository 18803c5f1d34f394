use std::net::SocketAddr;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub bind_addr: SocketAddr,
    pub log_level: String,
    /// Base URL of the TEI server hosting the sentiment classifier.
    pub tei_url: String,
    pub neural_timeout_secs: u64,
    /// Probe the neural model before serving traffic.
    pub neural_warmup: bool,
    /// Optional YAML file with extra lexicon valences.
    pub lexicon_overrides_path: Option<PathBuf>,
}
