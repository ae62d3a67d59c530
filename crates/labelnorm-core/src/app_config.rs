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

/// Runtime settings for the `labelnorm` binary.
///
/// The normalization pipeline itself never reads these; they only steer the
/// calling layer (logging, where the vocabulary comes from, output naming).
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub log_level: String,
    /// Vocabulary YAML to load. `None` means the built-in vocabulary.
    pub vocabulary_path: Option<PathBuf>,
    /// Base name for exported files; `.tsv` / `.xlsx` are appended.
    pub output_stem: String,
    /// How many results the CLI echoes after a batch run.
    pub preview_count: usize,
}
