use labelnorm_core::ConfigError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("invalid vocabulary: {0}")]
    Vocabulary(#[from] ConfigError),

    #[error("failed to compile {rule} pattern: {source}")]
    Pattern {
        rule: String,
        #[source]
        source: regex::Error,
    },
}

impl PipelineError {
    pub(crate) fn pattern(rule: impl Into<String>, source: regex::Error) -> Self {
        Self::Pattern {
            rule: rule.into(),
            source,
        }
    }
}
