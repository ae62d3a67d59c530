use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Brand tokens in match-priority order.
///
/// The order is a policy decision: an abbreviation listed before its full
/// name wins whenever both appear in a label.
pub const DEFAULT_BRANDS: &[&str] = &[
    "CRF",
    "CARF",
    "CARREFOUR",
    "PAPERMATE",
    "PM",
    "SHARPIE",
    "ROTRING",
];

/// Weight and volume units accepted after a quantity.
pub const DEFAULT_UNITS: &[&str] = &["KG", "G", "L", "ML", "CL"];

/// The brand and unit lists the pipeline matches against.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vocabulary {
    pub brands: Vec<String>,
    #[serde(default = "default_units")]
    pub units: Vec<String>,
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self {
            brands: DEFAULT_BRANDS.iter().map(|&b| b.to_owned()).collect(),
            units: default_units(),
        }
    }
}

impl Vocabulary {
    /// Build a vocabulary from explicit lists, validating both.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Validation`] if either list is empty or holds a
    /// blank or duplicate token.
    pub fn new<B, U>(brands: B, units: U) -> Result<Self, ConfigError>
    where
        B: IntoIterator,
        B::Item: Into<String>,
        U: IntoIterator,
        U::Item: Into<String>,
    {
        let vocabulary = Self {
            brands: brands.into_iter().map(Into::into).collect(),
            units: units.into_iter().map(Into::into).collect(),
        }
        .trimmed();
        vocabulary.validate()?;
        Ok(vocabulary)
    }

    /// Check the invariants the pipeline relies on.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Validation`] describing the first problem found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_tokens("brand", &self.brands)?;
        validate_tokens("unit", &self.units)
    }

    fn trimmed(self) -> Self {
        Self {
            brands: self.brands.into_iter().map(|b| b.trim().to_owned()).collect(),
            units: self.units.into_iter().map(|u| u.trim().to_owned()).collect(),
        }
    }
}

fn default_units() -> Vec<String> {
    DEFAULT_UNITS.iter().map(|&u| u.to_owned()).collect()
}

/// Load and validate a vocabulary from a YAML file.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read, parsed, or fails validation.
pub fn load_vocabulary(path: &Path) -> Result<Vocabulary, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::VocabularyFileIo {
        path: path.display().to_string(),
        source: e,
    })?;

    let vocabulary: Vocabulary = serde_yaml::from_str::<Vocabulary>(&content)?.trimmed();

    vocabulary.validate()?;

    Ok(vocabulary)
}

fn validate_tokens(kind: &str, tokens: &[String]) -> Result<(), ConfigError> {
    if tokens.is_empty() {
        return Err(ConfigError::Validation(format!(
            "at least one {kind} token is required"
        )));
    }

    let mut seen = HashSet::new();
    for token in tokens {
        if token.is_empty() {
            return Err(ConfigError::Validation(format!(
                "{kind} tokens must be non-empty"
            )));
        }
        if !seen.insert(token.to_uppercase()) {
            return Err(ConfigError::Validation(format!(
                "duplicate {kind} token: '{token}'"
            )));
        }
    }

    Ok(())
}

#[cfg(test)]
#[path = "vocabulary_test.rs"]
mod tests;
