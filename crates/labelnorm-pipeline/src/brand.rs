use regex::Regex;

use crate::error::PipelineError;
use crate::pattern::whole_word;

/// Finds the configured brand in a sanitized label.
///
/// Candidates are tried in configured order and the first one present as a
/// whole word wins, regardless of where in the label it sits.
#[derive(Debug, Clone)]
pub struct BrandMatcher {
    candidates: Vec<(String, Regex)>,
}

impl BrandMatcher {
    /// Compiles one whole-word, case-insensitive pattern per brand token.
    ///
    /// # Errors
    ///
    /// Returns [`PipelineError::Pattern`] if a brand token produces a pattern
    /// the regex engine rejects.
    pub fn new(brands: &[String]) -> Result<Self, PipelineError> {
        let candidates = brands
            .iter()
            .map(|brand| {
                whole_word(brand)
                    .map(|pattern| (brand.clone(), pattern))
                    .map_err(|e| PipelineError::pattern(format!("brand '{brand}'"), e))
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { candidates })
    }

    /// Returns the first brand, in configured order, that occurs in `sanitized`.
    #[must_use]
    pub fn find_brand(&self, sanitized: &str) -> Option<&str> {
        self.find(sanitized).map(|(brand, _)| brand)
    }

    /// Like [`Self::find_brand`], also handing back the compiled pattern so
    /// the brand can be removed without recompiling it.
    pub(crate) fn find(&self, sanitized: &str) -> Option<(&str, &Regex)> {
        self.candidates
            .iter()
            .find(|(_, pattern)| pattern.is_match(sanitized))
            .map(|(brand, pattern)| (brand.as_str(), pattern))
    }
}
