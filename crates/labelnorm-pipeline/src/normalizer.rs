use labelnorm_core::{LabelPair, NormalizedLabel, Vocabulary};

use crate::assemble::assemble;
use crate::brand::BrandMatcher;
use crate::error::PipelineError;
use crate::product_name::reduce_name_with;
use crate::quantity::QuantityExtractor;
use crate::sanitize::sanitize;

/// The compiled five-stage pipeline.
///
/// Read-only once built, so one instance can serve any number of labels and
/// threads.
#[derive(Debug)]
pub struct LabelNormalizer {
    brands: BrandMatcher,
    quantities: QuantityExtractor,
}

impl LabelNormalizer {
    /// Validates `vocabulary` and compiles its brand and unit patterns.
    ///
    /// # Errors
    ///
    /// Returns [`PipelineError::Vocabulary`] if the vocabulary is invalid and
    /// [`PipelineError::Pattern`] if a pattern fails to compile.
    pub fn new(vocabulary: &Vocabulary) -> Result<Self, PipelineError> {
        vocabulary.validate()?;
        Ok(Self {
            brands: BrandMatcher::new(&vocabulary.brands)?,
            quantities: QuantityExtractor::new(&vocabulary.units)?,
        })
    }

    /// Runs one label through every stage.
    #[must_use]
    pub fn normalize(&self, label: &str) -> NormalizedLabel {
        let sanitized = sanitize(label);
        let found = self.brands.find(&sanitized);
        let brand = found.map(|(brand, _)| brand);
        let quantities = self.quantities.extract(&sanitized);
        let product_name =
            reduce_name_with(&sanitized, found.map(|(_, pattern)| pattern), &quantities);
        let normalized = assemble(brand, &product_name, &quantities);

        tracing::debug!(
            label,
            brand = brand.unwrap_or("-"),
            quantity_count = quantities.len(),
            normalized = %normalized,
            "normalized label"
        );

        NormalizedLabel {
            original: label.to_owned(),
            brand: brand.map(str::to_owned),
            quantities,
            product_name,
            normalized,
        }
    }

    /// Normalizes a batch, returning (original, normalized) pairs in input
    /// order.
    ///
    /// Each label is trimmed first and blank labels are skipped, so the
    /// output can be shorter than the input.
    #[must_use]
    pub fn normalize_batch<I, S>(&self, labels: I) -> Vec<LabelPair>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut skipped = 0usize;
        let pairs: Vec<LabelPair> = labels
            .into_iter()
            .filter_map(|label| {
                let trimmed = label.as_ref().trim();
                if trimmed.is_empty() {
                    skipped += 1;
                    None
                } else {
                    Some(LabelPair::from(self.normalize(trimmed)))
                }
            })
            .collect();

        tracing::info!(processed = pairs.len(), skipped, "label batch normalized");
        pairs
    }
}

#[cfg(test)]
#[path = "normalizer_test.rs"]
mod tests;
