use labelnorm_core::QuantityToken;
use regex::Regex;

use crate::pattern::{whole_word, whole_word_any};

/// Derives the product name by removing the brand and every quantity from
/// the sanitized label.
///
/// Removal is whole-word and case-insensitive. Each quantity is removed in
/// both its canonical comma spelling and its dot spelling, since the label
/// may still carry the dot the canonical token replaced. Everything else
/// (descriptive words, stray digits, codes) stays.
#[must_use]
pub fn reduce_name(sanitized: &str, brand: Option<&str>, quantities: &[QuantityToken]) -> String {
    let brand_pattern = brand.and_then(|brand| match whole_word(brand) {
        Ok(pattern) => Some(pattern),
        Err(e) => {
            tracing::warn!(brand, error = %e, "could not build brand removal pattern; brand left in place");
            None
        }
    });
    reduce_name_with(sanitized, brand_pattern.as_ref(), quantities)
}

/// [`reduce_name`] with the brand pattern already compiled, as held by
/// [`crate::brand::BrandMatcher`].
///
/// Quantities are removed one token at a time, in extraction order, with a
/// single pattern covering both spellings of the token.
pub(crate) fn reduce_name_with(
    sanitized: &str,
    brand_pattern: Option<&Regex>,
    quantities: &[QuantityToken],
) -> String {
    let mut name = match brand_pattern {
        Some(pattern) => pattern.replace_all(sanitized, "").into_owned(),
        None => sanitized.to_owned(),
    };

    for quantity in quantities {
        name = remove_quantity(&name, quantity);
    }

    name.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn remove_quantity(text: &str, quantity: &QuantityToken) -> String {
    let canonical = quantity.as_str();
    let dot = quantity.dot_spelling();
    let mut spellings = vec![canonical];
    if dot != canonical {
        spellings.push(&dot);
    }

    match whole_word_any(&spellings) {
        Ok(pattern) => pattern.replace_all(text, "").into_owned(),
        Err(e) => {
            tracing::warn!(token = canonical, error = %e, "could not build removal pattern; token left in place");
            text.to_owned()
        }
    }
}
