//! Quantity extraction cascade.
//!
//! Six rules run in a fixed order over an uppercased copy of the sanitized
//! label. Each rule appends every match it finds to a shared running list
//! before the next rule runs; the list is then deduplicated keeping first
//! occurrences. Earlier rules therefore take precedence in the output order.

use std::sync::LazyLock;

use labelnorm_core::{QuantityShape, QuantityToken};
use regex::Regex;

use crate::error::PipelineError;
use crate::pattern::unit_alternation;

static DOT_DECIMAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([0-9]+)\.([0-9]+)").expect("valid dot-decimal regex"));

/// One step of the quantity cascade.
pub trait QuantityRule: Send + Sync + std::fmt::Debug {
    fn shape(&self) -> QuantityShape;

    /// Appends every token this rule finds in `upper` to `found`.
    ///
    /// `found` already holds the output of every earlier rule.
    fn apply(&self, upper: &str, found: &mut Vec<QuantityToken>);
}

/// A value immediately followed (optional space) by a unit. Covers the
/// decimal, multiplier, integer and fraction rules.
#[derive(Debug)]
struct UnitPattern {
    shape: QuantityShape,
    pattern: Regex,
    comma_decimal: bool,
}

impl QuantityRule for UnitPattern {
    fn shape(&self) -> QuantityShape {
        self.shape
    }

    fn apply(&self, upper: &str, found: &mut Vec<QuantityToken>) {
        for m in self.pattern.find_iter(upper) {
            let text = if self.comma_decimal {
                DOT_DECIMAL.replace_all(m.as_str(), "${1},${2}").into_owned()
            } else {
                m.as_str().to_owned()
            };
            found.push(QuantityToken::new(text, self.shape));
        }
    }
}

/// A lone digit 1-9 with a unit, only at the start of the label or right
/// after whitespace. The space between digit and unit is dropped.
#[derive(Debug)]
struct SingleDigit {
    pattern: Regex,
}

impl QuantityRule for SingleDigit {
    fn shape(&self) -> QuantityShape {
        QuantityShape::SingleDigit
    }

    fn apply(&self, upper: &str, found: &mut Vec<QuantityToken>) {
        for caps in self.pattern.captures_iter(upper) {
            let (Some(digit), Some(unit)) = (caps.get(1), caps.get(2)) else {
                continue;
            };
            found.push(QuantityToken::new(
                format!("{}{}", digit.as_str(), unit.as_str()),
                QuantityShape::SingleDigit,
            ));
        }
    }
}

/// `N/M` with no unit, skipped when it is part of a token already found.
#[derive(Debug)]
struct BareFraction {
    pattern: Regex,
}

impl QuantityRule for BareFraction {
    fn shape(&self) -> QuantityShape {
        QuantityShape::BareFraction
    }

    fn apply(&self, upper: &str, found: &mut Vec<QuantityToken>) {
        for m in self.pattern.find_iter(upper) {
            let fraction = m.as_str();
            if found.iter().any(|token| token.text.contains(fraction)) {
                continue;
            }
            found.push(QuantityToken::new(fraction, QuantityShape::BareFraction));
        }
    }
}

/// Runs the ordered rule cascade and deduplicates its output.
#[derive(Debug)]
pub struct QuantityExtractor {
    rules: Vec<Box<dyn QuantityRule>>,
}

impl QuantityExtractor {
    /// Builds the standard six-rule cascade for the given units.
    ///
    /// # Errors
    ///
    /// Returns [`PipelineError::Pattern`] if a rule pattern fails to compile
    /// for this unit list.
    pub fn new(units: &[String]) -> Result<Self, PipelineError> {
        let units = unit_alternation(units);

        let unit_rule = |shape: QuantityShape, body: &str, comma_decimal: bool| {
            compile(shape, &format!(r"\b{body}\s*(?:{units})\b")).map(|pattern| {
                Box::new(UnitPattern {
                    shape,
                    pattern,
                    comma_decimal,
                }) as Box<dyn QuantityRule>
            })
        };

        let rules: Vec<Box<dyn QuantityRule>> = vec![
            unit_rule(QuantityShape::Decimal, r"[0-9]+[.,][0-9]+", true)?,
            unit_rule(QuantityShape::Multiplier, r"[0-9]+X[0-9]+[.,]?[0-9]*", true)?,
            // Two digits or more, no leading zero: keeps stray product codes out.
            unit_rule(
                QuantityShape::Integer,
                r"(?:[1-9][0-9]{2,}|[1-9][0-9])",
                false,
            )?,
            Box::new(SingleDigit {
                pattern: compile(
                    QuantityShape::SingleDigit,
                    &format!(r"(?:^|\s)([1-9])\s*({units})\b"),
                )?,
            }),
            unit_rule(QuantityShape::Fraction, r"[0-9]+/[0-9]+", false)?,
            Box::new(BareFraction {
                pattern: compile(QuantityShape::BareFraction, r"\b[0-9]+/[0-9]+\b")?,
            }),
        ];

        Ok(Self { rules })
    }

    /// Builds an extractor from a custom rule list, applied in the given order.
    #[must_use]
    pub fn with_rules(rules: Vec<Box<dyn QuantityRule>>) -> Self {
        Self { rules }
    }

    /// Extracts quantity tokens from a sanitized label.
    ///
    /// The result has no duplicate strings and keeps first-discovery order
    /// across the rules. An empty result is normal.
    #[must_use]
    pub fn extract(&self, sanitized: &str) -> Vec<QuantityToken> {
        let upper = sanitized.to_uppercase();
        let mut found = Vec::new();
        for rule in &self.rules {
            rule.apply(&upper, &mut found);
        }
        dedup_first_seen(found)
    }
}

fn compile(shape: QuantityShape, pattern: &str) -> Result<Regex, PipelineError> {
    Regex::new(pattern).map_err(|e| PipelineError::pattern(format!("{shape} quantity"), e))
}

fn dedup_first_seen(tokens: Vec<QuantityToken>) -> Vec<QuantityToken> {
    let mut unique: Vec<QuantityToken> = Vec::with_capacity(tokens.len());
    for token in tokens {
        if !unique.iter().any(|seen| seen.text == token.text) {
            unique.push(token);
        }
    }
    unique
}

#[cfg(test)]
#[path = "quantity_test.rs"]
mod tests;
