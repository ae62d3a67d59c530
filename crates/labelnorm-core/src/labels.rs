use serde::{Deserialize, Serialize};

/// Which rule of the quantity cascade produced a token.
///
/// Variants are listed in cascade order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuantityShape {
    /// `2,5ML`, `1.5 KG`
    Decimal,
    /// `6X30G`, `4X12,5CL`
    Multiplier,
    /// Two or more digits with a unit, e.g. `250G`.
    Integer,
    /// `1L` when the digit stands alone at the start or after a space.
    SingleDigit,
    /// `1/2 KG`
    Fraction,
    /// `1/4` with no unit.
    BareFraction,
}

impl std::fmt::Display for QuantityShape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            QuantityShape::Decimal => write!(f, "decimal"),
            QuantityShape::Multiplier => write!(f, "multiplier"),
            QuantityShape::Integer => write!(f, "integer"),
            QuantityShape::SingleDigit => write!(f, "single_digit"),
            QuantityShape::Fraction => write!(f, "fraction"),
            QuantityShape::BareFraction => write!(f, "bare_fraction"),
        }
    }
}

/// A weight or volume expression pulled out of a label, in canonical
/// (comma-decimal) spelling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuantityToken {
    pub text: String,
    pub shape: QuantityShape,
}

impl QuantityToken {
    #[must_use]
    pub fn new(text: impl Into<String>, shape: QuantityShape) -> Self {
        Self {
            text: text.into(),
            shape,
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// The token with every comma swapped for a dot, i.e. how the quantity
    /// may have been written in the source label.
    #[must_use]
    pub fn dot_spelling(&self) -> String {
        self.text.replace(',', ".")
    }
}

impl std::fmt::Display for QuantityToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.text)
    }
}

/// The full result of running one label through the pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizedLabel {
    /// The label exactly as it was handed to the pipeline.
    pub original: String,
    /// Configured brand token that matched, if any.
    pub brand: Option<String>,
    /// Quantities in first-discovery order, without duplicates.
    pub quantities: Vec<QuantityToken>,
    /// Whatever remains once the brand and quantities are removed.
    pub product_name: String,
    /// `BRAND PRODUCT-NAME QUANTITY…`, uppercased.
    pub normalized: String,
}

impl NormalizedLabel {
    /// Returns the quantity tokens as plain strings.
    #[must_use]
    pub fn quantity_strings(&self) -> Vec<&str> {
        self.quantities.iter().map(QuantityToken::as_str).collect()
    }

    #[must_use]
    pub fn to_pair(&self) -> LabelPair {
        LabelPair {
            original: self.original.clone(),
            normalized: self.normalized.clone(),
        }
    }
}

/// An (original, normalized) row as handed to the exporters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelPair {
    pub original: String,
    pub normalized: String,
}

impl From<NormalizedLabel> for LabelPair {
    fn from(label: NormalizedLabel) -> Self {
        Self {
            original: label.original,
            normalized: label.normalized,
        }
    }
}
