use labelnorm_core::QuantityToken;

/// Builds the final `BRAND PRODUCT-NAME QUANTITY…` label.
///
/// Absent brand and blank product name are skipped. The result is
/// uppercased with single spaces; it is empty only when all three inputs are.
#[must_use]
pub fn assemble(brand: Option<&str>, product_name: &str, quantities: &[QuantityToken]) -> String {
    let mut parts: Vec<&str> = Vec::with_capacity(quantities.len() + 2);

    if let Some(brand) = brand {
        parts.push(brand);
    }

    let product_name = product_name.trim();
    if !product_name.is_empty() {
        parts.push(product_name);
    }

    parts.extend(quantities.iter().map(QuantityToken::as_str));

    parts
        .join(" ")
        .to_uppercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}
