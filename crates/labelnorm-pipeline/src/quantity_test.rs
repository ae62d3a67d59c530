use labelnorm_core::Vocabulary;

use super::*;

fn extractor() -> QuantityExtractor {
    QuantityExtractor::new(&Vocabulary::default().units).unwrap()
}

fn texts(tokens: &[QuantityToken]) -> Vec<&str> {
    tokens.iter().map(QuantityToken::as_str).collect()
}

// -----------------------------------------------------------------------
// individual rules
// -----------------------------------------------------------------------

#[test]
fn decimal_with_dot_is_rewritten_to_comma() {
    let found = extractor().extract("Desodorisant 2.5ml 4scent");
    assert_eq!(texts(&found), ["2,5ML"]);
    assert_eq!(found[0].shape, QuantityShape::Decimal);
}

#[test]
fn decimal_with_comma_is_kept() {
    let found = extractor().extract("5 BQ ALU 1,5L PROFONDE");
    assert_eq!(texts(&found), ["1,5L"]);
}

#[test]
fn decimal_keeps_space_before_unit() {
    let found = extractor().extract("HUILE 1.5 L");
    assert_eq!(texts(&found), ["1,5 L"]);
}

#[test]
fn multiplier_quantity() {
    let found = extractor().extract("6X30G CHIPS LISSE NAT CRF CLAS");
    assert_eq!(texts(&found), ["6X30G"]);
    assert_eq!(found[0].shape, QuantityShape::Multiplier);
}

#[test]
fn multiplier_with_decimal_is_rewritten_to_comma() {
    let found = extractor().extract("4X12.5CL BIERE");
    assert_eq!(texts(&found), ["4X12,5CL"]);
}

#[test]
fn integer_quantity_needs_two_digits() {
    let found = extractor().extract("PATES 500G");
    assert_eq!(texts(&found), ["500G"]);
    assert_eq!(found[0].shape, QuantityShape::Integer);
}

#[test]
fn integer_quantity_rejects_leading_zero() {
    assert!(extractor().extract("REF 05G").is_empty());
}

#[test]
fn single_digit_at_start_of_label() {
    let found = extractor().extract("1L PET PUR JUS POMME CRF EXTRA");
    assert_eq!(texts(&found), ["1L"]);
    assert_eq!(found[0].shape, QuantityShape::SingleDigit);
}

#[test]
fn single_digit_drops_space_before_unit() {
    let found = extractor().extract("SUCRE 1 KG");
    assert_eq!(texts(&found), ["1KG"]);
}

#[test]
fn single_digit_needs_whitespace_before_it() {
    assert!(extractor().extract("A4G").is_empty());
    assert!(extractor().extract("PACK-5G").is_empty());
}

#[test]
fn single_digit_without_unit_is_ignored() {
    assert!(extractor().extract("5 BQ ALU PROFONDE").is_empty());
}

#[test]
fn fraction_with_unit_suppresses_bare_fraction() {
    let found = extractor().extract("FROMAGE 1/2 KG");
    assert_eq!(texts(&found), ["1/2 KG"]);
    assert_eq!(found[0].shape, QuantityShape::Fraction);
}

#[test]
fn bare_fraction() {
    let found = extractor().extract("TARTE 1/4 POMME");
    assert_eq!(texts(&found), ["1/4"]);
    assert_eq!(found[0].shape, QuantityShape::BareFraction);
}

#[test]
fn bare_fraction_skipped_when_inside_earlier_token() {
    // "1/2" is a substring of the "11/2" already collected by the same rule.
    let found = extractor().extract("11/2 1/2");
    assert_eq!(texts(&found), ["11/2"]);
}

// -----------------------------------------------------------------------
// cascade order and deduplication
// -----------------------------------------------------------------------

#[test]
fn output_follows_rule_order_not_text_order() {
    let found = extractor().extract("1/2L LAIT 250G 1,5KG");
    assert_eq!(texts(&found), ["1,5KG", "250G", "1/2L"]);
    let shapes: Vec<_> = found.iter().map(|t| t.shape).collect();
    assert_eq!(
        shapes,
        [
            QuantityShape::Decimal,
            QuantityShape::Integer,
            QuantityShape::Fraction
        ]
    );
}

#[test]
fn duplicates_are_removed() {
    let found = extractor().extract("500G PATES 500G");
    assert_eq!(texts(&found), ["500G"]);
}

#[test]
fn matching_is_case_insensitive() {
    let found = extractor().extract("lait 1,5l");
    assert_eq!(texts(&found), ["1,5L"]);
}

#[test]
fn empty_label_has_no_quantities() {
    assert!(extractor().extract("").is_empty());
}

// -----------------------------------------------------------------------
// configuration
// -----------------------------------------------------------------------

#[test]
fn custom_units_replace_defaults() {
    let extractor = QuantityExtractor::new(&["OZ".to_owned()]).unwrap();
    let found = extractor.extract("CAN 12OZ 5G");
    assert_eq!(texts(&found), ["12OZ"]);
}

#[test]
fn lowercase_units_are_matched_uppercased() {
    let extractor = QuantityExtractor::new(&["ml".to_owned()]).unwrap();
    let found = extractor.extract("SIROP 33 ml");
    assert_eq!(texts(&found), ["33 ML"]);
}

#[derive(Debug)]
struct FixedRule(&'static str);

impl QuantityRule for FixedRule {
    fn shape(&self) -> QuantityShape {
        QuantityShape::Integer
    }

    fn apply(&self, _upper: &str, found: &mut Vec<QuantityToken>) {
        found.push(QuantityToken::new(self.0, self.shape()));
    }
}

#[test]
fn with_rules_runs_in_given_order_and_dedups() {
    let extractor = QuantityExtractor::with_rules(vec![
        Box::new(FixedRule("B")),
        Box::new(FixedRule("A")),
        Box::new(FixedRule("B")),
    ]);
    assert_eq!(texts(&extractor.extract("anything")), ["B", "A"]);
}
