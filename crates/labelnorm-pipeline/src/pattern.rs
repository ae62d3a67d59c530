//! Shared regex construction for vocabulary-driven patterns.

use regex::Regex;

/// Case-insensitive whole-word matcher for a literal token.
pub(crate) fn whole_word(literal: &str) -> Result<Regex, regex::Error> {
    Regex::new(&format!(r"(?i)\b{}\b", regex::escape(literal)))
}

/// Case-insensitive whole-word matcher for any of several literal tokens.
pub(crate) fn whole_word_any(literals: &[&str]) -> Result<Regex, regex::Error> {
    let alternation = literals
        .iter()
        .map(|literal| regex::escape(literal))
        .collect::<Vec<_>>()
        .join("|");
    Regex::new(&format!(r"(?i)\b(?:{alternation})\b"))
}

/// `KG|G|L|ML|CL`-style alternation body, uppercased and escaped, in
/// configured order. Callers wrap it in their own group.
pub(crate) fn unit_alternation(units: &[String]) -> String {
    units
        .iter()
        .map(|unit| regex::escape(&unit.to_uppercase()))
        .collect::<Vec<_>>()
        .join("|")
}
