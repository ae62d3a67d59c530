use std::sync::LazyLock;

use regex::Regex;
use unicode_normalization::UnicodeNormalization;

/// Nonspacing marks only. Spacing and enclosing marks are left for
/// [`DISALLOWED`] and so become a space.
static NONSPACING_MARK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\p{Mn}+").expect("valid nonspacing-mark regex"));

/// Anything outside letters, digits, whitespace and `, . / + -`.
static DISALLOWED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^A-Za-z0-9\s,./+-]").expect("valid disallowed-chars regex"));

/// Strips accents and punctuation noise from a raw label.
///
/// Accented letters are decomposed (NFD) and their nonspacing marks dropped,
/// every character outside the allowed set becomes a space, and whitespace
/// runs collapse to one space with the ends trimmed. Total for any input and
/// idempotent.
#[must_use]
pub fn sanitize(text: &str) -> String {
    let decomposed: String = text.nfd().collect();
    let unaccented = NONSPACING_MARK.replace_all(&decomposed, "");
    let cleaned = DISALLOWED.replace_all(&unaccented, " ");
    cleaned.split_whitespace().collect::<Vec<_>>().join(" ")
}
