//! Candidate normalization
//!
//! Raw player input is cleaned up before any rule looks at it.

use unicode_general_category::{GeneralCategory, get_general_category};

/// Normalize raw input into the form every rule and the stored guess use
///
/// Steps, in order: strip symbol characters, lowercase, trim surrounding whitespace.
/// Punctuation is not a symbol and survives, as do interior spaces.
///
/// # Examples
/// ```
/// use word_scramble::core::normalize;
///
/// assert_eq!(normalize("  Silk$ "), "silk");
/// assert_eq!(normalize("WORM+"), "worm");
/// assert_eq!(normalize("it's"), "it's");
/// ```
#[must_use]
pub fn normalize(raw: &str) -> String {
    let stripped: String = raw.chars().filter(|&c| !is_symbol(c)).collect();
    stripped.to_lowercase().trim().to_string()
}

/// Check whether a character belongs to one of the Unicode symbol categories
///
/// Math (Sm), currency (Sc), modifier (Sk) and other (So) symbols all count.
#[must_use]
pub fn is_symbol(c: char) -> bool {
    matches!(
        get_general_category(c),
        GeneralCategory::MathSymbol
            | GeneralCategory::CurrencySymbol
            | GeneralCategory::ModifierSymbol
            | GeneralCategory::OtherSymbol
    )
}
