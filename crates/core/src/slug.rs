//! Derived-identifier rule for named records.
//!
//! Prisons and victims are keyed by a slug computed from their name rather
//! than a generated surrogate. The rule is deliberately minimal: lowercase
//! the name and replace every space with an underscore. Diacritics and
//! punctuation pass through unchanged, so `"Închisoarea Pitești"` keys as
//! `"închisoarea_pitești"`.
//!
//! Two names that normalize identically produce the same slug; the storage
//! layer rejects the second insert via a unique-key violation, which the API
//! surfaces as a 409 conflict.

/// Derive a record slug from a human-readable name.
///
/// # Examples
///
/// ```
/// use memorial_core::slug::slugify;
///
/// assert_eq!(slugify("Test Site"), "test_site");
/// assert_eq!(slugify("Memorialul Sighet"), "memorialul_sighet");
/// ```
pub fn slugify(name: &str) -> String {
    name.to_lowercase().replace(' ', "_")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowercases_and_underscores() {
        assert_eq!(slugify("Test Site"), "test_site");
    }

    #[test]
    fn multiple_spaces_each_become_underscores() {
        assert_eq!(slugify("A  B C"), "a__b_c");
    }

    #[test]
    fn already_lowercase_single_word_is_unchanged() {
        assert_eq!(slugify("gherla"), "gherla");
    }

    #[test]
    fn diacritics_are_preserved() {
        assert_eq!(slugify("Închisoarea Pitești"), "închisoarea_pitești");
    }

    #[test]
    fn differently_cased_names_collide() {
        assert_eq!(slugify("Test Site"), slugify("TEST SITE"));
    }
}
