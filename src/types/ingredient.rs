//! Ingredient normalization utilities.
//!
//! ## Overview
//!
//! Ingredients arrive as free text from two places: the recipe catalog and
//! the user. Before any set operation both sides go through [`normalize`],
//! so `" Tomatoes "` and `"tomatoes"` are the same ingredient.
//!
//! Matching is exact string equality after normalization. There is no
//! stemming, pluralization or synonym handling.
//!
//! ## Examples
//!
//! ```
//! use pantry_match::types::ingredient::{normalize, parse_ingredient_list};
//!
//! assert_eq!(normalize("  Parmesan Cheese "), "parmesan cheese");
//!
//! let parsed = parse_ingredient_list("pasta, Eggs ,bacon");
//! assert_eq!(parsed, vec!["pasta", "Eggs", "bacon"]);
//! ```

use std::collections::BTreeSet;

/// A deduplicated, ordered set of normalized ingredient names.
pub type IngredientSet = BTreeSet<String>;

// ============================================================================
// Normalization
// ============================================================================

/// Normalize a single ingredient: trim surrounding whitespace, lowercase.
///
/// Total and deterministic. An all-whitespace input normalizes to `""`.
pub fn normalize(ingredient: &str) -> String {
    ingredient.trim().to_lowercase()
}

/// Normalize a sequence of ingredients into a set.
///
/// Duplicates collapse, so `["Eggs", "eggs "]` yields a single entry.
///
/// # Example
///
/// ```
/// use pantry_match::types::ingredient::normalize_all;
///
/// let set = normalize_all(["Eggs", "eggs ", "Milk"]);
/// assert_eq!(set.len(), 2);
/// assert!(set.contains("eggs"));
/// ```
pub fn normalize_all<I, S>(ingredients: I) -> IngredientSet
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    ingredients
        .into_iter()
        .map(|i| normalize(i.as_ref()))
        .collect()
}

// ============================================================================
// Parsing
// ============================================================================

/// Split a comma-separated ingredient line into trimmed tokens.
///
/// Empty tokens (from `"a,,b"` or a trailing comma) are dropped. Case is
/// left untouched; normalization happens inside the matcher.
pub fn parse_ingredient_list(line: &str) -> Vec<String> {
    line.split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(str::to_owned)
        .collect()
}

/// Case-insensitive label comparison used by the category filters.
///
/// Whitespace is significant: a catalog label of `" Italian "` does not
/// equal `"Italian"`. User-side values are trimmed when they are parsed.
pub fn labels_equal(a: &str, b: &str) -> bool {
    a.to_lowercase() == b.to_lowercase()
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_trims_and_lowercases() {
        assert_eq!(normalize(" Tomatoes "), "tomatoes");
        assert_eq!(normalize("tomatoes"), "tomatoes");
        assert_eq!(normalize("\tBLACK Pepper\n"), "black pepper");
    }

    #[test]
    fn test_normalize_keeps_inner_whitespace() {
        // Only surrounding whitespace is trimmed
        assert_eq!(normalize("olive  oil"), "olive  oil");
    }

    #[test]
    fn test_normalize_blank() {
        assert_eq!(normalize("   "), "");
        assert_eq!(normalize(""), "");
    }

    #[test]
    fn test_normalize_all_deduplicates() {
        let set = normalize_all(vec![" Tomatoes ", "tomatoes", "TOMATOES", "basil"]);
        assert_eq!(set.len(), 2);
        assert!(set.contains("tomatoes"));
        assert!(set.contains("basil"));
    }

    #[test]
    fn test_normalize_all_empty() {
        let set = normalize_all(Vec::<String>::new());
        assert!(set.is_empty());
    }

    #[test]
    fn test_parse_ingredient_list() {
        let parsed = parse_ingredient_list("pasta, eggs, bacon");
        assert_eq!(parsed, vec!["pasta", "eggs", "bacon"]);
    }

    #[test]
    fn test_parse_ingredient_list_drops_empty_tokens() {
        let parsed = parse_ingredient_list(" rice,, soy sauce , ,");
        assert_eq!(parsed, vec!["rice", "soy sauce"]);

        assert!(parse_ingredient_list("").is_empty());
        assert!(parse_ingredient_list(" , ").is_empty());
    }

    #[test]
    fn test_parse_ingredient_list_single() {
        assert_eq!(parse_ingredient_list("chicken"), vec!["chicken"]);
    }

    #[test]
    fn test_labels_equal() {
        assert!(labels_equal("Italian", "italian"));
        assert!(labels_equal("VEGAN", "vegan"));
        assert!(!labels_equal("Italian", "Mexican"));
    }

    #[test]
    fn test_labels_equal_keeps_whitespace() {
        assert!(!labels_equal(" Italian ", "italian"));
        assert!(!labels_equal("vegan\t", "vegan"));
    }
}
