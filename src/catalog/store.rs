//! Read-only recipe store.
//!
//! ## Fingerprint
//!
//! Every catalog has a SHA-256 fingerprint over its content in order. Two
//! catalogs with identical recipes produce identical fingerprints, so the
//! startup log line identifies exactly which data the engine is running on.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use serde::Deserialize;
use sha2::{Digest, Sha256};
use tracing::{debug, info, warn};

use crate::catalog::CatalogError;
use crate::types::ingredient::normalize;
use crate::types::Recipe;

/// Built-in catalog data, embedded at compile time
const BUILTIN_CATALOG: &str = include_str!("../../data/recipes.toml");

/// On-disk shape of a catalog file
#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default, rename = "recipe")]
    recipes: Vec<Recipe>,
}

/// Immutable, ordered collection of recipes.
///
/// Callers only ever get a shared slice, so catalog state cannot be
/// corrupted through the returned value.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RecipeCatalog {
    recipes: Vec<Recipe>,
}

impl RecipeCatalog {
    /// Build a catalog from recipes already in memory.
    ///
    /// Order is preserved; it is the order matches are reported in.
    pub fn new(recipes: Vec<Recipe>) -> Self {
        Self { recipes }
    }

    /// The catalog shipped with the crate (`data/recipes.toml`).
    ///
    /// # Errors
    ///
    /// Only if the embedded file is malformed, which the test suite rules out.
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_toml_str(BUILTIN_CATALOG)
    }

    /// Parse a catalog from TOML text.
    ///
    /// # Errors
    ///
    /// * [`CatalogError::Parse`] - text is not a valid catalog document
    /// * [`CatalogError::BlankName`] - a recipe has an empty name
    pub fn from_toml_str(text: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile = toml::from_str(text)?;

        if let Some(index) = file.recipes.iter().position(|r| r.name.trim().is_empty()) {
            return Err(CatalogError::BlankName { index });
        }

        let catalog = Self::new(file.recipes);
        catalog.audit();
        Ok(catalog)
    }

    /// Read and parse a catalog file.
    ///
    /// # Errors
    ///
    /// * [`CatalogError::Io`] - file could not be read
    /// * anything [`RecipeCatalog::from_toml_str`] returns
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let catalog = Self::from_toml_str(&text)?;
        info!(
            path = %path.display(),
            recipes = catalog.len(),
            fingerprint = %catalog.fingerprint_hex(),
            "loaded recipe catalog"
        );
        Ok(catalog)
    }

    // ========================================================================
    // Access
    // ========================================================================

    /// All recipes in catalog order.
    #[inline]
    pub fn all(&self) -> &[Recipe] {
        &self.recipes
    }

    /// Number of recipes
    #[inline]
    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    /// Check if the catalog has no recipes
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    // ========================================================================
    // Fingerprint
    // ========================================================================

    /// SHA-256 digest of the catalog content.
    ///
    /// Each field is length-prefixed and optional fields carry a presence
    /// byte, so shifting text between fields changes the digest.
    pub fn fingerprint(&self) -> [u8; 32] {
        let mut hasher = Sha256::new();
        hasher.update((self.recipes.len() as u64).to_le_bytes());

        for recipe in &self.recipes {
            hash_str(&mut hasher, &recipe.name);
            hasher.update((recipe.ingredients.len() as u64).to_le_bytes());
            for ingredient in &recipe.ingredients {
                hash_str(&mut hasher, ingredient);
            }
            hash_opt(&mut hasher, recipe.cuisine.as_deref());
            hash_opt(&mut hasher, recipe.meal_type.as_deref());
            hash_opt(&mut hasher, recipe.dietary.as_deref());
        }

        let result = hasher.finalize();
        let mut hash = [0u8; 32];
        hash.copy_from_slice(&result);
        hash
    }

    /// Get the fingerprint as a hex string
    pub fn fingerprint_hex(&self) -> String {
        hex::encode(self.fingerprint())
    }

    /// Log data problems that are tolerated but suspicious.
    fn audit(&self) {
        let mut seen = HashSet::with_capacity(self.recipes.len());

        for recipe in &self.recipes {
            if recipe.ingredients.is_empty() {
                // Matches every query with no restricting filter
                warn!(recipe = %recipe.name, "recipe has no ingredients");
            }
            if !seen.insert(normalize(&recipe.name)) {
                warn!(recipe = %recipe.name, "duplicate recipe name in catalog");
            }
        }

        debug!(recipes = self.recipes.len(), "catalog audit complete");
    }
}

fn hash_str(hasher: &mut Sha256, value: &str) {
    hasher.update((value.len() as u64).to_le_bytes());
    hasher.update(value.as_bytes());
}

fn hash_opt(hasher: &mut Sha256, value: Option<&str>) {
    match value {
        Some(v) => {
            hasher.update([1u8]);
            hash_str(hasher, v);
        }
        None => hasher.update([0u8]),
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn carbonara() -> Recipe {
        Recipe::new(
            "Pasta Carbonara",
            ["pasta", "eggs", "bacon", "parmesan cheese", "black pepper"],
        )
        .with_cuisine("Italian")
        .with_meal_type("dinner")
    }

    #[test]
    fn test_builtin_catalog() {
        let catalog = RecipeCatalog::builtin().expect("Built-in catalog must parse");

        let names: Vec<&str> = catalog.all().iter().map(|r| r.name.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "Pasta Carbonara",
                "Vegetable Stir-fry",
                "Greek Salad",
                "Scrambled Eggs with Toast",
                "Chicken Tacos",
            ]
        );
        assert_eq!(catalog.all()[0], carbonara());
    }

    #[test]
    fn test_builtin_dietary_tags() {
        let catalog = RecipeCatalog::builtin().expect("Built-in catalog must parse");

        let tagged: Vec<&str> = catalog
            .all()
            .iter()
            .filter(|r| r.dietary.as_deref() == Some("vegetarian"))
            .map(|r| r.name.as_str())
            .collect();
        assert_eq!(
            tagged,
            vec!["Vegetable Stir-fry", "Greek Salad", "Scrambled Eggs with Toast"]
        );
        let tacos = catalog.all().iter().find(|r| r.name == "Chicken Tacos");
        assert!(tacos.is_some_and(|r| r.dietary.is_none()));
    }

    #[test]
    fn test_all_is_stable() {
        let catalog = RecipeCatalog::builtin().expect("Built-in catalog must parse");
        assert_eq!(catalog.all(), catalog.all());
    }

    #[test]
    fn test_from_toml_str_empty_document() {
        let catalog = RecipeCatalog::from_toml_str("").expect("Empty document is a valid catalog");
        assert!(catalog.is_empty());
        assert_eq!(catalog.len(), 0);
    }

    #[test]
    fn test_from_toml_str_rejects_blank_name() {
        let text = r#"
            [[recipe]]
            name = "Toast"
            ingredients = ["bread"]

            [[recipe]]
            name = "  "
            ingredients = ["water"]
        "#;

        match RecipeCatalog::from_toml_str(text) {
            Err(CatalogError::BlankName { index }) => assert_eq!(index, 1),
            other => panic!("Expected BlankName error, got {:?}", other),
        }
    }

    #[test]
    fn test_from_toml_str_rejects_malformed() {
        let text = r#"
            [[recipe]]
            name = "Toast"
            ingredients = "bread"
        "#;

        assert!(matches!(
            RecipeCatalog::from_toml_str(text),
            Err(CatalogError::Parse(_))
        ));
    }

    #[test]
    fn test_from_toml_str_accepts_empty_ingredients() {
        let text = r#"
            [[recipe]]
            name = "Air"
            ingredients = []
        "#;

        let catalog = RecipeCatalog::from_toml_str(text).expect("Failed to parse catalog");
        assert_eq!(catalog.len(), 1);
        assert!(catalog.all()[0].ingredients.is_empty());
    }

    #[test]
    fn test_fingerprint_deterministic() {
        let a = RecipeCatalog::new(vec![carbonara()]);
        let b = RecipeCatalog::new(vec![carbonara()]);

        assert_eq!(a.fingerprint(), b.fingerprint());
        assert_eq!(a.fingerprint_hex().len(), 64);
    }

    #[test]
    fn test_fingerprint_content_sensitive() {
        let base = RecipeCatalog::new(vec![carbonara()]);
        let tagged = RecipeCatalog::new(vec![carbonara().with_dietary("vegetarian")]);
        let reordered = RecipeCatalog::new(vec![
            Recipe::new("Toast", ["bread"]),
            carbonara(),
        ]);
        let original_order = RecipeCatalog::new(vec![
            carbonara(),
            Recipe::new("Toast", ["bread"]),
        ]);

        assert_ne!(base.fingerprint(), tagged.fingerprint());
        assert_ne!(reordered.fingerprint(), original_order.fingerprint());
    }

    #[test]
    fn test_fingerprint_field_boundaries() {
        // Same concatenated text, different field split
        let a = RecipeCatalog::new(vec![Recipe::new("ab", ["c"])]);
        let b = RecipeCatalog::new(vec![Recipe::new("a", ["bc"])]);
        assert_ne!(a.fingerprint(), b.fingerprint());
    }
}
