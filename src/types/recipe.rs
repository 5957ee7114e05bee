//! Recipe record as stored in the catalog.
//!
//! ## Data File Layout
//!
//! Recipes deserialize from `[[recipe]]` tables in the catalog TOML file.
//! Only `name` and `ingredients` are required.

use serde::{Deserialize, Serialize};

use crate::types::ingredient::{normalize_all, IngredientSet};

/// An immutable recipe record.
///
/// ## Optional Labels
///
/// - `cuisine`: absent means "unclassified"; fails any specific cuisine filter
/// - `meal_type`: informational only, never filtered on
/// - `dietary`: absent means "no guaranteed dietary property"; fails any
///   specific dietary filter but passes when no restriction is requested
///
/// ## Example
///
/// ```
/// use pantry_match::types::Recipe;
///
/// let recipe = Recipe::new("Pasta Carbonara", ["pasta", "eggs", "bacon"])
///     .with_cuisine("Italian")
///     .with_meal_type("dinner");
///
/// assert_eq!(recipe.cuisine.as_deref(), Some("Italian"));
/// assert!(recipe.dietary.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Recipe {
    /// Display name, assumed unique within a catalog
    pub name: String,

    /// Ingredients as written in the catalog (not yet normalized)
    pub ingredients: Vec<String>,

    /// Cuisine label, e.g. "Italian"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cuisine: Option<String>,

    /// Meal label: breakfast, lunch, dinner or snack
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meal_type: Option<String>,

    /// Dietary tag, e.g. "vegetarian" or "vegan"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dietary: Option<String>,
}

impl Recipe {
    /// Create a recipe with no cuisine, meal type or dietary tag.
    pub fn new<I, S>(name: impl Into<String>, ingredients: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            ingredients: ingredients.into_iter().map(Into::into).collect(),
            cuisine: None,
            meal_type: None,
            dietary: None,
        }
    }

    /// Set the cuisine label
    pub fn with_cuisine(mut self, cuisine: impl Into<String>) -> Self {
        self.cuisine = Some(cuisine.into());
        self
    }

    /// Set the meal type label
    pub fn with_meal_type(mut self, meal_type: impl Into<String>) -> Self {
        self.meal_type = Some(meal_type.into());
        self
    }

    /// Set the dietary tag
    pub fn with_dietary(mut self, dietary: impl Into<String>) -> Self {
        self.dietary = Some(dietary.into());
        self
    }

    /// The recipe's ingredients, normalized and deduplicated.
    pub fn normalized_ingredients(&self) -> IngredientSet {
        normalize_all(&self.ingredients)
    }

    /// Cuisine label for display, `"unclassified"` when absent.
    pub fn cuisine_label(&self) -> &str {
        self.cuisine.as_deref().unwrap_or("unclassified")
    }

    /// Meal type label for display, `"any"` when absent.
    pub fn meal_type_label(&self) -> &str {
        self.meal_type.as_deref().unwrap_or("any")
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
