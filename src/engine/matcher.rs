//! Ingredient-coverage matcher.
//!
//! ## Algorithm
//!
//! For each recipe, in catalog order:
//!
//! 1. `recipe_set = normalize(recipe.ingredients)`
//! 2. `overlap = user_set ∩ recipe_set`
//! 3. Coverage: `|overlap| >= 0.6 * |recipe_set|`, else skip
//! 4. Cuisine filter, then dietary filter
//! 5. Emit `matched = overlap`, `missing = recipe_set - user_set`
//!
//! The three tests are plain AND conditions. Coverage runs first only
//! because it is the one most likely to reject.

use tracing::{debug, trace};

use crate::catalog::RecipeCatalog;
use crate::types::ingredient::{normalize_all, IngredientSet};
use crate::types::{MatchQuery, Recipe};

/// Minimum fraction of a recipe's ingredients the user must have.
pub const COVERAGE_THRESHOLD: f64 = 0.6;

// ============================================================================
// MatchResult
// ============================================================================

/// A recipe that passed coverage and both filters.
///
/// ## Invariant
///
/// `matched_ingredients` and `missing_ingredients` are disjoint and their
/// union is the recipe's normalized ingredient set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchResult<'a> {
    /// The matched catalog recipe
    pub recipe: &'a Recipe,

    /// Normalized ingredients the user has
    pub matched_ingredients: IngredientSet,

    /// Normalized recipe ingredients the user lacks
    pub missing_ingredients: IngredientSet,
}

impl MatchResult<'_> {
    /// Fraction of the recipe covered, in `[0.0, 1.0]`.
    ///
    /// Display only; results are never ordered by it. A recipe with no
    /// ingredients reports full coverage.
    pub fn coverage(&self) -> f64 {
        let total = self.matched_ingredients.len() + self.missing_ingredients.len();
        if total == 0 {
            return 1.0;
        }
        self.matched_ingredients.len() as f64 / total as f64
    }

    /// Check if the user has every ingredient
    pub fn is_complete(&self) -> bool {
        self.missing_ingredients.is_empty()
    }
}

// ============================================================================
// Matching
// ============================================================================

/// Check the coverage rule for one recipe.
///
/// Integer counts against a real-valued bound: 5 ingredients need 3
/// (`3 >= 3.0`), 6 need 4 (`4 >= 3.6`).
#[inline]
pub fn meets_coverage(overlap: usize, recipe_size: usize) -> bool {
    overlap as f64 >= COVERAGE_THRESHOLD * recipe_size as f64
}

/// Check the cuisine and dietary filters for one recipe.
#[inline]
pub fn passes_filters(query: &MatchQuery, recipe: &Recipe) -> bool {
    query.cuisine.admits(recipe.cuisine.as_deref())
        && query.dietary.admits(recipe.dietary.as_deref())
}

/// Match a query against a recipe list.
///
/// Never fails: empty or malformed input simply produces fewer results.
/// Results keep catalog order; take a prefix for a "top N" view.
///
/// # Example
///
/// ```
/// use pantry_match::engine::find_matches;
/// use pantry_match::types::{MatchQuery, Recipe};
///
/// let recipes = vec![Recipe::new(
///     "Pasta Carbonara",
///     ["pasta", "eggs", "bacon", "parmesan cheese", "black pepper"],
/// )];
///
/// let hits = find_matches(&MatchQuery::from_line("pasta, eggs, bacon"), &recipes);
/// assert_eq!(hits.len(), 1);
/// assert!(hits[0].missing_ingredients.contains("black pepper"));
///
/// let misses = find_matches(&MatchQuery::from_line("pasta, eggs"), &recipes);
/// assert!(misses.is_empty());
/// ```
pub fn find_matches<'a>(query: &MatchQuery, recipes: &'a [Recipe]) -> Vec<MatchResult<'a>> {
    let user_set = normalize_all(&query.user_ingredients);
    let mut results = Vec::new();

    for recipe in recipes {
        let recipe_set = recipe.normalized_ingredients();
        let overlap: IngredientSet = recipe_set.intersection(&user_set).cloned().collect();

        if !meets_coverage(overlap.len(), recipe_set.len()) {
            trace!(
                recipe = %recipe.name,
                overlap = overlap.len(),
                required = recipe_set.len(),
                "below coverage threshold"
            );
            continue;
        }

        if !passes_filters(query, recipe) {
            trace!(recipe = %recipe.name, "rejected by category filter");
            continue;
        }

        let missing: IngredientSet = recipe_set.difference(&user_set).cloned().collect();
        results.push(MatchResult {
            recipe,
            matched_ingredients: overlap,
            missing_ingredients: missing,
        });
    }

    debug!(
        user_ingredients = user_set.len(),
        cuisine = %query.cuisine,
        dietary = %query.dietary,
        scanned = recipes.len(),
        matched = results.len(),
        "catalog match complete"
    );

    results
}

// ============================================================================
// MatchingEngine
// ============================================================================

/// Matching engine bound to a catalog.
///
/// Holds only a shared borrow, so one catalog can serve any number of
/// engines and threads at once.
#[derive(Debug, Clone, Copy)]
pub struct MatchingEngine<'a> {
    catalog: &'a RecipeCatalog,
}

impl<'a> MatchingEngine<'a> {
    /// Create an engine over a catalog
    pub fn new(catalog: &'a RecipeCatalog) -> Self {
        Self { catalog }
    }

    /// Match a query against the whole catalog.
    pub fn find_matches(&self, query: &MatchQuery) -> Vec<MatchResult<'a>> {
        find_matches(query, self.catalog.all())
    }

    /// Match and keep at most `limit` results, in catalog order.
    pub fn top_matches(&self, query: &MatchQuery, limit: usize) -> Vec<MatchResult<'a>> {
        let mut results = self.find_matches(query);
        results.truncate(limit);
        results
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
