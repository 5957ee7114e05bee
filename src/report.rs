//! Console rendering of catalog matches.
//!
//! Sets are rendered in their sorted order, so the same results always
//! print the same text.

use crate::engine::MatchResult;

/// How many catalog matches the interactive session shows
pub const DEFAULT_DISPLAY_LIMIT: usize = 3;

/// Render one match as a bullet block.
///
/// ```text
/// • Pasta Carbonara (Italian - dinner)
///   You have: bacon, eggs, pasta
///   Missing: black pepper, parmesan cheese
/// ```
///
/// The `Missing:` line is omitted when nothing is missing.
pub fn render_match(result: &MatchResult<'_>) -> String {
    let recipe = result.recipe;
    let mut out = format!(
        "• {} ({} - {})\n  You have: {}",
        recipe.name,
        recipe.cuisine_label(),
        recipe.meal_type_label(),
        join(result.matched_ingredients.iter()),
    );

    if !result.missing_ingredients.is_empty() {
        out.push_str(&format!("\n  Missing: {}", join(result.missing_ingredients.iter())));
    }

    out
}

/// Render matches under a section header, in the order given.
///
/// Callers pick how many to show (see
/// [`MatchingEngine::top_matches`](crate::engine::MatchingEngine::top_matches)).
/// Returns `None` when there is nothing to show.
pub fn render_matches(results: &[MatchResult<'_>]) -> Option<String> {
    if results.is_empty() {
        return None;
    }

    let mut out = format!("FROM RECIPE DATABASE:\n{}", "-".repeat(50));
    for result in results {
        out.push_str("\n\n");
        out.push_str(&render_match(result));
    }
    Some(out)
}

fn join<'s>(items: impl Iterator<Item = &'s String>) -> String {
    items.map(String::as_str).collect::<Vec<_>>().join(", ")
}

// ============================================================================
// Unit Tests
// ============================================================================
