//! Matching engine module for Pantry Match.
//!
//! ## Design Principles
//!
//! 1. **Determinism**: Same query and catalog always produce the same results
//! 2. **Totality**: No input makes matching fail; it only yields fewer results
//! 3. **Catalog Order**: Results are never re-ranked
//! 4. **Stateless**: Nothing is cached between calls
//!
//! ## Matching Rules
//!
//! - A recipe **qualifies** when the user has at least 60% of its
//!   normalized ingredients
//! - A specific **cuisine** filter needs an equal (case-insensitive) label
//! - A specific **dietary** filter needs an equal (case-insensitive) tag;
//!   untagged recipes never pass it
//!
//! ## Example
//!
//! ```
//! use pantry_match::catalog::RecipeCatalog;
//! use pantry_match::engine::MatchingEngine;
//! use pantry_match::types::MatchQuery;
//!
//! let catalog = RecipeCatalog::builtin().unwrap();
//! let engine = MatchingEngine::new(&catalog);
//!
//! let query = MatchQuery::from_line("pasta, eggs, bacon")
//!     .with_cuisine(Some("any"))
//!     .with_dietary(Some("none"));
//! let results = engine.find_matches(&query);
//!
//! assert_eq!(results.len(), 1);
//! assert_eq!(results[0].recipe.name, "Pasta Carbonara");
//! ```

pub mod matcher;

pub use matcher::{find_matches, MatchResult, MatchingEngine, COVERAGE_THRESHOLD};
