//! # Pantry Match
//!
//! Dish recommendations from the ingredients you already have.
//!
//! ## Architecture
//!
//! - **Types**: Core data structures (Recipe, MatchQuery, category filters)
//! - **Catalog**: Read-only recipe collection loaded from TOML
//! - **Engine**: Deterministic ingredient-coverage matcher
//! - **Provider**: Optional generative recommendations behind a trait
//! - **Report**: Console rendering of matches
//!
//! ## Design Principles
//!
//! 1. **Determinism**: Same catalog and query always give the same matches
//! 2. **Exact Matching**: Ingredients compare by normalized string equality
//! 3. **Immutable Catalog**: Loaded once, never mutated
//! 4. **Independent Paths**: The matcher never touches the network

// ============================================================================
// Module declarations
// ============================================================================

/// Core data types: Recipe, MatchQuery, filters, normalization
pub mod types;

/// Recipe catalog: built-in and file-backed
pub mod catalog;

/// Matching engine: coverage test plus category filters
pub mod engine;

/// Generative recommendation capability
pub mod provider;

/// Console rendering
pub mod report;

// ============================================================================
// Re-exports for convenience
// ============================================================================

pub use types::{CuisineFilter, DietaryFilter, MatchQuery, Recipe};
pub use catalog::{CatalogError, RecipeCatalog};
pub use engine::{find_matches, MatchResult, MatchingEngine};
pub use provider::{
    DisabledProvider, HttpRecommendationProvider, ProviderConfig, ProviderError,
    Recommendation, RecommendationProvider, RecommendationRequest,
};
