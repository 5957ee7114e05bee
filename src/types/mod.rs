//! Core data types for Pantry Match
//!
//! ## Types
//!
//! - [`Recipe`]: An immutable catalog record
//! - [`MatchQuery`]: Raw user ingredients plus category filters
//! - [`CuisineFilter`]: `any` or a specific cuisine label
//! - [`DietaryFilter`]: `none` or a specific dietary tag
//!
//! ## Normalization
//!
//! Ingredient comparison is exact equality after [`ingredient::normalize`]
//! (trim, then lowercase) on both sides.

mod recipe;
mod query;
pub mod ingredient;

// Re-export all types at module level
pub use recipe::Recipe;
pub use query::{
    CuisineFilter, DietaryFilter, MatchQuery, ANY_CUISINE, ANY_MEAL, NO_DIETARY_RESTRICTION,
};
pub use ingredient::IngredientSet;
