//! Recipe catalog for the Pantry Match engine.
//!
//! ## Architecture
//!
//! The catalog is seed data, read once at startup and never mutated:
//!
//! - **Built-in**: `data/recipes.toml`, embedded at compile time
//! - **Custom**: any TOML file with the same layout, loaded from disk
//!
//! Growing the catalog is a data file change, not a code change and not a
//! runtime operation.
//!
//! ## File Layout
//!
//! ```toml
//! [[recipe]]
//! name = "Pasta Carbonara"
//! ingredients = ["pasta", "eggs", "bacon", "parmesan cheese", "black pepper"]
//! cuisine = "Italian"
//! meal_type = "dinner"
//! # dietary = "vegetarian"   (optional)
//! ```
//!
//! ## Example
//!
//! ```
//! use pantry_match::catalog::RecipeCatalog;
//!
//! let catalog = RecipeCatalog::builtin().unwrap();
//! assert_eq!(catalog.len(), 5);
//! assert_eq!(catalog.all()[0].name, "Pasta Carbonara");
//! ```

pub mod error;
pub mod store;

pub use error::CatalogError;
pub use store::RecipeCatalog;
