//! Query types for the matching engine.
//!
//! A [`MatchQuery`] carries the raw user ingredients plus two category
//! filters. Each filter has a sentinel meaning "no restriction":
//!
//! | Filter  | Sentinel | Unrestricted variant      |
//! |---------|----------|---------------------------|
//! | Cuisine | `any`    | [`CuisineFilter::Any`]    |
//! | Dietary | `none`   | [`DietaryFilter::None`]   |
//!
//! Sentinels compare case-insensitively. A missing or blank value is the
//! same as the sentinel.

use std::fmt;

use crate::types::ingredient::{labels_equal, parse_ingredient_list};

/// Sentinel for "any cuisine"
pub const ANY_CUISINE: &str = "any";

/// Sentinel for "no dietary restriction"
pub const NO_DIETARY_RESTRICTION: &str = "none";

/// Sentinel for "any meal type"
pub const ANY_MEAL: &str = "any";

// ============================================================================
// CuisineFilter enum
// ============================================================================

/// Cuisine filter applied after the coverage test.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CuisineFilter {
    /// Admit every recipe, including those without a cuisine label
    #[default]
    Any,
    /// Admit only recipes whose cuisine equals this label (case-insensitive)
    Only(String),
}

impl CuisineFilter {
    /// Build a filter from an optional raw user value.
    ///
    /// ```
    /// use pantry_match::types::CuisineFilter;
    ///
    /// assert_eq!(CuisineFilter::parse(None), CuisineFilter::Any);
    /// assert_eq!(CuisineFilter::parse(Some("ANY")), CuisineFilter::Any);
    /// assert_eq!(
    ///     CuisineFilter::parse(Some("Italian")),
    ///     CuisineFilter::Only("Italian".to_string())
    /// );
    /// ```
    pub fn parse(raw: Option<&str>) -> Self {
        match raw.map(str::trim) {
            None | Some("") => Self::Any,
            Some(value) if labels_equal(value, ANY_CUISINE) => Self::Any,
            Some(value) => Self::Only(value.to_owned()),
        }
    }

    /// Check a recipe's cuisine label against this filter.
    pub fn admits(&self, cuisine: Option<&str>) -> bool {
        match self {
            Self::Any => true,
            Self::Only(wanted) => cuisine.is_some_and(|c| labels_equal(c, wanted)),
        }
    }
}

impl fmt::Display for CuisineFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Any => f.write_str(ANY_CUISINE),
            Self::Only(label) => f.write_str(label),
        }
    }
}

// ============================================================================
// DietaryFilter enum
// ============================================================================

/// Dietary filter applied after the coverage test.
///
/// An untagged recipe never satisfies [`DietaryFilter::Only`], even when it
/// happens to be compliant.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DietaryFilter {
    /// No restriction requested; untagged recipes pass
    #[default]
    None,
    /// Admit only recipes tagged with this label (case-insensitive)
    Only(String),
}

impl DietaryFilter {
    /// Build a filter from an optional raw user value.
    ///
    /// ```
    /// use pantry_match::types::DietaryFilter;
    ///
    /// assert_eq!(DietaryFilter::parse(Some("None")), DietaryFilter::None);
    /// assert_eq!(
    ///     DietaryFilter::parse(Some(" vegan ")),
    ///     DietaryFilter::Only("vegan".to_string())
    /// );
    /// ```
    pub fn parse(raw: Option<&str>) -> Self {
        match raw.map(str::trim) {
            None | Some("") => Self::None,
            Some(value) if labels_equal(value, NO_DIETARY_RESTRICTION) => Self::None,
            Some(value) => Self::Only(value.to_owned()),
        }
    }

    /// Check a recipe's dietary tag against this filter.
    pub fn admits(&self, dietary: Option<&str>) -> bool {
        match self {
            Self::None => true,
            Self::Only(wanted) => dietary.is_some_and(|d| labels_equal(d, wanted)),
        }
    }
}

impl fmt::Display for DietaryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => f.write_str(NO_DIETARY_RESTRICTION),
            Self::Only(label) => f.write_str(label),
        }
    }
}

// ============================================================================
// MatchQuery struct
// ============================================================================

/// Per-invocation input to the matching engine.
///
/// ## Example
///
/// ```
/// use pantry_match::types::{MatchQuery, CuisineFilter};
///
/// let query = MatchQuery::from_line("pasta, eggs, bacon")
///     .with_cuisine(Some("Italian"))
///     .with_dietary(Some("none"));
///
/// assert_eq!(query.user_ingredients.len(), 3);
/// assert_eq!(query.cuisine, CuisineFilter::Only("Italian".to_string()));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MatchQuery {
    /// Raw user ingredients, normalized by the engine
    pub user_ingredients: Vec<String>,

    /// Cuisine filter
    pub cuisine: CuisineFilter,

    /// Dietary filter
    pub dietary: DietaryFilter,

    /// Requested meal type. Passed through to the generative provider;
    /// catalog matching does not filter on it.
    pub meal_type: Option<String>,
}

impl MatchQuery {
    /// Create an unfiltered query from already-split ingredients.
    pub fn new<I, S>(user_ingredients: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            user_ingredients: user_ingredients.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Create an unfiltered query from a comma-separated line.
    pub fn from_line(line: &str) -> Self {
        Self::new(parse_ingredient_list(line))
    }

    /// Set the cuisine filter from a raw user value
    pub fn with_cuisine(mut self, raw: Option<&str>) -> Self {
        self.cuisine = CuisineFilter::parse(raw);
        self
    }

    /// Set the dietary filter from a raw user value
    pub fn with_dietary(mut self, raw: Option<&str>) -> Self {
        self.dietary = DietaryFilter::parse(raw);
        self
    }

    /// Set the meal type; blank or `"any"` clears it
    pub fn with_meal_type(mut self, raw: Option<&str>) -> Self {
        self.meal_type = raw
            .map(str::trim)
            .filter(|m| !m.is_empty() && !labels_equal(m, ANY_MEAL))
            .map(str::to_owned);
        self
    }

    /// Meal type for display and prompts, `"any"` when unset.
    pub fn meal_type_label(&self) -> &str {
        self.meal_type.as_deref().unwrap_or(ANY_MEAL)
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
