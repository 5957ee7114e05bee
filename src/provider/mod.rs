//! Generative recommendation path.
//!
//! The deterministic catalog matcher never depends on this module. It sits
//! behind [`RecommendationProvider`] so callers can swap the network-backed
//! [`HttpRecommendationProvider`] for [`DisabledProvider`] or a test double.
//!
//! ## Example
//!
//! ```
//! use pantry_match::provider::{
//!     DisabledProvider, ProviderError, RecommendationProvider, RecommendationRequest,
//! };
//!
//! let request = RecommendationRequest::new("eggs, bread", "none", "any", "breakfast");
//! let result = DisabledProvider.generate_recommendations(&request);
//! assert!(matches!(result, Err(ProviderError::Disabled)));
//! ```

pub mod config;
pub mod http;

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::MatchQuery;

pub use config::ProviderConfig;
pub use http::HttpRecommendationProvider;

// ============================================================================
// Errors
// ============================================================================

/// Failures of the generative path.
///
/// Callers report these and carry on; they never abort a session.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProviderError {
    #[error("generative recommendations are disabled")]
    Disabled,

    #[error("no API key configured (set {0})")]
    MissingApiKey(&'static str),

    #[error("HTTP error: {0}")]
    Http(String),

    #[error("request timed out after {0} seconds")]
    Timeout(u64),

    #[error("invalid response: {0}")]
    InvalidResponse(String),

    #[error("model returned an empty response")]
    EmptyResponse,
}

impl ProviderError {
    /// A user-facing suggestion for fixing the failure, if there is one.
    ///
    /// Only a missing key has a fix the user can apply; a provider that was
    /// switched off on purpose gets no hint.
    pub fn hint(&self) -> Option<String> {
        match self {
            Self::MissingApiKey(var) => {
                Some(format!("Set {var} to enable generated recommendations."))
            }
            _ => None,
        }
    }
}

// ============================================================================
// Request / Response
// ============================================================================

/// Inputs to a generative recommendation call.
///
/// All fields are free text; `"none"` and `"any"` are passed through as-is
/// so the model sees the same defaults the user did.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecommendationRequest {
    /// Available ingredients, as typed
    pub ingredients: String,

    /// Dietary restrictions (vegetarian, vegan, gluten-free, ...)
    pub dietary_restrictions: String,

    /// Preferred cuisine (Italian, Asian, Mexican, ...)
    pub cuisine_preference: String,

    /// Meal type (breakfast, lunch, dinner, snack)
    pub meal_type: String,
}

impl RecommendationRequest {
    /// Create a request from raw text fields
    pub fn new(
        ingredients: impl Into<String>,
        dietary_restrictions: impl Into<String>,
        cuisine_preference: impl Into<String>,
        meal_type: impl Into<String>,
    ) -> Self {
        Self {
            ingredients: ingredients.into(),
            dietary_restrictions: dietary_restrictions.into(),
            cuisine_preference: cuisine_preference.into(),
            meal_type: meal_type.into(),
        }
    }

    /// Build a request from the same query used for catalog matching.
    pub fn from_query(query: &MatchQuery) -> Self {
        Self::new(
            query.user_ingredients.join(", "),
            query.dietary.to_string(),
            query.cuisine.to_string(),
            query.meal_type_label(),
        )
    }
}

/// Output of a generative recommendation call.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Recommendation {
    /// 3-5 recommended dishes with brief recipes
    pub recommendations: String,

    /// Common ingredients that could enhance the dishes
    pub missing_ingredients: String,

    /// General cooking tips for the recommended dishes
    pub cooking_tips: String,
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "RECOMMENDED DISHES:")?;
        writeln!(f, "{}", "-".repeat(50))?;
        writeln!(f, "{}", self.recommendations)?;
        writeln!(f)?;
        writeln!(f, "INGREDIENTS YOU MIGHT WANT TO ADD:")?;
        writeln!(f, "{}", "-".repeat(50))?;
        writeln!(f, "{}", self.missing_ingredients)?;
        writeln!(f)?;
        writeln!(f, "COOKING TIPS:")?;
        writeln!(f, "{}", "-".repeat(50))?;
        write!(f, "{}", self.cooking_tips)
    }
}

// ============================================================================
// Capability trait
// ============================================================================

/// Anything that can turn a [`RecommendationRequest`] into dish ideas.
pub trait RecommendationProvider: Send + Sync {
    /// Generate recommendations, missing ingredients and cooking tips.
    fn generate_recommendations(
        &self,
        request: &RecommendationRequest,
    ) -> Result<Recommendation, ProviderError>;
}

/// Provider used when the generative path is switched off.
#[derive(Debug, Clone, Copy, Default)]
pub struct DisabledProvider;

impl RecommendationProvider for DisabledProvider {
    fn generate_recommendations(
        &self,
        _request: &RecommendationRequest,
    ) -> Result<Recommendation, ProviderError> {
        Err(ProviderError::Disabled)
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_from_query_uses_sentinels() {
        let query = MatchQuery::from_line("tofu, rice");
        let request = RecommendationRequest::from_query(&query);

        assert_eq!(request.ingredients, "tofu, rice");
        assert_eq!(request.dietary_restrictions, "none");
        assert_eq!(request.cuisine_preference, "any");
        assert_eq!(request.meal_type, "any");
    }

    #[test]
    fn test_request_from_query_with_filters() {
        let query = MatchQuery::from_line("tofu, soy sauce")
            .with_cuisine(Some("Asian"))
            .with_dietary(Some("vegan"))
            .with_meal_type(Some("dinner"));
        let request = RecommendationRequest::from_query(&query);

        assert_eq!(request.cuisine_preference, "Asian");
        assert_eq!(request.dietary_restrictions, "vegan");
        assert_eq!(request.meal_type, "dinner");
    }

    #[test]
    fn test_disabled_provider() {
        let request = RecommendationRequest::new("eggs", "none", "any", "any");
        assert_eq!(
            DisabledProvider.generate_recommendations(&request),
            Err(ProviderError::Disabled)
        );
    }

    #[test]
    fn test_recommendation_display_sections() {
        let rec = Recommendation {
            recommendations: "Omelette".to_string(),
            missing_ingredients: "chives".to_string(),
            cooking_tips: "Low heat".to_string(),
        };
        let text = rec.to_string();

        assert!(text.starts_with("RECOMMENDED DISHES:"));
        assert!(text.contains("INGREDIENTS YOU MIGHT WANT TO ADD:\n"));
        assert!(text.ends_with("Low heat"));
    }

    #[test]
    fn test_error_hint_only_for_missing_key() {
        assert_eq!(
            ProviderError::MissingApiKey("GROQ_API_KEY").hint().as_deref(),
            Some("Set GROQ_API_KEY to enable generated recommendations.")
        );
        assert!(ProviderError::Disabled.hint().is_none());
        assert!(ProviderError::Timeout(60).hint().is_none());
        assert!(ProviderError::EmptyResponse.hint().is_none());
    }

    #[test]
    fn test_provider_is_object_safe() {
        let providers: Vec<Box<dyn RecommendationProvider>> = vec![Box::new(DisabledProvider)];
        let request = RecommendationRequest::new("eggs", "none", "any", "any");
        assert!(providers[0].generate_recommendations(&request).is_err());
    }
}
