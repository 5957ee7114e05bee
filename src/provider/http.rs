//! OpenAI-compatible chat completions backend.
//!
//! The model is asked for a single JSON object:
//!
//! ```json
//! {"recommendations": "...", "missing_ingredients": "...", "cooking_tips": "..."}
//! ```
//!
//! Models are inconsistent about the value shapes, so each field may also
//! arrive as a list of strings; lists are joined one item per line.

use std::time::Duration;

use serde::Deserialize;
use serde_json::json;
use tracing::{debug, warn};

use super::config::API_KEY_ENV;
use super::{
    ProviderConfig, ProviderError, Recommendation, RecommendationProvider, RecommendationRequest,
};

const SYSTEM_PROMPT: &str = "You are a helpful cooking assistant. Think step by step about \
which dishes can be made mostly from the available ingredients, respecting any dietary \
restrictions, cuisine preference and meal type. Respond with a single JSON object and \
nothing else.";

/// Network-backed provider.
pub struct HttpRecommendationProvider {
    config: ProviderConfig,
    client: reqwest::blocking::Client,
}

impl HttpRecommendationProvider {
    /// Create a provider with its own HTTP client.
    ///
    /// # Errors
    ///
    /// [`ProviderError::Http`] if the client cannot be built.
    pub fn new(config: ProviderConfig) -> Result<Self, ProviderError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| ProviderError::Http(format!("failed to create HTTP client: {e}")))?;

        Ok(Self { config, client })
    }

    fn map_send_error(&self, e: reqwest::Error) -> ProviderError {
        if e.is_timeout() {
            ProviderError::Timeout(self.config.timeout_secs)
        } else {
            ProviderError::Http(format!("request failed: {e}"))
        }
    }
}

impl RecommendationProvider for HttpRecommendationProvider {
    fn generate_recommendations(
        &self,
        request: &RecommendationRequest,
    ) -> Result<Recommendation, ProviderError> {
        let api_key = self
            .config
            .api_key
            .as_deref()
            .ok_or(ProviderError::MissingApiKey(API_KEY_ENV))?;

        let body = json!({
            "model": self.config.model,
            "temperature": self.config.temperature,
            "max_tokens": self.config.max_tokens,
            "messages": [
                {"role": "system", "content": SYSTEM_PROMPT},
                {"role": "user", "content": build_prompt(request)},
            ],
            "response_format": {"type": "json_object"},
        });

        debug!(model = %self.config.model, "requesting generative recommendations");

        let response = self
            .client
            .post(self.config.completions_url())
            .bearer_auth(api_key)
            .json(&body)
            .send()
            .map_err(|e| self.map_send_error(e))?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().unwrap_or_default();
            warn!(%status, "chat completion request rejected");
            return Err(ProviderError::Http(format!("HTTP {status}: {}", detail.trim())));
        }

        let completion: ChatCompletion = response
            .json()
            .map_err(|e| ProviderError::InvalidResponse(format!("not a chat completion: {e}")))?;

        let content = completion
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .ok_or(ProviderError::EmptyResponse)?;

        parse_recommendation(&content)
    }
}

// ============================================================================
// Prompt and response handling
// ============================================================================

/// Render the user message for a request.
pub fn build_prompt(request: &RecommendationRequest) -> String {
    format!(
        "Available ingredients: {}\n\
         Dietary restrictions: {}\n\
         Cuisine preference: {}\n\
         Meal type: {}\n\n\
         Return JSON with these string fields:\n\
         - \"recommendations\": 3-5 recommended dishes with brief recipes\n\
         - \"missing_ingredients\": common ingredients that could enhance the dishes\n\
         - \"cooking_tips\": general cooking tips for the recommended dishes",
        request.ingredients,
        request.dietary_restrictions,
        request.cuisine_preference,
        request.meal_type,
    )
}

/// Parse the model's message content into a [`Recommendation`].
///
/// Tolerates a surrounding Markdown code fence.
pub fn parse_recommendation(content: &str) -> Result<Recommendation, ProviderError> {
    let trimmed = strip_code_fence(content.trim());
    if trimmed.is_empty() {
        return Err(ProviderError::EmptyResponse);
    }

    let raw: RawRecommendation = serde_json::from_str(trimmed).map_err(|e| {
        ProviderError::InvalidResponse(format!("model output is not valid JSON: {e}"))
    })?;

    Ok(Recommendation {
        recommendations: raw.recommendations.into_text(),
        missing_ingredients: raw.missing_ingredients.into_text(),
        cooking_tips: raw.cooking_tips.into_text(),
    })
}

fn strip_code_fence(text: &str) -> &str {
    let Some(rest) = text.strip_prefix("```") else {
        return text;
    };
    // Drop an optional language tag on the opening fence
    let body = rest.split_once('\n').map_or("", |(_, body)| body);
    body.strip_suffix("```").unwrap_or(body).trim()
}

#[derive(Debug, Deserialize)]
struct ChatCompletion {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

#[derive(Debug, Deserialize)]
struct ChatMessage {
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawRecommendation {
    #[serde(default)]
    recommendations: TextOrList,
    #[serde(default)]
    missing_ingredients: TextOrList,
    #[serde(default)]
    cooking_tips: TextOrList,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum TextOrList {
    Text(String),
    List(Vec<serde_json::Value>),
}

impl Default for TextOrList {
    fn default() -> Self {
        Self::Text(String::new())
    }
}

impl TextOrList {
    fn into_text(self) -> String {
        match self {
            Self::Text(text) => text,
            Self::List(items) => items
                .into_iter()
                .map(|item| match item {
                    serde_json::Value::String(s) => s,
                    other => other.to_string(),
                })
                .collect::<Vec<_>>()
                .join("\n"),
        }
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_prompt_includes_inputs() {
        let request = RecommendationRequest::new("tofu, rice", "vegan", "Asian", "dinner");
        let prompt = build_prompt(&request);

        assert!(prompt.contains("Available ingredients: tofu, rice"));
        assert!(prompt.contains("Dietary restrictions: vegan"));
        assert!(prompt.contains("Cuisine preference: Asian"));
        assert!(prompt.contains("Meal type: dinner"));
        assert!(prompt.contains("\"cooking_tips\""));
    }

    #[test]
    fn test_parse_recommendation_strings() {
        let content = r#"{
            "recommendations": "1. Fried rice",
            "missing_ingredients": "scallions",
            "cooking_tips": "Use day-old rice"
        }"#;

        let rec = parse_recommendation(content).expect("Failed to parse");
        assert_eq!(rec.recommendations, "1. Fried rice");
        assert_eq!(rec.missing_ingredients, "scallions");
        assert_eq!(rec.cooking_tips, "Use day-old rice");
    }

    #[test]
    fn test_parse_recommendation_lists_and_fence() {
        let content = "```json\n{\"recommendations\": [\"Tacos\", \"Quesadilla\"], \
                       \"missing_ingredients\": [\"lime\"], \
                       \"cooking_tips\": \"Warm tortillas\"}\n```";

        let rec = parse_recommendation(content).expect("Failed to parse");
        assert_eq!(rec.recommendations, "Tacos\nQuesadilla");
        assert_eq!(rec.missing_ingredients, "lime");
        assert_eq!(rec.cooking_tips, "Warm tortillas");
    }

    #[test]
    fn test_parse_recommendation_missing_fields_default_empty() {
        let rec = parse_recommendation(r#"{"recommendations": "Soup"}"#).expect("Failed to parse");
        assert_eq!(rec.recommendations, "Soup");
        assert!(rec.cooking_tips.is_empty());
    }

    #[test]
    fn test_parse_recommendation_errors() {
        assert_eq!(parse_recommendation("   "), Err(ProviderError::EmptyResponse));
        assert!(matches!(
            parse_recommendation("not json"),
            Err(ProviderError::InvalidResponse(_))
        ));
    }

    #[test]
    fn test_missing_api_key_short_circuits() {
        let provider = HttpRecommendationProvider::new(ProviderConfig::default())
            .expect("Failed to build client");
        let request = RecommendationRequest::new("eggs", "none", "any", "any");

        assert_eq!(
            provider.generate_recommendations(&request),
            Err(ProviderError::MissingApiKey(API_KEY_ENV))
        );
    }

    #[test]
    fn test_strip_code_fence() {
        assert_eq!(strip_code_fence("{}"), "{}");
        assert_eq!(strip_code_fence("```\n{}\n```"), "{}");
        assert_eq!(strip_code_fence("```json\n{\"a\": 1}\n```"), "{\"a\": 1}");
    }
}
