//! Recommendation and review-summary flows.

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use super::prompts;
use super::traits::{GenerationError, TextGenerator};
use crate::directory::RecommendationRequest;
use crate::models::Property;
use crate::notify::Notifier;

const GENERATION_FAILURE_MESSAGE: &str =
    "Something went wrong while generating a response. Please try again.";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RecommendPropertyOutput {
    pub property_description: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SummarizeReviewsInput {
    pub reviews: Vec<String>,
    #[serde(default)]
    pub property_description: Option<String>,
}

impl SummarizeReviewsInput {
    pub fn for_property(property: &Property) -> Self {
        Self {
            reviews: property.reviews.clone(),
            property_description: Some(property.description.clone()),
        }
    }
}

pub async fn recommend_property(
    generator: &dyn TextGenerator,
    request: &RecommendationRequest,
) -> Result<RecommendPropertyOutput, GenerationError> {
    info!("Requesting recommendation for {} (budget {})", request.location, request.budget);
    let raw = generator
        .generate(&prompts::recommendation_prompt(request))
        .await?;

    Ok(RecommendPropertyOutput {
        property_description: extract_field(&raw, "propertyDescription")?,
    })
}

pub async fn summarize_reviews(
    generator: &dyn TextGenerator,
    input: &SummarizeReviewsInput,
) -> Result<String, GenerationError> {
    if input.reviews.iter().all(|r| r.trim().is_empty()) {
        return Err(GenerationError::NoReviews);
    }

    info!("Summarizing {} reviews", input.reviews.len());
    let raw = generator
        .generate(&prompts::review_summary_prompt(input))
        .await?;

    extract_field(&raw, "summary")
}

/// Reports a failed generation the only way the UI can act on it.
pub fn notify_failure(notifier: &Notifier, error: &GenerationError) {
    warn!("Text generation failed: {}", error);
    notifier.error("Request failed", GENERATION_FAILURE_MESSAGE);
}

/// Pulls `key` out of the first JSON object in `raw`; models that ignore
/// the format instruction get their plain text passed through.
fn extract_field(raw: &str, key: &str) -> Result<String, GenerationError> {
    let object = match (raw.find('{'), raw.rfind('}')) {
        (Some(start), Some(end)) if start < end => {
            serde_json::from_str::<serde_json::Value>(&raw[start..=end]).ok()
        }
        _ => None,
    };

    let text = match object.as_ref().and_then(|v| v.get(key)).and_then(|v| v.as_str()) {
        Some(value) => value.trim().to_string(),
        None => strip_fences(raw).to_string(),
    };

    if text.is_empty() {
        Err(GenerationError::EmptyOutput)
    } else {
        Ok(text)
    }
}

fn strip_fences(raw: &str) -> &str {
    let trimmed = raw.trim();
    let without_open = trimmed
        .strip_prefix("```")
        .map(|rest| rest.split_once('\n').map_or("", |(_, body)| body))
        .unwrap_or(trimmed);
    without_open
        .trim_end()
        .strip_suffix("```")
        .unwrap_or(without_open)
        .trim()
}
