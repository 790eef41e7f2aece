//! Prompt templates for the text-generation flows.

use std::fmt::Write;

use super::flows::SummarizeReviewsInput;
use super::traits::GenerationRequest;
use crate::directory::RecommendationRequest;

const RECOMMEND_SYSTEM: &str =
    "You are an AI that recommends tiny houses based on user preferences.";

const SUMMARY_SYSTEM: &str = "You are an AI that summarizes user reviews for tiny houses. \
Provide a summary that highlights the key pros and cons mentioned in the reviews.";

pub fn recommendation_prompt(request: &RecommendationRequest) -> GenerationRequest {
    let mut prompt = String::from(
        "Provide a detailed description of a tiny house that matches the following criteria:\n\n",
    );
    let _ = writeln!(prompt, "Location: {}", request.location);
    let _ = writeln!(prompt, "Budget: {}", request.budget);
    if !request.amenities.is_empty() {
        let _ = writeln!(prompt, "Amenities: {}", request.amenities.join(", "));
    }
    prompt.push_str(
        "\nAnswer with a JSON object of the form {\"propertyDescription\": \"...\"}.",
    );

    GenerationRequest::new(prompt).with_system_prompt(RECOMMEND_SYSTEM)
}

pub fn review_summary_prompt(input: &SummarizeReviewsInput) -> GenerationRequest {
    let mut prompt = String::from("Reviews:\n");
    for review in &input.reviews {
        let _ = writeln!(prompt, "{}", review.trim());
    }
    if let Some(description) = input.property_description.as_deref() {
        let _ = write!(prompt, "\nProperty Description: {}\n", description);
    }
    prompt.push_str("\nAnswer with a JSON object of the form {\"summary\": \"...\"}.");

    GenerationRequest::new(prompt).with_system_prompt(SUMMARY_SYSTEM)
}
