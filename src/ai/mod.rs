//! Text generation: property recommendations and review summaries.
//!
//! The booking core never depends on this module; results are display
//! strings and failures become a generic error notification.

pub mod flows;
pub mod ollama;
pub mod prompts;
pub mod traits;

pub use flows::{
    recommend_property, summarize_reviews, RecommendPropertyOutput, SummarizeReviewsInput,
};
pub use ollama::OllamaGenerator;
pub use traits::{GenerationError, GenerationRequest, TextGenerator};
