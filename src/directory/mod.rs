pub mod catalog;
pub mod http;
pub mod traits;
pub mod types;

pub use catalog::StaticCatalog;
pub use http::HttpDirectory;
pub use traits::PropertyDirectory;
pub use types::{PropertyFilter, RecommendationRequest, RequestError};
