use crate::models::Property;
use anyhow::Result;
use async_trait::async_trait;

/// Common trait for all property catalogs
/// The compiled-in list and a remote JSON feed both sit behind it
#[async_trait]
pub trait PropertyDirectory: Send + Sync {
    /// List every bookable property, in display order
    async fn list_properties(&self) -> Result<Vec<Property>>;

    /// Get the name of the catalog source
    fn source_name(&self) -> &'static str;
}
