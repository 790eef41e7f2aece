use crate::directory::traits::PropertyDirectory;
use crate::models::Property;
use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Catalog served as a JSON array of properties over HTTP
pub struct HttpDirectory {
    client: Client,
    url: String,
}

impl HttpDirectory {
    /// Create a directory reading from `url`
    pub fn new(url: impl Into<String>) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .user_agent(concat!("tiny-house-booking/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            url: url.into(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

/// Parse a catalog document, dropping entries that could never be booked
pub fn parse_catalog(body: &str) -> Result<Vec<Property>> {
    let properties: Vec<Property> =
        serde_json::from_str(body).context("Catalog is not a JSON array of properties")?;

    let total = properties.len();
    let bookable: Vec<Property> = properties
        .into_iter()
        .filter(|p| {
            let ok = p.price > 0.0 && p.capacity > 0;
            if !ok {
                info!("Skipped property {}: price={}, capacity={}", p.id, p.price, p.capacity);
            }
            ok
        })
        .collect();

    debug!("Kept {} of {} catalog entries", bookable.len(), total);
    Ok(bookable)
}

#[async_trait]
impl PropertyDirectory for HttpDirectory {
    async fn list_properties(&self) -> Result<Vec<Property>> {
        debug!("Fetching URL: {}", self.url);

        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .context("Failed to fetch property catalog")?;

        if !response.status().is_success() {
            warn!("Catalog returned status: {}", response.status());
            anyhow::bail!("Failed to fetch property catalog: {}", response.status());
        }

        let body = response.text().await.context("Failed to read response body")?;
        debug!("Downloaded {} bytes of catalog JSON", body.len());

        let properties = parse_catalog(&body)?;
        info!("✅ Loaded {} properties from {}", properties.len(), self.url);
        Ok(properties)
    }

    fn source_name(&self) -> &'static str {
        "http"
    }
}
