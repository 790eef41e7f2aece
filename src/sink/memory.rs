use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;
use tracing::{debug, warn};

use super::traits::{BookingSink, SinkError};
use crate::models::BookingIntent;

/// Envelope written to storage for each booking
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StoredBooking {
    pub recorded_at: DateTime<Utc>,
    pub booking: BookingIntent,
}

/// Ephemeral key-value storage, keyed `booking_{propertyId}`.
///
/// A later booking for the same property overwrites the earlier one, like
/// browser local storage would. Nothing survives the process.
#[derive(Debug, Default)]
pub struct LocalStorageSink {
    entries: RwLock<HashMap<String, String>>,
}

impl LocalStorageSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw JSON stored under `key`
    pub async fn get_item(&self, key: &str) -> Option<String> {
        self.entries.read().await.get(key).cloned()
    }

    /// Stored booking for a property, if one was recorded and still parses
    pub async fn booking_for(&self, property_id: &str) -> Option<StoredBooking> {
        let raw = self.get_item(&format!("booking_{property_id}")).await?;
        match serde_json::from_str(&raw) {
            Ok(stored) => Some(stored),
            Err(e) => {
                warn!("Stored booking for {} is unreadable: {}", property_id, e);
                None
            }
        }
    }

    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}

#[async_trait]
impl BookingSink for LocalStorageSink {
    async fn record_booking(&self, intent: &BookingIntent) -> Result<(), SinkError> {
        let stored = StoredBooking {
            recorded_at: Utc::now(),
            booking: intent.clone(),
        };
        let json = serde_json::to_string(&stored)?;
        let key = intent.storage_key();

        debug!("Writing {} ({} bytes)", key, json.len());
        self.entries.write().await.insert(key, json);
        Ok(())
    }

    fn sink_name(&self) -> &'static str {
        "local-storage"
    }
}
