use async_trait::async_trait;
use thiserror::Error;

use crate::models::BookingIntent;

#[derive(Debug, Error)]
pub enum SinkError {
    #[error("Failed to serialize booking: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Booking storage unavailable: {0}")]
    Unavailable(String),
}

/// Destination for confirmed booking intents.
/// Implementations may be local storage, a log, or a real reservation API.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BookingSink: Send + Sync {
    /// Record one confirmed booking intent
    async fn record_booking(&self, intent: &BookingIntent) -> Result<(), SinkError>;

    /// Get the name of the sink, for logs
    fn sink_name(&self) -> &'static str;
}
