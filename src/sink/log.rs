use async_trait::async_trait;
use tracing::info;

use super::traits::{BookingSink, SinkError};
use crate::models::BookingIntent;

/// Sink that only logs the booking, the way a simulated checkout does
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSink;

#[async_trait]
impl BookingSink for LogSink {
    async fn record_booking(&self, intent: &BookingIntent) -> Result<(), SinkError> {
        let payload = serde_json::to_string(intent)?;
        info!(
            property_id = %intent.property_id,
            nights = intent.number_of_nights,
            total_price = intent.total_price,
            "Booking data (simulation): {}",
            payload
        );
        Ok(())
    }

    fn sink_name(&self) -> &'static str {
        "log"
    }
}
