use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

mod booking;

pub use booking::{BookingDraft, BookingIntent, ContactDetails, ContactField, DraftField, StayQuote};

/// A bookable tiny house as supplied by the property directory
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Property {
    pub id: String,
    pub name: String,
    pub description: String,
    pub location: String,
    #[serde(default)]
    pub image_urls: Vec<String>,
    /// Nightly rate in currency units
    pub price: f64,
    #[serde(default)]
    pub amenities: Vec<String>,
    /// Maximum total occupants (adults + children)
    pub capacity: u32,
    pub bedrooms: u32,
    pub bathrooms: u32,
    #[serde(default)]
    pub owner_contact: String,
    #[serde(default)]
    pub booking_email: String,
    /// Guest reviews, fed to the review summary flow
    #[serde(default)]
    pub reviews: Vec<String>,
}

/// Check-in / check-out selection. Either end may still be unset while the
/// user is picking dates.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct DateRange {
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

impl DateRange {
    pub fn new(from: NaiveDate, to: NaiveDate) -> Self {
        Self {
            from: Some(from),
            to: Some(to),
        }
    }

    pub fn is_complete(&self) -> bool {
        self.from.is_some() && self.to.is_some()
    }
}

/// Occupants of a stay
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Guests {
    pub adults: u32,
    pub children: u32,
}

impl Guests {
    /// Saturates instead of wrapping; counts set wholesale are unchecked.
    pub fn total(&self) -> u32 {
        self.adults.saturating_add(self.children)
    }
}

impl Default for Guests {
    fn default() -> Self {
        Self {
            adults: 1,
            children: 0,
        }
    }
}
