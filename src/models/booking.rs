use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{DateRange, Guests, Property};
use crate::booking::pricing;

/// Personal details collected by the booking form
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ContactDetails {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub city: String,
    pub postal_code: String,
    pub country: String,
}

/// Identifies one contact input of the booking form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ContactField {
    Name,
    Email,
    Phone,
    Address,
    City,
    PostalCode,
    Country,
}

impl ContactField {
    /// Canonical form order, also the order missing fields are reported in
    pub const ALL: [ContactField; 7] = [
        ContactField::Name,
        ContactField::Email,
        ContactField::Phone,
        ContactField::Address,
        ContactField::City,
        ContactField::PostalCode,
        ContactField::Country,
    ];

    /// Fields that only exist on the postal-address variant of the form
    pub fn is_postal(self) -> bool {
        matches!(
            self,
            ContactField::Address
                | ContactField::City
                | ContactField::PostalCode
                | ContactField::Country
        )
    }

    pub fn label(self) -> &'static str {
        match self {
            ContactField::Name => "full name",
            ContactField::Email => "email",
            ContactField::Phone => "phone number",
            ContactField::Address => "address",
            ContactField::City => "city",
            ContactField::PostalCode => "postal code",
            ContactField::Country => "country",
        }
    }
}

impl fmt::Display for ContactField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl ContactDetails {
    pub fn get(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Phone => &self.phone,
            ContactField::Address => &self.address,
            ContactField::City => &self.city,
            ContactField::PostalCode => &self.postal_code,
            ContactField::Country => &self.country,
        }
    }

    pub fn set(&mut self, field: ContactField, value: String) {
        let slot = match field {
            ContactField::Name => &mut self.name,
            ContactField::Email => &mut self.email,
            ContactField::Phone => &mut self.phone,
            ContactField::Address => &mut self.address,
            ContactField::City => &mut self.city,
            ContactField::PostalCode => &mut self.postal_code,
            ContactField::Country => &mut self.country,
        };
        *slot = value;
    }
}

/// Nights and price derived from the selected dates
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StayQuote {
    pub nights: u32,
    pub total_price: f64,
}

/// One edit delivered by the booking form
#[derive(Debug, Clone, PartialEq)]
pub enum DraftField {
    Dates(DateRange),
    CheckIn(Option<NaiveDate>),
    CheckOut(Option<NaiveDate>),
    Contact(ContactField, String),
    /// Goes through the guest allocator
    Adults(u32),
    /// Goes through the guest allocator
    Children(u32),
    /// Replaces both counts as given; capacity is only checked at confirmation
    Guests(Guests),
    Comments(String),
}

/// In-progress reservation form state for one property
#[derive(Debug, Clone, PartialEq)]
pub struct BookingDraft {
    pub property: Property,
    pub date_range: DateRange,
    pub contact: ContactDetails,
    pub guests: Guests,
    pub comments: Option<String>,
    quote: StayQuote,
}

impl BookingDraft {
    /// Fresh draft for `property`: no dates, one adult, empty contact.
    pub fn new(property: Property) -> Self {
        Self {
            property,
            date_range: DateRange::default(),
            contact: ContactDetails::default(),
            guests: Guests::default(),
            comments: None,
            quote: StayQuote::default(),
        }
    }

    pub fn quote(&self) -> StayQuote {
        self.quote
    }

    pub fn nights(&self) -> u32 {
        self.quote.nights
    }

    pub fn total_price(&self) -> f64 {
        self.quote.total_price
    }

    /// Recomputes the derived quote; called after every date mutation.
    pub(crate) fn refresh_quote(&mut self) {
        self.quote = pricing::compute_stay(&self.date_range, self.property.price);
    }
}

/// Validated snapshot handed to the confirmation sink
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BookingIntent {
    pub property_id: String,
    pub property_name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub number_of_nights: u32,
    pub total_price: f64,
    #[serde(flatten)]
    pub contact: ContactDetails,
    pub adults: u32,
    pub children: u32,
    #[serde(default)]
    pub comments: String,
}

impl BookingIntent {
    /// Key used by key-value storage sinks
    pub fn storage_key(&self) -> String {
        format!("booking_{}", self.property_id)
    }
}
