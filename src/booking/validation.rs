//! Booking form validation.
//!
//! Failures are returned as data in a fixed priority order: property,
//! dates, required contact fields, email, phone, guest count, capacity.
//! Callers that show a single message show the first one.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::{BookingDraft, BookingIntent, ContactField};

static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex"));

/// Checks an address has one `@`, a dotted domain and no whitespace.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

/// Discriminant of a [`ValidationError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorKind {
    NoPropertySelected,
    IncompleteDateRange,
    MissingRequiredField,
    InvalidEmailFormat,
    InvalidPhoneFormat,
    NoGuestsSelected,
    CapacityExceeded,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Select a tiny house before booking")]
    NoPropertySelected,

    #[error("Select an arrival and a departure date at least one night apart")]
    IncompleteDateRange,

    #[error("Please fill in your {0}")]
    MissingRequiredField(ContactField),

    #[error("Please enter a valid email address")]
    InvalidEmailFormat,

    #[error("Phone number must contain exactly {expected_digits} digits")]
    InvalidPhoneFormat { expected_digits: usize },

    #[error("Please select at least one guest")]
    NoGuestsSelected,

    #[error("{requested} guests exceed the maximum capacity of {max}")]
    CapacityExceeded { requested: u32, max: u32 },
}

impl ValidationError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ValidationError::NoPropertySelected => ErrorKind::NoPropertySelected,
            ValidationError::IncompleteDateRange => ErrorKind::IncompleteDateRange,
            ValidationError::MissingRequiredField(_) => ErrorKind::MissingRequiredField,
            ValidationError::InvalidEmailFormat => ErrorKind::InvalidEmailFormat,
            ValidationError::InvalidPhoneFormat { .. } => ErrorKind::InvalidPhoneFormat,
            ValidationError::NoGuestsSelected => ErrorKind::NoGuestsSelected,
            ValidationError::CapacityExceeded { .. } => ErrorKind::CapacityExceeded,
        }
    }
}

/// Which optional checks apply to a form variant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationPolicy {
    /// Address, city, postal code and country are required
    pub require_postal_address: bool,
    /// Exact digit count a phone number must have, when enforced
    pub phone_digits: Option<usize>,
}

impl Default for ValidationPolicy {
    fn default() -> Self {
        Self {
            require_postal_address: true,
            phone_digits: None,
        }
    }
}

/// Stateless validator for booking drafts
#[derive(Debug, Clone, Copy, Default)]
pub struct Validator {
    policy: ValidationPolicy,
}

impl Validator {
    pub fn new(policy: ValidationPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> ValidationPolicy {
        self.policy
    }

    /// Returns the booking intent for a complete draft, or every failure in
    /// priority order.
    pub fn validate(
        &self,
        draft: Option<&BookingDraft>,
    ) -> Result<BookingIntent, Vec<ValidationError>> {
        let Some(draft) = draft else {
            return Err(vec![ValidationError::NoPropertySelected]);
        };

        let mut errors = Vec::new();

        let dates = match (draft.date_range.from, draft.date_range.to) {
            (Some(from), Some(to)) if draft.nights() >= 1 => Some((from, to)),
            _ => {
                errors.push(ValidationError::IncompleteDateRange);
                None
            }
        };

        for field in ContactField::ALL {
            if field.is_postal() && !self.policy.require_postal_address {
                continue;
            }
            if draft.contact.get(field).trim().is_empty() {
                errors.push(ValidationError::MissingRequiredField(field));
            }
        }

        let email = draft.contact.email.trim();
        if !email.is_empty() && !is_valid_email(email) {
            errors.push(ValidationError::InvalidEmailFormat);
        }

        if let Some(expected_digits) = self.policy.phone_digits {
            let phone = draft.contact.phone.trim();
            if !phone.is_empty() && !phone_has_digits(phone, expected_digits) {
                errors.push(ValidationError::InvalidPhoneFormat { expected_digits });
            }
        }

        let requested = draft.guests.total();
        if requested == 0 {
            errors.push(ValidationError::NoGuestsSelected);
        }
        if requested > draft.property.capacity {
            errors.push(ValidationError::CapacityExceeded {
                requested,
                max: draft.property.capacity,
            });
        }

        match dates {
            Some((start_date, end_date)) if errors.is_empty() => Ok(BookingIntent {
                property_id: draft.property.id.clone(),
                property_name: draft.property.name.clone(),
                start_date,
                end_date,
                number_of_nights: draft.nights(),
                total_price: draft.total_price(),
                contact: trimmed_contact(draft),
                adults: draft.guests.adults,
                children: draft.guests.children,
                comments: draft.comments.clone().unwrap_or_default(),
            }),
            _ => Err(errors),
        }
    }
}

/// Spaces, dots and dashes are separators; anything else must be a digit.
fn phone_has_digits(phone: &str, expected: usize) -> bool {
    let mut digits = 0;
    for c in phone.chars() {
        match c {
            '0'..='9' => digits += 1,
            ' ' | '.' | '-' => {}
            _ => return false,
        }
    }
    digits == expected
}

fn trimmed_contact(draft: &BookingDraft) -> crate::models::ContactDetails {
    let mut contact = draft.contact.clone();
    for field in ContactField::ALL {
        let value = contact.get(field).trim().to_string();
        contact.set(field, value);
    }
    contact
}
