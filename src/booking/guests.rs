//! Guest allocation against a property's capacity.
//!
//! Every accepted change leaves `1 <= adults` and
//! `adults + children <= capacity`. Out-of-range requests are refused
//! rather than corrected, so a picker offering [`adult_choices`] and
//! [`child_choices`] never produces an error.

use std::ops::RangeInclusive;

use thiserror::Error;

use crate::models::Guests;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GuestError {
    #[error("Adults must be between 1 and {max}, got {requested}")]
    AdultsOutOfRange { requested: u32, max: u32 },

    #[error("Only {max} children fit alongside the selected adults, got {requested}")]
    ChildrenOutOfRange { requested: u32, max: u32 },
}

/// Adult counts a picker should offer for `capacity`.
pub fn adult_choices(capacity: u32) -> RangeInclusive<u32> {
    1..=capacity.max(1)
}

/// Child counts a picker should offer once `adults` are seated.
pub fn child_choices(capacity: u32, adults: u32) -> RangeInclusive<u32> {
    0..=capacity.saturating_sub(adults)
}

/// Changes the adult count, pushing children down if the house would overflow.
pub fn set_adults(current: Guests, adults: u32, capacity: u32) -> Result<Guests, GuestError> {
    if !adult_choices(capacity).contains(&adults) {
        return Err(GuestError::AdultsOutOfRange {
            requested: adults,
            max: capacity.max(1),
        });
    }

    let children = current.children.min(capacity.saturating_sub(adults));

    Ok(Guests { adults, children })
}

/// Changes the child count; refuses counts that leave no room for the adults.
pub fn set_children(current: Guests, children: u32, capacity: u32) -> Result<Guests, GuestError> {
    let max = capacity.saturating_sub(current.adults);
    if children > max {
        return Err(GuestError::ChildrenOutOfRange {
            requested: children,
            max,
        });
    }

    Ok(Guests {
        adults: current.adults,
        children,
    })
}
