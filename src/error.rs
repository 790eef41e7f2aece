//! Errors returned by the booking session.
//!
//! Validation failures are ordinary data ([`ValidationError`]); the variants
//! here describe why a session operation could not be carried out at all.

use std::time::Duration;

use thiserror::Error;

use crate::booking::guests::GuestError;
use crate::booking::lightbox::LightboxError;
use crate::booking::validation::ValidationError;
use crate::sink::SinkError;

#[derive(Debug, Error)]
pub enum SessionError {
    /// Operation needs a property to be selected
    #[error("No booking in progress")]
    NoDraft,

    /// A confirmation is already in flight
    #[error("A confirmation is already in progress")]
    ConfirmationInFlight,

    /// Finishing a confirmation that was never started
    #[error("No confirmation is in progress")]
    NotConfirming,

    #[error(transparent)]
    Guests(#[from] GuestError),

    #[error(transparent)]
    Lightbox(#[from] LightboxError),

    /// Draft kept; the caller shows the first error next to its field
    #[error("Booking form is invalid: {}", first_message(.0))]
    Invalid(Vec<ValidationError>),

    #[error("Failed to record booking: {0}")]
    Sink(#[from] SinkError),

    #[error("Recording the booking timed out after {0:?}")]
    SinkTimeout(Duration),
}

impl SessionError {
    /// Validation failures, if that is why the operation failed
    pub fn validation_errors(&self) -> Option<&[ValidationError]> {
        match self {
            SessionError::Invalid(errors) => Some(errors),
            _ => None,
        }
    }
}

fn first_message(errors: &[ValidationError]) -> String {
    errors
        .first()
        .map(ToString::to_string)
        .unwrap_or_else(|| "unknown problem".to_string())
}

pub type SessionResult<T> = Result<T, SessionError>;
