//! Booking session state machine.
//!
//! ```text
//!   Idle --select--> Selecting --confirm ok--> Confirming --sink ok--> Idle
//!                     ^    |                      |
//!                     +----+ edits / invalid      +--sink failed--> Selecting
//! ```
//!
//! `cancel`, Escape and outside clicks on the modal return to `Idle` and
//! drop the draft, except when the photo viewer owns the gesture.

use std::ops::RangeInclusive;
use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, info, warn};

use super::guests;
use super::lightbox::{EscapeOutcome, EventTarget, Lightbox, LightboxState};
use super::validation::{ValidationPolicy, Validator};
use crate::error::{SessionError, SessionResult};
use crate::models::{BookingDraft, BookingIntent, DraftField, Property, StayQuote};
use crate::notify::Notifier;
use crate::sink::BookingSink;

/// Default upper bound on a single sink write
pub const DEFAULT_CONFIRM_TIMEOUT: Duration = Duration::from_secs(10);

const SINK_FAILURE_MESSAGE: &str = "We could not record your booking. Please try again.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// No property selected, modal closed
    Idle,
    /// Modal open, draft being edited
    Selecting,
    /// Draft validated, sink write in flight
    Confirming,
}

/// What a dismiss gesture on the modal did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dismissal {
    /// No booking was open
    Ignored,
    /// The photo viewer owned the gesture; modal stays open
    Swallowed,
    /// Escape closed the photo viewer only
    LightboxClosed,
    /// Modal closed and draft dropped
    Cancelled,
}

#[derive(Debug, Clone, Copy)]
pub struct SessionConfig {
    pub policy: ValidationPolicy,
    pub confirm_timeout: Duration,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            policy: ValidationPolicy::default(),
            confirm_timeout: DEFAULT_CONFIRM_TIMEOUT,
        }
    }
}

/// A confirmation handed out by `begin_confirm`. Only the most recent one
/// can be redeemed with `finish_confirm`.
#[derive(Debug, Clone, PartialEq)]
pub struct PendingConfirmation {
    ticket: u64,
    intent: BookingIntent,
}

impl PendingConfirmation {
    pub fn ticket(&self) -> u64 {
        self.ticket
    }

    pub fn intent(&self) -> &BookingIntent {
        &self.intent
    }
}

pub struct BookingSession {
    phase: Phase,
    draft: Option<BookingDraft>,
    in_flight: Option<PendingConfirmation>,
    next_ticket: u64,
    lightbox: Lightbox,
    validator: Validator,
    sink: Arc<dyn BookingSink>,
    notifier: Notifier,
    confirm_timeout: Duration,
}

impl BookingSession {
    pub fn new(sink: Arc<dyn BookingSink>, notifier: Notifier, config: SessionConfig) -> Self {
        Self {
            phase: Phase::Idle,
            draft: None,
            in_flight: None,
            next_ticket: 0,
            lightbox: Lightbox::new(),
            validator: Validator::new(config.policy),
            sink,
            notifier,
            confirm_timeout: config.confirm_timeout,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn draft(&self) -> Option<&BookingDraft> {
        self.draft.as_ref()
    }

    pub fn quote(&self) -> StayQuote {
        self.draft
            .as_ref()
            .map(BookingDraft::quote)
            .unwrap_or_default()
    }

    pub fn lightbox(&self) -> LightboxState {
        self.lightbox.state()
    }

    /// Adult counts the guest picker should offer
    pub fn adult_choices(&self) -> Option<RangeInclusive<u32>> {
        self.draft
            .as_ref()
            .map(|d| guests::adult_choices(d.property.capacity))
    }

    /// Child counts the guest picker should offer
    pub fn child_choices(&self) -> Option<RangeInclusive<u32>> {
        self.draft
            .as_ref()
            .map(|d| guests::child_choices(d.property.capacity, d.guests.adults))
    }

    /// Opens the booking modal for `property` with a fresh draft.
    pub fn select(&mut self, property: Property) -> SessionResult<()> {
        if self.phase == Phase::Confirming {
            return Err(SessionError::ConfirmationInFlight);
        }

        info!(
            "Selected {} ({}, capacity {})",
            property.id, property.name, property.capacity
        );
        self.draft = Some(BookingDraft::new(property));
        self.lightbox.reset();
        self.phase = Phase::Selecting;
        Ok(())
    }

    /// Applies one form edit. Derived nights and price are up to date when
    /// this returns.
    pub fn update(&mut self, field: DraftField) -> SessionResult<()> {
        let draft = match self.phase {
            Phase::Confirming => return Err(SessionError::ConfirmationInFlight),
            Phase::Idle => return Err(SessionError::NoDraft),
            Phase::Selecting => self.draft.as_mut().ok_or(SessionError::NoDraft)?,
        };

        debug!("Draft edit: {:?}", field);

        match field {
            DraftField::Dates(range) => draft.date_range = range,
            DraftField::CheckIn(date) => draft.date_range.from = date,
            DraftField::CheckOut(date) => draft.date_range.to = date,
            DraftField::Contact(which, value) => draft.contact.set(which, value),
            DraftField::Comments(text) => {
                draft.comments = if text.trim().is_empty() {
                    None
                } else {
                    Some(text)
                };
            }
            DraftField::Guests(counts) => draft.guests = counts,
            DraftField::Adults(adults) => {
                let capacity = draft.property.capacity;
                match guests::set_adults(draft.guests, adults, capacity) {
                    Ok(next) => draft.guests = next,
                    Err(e) => {
                        warn!("Rejected adult count: {}", e);
                        self.notifier.error("Guests", e.to_string());
                        return Err(e.into());
                    }
                }
            }
            DraftField::Children(children) => {
                let capacity = draft.property.capacity;
                match guests::set_children(draft.guests, children, capacity) {
                    Ok(next) => draft.guests = next,
                    Err(e) => {
                        warn!("Rejected child count: {}", e);
                        self.notifier.error("Guests", e.to_string());
                        return Err(e.into());
                    }
                }
            }
        }

        draft.refresh_quote();
        Ok(())
    }

    pub fn set_adults(&mut self, adults: u32) -> SessionResult<()> {
        self.update(DraftField::Adults(adults))
    }

    pub fn set_children(&mut self, children: u32) -> SessionResult<()> {
        self.update(DraftField::Children(children))
    }

    /// Validates the draft and, if it passes, enters `Confirming`.
    ///
    /// The returned intent must be handed to a sink and the outcome passed
    /// back with the same ticket to [`finish_confirm`](Self::finish_confirm).
    /// [`confirm`](Self::confirm) does both.
    pub fn begin_confirm(&mut self) -> SessionResult<PendingConfirmation> {
        if self.phase == Phase::Confirming {
            return Err(SessionError::ConfirmationInFlight);
        }

        match self.validator.validate(self.draft.as_ref()) {
            Ok(intent) => {
                info!(
                    "Confirming {} for {} nights ({})",
                    intent.property_id, intent.number_of_nights, intent.total_price
                );
                self.next_ticket += 1;
                let pending = PendingConfirmation {
                    ticket: self.next_ticket,
                    intent,
                };
                self.phase = Phase::Confirming;
                self.in_flight = Some(pending.clone());
                Ok(pending)
            }
            Err(errors) => {
                if let Some(first) = errors.first() {
                    debug!("Validation failed: {:?}", errors);
                    self.notifier.error("Incomplete booking", first.to_string());
                }
                Err(SessionError::Invalid(errors))
            }
        }
    }

    /// Completes a confirmation started with `begin_confirm`.
    ///
    /// Success drops the draft and returns to `Idle`. Failure returns to
    /// `Selecting` with the draft intact so the user can retry. Outcomes for
    /// a cancelled or superseded confirmation are refused with
    /// `NotConfirming` and leave the session untouched.
    pub fn finish_confirm(
        &mut self,
        pending: &PendingConfirmation,
        outcome: SessionResult<()>,
    ) -> SessionResult<BookingIntent> {
        let current = self.in_flight.as_ref().map(PendingConfirmation::ticket);
        if self.phase != Phase::Confirming || current != Some(pending.ticket) {
            debug!("Discarding outcome of stale confirmation #{}", pending.ticket);
            return Err(SessionError::NotConfirming);
        }
        let intent = self
            .in_flight
            .take()
            .ok_or(SessionError::NotConfirming)?
            .intent;

        match outcome {
            Ok(()) => {
                info!("Booking recorded for {}", intent.property_id);
                self.notifier.success(
                    "Booking recorded",
                    format!(
                        "Your request for {} from {} to {} has been recorded.",
                        intent.property_name,
                        intent.start_date.format("%B %-d, %Y"),
                        intent.end_date.format("%B %-d, %Y"),
                    ),
                );
                self.reset();
                Ok(intent)
            }
            Err(e) => {
                warn!("Booking for {} not recorded: {}", intent.property_id, e);
                self.notifier.error("Booking failed", SINK_FAILURE_MESSAGE);
                self.phase = Phase::Selecting;
                Err(e)
            }
        }
    }

    /// Validates, records the booking with the sink and closes the session.
    pub async fn confirm(&mut self) -> SessionResult<BookingIntent> {
        let pending = self.begin_confirm()?;

        debug!("Recording booking with {} sink", self.sink.sink_name());
        let outcome = match tokio::time::timeout(
            self.confirm_timeout,
            self.sink.record_booking(pending.intent()),
        )
        .await
        {
            Ok(Ok(())) => Ok(()),
            Ok(Err(e)) => Err(SessionError::Sink(e)),
            Err(_) => Err(SessionError::SinkTimeout(self.confirm_timeout)),
        };

        self.finish_confirm(&pending, outcome)
    }

    /// Closes the modal and drops the draft from any phase.
    ///
    /// Cancelling while `Confirming` does not stop the sink write; its
    /// outcome is discarded.
    pub fn cancel(&mut self) {
        if self.phase == Phase::Confirming {
            warn!("Cancelled while a confirmation was in flight");
        }
        if self.phase != Phase::Idle {
            info!("Booking cancelled");
        }
        self.reset();
    }

    /// Outside click on the booking modal.
    pub fn dismiss(&mut self, target: &EventTarget) -> Dismissal {
        if self.phase == Phase::Idle {
            return Dismissal::Ignored;
        }
        if self.lightbox.owns_outside_click(target) {
            debug!("Outside click belongs to the photo viewer, modal stays open");
            return Dismissal::Swallowed;
        }
        self.cancel();
        Dismissal::Cancelled
    }

    /// Escape pressed while the booking modal has focus.
    pub fn escape(&mut self) -> Dismissal {
        if self.phase == Phase::Idle {
            return Dismissal::Ignored;
        }
        match self.lightbox.handle_escape() {
            EscapeOutcome::ClosedLightbox => Dismissal::LightboxClosed,
            EscapeOutcome::PassToModal => {
                self.cancel();
                Dismissal::Cancelled
            }
        }
    }

    /// Opens the photo viewer on image `index` of the selected property.
    pub fn open_gallery(&mut self, index: usize) -> SessionResult<()> {
        let count = self
            .draft
            .as_ref()
            .ok_or(SessionError::NoDraft)?
            .property
            .image_urls
            .len();
        self.lightbox.open(index, count)?;
        Ok(())
    }

    pub fn view_image(&mut self, index: usize) -> SessionResult<()> {
        let count = self
            .draft
            .as_ref()
            .ok_or(SessionError::NoDraft)?
            .property
            .image_urls
            .len();
        self.lightbox.view(index, count)?;
        Ok(())
    }

    /// Closes the photo viewer; the booking modal is untouched.
    pub fn close_gallery(&mut self) {
        self.lightbox.close();
    }

    fn reset(&mut self) {
        self.phase = Phase::Idle;
        self.draft = None;
        self.in_flight = None;
        self.lightbox.reset();
    }
}
