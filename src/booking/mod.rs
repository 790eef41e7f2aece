//! The booking modal: pricing, guest allocation, validation, the photo
//! viewer and the session state machine that owns them.

pub mod guests;
pub mod lightbox;
pub mod pricing;
pub mod session;
pub mod validation;

pub use lightbox::{EscapeOutcome, EventTarget, Lightbox, LightboxState, Region};
pub use pricing::compute_stay;
pub use session::{BookingSession, Dismissal, PendingConfirmation, Phase, SessionConfig};
pub use validation::{ErrorKind, ValidationError, ValidationPolicy, Validator};
