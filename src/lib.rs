//! Booking core for a tiny-house rental site.
//!
//! The listing grid, booking modal, contact form and AI helpers of the site
//! are rendered elsewhere; this crate holds their state and rules.

pub mod ai;
pub mod amenities;
pub mod booking;
pub mod config;
pub mod contact;
pub mod directory;
pub mod error;
pub mod models;
pub mod notify;
pub mod sink;

pub use booking::{BookingSession, Dismissal, Phase, SessionConfig};
pub use config::AppConfig;
pub use error::{SessionError, SessionResult};
pub use models::{BookingDraft, BookingIntent, DateRange, DraftField, Guests, Property};
pub use notify::{Notification, Notifier};
