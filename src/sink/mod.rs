pub mod log;
pub mod memory;
pub mod traits;

pub use log::LogSink;
pub use memory::{LocalStorageSink, StoredBooking};
pub use traits::{BookingSink, SinkError};

#[cfg(test)]
pub use traits::MockBookingSink;
