//! "Contact us" form. Submissions are simulated: nothing leaves the process.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

use crate::booking::validation::is_valid_email;
use crate::notify::Notifier;

pub const DEFAULT_SUBMIT_DELAY: Duration = Duration::from_millis(1000);

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ContactError {
    #[error("Please fill in your {0}")]
    MissingField(&'static str),

    #[error("Please enter a valid email address")]
    InvalidEmail,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactMessage {
    pub fn validate(&self) -> Result<(), ContactError> {
        for (value, label) in [
            (&self.name, "name"),
            (&self.email, "email"),
            (&self.message, "message"),
        ] {
            if value.trim().is_empty() {
                return Err(ContactError::MissingField(label));
            }
        }
        if !is_valid_email(self.email.trim()) {
            return Err(ContactError::InvalidEmail);
        }
        Ok(())
    }
}

pub struct ContactForm {
    input: ContactMessage,
    delay: Duration,
    notifier: Notifier,
}

impl ContactForm {
    pub fn new(notifier: Notifier, delay: Duration) -> Self {
        Self {
            input: ContactMessage::default(),
            delay,
            notifier,
        }
    }

    pub fn input(&self) -> &ContactMessage {
        &self.input
    }

    pub fn input_mut(&mut self) -> &mut ContactMessage {
        &mut self.input
    }

    /// Sends the current input. On success the form is cleared; on a
    /// validation failure the input is kept.
    pub async fn submit(&mut self) -> Result<ContactMessage, ContactError> {
        if let Err(e) = self.input.validate() {
            self.notifier.error("Incomplete message", e.to_string());
            return Err(e);
        }

        tokio::time::sleep(self.delay).await;

        let sent = std::mem::take(&mut self.input);
        info!("Contact message from {} <{}>", sent.name, sent.email);
        self.notifier
            .success("Message sent", "Your message has been sent successfully!");
        Ok(sent)
    }
}
