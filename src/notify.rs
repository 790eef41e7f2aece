//! User-visible notifications ("toasts").
//!
//! Components push records into a channel; whatever renders the UI owns
//! the receiving end.

use serde::{Deserialize, Serialize};
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub level: Level,
    pub title: String,
    pub message: String,
}

/// Sending half of the notification channel
#[derive(Debug, Clone)]
pub struct Notifier {
    tx: UnboundedSender<Notification>,
}

impl Notifier {
    pub fn channel() -> (Self, UnboundedReceiver<Notification>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }

    pub fn success(&self, title: impl Into<String>, message: impl Into<String>) {
        self.push(Level::Success, title.into(), message.into());
    }

    pub fn error(&self, title: impl Into<String>, message: impl Into<String>) {
        self.push(Level::Error, title.into(), message.into());
    }

    fn push(&self, level: Level, title: String, message: String) {
        let notification = Notification {
            level,
            title,
            message,
        };
        if self.tx.send(notification).is_err() {
            debug!("Notification dropped, no receiver attached");
        }
    }
}
