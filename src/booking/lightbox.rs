//! Full-screen photo viewer nested inside the booking modal.
//!
//! The viewer and the modal are two independent state machines. The only
//! coupling is that the modal asks the viewer whether it owns an outside
//! click or an Escape key press before dismissing itself.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Rendered surfaces an input event can land on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Region {
    Page,
    ModalBackdrop,
    Modal,
    Lightbox,
}

/// Where a pointer event landed, innermost region first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventTarget {
    path: Vec<Region>,
}

impl EventTarget {
    pub fn new(path: impl IntoIterator<Item = Region>) -> Self {
        Self {
            path: path.into_iter().collect(),
        }
    }

    /// Click on the dimmed page behind the modal
    pub fn backdrop() -> Self {
        Self::new([Region::ModalBackdrop, Region::Page])
    }

    /// Click anywhere inside the viewer overlay (image, thumbnails, its backdrop)
    pub fn lightbox() -> Self {
        Self::new([Region::Lightbox, Region::Page])
    }

    pub fn is_within(&self, region: Region) -> bool {
        self.path.contains(&region)
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LightboxError {
    #[error("Image {index} does not exist, the gallery has {count} images")]
    IndexOutOfRange { index: usize, count: usize },
}

/// What an Escape key press did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EscapeOutcome {
    /// Consumed by the viewer; the modal must ignore this key press
    ClosedLightbox,
    /// The viewer was closed; the modal handles Escape as usual
    PassToModal,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LightboxState {
    pub is_open: bool,
    pub active_index: usize,
}

#[derive(Debug, Clone, Default)]
pub struct Lightbox {
    state: LightboxState,
}

impl Lightbox {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> LightboxState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        self.state.is_open
    }

    /// Opens the viewer on image `index` of a gallery holding `count` images.
    pub fn open(&mut self, index: usize, count: usize) -> Result<(), LightboxError> {
        if index >= count {
            return Err(LightboxError::IndexOutOfRange { index, count });
        }
        self.state = LightboxState {
            is_open: true,
            active_index: index,
        };
        Ok(())
    }

    /// Moves to another image while open (thumbnail click, swipe).
    pub fn view(&mut self, index: usize, count: usize) -> Result<(), LightboxError> {
        if index >= count {
            return Err(LightboxError::IndexOutOfRange { index, count });
        }
        self.state.active_index = index;
        Ok(())
    }

    pub fn close(&mut self) {
        self.state.is_open = false;
    }

    /// Closed and back on the first image
    pub fn reset(&mut self) {
        self.state = LightboxState::default();
    }

    /// True when an outside-click on the modal actually landed in the viewer.
    pub fn owns_outside_click(&self, target: &EventTarget) -> bool {
        self.state.is_open && target.is_within(Region::Lightbox)
    }

    pub fn handle_escape(&mut self) -> EscapeOutcome {
        if self.state.is_open {
            self.close();
            EscapeOutcome::ClosedLightbox
        } else {
            EscapeOutcome::PassToModal
        }
    }
}
