//! # Prescription Draft
//!
//! The "Add Prescription" form: photos, an optional voice note and a free
//! text description. Capturing photos and audio happens on the device; this
//! module only holds what was captured and decides whether it can be sent.
//!
//! ```text
//!   set_description / add_image / attach_voice_note
//!                 │
//!                 ▼
//!   ┌──────────────────────┐   submit()   ┌────────────────────┐
//!   │  PrescriptionDraft   │ ───────────► │ PrescriptionReceipt│ ──► Route::Cart
//!   └──────────────────────┘      │       └────────────────────┘
//!                                 └─ nothing provided ──► MissingInformation
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::error::ValidationError;
use crate::navigation::Route;
use crate::validation::ValidationResult;

const MISSING_INFORMATION: &str =
    "Please add at least one prescription image, voice note, or description.";
const RECEIPT_TITLE: &str = "Prescription Added";
const RECEIPT_MESSAGE: &str = "Your prescription has been added to your cart successfully!";

/// A prescription being put together on the form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct PrescriptionDraft {
    #[ts(as = "String")]
    pub id: Uuid,
    pub description: String,
    /// Captured photo URIs, in the order they were added.
    pub images: Vec<String>,
    pub voice_note: Option<String>,
    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,
}

impl PrescriptionDraft {
    pub fn new() -> Self {
        PrescriptionDraft {
            id: Uuid::new_v4(),
            description: String::new(),
            images: Vec::new(),
            voice_note: None,
            created_at: Utc::now(),
        }
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
    }

    pub fn add_image(&mut self, uri: impl Into<String>) {
        self.images.push(uri.into());
    }

    /// Removes the image at `index`. Returns the removed URI, or `None`
    /// when the index is out of range.
    pub fn remove_image(&mut self, index: usize) -> Option<String> {
        if index < self.images.len() {
            Some(self.images.remove(index))
        } else {
            None
        }
    }

    /// Attaches a finished recording, replacing any earlier one.
    pub fn attach_voice_note(&mut self, uri: impl Into<String>) {
        self.voice_note = Some(uri.into());
    }

    pub fn clear_voice_note(&mut self) {
        self.voice_note = None;
    }

    /// True when at least one of photo, voice note or description is present.
    pub fn has_content(&self) -> bool {
        !self.images.is_empty() || self.voice_note.is_some() || !self.description.trim().is_empty()
    }

    /// Checks the draft and produces the receipt shown after sending.
    pub fn submit(&self) -> ValidationResult<PrescriptionReceipt> {
        if !self.has_content() {
            return Err(ValidationError::MissingInformation {
                message: MISSING_INFORMATION.to_string(),
            });
        }

        Ok(PrescriptionReceipt {
            prescription_id: self.id,
            image_count: self.images.len(),
            has_voice_note: self.voice_note.is_some(),
            description: self.description.trim().to_string(),
            submitted_at: Utc::now(),
            title: RECEIPT_TITLE.to_string(),
            message: RECEIPT_MESSAGE.to_string(),
            next_route: Route::Cart,
        })
    }
}

impl Default for PrescriptionDraft {
    fn default() -> Self {
        Self::new()
    }
}

/// Confirmation for an accepted prescription.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct PrescriptionReceipt {
    #[ts(as = "String")]
    pub prescription_id: Uuid,
    pub image_count: usize,
    pub has_voice_note: bool,
    pub description: String,
    #[ts(as = "String")]
    pub submitted_at: DateTime<Utc>,
    /// Confirmation alert heading.
    pub title: String,
    /// Confirmation alert body.
    pub message: String,
    /// Where the app goes once the user acknowledges the receipt.
    pub next_route: Route,
}

/// Recording timer text, `m:ss`.
pub fn format_recording_time(seconds: u64) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}

// =============================================================================
// Unit Tests
// =============================================================================
