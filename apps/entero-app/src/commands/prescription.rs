//! # Prescription Commands
//!
//! The Add Prescription form. Photo capture and audio recording happen on
//! the device; these commands only receive the resulting URIs.

use entero_core::{PrescriptionDraft, PrescriptionReceipt, ValidationError};
use tracing::{debug, info, warn};

use crate::error::ApiError;
use crate::state::{NavigationState, PrescriptionState};

pub fn get_draft(prescription: &PrescriptionState) -> PrescriptionDraft {
    prescription.with_draft(|d| d.clone())
}

pub fn set_description(prescription: &PrescriptionState, description: String) -> PrescriptionDraft {
    prescription.with_draft_mut(|d| {
        d.set_description(description);
        d.clone()
    })
}

pub fn add_image(prescription: &PrescriptionState, uri: String) -> PrescriptionDraft {
    debug!(uri = %uri, "add_image command");
    prescription.with_draft_mut(|d| {
        d.add_image(uri);
        d.clone()
    })
}

/// Removes the image at `index`; out-of-range indexes change nothing.
pub fn remove_image(prescription: &PrescriptionState, index: usize) -> PrescriptionDraft {
    prescription.with_draft_mut(|d| {
        if d.remove_image(index).is_none() {
            debug!(index, "remove_image index out of range");
        }
        d.clone()
    })
}

pub fn attach_voice_note(prescription: &PrescriptionState, uri: String) -> PrescriptionDraft {
    debug!(uri = %uri, "attach_voice_note command");
    prescription.with_draft_mut(|d| {
        d.attach_voice_note(uri);
        d.clone()
    })
}

pub fn clear_voice_note(prescription: &PrescriptionState) -> PrescriptionDraft {
    prescription.with_draft_mut(|d| {
        d.clear_voice_note();
        d.clone()
    })
}

/// Submits the draft.
///
/// ## Behavior
/// - Nothing attached and no description: `VALIDATION_ERROR`, draft kept
/// - Otherwise: a receipt; the draft is reset and the app moves to the
///   receipt's next route (the cart)
pub fn submit_prescription(
    prescription: &PrescriptionState,
    nav: &NavigationState,
) -> Result<PrescriptionReceipt, ApiError> {
    let receipt = prescription
        .with_draft_mut(|d| {
            let receipt = d.submit()?;
            *d = PrescriptionDraft::new();
            Ok::<_, ValidationError>(receipt)
        })
        .map_err(|e| {
            warn!(error = %e, "submit_prescription rejected");
            ApiError::from(e)
        })?;

    nav.with_navigator_mut(|n| n.navigate(receipt.next_route.clone()));

    info!(
        prescription_id = %receipt.prescription_id,
        images = receipt.image_count,
        voice_note = receipt.has_voice_note,
        "Prescription submitted"
    );
    Ok(receipt)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use entero_core::Route;

    #[test]
    fn test_empty_submit_is_rejected() {
        let prescription = PrescriptionState::new();
        let nav = NavigationState::default();

        let err = submit_prescription(&prescription, &nav).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert!(err.message.starts_with("Missing information"));
        assert_eq!(nav.current(), Route::initial());
    }

    #[test]
    fn test_description_only_submit() {
        let prescription = PrescriptionState::new();
        let nav = NavigationState::default();
        nav.with_navigator_mut(|n| n.navigate(Route::AddPrescription));

        let submitted_id = set_description(&prescription, "Need Dolo 650".to_string()).id;
        let receipt = submit_prescription(&prescription, &nav).unwrap();

        assert_eq!(receipt.prescription_id, submitted_id);
        assert_eq!(nav.current(), Route::Cart);
        let json = serde_json::to_value(&receipt).unwrap();
        assert_eq!(json["title"], "Prescription Added");
        // A fresh draft replaces the submitted one.
        let draft = get_draft(&prescription);
        assert_ne!(draft.id, submitted_id);
        assert!(draft.description.is_empty());
    }

    #[test]
    fn test_image_editing() {
        let prescription = PrescriptionState::new();
        add_image(&prescription, "file:///a.jpg".to_string());
        add_image(&prescription, "file:///b.jpg".to_string());

        assert_eq!(remove_image(&prescription, 7).images.len(), 2);
        assert_eq!(remove_image(&prescription, 0).images, vec!["file:///b.jpg".to_string()]);

        attach_voice_note(&prescription, "file:///note.m4a".to_string());
        assert!(clear_voice_note(&prescription).voice_note.is_none());
    }
}
