//! # Prescription State
//!
//! Holds the Add Prescription form between screen visits.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use entero_core::PrescriptionDraft;

#[derive(Debug, Clone, Default)]
pub struct PrescriptionState {
    draft: Arc<Mutex<PrescriptionDraft>>,
}

impl PrescriptionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_draft<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&PrescriptionDraft) -> R,
    {
        f(&*self.lock())
    }

    pub fn with_draft_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut PrescriptionDraft) -> R,
    {
        f(&mut *self.lock())
    }

    fn lock(&self) -> MutexGuard<'_, PrescriptionDraft> {
        self.draft.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
