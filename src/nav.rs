//! Navigation state: which phase the sidebar has selected.

use crate::error::{LogbookError, Result};
use crate::models::Phase;

/// Holds the single selected [`Phase`].
///
/// Starts at the first menu entry and changes only through [`select`](Self::select)
/// or [`select_phase`](Self::select_phase).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Navigator {
    current: Phase,
}

impl Navigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Phase {
        self.current
    }

    /// Select a phase by its menu label.
    ///
    /// Unknown labels fail with [`LogbookError::InvalidSelection`] and leave
    /// the current selection as it was.
    pub fn select(&mut self, label: &str) -> Result<Phase> {
        let phase = Phase::from_label(label)
            .ok_or_else(|| LogbookError::InvalidSelection(label.to_string()))?;
        self.select_phase(phase);
        Ok(phase)
    }

    pub fn select_phase(&mut self, phase: Phase) {
        if phase != self.current {
            tracing::debug!(from = self.current.slug(), to = phase.slug(), "Phase selected");
        }
        self.current = phase;
    }
}
