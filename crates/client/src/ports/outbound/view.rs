//! View command port.
//!
//! The preferences panel is an external collaborator: the controller
//! emits commands through this port and never touches UI elements
//! directly. Not every page includes every UI piece, so adapters return
//! `MissingViewElement` for absent elements; the controller logs that
//! and carries on - a missing panel must never abort a transaction.

use consentr_domain::{ConsentDecision, ConsentError};

/// Commands the controller sends to the preferences panel.
#[cfg_attr(test, mockall::automock)]
pub trait ViewPort: Send + Sync {
    /// Make the preferences panel visible.
    fn show_panel(&self) -> Result<(), ConsentError>;

    /// Hide the preferences panel.
    fn hide_panel(&self) -> Result<(), ConsentError>;

    /// Reflect the given values in the three category checkboxes.
    fn set_checkboxes(&self, values: &ConsentDecision) -> Result<(), ConsentError>;
}
