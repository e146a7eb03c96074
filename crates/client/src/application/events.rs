//! Inbound view events.
//!
//! The wiring layer attaches click listeners to the page's buttons and
//! forwards one of these per click. The controller maps each event onto
//! exactly one operation; the wiring layer holds no consent logic.

use consentr_domain::ConsentDecision;

/// A user action emitted by the preferences panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewEvent {
    /// The "deny all" button was clicked.
    DenyAllClicked,
    /// The "allow all" button was clicked.
    AllowAllClicked,
    /// The "save" button was clicked. Carries a snapshot of the checkbox
    /// states at the moment of the click, not a live binding; boxes the
    /// user never touched arrive as their displayed default.
    SaveClicked(ConsentDecision),
    /// A close button was clicked. No persistence, no dispatch: a user
    /// who closes the panel without choosing stays undecided.
    CloseClicked,
    /// The "open preferences" button (outside the panel) was clicked.
    OpenPreferencesClicked,
}
