//! Per-page-load consent state machine.
//!
//! State is rebuilt once per page load by hydrating from storage and is
//! mutated in place by user actions. Two states exist:
//!
//! - **Undecided**: at least one category was absent at hydration and no
//!   full decision has been applied since. The preferences panel must be
//!   shown and nothing may be dispatched to sinks.
//! - **Decided**: all three categories were present at hydration, or a
//!   full decision has been applied. Re-applying a decision keeps the
//!   state Decided (values may change).
//!
//! There is no terminal state; the machine resets only across page loads
//! by re-hydrating from storage.
//!
//! Absent categories display-default to `false` for checkbox pre-fill,
//! but that default never counts toward "decided": completeness is based
//! strictly on key presence in the store, not on values.

use crate::category::ConsentCategory;
use crate::decision::ConsentDecision;

/// In-memory consent state: a partial decision plus completeness.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConsentState {
    functional: Option<bool>,
    marketing: Option<bool>,
    analytics: Option<bool>,
}

impl ConsentState {
    /// Build state from the three stored values as read at page load.
    ///
    /// `None` means the key was absent (or unreadable, which is treated
    /// the same way).
    pub fn hydrate(
        functional: Option<bool>,
        marketing: Option<bool>,
        analytics: Option<bool>,
    ) -> Self {
        Self {
            functional,
            marketing,
            analytics,
        }
    }

    /// State for a user who has never interacted with the consent panel.
    pub fn undecided() -> Self {
        Self::hydrate(None, None, None)
    }

    /// The stored value for one category, if it was ever decided.
    pub fn get(&self, category: ConsentCategory) -> Option<bool> {
        match category {
            ConsentCategory::Functional => self.functional,
            ConsentCategory::Marketing => self.marketing,
            ConsentCategory::Analytics => self.analytics,
        }
    }

    /// True iff every category has a value.
    ///
    /// An explicit all-false decision is complete; three absent keys are
    /// not, even though both display identically.
    pub fn is_complete(&self) -> bool {
        self.functional.is_some() && self.marketing.is_some() && self.analytics.is_some()
    }

    /// The full decision, available only once the state is complete.
    ///
    /// Sinks must only ever receive this; `display_values()` is for
    /// checkboxes and must never be dispatched.
    pub fn decision(&self) -> Option<ConsentDecision> {
        Some(ConsentDecision::new(
            self.functional?,
            self.marketing?,
            self.analytics?,
        ))
    }

    /// Checkbox pre-fill values: absent categories default to unchecked.
    pub fn display_values(&self) -> ConsentDecision {
        ConsentDecision::new(
            self.functional.unwrap_or(false),
            self.marketing.unwrap_or(false),
            self.analytics.unwrap_or(false),
        )
    }

    /// Overwrite all three categories and mark the state complete.
    ///
    /// This is the only transition: Undecided -> Decided on first apply,
    /// Decided -> Decided on re-submission from a reopened panel. No
    /// partial apply is exposed.
    pub fn apply_decision(&mut self, decision: ConsentDecision) {
        self.functional = Some(decision.functional);
        self.marketing = Some(decision.marketing);
        self.analytics = Some(decision.analytics);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_state_is_incomplete() {
        let state = ConsentState::undecided();
        assert!(!state.is_complete());
        assert!(state.decision().is_none());
    }

    #[test]
    fn test_one_absent_category_is_incomplete() {
        let state = ConsentState::hydrate(Some(true), None, Some(true));
        assert!(!state.is_complete());
        assert!(state.decision().is_none());
    }

    #[test]
    fn test_all_false_is_complete_and_distinct_from_undecided() {
        let denied = ConsentState::hydrate(Some(false), Some(false), Some(false));
        assert!(denied.is_complete());
        assert_eq!(denied.decision(), Some(ConsentDecision::deny_all()));

        let undecided = ConsentState::undecided();
        assert!(!undecided.is_complete());
        // Both display all-unchecked, but only one is decided.
        assert_eq!(denied.display_values(), undecided.display_values());
    }

    #[test]
    fn test_display_values_default_absent_to_false() {
        let state = ConsentState::hydrate(Some(true), None, None);
        assert_eq!(
            state.display_values(),
            ConsentDecision::new(true, false, false)
        );
    }

    #[test]
    fn test_apply_decision_marks_complete() {
        let mut state = ConsentState::undecided();
        state.apply_decision(ConsentDecision::new(true, false, true));

        assert!(state.is_complete());
        assert_eq!(
            state.decision(),
            Some(ConsentDecision::new(true, false, true))
        );
    }

    #[test]
    fn test_reapply_is_reentrant_and_values_may_change() {
        let mut state = ConsentState::hydrate(Some(true), Some(true), Some(true));
        assert!(state.is_complete());

        state.apply_decision(ConsentDecision::deny_all());
        assert!(state.is_complete());
        assert_eq!(state.decision(), Some(ConsentDecision::deny_all()));
    }

    #[test]
    fn test_get_reports_per_category_presence() {
        let state = ConsentState::hydrate(Some(false), None, Some(true));
        assert_eq!(state.get(ConsentCategory::Functional), Some(false));
        assert_eq!(state.get(ConsentCategory::Marketing), None);
        assert_eq!(state.get(ConsentCategory::Analytics), Some(true));
    }
}
