//! Consent decision value object.

use serde::{Deserialize, Serialize};

use crate::category::ConsentCategory;

/// A complete consent decision: one boolean per category.
///
/// There is deliberately no `Default` implementation. An all-false
/// decision means "the user denied everything", which is a real choice;
/// defaulting to it would make an undecided user indistinguishable from
/// one who opted out. Callers must construct decisions explicitly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsentDecision {
    pub functional: bool,
    pub marketing: bool,
    pub analytics: bool,
}

impl ConsentDecision {
    pub fn new(functional: bool, marketing: bool, analytics: bool) -> Self {
        Self {
            functional,
            marketing,
            analytics,
        }
    }

    /// Every category granted ("allow all" button).
    pub fn allow_all() -> Self {
        Self::new(true, true, true)
    }

    /// Every category denied ("deny all" button). Still a decided state.
    pub fn deny_all() -> Self {
        Self::new(false, false, false)
    }

    pub fn get(&self, category: ConsentCategory) -> bool {
        match category {
            ConsentCategory::Functional => self.functional,
            ConsentCategory::Marketing => self.marketing,
            ConsentCategory::Analytics => self.analytics,
        }
    }

    pub fn set(&mut self, category: ConsentCategory, granted: bool) {
        match category {
            ConsentCategory::Functional => self.functional = granted,
            ConsentCategory::Marketing => self.marketing = granted,
            ConsentCategory::Analytics => self.analytics = granted,
        }
    }
}
