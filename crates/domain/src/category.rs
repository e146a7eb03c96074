//! Consent categories.
//!
//! The set of categories is fixed and closed: functional, marketing,
//! analytics. Each category maps to a stable storage key that external
//! consumers read directly, so the key strings are part of the public
//! contract and must never change.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ConsentError;

/// One of the three independent data-processing categories a user can
/// grant or deny.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConsentCategory {
    Functional,
    Marketing,
    Analytics,
}

impl ConsentCategory {
    /// All categories in their fixed display/persistence order.
    pub const ALL: [ConsentCategory; 3] = [
        ConsentCategory::Functional,
        ConsentCategory::Marketing,
        ConsentCategory::Analytics,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            ConsentCategory::Functional => "functional",
            ConsentCategory::Marketing => "marketing",
            ConsentCategory::Analytics => "analytics",
        }
    }

    /// The persisted key for this category.
    ///
    /// External consumers read these exact keys with literal
    /// `"true"`/`"false"` values; treat them as a wire format.
    pub const fn storage_key(&self) -> &'static str {
        match self {
            ConsentCategory::Functional => "functional_consent",
            ConsentCategory::Marketing => "marketing_consent",
            ConsentCategory::Analytics => "analytics_consent",
        }
    }
}

impl fmt::Display for ConsentCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ConsentCategory {
    type Err = ConsentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "functional" => Ok(ConsentCategory::Functional),
            "marketing" => Ok(ConsentCategory::Marketing),
            "analytics" => Ok(ConsentCategory::Analytics),
            _ => Err(ConsentError::parse(format!(
                "Unknown consent category: {s}"
            ))),
        }
    }
}
