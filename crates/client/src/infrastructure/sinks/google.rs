//! Google Consent Mode v2 sink (gtag shim over the GTM data layer).

use consentr_domain::{ConsentDecision, ConsentError};
use serde_json::json;

use crate::ports::outbound::{ConsentSink, SignalTransport};

use super::signal;

/// Translates a decision into Consent Mode v2 signals.
///
/// Pushes two events onto the data layer, mirroring the gtag shim:
/// a `["consent", "update", {..}]` call-arguments array mapping the
/// three toggles onto Consent Mode storage signals, then a diagnostic
/// `update_consent_status_v2` event with the raw booleans.
/// `security_storage` is strictly necessary and is never sent.
pub struct GoogleConsentModeSink<T: SignalTransport> {
    transport: T,
}

impl<T: SignalTransport> GoogleConsentModeSink<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }
}

impl<T: SignalTransport> ConsentSink for GoogleConsentModeSink<T> {
    fn name(&self) -> &'static str {
        "google-consent-mode"
    }

    fn apply(&self, decision: &ConsentDecision) -> Result<(), ConsentError> {
        self.transport.push(json!([
            "consent",
            "update",
            {
                "ad_storage": signal(decision.marketing),
                "ad_user_data": signal(decision.marketing),
                "ad_personalization": signal(decision.marketing),
                "analytics_storage": signal(decision.analytics),
                "functionality_storage": signal(decision.functional),
            }
        ]))?;

        self.transport.push(json!({
            "event": "update_consent_status_v2",
            "functional": decision.functional,
            "marketing": decision.marketing,
            "analytics": decision.analytics,
        }))
    }
}
