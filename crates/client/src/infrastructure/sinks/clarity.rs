//! Microsoft Clarity Consent API v2 sink.

use consentr_domain::{ConsentDecision, ConsentError};
use serde_json::json;

use crate::ports::outbound::{ConsentSink, SignalTransport};

use super::signal;

/// Translates a decision into a `clarity('consentv2', {..})` call.
///
/// Clarity only cares about two of the three categories: marketing maps
/// to `ad_Storage` and analytics to `analytics_Storage` (the mixed
/// casing is Clarity's own). Functional consent is not part of its API.
/// When the `clarity` function is not loaded the transport reports
/// `SinkUnavailable`; the dispatcher logs that and moves on.
pub struct ClaritySink<T: SignalTransport> {
    transport: T,
}

impl<T: SignalTransport> ClaritySink<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }
}

impl<T: SignalTransport> ConsentSink for ClaritySink<T> {
    fn name(&self) -> &'static str {
        "clarity"
    }

    fn apply(&self, decision: &ConsentDecision) -> Result<(), ConsentError> {
        self.transport.push(json!([
            "consentv2",
            {
                "ad_Storage": signal(decision.marketing),
                "analytics_Storage": signal(decision.analytics),
            }
        ]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::platform::mock::RecordingTransport;
    use crate::ports::outbound::MockSignalTransport;

    #[test]
    fn test_maps_marketing_and_analytics_only() {
        let transport = RecordingTransport::default();
        let sink = ClaritySink::new(transport.clone());

        sink.apply(&ConsentDecision::new(true, false, true))
            .expect("transport records");

        let events = transport.events();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0][0], "consentv2");

        let payload = &events[0][1];
        assert_eq!(payload["ad_Storage"], "denied");
        assert_eq!(payload["analytics_Storage"], "granted");
        assert!(payload.get("functionality_storage").is_none());
    }

    #[test]
    fn test_missing_clarity_api_surfaces_sink_unavailable() {
        let mut transport = MockSignalTransport::new();
        transport.expect_push().returning(|_| {
            Err(ConsentError::sink_unavailable(
                "clarity",
                "clarity() not found at time of call",
            ))
        });

        let sink = ClaritySink::new(transport);
        let err = sink.apply(&ConsentDecision::allow_all()).unwrap_err();
        assert!(matches!(err, ConsentError::SinkUnavailable { .. }));
    }
}
