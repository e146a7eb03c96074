//! Consent controller.
//!
//! One controller is constructed per page load with its store,
//! dispatcher, and view port injected; there is no global state. Each
//! public operation is a complete synchronous transaction triggered by
//! one discrete UI event, so no two mutating operations can interleave.
//!
//! Every mutating operation follows the same ordering guarantee:
//! persist-to-store happens-before dispatch-to-sinks happens-before
//! view-close. A sink that reads the store mid-dispatch sees the new
//! values, and the panel never closes before sinks have been notified.

use std::sync::Arc;

use consentr_domain::{ConsentCategory, ConsentDecision, ConsentError, ConsentState};

use crate::infrastructure::SignalDispatcher;
use crate::ports::outbound::{StorageProvider, ViewPort};

use super::events::ViewEvent;
use super::store::ConsentStore;

/// Orchestrates consent state, persistence, signal dispatch, and view
/// commands for one page load.
pub struct ConsentController<S: StorageProvider> {
    store: ConsentStore<S>,
    dispatcher: SignalDispatcher,
    view: Arc<dyn ViewPort>,
    state: ConsentState,
}

impl<S: StorageProvider> ConsentController<S> {
    /// Create a controller with its collaborators injected.
    ///
    /// Register all sinks on the dispatcher before constructing the
    /// controller; registration is declarative wiring, not runtime
    /// configuration.
    pub fn new(storage: S, dispatcher: SignalDispatcher, view: Arc<dyn ViewPort>) -> Self {
        Self {
            store: ConsentStore::new(storage),
            dispatcher,
            view,
            state: ConsentState::undecided(),
        }
    }

    /// Page-load entry point: hydrate state and either open the panel
    /// (undecided) or re-assert the stored decision to sinks (decided).
    ///
    /// Sinks are loaded fresh on every page view and have no memory of
    /// prior loads, so a returning user's decision is re-dispatched
    /// even though nothing changed. An undecided user's display
    /// defaults are never dispatched: broadcasting "denied" for someone
    /// who has not chosen would be a wrong signal, not a safe one.
    pub fn initialize(&mut self) {
        self.state = self.store.hydrate_state();
        self.view_command(self.view.set_checkboxes(&self.state.display_values()));

        match self.state.decision() {
            Some(decision) => {
                tracing::debug!("prior consent found, re-asserting to sinks");
                self.dispatcher.dispatch(&decision);
            }
            None => {
                tracing::info!("no prior consent found, opening preferences panel");
                self.view_command(self.view.show_panel());
            }
        }
    }

    /// Deny every category.
    pub fn deny_all(&mut self) {
        self.apply(ConsentDecision::deny_all());
    }

    /// Grant every category.
    pub fn allow_all(&mut self) {
        self.apply(ConsentDecision::allow_all());
    }

    /// Persist the checkbox snapshot exactly as submitted, including
    /// categories the user left at their displayed default.
    pub fn save_selection(&mut self, selection: ConsentDecision) {
        self.apply(selection);
    }

    /// Show the panel. Pure view signal; no state mutation, no dispatch.
    pub fn open_preferences(&self) {
        self.view_command(self.view.show_panel());
    }

    /// Hide the panel. Pure view signal; no state mutation, no dispatch.
    pub fn close_preferences(&self) {
        self.view_command(self.view.hide_panel());
    }

    /// Map an inbound view event onto its operation.
    pub fn handle_event(&mut self, event: ViewEvent) {
        match event {
            ViewEvent::DenyAllClicked => self.deny_all(),
            ViewEvent::AllowAllClicked => self.allow_all(),
            ViewEvent::SaveClicked(selection) => self.save_selection(selection),
            ViewEvent::CloseClicked => self.close_preferences(),
            ViewEvent::OpenPreferencesClicked => self.open_preferences(),
        }
    }

    /// Current in-memory state (for the wiring layer).
    pub fn state(&self) -> &ConsentState {
        &self.state
    }

    pub fn is_decided(&self) -> bool {
        self.state.is_complete()
    }

    /// The shared mutating transaction. Ordering here is the contract:
    /// persist, then state, then dispatch, then view.
    fn apply(&mut self, decision: ConsentDecision) {
        for category in ConsentCategory::ALL {
            self.store.set(category, decision.get(category));
        }
        self.state.apply_decision(decision);
        self.dispatcher.dispatch(&decision);
        self.view_command(self.view.set_checkboxes(&decision));
        self.view_command(self.view.hide_panel());
    }

    /// View commands degrade to logged no-ops when an element is absent;
    /// not every page includes every UI piece.
    fn view_command(&self, result: Result<(), ConsentError>) {
        if let Err(e) = result {
            tracing::debug!("view command skipped: {e}");
        }
    }
}
