//! Global Application State
//!
//! Shared across views: the API client and the confirmation toast.

use leptos::*;

use crate::api::HttpApi;

/// Global application state provided to all components
#[derive(Clone)]
pub struct GlobalState {
    /// Client for the student collection
    pub api: HttpApi,
    /// Confirmation message (for toasts)
    pub success: RwSignal<Option<String>>,
}

/// Provide global state to the component tree
pub fn provide_global_state() {
    let state = GlobalState {
        api: HttpApi::from_env(),
        success: create_rw_signal(None),
    };

    provide_context(state);
}

impl GlobalState {
    /// Show a confirmation (auto-clears after timeout)
    pub fn show_success(&self, message: &str) {
        self.success.set(Some(message.to_string()));

        let success_signal = self.success;
        gloo_timers::callback::Timeout::new(3000, move || {
            success_signal.try_set(None);
        })
        .forget();
    }
}
