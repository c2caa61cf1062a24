//! JSON bridge between a browser shim and the application state.
//!
//! The shim serializes each DOM interaction as an [`Event`] object (the
//! rendered markup carries them ready-made in `data-on-*` attributes),
//! passes it to [`Host::dispatch_json`], applies the returned actions in
//! order and, when asked to, replaces its root element with
//! [`Host::render`].
//!
//! # Example
//!
//! ```
//! use roster::{Config, Host};
//!
//! let mut host = Host::new(&Config { seed: Some(1), ..Default::default() });
//! let reply = host.dispatch_json(r#"{"type":"navigate","path":"/"}"#)?;
//! assert_eq!(reply, r#"{"shouldRender":true,"actions":[{"type":"navigate","path":"/login-page"}]}"#);
//! assert!(host.render().contains("login-form"));
//! # Ok::<(), roster::RosterError>(())
//! ```

use crate::app::{handle_event, Action, AppState, Event};
use crate::domain::error::Result;
use crate::ui::render;
use crate::{initialize, Config};
use serde::Serialize;

/// Reply to one dispatched event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HostResponse {
    pub should_render: bool,
    pub actions: Vec<Action>,
}

/// Owns the application state for the lifetime of the page.
#[derive(Debug)]
pub struct Host {
    state: AppState,
}

impl Host {
    /// Seeds and configures a fresh state; see [`initialize`].
    #[must_use]
    pub fn new(config: &Config) -> Self {
        Self::from_state(initialize(config))
    }

    #[must_use]
    pub const fn from_state(state: AppState) -> Self {
        Self { state }
    }

    /// Runs one event through [`handle_event`].
    ///
    /// # Errors
    ///
    /// Propagates handler errors (a commit against a deleted employee).
    pub fn dispatch(&mut self, event: &Event) -> Result<HostResponse> {
        let (should_render, actions) = handle_event(&mut self.state, event)?;
        Ok(HostResponse { should_render, actions })
    }

    /// Deserializes `payload` as an [`Event`], dispatches it and serializes
    /// the [`HostResponse`].
    ///
    /// # Errors
    ///
    /// Returns [`RosterError::Json`](crate::RosterError::Json) for a payload
    /// that is not a known event, or any error from [`Host::dispatch`].
    pub fn dispatch_json(&mut self, payload: &str) -> Result<String> {
        let event: Event = serde_json::from_str(payload).map_err(|e| {
            tracing::debug!(error = %e, "rejected host payload");
            e
        })?;
        let response = self.dispatch(&event)?;
        Ok(serde_json::to_string(&response)?)
    }

    /// Markup for the current state.
    #[must_use]
    pub fn render(&self) -> String {
        render(&self.state)
    }

    #[must_use]
    pub const fn state(&self) -> &AppState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut AppState {
        &mut self.state
    }
}
