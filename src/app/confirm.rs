//! Two-phase confirmation state machine.
//!
//! A destructive or committing action is first staged, then either
//! confirmed or cancelled before anything touches the store:
//!
//! ```text
//! Idle ──stage──▶ Staged(T) ──confirm──▶ Confirmed(T) ──take_confirmed──▶ Idle
//!                     │
//!                     └──cancel──▶ Cancelled ──stage──▶ Staged(T)
//! ```
//!
//! [`Confirmation`] only tracks the phase and the prompt text; the caller
//! decides what confirming a target means.

use serde::Serialize;

/// Current phase of a [`Confirmation`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Phase<T> {
    Idle,
    /// Awaiting the user's decision.
    Staged(T),
    /// Confirmed and being processed; the dialog stays open with a
    /// processing label until the target is taken.
    Confirmed(T),
    Cancelled,
}

/// Text shown by the confirmation dialog.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Prompt {
    pub message: String,
    pub confirm_label: String,
}

impl Prompt {
    #[must_use]
    pub fn new(message: impl Into<String>, confirm_label: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            confirm_label: confirm_label.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Confirmation<T> {
    phase: Phase<T>,
    prompt: Prompt,
}

impl<T> Default for Confirmation<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Confirmation<T> {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            phase: Phase::Idle,
            prompt: Prompt {
                message: String::new(),
                confirm_label: String::new(),
            },
        }
    }

    /// Stages `target` for confirmation, replacing any earlier stage.
    ///
    /// Ignored while a confirmed target is still being processed.
    pub fn stage(&mut self, target: T, prompt: Prompt) {
        if self.is_submitting() {
            tracing::debug!("confirmation busy, ignoring new stage");
            return;
        }
        self.phase = Phase::Staged(target);
        self.prompt = prompt;
    }

    /// Moves a staged target to confirmed. Returns `false` if nothing was
    /// staged.
    pub fn confirm(&mut self) -> bool {
        match std::mem::replace(&mut self.phase, Phase::Idle) {
            Phase::Staged(target) => {
                self.phase = Phase::Confirmed(target);
                true
            }
            other => {
                self.phase = other;
                false
            }
        }
    }

    /// Drops a staged target. A confirmed target cannot be cancelled.
    pub fn cancel(&mut self) -> bool {
        if matches!(self.phase, Phase::Staged(_)) {
            self.phase = Phase::Cancelled;
            true
        } else {
            false
        }
    }

    /// Takes the confirmed target and returns to idle.
    pub fn take_confirmed(&mut self) -> Option<T> {
        match std::mem::replace(&mut self.phase, Phase::Idle) {
            Phase::Confirmed(target) => Some(target),
            other => {
                self.phase = other;
                None
            }
        }
    }

    pub fn reset(&mut self) {
        self.phase = Phase::Idle;
    }

    /// Whether the dialog is visible.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        matches!(self.phase, Phase::Staged(_) | Phase::Confirmed(_))
    }

    /// Whether the confirm button is disabled with a processing label.
    #[must_use]
    pub const fn is_submitting(&self) -> bool {
        matches!(self.phase, Phase::Confirmed(_))
    }

    #[must_use]
    pub const fn phase(&self) -> &Phase<T> {
        &self.phase
    }

    /// The staged or confirmed target.
    #[must_use]
    pub const fn target(&self) -> Option<&T> {
        match &self.phase {
            Phase::Staged(target) | Phase::Confirmed(target) => Some(target),
            Phase::Idle | Phase::Cancelled => None,
        }
    }

    #[must_use]
    pub const fn prompt(&self) -> &Prompt {
        &self.prompt
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prompt() -> Prompt {
        Prompt::new("Are you sure?", "Delete")
    }

    #[test]
    fn test_stage_confirm_take() {
        let mut confirmation = Confirmation::new();
        confirmation.stage(7u32, prompt());
        assert!(confirmation.is_open());
        assert!(!confirmation.is_submitting());

        assert!(confirmation.confirm());
        assert!(confirmation.is_submitting());
        assert_eq!(confirmation.take_confirmed(), Some(7));
        assert_eq!(confirmation.phase(), &Phase::Idle);
        assert!(!confirmation.is_open());
    }

    #[test]
    fn test_cancel_drops_target() {
        let mut confirmation = Confirmation::new();
        confirmation.stage("row", prompt());
        assert!(confirmation.cancel());
        assert_eq!(confirmation.phase(), &Phase::Cancelled);
        assert!(confirmation.target().is_none());
        assert!(!confirmation.confirm());
        assert_eq!(confirmation.take_confirmed(), None);
    }

    #[test]
    fn test_confirm_without_stage_is_noop() {
        let mut confirmation: Confirmation<u8> = Confirmation::new();
        assert!(!confirmation.confirm());
        assert!(!confirmation.cancel());
        assert_eq!(confirmation.phase(), &Phase::Idle);
    }

    #[test]
    fn test_confirmed_target_cannot_be_cancelled_or_restaged() {
        let mut confirmation = Confirmation::new();
        confirmation.stage(1u8, prompt());
        confirmation.confirm();
        assert!(!confirmation.cancel());
        confirmation.stage(2, prompt());
        assert_eq!(confirmation.target(), Some(&1));
    }

    #[test]
    fn test_restage_replaces_target_and_prompt() {
        let mut confirmation = Confirmation::new();
        confirmation.stage(1u8, prompt());
        confirmation.stage(2, Prompt::new("Other", "Update"));
        assert_eq!(confirmation.target(), Some(&2));
        assert_eq!(confirmation.prompt().confirm_label, "Update");
    }
}
