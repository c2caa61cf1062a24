//! Application layer coordinating state, events, and actions.
//!
//! This module sits between the host bridge ([`crate::host`]) and the
//! domain/storage layers. It implements the event-driven architecture that
//! powers the employee management UI.
//!
//! # Architecture
//!
//! ```text
//! DOM Input → Events → Event Handler → Store / Component Mutations → Actions → Host
//!                           ↑                                          ↓
//!                           └──────────── Event::Commit ───────────────┘
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands emitted by the event handler
//! - [`confirm`]: Two-phase confirmation state machine
//! - [`form`]: Create/edit form modal
//! - [`handler`]: Event processing logic and state transition coordinator
//! - [`header`]: Navigation bar and language popup
//! - [`list`]: Employee list component bound to the store
//! - [`pagination`]: Page window computation
//! - [`router`]: Path to view resolution
//! - [`state`]: Central application state container and view model computation

pub mod actions;
pub mod confirm;
pub mod form;
pub mod handler;
pub mod header;
pub mod list;
pub mod pagination;
pub mod router;
pub mod state;

pub use actions::Action;
pub use confirm::{Confirmation, Phase, Prompt};
pub use form::{CommitOutcome, FormMode, FormModal, ModalId, SubmitOutcome};
pub use handler::{handle_event, Event};
pub use header::HeaderState;
pub use list::{DeleteTarget, EmployeeListView};
pub use pagination::{PageControl, PaginationWindow};
pub use router::Route;
pub use state::AppState;
