//! User interface rendering layer with component-based architecture.
//!
//! This module turns application state into an HTML fragment through
//! composable rendering components, with the palette emitted as CSS custom
//! properties.
//!
//! # Architecture
//!
//! The UI layer follows a declarative rendering model:
//!
//! ```text
//! AppState → compute_viewmodel → UIViewModel → render → HTML
//! ```
//!
//! # Modules
//!
//! - [`viewmodel`]: View model types representing renderable UI state
//! - [`renderer`]: Top-level rendering coordinator
//! - [`components`]: Composable UI component renderers
//! - [`helpers`]: Escaping and event attribute helpers
//! - [`theme`]: Color scheme definitions and CSS variable generation

pub mod components;
pub mod helpers;
pub mod renderer;
pub mod theme;
pub mod viewmodel;

pub use renderer::{render, render_viewmodel};
pub use theme::Theme;
pub use viewmodel::{
    ConfirmationInfo, DisplayItem, EmptyState, FormModalInfo, HeaderInfo, ListInfo, PageView, SearchBarInfo,
    UIViewModel,
};
