//! Storage layer holding the employee collection and list view state.
//!
//! Everything lives in memory; a fresh store is seeded with synthetic
//! employees and nothing survives the session.
//!
//! # Modules
//!
//! - `store`: the [`EmployeeStore`] with mutations, filtering and subscriptions
//! - `seed`: synthetic employee generator

pub mod seed;
pub mod store;

pub use seed::generate_employees;
pub use store::{
    EmployeeStore, FilteredPage, ListSnapshot, SubscriptionId, ViewType, DEFAULT_ITEMS_PER_PAGE,
};
