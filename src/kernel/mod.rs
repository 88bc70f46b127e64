//! Headless sponsorship core (catalog/state/action/effect).

pub mod action;
pub mod catalog;
pub mod effect;
pub mod services;
pub mod state;
pub mod store;

pub use action::Action;
pub use catalog::{Amount, Benefit, Catalog, CatalogError, OptionId, SponsorOption};
pub use effect::Effect;
pub use state::{AppState, SelectionState, SelectionView, UiState};
pub use store::{DispatchResult, Store};
