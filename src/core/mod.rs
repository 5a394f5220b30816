//! Core state machine types.
//!
//! This module contains the pure pieces shared by the page widgets:
//! - State values via the `State` trait
//! - Guard predicates for transition control
//! - Immutable history tracking
//!
//! Nothing here touches the document.

mod guard;
mod history;
mod state;

pub use guard::Guard;
pub use history::{StateHistory, StateTransition};
pub use state::State;
