//! State transition history tracking.
//!
//! An immutable log of what a widget did and why. Recording returns a new
//! history rather than mutating the old one.

use super::state::State;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Record of a single effective state transition.
///
/// # Example
///
/// ```rust
/// use pagewire::core::{State, StateTransition};
/// use serde::{Deserialize, Serialize};
/// use chrono::Utc;
///
/// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
/// enum Tab {
///     Left,
///     Right,
/// }
///
/// impl State for Tab {
///     fn name(&self) -> &str {
///         match self {
///             Self::Left => "Left",
///             Self::Right => "Right",
///         }
///     }
/// }
///
/// let transition = StateTransition {
///     from: Tab::Left,
///     to: Tab::Right,
///     trigger: "arrow-key".to_string(),
///     timestamp: Utc::now(),
/// };
/// assert_eq!(transition.trigger, "arrow-key");
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateTransition<S: State> {
    /// The state being left
    pub from: S,
    /// The state being entered
    pub to: S,
    /// Label of the user action that caused the move
    pub trigger: String,
    /// When the transition occurred
    pub timestamp: DateTime<Utc>,
}

/// Ordered history of state transitions.
///
/// # Example
///
/// ```rust
/// use pagewire::core::StateHistory;
/// use pagewire::menu::MenuState;
///
/// let history: StateHistory<MenuState> = StateHistory::new();
/// assert!(history.transitions().is_empty());
/// assert!(history.get_path().is_empty());
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateHistory<S: State> {
    transitions: Vec<StateTransition<S>>,
}

impl<S: State> Default for StateHistory<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: State> StateHistory<S> {
    /// Create a new empty history.
    pub fn new() -> Self {
        Self {
            transitions: Vec::new(),
        }
    }

    /// Record a transition, returning a new history.
    ///
    /// The receiver is left untouched.
    pub fn record(&self, transition: StateTransition<S>) -> Self {
        let mut transitions = self.transitions.clone();
        transitions.push(transition);
        Self { transitions }
    }

    /// Get the path of states traversed.
    ///
    /// The first element is the `from` state of the first transition,
    /// followed by the `to` state of every transition in order.
    pub fn get_path(&self) -> Vec<&S> {
        let mut path = Vec::new();
        if let Some(first) = self.transitions.first() {
            path.push(&first.from);
        }
        for transition in &self.transitions {
            path.push(&transition.to);
        }
        path
    }

    /// Get all transitions in recording order.
    pub fn transitions(&self) -> &[StateTransition<S>] {
        &self.transitions
    }

    /// The most recent transition, if any.
    pub fn last(&self) -> Option<&StateTransition<S>> {
        self.transitions.last()
    }

    /// Count the transitions caused by a given trigger label.
    pub fn count_by_trigger(&self, trigger: &str) -> usize {
        self.transitions
            .iter()
            .filter(|t| t.trigger == trigger)
            .count()
    }
}
