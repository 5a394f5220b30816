//! Guard predicates for controlling state transitions.
//!
//! Guards are pure boolean functions that decide whether a transition may
//! fire from the current state. The menu uses them to turn its close
//! triggers into no-ops while it is already closed.

use super::state::State;
use std::fmt;
use std::sync::Arc;

/// Pure predicate that determines if a transition can execute.
///
/// # Example
///
/// ```rust
/// use pagewire::core::{Guard, State};
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
/// enum Panel {
///     Shut,
///     Showing,
/// }
///
/// impl State for Panel {
///     fn name(&self) -> &str {
///         match self {
///             Self::Shut => "Shut",
///             Self::Showing => "Showing",
///         }
///     }
/// }
///
/// let only_when_showing = Guard::new(|p: &Panel| matches!(p, Panel::Showing));
///
/// assert!(only_when_showing.check(&Panel::Showing));
/// assert!(!only_when_showing.check(&Panel::Shut));
/// ```
pub struct Guard<S: State> {
    predicate: Arc<dyn Fn(&S) -> bool + Send + Sync>,
}

impl<S: State> Guard<S> {
    /// Create a guard from a pure predicate function.
    pub fn new<F>(predicate: F) -> Self
    where
        F: Fn(&S) -> bool + Send + Sync + 'static,
    {
        Guard {
            predicate: Arc::new(predicate),
        }
    }

    /// Check if the guard allows a transition from this state.
    pub fn check(&self, state: &S) -> bool {
        (self.predicate)(state)
    }
}

impl<S: State> Clone for Guard<S> {
    fn clone(&self) -> Self {
        Self {
            predicate: Arc::clone(&self.predicate),
        }
    }
}

impl<S: State> fmt::Debug for Guard<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Guard").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};

    #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
    enum Lamp {
        Off,
        On,
        Broken,
    }

    impl State for Lamp {
        fn name(&self) -> &str {
            match self {
                Self::Off => "Off",
                Self::On => "On",
                Self::Broken => "Broken",
            }
        }

        fn is_final(&self) -> bool {
            matches!(self, Self::Broken)
        }
    }

    #[test]
    fn guard_allows_matching_states() {
        let guard = Guard::new(|s: &Lamp| matches!(s, Lamp::On));

        assert!(guard.check(&Lamp::On));
        assert!(!guard.check(&Lamp::Off));
    }

    #[test]
    fn guard_rejects_final_states() {
        let guard = Guard::new(|s: &Lamp| !s.is_final());

        assert!(guard.check(&Lamp::Off));
        assert!(guard.check(&Lamp::On));
        assert!(!guard.check(&Lamp::Broken));
    }

    #[test]
    fn cloned_guard_shares_predicate() {
        let guard = Guard::new(|s: &Lamp| matches!(s, Lamp::Off));
        let cloned = guard.clone();

        assert_eq!(guard.check(&Lamp::Off), cloned.check(&Lamp::Off));
        assert_eq!(guard.check(&Lamp::On), cloned.check(&Lamp::On));
    }
}
