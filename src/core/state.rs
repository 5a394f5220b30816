//! Core State trait for widget states.
//!
//! Every stateful widget on the page (the nav menu, a success notice)
//! describes its position with a value implementing this trait.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Trait for widget states.
///
/// All methods are pure. States are small immutable values; widgets swap
/// them wholesale instead of mutating flags in place.
///
/// # Required Traits
///
/// - `Clone`: states are copied into the transition history
/// - `PartialEq`: transitions compare the current state against a source
/// - `Debug` + `Serialize`: states show up in logs and diagnostics
///
/// # Example
///
/// ```rust
/// use pagewire::core::State;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
/// enum Drawer {
///     Collapsed,
///     Expanded,
/// }
///
/// impl State for Drawer {
///     fn name(&self) -> &str {
///         match self {
///             Self::Collapsed => "Collapsed",
///             Self::Expanded => "Expanded",
///         }
///     }
/// }
///
/// assert_eq!(Drawer::Expanded.name(), "Expanded");
/// assert!(!Drawer::Expanded.is_final());
/// ```
pub trait State:
    Clone + PartialEq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Get the state's name for logging.
    fn name(&self) -> &str;

    /// Check if this is a terminal state.
    ///
    /// A widget in a terminal state reacts to nothing further; a removed
    /// notice is the only such state on the page.
    ///
    /// Default implementation returns `false`.
    fn is_final(&self) -> bool {
        false
    }
}
