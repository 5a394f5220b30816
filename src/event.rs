//! User input events delivered to the page widgets.

use crate::dom::NodeId;
use serde::{Deserialize, Serialize};

/// Kind of event, used to register listeners.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventKind {
    Click,
    KeyDown,
    Submit,
    Input,
}

/// A discrete user action.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum UiEvent {
    /// Pointer click on the innermost element under the pointer
    Click { target: NodeId },
    /// Key press anywhere in the document; `key` follows `KeyboardEvent.key`
    KeyDown { key: String },
    /// Submit attempt on a form
    Submit { form: NodeId },
    /// Text edit in a form control
    Input { target: NodeId },
}

impl UiEvent {
    pub fn kind(&self) -> EventKind {
        match self {
            Self::Click { .. } => EventKind::Click,
            Self::KeyDown { .. } => EventKind::KeyDown,
            Self::Submit { .. } => EventKind::Submit,
            Self::Input { .. } => EventKind::Input,
        }
    }

    /// The element the event was dispatched at, if it has one.
    pub fn target(&self) -> Option<NodeId> {
        match self {
            Self::Click { target } | Self::Input { target } => Some(*target),
            Self::Submit { form } => Some(*form),
            Self::KeyDown { .. } => None,
        }
    }

    pub fn key_down(key: impl Into<String>) -> Self {
        Self::KeyDown { key: key.into() }
    }
}
