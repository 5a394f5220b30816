//! Side effects as data.
//!
//! Widget handlers never mutate the page. They return a list of `Effect`s,
//! and the site shell applies them: DOM changes go to a `Surface`, timers
//! go to the scheduler, one-shot listeners go to the listener registry.

use crate::dom::{Element, NodeId};
use crate::event::EventKind;
use crate::timer::TimerTask;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// How an element is addressed by an effect.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Target {
    /// An element that existed when the handler ran
    Node(NodeId),
    /// An element created by an earlier effect, found by its key
    Key(String),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScrollBehavior {
    Auto,
    Smooth,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScrollBlock {
    Start,
    Center,
    End,
    Nearest,
}

/// A change to the rendered page.
#[derive(Clone, Debug, PartialEq)]
pub enum DomEffect {
    /// Add (`on = true`) or remove a class
    SetClass {
        node: NodeId,
        class: String,
        on: bool,
    },
    SetAttribute {
        node: NodeId,
        name: String,
        value: String,
    },
    /// Set an inline style property; `None` clears it
    SetStyle {
        target: Target,
        property: String,
        value: Option<String>,
    },
    /// Insert a new element as the next sibling of `anchor`
    InsertAfter { anchor: NodeId, element: Element },
    AppendChild { parent: NodeId, element: Element },
    Remove { target: Target },
    /// Remove every descendant of `root` carrying `class`
    RemoveAll { root: NodeId, class: String },
    /// Clear the value of every form control under `form`
    ResetForm { form: NodeId },
    ScrollIntoView {
        node: NodeId,
        behavior: ScrollBehavior,
        block: ScrollBlock,
    },
}

/// What a listener does when it fires.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ListenerAction {
    /// Drop the error shown under a form field
    ClearFieldError { field: NodeId },
}

/// Everything a handler can ask the shell to do.
#[derive(Clone, Debug, PartialEq)]
pub enum Effect {
    Dom(DomEffect),
    /// Suppress the browser's default action for the current event
    PreventDefault,
    /// Run `task` once after `delay`
    Schedule { delay: Duration, task: TimerTask },
    /// Run `action` on the next `event` targeting `node`, then forget it
    ListenOnce {
        node: NodeId,
        event: EventKind,
        action: ListenerAction,
    },
    /// Forget pending one-shot listeners for `event` on `node`
    Unlisten { node: NodeId, event: EventKind },
}

impl From<DomEffect> for Effect {
    fn from(effect: DomEffect) -> Self {
        Effect::Dom(effect)
    }
}

/// A rendering surface that can apply DOM effects.
///
/// The in-memory `Document` is one; a browser binding would be another.
pub trait Surface {
    fn apply(&mut self, effect: &DomEffect);

    fn apply_all<'a, I>(&mut self, effects: I)
    where
        I: IntoIterator<Item = &'a DomEffect>,
    {
        for effect in effects {
            self.apply(effect);
        }
    }
}
