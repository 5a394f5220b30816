//! One-shot event subscriptions.
//!
//! A subscription fires at most once: `take` removes it from the registry
//! before handing its action back, so the listener is gone by the time the
//! action runs.

use crate::dom::NodeId;
use crate::effect::ListenerAction;
use crate::event::EventKind;

#[derive(Clone, Debug, PartialEq, Eq)]
struct Subscription {
    node: NodeId,
    event: EventKind,
    action: ListenerAction,
}

/// Registry of pending one-shot listeners.
#[derive(Clone, Debug, Default)]
pub struct Listeners {
    subscriptions: Vec<Subscription>,
}

impl Listeners {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn listen_once(&mut self, node: NodeId, event: EventKind, action: ListenerAction) {
        self.subscriptions.push(Subscription {
            node,
            event,
            action,
        });
    }

    /// Drop pending listeners for `event` on `node`.
    pub fn forget(&mut self, node: NodeId, event: EventKind) {
        self.subscriptions
            .retain(|s| !(s.node == node && s.event == event));
    }

    /// Remove and return every action registered for `event` on `node`.
    pub fn take(&mut self, node: NodeId, event: EventKind) -> Vec<ListenerAction> {
        let (fired, kept): (Vec<_>, Vec<_>) = self
            .subscriptions
            .drain(..)
            .partition(|s| s.node == node && s.event == event);
        self.subscriptions = kept;
        fired.into_iter().map(|s| s.action).collect()
    }

    pub fn is_listening(&self, node: NodeId, event: EventKind) -> bool {
        self.subscriptions
            .iter()
            .any(|s| s.node == node && s.event == event)
    }

    pub fn len(&self) -> usize {
        self.subscriptions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.subscriptions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::{Document, Element};

    fn two_fields() -> (NodeId, NodeId) {
        let mut doc = Document::new();
        let body = doc.body();
        let a = doc.append(body, Element::new("input"));
        let b = doc.append(body, Element::new("input"));
        (a, b)
    }

    #[test]
    fn take_fires_once() {
        let (a, _) = two_fields();
        let mut listeners = Listeners::new();
        listeners.listen_once(a, EventKind::Input, ListenerAction::ClearFieldError { field: a });

        assert_eq!(
            listeners.take(a, EventKind::Input),
            vec![ListenerAction::ClearFieldError { field: a }]
        );
        assert!(listeners.take(a, EventKind::Input).is_empty());
        assert!(listeners.is_empty());
    }

    #[test]
    fn take_leaves_other_nodes_and_kinds() {
        let (a, b) = two_fields();
        let mut listeners = Listeners::new();
        listeners.listen_once(a, EventKind::Input, ListenerAction::ClearFieldError { field: a });
        listeners.listen_once(b, EventKind::Input, ListenerAction::ClearFieldError { field: b });

        assert!(listeners.take(a, EventKind::Click).is_empty());
        assert_eq!(listeners.take(a, EventKind::Input).len(), 1);
        assert!(listeners.is_listening(b, EventKind::Input));
        assert_eq!(listeners.len(), 1);
    }

    #[test]
    fn forget_drops_pending_subscription() {
        let (a, _) = two_fields();
        let mut listeners = Listeners::new();
        listeners.listen_once(a, EventKind::Input, ListenerAction::ClearFieldError { field: a });

        listeners.forget(a, EventKind::Input);

        assert!(!listeners.is_listening(a, EventKind::Input));
    }
}
