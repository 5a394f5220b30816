//! Applying effects to the in-memory document.

use super::{Document, NodeId};
use crate::effect::{DomEffect, ScrollBehavior, ScrollBlock, Surface, Target};
use serde::{Deserialize, Serialize};

/// A recorded `scrollIntoView` call.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScrollRequest {
    pub node: NodeId,
    pub behavior: ScrollBehavior,
    pub block: ScrollBlock,
}

impl Document {
    fn resolve(&self, target: &Target) -> Option<NodeId> {
        match target {
            Target::Node(node) => Some(*node),
            Target::Key(key) => self.by_key(key),
        }
    }
}

impl Surface for Document {
    fn apply(&mut self, effect: &DomEffect) {
        match effect {
            DomEffect::SetClass { node, class, on } => {
                if let Some(element) = self.element_mut(*node) {
                    if *on {
                        element.classes.insert(class.clone());
                    } else {
                        element.classes.remove(class);
                    }
                }
            }
            DomEffect::SetAttribute { node, name, value } => {
                if let Some(element) = self.element_mut(*node) {
                    element.attributes.insert(name.clone(), value.clone());
                }
            }
            DomEffect::SetStyle {
                target,
                property,
                value,
            } => {
                let Some(node) = self.resolve(target) else {
                    return;
                };
                if let Some(element) = self.element_mut(node) {
                    match value {
                        Some(v) => {
                            element.style.insert(property.clone(), v.clone());
                        }
                        None => {
                            element.style.remove(property);
                        }
                    }
                }
            }
            DomEffect::InsertAfter { anchor, element } => {
                if self.insert_after(*anchor, element.clone()).is_none() {
                    tracing::trace!(?anchor, "insert target detached; skipped");
                }
            }
            DomEffect::AppendChild { parent, element } => {
                if self.is_connected(*parent) {
                    self.append(*parent, element.clone());
                }
            }
            DomEffect::Remove { target } => {
                if let Some(node) = self.resolve(target) {
                    self.remove(node);
                }
            }
            DomEffect::RemoveAll { root, class } => {
                for node in self.by_class_within(*root, class) {
                    self.remove(node);
                }
            }
            DomEffect::ResetForm { form } => {
                for node in self.descendants(*form) {
                    if let Some(element) = self.element_mut(node) {
                        if element.is_form_control() {
                            element.value.clone_from(&element.default_value);
                        }
                    }
                }
            }
            DomEffect::ScrollIntoView {
                node,
                behavior,
                block,
            } => {
                self.scrolls.push(ScrollRequest {
                    node: *node,
                    behavior: *behavior,
                    block: *block,
                });
            }
        }
    }
}
