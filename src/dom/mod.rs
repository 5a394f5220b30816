//! In-memory document tree.
//!
//! A deliberately small model of the page: an arena of elements hanging
//! off a `body` root. It answers the handful of queries the widgets make
//! (by id, by class, `closest`, ancestry) and applies `DomEffect`s through
//! the `Surface` trait. Removed elements stay in the arena but are
//! detached, so no query can reach them.

mod element;
mod surface;

pub use element::Element;
pub use surface::ScrollRequest;

use serde::{Deserialize, Serialize};

/// Handle to an element in a `Document`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NodeId(usize);

#[derive(Clone, Debug)]
struct Node {
    element: Element,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

/// The page.
#[derive(Clone, Debug)]
pub struct Document {
    nodes: Vec<Node>,
    scrolls: Vec<ScrollRequest>,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    /// Create a document holding only an empty `body`.
    pub fn new() -> Self {
        Self {
            nodes: vec![Node {
                element: Element::new("body"),
                parent: None,
                children: Vec::new(),
            }],
            scrolls: Vec::new(),
        }
    }

    pub fn body(&self) -> NodeId {
        NodeId(0)
    }

    /// Append `element` as the last child of `parent`.
    pub fn append(&mut self, parent: NodeId, element: Element) -> NodeId {
        let id = self.alloc(element, Some(parent));
        if let Some(node) = self.nodes.get_mut(parent.0) {
            node.children.push(id);
        }
        id
    }

    /// Insert `element` right after `anchor` under the same parent.
    ///
    /// Returns `None` when `anchor` has no parent.
    pub fn insert_after(&mut self, anchor: NodeId, element: Element) -> Option<NodeId> {
        let parent = self.parent(anchor)?;
        let position = self.nodes[parent.0]
            .children
            .iter()
            .position(|c| *c == anchor)?;
        let id = self.alloc(element, Some(parent));
        self.nodes[parent.0].children.insert(position + 1, id);
        Some(id)
    }

    /// Detach `node` (and its subtree) from the tree. The body cannot be removed.
    pub fn remove(&mut self, node: NodeId) {
        if node == self.body() {
            return;
        }
        let Some(parent) = self.parent(node) else {
            return;
        };
        self.nodes[parent.0].children.retain(|c| *c != node);
        self.nodes[node.0].parent = None;
    }

    pub fn element(&self, node: NodeId) -> Option<&Element> {
        self.nodes.get(node.0).map(|n| &n.element)
    }

    pub fn element_mut(&mut self, node: NodeId) -> Option<&mut Element> {
        self.nodes.get_mut(node.0).map(|n| &mut n.element)
    }

    pub fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.nodes.get(node.0).and_then(|n| n.parent)
    }

    pub fn children(&self, node: NodeId) -> &[NodeId] {
        self.nodes
            .get(node.0)
            .map(|n| n.children.as_slice())
            .unwrap_or(&[])
    }

    pub fn next_sibling(&self, node: NodeId) -> Option<NodeId> {
        let siblings = self.children(self.parent(node)?);
        let position = siblings.iter().position(|c| *c == node)?;
        siblings.get(position + 1).copied()
    }

    /// Whether `node` is still reachable from the body.
    pub fn is_connected(&self, node: NodeId) -> bool {
        let mut current = Some(node);
        while let Some(id) = current {
            if id == self.body() {
                return true;
            }
            current = self.parent(id);
        }
        false
    }

    /// True when `ancestor` is `node` or one of its ancestors.
    pub fn contains(&self, ancestor: NodeId, node: NodeId) -> bool {
        let mut current = Some(node);
        while let Some(id) = current {
            if id == ancestor {
                return true;
            }
            current = self.parent(id);
        }
        false
    }

    /// Nearest inclusive ancestor of `node` with the given tag.
    pub fn closest(&self, node: NodeId, tag: &str) -> Option<NodeId> {
        let mut current = Some(node);
        while let Some(id) = current {
            if self.element(id).is_some_and(|e| e.tag == tag) {
                return Some(id);
            }
            current = self.parent(id);
        }
        None
    }

    /// Descendants of `root` in document order, `root` excluded.
    pub fn descendants(&self, root: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack: Vec<NodeId> = self.children(root).iter().rev().copied().collect();
        while let Some(id) = stack.pop() {
            out.push(id);
            stack.extend(self.children(id).iter().rev().copied());
        }
        out
    }

    /// First connected element with the given id.
    pub fn by_id(&self, id: &str) -> Option<NodeId> {
        self.by_id_within(self.body(), id)
    }

    /// First descendant of `root` with the given id.
    pub fn by_id_within(&self, root: NodeId, id: &str) -> Option<NodeId> {
        self.find_within(root, |e| e.id.as_deref() == Some(id))
    }

    /// First connected element carrying `class`.
    pub fn first_by_class(&self, class: &str) -> Option<NodeId> {
        self.find_within(self.body(), |e| e.has_class(class))
    }

    pub fn by_class_within(&self, root: NodeId, class: &str) -> Vec<NodeId> {
        self.descendants(root)
            .into_iter()
            .filter(|id| self.element(*id).is_some_and(|e| e.has_class(class)))
            .collect()
    }

    /// Connected element created with `key`.
    pub fn by_key(&self, key: &str) -> Option<NodeId> {
        self.find_within(self.body(), |e| e.key.as_deref() == Some(key))
    }

    /// Every connected `<a>` whose `href` begins with `#`.
    pub fn fragment_links(&self) -> Vec<NodeId> {
        self.descendants(self.body())
            .into_iter()
            .filter(|id| {
                self.element(*id).is_some_and(|e| {
                    e.tag == "a" && e.attribute("href").is_some_and(|h| h.starts_with('#'))
                })
            })
            .collect()
    }

    pub fn has_class(&self, node: NodeId, class: &str) -> bool {
        self.element(node).is_some_and(|e| e.has_class(class))
    }

    pub fn attribute(&self, node: NodeId, name: &str) -> Option<&str> {
        self.element(node).and_then(|e| e.attribute(name))
    }

    pub fn style(&self, node: NodeId, property: &str) -> Option<&str> {
        self.element(node).and_then(|e| e.style(property))
    }

    pub fn value(&self, node: NodeId) -> &str {
        self.element(node).map(|e| e.value.as_str()).unwrap_or("")
    }

    /// Replace the value of a form control, as typing would.
    pub fn set_value(&mut self, node: NodeId, value: impl Into<String>) {
        if let Some(element) = self.element_mut(node) {
            element.value = value.into();
        }
    }

    pub fn text(&self, node: NodeId) -> &str {
        self.element(node).map(|e| e.text.as_str()).unwrap_or("")
    }

    /// Scroll requests applied so far, oldest first.
    pub fn scrolls(&self) -> &[ScrollRequest] {
        &self.scrolls
    }

    fn alloc(&mut self, element: Element, parent: Option<NodeId>) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node {
            element,
            parent,
            children: Vec::new(),
        });
        id
    }

    fn find_within<F>(&self, root: NodeId, predicate: F) -> Option<NodeId>
    where
        F: Fn(&Element) -> bool,
    {
        self.descendants(root)
            .into_iter()
            .find(|id| self.element(*id).is_some_and(&predicate))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> (Document, NodeId, NodeId, NodeId) {
        let mut doc = Document::new();
        let body = doc.body();
        let nav = doc.append(body, Element::new("nav").with_id("main-navigation"));
        let link = doc.append(nav, Element::new("a").with_attr("href", "#about"));
        let label = doc.append(link, Element::new("span").with_text("About"));
        (doc, nav, link, label)
    }

    #[test]
    fn queries_find_connected_elements() {
        let (doc, nav, link, label) = sample();

        assert_eq!(doc.by_id("main-navigation"), Some(nav));
        assert_eq!(doc.closest(label, "a"), Some(link));
        assert_eq!(doc.closest(label, "form"), None);
        assert!(doc.contains(nav, label));
        assert!(!doc.contains(label, nav));
        assert_eq!(doc.fragment_links(), vec![link]);
    }

    #[test]
    fn insert_after_places_next_sibling() {
        let mut doc = Document::new();
        let body = doc.body();
        let first = doc.append(body, Element::new("input").with_id("a"));
        let last = doc.append(body, Element::new("input").with_id("b"));

        let inserted = doc
            .insert_after(first, Element::new("div").with_key("error:a"))
            .unwrap();

        assert_eq!(doc.children(body), &[first, inserted, last]);
        assert_eq!(doc.next_sibling(first), Some(inserted));
        assert_eq!(doc.by_key("error:a"), Some(inserted));
    }

    #[test]
    fn removed_subtree_is_unreachable() {
        let (mut doc, nav, link, label) = sample();

        doc.remove(link);

        assert!(!doc.is_connected(link));
        assert!(!doc.is_connected(label));
        assert!(doc.children(nav).is_empty());
        assert!(doc.fragment_links().is_empty());
    }

    #[test]
    fn body_cannot_be_removed() {
        let (mut doc, nav, _, _) = sample();
        let body = doc.body();
        doc.remove(body);
        assert!(doc.is_connected(nav));
    }

    #[test]
    fn insert_after_detached_anchor_is_none() {
        let (mut doc, _, link, _) = sample();
        doc.remove(link);
        assert!(doc.insert_after(link, Element::new("div")).is_none());
    }
}
