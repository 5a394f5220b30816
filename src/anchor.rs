//! Smooth scrolling for in-page links.

use crate::dom::{Document, NodeId};
use crate::effect::{DomEffect, Effect, ScrollBehavior, ScrollBlock};
use crate::event::UiEvent;

/// Intercepts clicks on `href="#..."` links and scrolls instead of jumping.
///
/// Links are collected once at initialization, like listeners attached on
/// page load; the `href` itself is read at click time.
#[derive(Clone, Debug, Default)]
pub struct AnchorScroller {
    links: Vec<NodeId>,
}

impl AnchorScroller {
    pub fn attach(doc: &Document) -> Self {
        let links = doc.fragment_links();
        tracing::debug!(count = links.len(), "fragment links wired");
        Self { links }
    }

    pub fn links(&self) -> &[NodeId] {
        &self.links
    }

    pub fn handle(&self, doc: &Document, event: &UiEvent) -> Vec<Effect> {
        let UiEvent::Click { target } = event else {
            return Vec::new();
        };
        // Links cannot nest in valid markup; only the innermost one counts.
        let Some(link) = doc
            .closest(*target, "a")
            .filter(|link| self.links.contains(link))
        else {
            return Vec::new();
        };
        let Some(fragment) = doc
            .attribute(link, "href")
            .and_then(|href| href.strip_prefix('#'))
            .filter(|fragment| !fragment.is_empty())
        else {
            return Vec::new();
        };

        let mut effects = vec![Effect::PreventDefault];
        match doc.by_id(fragment) {
            Some(node) => effects.push(
                DomEffect::ScrollIntoView {
                    node,
                    behavior: ScrollBehavior::Smooth,
                    block: ScrollBlock::Start,
                }
                .into(),
            ),
            None => tracing::trace!(fragment, "scroll target missing"),
        }
        effects
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::Element;

    fn page() -> (Document, NodeId) {
        let mut doc = Document::new();
        let body = doc.body();
        doc.append(body, Element::new("a").with_attr("href", "#about"));
        doc.append(body, Element::new("a").with_attr("href", "#"));
        doc.append(body, Element::new("a").with_attr("href", "#nonexistent"));
        doc.append(body, Element::new("a").with_attr("href", "/blog"));
        let about = doc.append(body, Element::new("section").with_id("about"));
        (doc, about)
    }

    fn link(doc: &Document, href: &str) -> NodeId {
        doc.descendants(doc.body())
            .into_iter()
            .find(|n| doc.attribute(*n, "href") == Some(href))
            .unwrap()
    }

    #[test]
    fn only_fragment_links_are_wired() {
        let (doc, _) = page();
        assert_eq!(AnchorScroller::attach(&doc).links().len(), 3);
    }

    #[test]
    fn fragment_click_scrolls_smoothly_to_start() {
        let (doc, about) = page();
        let scroller = AnchorScroller::attach(&doc);

        let effects = scroller.handle(&doc, &UiEvent::Click { target: link(&doc, "#about") });

        assert_eq!(
            effects,
            vec![
                Effect::PreventDefault,
                Effect::Dom(DomEffect::ScrollIntoView {
                    node: about,
                    behavior: ScrollBehavior::Smooth,
                    block: ScrollBlock::Start,
                }),
            ]
        );
    }

    #[test]
    fn bare_hash_is_ignored() {
        let (doc, _) = page();
        let scroller = AnchorScroller::attach(&doc);
        assert!(scroller
            .handle(&doc, &UiEvent::Click { target: link(&doc, "#") })
            .is_empty());
    }

    #[test]
    fn missing_target_prevents_jump_without_scrolling() {
        let (doc, _) = page();
        let scroller = AnchorScroller::attach(&doc);
        let effects = scroller.handle(
            &doc,
            &UiEvent::Click {
                target: link(&doc, "#nonexistent"),
            },
        );
        assert_eq!(effects, vec![Effect::PreventDefault]);
    }

    #[test]
    fn innermost_link_decides() {
        let (mut doc, about) = page();
        let body = doc.body();
        let outer = doc.append(body, Element::new("a").with_attr("href", "/blog"));
        let inner = doc.append(outer, Element::new("a").with_attr("href", "#about"));
        let wrapper = doc.append(body, Element::new("a").with_attr("href", "#about"));
        let plain = doc.append(wrapper, Element::new("a").with_attr("href", "/blog"));
        let scroller = AnchorScroller::attach(&doc);

        let effects = scroller.handle(&doc, &UiEvent::Click { target: inner });
        assert!(effects.contains(&Effect::Dom(DomEffect::ScrollIntoView {
            node: about,
            behavior: ScrollBehavior::Smooth,
            block: ScrollBlock::Start,
        })));
        assert!(scroller.handle(&doc, &UiEvent::Click { target: plain }).is_empty());
    }

    #[test]
    fn links_added_later_are_not_wired() {
        let (mut doc, _) = page();
        let scroller = AnchorScroller::attach(&doc);
        let body = doc.body();
        let late = doc.append(body, Element::new("a").with_attr("href", "#about"));

        assert!(scroller.handle(&doc, &UiEvent::Click { target: late }).is_empty());
    }
}
