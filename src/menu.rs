//! Mobile navigation menu.
//!
//! Two states, four triggers. The trigger button toggles; a click on a nav
//! link, the Escape key and a click on the dimming overlay all close. Every
//! effective transition re-renders the four open markers together so they
//! can never disagree:
//!
//! - the nav panel's `open` class
//! - the trigger's `open` class
//! - the trigger's `aria-expanded` attribute
//! - the overlay's `active` class

use crate::config::MenuConfig;
use crate::core::{Guard, State, StateHistory, StateTransition};
use crate::dom::{Document, Element, NodeId};
use crate::effect::{DomEffect, Effect, Surface};
use crate::event::UiEvent;
use chrono::Utc;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MenuState {
    Closed,
    Open,
}

impl MenuState {
    pub fn is_open(&self) -> bool {
        matches!(self, Self::Open)
    }
}

impl State for MenuState {
    fn name(&self) -> &str {
        match self {
            Self::Closed => "Closed",
            Self::Open => "Open",
        }
    }
}

/// User actions the menu reacts to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MenuTrigger {
    /// Click on the trigger button
    Toggle,
    /// Click on a link inside the nav panel
    NavLink,
    /// Escape pressed anywhere
    Escape,
    /// Click on the overlay outside the panel
    Overlay,
}

impl MenuTrigger {
    pub const ALL: [MenuTrigger; 4] = [Self::Toggle, Self::NavLink, Self::Escape, Self::Overlay];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Toggle => "toggle",
            Self::NavLink => "nav-link",
            Self::Escape => "escape",
            Self::Overlay => "overlay",
        }
    }
}

/// One row of the transition table.
#[derive(Clone, Debug)]
pub struct MenuRule {
    pub trigger: MenuTrigger,
    pub to: MenuState,
    pub guard: Guard<MenuState>,
}

impl MenuRule {
    fn new<F>(trigger: MenuTrigger, to: MenuState, guard: F) -> Self
    where
        F: Fn(&MenuState) -> bool + Send + Sync + 'static,
    {
        Self {
            trigger,
            to,
            guard: Guard::new(guard),
        }
    }

    /// Whether this rule fires for `trigger` in `current` (pure).
    pub fn can_execute(&self, trigger: MenuTrigger, current: &MenuState) -> bool {
        self.trigger == trigger && self.guard.check(current)
    }
}

/// The menu's transition table.
pub fn menu_rules() -> Vec<MenuRule> {
    let open = |s: &MenuState| s.is_open();
    vec![
        MenuRule::new(MenuTrigger::Toggle, MenuState::Open, |s| !s.is_open()),
        MenuRule::new(MenuTrigger::Toggle, MenuState::Closed, open),
        MenuRule::new(MenuTrigger::NavLink, MenuState::Closed, open),
        MenuRule::new(MenuTrigger::Escape, MenuState::Closed, open),
        MenuRule::new(MenuTrigger::Overlay, MenuState::Closed, open),
    ]
}

/// Next state for `trigger`, or `None` when the trigger is a no-op (pure).
pub fn next_state(rules: &[MenuRule], current: MenuState, trigger: MenuTrigger) -> Option<MenuState> {
    rules
        .iter()
        .find(|r| r.can_execute(trigger, &current))
        .map(|r| r.to)
}

/// Owner of the menu state and its markers.
pub struct MenuController {
    trigger: NodeId,
    nav: NodeId,
    overlay: NodeId,
    state: MenuState,
    history: StateHistory<MenuState>,
    rules: Vec<MenuRule>,
    config: MenuConfig,
}

impl MenuController {
    /// Wire the menu to the page.
    ///
    /// Returns `None` (and leaves the page alone) when either the trigger
    /// or the nav panel is missing. Otherwise appends the overlay to the
    /// body and renders the closed markers.
    pub fn attach(doc: &mut Document, config: &MenuConfig) -> Option<Self> {
        let Some(trigger) = doc.first_by_class(&config.trigger_class) else {
            tracing::debug!(class = %config.trigger_class, "menu trigger missing; menu disabled");
            return None;
        };
        let Some(nav) = doc.by_id(&config.nav_id) else {
            tracing::debug!(id = %config.nav_id, "nav panel missing; menu disabled");
            return None;
        };

        let body = doc.body();
        let overlay = doc.append(body, Element::new("div").with_class(&config.overlay_class));

        let controller = Self {
            trigger,
            nav,
            overlay,
            state: MenuState::Closed,
            history: StateHistory::new(),
            rules: menu_rules(),
            config: config.clone(),
        };
        doc.apply_all(&controller.render(MenuState::Closed));
        Some(controller)
    }

    pub fn state(&self) -> MenuState {
        self.state
    }

    pub fn history(&self) -> &StateHistory<MenuState> {
        &self.history
    }

    pub fn trigger(&self) -> NodeId {
        self.trigger
    }

    pub fn nav(&self) -> NodeId {
        self.nav
    }

    pub fn overlay(&self) -> NodeId {
        self.overlay
    }

    /// Map a raw event onto a menu trigger, if it is one.
    pub fn classify(&self, doc: &Document, event: &UiEvent) -> Option<MenuTrigger> {
        match event {
            UiEvent::KeyDown { key } if key == "Escape" => Some(MenuTrigger::Escape),
            UiEvent::Click { target } => {
                if doc.contains(self.trigger, *target) {
                    Some(MenuTrigger::Toggle)
                } else if doc.contains(self.overlay, *target) {
                    Some(MenuTrigger::Overlay)
                } else if doc
                    .closest(*target, "a")
                    .is_some_and(|link| doc.contains(self.nav, link))
                {
                    Some(MenuTrigger::NavLink)
                } else {
                    None
                }
            }
            _ => None,
        }
    }

    pub fn handle(&mut self, doc: &Document, event: &UiEvent) -> Vec<Effect> {
        match self.classify(doc, event) {
            Some(trigger) => self.fire(trigger),
            None => Vec::new(),
        }
    }

    /// Apply `trigger` to the state machine and return the marker updates.
    pub fn fire(&mut self, trigger: MenuTrigger) -> Vec<Effect> {
        let from = self.state;
        let Some(to) = next_state(&self.rules, from, trigger) else {
            tracing::trace!(trigger = trigger.label(), state = from.name(), "menu trigger ignored");
            return Vec::new();
        };

        self.history = self.history.record(StateTransition {
            from,
            to,
            trigger: trigger.label().to_string(),
            timestamp: Utc::now(),
        });
        self.state = to;
        tracing::debug!(from = from.name(), to = to.name(), trigger = trigger.label(), "menu transition");

        self.render(to).into_iter().map(Effect::Dom).collect()
    }

    fn render(&self, state: MenuState) -> Vec<DomEffect> {
        let open = state.is_open();
        vec![
            DomEffect::SetClass {
                node: self.nav,
                class: self.config.open_class.clone(),
                on: open,
            },
            DomEffect::SetClass {
                node: self.trigger,
                class: self.config.open_class.clone(),
                on: open,
            },
            DomEffect::SetAttribute {
                node: self.trigger,
                name: "aria-expanded".to_string(),
                value: open.to_string(),
            },
            DomEffect::SetClass {
                node: self.overlay,
                class: self.config.active_class.clone(),
                on: open,
            },
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Page {
        doc: Document,
        button: NodeId,
        link: NodeId,
        plain: NodeId,
    }

    fn page() -> Page {
        let mut doc = Document::new();
        let body = doc.body();
        let button = doc.append(body, Element::new("button").with_class("menu-toggle"));
        let nav = doc.append(body, Element::new("nav").with_id("main-navigation"));
        let link = doc.append(nav, Element::new("a").with_attr("href", "/pricing"));
        let plain = doc.append(nav, Element::new("span"));
        Page {
            doc,
            button,
            link,
            plain,
        }
    }

    fn markers(doc: &Document, menu: &MenuController) -> [bool; 4] {
        [
            doc.has_class(menu.nav(), "open"),
            doc.has_class(menu.trigger(), "open"),
            doc.attribute(menu.trigger(), "aria-expanded") == Some("true"),
            doc.has_class(menu.overlay(), "active"),
        ]
    }

    fn run(page: &mut Page, menu: &mut MenuController, event: UiEvent) {
        let effects = menu.handle(&page.doc, &event);
        for effect in &effects {
            if let Effect::Dom(dom) = effect {
                page.doc.apply(dom);
            }
        }
    }

    #[test]
    fn table_toggles_and_closes() {
        let rules = menu_rules();
        use MenuState::*;
        use MenuTrigger::*;

        assert_eq!(next_state(&rules, Closed, Toggle), Some(Open));
        assert_eq!(next_state(&rules, Open, Toggle), Some(Closed));
        for close in [NavLink, Escape, Overlay] {
            assert_eq!(next_state(&rules, Open, close), Some(Closed));
            assert_eq!(next_state(&rules, Closed, close), None);
        }
    }

    #[test]
    fn attach_requires_trigger_and_nav() {
        let mut doc = Document::new();
        let body = doc.body();
        doc.append(body, Element::new("button").with_class("menu-toggle"));

        assert!(MenuController::attach(&mut doc, &MenuConfig::default()).is_none());
        assert_eq!(doc.children(body).len(), 1, "no overlay without a nav");
    }

    #[test]
    fn attach_creates_overlay_and_renders_closed() {
        let mut page = page();
        let menu = MenuController::attach(&mut page.doc, &MenuConfig::default()).unwrap();

        assert!(page.doc.has_class(menu.overlay(), "nav-overlay"));
        assert_eq!(page.doc.parent(menu.overlay()), Some(page.doc.body()));
        assert_eq!(page.doc.attribute(page.button, "aria-expanded"), Some("false"));
        assert_eq!(markers(&page.doc, &menu), [false; 4]);
    }

    #[test]
    fn every_trigger_keeps_markers_in_sync() {
        let mut page = page();
        let mut menu = MenuController::attach(&mut page.doc, &MenuConfig::default()).unwrap();
        let button = page.button;
        let overlay = menu.overlay();
        let link = page.link;

        run(&mut page, &mut menu, UiEvent::Click { target: button });
        assert_eq!(markers(&page.doc, &menu), [true; 4]);

        run(&mut page, &mut menu, UiEvent::Click { target: link });
        assert_eq!(markers(&page.doc, &menu), [false; 4]);

        run(&mut page, &mut menu, UiEvent::Click { target: button });
        run(&mut page, &mut menu, UiEvent::key_down("Escape"));
        assert_eq!(markers(&page.doc, &menu), [false; 4]);

        run(&mut page, &mut menu, UiEvent::Click { target: button });
        run(&mut page, &mut menu, UiEvent::Click { target: overlay });
        assert_eq!(markers(&page.doc, &menu), [false; 4]);
        assert_eq!(menu.history().count_by_trigger("toggle"), 3);
        assert_eq!(menu.history().count_by_trigger("overlay"), 1);
    }

    #[test]
    fn close_triggers_are_noops_when_closed() {
        let mut page = page();
        let mut menu = MenuController::attach(&mut page.doc, &MenuConfig::default()).unwrap();

        assert!(menu.fire(MenuTrigger::Escape).is_empty());
        assert!(menu.fire(MenuTrigger::Overlay).is_empty());
        assert!(menu.fire(MenuTrigger::NavLink).is_empty());
        assert!(menu.history().transitions().is_empty());
    }

    #[test]
    fn non_link_click_in_nav_and_other_keys_are_ignored() {
        let mut page = page();
        let mut menu = MenuController::attach(&mut page.doc, &MenuConfig::default()).unwrap();
        let button = page.button;
        let plain = page.plain;

        run(&mut page, &mut menu, UiEvent::Click { target: button });
        run(&mut page, &mut menu, UiEvent::Click { target: plain });
        run(&mut page, &mut menu, UiEvent::key_down("Enter"));

        assert_eq!(menu.state(), MenuState::Open);
    }

    #[test]
    fn click_on_trigger_child_counts_as_trigger() {
        let mut page = page();
        let button = page.button;
        let icon = page.doc.append(button, Element::new("span").with_class("bar"));
        let mut menu = MenuController::attach(&mut page.doc, &MenuConfig::default()).unwrap();

        run(&mut page, &mut menu, UiEvent::Click { target: icon });

        assert_eq!(menu.state(), MenuState::Open);
    }
}
