//! The imperative shell.
//!
//! `Site` owns the three widgets plus the timer and listener registries.
//! Each event runs to completion: every widget sees it, matching one-shot
//! listeners fire, and all resulting effects are applied before
//! `dispatch` returns.

use crate::anchor::AnchorScroller;
use crate::config::SiteConfig;
use crate::dom::Document;
use crate::effect::{Effect, Surface};
use crate::error::PagewireError;
use crate::event::UiEvent;
use crate::form::ContactFormValidator;
use crate::listener::Listeners;
use crate::menu::MenuController;
use crate::timer::Scheduler;
use std::time::Duration;

/// What happened to an event.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Dispatch {
    /// The browser's default action must not run
    pub default_prevented: bool,
}

/// All widgets on the page, wired once.
pub struct Site {
    menu: Option<MenuController>,
    anchors: AnchorScroller,
    form: Option<ContactFormValidator>,
    scheduler: Scheduler,
    listeners: Listeners,
}

impl Site {
    /// Attach every widget whose markup is present.
    ///
    /// Call once, when the page structure is ready. A widget whose
    /// elements are missing stays disabled; the others still work.
    pub fn initialize(doc: &mut Document, config: SiteConfig) -> Result<Self, PagewireError> {
        let menu = MenuController::attach(doc, &config.menu);
        let anchors = AnchorScroller::attach(doc);
        let form = ContactFormValidator::attach(doc, &config)?;
        tracing::info!(
            menu = menu.is_some(),
            form = form.is_some(),
            links = anchors.links().len(),
            "page behavior initialized"
        );
        Ok(Self {
            menu,
            anchors,
            form,
            scheduler: Scheduler::new(),
            listeners: Listeners::new(),
        })
    }

    pub fn menu(&self) -> Option<&MenuController> {
        self.menu.as_ref()
    }

    pub fn form(&self) -> Option<&ContactFormValidator> {
        self.form.as_ref()
    }

    pub fn anchors(&self) -> &AnchorScroller {
        &self.anchors
    }

    pub fn listeners(&self) -> &Listeners {
        &self.listeners
    }

    pub fn scheduler(&self) -> &Scheduler {
        &self.scheduler
    }

    /// Deliver one user event.
    ///
    /// The form runs first: if it fails, no widget has changed state and
    /// nothing is applied.
    pub fn dispatch(&mut self, doc: &mut Document, event: UiEvent) -> Result<Dispatch, PagewireError> {
        let submitted = match self.form.as_mut() {
            Some(form) => form.handle(doc, &event)?,
            None => Vec::new(),
        };
        let mut effects = Vec::new();

        if let Some(target) = event.target() {
            for action in self.listeners.take(target, event.kind()) {
                if let Some(form) = self.form.as_mut() {
                    effects.extend(form.on_listener(&action));
                }
            }
        }
        if let Some(menu) = self.menu.as_mut() {
            effects.extend(menu.handle(doc, &event));
        }
        effects.extend(self.anchors.handle(doc, &event));
        effects.extend(submitted);

        Ok(self.run(doc, effects))
    }

    /// Move the clock forward by `by`, firing due timers in order.
    ///
    /// The clock saturates at `Duration::MAX`.
    pub fn advance(&mut self, doc: &mut Document, by: Duration) {
        let deadline = self.scheduler.now().saturating_add(by);
        while let Some(task) = self.scheduler.pop_due(deadline) {
            let effects = match self.form.as_mut() {
                Some(form) => form.on_timer(&task),
                None => Vec::new(),
            };
            self.run(doc, effects);
        }
        self.scheduler.settle(deadline);
    }

    fn run(&mut self, doc: &mut Document, effects: Vec<Effect>) -> Dispatch {
        let mut outcome = Dispatch::default();
        for effect in effects {
            match effect {
                Effect::Dom(dom) => doc.apply(&dom),
                Effect::PreventDefault => outcome.default_prevented = true,
                Effect::Schedule { delay, task } => {
                    self.scheduler.schedule(delay, task);
                }
                Effect::ListenOnce {
                    node,
                    event,
                    action,
                } => self.listeners.listen_once(node, event, action),
                Effect::Unlisten { node, event } => self.listeners.forget(node, event),
            }
        }
        outcome
    }
}
