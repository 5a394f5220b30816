//! Pagewire: UI behavior for a static landing page.
//!
//! Three widgets react to user events on a known page structure:
//!
//! - **Menu**: a mobile nav panel with a dimming overlay, toggled by a
//!   button and closed by a nav link, the overlay or Escape
//! - **Anchors**: in-page `#fragment` links scroll smoothly instead of jumping
//! - **Contact form**: five fields validated on submit, with per-field
//!   error messages and a simulated send
//!
//! Widgets follow a "pure core, imperative shell" split. Each handler is a
//! function of its current state and an event that returns side effects as
//! data (`Effect`); the `Site` shell applies them to a rendering `Surface`
//! such as the in-memory `Document`.
//!
//! # Example
//!
//! ```rust
//! use pagewire::dom::{Document, Element};
//! use pagewire::{initialize, SiteConfig, UiEvent};
//!
//! let mut doc = Document::new();
//! let body = doc.body();
//! let button = doc.append(body, Element::new("button").with_class("menu-toggle"));
//! let nav = doc.append(body, Element::new("nav").with_id("main-navigation"));
//!
//! let mut site = initialize(&mut doc, SiteConfig::default()).unwrap();
//! site.dispatch(&mut doc, UiEvent::Click { target: button }).unwrap();
//!
//! assert!(doc.has_class(nav, "open"));
//! assert_eq!(doc.attribute(button, "aria-expanded"), Some("true"));
//! ```

pub mod anchor;
pub mod config;
pub mod core;
pub mod dom;
pub mod effect;
pub mod error;
pub mod event;
pub mod form;
pub mod listener;
pub mod menu;
pub mod site;
pub mod timer;

// Re-export commonly used types
pub use config::SiteConfig;
pub use crate::core::{Guard, State, StateHistory, StateTransition};
pub use error::PagewireError;
pub use event::{EventKind, UiEvent};
pub use site::{Dispatch, Site};

/// Wire every widget to the page. Call once, when the structure is ready.
pub fn initialize(doc: &mut dom::Document, config: SiteConfig) -> Result<Site, PagewireError> {
    Site::initialize(doc, config)
}
