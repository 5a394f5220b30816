//! Landing Page
//!
//! Builds the landing page markup in memory and walks through a visitor
//! session: open the menu, jump to a section, submit the contact form
//! badly, fix it, and watch the success notice expire.
//!
//! Run with: RUST_LOG=pagewire=debug cargo run --example landing_page

use pagewire::dom::{Document, Element};
use pagewire::{initialize, PagewireError, SiteConfig, UiEvent};
use std::time::Duration;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), PagewireError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut doc = Document::new();
    let body = doc.body();
    let button = doc.append(body, Element::new("button").with_class("menu-toggle"));
    let nav = doc.append(body, Element::new("nav").with_id("main-navigation"));
    let contact_link = doc.append(nav, Element::new("a").with_attr("href", "#contact"));
    let contact = doc.append(body, Element::new("section").with_id("contact"));
    let form = doc.append(contact, Element::new("form").with_class("footer-form"));
    let first = doc.append(form, Element::new("input").with_id("footer-first"));
    let last = doc.append(form, Element::new("input").with_id("footer-last"));
    let email = doc.append(form, Element::new("input").with_id("footer-email"));
    doc.append(form, Element::new("input").with_id("footer-phone"));
    let message = doc.append(form, Element::new("textarea").with_id("footer-message"));

    let mut site = initialize(&mut doc, SiteConfig::default())?;

    println!("=== Menu ===");
    site.dispatch(&mut doc, UiEvent::Click { target: button })?;
    println!("  after toggle: aria-expanded={:?}", doc.attribute(button, "aria-expanded"));
    site.dispatch(&mut doc, UiEvent::Click { target: contact_link })?;
    println!("  after nav link: aria-expanded={:?}", doc.attribute(button, "aria-expanded"));
    println!("  scrolled to: {:?}\n", doc.scrolls().last().map(|s| s.node == contact));

    println!("=== Contact form ===");
    doc.set_value(email, "jane@");
    let outcome = site.dispatch(&mut doc, UiEvent::Submit { form })?;
    println!("  default prevented: {}", outcome.default_prevented);
    for node in doc.by_class_within(form, "error-message") {
        println!("  error: {}", doc.text(node));
    }

    for (node, value) in [
        (first, "Jane"),
        (last, "Doe"),
        (email, "jane@example.com"),
        (message, "Hi"),
    ] {
        doc.set_value(node, value);
        site.dispatch(&mut doc, UiEvent::Input { target: node })?;
    }
    site.dispatch(&mut doc, UiEvent::Submit { form })?;
    for node in doc.by_class_within(form, "success-message") {
        println!("  notice: {}", doc.text(node));
    }

    site.advance(&mut doc, Duration::from_millis(4300));
    println!(
        "  notices after 4.3s: {}",
        doc.by_class_within(form, "success-message").len()
    );

    Ok(())
}
