//! Page selectors, messages and timings.
//!
//! `SiteConfig::default()` describes the landing page markup the widgets
//! were written against. Pages with different class names or ids override
//! only what differs through `SiteConfig::from_json`.

use crate::error::PagewireError;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Top-level configuration for all three widgets.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub menu: MenuConfig,
    pub form: FormConfig,
    pub notice: NoticeConfig,
}

impl SiteConfig {
    /// Parse a (possibly partial) JSON configuration.
    ///
    /// ```rust
    /// use pagewire::SiteConfig;
    ///
    /// let config = SiteConfig::from_json(r#"{ "menu": { "nav_id": "site-nav" } }"#).unwrap();
    /// assert_eq!(config.menu.nav_id, "site-nav");
    /// assert_eq!(config.menu.trigger_class, "menu-toggle");
    /// ```
    pub fn from_json(json: &str) -> Result<Self, PagewireError> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Selectors and marker names for the navigation menu.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MenuConfig {
    pub trigger_class: String,
    pub nav_id: String,
    pub overlay_class: String,
    /// Class toggled on both the nav and the trigger while open
    pub open_class: String,
    /// Class toggled on the overlay while open
    pub active_class: String,
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            trigger_class: "menu-toggle".to_string(),
            nav_id: "main-navigation".to_string(),
            overlay_class: "nav-overlay".to_string(),
            open_class: "open".to_string(),
            active_class: "active".to_string(),
        }
    }
}

/// Ids of the contact form fields.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldIds {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
}

impl Default for FieldIds {
    fn default() -> Self {
        Self {
            first_name: "footer-first".to_string(),
            last_name: "footer-last".to_string(),
            email: "footer-email".to_string(),
            phone: "footer-phone".to_string(),
            message: "footer-message".to_string(),
        }
    }
}

/// Contact form selectors and error presentation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormConfig {
    pub form_class: String,
    pub fields: FieldIds,
    pub error_class: String,
    pub error_color: String,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            form_class: "footer-form".to_string(),
            fields: FieldIds::default(),
            error_class: "error-message".to_string(),
            error_color: "#ff6b6b".to_string(),
        }
    }
}

/// Success notice text and lifecycle timings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NoticeConfig {
    pub class: String,
    pub text: String,
    pub visible_ms: u64,
    pub fade_ms: u64,
}

impl NoticeConfig {
    pub fn visible_for(&self) -> Duration {
        Duration::from_millis(self.visible_ms)
    }

    pub fn fade_for(&self) -> Duration {
        Duration::from_millis(self.fade_ms)
    }
}

impl Default for NoticeConfig {
    fn default() -> Self {
        Self {
            class: "success-message".to_string(),
            text: "Message sent successfully! We'll contact you soon.".to_string(),
            visible_ms: 4000,
            fade_ms: 300,
        }
    }
}
