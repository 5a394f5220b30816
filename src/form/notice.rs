//! Success notice shown after a valid submission.

use crate::config::NoticeConfig;
use crate::core::State;
use crate::dom::Element;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Lifecycle of a notice: visible, fading, gone.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum NoticePhase {
    Visible,
    Fading,
    Removed,
}

impl State for NoticePhase {
    fn name(&self) -> &str {
        match self {
            Self::Visible => "Visible",
            Self::Fading => "Fading",
            Self::Removed => "Removed",
        }
    }

    fn is_final(&self) -> bool {
        matches!(self, Self::Removed)
    }
}

/// A simulated successful submission.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SubmissionOutcome {
    pub id: Uuid,
    pub text: String,
    pub created_at: DateTime<Utc>,
    pub phase: NoticePhase,
}

impl SubmissionOutcome {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            text: text.into(),
            created_at: Utc::now(),
            phase: NoticePhase::Visible,
        }
    }

    /// Element key of this notice on the page.
    pub fn key(&self) -> String {
        notice_key(self.id)
    }

    /// Move to the next phase. Returns the new phase, or `None` once removed.
    pub fn advance(&mut self) -> Option<NoticePhase> {
        let next = match self.phase {
            NoticePhase::Visible => NoticePhase::Fading,
            NoticePhase::Fading => NoticePhase::Removed,
            NoticePhase::Removed => return None,
        };
        self.phase = next;
        Some(next)
    }

    pub(crate) fn element(&self, config: &NoticeConfig) -> Element {
        Element::new("div")
            .with_class(&config.class)
            .with_key(self.key())
            .with_text(&self.text)
            .with_style("background", "linear-gradient(90deg, #10b981, #059669)")
            .with_style("color", "#fff")
            .with_style("padding", "12px 16px")
            .with_style("border-radius", "8px")
            .with_style("margin-top", "12px")
            .with_style("font-weight", "600")
    }
}

pub fn notice_key(id: Uuid) -> String {
    format!("notice:{id}")
}

/// CSS transition used while a notice fades out.
pub(crate) fn fade_transition(config: &NoticeConfig) -> String {
    format!("opacity {}s ease", config.fade_ms as f64 / 1000.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phases_run_once_to_removed() {
        let mut outcome = SubmissionOutcome::new("sent");
        assert_eq!(outcome.phase, NoticePhase::Visible);
        assert_eq!(outcome.advance(), Some(NoticePhase::Fading));
        assert_eq!(outcome.advance(), Some(NoticePhase::Removed));
        assert!(outcome.phase.is_final());
        assert_eq!(outcome.advance(), None);
    }

    #[test]
    fn element_carries_key_class_and_text() {
        let config = NoticeConfig::default();
        let outcome = SubmissionOutcome::new(config.text.clone());
        let element = outcome.element(&config);

        assert!(element.has_class("success-message"));
        assert_eq!(element.key.as_deref(), Some(outcome.key().as_str()));
        assert_eq!(element.text, "Message sent successfully! We'll contact you soon.");
        assert_eq!(element.style("color"), Some("#fff"));
    }

    #[test]
    fn fade_transition_uses_configured_duration() {
        assert_eq!(fade_transition(&NoticeConfig::default()), "opacity 0.3s ease");
    }

    #[test]
    fn outcomes_get_distinct_keys() {
        let a = SubmissionOutcome::new("x");
        let b = SubmissionOutcome::new("x");
        assert_ne!(a.key(), b.key());
    }
}
