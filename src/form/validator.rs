//! Contact form submit handling.

use super::notice::{fade_transition, notice_key, NoticePhase, SubmissionOutcome};
use super::rules::{Field, FieldRules, FieldValues};
use crate::config::{FormConfig, NoticeConfig, SiteConfig};
use crate::dom::{Document, Element, NodeId};
use crate::effect::{DomEffect, Effect, ListenerAction, Target};
use crate::error::PagewireError;
use crate::event::{EventKind, UiEvent};
use crate::timer::TimerTask;
use serde::{Deserialize, Serialize};
use stillwater::validation::Validation;
use uuid::Uuid;

const BORDER: &str = "border-color";

/// An error message currently shown under a field.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormFieldError {
    pub field: Field,
    pub field_id: String,
    pub node: NodeId,
    pub message: String,
}

impl FormFieldError {
    pub fn key(&self) -> String {
        format!("error:{}", self.field_id)
    }
}

/// Validates the contact form and simulates sending it.
pub struct ContactFormValidator {
    form: NodeId,
    config: FormConfig,
    notice: NoticeConfig,
    rules: FieldRules,
    shown: Vec<FormFieldError>,
    notices: Vec<SubmissionOutcome>,
}

impl ContactFormValidator {
    /// Wire the validator to the page's contact form.
    ///
    /// `Ok(None)` when the page has no contact form.
    pub fn attach(doc: &Document, config: &SiteConfig) -> Result<Option<Self>, PagewireError> {
        let Some(form) = doc.first_by_class(&config.form.form_class) else {
            tracing::debug!(class = %config.form.form_class, "contact form missing; validation disabled");
            return Ok(None);
        };
        Ok(Some(Self {
            form,
            config: config.form.clone(),
            notice: config.notice.clone(),
            rules: FieldRules::compile()?,
            shown: Vec::new(),
            notices: Vec::new(),
        }))
    }

    #[cfg(test)]
    pub(crate) fn replace_rules(&mut self, rules: FieldRules) {
        self.rules = rules;
    }

    pub fn form(&self) -> NodeId {
        self.form
    }

    /// Errors currently on screen, in form order.
    pub fn errors(&self) -> &[FormFieldError] {
        &self.shown
    }

    /// Success notices not yet removed.
    pub fn notices(&self) -> &[SubmissionOutcome] {
        &self.notices
    }

    pub fn handle(&mut self, doc: &Document, event: &UiEvent) -> Result<Vec<Effect>, PagewireError> {
        match event {
            UiEvent::Submit { form } if *form == self.form => self.submit(doc),
            _ => Ok(Vec::new()),
        }
    }

    /// Fields of the form that exist in the markup, looked up now.
    fn fields(&self, doc: &Document) -> Vec<(Field, NodeId)> {
        Field::ALL
            .into_iter()
            .filter_map(|field| {
                doc.by_id_within(self.form, field.id(&self.config.fields))
                    .map(|node| (field, node))
            })
            .collect()
    }

    /// Handle a submit attempt. The default submit is always prevented.
    pub fn submit(&mut self, doc: &Document) -> Result<Vec<Effect>, PagewireError> {
        let mut effects = vec![Effect::PreventDefault];
        let fields = self.fields(doc);

        effects.push(
            DomEffect::RemoveAll {
                root: self.form,
                class: self.config.error_class.clone(),
            }
            .into(),
        );
        for (_, node) in &fields {
            effects.push(
                DomEffect::SetStyle {
                    target: Target::Node(*node),
                    property: BORDER.to_string(),
                    value: None,
                }
                .into(),
            );
            effects.push(Effect::Unlisten {
                node: *node,
                event: EventKind::Input,
            });
        }
        let values: FieldValues = fields
            .iter()
            .map(|(field, node)| (*field, doc.value(*node).to_string()))
            .collect();
        let checked = self.rules.validate(&values)?;
        self.shown.clear();

        match checked {
            Validation::Success(_) => {
                let outcome = SubmissionOutcome::new(self.notice.text.clone());
                tracing::debug!(notice = %outcome.id, "contact form valid; simulated send");
                effects.push(
                    DomEffect::AppendChild {
                        parent: self.form,
                        element: outcome.element(&self.notice),
                    }
                    .into(),
                );
                effects.push(DomEffect::ResetForm { form: self.form }.into());
                effects.push(Effect::Schedule {
                    delay: self.notice.visible_for(),
                    task: TimerTask::FadeNotice { notice: outcome.id },
                });
                self.notices.push(outcome);
            }
            Validation::Failure(failures) => {
                tracing::debug!(count = failures.len(), "contact form rejected");
                for failure in failures.iter() {
                    let Some(node) = fields
                        .iter()
                        .find(|(field, _)| *field == failure.field())
                        .map(|(_, node)| *node)
                    else {
                        continue;
                    };
                    let error = FormFieldError {
                        field: failure.field(),
                        field_id: failure.field().id(&self.config.fields).to_string(),
                        node,
                        message: failure.message().to_string(),
                    };
                    effects.extend(self.show_error(&error));
                    self.shown.push(error);
                }
            }
        }
        Ok(effects)
    }

    fn show_error(&self, error: &FormFieldError) -> Vec<Effect> {
        let element = Element::new("div")
            .with_class(&self.config.error_class)
            .with_key(error.key())
            .with_text(&error.message)
            .with_style("color", &self.config.error_color)
            .with_style("font-size", "0.85rem")
            .with_style("margin-top", "4px");
        vec![
            DomEffect::InsertAfter {
                anchor: error.node,
                element,
            }
            .into(),
            DomEffect::SetStyle {
                target: Target::Node(error.node),
                property: BORDER.to_string(),
                value: Some(self.config.error_color.clone()),
            }
            .into(),
            Effect::ListenOnce {
                node: error.node,
                event: EventKind::Input,
                action: ListenerAction::ClearFieldError { field: error.node },
            },
        ]
    }

    /// Run a one-shot listener installed by `submit`.
    pub fn on_listener(&mut self, action: &ListenerAction) -> Vec<Effect> {
        let ListenerAction::ClearFieldError { field } = action;
        let mut effects: Vec<Effect> = vec![DomEffect::SetStyle {
            target: Target::Node(*field),
            property: BORDER.to_string(),
            value: None,
        }
        .into()];
        if let Some(position) = self.shown.iter().position(|e| e.node == *field) {
            let error = self.shown.remove(position);
            tracing::debug!(field = %error.field_id, "field edited; error cleared");
            effects.push(
                DomEffect::Remove {
                    target: Target::Key(error.key()),
                }
                .into(),
            );
        }
        effects
    }

    /// Advance a success notice when one of its timers fires.
    pub fn on_timer(&mut self, task: &TimerTask) -> Vec<Effect> {
        match task {
            TimerTask::FadeNotice { notice } => {
                if self.advance_notice(*notice) != Some(NoticePhase::Fading) {
                    return Vec::new();
                }
                let target = Target::Key(notice_key(*notice));
                vec![
                    DomEffect::SetStyle {
                        target: target.clone(),
                        property: "transition".to_string(),
                        value: Some(fade_transition(&self.notice)),
                    }
                    .into(),
                    DomEffect::SetStyle {
                        target,
                        property: "opacity".to_string(),
                        value: Some("0".to_string()),
                    }
                    .into(),
                    Effect::Schedule {
                        delay: self.notice.fade_for(),
                        task: TimerTask::RemoveNotice { notice: *notice },
                    },
                ]
            }
            TimerTask::RemoveNotice { notice } => {
                if self.advance_notice(*notice) != Some(NoticePhase::Removed) {
                    return Vec::new();
                }
                self.notices.retain(|n| n.id != *notice);
                tracing::debug!(notice = %notice, "success notice removed");
                vec![DomEffect::Remove {
                    target: Target::Key(notice_key(*notice)),
                }
                .into()]
            }
        }
    }

    fn advance_notice(&mut self, id: Uuid) -> Option<NoticePhase> {
        self.notices
            .iter_mut()
            .find(|n| n.id == id)
            .and_then(SubmissionOutcome::advance)
    }
}
