//! Contact form validation.
//!
//! The form has a fixed set of five fields. Submitting runs every rule,
//! shows one message per failing field and, when nothing fails, shows a
//! success notice and clears the form. Nothing is ever sent anywhere.

mod notice;
mod rules;
mod validator;

pub use notice::{notice_key, NoticePhase, SubmissionOutcome};
pub use rules::{
    Field, FieldCheck, FieldError, FieldRules, FieldValues, EMAIL_PATTERN, PHONE_PATTERN,
};
pub use validator::{ContactFormValidator, FormFieldError};
