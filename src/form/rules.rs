//! Field rules for the contact form.
//!
//! Every field present in the form is checked on every submit. Failures
//! are accumulated with `Validation` rather than stopping at the first
//! one, so the visitor sees all problems at once.

use crate::config::FieldIds;
use crate::error::PagewireError;
use fancy_regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;
use thiserror::Error;

/// `local@domain.tld` shape: no whitespace, exactly one `@`, a dot after it.
pub const EMAIL_PATTERN: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";

/// Eight or more digits, spaces, `-`, `+`, `(` or `)`.
///
/// Loose on purpose: `--------` passes.
pub const PHONE_PATTERN: &str = r"^[0-9\s\-+()]{8,}$";

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Field {
    FirstName,
    LastName,
    Email,
    Phone,
    Message,
}

impl Field {
    /// Fields in form order.
    pub const ALL: [Field; 5] = [
        Self::FirstName,
        Self::LastName,
        Self::Email,
        Self::Phone,
        Self::Message,
    ];

    /// Element id of this field on the page.
    pub fn id<'a>(&self, ids: &'a FieldIds) -> &'a str {
        match self {
            Self::FirstName => &ids.first_name,
            Self::LastName => &ids.last_name,
            Self::Email => &ids.email,
            Self::Phone => &ids.phone,
            Self::Message => &ids.message,
        }
    }

    pub fn is_required(&self) -> bool {
        self.required_message().is_some()
    }

    fn required_message(&self) -> Option<&'static str> {
        match self {
            Self::FirstName => Some("First name is required"),
            Self::LastName => Some("Last name is required"),
            Self::Email => Some("Email is required"),
            Self::Message => Some("Message is required"),
            Self::Phone => None,
        }
    }

    fn format_message(&self) -> Option<&'static str> {
        match self {
            Self::Email => Some("Enter a valid email"),
            Self::Phone => Some("Enter a valid phone number"),
            _ => None,
        }
    }
}

/// Why a single field was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("{message}")]
    Missing {
        field: Field,
        message: &'static str,
    },

    #[error("{message}")]
    Malformed {
        field: Field,
        message: &'static str,
    },
}

impl FieldError {
    pub fn field(&self) -> Field {
        match self {
            Self::Missing { field, .. } | Self::Malformed { field, .. } => *field,
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Self::Missing { message, .. } | Self::Malformed { message, .. } => message,
        }
    }
}

/// Current values of the fields that exist in the form.
///
/// A field with no entry was not found in the markup and is not checked.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldValues {
    values: BTreeMap<Field, String>,
}

impl FieldValues {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, field: Field, value: impl Into<String>) -> Self {
        self.values.insert(field, value.into());
        self
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        self.values.get(&field).map(String::as_str)
    }
}

impl FromIterator<(Field, String)> for FieldValues {
    fn from_iter<I: IntoIterator<Item = (Field, String)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

pub type FieldCheck = Validation<(), NonEmptyVec<FieldError>>;

/// Compiled format patterns.
#[derive(Debug, Clone)]
pub struct FieldRules {
    email: Regex,
    phone: Regex,
}

impl FieldRules {
    pub fn compile() -> Result<Self, PagewireError> {
        Ok(Self {
            email: compile(EMAIL_PATTERN)?,
            phone: compile(PHONE_PATTERN)?,
        })
    }

    #[cfg(test)]
    pub(crate) fn with_email(mut self, email: Regex) -> Self {
        self.email = email;
        self
    }

    /// Check one field's value.
    ///
    /// Emptiness is judged on the trimmed value; the format pattern runs
    /// on the value as typed.
    pub fn check(&self, field: Field, value: &str) -> Result<FieldCheck, PagewireError> {
        if value.trim().is_empty() {
            return Ok(match field.required_message() {
                Some(message) => Validation::fail(FieldError::Missing { field, message }),
                None => Validation::success(()),
            });
        }

        let pattern = match field {
            Field::Email => &self.email,
            Field::Phone => &self.phone,
            _ => return Ok(Validation::success(())),
        };
        let matched = pattern
            .is_match(value)
            .map_err(|e| PagewireError::pattern(pattern.as_str(), e))?;

        Ok(match (matched, field.format_message()) {
            (false, Some(message)) => Validation::fail(FieldError::Malformed { field, message }),
            _ => Validation::success(()),
        })
    }

    /// Check every present field, collecting all failures in form order.
    pub fn validate(&self, values: &FieldValues) -> Result<FieldCheck, PagewireError> {
        let mut checks = Vec::new();
        for field in Field::ALL {
            if let Some(value) = values.get(field) {
                checks.push(self.check(field, value)?);
            }
        }
        Ok(Validation::all_vec(checks).map(|_| ()))
    }
}

fn compile(pattern: &str) -> Result<Regex, PagewireError> {
    Regex::new(pattern).map_err(|e| PagewireError::pattern(pattern, e))
}
