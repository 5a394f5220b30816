//! Error types.
//!
//! A missing element on the page is never an error; widgets that cannot
//! find their markup simply do not attach. Only a malformed configuration
//! or a field pattern that fails to compile or run ends up here.

use thiserror::Error;

/// Errors that can occur while initializing or driving the page.
#[derive(Debug, Error)]
pub enum PagewireError {
    /// Configuration JSON could not be parsed
    #[error("Invalid configuration: {0}")]
    Config(#[from] serde_json::Error),

    /// A field format pattern failed to compile or to match
    #[error("Field pattern '{pattern}' failed: {source}")]
    Pattern {
        pattern: String,
        #[source]
        source: fancy_regex::Error,
    },
}

impl PagewireError {
    pub(crate) fn pattern(pattern: &str, source: fancy_regex::Error) -> Self {
        Self::Pattern {
            pattern: pattern.to_string(),
            source,
        }
    }
}
