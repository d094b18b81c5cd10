//! Error types for entry conversion

use thiserror::Error;

/// Errors that abort the conversion of an entry.
///
/// Problems inside the sense sequence are not errors: the walker skips the
/// offending element and records a [`crate::entry::Diagnostic`] instead.
#[derive(Debug, Error)]
pub enum ConvertError {
    /// A value that must be text was null or of another JSON type
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The entry lacks a key the note cannot be built without
    #[error("Entry is missing required field '{0}'")]
    MissingField(&'static str),

    /// The response body is not valid JSON
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The response is valid JSON but not a list of entry objects
    #[error("Unexpected response shape: {0}")]
    ResponseShape(String),

    /// The API had no entry for the word. It may still offer spelling suggestions.
    #[error("No entry found{}{}", word_suffix(.word), suggestion_suffix(.suggestions))]
    NotFound {
        word: Option<String>,
        suggestions: Vec<String>,
    },

    /// The lookup URL could not be built
    #[error("Invalid lookup URL: {0}")]
    Url(#[from] url::ParseError),
}

impl ConvertError {
    /// Attach the looked-up word to a [`ConvertError::NotFound`].
    pub fn for_word(self, word: &str) -> Self {
        match self {
            ConvertError::NotFound { suggestions, .. } => ConvertError::NotFound {
                word: Some(word.to_string()),
                suggestions,
            },
            other => other,
        }
    }
}

fn word_suffix(word: &Option<String>) -> String {
    match word {
        Some(word) => format!(" for '{word}'"),
        None => String::new(),
    }
}

fn suggestion_suffix(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else {
        format!(" (did you mean: {})", suggestions.join(", "))
    }
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, ConvertError>;
