//! Inline token formatting
//!
//! Definition prose from the API carries bracketed formatting tokens. The subset we
//! render is rewritten into Markdown:
//!
//! | Token                   | Markdown                          |
//! |-------------------------|-----------------------------------|
//! | `{bc}`                  | `": "`                            |
//! | `{a_link\|word}`        | `[word](BASE/word)`               |
//! | `{sx\|word\|target\|n}` | `[word](BASE/word)`               |
//! | `{d_link\|word\|target}`| `[word](BASE/word)`               |
//! | `{wi}word{/wi}`         | `_word_`                          |
//!
//! Rules run in that order (bold colon, links, italics). Link slugs replace spaces
//! with hyphens; the display text keeps them. For `sx` and `d_link` the word sits
//! in either capture depending on context, so the first non-empty one is used.
//!
//! Italic spans hold plain words only. A `{wi}` pair around a link is left as is, so
//! the rewritten link is never wrapped in underscores.
//!
//! Anything else, including unterminated tags, passes through verbatim.

use crate::error::{ConvertError, Result};
use crate::options::DEFAULT_BASE_URL;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use serde_json::Value;

const BOLD_COLON: &str = "{bc}";

static A_LINK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{a_link\|([^|{}]+)\}").expect("valid a_link regex"));

static SX_LINK: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\{sx\|([^|{}]*)\|([^|{}]*)\|([^|{}]*)\}").expect("valid sx regex")
});

static D_LINK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{d_link\|([^|{}]*)\|([^|{}]*)\}").expect("valid d_link regex"));

static WORD_ITALIC: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{wi\}([^{}\[\]()]*?)\{/wi\}").expect("valid wi regex"));

/// Rewrites vendor tokens into Markdown.
///
/// Holds only the link root, so a single formatter can be shared across entries
/// and threads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenFormatter {
    base_url: String,
}

impl TokenFormatter {
    pub fn new(base_url: impl Into<String>) -> Self {
        TokenFormatter {
            base_url: base_url.into(),
        }
    }

    /// Format a string. Strings without tokens come back unchanged.
    pub fn format(&self, text: &str) -> String {
        let text = text.replace(BOLD_COLON, ": ");
        let text = self.format_links(&text);
        WORD_ITALIC.replace_all(&text, "_${1}_").into_owned()
    }

    /// Format a raw JSON payload, rejecting anything that is not a string.
    pub fn format_value(&self, value: &Value) -> Result<String> {
        match value {
            Value::String(text) => Ok(self.format(text)),
            Value::Null => Err(ConvertError::InvalidArgument(
                "cannot format a null text fragment".to_string(),
            )),
            other => Err(ConvertError::InvalidArgument(format!(
                "expected a text fragment, found {}",
                json_type_name(other)
            ))),
        }
    }

    fn format_links(&self, text: &str) -> String {
        let text = A_LINK.replace_all(text, |caps: &Captures| self.link(&caps[1]));
        let text = SX_LINK.replace_all(&text, |caps: &Captures| self.either_link(caps));
        let text = D_LINK.replace_all(&text, |caps: &Captures| self.either_link(caps));
        text.into_owned()
    }

    fn either_link(&self, caps: &Captures) -> String {
        match (&caps[1], &caps[2]) {
            ("", "") => caps[0].to_string(),
            ("", target) => self.link(target),
            (word, _) => self.link(word),
        }
    }

    fn link(&self, word: &str) -> String {
        let slug = word.replace(' ', "-");
        if self.base_url.ends_with('/') {
            format!("[{word}]({}{slug})", self.base_url)
        } else {
            format!("[{word}]({}/{slug})", self.base_url)
        }
    }
}

impl Default for TokenFormatter {
    fn default() -> Self {
        TokenFormatter::new(DEFAULT_BASE_URL)
    }
}

pub(crate) fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
