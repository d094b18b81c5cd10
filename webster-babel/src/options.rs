//! Rendering options
//!
//! The link root and highlight colour are part of the note's public contract, so
//! [`RenderOptions::default`] reproduces them exactly. Everything else is a knob
//! for callers (the CLI feeds these from `webster-config`).

use serde::{Deserialize, Serialize};

/// Public entry URL root that cross-reference links point to.
pub const DEFAULT_BASE_URL: &str = "https://www.merriam-webster.com/dictionary/";

/// Background colour of the `<mark>` spans wrapping definition text.
pub const DEFAULT_HIGHLIGHT_COLOR: &str = "#FFB8EBA6";

/// What to do when two senses in one entry carry the same sense number.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DuplicateSenses {
    /// The later sense replaces the earlier one but keeps its position.
    #[default]
    Last,
    /// The first sense wins; later ones are dropped.
    First,
    /// Later senses are kept under a numbered key such as `"1 (2)"`.
    Suffix,
}

impl std::str::FromStr for DuplicateSenses {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "last" => Ok(DuplicateSenses::Last),
            "first" => Ok(DuplicateSenses::First),
            "suffix" => Ok(DuplicateSenses::Suffix),
            other => Err(format!(
                "unknown duplicate sense policy '{other}' (expected last, first or suffix)"
            )),
        }
    }
}

/// Options threaded through token formatting and Markdown rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    pub base_url: String,
    pub highlight_color: String,
    pub duplicate_senses: DuplicateSenses,
    /// Render the illustrations of a divided sense (`sdsense`) under its text.
    pub subdivision_illustrations: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        RenderOptions {
            base_url: DEFAULT_BASE_URL.to_string(),
            highlight_color: DEFAULT_HIGHLIGHT_COLOR.to_string(),
            duplicate_senses: DuplicateSenses::default(),
            subdivision_illustrations: false,
        }
    }
}
