//! Typed model of a Collegiate Dictionary entry
//!
//!     The API encodes most of an entry as tagged two-element arrays:
//!
//!         ["sense", { "sn": "1", "dt": [["text", "..."], ["vis", [{ "t": "..." }]]] }]
//!         ["pseq", [["sense", {...}], ["sense", {...}]]]
//!
//!     These are decoded into sum types at the boundary ([`SenseSequenceElement`],
//!     [`DtPair`]) so the walk in [`crate::parser`] never looks at raw JSON keys.
//!
//!     The header (`meta`, `fl`, `def`) is decoded eagerly and strictly. The sense
//!     sequence is decoded one element at a time: an element that does not have the
//!     expected shape is dropped and reported as a [`Diagnostic`], and the walk carries
//!     on with its siblings.

pub mod decode;

use serde::Deserialize;
use serde_json::Value;
use std::fmt;

/// The header of one dictionary entry plus its undecoded definition sections.
#[derive(Debug, Clone, PartialEq)]
pub struct DictionaryEntry {
    /// Headword identifier (`meta.id`), e.g. `voluminous` or `test:1`.
    pub id: String,
    /// Alternate forms (`meta.stems`), rendered as front matter aliases.
    pub stems: Vec<String>,
    /// Part of speech (`fl`). Kept but not rendered.
    pub functional_label: String,
    /// Definition sections (`def`). Only the first one is walked.
    pub definition_sections: Vec<DefinitionSection>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DefinitionSection {
    /// Verb divider (`vd`), such as "transitive verb". Not rendered.
    pub verb_divider: Option<String>,
    /// The sense sequence (`sseq`), `Value::Null` when absent.
    pub sense_sequence: Value,
}

/// One member of a sense sequence group.
#[derive(Debug, Clone, PartialEq)]
pub enum SenseSequenceElement {
    Sense(Sense),
    /// A parenthesized run of sub-senses ("1 a", "1 b", ...).
    ParenSequence(Vec<Sense>),
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Sense {
    #[serde(rename = "sn", default)]
    pub number: String,
    #[serde(default)]
    pub dt: Vec<DtPair>,
    #[serde(rename = "sdsense", default)]
    pub subdivision: Option<SenseDivision>,
}

/// A divided sense (`sdsense`), introduced by a label such as "also".
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SenseDivision {
    #[serde(rename = "sd", default)]
    pub label: String,
    #[serde(default)]
    pub dt: Vec<DtPair>,
}

/// One `[kind, payload]` pair of a defining text.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(try_from = "(String, Value)")]
pub enum DtPair {
    Text(String),
    Vis(Vec<Illustration>),
    /// Any kind we do not render (`uns`, `snote`, `ri`, ...).
    Other(String),
}

impl TryFrom<(String, Value)> for DtPair {
    type Error = String;

    fn try_from((kind, payload): (String, Value)) -> Result<Self, Self::Error> {
        match kind.as_str() {
            "text" => match payload {
                Value::String(text) => Ok(DtPair::Text(text)),
                other => Err(format!(
                    "\"text\" payload must be a string, found {}",
                    crate::tokens::json_type_name(&other)
                )),
            },
            "vis" => serde_json::from_value(payload)
                .map(DtPair::Vis)
                .map_err(|e| format!("invalid \"vis\" payload: {e}")),
            _ => Ok(DtPair::Other(kind)),
        }
    }
}

/// A verbal illustration: an example sentence using the headword.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Illustration {
    pub t: String,
}

impl Sense {
    /// The defining text. When a sense carries several text pairs, the last one wins.
    pub fn text(&self) -> Option<&str> {
        text_of(&self.dt)
    }

    /// Illustrations of the (last) `vis` pair, or none.
    pub fn illustrations(&self) -> &[Illustration] {
        illustrations_of(&self.dt)
    }
}

impl SenseDivision {
    pub fn text(&self) -> Option<&str> {
        text_of(&self.dt)
    }

    pub fn illustrations(&self) -> &[Illustration] {
        illustrations_of(&self.dt)
    }
}

fn text_of(dt: &[DtPair]) -> Option<&str> {
    dt.iter().rev().find_map(|pair| match pair {
        DtPair::Text(text) => Some(text.as_str()),
        _ => None,
    })
}

fn illustrations_of(dt: &[DtPair]) -> &[Illustration] {
    dt.iter()
        .rev()
        .find_map(|pair| match pair {
            DtPair::Vis(items) => Some(items.as_slice()),
            _ => None,
        })
        .unwrap_or(&[])
}

/// A sense sequence element that was skipped during the walk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// Location inside the definition section, e.g. `sseq[0][2].pseq[1]`.
    pub path: String,
    pub kind: DiagnosticKind,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiagnosticKind {
    /// The element does not have the shape its tag promises.
    Malformed(String),
    /// A well-formed element whose tag we do not render (`bs`, `sen`, ...).
    Unsupported(String),
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            DiagnosticKind::Malformed(reason) => {
                write!(f, "{}: skipped malformed element: {reason}", self.path)
            }
            DiagnosticKind::Unsupported(tag) => {
                write!(f, "{}: skipped unsupported element '{tag}'", self.path)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn dt_pairs_decode_into_variants() {
        let dt: Vec<DtPair> = serde_json::from_value(json!([
            ["text", "{bc}big"],
            ["vis", [{ "t": "a {wi}big{/wi} house" }]],
            ["uns", [[["text", "usage note"]]]]
        ]))
        .unwrap();

        assert_eq!(
            dt,
            vec![
                DtPair::Text("{bc}big".to_string()),
                DtPair::Vis(vec![Illustration {
                    t: "a {wi}big{/wi} house".to_string()
                }]),
                DtPair::Other("uns".to_string()),
            ]
        );
    }

    #[test]
    fn text_pair_with_non_string_payload_is_rejected() {
        let result: Result<Vec<DtPair>, _> = serde_json::from_value(json!([["text", 3]]));
        assert!(result.is_err());
    }

    #[test]
    fn sense_without_number_or_dt_defaults_to_empty() {
        let sense: Sense = serde_json::from_value(json!({})).unwrap();
        assert_eq!(sense.number, "");
        assert!(sense.dt.is_empty());
        assert!(sense.subdivision.is_none());
        assert_eq!(sense.text(), None);
        assert!(sense.illustrations().is_empty());
    }

    #[test]
    fn last_text_pair_wins() {
        let sense: Sense = serde_json::from_value(json!({
            "sn": "2",
            "dt": [["text", "first"], ["text", "second"]]
        }))
        .unwrap();
        assert_eq!(sense.text(), Some("second"));
    }

    #[test]
    fn diagnostic_display_names_the_path() {
        let diagnostic = Diagnostic {
            path: "sseq[0][1]".to_string(),
            kind: DiagnosticKind::Unsupported("bs".to_string()),
        };
        assert_eq!(
            diagnostic.to_string(),
            "sseq[0][1]: skipped unsupported element 'bs'"
        );
    }
}
