//! Decoding raw JSON into the entry model
//!
//! [`decode_entry`] fails fast on a broken header. [`decode_sense_sequence`] never
//! fails: it returns the elements it could decode and reports the rest.

use super::{
    DefinitionSection, Diagnostic, DiagnosticKind, DictionaryEntry, Sense, SenseSequenceElement,
};
use crate::error::{ConvertError, Result};
use crate::tokens::json_type_name;
use serde::Deserialize;
use serde_json::Value;

/// Decode the header of an entry object.
///
/// `meta`, `meta.id` and `fl` are required. A missing `def` (or a missing `sseq`
/// inside it) simply means the entry has no senses.
pub fn decode_entry(value: &Value) -> Result<DictionaryEntry> {
    let object = value.as_object().ok_or_else(|| {
        ConvertError::InvalidArgument(format!(
            "an entry must be a JSON object, found {}",
            json_type_name(value)
        ))
    })?;

    let meta = object.get("meta").ok_or(ConvertError::MissingField("meta"))?;
    let id = meta
        .get("id")
        .and_then(Value::as_str)
        .ok_or(ConvertError::MissingField("meta.id"))?;
    let stems = meta
        .get("stems")
        .and_then(Value::as_array)
        .map(|stems| {
            stems
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default();
    let functional_label = object
        .get("fl")
        .and_then(Value::as_str)
        .ok_or(ConvertError::MissingField("fl"))?;

    let definition_sections = object
        .get("def")
        .and_then(Value::as_array)
        .map(|sections| sections.iter().map(decode_section).collect())
        .unwrap_or_default();

    Ok(DictionaryEntry {
        id: id.to_string(),
        stems,
        functional_label: functional_label.to_string(),
        definition_sections,
    })
}

fn decode_section(value: &Value) -> DefinitionSection {
    DefinitionSection {
        verb_divider: value.get("vd").and_then(Value::as_str).map(str::to_string),
        sense_sequence: value.get("sseq").cloned().unwrap_or(Value::Null),
    }
}

/// Decode a whole sense sequence into its groups, in document order.
///
/// Anything that cannot be decoded is left out and described in `diagnostics`.
pub fn decode_sense_sequence(
    sseq: &Value,
    diagnostics: &mut Vec<Diagnostic>,
) -> Vec<Vec<SenseSequenceElement>> {
    let groups = match sseq {
        Value::Null => return Vec::new(),
        Value::Array(groups) => groups,
        other => {
            diagnostics.push(malformed(
                "sseq".to_string(),
                format!("expected an array of groups, found {}", json_type_name(other)),
            ));
            return Vec::new();
        }
    };

    groups
        .iter()
        .enumerate()
        .filter_map(|(index, group)| {
            let path = format!("sseq[{index}]");
            match group.as_array() {
                Some(members) => Some(
                    members
                        .iter()
                        .enumerate()
                        .filter_map(|(position, member)| {
                            decode_element(member, &format!("{path}[{position}]"), diagnostics)
                        })
                        .collect(),
                ),
                None => {
                    diagnostics.push(malformed(
                        path,
                        format!("expected a group array, found {}", json_type_name(group)),
                    ));
                    None
                }
            }
        })
        .collect()
}

/// Decode one `[tag, payload]` member of a group.
pub fn decode_element(
    value: &Value,
    path: &str,
    diagnostics: &mut Vec<Diagnostic>,
) -> Option<SenseSequenceElement> {
    let (tag, payload) = match split_pair(value) {
        Ok(pair) => pair,
        Err(reason) => {
            diagnostics.push(malformed(path.to_string(), reason));
            return None;
        }
    };

    match tag {
        "sense" => match decode_sense(payload) {
            Ok(sense) => Some(SenseSequenceElement::Sense(sense)),
            Err(reason) => {
                diagnostics.push(malformed(path.to_string(), reason));
                None
            }
        },
        "pseq" => {
            let Some(members) = payload.as_array() else {
                diagnostics.push(malformed(
                    path.to_string(),
                    format!(
                        "\"pseq\" payload must be an array, found {}",
                        json_type_name(payload)
                    ),
                ));
                return None;
            };
            let senses = members
                .iter()
                .enumerate()
                .filter_map(|(position, member)| {
                    let member_path = format!("{path}.pseq[{position}]");
                    match split_pair(member) {
                        Ok(("sense", body)) => match decode_sense(body) {
                            Ok(sense) => Some(sense),
                            Err(reason) => {
                                diagnostics.push(malformed(member_path, reason));
                                None
                            }
                        },
                        Ok((other, _)) => {
                            diagnostics.push(unsupported(member_path, other));
                            None
                        }
                        Err(reason) => {
                            diagnostics.push(malformed(member_path, reason));
                            None
                        }
                    }
                })
                .collect();
            Some(SenseSequenceElement::ParenSequence(senses))
        }
        other => {
            diagnostics.push(unsupported(path.to_string(), other));
            None
        }
    }
}

fn decode_sense(payload: &Value) -> std::result::Result<Sense, String> {
    if !payload.is_object() {
        return Err(format!(
            "\"sense\" payload must be an object, found {}",
            json_type_name(payload)
        ));
    }
    Sense::deserialize(payload).map_err(|e| e.to_string())
}

fn split_pair(value: &Value) -> std::result::Result<(&str, &Value), String> {
    match value.as_array().map(Vec::as_slice) {
        Some([Value::String(tag), payload]) => Ok((tag.as_str(), payload)),
        Some([tag, _]) => Err(format!(
            "element tag must be a string, found {}",
            json_type_name(tag)
        )),
        Some(items) => Err(format!(
            "expected a [tag, payload] pair, found {} item(s)",
            items.len()
        )),
        None => Err(format!(
            "expected a [tag, payload] pair, found {}",
            json_type_name(value)
        )),
    }
}

fn malformed(path: String, reason: String) -> Diagnostic {
    Diagnostic {
        path,
        kind: DiagnosticKind::Malformed(reason),
    }
}

fn unsupported(path: String, tag: &str) -> Diagnostic {
    Diagnostic {
        path,
        kind: DiagnosticKind::Unsupported(tag.to_string()),
    }
}
