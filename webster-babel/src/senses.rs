//! The ordered sense table
//!
//! Records are keyed by sense number and kept in the order the walk meets them.
//! That order is the order of the rendered note, so it is load-bearing.

use crate::entry::Sense;
use crate::options::DuplicateSenses;
use crate::tokens::TokenFormatter;
use indexmap::map::Entry;
use indexmap::IndexMap;
use serde::Serialize;

/// The formatted content of one sense, ready to render.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SenseRecord {
    pub text: String,
    pub illustrations: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub divider_label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subdivision_text: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub subdivision_illustrations: Vec<String>,
}

impl SenseRecord {
    /// Format a decoded sense. Every text fragment goes through `formatter`.
    pub fn from_sense(
        sense: &Sense,
        formatter: &TokenFormatter,
        with_subdivision_illustrations: bool,
    ) -> Self {
        let mut record = SenseRecord {
            text: formatter.format(sense.text().unwrap_or_default()),
            illustrations: sense
                .illustrations()
                .iter()
                .map(|illustration| formatter.format(&illustration.t))
                .collect(),
            ..SenseRecord::default()
        };

        if let Some(division) = &sense.subdivision {
            record.divider_label = Some(division.label.clone());
            record.subdivision_text = Some(formatter.format(division.text().unwrap_or_default()));
            if with_subdivision_illustrations {
                record.subdivision_illustrations = division
                    .illustrations()
                    .iter()
                    .map(|illustration| formatter.format(&illustration.t))
                    .collect();
            }
        }

        record
    }
}

/// Insertion-ordered map from sense number to [`SenseRecord`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SenseTable {
    records: IndexMap<String, SenseRecord>,
    #[serde(skip)]
    policy: DuplicateSenses,
}

impl SenseTable {
    pub fn new(policy: DuplicateSenses) -> Self {
        SenseTable {
            records: IndexMap::new(),
            policy,
        }
    }

    /// Insert a record, resolving a repeated sense number with the table's policy.
    ///
    /// Returns the key the record ended up under, or `None` if it was dropped.
    pub fn insert(&mut self, number: &str, record: SenseRecord) -> Option<String> {
        match self.policy {
            DuplicateSenses::Last => {
                // Replacing keeps the key at its first position.
                self.records.insert(number.to_string(), record);
                Some(number.to_string())
            }
            DuplicateSenses::First => match self.records.entry(number.to_string()) {
                Entry::Occupied(_) => None,
                Entry::Vacant(slot) => {
                    slot.insert(record);
                    Some(number.to_string())
                }
            },
            DuplicateSenses::Suffix => {
                let key = self.free_key(number);
                self.records.insert(key.clone(), record);
                Some(key)
            }
        }
    }

    fn free_key(&self, number: &str) -> String {
        if !self.records.contains_key(number) {
            return number.to_string();
        }
        (2..)
            .map(|n| format!("{number} ({n})"))
            .find(|candidate| !self.records.contains_key(candidate))
            .unwrap_or_else(|| number.to_string())
    }

    pub fn get(&self, number: &str) -> Option<&SenseRecord> {
        self.records.get(number)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn numbers(&self) -> impl Iterator<Item = &str> {
        self.records.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &SenseRecord)> {
        self.records
            .iter()
            .map(|(number, record)| (number.as_str(), record))
    }
}
