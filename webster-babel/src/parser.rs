//! Entry parser: sense sequence walk and note rendering
//!
//! Building a parser decodes the entry header, walks the first definition section's
//! sense sequence and fills the [`SenseTable`]. Rendering is a pure function of that
//! state, so it can be called any number of times.
//!
//! Walk order:
//!
//! ```text
//! sseq: [ group, group, ... ]             groups in order
//! group: [ sense, pseq, sense, ... ]      members in order
//! pseq: [ sense, sense, ... ]             flattened in place
//! ```

use crate::entry::decode::{decode_entry, decode_sense_sequence};
use crate::entry::{Diagnostic, DiagnosticKind, DictionaryEntry, Sense, SenseSequenceElement};
use crate::error::Result;
use crate::markdown::serialize_note;
use crate::options::RenderOptions;
use crate::senses::{SenseRecord, SenseTable};
use crate::tokens::TokenFormatter;
use serde_json::Value;

/// Converts one dictionary entry into a Markdown note.
#[derive(Debug, Clone)]
pub struct EntryParser {
    entry: DictionaryEntry,
    senses: SenseTable,
    diagnostics: Vec<Diagnostic>,
    options: RenderOptions,
}

impl EntryParser {
    /// Decode an entry object and build its sense table.
    ///
    /// Fails only when the header is unusable (see [`decode_entry`]).
    pub fn build(value: &Value, options: RenderOptions) -> Result<Self> {
        let entry = decode_entry(value)?;
        Ok(Self::from_entry(entry, options))
    }

    /// Build the sense table of an already decoded entry.
    pub fn from_entry(entry: DictionaryEntry, options: RenderOptions) -> Self {
        let formatter = TokenFormatter::new(options.base_url.clone());
        let mut senses = SenseTable::new(options.duplicate_senses);
        let mut diagnostics = Vec::new();

        if let Some(section) = entry.definition_sections.first() {
            let groups = decode_sense_sequence(&section.sense_sequence, &mut diagnostics);
            for element in groups.iter().flatten() {
                match element {
                    SenseSequenceElement::Sense(sense) => {
                        add_sense(&mut senses, sense, &formatter, &options);
                    }
                    SenseSequenceElement::ParenSequence(members) => {
                        for sense in members {
                            add_sense(&mut senses, sense, &formatter, &options);
                        }
                    }
                }
            }
        }

        for diagnostic in &diagnostics {
            match diagnostic.kind {
                DiagnosticKind::Malformed(_) => log::warn!("{}: {diagnostic}", entry.id),
                DiagnosticKind::Unsupported(_) => log::debug!("{}: {diagnostic}", entry.id),
            }
        }
        log::debug!(
            "{}: {} sense(s), {} skipped element(s)",
            entry.id,
            senses.len(),
            diagnostics.len()
        );

        EntryParser {
            entry,
            senses,
            diagnostics,
            options,
        }
    }

    pub fn entry(&self) -> &DictionaryEntry {
        &self.entry
    }

    pub fn senses(&self) -> &SenseTable {
        &self.senses
    }

    /// Elements skipped during the walk, in document order.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Render the note. Identical output on every call.
    pub fn render(&self) -> String {
        serialize_note(&self.entry, &self.senses, &self.options)
    }
}

fn add_sense(
    senses: &mut SenseTable,
    sense: &Sense,
    formatter: &TokenFormatter,
    options: &RenderOptions,
) {
    let record = SenseRecord::from_sense(sense, formatter, options.subdivision_illustrations);
    if senses.insert(&sense.number, record).is_none() {
        log::debug!("dropped repeated sense number '{}'", sense.number);
    }
}
