//! Markdown serialization (sense table → note)
//!
//! Layout of a note:
//!
//! ```text
//! ---
//! aliases: stem, stem          (only when the entry has stems)
//! ---
//!
//! # headword
//!
//! ## 1
//!
//! <mark style="background: COLOR;">definition</mark>
//!
//! illustration
//!
//! illustration
//!
//! ### divider label
//!
//! <mark style="background: COLOR;">divided sense</mark>
//! ```
//!
//! Every heading and every highlighted definition is preceded by a blank-line
//! separator (`"\n\n"`). No trailing newline is added; the external formatter
//! normalizes line endings when it runs.

use crate::entry::DictionaryEntry;
use crate::options::RenderOptions;
use crate::senses::SenseTable;

const FRONT_MATTER_DELIMITER: &str = "---";
const SEPARATOR: &str = "\n\n";

/// Serialize an entry's header and its sense table to a Markdown note.
pub fn serialize_note(
    entry: &DictionaryEntry,
    senses: &SenseTable,
    options: &RenderOptions,
) -> String {
    let mut markdown = front_matter(&entry.stems);
    markdown.push_str(&heading(&entry.id, 1));

    for (number, record) in senses.iter() {
        markdown.push_str(&heading(number, 2));
        markdown.push_str(&definition(
            &record.text,
            &record.illustrations,
            &options.highlight_color,
        ));

        if let Some(label) = &record.divider_label {
            markdown.push_str(&heading(label, 3));
            markdown.push_str(&definition(
                record.subdivision_text.as_deref().unwrap_or_default(),
                &record.subdivision_illustrations,
                &options.highlight_color,
            ));
        }
    }

    markdown
}

/// Front matter block. The aliases line is left out for entries without stems.
pub fn front_matter(stems: &[String]) -> String {
    let mut block = format!("{FRONT_MATTER_DELIMITER}\n");
    if !stems.is_empty() {
        block.push_str(&format!("aliases: {}\n", stems.join(", ")));
    }
    block.push_str(FRONT_MATTER_DELIMITER);
    block
}

/// An ATX heading preceded by a separator, or nothing when `text` is empty.
pub fn heading(text: &str, level: usize) -> String {
    if text.is_empty() {
        return String::new();
    }
    format!("{SEPARATOR}{} {text}", "#".repeat(level))
}

/// A highlighted definition followed by its illustrations, one paragraph each.
pub fn definition(text: &str, illustrations: &[String], color: &str) -> String {
    format!(
        "{SEPARATOR}{}{SEPARATOR}{}",
        highlight(text, color),
        illustrations.join(SEPARATOR)
    )
}

/// Wrap text in a coloured `<mark>` span. Empty text yields an empty string.
pub fn highlight(text: &str, color: &str) -> String {
    if text.is_empty() {
        String::new()
    } else {
        format!("<mark style=\"background: {color};\">{text}</mark>")
    }
}
