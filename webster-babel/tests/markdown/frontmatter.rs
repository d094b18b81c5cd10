//! Front matter of exported notes

use crate::common::fixture_json;
use serde_json::json;
use webster_babel::{entry_to_markdown, RenderOptions};

fn front_matter_of(note: &str) -> &str {
    let end = note[3..].find("---").expect("closing delimiter") + 6;
    &note[..end]
}

#[test]
fn test_aliases_list_every_stem() {
    let note = entry_to_markdown(&fixture_json("voluminous.json")[0], &RenderOptions::default())
        .unwrap();
    assert_eq!(
        front_matter_of(&note),
        "---\naliases: voluminous, voluminously, voluminousness, voluminousnesses\n---"
    );
}

#[test]
fn test_zero_stems_keep_both_delimiters() {
    let entry = json!({ "meta": { "id": "word", "stems": [] }, "fl": "noun", "def": [] });
    let note = entry_to_markdown(&entry, &RenderOptions::default()).unwrap();
    assert_eq!(front_matter_of(&note), "---\n---");
    assert!(!note.contains("aliases:"));
}

#[test]
fn test_non_string_stems_are_ignored() {
    let entry = json!({ "meta": { "id": "word", "stems": ["word", 7, null, "words"] }, "fl": "noun" });
    let note = entry_to_markdown(&entry, &RenderOptions::default()).unwrap();
    assert!(note.starts_with("---\naliases: word, words\n---"));
}
