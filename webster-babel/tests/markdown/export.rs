//! Export tests for notes (entry → Markdown)
//!
//! These tests render saved entries and check the resulting document text.

use crate::common::fixture_json;
use insta::assert_snapshot;
use serde_json::json;
use webster_babel::{EntryParser, RenderOptions};

const MARK: &str = "<mark style=\"background: #FFB8EBA6;\">test definition</mark>";

fn voluminous() -> EntryParser {
    let response = fixture_json("voluminous.json");
    EntryParser::build(&response[0], RenderOptions::default()).expect("entry to build")
}

#[test]
fn test_voluminous_note() {
    let note = voluminous().render();

    assert!(note.ends_with("</mark>\n\n"));
    assert_snapshot!(note.trim_end(), @r###"
    ---
    aliases: voluminous, voluminously, voluminousness, voluminousnesses
    ---

    # voluminous

    ## 1

    <mark style="background: #FFB8EBA6;">: having or marked by great [volume](https://www.merriam-webster.com/dictionary/volume) or bulk : [large](https://www.merriam-webster.com/dictionary/large)</mark>

    long _voluminous_ tresses

    ## 2

    <mark style="background: #FFB8EBA6;">: [numerous](https://www.merriam-webster.com/dictionary/numerous)</mark>

    trying to keep track of _voluminous_ slips of paper

    ## 3

    <mark style="background: #FFB8EBA6;">: of or relating to [volume](https://www.merriam-webster.com/dictionary/volume)</mark>



    ### also

    <mark style="background: #FFB8EBA6;">: having a large capacity</mark>



    ## 3 a

    <mark style="background: #FFB8EBA6;">: filling or capable of filling a large volume or several volumes</mark>

    a _voluminous_ literature on the subject

    ## b

    <mark style="background: #FFB8EBA6;">: writing or speaking much or at great length</mark>

    a _voluminous_ correspondent

    _voluminous_ diaries

    ## 4

    <mark style="background: #FFB8EBA6;">: consisting of many folds, coils, or convolutions : [winding](https://www.merriam-webster.com/dictionary/winding)</mark>
    "###);
}

#[test]
fn test_voluminous_sense_order() {
    let parser = voluminous();
    let numbers: Vec<_> = parser.senses().numbers().collect();
    assert_eq!(numbers, vec!["1", "2", "3", "3 a", "b", "4"]);
    assert!(parser.diagnostics().is_empty());
    assert_eq!(parser.entry().functional_label, "adjective");
}

#[test]
fn test_get_md_text() {
    let parser = EntryParser::build(&fixture_json("test_data.json"), RenderOptions::default())
        .expect("entry to build");

    let expected = format!(
        "---\naliases: test_alias\n---\n\n# test\
         \n\n## 1\n\n{MARK}\n\ntest illustration\
         \n\n### sense divider\n\n{MARK}\n\n\
         \n\n## 1 a\n\n{MARK}\n\ntest illustration"
    );
    assert_eq!(parser.render(), expected);
}

#[test]
fn test_sense_section_order() {
    let note = EntryParser::build(&fixture_json("test_data.json"), RenderOptions::default())
        .unwrap()
        .render();

    let positions: Vec<usize> = [
        "## 1\n",
        MARK,
        "test illustration",
        "### sense divider",
        "## 1 a",
    ]
    .iter()
    .map(|needle| note.find(needle).expect("section present"))
    .collect();

    let mut sorted = positions.clone();
    sorted.sort();
    assert_eq!(positions, sorted);
    assert_eq!(note.matches(MARK).count(), 3);
}

#[test]
fn test_empty_sense_sequence_renders_header_only() {
    for sseq in [json!([]), json!(null)] {
        let entry = json!({
            "meta": { "id": "lonely", "stems": ["lonely"] },
            "fl": "adjective",
            "def": [{ "sseq": sseq }]
        });
        let note = EntryParser::build(&entry, RenderOptions::default())
            .unwrap()
            .render();
        assert_eq!(note, "---\naliases: lonely\n---\n\n# lonely");
        assert!(!note.contains("## "));
    }
}

#[test]
fn test_empty_id_omits_title() {
    let entry = json!({ "meta": { "id": "", "stems": [] }, "fl": "noun", "def": [] });
    let note = EntryParser::build(&entry, RenderOptions::default())
        .unwrap()
        .render();
    assert_eq!(note, "---\n---");
}

#[test]
fn test_unnumbered_sense_has_no_heading() {
    let entry = json!({
        "meta": { "id": "ok", "stems": [] },
        "fl": "adjective",
        "def": [{ "sseq": [[["sense", { "dt": [["text", "{bc}all right"]] }]]] }]
    });
    let note = EntryParser::build(&entry, RenderOptions::default())
        .unwrap()
        .render();
    assert_eq!(
        note,
        "---\n---\n\n# ok\n\n<mark style=\"background: #FFB8EBA6;\">: all right</mark>\n\n"
    );
}

#[test]
fn test_subdivision_illustrations_are_opt_in() {
    let entry = json!({
        "meta": { "id": "word", "stems": [] },
        "fl": "noun",
        "def": [{ "sseq": [[["sense", {
            "sn": "1",
            "dt": [["text", "main"]],
            "sdsense": {
                "sd": "also",
                "dt": [["text", "divided"], ["vis", [{ "t": "a {wi}word{/wi} here" }]]]
            }
        }]]] }]
    });

    let default_note = EntryParser::build(&entry, RenderOptions::default())
        .unwrap()
        .render();
    assert!(!default_note.contains("_word_ here"));

    let options = RenderOptions {
        subdivision_illustrations: true,
        ..RenderOptions::default()
    };
    let full_note = EntryParser::build(&entry, options).unwrap().render();
    assert!(full_note.ends_with("divided</mark>\n\na _word_ here"));
}

#[test]
fn test_rendering_twice_is_identical() {
    let parser = voluminous();
    let first = parser.render();
    let second = parser.render();
    assert_eq!(first, second);
}
