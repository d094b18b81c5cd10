//! Conversion of raw response bodies

use crate::common::fixture_text;
use webster_babel::{convert_response, first_entry, ConvertError, RenderOptions};

#[test]
fn test_convert_saved_response() {
    let note = convert_response(&fixture_text("voluminous.json"), &RenderOptions::default())
        .expect("response to convert");

    assert!(note.starts_with(
        "---\naliases: voluminous, voluminously, voluminousness, voluminousnesses\n---\n\n# voluminous"
    ));
    assert_eq!(note.matches("\n\n## ").count(), 6);
    assert_eq!(note.matches("\n\n### also").count(), 1);
}

#[test]
fn test_suggestions_become_not_found() {
    let err = convert_response(&fixture_text("not_found.json"), &RenderOptions::default())
        .unwrap_err()
        .for_word("volumnous");

    match &err {
        ConvertError::NotFound { word, suggestions } => {
            assert_eq!(word.as_deref(), Some("volumnous"));
            assert_eq!(
                suggestions,
                &vec!["voluminous", "voluminously", "volumes", "volume"]
            );
        }
        other => panic!("Expected NotFound, got {other:?}"),
    }
    assert!(err.to_string().contains("voluminous, voluminously"));
}

#[test]
fn test_first_entry_of_saved_response() {
    let entry = first_entry(&fixture_text("voluminous.json")).unwrap();
    assert_eq!(entry["meta"]["id"], "voluminous");
    assert_eq!(entry["fl"], "adjective");
}

#[test]
fn test_single_entry_object_is_not_a_response() {
    assert!(matches!(
        convert_response(&fixture_text("test_data.json"), &RenderOptions::default()),
        Err(ConvertError::ResponseShape(_))
    ));
}
