//! Property tests for the token formatter

use proptest::prelude::*;
use webster_babel::TokenFormatter;

fn word() -> impl Strategy<Value = String> {
    "[a-z]{1,8}( [a-z]{1,8})?"
}

fn piece() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-zA-Z ,.;:()-]{0,12}",
        Just("{bc}".to_string()),
        word().prop_map(|w| format!("{{a_link|{w}}}")),
        word().prop_map(|w| format!("{{sx|{w}||}}")),
        word().prop_map(|w| format!("{{sx||{w}|}}")),
        (word(), "[0-9]?").prop_map(|(w, n)| format!("{{sx|{w}||{n}}}")),
        (word(), word()).prop_map(|(w, t)| format!("{{d_link|{w}|{t}:1}}")),
        word().prop_map(|w| format!("{{wi}}{w}{{/wi}}")),
    ]
}

proptest! {
    #[test]
    fn text_without_open_braces_is_unchanged(text in "[^{]*") {
        let formatter = TokenFormatter::default();
        prop_assert_eq!(formatter.format(&text), text);
    }

    #[test]
    fn formatting_is_idempotent(pieces in prop::collection::vec(piece(), 0..8)) {
        let formatter = TokenFormatter::default();
        let once = formatter.format(&pieces.concat());
        prop_assert_eq!(formatter.format(&once), once.clone());
        prop_assert!(!once.contains("{bc}"), "bold colon left in {:?}", once);
        prop_assert!(!once.contains("{wi}"), "italic marker left in {:?}", once);
    }

    #[test]
    fn link_slugs_have_no_spaces(w in word()) {
        let formatter = TokenFormatter::new("https://dict.example/");
        let out = formatter.format(&format!("{{a_link|{w}}}"));
        let slug = w.replace(' ', "-");
        prop_assert_eq!(out, format!("[{w}](https://dict.example/{slug})"));
    }
}
