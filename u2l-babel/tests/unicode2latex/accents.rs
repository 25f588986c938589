//! Accent rendering in the three accent modes

use crate::common::forward;
use u2l_babel::{AccentMode, Options};

fn with_mode(mode: AccentMode, text: &str) -> String {
    forward(Options::default().with_accent_mode(mode), text)
}

#[test]
fn test_text_mode_acute() {
    assert_eq!(with_mode(AccentMode::Text, "é"), "\\'{e}");
}

#[test]
fn test_math_mode_acute() {
    assert_eq!(with_mode(AccentMode::Math, "é"), "\\acute{e}");
}

#[test]
fn test_math_mode_all_mapped_accents() {
    let cases = [
        ("è", "\\grave{e}"),
        ("ê", "\\hat{e}"),
        ("ñ", "\\tilde{n}"),
        ("ü", "\\ddot{u}"),
        ("ā", "\\bar{a}"),
        ("ż", "\\dot{z}"),
        ("ă", "\\breve{a}"),
        ("č", "\\check{c}"),
    ];
    for (input, expected) in cases {
        assert_eq!(with_mode(AccentMode::Math, input), expected, "{input}");
    }
}

#[test]
fn test_math_mode_falls_back_to_text_accents() {
    assert_eq!(with_mode(AccentMode::Math, "ő"), "\\H{o}");
    assert_eq!(with_mode(AccentMode::Math, "ą"), "\\k{a}");
    assert_eq!(with_mode(AccentMode::Math, "å"), "\\r{a}");
}

#[test]
fn test_auto_mode_is_text_mode() {
    for input in ["é", "e\u{301}", "ǖ", "ç"] {
        assert_eq!(
            with_mode(AccentMode::Auto, input),
            with_mode(AccentMode::Text, input)
        );
    }
}

#[test]
fn test_modes_never_mix() {
    let text = with_mode(AccentMode::Text, "café");
    let math = with_mode(AccentMode::Math, "café");
    assert!(text.contains("\\'{e}") && !text.contains("\\acute"));
    assert!(math.contains("\\acute{e}") && !math.contains("\\'"));
}

#[test]
fn test_combining_sequence_in_math_mode() {
    assert_eq!(with_mode(AccentMode::Math, "a\u{308}"), "\\ddot{a}");
}

#[test]
fn test_accent_after_converted_symbol() {
    assert_eq!(with_mode(AccentMode::Math, "∩\u{302}"), "\\hat{\\cap }");
}

#[test]
fn test_accents_off_keeps_characters() {
    let options = Options::default().with_accents(false);
    assert_eq!(forward(options, "naïve"), "naïve");
}
