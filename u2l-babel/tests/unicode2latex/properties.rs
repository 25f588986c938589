//! Property tests over generated input

use crate::common::forward;
use proptest::prelude::*;
use u2l_babel::{AccentMode, Options};

proptest! {
    #[test]
    fn ascii_passes_through(text in "[\\x00-\\x7F]{0,64}") {
        prop_assert_eq!(forward(Options::default(), &text), text.clone());
        let everything = Options::default()
            .with_unicode_math(true)
            .with_quotes(true)
            .with_dashes(true);
        prop_assert_eq!(forward(everything, &text), text);
    }

    #[test]
    fn conversion_is_repeatable(text in "\\PC{0,32}") {
        let options = Options::default().with_accent_mode(AccentMode::Math);
        prop_assert_eq!(forward(options.clone(), &text), forward(options, &text));
    }

    #[test]
    fn accented_letters_use_one_mode(base in "[a-z]", mark in prop::sample::select(vec!['\u{300}', '\u{301}', '\u{302}', '\u{308}'])) {
        let text = format!("{base}{mark}");
        let as_text = forward(Options::default(), &text);
        let as_math = forward(Options::default().with_accent_mode(AccentMode::Math), &text);
        let wrapped = format!("{{{base}}}");
        prop_assert!(as_text.ends_with(&wrapped));
        prop_assert!(as_math.ends_with(&wrapped));
        prop_assert_ne!(as_text, as_math);
    }
}
