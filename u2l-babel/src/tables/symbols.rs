//! Fixed symbol tables
//!
//! These tables never change at runtime and are not affected by external definition
//! sources, so they live in compile-time `phf` maps rather than in the built [`TableSet`].
//!
//! [`TableSet`]: super::TableSet

use phf::phf_map;

/// Combining marks that have a text-mode LaTeX accent, mapped to the accent tag.
///
/// The tag is the character following the backslash: U+0301 renders as `\'{e}`.
pub static TEXT_ACCENTS: phf::Map<char, char> = phf_map! {
    '\u{0300}' => '`',
    '\u{0301}' => '\'',
    '\u{0302}' => '^',
    '\u{0303}' => '~',
    '\u{0304}' => '=',
    '\u{0306}' => 'u',
    '\u{0307}' => '.',
    '\u{0308}' => '"',
    '\u{030A}' => 'r',
    '\u{030B}' => 'H',
    '\u{030C}' => 'v',
    '\u{0323}' => 'd',
    '\u{0327}' => 'c',
    '\u{0328}' => 'k',
    '\u{0331}' => 'b',
};

/// Math-mode counterparts of the text accent tags.
///
/// Partial: double acute, cedilla, ogonek, bar below, dot below and ring above have no
/// standard math accent and keep their text form.
pub static MATH_ACCENTS: phf::Map<char, &'static str> = phf_map! {
    '`' => "grave",
    '\'' => "acute",
    '^' => "hat",
    '~' => "tilde",
    '"' => "ddot",
    '=' => "bar",
    '.' => "dot",
    'u' => "breve",
    'v' => "check",
};

/// Typographic quotes and their ASCII ligature spelling.
pub static QUOTES: phf::Map<char, &'static str> = phf_map! {
    '\u{201C}' => "``",
    '\u{201D}' => "''",
    '\u{2018}' => "`",
    '\u{2019}' => "'",
};

/// Dashes and spaces with an ASCII spelling.
pub static DASHES: phf::Map<char, &'static str> = phf_map! {
    '\u{2010}' => "-",
    '\u{2011}' => "-",
    '\u{2013}' => "--",
    '\u{2014}' => "---",
    '\u{00A0}' => "~",
};

/// Font name fragments and their `unicode-math` commands.
///
/// Order matters: multi-word styles come before the words they contain so that a name is
/// consumed by its most specific style first.
pub static FONT_STYLES: &[(&str, &str)] = &[
    ("SANS-SERIF BOLD ITALIC", "\\symbfsfit"),
    ("SANS-SERIF BOLD", "\\symbfsf"),
    ("SANS-SERIF ITALIC", "\\symsfit"),
    ("BOLD ITALIC", "\\symbfit"),
    ("BOLD SCRIPT", "\\symbfscr"),
    ("DOUBLE-STRUCK ITALIC", "\\symbbit"),
    ("DOUBLE-STRUCK", "\\symbb"),
    ("BLACK-LETTER", "\\symfrak"),
    ("FRAKTUR", "\\symfrak"),
    ("SANS-SERIF", "\\symsf"),
    ("MONOSPACE", "\\symtt"),
    ("SCRIPT", "\\symscr"),
    ("BOLD", "\\symbf"),
    ("ITALIC", "\\symit"),
];

/// Whether `code` lies in one of the two combining diacritical blocks accents are expected in.
pub fn is_accent_block(code: u32) -> bool {
    (0x0300..=0x036F).contains(&code) || (0x20D0..=0x20FF).contains(&code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_math_accent_has_a_text_accent() {
        for tag in MATH_ACCENTS.keys() {
            assert!(TEXT_ACCENTS.values().any(|t| t == tag), "{tag}");
        }
    }

    #[test]
    fn accents_live_in_accent_blocks() {
        for mark in TEXT_ACCENTS.keys() {
            assert!(is_accent_block(*mark as u32));
        }
        assert!(!is_accent_block(0x00B4));
    }

    #[test]
    fn font_styles_are_ordered_by_specificity() {
        for (i, (name, _)) in FONT_STYLES.iter().enumerate() {
            for (later, _) in &FONT_STYLES[i + 1..] {
                assert!(!later.contains(name), "{later} must precede {name}");
            }
        }
    }
}
