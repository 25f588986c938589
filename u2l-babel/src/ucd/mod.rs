//! Unicode character database access
//!
//! The converter needs two character properties that the standard library does not expose:
//! the raw decomposition mapping (field 5 of `UnicodeData.txt`) and the character name.
//! Both are compiled in from [`tables`], which is generated from a single Unicode version so
//! that names and decompositions always agree with each other.
//!
//! Names are only kept for the characters the forward converter inspects by name: characters
//! with a `<font>` or `<compat>` decomposition and every character of the Greek repertoire.

mod tables;

use tables::{DECOMPOSITIONS, NAMES};

/// FRACTION SLASH, the separator used inside `<fraction>` decompositions.
const FRACTION_SLASH: char = '\u{2044}';

/// The Unicode version the compiled tables were generated from.
pub fn unicode_version() -> &'static str {
    tables::UNICODE_VERSION
}

/// Raw decomposition mapping of a character, e.g. `"<font> 0041"` or `"0065 0301"`.
pub fn decomposition(c: char) -> Option<&'static str> {
    lookup(DECOMPOSITIONS, c)
}

/// Character name, for the characters whose names are compiled in.
pub fn name(c: char) -> Option<&'static str> {
    lookup(NAMES, c)
}

/// Whether `c` belongs to one of the combining diacritical mark blocks.
pub fn is_combining_mark(c: char) -> bool {
    matches!(
        c,
        '\u{0300}'..='\u{036F}'
            | '\u{1AB0}'..='\u{1AFF}'
            | '\u{1DC0}'..='\u{1DFF}'
            | '\u{20D0}'..='\u{20FF}'
            | '\u{FE20}'..='\u{FE2F}'
    )
}

/// Whether `c` lies in the Greek and Coptic block.
pub fn is_greek_block(c: char) -> bool {
    matches!(c, '\u{0370}'..='\u{03FF}')
}

fn lookup(table: &'static [(char, &'static str)], c: char) -> Option<&'static str> {
    table
        .binary_search_by_key(&c, |(key, _)| *key)
        .ok()
        .map(|index| table[index].1)
}

/// Superscript or subscript modifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScriptKind {
    Super,
    Sub,
}

/// A decomposition mapping classified by its formatting tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decomposition {
    /// `<font>`: a stylized variant of `base`
    Font(char),
    /// `<small>`: a small variant of `base`
    Small(char),
    /// `<compat>`: an unspecified compatibility variant of the scalar sequence
    Compat(Vec<char>),
    /// `<super>` / `<sub>`
    Modifier(ScriptKind, char),
    /// `<fraction>`, split at the fraction slash
    Fraction {
        numerator: Vec<char>,
        denominator: Vec<char>,
    },
    /// Untagged pair of a base and a (possibly combining) second scalar
    AccentPair { base: char, accent: char },
    /// Any other untagged decomposition
    Canonical(Vec<char>),
    /// A bracketed tag the converter has no rendering for, e.g. `<square>`
    Unsupported(String),
}

impl Decomposition {
    /// Classify the decomposition of `c`, if it has one.
    pub fn of(c: char) -> Option<Decomposition> {
        decomposition(c).and_then(Decomposition::parse)
    }

    /// Parse a raw decomposition mapping.
    ///
    /// Returns `None` for an empty mapping or one whose scalars are not valid hexadecimal
    /// codepoints.
    pub fn parse(raw: &str) -> Option<Decomposition> {
        let mut words = raw.split_whitespace().peekable();
        let tag = match words.peek() {
            Some(word) if word.starts_with('<') => words.next(),
            Some(_) => None,
            None => return None,
        };
        let scalars = words.map(parse_scalar).collect::<Option<Vec<char>>>()?;
        let first = *scalars.first()?;

        let decomposition = match tag {
            None => match scalars.as_slice() {
                [base, accent] => Decomposition::AccentPair {
                    base: *base,
                    accent: *accent,
                },
                _ => Decomposition::Canonical(scalars),
            },
            Some("<font>") => Decomposition::Font(first),
            Some("<small>") => Decomposition::Small(first),
            Some("<compat>") => Decomposition::Compat(scalars),
            Some("<super>") => Decomposition::Modifier(ScriptKind::Super, first),
            Some("<sub>") => Decomposition::Modifier(ScriptKind::Sub, first),
            Some("<fraction>") => {
                let split = scalars
                    .iter()
                    .position(|c| *c == FRACTION_SLASH || *c == '/')
                    .unwrap_or(scalars.len());
                Decomposition::Fraction {
                    numerator: scalars[..split].to_vec(),
                    denominator: scalars.get(split + 1..).unwrap_or_default().to_vec(),
                }
            }
            Some(other) => Decomposition::Unsupported(other.to_string()),
        };
        Some(decomposition)
    }
}

fn parse_scalar(word: &str) -> Option<char> {
    u32::from_str_radix(word, 16).ok().and_then(char::from_u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tables_are_sorted() {
        assert!(DECOMPOSITIONS.windows(2).all(|w| w[0].0 < w[1].0));
        assert!(NAMES.windows(2).all(|w| w[0].0 < w[1].0));
    }

    #[test]
    fn looks_up_decompositions() {
        assert_eq!(decomposition('é'), Some("0065 0301"));
        assert_eq!(decomposition('\u{1D400}'), Some("<font> 0041"));
        assert_eq!(decomposition('a'), None);
    }

    #[test]
    fn looks_up_names() {
        assert_eq!(name('α'), Some("GREEK SMALL LETTER ALPHA"));
        assert_eq!(name('\u{1D400}'), Some("MATHEMATICAL BOLD CAPITAL A"));
        assert_eq!(name('\u{FB01}'), Some("LATIN SMALL LIGATURE FI"));
        assert_eq!(name('a'), None);
    }

    #[test]
    fn classifies_font() {
        assert_eq!(Decomposition::of('ℝ'), Some(Decomposition::Font('R')));
    }

    #[test]
    fn classifies_accent_pair() {
        assert_eq!(
            Decomposition::of('è'),
            Some(Decomposition::AccentPair {
                base: 'e',
                accent: '\u{0300}'
            })
        );
    }

    #[test]
    fn classifies_fraction() {
        assert_eq!(
            Decomposition::of('½'),
            Some(Decomposition::Fraction {
                numerator: vec!['1'],
                denominator: vec!['2'],
            })
        );
        assert_eq!(
            Decomposition::of('⅒'),
            Some(Decomposition::Fraction {
                numerator: vec!['1'],
                denominator: vec!['1', '0'],
            })
        );
    }

    #[test]
    fn classifies_fraction_numerator_one() {
        assert_eq!(
            Decomposition::of('⅟'),
            Some(Decomposition::Fraction {
                numerator: vec!['1'],
                denominator: vec![],
            })
        );
    }

    #[test]
    fn classifies_modifiers() {
        assert_eq!(
            Decomposition::of('²'),
            Some(Decomposition::Modifier(ScriptKind::Super, '2'))
        );
        assert_eq!(
            Decomposition::of('₀'),
            Some(Decomposition::Modifier(ScriptKind::Sub, '0'))
        );
    }

    #[test]
    fn classifies_unsupported_tag() {
        assert_eq!(
            Decomposition::of('㎏'),
            Some(Decomposition::Unsupported("<square>".to_string()))
        );
    }

    #[test]
    fn classifies_singleton() {
        assert_eq!(
            Decomposition::of('\u{2126}'),
            Some(Decomposition::Canonical(vec!['\u{03A9}']))
        );
    }

    #[test]
    fn rejects_malformed_mappings() {
        assert_eq!(Decomposition::parse(""), None);
        assert_eq!(Decomposition::parse("<font>"), None);
        assert_eq!(Decomposition::parse("zzzz 0301"), None);
    }

    #[test]
    fn combining_marks() {
        assert!(is_combining_mark('\u{0301}'));
        assert!(is_combining_mark('\u{20D7}'));
        assert!(!is_combining_mark('e'));
    }
}
