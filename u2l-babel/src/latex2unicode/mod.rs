//! LaTeX to Unicode conversion
//!
//! Macros found in the replacement map are substituted, every other token is copied through
//! unchanged. The map is entirely up to the caller; [`Latex2Unicode::from_tables`] assembles
//! the usual math and Greek maps from a [`TableSet`].

pub mod lexer;

pub use lexer::{Category, Lexer, Token};

use crate::tables::{ReplacementMap, TableSet};
use std::fmt;
use tracing::trace;

/// The reverse converter.
#[derive(Debug, Clone, Default)]
pub struct Latex2Unicode {
    replacements: ReplacementMap,
}

impl Latex2Unicode {
    /// Converter with the given macro map; keys include the backslash (`\alpha`, `\active::~`).
    pub fn new(replacements: ReplacementMap) -> Self {
        Latex2Unicode { replacements }
    }

    /// Converter over the math and/or Greek macros of `tables`. Greek entries win.
    pub fn from_tables(tables: &TableSet, math: bool, greek: bool) -> Self {
        let mut replacements = ReplacementMap::new();
        if math {
            replacements.extend(tables.math_replacements());
        }
        if greek {
            replacements.extend(tables.greek_replacements());
        }
        Latex2Unicode::new(replacements)
    }

    /// Add or replace one substitution.
    pub fn with_replacement(mut self, name: impl Into<String>, text: impl Into<String>) -> Self {
        self.replacements.insert(name.into(), text.into());
        self
    }

    pub fn replacements(&self) -> &ReplacementMap {
        &self.replacements
    }

    pub fn convert_str(&self, source: &str) -> String {
        let mut out = String::with_capacity(source.len());
        // Writing into a String cannot fail.
        let _ = self.convert_to(source, &mut out);
        out
    }

    /// Stream the converted text of `source` into `out`.
    pub fn convert_to<W: fmt::Write>(&self, source: &str, out: &mut W) -> fmt::Result {
        for token in Lexer::new(source) {
            match &token {
                Token::EscapeSequence(name) | Token::ActiveChar(name) => {
                    let key = format!("\\{name}");
                    match self.replacements.get(&key) {
                        Some(text) => {
                            trace!("replacing {key} with {text:?}");
                            out.write_str(text)?;
                        }
                        None => out.write_str(&token.source())?,
                    }
                }
                Token::Comment(_) | Token::GroupDelimiter(_) | Token::PlainText(_) => {
                    out.write_str(&token.source())?
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tables::{DefinitionSource, Seed};

    fn alpha_only() -> Latex2Unicode {
        Latex2Unicode::default().with_replacement("\\alpha", "α")
    }

    #[test]
    fn substitutes_known_macros() {
        assert_eq!(alpha_only().convert_str("\\alpha"), "α");
        assert_eq!(alpha_only().convert_str("$\\alpha + 1$"), "$α + 1$");
    }

    #[test]
    fn keeps_unknown_macros() {
        assert_eq!(Latex2Unicode::default().convert_str("\\foo"), "\\foo");
        assert_eq!(alpha_only().convert_str("\\alphabet"), "\\alphabet");
    }

    #[test]
    fn keeps_comments() {
        assert_eq!(
            Latex2Unicode::default().convert_str("x % comment\n"),
            "x % comment\n"
        );
        assert_eq!(alpha_only().convert_str("% \\alpha\n\\alpha"), "% \\alpha\nα");
    }

    #[test]
    fn active_characters() {
        let converter = Latex2Unicode::default().with_replacement("\\active::~", "\u{A0}");
        assert_eq!(converter.convert_str("a~b $x$ & y"), "a\u{A0}b $x$ & y");
    }

    #[test]
    fn trailing_backslash_survives() {
        assert_eq!(Latex2Unicode::default().convert_str("x\\"), "x\\");
    }

    #[test]
    fn from_tables() {
        let tables = TableSet::build(
            &Seed::default(),
            &[
                DefinitionSource::bundled_symbols(),
                DefinitionSource::bundled_aliases(),
            ],
        );
        let math = Latex2Unicode::from_tables(&tables, true, false);
        assert_eq!(math.convert_str("A \\cap B \\le C"), "A ∩ B ≤ C");
        assert_eq!(math.convert_str("\\|x\\|"), "\u{2016}x\u{2016}");

        let greek = Latex2Unicode::from_tables(&tables, false, true);
        assert_eq!(greek.convert_str("\\alpha\\cap"), "\u{1D6FC}\\cap");

        let both = Latex2Unicode::from_tables(&tables, true, true);
        assert_eq!(both.convert_str("\\Delta"), "\u{394}");
    }
}
