//! Symbol tables
//!
//! A [`TableSet`] is assembled once from the built-in [`Seed`] and a list of
//! [`DefinitionSource`]s, and is read-only afterwards. Both converters borrow it through an
//! `Arc`, so a single set can serve any number of concurrent conversions.
//!
//! ```ignore
//! let tables = TableSet::build(&Seed::default(), &locate::discover(&SearchOptions::default())?);
//! assert_eq!(tables.canonical_math('∞'), Some("\\infty"));
//! ```
//!
//! [`TableSet::standard`] gives the process-wide default set, built lazily on first use.

pub mod builder;
pub mod definitions;
pub mod locate;
pub mod seed;
pub mod symbols;

pub use builder::TableBuilder;
pub use definitions::DefinitionSource;
pub use locate::SearchOptions;
pub use seed::Seed;

use once_cell::sync::Lazy;
use serde::Serialize;
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::warn;

/// Codepoint to candidate commands; the first candidate is canonical.
pub type CodepointMapping = BTreeMap<char, Vec<String>>;

/// Command (with its backslash) to candidate codepoints.
pub type MacroMapping = BTreeMap<String, Vec<char>>;

/// Macro name to the text substituted for it by the reverse converter.
pub type ReplacementMap = BTreeMap<String, String>;

static STANDARD: Lazy<Arc<TableSet>> = Lazy::new(|| {
    let sources = locate::discover(&SearchOptions::default()).unwrap_or_else(|err| {
        warn!("{err}");
        vec![
            DefinitionSource::bundled_symbols(),
            DefinitionSource::bundled_aliases(),
        ]
    });
    Arc::new(TableSet::build(&Seed::default(), &sources))
});

/// The complete set of lookup tables shared by both converters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TableSet {
    pub math: CodepointMapping,
    pub math_macros: MacroMapping,
    pub math_accents: CodepointMapping,
    pub math_accent_macros: MacroMapping,
    pub greek_macros: MacroMapping,
    /// Accepted commands whose round trip produces a different canonical command.
    pub replacements: BTreeMap<String, String>,
}

impl TableSet {
    /// Build a table set; deterministic for identical inputs.
    pub fn build(seed: &Seed, sources: &[DefinitionSource]) -> TableSet {
        TableBuilder::new(seed).add_sources(sources).build()
    }

    /// The default table set: built-in seed plus the discovered (or bundled) definitions.
    pub fn standard() -> Arc<TableSet> {
        Arc::clone(&STANDARD)
    }

    /// Canonical command producing `code`.
    pub fn canonical_math(&self, code: char) -> Option<&str> {
        self.math
            .get(&code)
            .and_then(|commands| commands.first())
            .map(String::as_str)
    }

    /// Each math macro mapped to its first codepoint.
    pub fn math_replacements(&self) -> ReplacementMap {
        first_codes(&self.math_macros)
    }

    /// Each Greek macro mapped to its codepoint.
    pub fn greek_replacements(&self) -> ReplacementMap {
        first_codes(&self.greek_macros)
    }
}

fn first_codes(mapping: &MacroMapping) -> ReplacementMap {
    mapping
        .iter()
        .filter_map(|(command, codes)| Some((command.clone(), codes.first()?.to_string())))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_tables_cover_common_symbols() {
        let tables = TableSet::standard();
        assert_eq!(tables.canonical_math('\u{221E}'), Some("\\infty"));
        assert_eq!(tables.canonical_math('\u{2208}'), Some("\\in"));
        assert_eq!(tables.canonical_math('\u{2218}'), Some("\\circ"));
        assert!(tables.math_macros.contains_key("\\leq"));
    }

    #[test]
    fn standard_is_shared() {
        assert!(Arc::ptr_eq(&TableSet::standard(), &TableSet::standard()));
    }

    #[test]
    fn build_is_deterministic() {
        let sources = [
            DefinitionSource::bundled_symbols(),
            DefinitionSource::bundled_aliases(),
        ];
        let first = TableSet::build(&Seed::default(), &sources);
        let second = TableSet::build(&Seed::default(), &sources);
        assert_eq!(first, second);
        assert_eq!(format!("{first:?}"), format!("{second:?}"));
    }

    #[test]
    fn replacement_maps() {
        let tables = TableSet::build(&Seed::default(), &[]);
        let greek = tables.greek_replacements();
        assert_eq!(greek.get("\\alpha").map(String::as_str), Some("\u{1D6FC}"));
        assert_eq!(greek.len(), 40);
        let math = tables.math_replacements();
        assert_eq!(math.get("\\times").map(String::as_str), Some("\u{D7}"));
        assert_eq!(math.get("\\|").map(String::as_str), Some("\u{2016}"));
    }
}
