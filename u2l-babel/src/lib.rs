//! Conversion between Unicode text and LaTeX source
//!
//!     Two directions are provided. `unicode2latex` turns accented, stylized and mathematical
//!     characters into LaTeX commands (è → \`{e}, ℝ → \symbb{R}, ∩ → \cap). `latex2unicode`
//!     replaces known macros by the characters they stand for (\alpha → 𝛼, \cap → ∩) and copies
//!     everything else through untouched.
//!
//!     This is a pure lib: it never prints and never reads the environment. Diagnostics are
//!     emitted through `tracing`; installing a subscriber is up to the binary.
//!
//!     The file structure :
//!     .
//!     ├── error.rs
//!     ├── ucd                     # compiled Unicode names and decompositions
//!     ├── tables
//!     │   ├── seed.rs             # built-in entries
//!     │   ├── symbols.rs          # fixed accent, quote, dash and font tables
//!     │   ├── definitions.rs      # unicode-math file parsing
//!     │   ├── locate.rs           # finding those files on disk
//!     │   └── builder.rs          # merging everything into a TableSet
//!     ├── unicode2latex           # forward converter
//!     └── latex2unicode           # lexer and reverse converter
//!
//! Tables
//!
//!     All lookups go through an immutable TableSet. It is built from the seed, then the symbol
//!     records of every definition source, then their alias lines. When no unicode-math
//!     installation is found a bundled subset of the same files is used, so the library always
//!     has a working table. TableSet::standard() builds the default set once per process.
//!
//! Testing
//!     tests
//!     └── <direction>
//!         └── <testname>.rs
//!
//!     Rust does not discover tests in subdirectories, so tests/lib.rs includes them as modules.

pub mod error;
pub mod latex2unicode;
pub mod tables;
pub mod ucd;
pub mod unicode2latex;

pub use error::ConvertError;
pub use latex2unicode::Latex2Unicode;
pub use tables::TableSet;
pub use unicode2latex::{AccentMode, Options, Unicode2Latex};

/// Convert Unicode text to LaTeX with the given options over the standard tables.
pub fn unicode_to_latex(text: &str, options: Options) -> String {
    Unicode2Latex::new(options).convert_str(text)
}

/// Replace the math and Greek macros of `source` by their Unicode characters.
pub fn latex_to_unicode(source: &str) -> String {
    Latex2Unicode::from_tables(&TableSet::standard(), true, true).convert_str(source)
}
