//! Shared helpers for the integration tests

use once_cell::sync::Lazy;
use std::sync::Arc;
use u2l_babel::tables::{DefinitionSource, Seed};
use u2l_babel::{Latex2Unicode, Options, TableSet, Unicode2Latex};

/// Tables built from the bundled definitions only, independent of any TeX installation.
pub static BUNDLED: Lazy<Arc<TableSet>> = Lazy::new(|| {
    Arc::new(TableSet::build(
        &Seed::default(),
        &[
            DefinitionSource::bundled_symbols(),
            DefinitionSource::bundled_aliases(),
        ],
    ))
});

pub fn forward(options: Options, text: &str) -> String {
    Unicode2Latex::with_tables(options, Arc::clone(&BUNDLED)).convert_str(text)
}

pub fn reverse(source: &str, math: bool, greek: bool) -> String {
    Latex2Unicode::from_tables(&BUNDLED, math, greek).convert_str(source)
}
