//! Locating definition files on disk
//!
//! Lookup order: explicitly configured paths, then `kpsewhich` (with the `kpathsea` feature),
//! then a fixed TeX Live directory. When none of the sources found carries symbol records the
//! bundled definition set is used instead, so discovery never fails for lack of a TeX
//! installation.

use super::definitions::DefinitionSource;
use crate::error::ConvertError;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// TeX Live location of the `unicode-math` package files.
pub const DEFAULT_FALLBACK_DIR: &str = "/usr/share/texlive/texmf-dist/tex/latex/unicode-math";

/// The symbol table shipped with `unicode-math`.
pub const TABLE_FILE: &str = "unicode-math-table.tex";

/// The XeTeX style file carrying the alias definitions.
pub const ALIAS_FILE: &str = "unicode-math-xetex.sty";

/// Where to look for definition files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchOptions {
    /// Query the TeX installation (`kpsewhich`, then `fallback_dir`).
    pub search_system: bool,
    pub fallback_dir: Option<PathBuf>,
    /// Files read before anything found on the system.
    pub paths: Vec<PathBuf>,
}

impl Default for SearchOptions {
    fn default() -> Self {
        SearchOptions {
            search_system: true,
            fallback_dir: Some(PathBuf::from(DEFAULT_FALLBACK_DIR)),
            paths: Vec::new(),
        }
    }
}

/// Collect the definition sources described by `options`.
///
/// Explicit paths must be readable; system files that cannot be found are skipped with a
/// warning.
pub fn discover(options: &SearchOptions) -> Result<Vec<DefinitionSource>, ConvertError> {
    let mut sources = Vec::new();
    for path in &options.paths {
        let source = DefinitionSource::from_path(path).map_err(|err| {
            ConvertError::Io(format!("cannot read definitions {}: {err}", path.display()))
        })?;
        sources.push(source);
    }

    if options.search_system {
        for file in [TABLE_FILE, ALIAS_FILE] {
            match locate(file, options.fallback_dir.as_deref()) {
                Some(path) => match DefinitionSource::from_path(&path) {
                    Ok(source) => {
                        debug!("using definitions from {}", path.display());
                        sources.push(source);
                    }
                    Err(err) => warn!("cannot read {}: {err}", path.display()),
                },
                None => warn!("cannot locate {file}"),
            }
        }
    }

    if !sources.iter().any(DefinitionSource::has_symbols) {
        debug!("no symbol table found, using the bundled definitions");
        sources.push(DefinitionSource::bundled_symbols());
        sources.push(DefinitionSource::bundled_aliases());
    }
    Ok(sources)
}

/// Find `file` through `kpsewhich`, falling back to `fallback_dir`.
pub fn locate(file: &str, fallback_dir: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = kpsewhich(file) {
        return Some(path);
    }
    debug!("kpsewhich: cannot locate {file}");
    fallback_dir
        .map(|dir| dir.join(file))
        .filter(|path| path.is_file())
}

#[cfg(feature = "kpathsea")]
fn kpsewhich(file: &str) -> Option<PathBuf> {
    let program = which::which("kpsewhich").ok()?;
    let output = std::process::Command::new(program).arg(file).output().ok()?;
    if !output.status.success() {
        return None;
    }
    let path = PathBuf::from(String::from_utf8_lossy(&output.stdout).trim());
    path.is_file().then_some(path)
}

#[cfg(not(feature = "kpathsea"))]
fn kpsewhich(_file: &str) -> Option<PathBuf> {
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn offline() -> SearchOptions {
        SearchOptions {
            search_system: false,
            fallback_dir: None,
            paths: Vec::new(),
        }
    }

    #[test]
    fn falls_back_to_bundled_definitions() {
        let sources = discover(&offline()).unwrap();
        let names: Vec<_> = sources.iter().map(|s| s.name().to_string()).collect();
        assert_eq!(
            names,
            vec!["<bundled math-symbols.tex>", "<bundled math-aliases.sty>"]
        );
    }

    #[test]
    fn explicit_table_replaces_bundled_definitions() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("table.tex");
        fs::write(&path, "\\UnicodeMathSymbol{\"02208}{\\in }{\\mathrel}{element of}%\n").unwrap();
        let options = SearchOptions {
            paths: vec![path],
            ..offline()
        };
        let sources = discover(&options).unwrap();
        assert_eq!(sources.len(), 1);
    }

    #[test]
    fn explicit_aliases_keep_bundled_symbols() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("aliases.sty");
        fs::write(&path, "\\def\\elem{\\in}\n").unwrap();
        let options = SearchOptions {
            paths: vec![path],
            ..offline()
        };
        assert_eq!(discover(&options).unwrap().len(), 3);
    }

    #[test]
    fn missing_explicit_path_is_an_error() {
        let options = SearchOptions {
            paths: vec![PathBuf::from("/nonexistent/unicode-math-table.tex")],
            ..offline()
        };
        assert!(matches!(discover(&options), Err(ConvertError::Io(_))));
    }

    #[test]
    fn locates_in_fallback_dir() {
        let dir = tempfile::tempdir().unwrap();
        let name = "u2l-locate-test-file.tex";
        fs::write(dir.path().join(name), "").unwrap();
        assert_eq!(
            locate(name, Some(dir.path())),
            Some(dir.path().join(name))
        );
        assert_eq!(locate("u2l-missing-file.tex", Some(dir.path())), None);
    }
}
