//! Shared configuration loader for unicode2latex and latex2unicode.
//!
//! `defaults/u2l.default.toml` is embedded into every binary so that docs and
//! runtime behavior stay in sync. Applications layer user-specific files on top
//! of those defaults via [`Loader`] before deserializing into [`U2lConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use u2l_babel::tables::{SearchOptions, TableSet};
use u2l_babel::unicode2latex::parse_codepoint;
use u2l_babel::{AccentMode, ConvertError, Latex2Unicode, Options};

const DEFAULT_TOML: &str = include_str!("../defaults/u2l.default.toml");

/// Name of the optional per-directory configuration file.
pub const LOCAL_CONFIG_FILE: &str = "u2l.toml";

/// Top-level configuration shared by both binaries.
#[derive(Debug, Clone, Deserialize)]
pub struct U2lConfig {
    pub unicode2latex: Unicode2LatexConfig,
    pub latex2unicode: Latex2UnicodeConfig,
    pub definitions: DefinitionsConfig,
}

/// Mirrors the forward converter options.
#[derive(Debug, Clone, Deserialize)]
pub struct Unicode2LatexConfig {
    pub add_font_modifiers: bool,
    pub convert_accents: bool,
    pub prefer_unicode_math: bool,
    pub accent_mode: AccentMode,
    pub convert_quotes: bool,
    pub convert_dashes: bool,
    #[serde(default)]
    pub overrides: BTreeMap<String, String>,
}

impl TryFrom<&Unicode2LatexConfig> for Options {
    type Error = ConvertError;

    fn try_from(config: &Unicode2LatexConfig) -> Result<Self, Self::Error> {
        let mut overrides = BTreeMap::new();
        for (key, command) in &config.overrides {
            overrides.insert(parse_codepoint(key)?, command.clone());
        }
        Ok(Options {
            add_font_modifiers: config.add_font_modifiers,
            convert_accents: config.convert_accents,
            prefer_unicode_math: config.prefer_unicode_math,
            accent_mode: config.accent_mode,
            convert_quotes: config.convert_quotes,
            convert_dashes: config.convert_dashes,
            overrides,
        })
    }
}

/// Which replacement tables the reverse converter starts from.
#[derive(Debug, Clone, Deserialize)]
pub struct Latex2UnicodeConfig {
    pub math: bool,
    pub greek: bool,
    #[serde(default)]
    pub custom: BTreeMap<String, String>,
}

impl Latex2UnicodeConfig {
    /// Build the reverse converter; custom entries win over the tables.
    pub fn converter(&self, tables: &TableSet) -> Latex2Unicode {
        self.custom.iter().fold(
            Latex2Unicode::from_tables(tables, self.math, self.greek),
            |converter, (name, text)| converter.with_replacement(name.clone(), text.clone()),
        )
    }
}

/// Where definition files are looked up.
#[derive(Debug, Clone, Deserialize)]
pub struct DefinitionsConfig {
    pub search_system: bool,
    #[serde(default)]
    pub fallback_dir: Option<PathBuf>,
    #[serde(default)]
    pub paths: Vec<PathBuf>,
}

impl From<&DefinitionsConfig> for SearchOptions {
    fn from(config: &DefinitionsConfig) -> Self {
        SearchOptions {
            search_system: config.search_system,
            fallback_dir: config.fallback_dir.clone(),
            paths: config.paths.clone(),
        }
    }
}

/// Helper for layering user overrides over the built-in defaults.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Start a loader seeded with the embedded defaults.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer a configuration file. Missing files trigger an error.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer an optional configuration file (ignored if the file is absent).
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Apply a single key/value override (useful for CLI settings).
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<U2lConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<U2lConfig, ConfigError> {
    Loader::new().build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn loads_default_config() {
        let config = load_defaults().expect("defaults to deserialize");
        assert!(config.unicode2latex.add_font_modifiers);
        assert_eq!(config.unicode2latex.accent_mode, AccentMode::Text);
        assert!(config.unicode2latex.overrides.is_empty());
        assert!(!config.latex2unicode.math);
        assert!(config.definitions.search_system);
        assert!(config.definitions.paths.is_empty());
    }

    #[test]
    fn default_config_matches_default_options() {
        let config = load_defaults().expect("defaults to deserialize");
        let options = Options::try_from(&config.unicode2latex).expect("valid options");
        assert_eq!(options, Options::default());
        assert_eq!(
            SearchOptions::from(&config.definitions),
            SearchOptions::default()
        );
    }

    #[test]
    fn supports_overrides() {
        let config = Loader::new()
            .set_override("unicode2latex.accent_mode", "math")
            .expect("override to apply")
            .build()
            .expect("config to build");
        assert_eq!(config.unicode2latex.accent_mode, AccentMode::Math);
    }

    #[test]
    fn rejects_invalid_accent_mode() {
        let err = Loader::new()
            .set_override("unicode2latex.accent_mode", "bogus")
            .expect("override to apply")
            .build()
            .unwrap_err();
        assert!(err.to_string().contains("accent mode"), "{err}");
    }

    #[test]
    fn layers_files() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("u2l.toml");
        fs::write(
            &path,
            r#"
[unicode2latex]
convert_quotes = true

[unicode2latex.overrides]
"U+00B0" = "\\textdegree"

[latex2unicode]
greek = true

[latex2unicode.custom]
"\\degree" = "°"
"#,
        )
        .unwrap();

        let config = Loader::new().with_file(&path).build().expect("config to build");
        assert!(config.unicode2latex.convert_quotes);
        assert!(config.unicode2latex.add_font_modifiers);

        let options = Options::try_from(&config.unicode2latex).expect("valid options");
        assert_eq!(options.overrides.get(&'°').map(String::as_str), Some("\\textdegree"));

        let converter = config.latex2unicode.converter(&TableSet::build(
            &u2l_babel::tables::Seed::default(),
            &[],
        ));
        assert_eq!(converter.convert_str("\\alpha 90\\degree"), "\u{1D6FC} 90°");
    }

    #[test]
    fn invalid_override_key_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("u2l.toml");
        fs::write(&path, "[unicode2latex.overrides]\nnot-a-codepoint = \"x\"\n").unwrap();
        let config = Loader::new().with_file(&path).build().expect("config to build");
        assert!(matches!(
            Options::try_from(&config.unicode2latex),
            Err(ConvertError::InvalidCodepoint(_))
        ));
    }

    #[test]
    fn missing_optional_file_is_ignored() {
        let config = Loader::new()
            .with_optional_file("/nonexistent/u2l.toml")
            .build()
            .expect("config to build");
        assert!(!config.unicode2latex.convert_dashes);
    }
}
