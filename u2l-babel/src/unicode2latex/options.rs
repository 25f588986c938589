//! Forward conversion options

use crate::error::ConvertError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// How combining accents are spelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum AccentMode {
    /// Text-mode accents such as `\'{e}`
    #[default]
    Text,
    /// Math-mode accents such as `\acute{e}`, where one exists
    Math,
    /// Reserved for context detection; currently spelled like [`AccentMode::Text`]
    Auto,
}

impl AccentMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            AccentMode::Text => "text",
            AccentMode::Math => "math",
            AccentMode::Auto => "auto",
        }
    }
}

impl FromStr for AccentMode {
    type Err = ConvertError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "text" => Ok(AccentMode::Text),
            "math" => Ok(AccentMode::Math),
            "auto" => Ok(AccentMode::Auto),
            other => Err(ConvertError::InvalidAccentMode(other.to_string())),
        }
    }
}

impl TryFrom<String> for AccentMode {
    type Error = ConvertError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl fmt::Display for AccentMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Options for [`Unicode2Latex`](super::Unicode2Latex).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    /// Wrap stylized letters in their `\sym..` font command
    pub add_font_modifiers: bool,
    /// Turn combining accents into accent commands
    pub convert_accents: bool,
    /// Consult the math table before decomposing
    pub prefer_unicode_math: bool,
    pub accent_mode: AccentMode,
    /// Spell typographic quotes as `` ` `` and `'` ligatures
    pub convert_quotes: bool,
    /// Spell dashes and the no-break space as `-`, `--`, `---` and `~`
    pub convert_dashes: bool,
    /// Caller mappings, consulted before every built-in table
    pub overrides: BTreeMap<char, String>,
}

impl Default for Options {
    fn default() -> Self {
        Options {
            add_font_modifiers: true,
            convert_accents: true,
            prefer_unicode_math: false,
            accent_mode: AccentMode::Text,
            convert_quotes: false,
            convert_dashes: false,
            overrides: BTreeMap::new(),
        }
    }
}

impl Options {
    pub fn with_accent_mode(mut self, mode: AccentMode) -> Self {
        self.accent_mode = mode;
        self
    }

    pub fn with_font_modifiers(mut self, enabled: bool) -> Self {
        self.add_font_modifiers = enabled;
        self
    }

    pub fn with_accents(mut self, enabled: bool) -> Self {
        self.convert_accents = enabled;
        self
    }

    pub fn with_unicode_math(mut self, enabled: bool) -> Self {
        self.prefer_unicode_math = enabled;
        self
    }

    pub fn with_quotes(mut self, enabled: bool) -> Self {
        self.convert_quotes = enabled;
        self
    }

    pub fn with_dashes(mut self, enabled: bool) -> Self {
        self.convert_dashes = enabled;
        self
    }

    /// Add a caller mapping; it replaces any earlier mapping for `code`.
    pub fn with_override(mut self, code: char, command: impl Into<String>) -> Self {
        self.overrides.insert(code, command.into());
        self
    }
}

/// Parse an override key: `U+00E9`, `0xE9`, or the character itself.
pub fn parse_codepoint(key: &str) -> Result<char, ConvertError> {
    let mut chars = key.chars();
    if let (Some(c), None) = (chars.next(), chars.next()) {
        return Ok(c);
    }
    let hex = key
        .strip_prefix("U+")
        .or_else(|| key.strip_prefix("u+"))
        .or_else(|| key.strip_prefix("0x"))
        .or_else(|| key.strip_prefix("0X"))
        .ok_or_else(|| ConvertError::InvalidCodepoint(key.to_string()))?;
    u32::from_str_radix(hex, 16)
        .ok()
        .and_then(char::from_u32)
        .ok_or_else(|| ConvertError::InvalidCodepoint(key.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_accent_modes() {
        assert_eq!("text".parse::<AccentMode>(), Ok(AccentMode::Text));
        assert_eq!("math".parse::<AccentMode>(), Ok(AccentMode::Math));
        assert_eq!("auto".parse::<AccentMode>(), Ok(AccentMode::Auto));
    }

    #[test]
    fn rejects_unknown_accent_mode() {
        let err = "invalid".parse::<AccentMode>().unwrap_err();
        assert_eq!(err, ConvertError::InvalidAccentMode("invalid".to_string()));
        assert!(err.to_string().contains("'text', 'math', or 'auto'"));
    }

    #[test]
    fn default_options() {
        let options = Options::default();
        assert!(options.add_font_modifiers);
        assert!(options.convert_accents);
        assert!(!options.prefer_unicode_math);
        assert_eq!(options.accent_mode, AccentMode::Text);
        assert!(!options.convert_quotes);
        assert!(!options.convert_dashes);
        assert!(options.overrides.is_empty());
    }

    #[test]
    fn parses_codepoint_keys() {
        assert_eq!(parse_codepoint("U+00E9"), Ok('é'));
        assert_eq!(parse_codepoint("0x2192"), Ok('→'));
        assert_eq!(parse_codepoint("é"), Ok('é'));
        assert!(matches!(
            parse_codepoint("U+D800"),
            Err(ConvertError::InvalidCodepoint(_))
        ));
        assert!(matches!(
            parse_codepoint("eacute"),
            Err(ConvertError::InvalidCodepoint(_))
        ));
    }
}
