//! Definition source parsing
//!
//! A definition source is the text of one file in the `unicode-math` data format. Two kinds of
//! lines are recognized, everything else is ignored:
//!
//! ```text
//! \UnicodeMathSymbol{"02260}{\ne }{\mathrel}{/ne /neq not equal}%
//! \def\le{\leq}
//! ```
//!
//! Symbol records carry a codepoint, the command producing it, a math class and a free-form
//! description. Alias definitions make one command accept the codepoints of another.

use once_cell::sync::Lazy;
use regex::Regex;
use std::fs;
use std::path::Path;
use tracing::warn;

const RECORD_KEYWORD: &str = "\\UnicodeMathSymbol";

static BRACED_ALIAS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\\def\s*\{(\\[a-zA-Z]*)\s*\}\s*\{\s*(\\[a-zA-Z]*)\s*\}")
        .expect("valid alias pattern")
});

static BARE_ALIAS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\\def\s*(\\[a-zA-Z]*)\s*\{\s*(\\[a-zA-Z]*)\s*\}").expect("valid alias pattern")
});

/// One `\UnicodeMathSymbol` line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolRecord {
    pub codepoint: char,
    pub command: String,
    pub category: String,
    pub info: String,
}

impl SymbolRecord {
    /// Whether the record belongs in the accent tables.
    pub fn is_accent(&self) -> bool {
        self.category.contains("accent")
    }

    /// Additional input commands listed in the description as `/name` words.
    pub fn info_aliases(&self) -> impl Iterator<Item = String> + '_ {
        self.info
            .split(' ')
            .filter_map(|word| word.strip_prefix('/'))
            .map(|name| format!("\\{name}"))
    }
}

/// One `\def` alias: `name` accepts every codepoint of `target`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alias {
    pub name: String,
    pub target: String,
}

/// The text of one definition file.
#[derive(Debug, Clone)]
pub struct DefinitionSource {
    name: String,
    text: String,
}

impl DefinitionSource {
    /// Wrap in-memory text; `name` is only used in diagnostics.
    pub fn new(name: impl Into<String>, text: impl Into<String>) -> Self {
        DefinitionSource {
            name: name.into(),
            text: text.into(),
        }
    }

    /// Read a definition file from disk.
    pub fn from_path(path: impl AsRef<Path>) -> std::io::Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)?;
        Ok(DefinitionSource::new(path.display().to_string(), text))
    }

    /// The symbol records compiled into the library.
    pub fn bundled_symbols() -> Self {
        DefinitionSource::new(
            "<bundled math-symbols.tex>",
            include_str!("../../data/math-symbols.tex"),
        )
    }

    /// The alias definitions compiled into the library.
    pub fn bundled_aliases() -> Self {
        DefinitionSource::new(
            "<bundled math-aliases.sty>",
            include_str!("../../data/math-aliases.sty"),
        )
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether any line looks like a symbol record.
    pub fn has_symbols(&self) -> bool {
        self.text
            .lines()
            .any(|line| line.trim_start().starts_with(RECORD_KEYWORD))
    }

    /// Symbol records in file order. Malformed record lines are logged and skipped.
    pub fn symbols(&self) -> Vec<SymbolRecord> {
        self.text
            .lines()
            .enumerate()
            .filter(|(_, line)| line.trim_start().starts_with(RECORD_KEYWORD))
            .filter_map(|(index, line)| {
                let record = parse_record(line);
                if record.is_none() {
                    warn!("{}:{}: malformed symbol record: {}", self.name, index + 1, line.trim());
                }
                record
            })
            .collect()
    }

    /// Alias definitions in file order, braced forms before bare forms on each line.
    pub fn aliases(&self) -> Vec<Alias> {
        let mut aliases = Vec::new();
        for line in self.text.lines() {
            for pattern in [&*BRACED_ALIAS, &*BARE_ALIAS] {
                for captures in pattern.captures_iter(line) {
                    aliases.push(Alias {
                        name: captures[1].to_string(),
                        target: captures[2].to_string(),
                    });
                }
            }
        }
        aliases
    }
}

fn parse_record(line: &str) -> Option<SymbolRecord> {
    let rest = line.trim_start().strip_prefix(RECORD_KEYWORD)?;
    let fields = braced_fields(rest, 4)?;
    let hex = fields[0].trim().trim_start_matches('"');
    let codepoint = u32::from_str_radix(hex, 16).ok().and_then(char::from_u32)?;
    let command = fields[1].trim();
    if command.is_empty() {
        return None;
    }
    Some(SymbolRecord {
        codepoint,
        command: command.to_string(),
        category: fields[2].trim().to_string(),
        info: fields[3].trim().to_string(),
    })
}

/// Split the leading `count` brace groups off `text`, honoring nested braces.
fn braced_fields(text: &str, count: usize) -> Option<Vec<&str>> {
    let mut fields = Vec::with_capacity(count);
    let mut rest = text;
    while fields.len() < count {
        rest = rest.trim_start().strip_prefix('{')?;
        let mut depth = 0usize;
        let end = rest.char_indices().find_map(|(index, c)| match c {
            '{' => {
                depth += 1;
                None
            }
            '}' if depth == 0 => Some(index),
            '}' => {
                depth -= 1;
                None
            }
            _ => None,
        })?;
        fields.push(&rest[..end]);
        rest = &rest[end + 1..];
    }
    Some(fields)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_record() {
        let source = DefinitionSource::new(
            "test",
            r#"\UnicodeMathSymbol{"02260}{\ne                     }{\mathrel}{/ne /neq not equal}%"#,
        );
        let records = source.symbols();
        assert_eq!(
            records,
            vec![SymbolRecord {
                codepoint: '\u{2260}',
                command: "\\ne".to_string(),
                category: "\\mathrel".to_string(),
                info: "/ne /neq not equal".to_string(),
            }]
        );
        let aliases: Vec<_> = records[0].info_aliases().collect();
        assert_eq!(aliases, vec!["\\ne", "\\neq"]);
    }

    #[test]
    fn detects_accent_category() {
        let source = DefinitionSource::new(
            "test",
            r#"\UnicodeMathSymbol{"00301}{\acute }{\mathaccent}{combining acute accent}%"#,
        );
        assert!(source.symbols()[0].is_accent());
    }

    #[test]
    fn skips_malformed_records() {
        let source = DefinitionSource::new(
            "test",
            concat!(
                "\\UnicodeMathSymbol{\"0ZZZZ}{\\bad }{\\mathord}{bad hex}%\n",
                "\\UnicodeMathSymbol{\"02208}{\\in }{\\mathrel}\n",
                "% \\UnicodeMathSymbol in a comment is ignored\n",
                "\\UnicodeMathSymbol{02209}{\\notin }{\\mathrel}{not an element of}%\n",
            ),
        );
        let records = source.symbols();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].codepoint, '\u{2209}');
    }

    #[test]
    fn parses_both_alias_forms() {
        let source = DefinitionSource::new(
            "test",
            "\\def\\le{\\leq}\n\\def{\\bullet}{\\smblkcircle}\n\\def \\ge { \\geq }\n",
        );
        let pairs: Vec<_> = source
            .aliases()
            .into_iter()
            .map(|alias| (alias.name, alias.target))
            .collect();
        assert_eq!(
            pairs,
            vec![
                ("\\le".to_string(), "\\leq".to_string()),
                ("\\bullet".to_string(), "\\smblkcircle".to_string()),
                ("\\ge".to_string(), "\\geq".to_string()),
            ]
        );
    }

    #[test]
    fn bundled_sources_parse() {
        let symbols = DefinitionSource::bundled_symbols().symbols();
        assert!(symbols.iter().any(|r| r.command == "\\in"));
        assert!(symbols.iter().any(|r| r.is_accent()));
        assert!(!DefinitionSource::bundled_aliases().aliases().is_empty());
    }

    #[test]
    fn reads_from_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("table.tex");
        fs::write(&path, "\\UnicodeMathSymbol{\"02208}{\\in }{\\mathrel}{element of}%\n").unwrap();
        let source = DefinitionSource::from_path(&path).unwrap();
        assert_eq!(source.name(), path.display().to_string());
        assert_eq!(source.symbols().len(), 1);
    }
}
