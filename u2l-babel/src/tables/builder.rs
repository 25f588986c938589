//! Table set construction
//!
//! Merge order is fixed: seed entries first, then the symbol records of every source in
//! order, then the alias definitions of every source in order. Aliases run last so that they
//! can refer to commands defined in any source.

use super::definitions::{Alias, DefinitionSource, SymbolRecord};
use super::seed::Seed;
use super::symbols::is_accent_block;
use super::{CodepointMapping, MacroMapping, TableSet};
use tracing::{info, trace, warn};

/// Incremental builder for a [`TableSet`].
pub struct TableBuilder<'a> {
    seed: &'a Seed,
    tables: TableSet,
}

impl<'a> TableBuilder<'a> {
    /// Start from the seed entries alone.
    pub fn new(seed: &'a Seed) -> Self {
        let mut tables = TableSet::default();
        for (code, command) in &seed.math {
            tables.math.insert(*code, vec![command.clone()]);
            tables.math_macros.insert(command.clone(), vec![*code]);
        }
        for (command, code) in &seed.reverse_only {
            tables.math_macros.insert(command.clone(), vec![*code]);
        }
        for (command, code) in &seed.greek {
            tables.greek_macros.insert(command.clone(), vec![*code]);
        }
        TableBuilder { seed, tables }
    }

    /// Merge every source: all symbol records first, then all aliases.
    pub fn add_sources(mut self, sources: &[DefinitionSource]) -> Self {
        for source in sources {
            for record in source.symbols() {
                self.add_symbol(&record);
            }
        }
        for source in sources {
            for alias in source.aliases() {
                self.add_alias(source.name(), &alias);
            }
        }
        self
    }

    /// Register one symbol record.
    pub fn add_symbol(&mut self, record: &SymbolRecord) {
        let code = record.codepoint;
        let command = &record.command;
        let (forward, reverse) = if record.is_accent() {
            if !is_accent_block(code as u32) {
                warn!(
                    "accent {command} code 0x{:x} out of the combining diacritical blocks",
                    code as u32
                );
            }
            (
                &mut self.tables.math_accents,
                &mut self.tables.math_accent_macros,
            )
        } else {
            (&mut self.tables.math, &mut self.tables.math_macros)
        };

        if !reverse.contains_key(command) {
            if self.seed.skips(code) {
                trace!("skip {command} 0x{:x}", code as u32);
            } else {
                reverse.insert(command.clone(), vec![code]);
                trace!("assign {command} -> 0x{:x} ({})", code as u32, record.category);
            }
        } else {
            push_code(reverse, command, code);
        }

        push_command(forward, code, command);

        for alias in record.info_aliases() {
            push_code(reverse, &alias, code);
        }
    }

    /// Make `alias.name` accept every codepoint currently registered for `alias.target`.
    pub fn add_alias(&mut self, source: &str, alias: &Alias) {
        let Some(codes) = self.tables.math_macros.get(&alias.target).cloned() else {
            trace!("{source}: unknown {} in alias for {}", alias.target, alias.name);
            return;
        };
        for code in codes {
            push_code(&mut self.tables.math_macros, &alias.name, code);
        }
        trace!("{source}: added {} for {}", alias.name, alias.target);
    }

    /// Finish construction: report ambiguous entries and derive the replacement table.
    pub fn build(mut self) -> TableSet {
        report_multiples(&self.tables.math, &self.tables.math_macros);

        let replacements = self
            .tables
            .math_macros
            .iter()
            .filter_map(|(command, codes)| {
                let canonical = self.tables.canonical_math(*codes.first()?)?;
                (canonical != command).then(|| (command.clone(), canonical.to_string()))
            })
            .collect();
        self.tables.replacements = replacements;
        self.tables
    }
}

fn push_command(mapping: &mut CodepointMapping, code: char, command: &str) {
    let commands = mapping.entry(code).or_default();
    if !commands.iter().any(|existing| existing == command) {
        commands.push(command.to_string());
    }
}

fn push_code(mapping: &mut MacroMapping, command: &str, code: char) {
    let codes = mapping.entry(command.to_string()).or_default();
    if !codes.contains(&code) {
        codes.push(code);
    }
}

fn report_multiples(forward: &CodepointMapping, reverse: &MacroMapping) {
    for (code, commands) in forward.iter().filter(|(_, v)| v.len() > 1) {
        info!("multiple unicode to latex, 0x{:x} -> {commands:?}", *code as u32);
    }
    for (command, codes) in reverse.iter().filter(|(_, v)| v.len() > 1) {
        info!("multiple latex to unicode, {command} -> {codes:?}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn build(seed: &Seed, text: &str) -> TableSet {
        TableBuilder::new(seed)
            .add_sources(&[DefinitionSource::new("test", text)])
            .build()
    }

    #[test]
    fn seed_alone_is_usable() {
        let tables = TableBuilder::new(&Seed::default()).build();
        assert_eq!(tables.math.get(&'\u{D7}'), Some(&vec!["\\times".to_string()]));
        assert_eq!(tables.math_macros.get("\\times"), Some(&vec!['\u{D7}']));
        assert_eq!(tables.math_macros.get("\\|"), Some(&vec!['\u{2016}']));
        assert_eq!(tables.greek_macros.get("\\alpha"), Some(&vec!['\u{1D6FC}']));
    }

    #[test]
    fn seed_wins_over_records() {
        let tables = build(
            &Seed::default(),
            r#"\UnicodeMathSymbol{"021D4}{\Leftrightarrow }{\mathrel}{left right double arrow}%"#,
        );
        assert_eq!(
            tables.math.get(&'\u{21D4}'),
            Some(&vec!["\\iff".to_string(), "\\Leftrightarrow".to_string()])
        );
        assert_eq!(
            tables.replacements.get("\\Leftrightarrow"),
            Some(&"\\iff".to_string())
        );
    }

    #[test]
    fn keeps_all_candidates_in_discovery_order() {
        let tables = build(
            &Seed::empty(),
            concat!(
                "\\UnicodeMathSymbol{\"02260}{\\ne }{\\mathrel}{/ne /neq not equal}%\n",
                "\\UnicodeMathSymbol{\"02A2E}{\\ne }{\\mathrel}{not really}%\n",
            ),
        );
        assert_eq!(tables.math_macros.get("\\ne"), Some(&vec!['\u{2260}', '\u{2A2E}']));
        assert_eq!(tables.math_macros.get("\\neq"), Some(&vec!['\u{2260}']));
        assert_eq!(tables.replacements.get("\\neq"), Some(&"\\ne".to_string()));
        assert_eq!(tables.replacements.get("\\ne"), None);
    }

    #[test]
    fn routes_accents_to_their_own_tables() {
        let tables = build(
            &Seed::empty(),
            concat!(
                "\\UnicodeMathSymbol{\"00301}{\\acute }{\\mathaccent}{combining acute accent}%\n",
                "\\UnicodeMathSymbol{\"023B4}{\\overbracket }{\\mathaccentwide}{top square bracket}%\n",
            ),
        );
        assert!(tables.math.is_empty());
        assert_eq!(tables.math_accent_macros.get("\\acute"), Some(&vec!['\u{301}']));
        assert_eq!(
            tables.math_accents.get(&'\u{23B4}'),
            Some(&vec!["\\overbracket".to_string()])
        );
    }

    #[test]
    fn skipped_codepoints_stay_forward_only() {
        let tables = build(
            &Seed::default(),
            r#"\UnicodeMathSymbol{"0221A}{\sqrt }{\mathradical}{radical}%"#,
        );
        assert_eq!(tables.math.get(&'\u{221A}'), Some(&vec!["\\sqrt".to_string()]));
        assert_eq!(tables.math_macros.get("\\sqrt"), None);
    }

    #[test]
    fn aliases_copy_target_codes() {
        let tables = build(
            &Seed::empty(),
            concat!(
                "\\UnicodeMathSymbol{\"02264}{\\leq }{\\mathrel}{less-than or equal to}%\n",
                "\\def\\le{\\leq}\n",
                "\\def{\\restriction}{\\upharpoonright}\n",
            ),
        );
        assert_eq!(tables.math_macros.get("\\le"), Some(&vec!['\u{2264}']));
        assert_eq!(tables.math_macros.get("\\restriction"), None);
        assert_eq!(tables.replacements.get("\\le"), Some(&"\\leq".to_string()));
    }

    #[test]
    fn aliases_may_precede_their_target_file() {
        let seed = Seed::empty();
        let tables = TableBuilder::new(&seed)
            .add_sources(&[
                DefinitionSource::new("aliases", "\\def\\to{\\rightarrow}\n"),
                DefinitionSource::new(
                    "table",
                    "\\UnicodeMathSymbol{\"02192}{\\rightarrow }{\\mathrel}{rightwards arrow}%\n",
                ),
            ])
            .build();
        assert_eq!(tables.math_macros.get("\\to"), Some(&vec!['\u{2192}']));
    }

    #[test]
    fn macros_without_forward_command_have_no_replacement() {
        let tables = TableBuilder::new(&Seed::default()).build();
        assert_eq!(tables.replacements.get("\\|"), None);
    }
}
