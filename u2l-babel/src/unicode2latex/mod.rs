//! Unicode to LaTeX conversion
//!
//! Every input character goes through the same cascade, first match wins:
//!
//! 1. quote and dash substitution, when enabled
//! 2. caller overrides
//! 3. the math table, when `prefer_unicode_math` is set
//! 4. combining accents, wrapped around the previously emitted fragment
//! 5. the Unicode decomposition, rendered recursively (fonts, fractions, scripts, ...)
//! 6. Greek letters, named after their Unicode name
//! 7. the math table
//! 8. the character itself, with a warning when it is not ASCII
//!
//! Output is built as a list of fragments, one per input character, so that a combining mark
//! can take the fragment in front of it as its base. Recursive steps render into a private
//! fragment list and only hand the joined result to their caller, which keeps nested
//! constructs like `\'{\c{c}}` in order.
//!
//! Diagnostics go to `tracing` with a `'input':line:column` prefix; they never end up in the
//! converted text.

pub mod options;

pub use options::{parse_codepoint, AccentMode, Options};

use crate::tables::symbols::{DASHES, FONT_STYLES, MATH_ACCENTS, QUOTES, TEXT_ACCENTS};
use crate::tables::TableSet;
use crate::ucd::{self, Decomposition, ScriptKind};
use std::fmt;
use std::sync::Arc;
use tracing::{debug, trace, warn};

/// Where in the input a conversion currently is; only used to label diagnostics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Position {
    input: String,
    line: usize,
    column: usize,
}

impl Position {
    /// Start of `input`, which names the source (`cmdline`, `stdin` or a path).
    pub fn new(input: impl Into<String>) -> Self {
        Position {
            input: input.into(),
            line: 1,
            column: 0,
        }
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn line(&self) -> usize {
        self.line
    }

    pub fn column(&self) -> usize {
        self.column
    }

    /// Advance to the start of the next line.
    pub fn next_line(&mut self) {
        self.line += 1;
        self.column = 0;
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "'{}':{}:{}", self.input, self.line, self.column)
    }
}

/// The forward converter. Immutable, so one instance can serve concurrent callers.
#[derive(Debug, Clone)]
pub struct Unicode2Latex {
    options: Options,
    tables: Arc<TableSet>,
}

impl Default for Unicode2Latex {
    fn default() -> Self {
        Unicode2Latex::new(Options::default())
    }
}

impl Unicode2Latex {
    /// Converter over the standard table set.
    pub fn new(options: Options) -> Self {
        Unicode2Latex::with_tables(options, TableSet::standard())
    }

    pub fn with_tables(options: Options, tables: Arc<TableSet>) -> Self {
        Unicode2Latex { options, tables }
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    pub fn tables(&self) -> &TableSet {
        &self.tables
    }

    /// Convert a string labelled as command line input.
    pub fn convert_str(&self, text: &str) -> String {
        self.convert_at(text, &mut Position::new("cmdline"))
    }

    /// Convert `text`, advancing the column of `position` per character.
    pub fn convert_at(&self, text: &str, position: &mut Position) -> String {
        self.fragments(text.chars(), position).concat()
    }

    /// Convert a character sequence into its output fragments.
    pub fn fragments<I>(&self, chars: I, position: &mut Position) -> Vec<String>
    where
        I: IntoIterator<Item = char>,
    {
        let run = Run {
            engine: self,
            position,
        };
        let mut out = Vec::new();
        for c in chars {
            run.position.column += 1;
            run.push_char(c, &mut out);
        }
        out
    }
}

/// State of one conversion call.
struct Run<'a> {
    engine: &'a Unicode2Latex,
    position: &'a mut Position,
}

impl Run<'_> {
    fn options(&self) -> &Options {
        &self.engine.options
    }

    fn push_char(&self, c: char, out: &mut Vec<String>) {
        if let Some(ascii) = self.substitute(c) {
            out.push(ascii.to_string());
            return;
        }

        if let Some(command) = self.options().overrides.get(&c) {
            debug!("{}: override {c:?} U+{:04X} {command}", self.position, c as u32);
            out.push(format!("{command} "));
            return;
        }

        if self.options().prefer_unicode_math && c > '\u{7F}' {
            if let Some(command) = self.engine.tables.canonical_math(c) {
                debug!("{}: math {c:?} U+{:04X} {command}", self.position, c as u32);
                out.push(format!("{command} "));
                return;
            }
        }

        if self.options().convert_accents && ucd::is_combining_mark(c) {
            if let Some(tag) = TEXT_ACCENTS.get(&c) {
                let base = out.pop().unwrap_or_else(|| {
                    warn!("{}: accent {c:?} with no preceding base", self.position);
                    " ".to_string()
                });
                out.push(self.accent(*tag, &base));
                return;
            }
        }

        if let Some(decomposition) = Decomposition::of(c) {
            trace!("{}: decomposing {c:?} {decomposition:?}", self.position);
            if self.push_decomposition(c, decomposition, out) {
                return;
            }
        }

        self.push_fallback(c, out);
    }

    fn substitute(&self, c: char) -> Option<&'static str> {
        if self.options().convert_quotes {
            if let Some(ascii) = QUOTES.get(&c) {
                return Some(ascii);
            }
        }
        if self.options().convert_dashes {
            return DASHES.get(&c).copied();
        }
        None
    }

    /// Render a decomposition; `false` hands `c` on to the name and table lookups.
    fn push_decomposition(&self, c: char, decomposition: Decomposition, out: &mut Vec<String>) -> bool {
        let rendered = match decomposition {
            Decomposition::Fraction {
                numerator,
                denominator,
            } => format!(
                "{{\\sfrac{{{}}}{{{}}}}}",
                self.render_all(&numerator),
                self.render_all(&denominator)
            ),
            Decomposition::Font(base) => {
                let rendered = self.render(base);
                if self.options().add_font_modifiers {
                    wrap_font(ucd::name(c).unwrap_or_default(), rendered)
                } else {
                    rendered
                }
            }
            Decomposition::Small(base) => format!("{{\\scriptsize{{{}}}}}", self.render(base)),
            Decomposition::Compat(scalars) => {
                let first = scalars[0];
                if ucd::is_greek_block(first) {
                    variant(self.render(first))
                } else if ucd::name(c).is_some_and(|name| name.contains("LIGATURE")) {
                    for scalar in scalars {
                        self.push_char(scalar, out);
                    }
                    return true;
                } else {
                    warn!("{}: unsupported <compat> decomposition of {c:?}", self.position);
                    return false;
                }
            }
            Decomposition::Modifier(ScriptKind::Super, base) => format!("^{{{}}}", self.render(base)),
            Decomposition::Modifier(ScriptKind::Sub, base) => format!("_{{{}}}", self.render(base)),
            Decomposition::Unsupported(tag) => {
                warn!("{}: unsupported modifier '{tag}' in {c:?}", self.position);
                c.to_string()
            }
            Decomposition::AccentPair { base, accent } => match TEXT_ACCENTS.get(&accent) {
                Some(_) if !self.options().convert_accents => c.to_string(),
                Some(tag) => self.accent(*tag, &self.render(base)),
                None => {
                    warn!("{}: unsupported decomposition of {c:?}", self.position);
                    return false;
                }
            },
            Decomposition::Canonical(scalars) => self.render_all(&scalars),
        };
        out.push(rendered);
        true
    }

    fn push_fallback(&self, c: char, out: &mut Vec<String>) {
        if let Some(name) = ucd::name(c).filter(|name| name.starts_with("GREEK")) {
            out.push(format!("\\{} ", greek_command(name)));
            return;
        }

        if c > '\u{7F}' {
            if let Some(command) = self.engine.tables.canonical_math(c) {
                debug!("{}: math {c:?} U+{:04X} {command}", self.position, c as u32);
                out.push(format!("{command} "));
                return;
            }
            warn!(
                "{}: could not convert {c:?} U+{:04X} to ascii",
                self.position, c as u32
            );
        }
        out.push(c.to_string());
    }

    fn render(&self, c: char) -> String {
        self.render_all(&[c])
    }

    fn render_all(&self, chars: &[char]) -> String {
        let mut out = Vec::new();
        for c in chars {
            self.push_char(*c, &mut out);
        }
        out.concat()
    }

    fn accent(&self, tag: char, base: &str) -> String {
        let math = match self.options().accent_mode {
            AccentMode::Math => MATH_ACCENTS.get(&tag),
            AccentMode::Text | AccentMode::Auto => None,
        };
        match math {
            Some(command) => format!("\\{command}{{{base}}}"),
            None => format!("\\{tag}{{{base}}}"),
        }
    }
}

/// Wrap `rendered` in the font commands named by `name`; later matches wrap outside.
fn wrap_font(name: &str, rendered: String) -> String {
    let mut remaining = name.to_string();
    let mut wrapped = rendered;
    for (style, command) in FONT_STYLES {
        if let Some(start) = remaining.find(style) {
            remaining.replace_range(start..start + style.len(), "");
            wrapped = format!("{command}{{{wrapped}}}");
        }
    }
    wrapped
}

/// `\theta ` becomes `\vartheta `.
fn variant(rendered: String) -> String {
    match rendered.strip_prefix('\\') {
        Some(command) => format!("\\var{command}"),
        None => rendered,
    }
}

fn greek_command(name: &str) -> String {
    let letter = name
        .rsplit(' ')
        .next()
        .unwrap_or_default()
        .to_lowercase();
    let letter = if letter == "lamda" {
        "lambda".to_string()
    } else {
        letter
    };
    if name.contains("SMALL") {
        return letter;
    }
    let mut chars = letter.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => letter,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tables::{DefinitionSource, Seed};
    use once_cell::sync::Lazy;

    static TABLES: Lazy<Arc<TableSet>> = Lazy::new(|| {
        Arc::new(TableSet::build(
            &Seed::default(),
            &[
                DefinitionSource::bundled_symbols(),
                DefinitionSource::bundled_aliases(),
            ],
        ))
    });

    fn convert_with(options: Options, text: &str) -> String {
        Unicode2Latex::with_tables(options, Arc::clone(&TABLES)).convert_str(text)
    }

    fn convert(text: &str) -> String {
        convert_with(Options::default(), text)
    }

    #[test]
    fn ascii_passes_through() {
        assert_eq!(convert("plain text 123 {x}"), "plain text 123 {x}");
    }

    #[test]
    fn precomposed_accents() {
        assert_eq!(convert("é"), "\\'{e}");
        assert_eq!(convert("ç"), "\\c{c}");
    }

    #[test]
    fn combining_accent_wraps_previous_fragment() {
        assert_eq!(convert("e\u{301}"), "\\'{e}");
        assert_eq!(convert("\u{3B1}\u{303}"), "\\~{\\alpha }");
    }

    #[test]
    fn combining_accent_without_base() {
        assert_eq!(convert("\u{301}x"), "\\'{ }x");
    }

    #[test]
    fn nested_accents_keep_order() {
        assert_eq!(convert("ḉ"), "\\'{\\c{c}}");
        assert_eq!(convert("ǖ"), "\\={\\\"{u}}");
    }

    #[test]
    fn math_accent_mode() {
        let options = Options::default().with_accent_mode(AccentMode::Math);
        assert_eq!(convert_with(options.clone(), "é"), "\\acute{e}");
        assert_eq!(convert_with(options.clone(), "e\u{301}"), "\\acute{e}");
        assert_eq!(convert_with(options, "ç"), "\\c{c}");
    }

    #[test]
    fn auto_accent_mode_matches_text() {
        let options = Options::default().with_accent_mode(AccentMode::Auto);
        assert_eq!(convert_with(options, "é"), convert("é"));
    }

    #[test]
    fn accents_disabled() {
        let options = Options::default().with_accents(false);
        assert_eq!(convert_with(options.clone(), "é"), "é");
        assert_eq!(convert_with(options, "e\u{301}"), "e\u{301}");
    }

    #[test]
    fn font_styles() {
        assert_eq!(convert("\u{1D400}"), "\\symbf{A}");
        assert_eq!(convert("\u{1D468}"), "\\symbfit{A}");
        assert_eq!(convert("\u{1D63C}"), "\\symbfsfit{A}");
        assert_eq!(convert("ℝ"), "\\symbb{R}");
        assert_eq!(convert("\u{1D6FC}"), "\\symit{\\alpha }");
    }

    #[test]
    fn font_styles_disabled() {
        let options = Options::default().with_font_modifiers(false);
        assert_eq!(convert_with(options, "\u{1D400}"), "A");
    }

    #[test]
    fn prefers_unicode_math() {
        let options = Options::default().with_unicode_math(true);
        assert_eq!(convert_with(options, "ℝ"), "\\BbbR ");
    }

    #[test]
    fn fractions() {
        assert_eq!(convert("½"), "{\\sfrac{1}{2}}");
        assert_eq!(convert("⅒"), "{\\sfrac{1}{10}}");
        assert_eq!(convert("⅟"), "{\\sfrac{1}{}}");
    }

    #[test]
    fn scripts() {
        assert_eq!(convert("x²"), "x^{2}");
        assert_eq!(convert("a₀"), "a_{0}");
    }

    #[test]
    fn small_forms() {
        assert_eq!(convert("\u{FE50}"), "{\\scriptsize{,}}");
    }

    #[test]
    fn compat_variants_and_ligatures() {
        assert_eq!(convert("ϑ"), "\\vartheta ");
        assert_eq!(convert("ﬁ"), "fi");
    }

    #[test]
    fn greek_letters() {
        assert_eq!(convert("α"), "\\alpha ");
        assert_eq!(convert("λ"), "\\lambda ");
        assert_eq!(convert("Λ"), "\\Lambda ");
    }

    #[test]
    fn singleton_decomposition() {
        assert_eq!(convert("\u{2126}"), "\\Omega ");
    }

    #[test]
    fn math_symbols() {
        assert_eq!(convert("A∩B"), "A\\cap B");
        assert_eq!(convert("x∈S"), "x\\in S");
        assert_eq!(convert("∞"), "\\infty ");
    }

    #[test]
    fn unsupported_characters_pass_through() {
        assert_eq!(convert("㎏"), "㎏");
        assert_eq!(convert("–"), "–");
    }

    #[test]
    fn quotes_and_dashes() {
        let options = Options::default().with_quotes(true).with_dashes(true);
        assert_eq!(convert_with(options.clone(), "“x”"), "``x''");
        assert_eq!(convert_with(options.clone(), "‘a’"), "`a'");
        assert_eq!(convert_with(options, "1–2 a—b c\u{A0}d"), "1--2 a---b c~d");
    }

    #[test]
    fn overrides_win() {
        let options = Options::default()
            .with_override('é', "\\eacute")
            .with_override('∩', "\\intersect");
        assert_eq!(convert_with(options, "é∩"), "\\eacute \\intersect ");
    }

    #[test]
    fn positions_advance_per_character() {
        let engine = Unicode2Latex::with_tables(Options::default(), Arc::clone(&TABLES));
        let mut position = Position::new("input.txt");
        engine.convert_at("abc", &mut position);
        assert_eq!(position.column(), 3);
        position.next_line();
        assert_eq!((position.line(), position.column()), (2, 0));
        assert_eq!(position.to_string(), "'input.txt':2:0");
    }

    #[test]
    fn fragments_per_character() {
        let engine = Unicode2Latex::with_tables(Options::default(), Arc::clone(&TABLES));
        let fragments = engine.fragments("aé".chars(), &mut Position::new("cmdline"));
        assert_eq!(fragments, vec!["a", "\\'{e}"]);
    }

    #[test]
    fn greek_command_names() {
        assert_eq!(greek_command("GREEK SMALL LETTER FINAL SIGMA"), "sigma");
        assert_eq!(greek_command("GREEK CAPITAL LETTER LAMDA"), "Lambda");
    }
}
