//! Built-in seed data
//!
//! The seed is applied before any definition source is read and therefore wins over every
//! external record for the entries it names.

/// Entries built into the library.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Seed {
    /// Forward mappings that also register their inverse in the reverse table.
    pub math: Vec<(char, String)>,
    /// Reverse-only entries; they replace whatever the math seed registered for the macro.
    pub reverse_only: Vec<(String, char)>,
    /// Codepoints never registered as the reverse target of a record's own command.
    pub reverse_skip: Vec<char>,
    /// Greek macros and the codepoint each one produces.
    pub greek: Vec<(String, char)>,
}

impl Seed {
    /// A seed with no entries at all.
    pub fn empty() -> Self {
        Seed {
            math: Vec::new(),
            reverse_only: Vec::new(),
            reverse_skip: Vec::new(),
            greek: Vec::new(),
        }
    }

    /// Whether reverse registration of `code` is suppressed.
    pub fn skips(&self, code: char) -> bool {
        self.reverse_skip.contains(&code)
    }
}

impl Default for Seed {
    fn default() -> Self {
        Seed {
            math: owned_forward(MATH),
            reverse_only: owned_reverse(REVERSE_ONLY),
            reverse_skip: REVERSE_SKIP.to_vec(),
            greek: owned_reverse(GREEK),
        }
    }
}

fn owned_forward(entries: &[(char, &str)]) -> Vec<(char, String)> {
    entries
        .iter()
        .map(|(code, command)| (*code, command.to_string()))
        .collect()
}

fn owned_reverse(entries: &[(&str, char)]) -> Vec<(String, char)> {
    entries
        .iter()
        .map(|(command, code)| (command.to_string(), *code))
        .collect()
}

const MATH: &[(char, &str)] = &[
    ('\u{00D7}', "\\times"),
    ('\u{221E}', "\\infty"),
    ('\u{00AB}', "\\guillemotleft"),
    ('\u{00BB}', "\\guillemotright"),
    ('\u{2218}', "\\circ"),
    ('\u{21D4}', "\\iff"),
    ('\u{2014}', "---"),
];

const REVERSE_ONLY: &[(&str, char)] = &[("\\|", '\u{2016}'), ("\\iff", '\u{21D4}')];

// square root and bottom curly bracket
const REVERSE_SKIP: &[char] = &['\u{221A}', '\u{23DF}'];

// Lowercase letters resolve to the mathematical italic forms, capitals to the upright ones.
const GREEK: &[(&str, char)] = &[
    ("\\Gamma", '\u{0393}'),
    ("\\Theta", '\u{0398}'),
    ("\\Lambda", '\u{039B}'),
    ("\\Xi", '\u{039E}'),
    ("\\Pi", '\u{03A0}'),
    ("\\Sigma", '\u{03A3}'),
    ("\\Upsilon", '\u{03A5}'),
    ("\\Phi", '\u{03A6}'),
    ("\\Psi", '\u{03A8}'),
    ("\\alpha", '\u{1D6FC}'),
    ("\\beta", '\u{1D6FD}'),
    ("\\gamma", '\u{1D6FE}'),
    ("\\delta", '\u{1D6FF}'),
    ("\\varepsilon", '\u{1D700}'),
    ("\\zeta", '\u{1D701}'),
    ("\\eta", '\u{1D702}'),
    ("\\theta", '\u{1D703}'),
    ("\\vartheta", '\u{1D717}'),
    ("\\iota", '\u{1D704}'),
    ("\\kappa", '\u{1D705}'),
    ("\\lambda", '\u{1D706}'),
    ("\\mu", '\u{1D707}'),
    ("\\nu", '\u{1D708}'),
    ("\\xi", '\u{1D709}'),
    ("\\pi", '\u{1D70B}'),
    ("\\rho", '\u{1D70C}'),
    ("\\varsigma", '\u{1D70D}'),
    ("\\sigma", '\u{1D70E}'),
    ("\\tau", '\u{1D70F}'),
    ("\\upsilon", '\u{1D710}'),
    ("\\phi", '\u{1D719}'),
    ("\\varphi", '\u{1D711}'),
    ("\\chi", '\u{1D712}'),
    ("\\psi", '\u{1D713}'),
    ("\\omega", '\u{1D714}'),
    ("\\Omega", '\u{03A9}'),
    ("\\Delta", '\u{0394}'),
    ("\\epsilon", '\u{1D716}'),
    ("\\varrho", '\u{1D71A}'),
    ("\\varpi", '\u{1D71B}'),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_seed_contents() {
        let seed = Seed::default();
        assert_eq!(seed.math.len(), 7);
        assert_eq!(seed.greek.len(), 40);
        assert!(seed.skips('\u{221A}'));
        assert!(!seed.skips('\u{2218}'));
    }

    #[test]
    fn greek_macros_are_unique() {
        let seed = Seed::default();
        let mut names: Vec<_> = seed.greek.iter().map(|(name, _)| name.as_str()).collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), seed.greek.len());
    }
}
