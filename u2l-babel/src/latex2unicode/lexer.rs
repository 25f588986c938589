//! A pass-through lexer for LaTeX-like source
//!
//! Only the handful of categories needed for macro substitution are recognized. The lexer does
//! not expand, trim or drop anything: concatenating the [`Token::source`] of every token
//! reproduces the input exactly.
//!
//! | category     | characters      | token                     |
//! |--------------|-----------------|---------------------------|
//! | `Escape`     | `\`             | [`Token::EscapeSequence`] |
//! | `Comment`    | `%`             | [`Token::Comment`]        |
//! | `BeginGroup` | `{`             | [`Token::GroupDelimiter`] |
//! | `EndGroup`   | `}`             | [`Token::GroupDelimiter`] |
//! | `Active`     | `$` `&` `~`     | [`Token::ActiveChar`]     |
//! | `Letter`     | `a`-`z` `A`-`Z` | [`Token::PlainText`]      |
//! | `Other`      | anything else   | [`Token::PlainText`]      |

use std::iter::Peekable;
use std::str::Chars;

/// Prefix of the synthetic names given to active characters.
pub const ACTIVE_PREFIX: &str = "active::";

/// Category of a single input character.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Category {
    Escape,
    Comment,
    BeginGroup,
    EndGroup,
    Active,
    Letter,
    Other,
}

impl Category {
    pub fn of(c: char) -> Category {
        match c {
            '\\' => Category::Escape,
            '%' => Category::Comment,
            '{' => Category::BeginGroup,
            '}' => Category::EndGroup,
            '$' | '&' | '~' => Category::Active,
            c if c.is_ascii_alphabetic() => Category::Letter,
            _ => Category::Other,
        }
    }

    fn is_text(self) -> bool {
        matches!(self, Category::Letter | Category::Other)
    }
}

/// A lexed unit of source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// `\name`; the name excludes the backslash and is empty for a trailing `\`
    EscapeSequence(String),
    /// `%text`; the text excludes the `%` and the line break
    Comment(String),
    /// `{` or `}`
    GroupDelimiter(char),
    /// `$`, `&` or `~`, named `active::<char>`
    ActiveChar(String),
    /// A maximal run of ordinary characters
    PlainText(String),
}

impl Token {
    /// The exact source text of the token.
    pub fn source(&self) -> String {
        match self {
            Token::EscapeSequence(name) => format!("\\{name}"),
            Token::Comment(text) => format!("%{text}"),
            Token::GroupDelimiter(c) => c.to_string(),
            Token::ActiveChar(name) => name
                .strip_prefix(ACTIVE_PREFIX)
                .unwrap_or(name)
                .to_string(),
            Token::PlainText(text) => text.clone(),
        }
    }
}

/// Iterator over the tokens of a string.
pub struct Lexer<'a> {
    chars: Peekable<Chars<'a>>,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str) -> Self {
        Lexer {
            chars: source.chars().peekable(),
        }
    }

    fn escape_sequence(&mut self) -> Token {
        let mut name = String::new();
        match self.chars.next() {
            Some(c) if Category::of(c) == Category::Letter => {
                name.push(c);
                while let Some(c) = self.chars.next_if(|c| Category::of(*c) == Category::Letter) {
                    name.push(c);
                }
            }
            Some(c) => name.push(c),
            None => {}
        }
        Token::EscapeSequence(name)
    }

    fn comment(&mut self) -> Token {
        let mut text = String::new();
        while let Some(c) = self.chars.next_if(|c| *c != '\n' && *c != '\r') {
            text.push(c);
        }
        Token::Comment(text)
    }

    fn plain_text(&mut self, first: char) -> Token {
        let mut text = String::from(first);
        while let Some(c) = self.chars.next_if(|c| Category::of(*c).is_text()) {
            text.push(c);
        }
        Token::PlainText(text)
    }
}

impl Iterator for Lexer<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        let c = self.chars.next()?;
        let token = match Category::of(c) {
            Category::Escape => self.escape_sequence(),
            Category::Comment => self.comment(),
            Category::BeginGroup | Category::EndGroup => Token::GroupDelimiter(c),
            Category::Active => Token::ActiveChar(format!("{ACTIVE_PREFIX}{c}")),
            Category::Letter | Category::Other => self.plain_text(c),
        };
        Some(token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lex(source: &str) -> Vec<Token> {
        Lexer::new(source).collect()
    }

    #[test]
    fn escape_sequences() {
        assert_eq!(
            lex("\\alpha+\\beta"),
            vec![
                Token::EscapeSequence("alpha".to_string()),
                Token::PlainText("+".to_string()),
                Token::EscapeSequence("beta".to_string()),
            ]
        );
    }

    #[test]
    fn single_symbol_escape() {
        assert_eq!(
            lex("\\|x"),
            vec![
                Token::EscapeSequence("|".to_string()),
                Token::PlainText("x".to_string()),
            ]
        );
        assert_eq!(
            lex("\\\\"),
            vec![Token::EscapeSequence("\\".to_string())]
        );
    }

    #[test]
    fn trailing_backslash() {
        assert_eq!(
            lex("a\\"),
            vec![
                Token::PlainText("a".to_string()),
                Token::EscapeSequence(String::new()),
            ]
        );
    }

    #[test]
    fn escape_name_stops_at_non_letters() {
        assert_eq!(
            lex("\\alpha2 "),
            vec![
                Token::EscapeSequence("alpha".to_string()),
                Token::PlainText("2 ".to_string()),
            ]
        );
    }

    #[test]
    fn comments_exclude_line_break() {
        assert_eq!(
            lex("x % note\ny"),
            vec![
                Token::PlainText("x ".to_string()),
                Token::Comment(" note".to_string()),
                Token::PlainText("\ny".to_string()),
            ]
        );
        assert_eq!(lex("%"), vec![Token::Comment(String::new())]);
    }

    #[test]
    fn groups_and_actives() {
        assert_eq!(
            lex("{$~}"),
            vec![
                Token::GroupDelimiter('{'),
                Token::ActiveChar("active::$".to_string()),
                Token::ActiveChar("active::~".to_string()),
                Token::GroupDelimiter('}'),
            ]
        );
    }

    #[test]
    fn source_round_trips() {
        let source = "\\frac{a}{b} % half\n$x$ & \\| \\";
        let rebuilt: String = Lexer::new(source).map(|token| token.source()).collect();
        assert_eq!(rebuilt, source);
    }
}
