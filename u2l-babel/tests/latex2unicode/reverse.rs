use crate::common::{forward, reverse};
use u2l_babel::latex2unicode::{Lexer, Token};
use u2l_babel::{Latex2Unicode, Options};

#[test]
fn test_caller_map() {
    let converter = Latex2Unicode::default().with_replacement("\\alpha", "α");
    assert_eq!(converter.convert_str("\\alpha"), "α");
    assert_eq!(converter.convert_str("\\foo"), "\\foo");
}

#[test]
fn test_math_and_greek() {
    assert_eq!(
        reverse("$\\alpha \\le \\beta$ % ok\n", true, true),
        "$\u{1D6FC} ≤ \u{1D6FD}$ % ok\n"
    );
}

#[test]
fn test_greek_only_leaves_math() {
    assert_eq!(reverse("\\alpha\\in", false, true), "\u{1D6FC}\\in");
}

#[test]
fn test_math_only_leaves_greek_letters_without_math_entry() {
    assert_eq!(reverse("\\varsigma \\cup", true, false), "\\varsigma ∪");
}

#[test]
fn test_nothing_selected_is_identity() {
    let source = "\\section{Intro} % \\alpha\nText with $x$ and ~ and \\\\ \\";
    assert_eq!(reverse(source, false, false), source);
}

#[test]
fn test_aliases_resolve() {
    assert_eq!(reverse("a \\to b \\neq c", true, false), "a → b ≠ c");
}

#[test]
fn test_forward_output_reverses() {
    let latex = forward(Options::default(), "A∩B⊆C");
    assert_eq!(latex, "A\\cap B\\subseteq C");
    assert_eq!(reverse(&latex, true, false), "A∩ B⊆ C");
}

#[test]
fn test_lexer_is_lossless() {
    let source = "\\begin{align} x &= \\frac{1}{2} % half\r\n\\end{align}";
    let tokens: Vec<Token> = Lexer::new(source).collect();
    assert!(tokens.contains(&Token::Comment(" half".to_string())));
    let rebuilt: String = tokens.iter().map(Token::source).collect();
    assert_eq!(rebuilt, source);
}
