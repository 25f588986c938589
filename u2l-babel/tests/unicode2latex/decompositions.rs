//! Fonts, fractions, scripts and the other decomposition-driven renderings

use crate::common::forward;
use insta::assert_snapshot;
use u2l_babel::Options;

fn convert(text: &str) -> String {
    forward(Options::default(), text)
}

#[test]
fn test_bold_capital() {
    assert_eq!(convert("\u{1D400}"), "\\symbf{A}");
    assert_eq!(
        forward(Options::default().with_font_modifiers(false), "\u{1D400}"),
        "A"
    );
}

#[test]
fn test_compound_font_styles_are_not_double_wrapped() {
    assert_eq!(convert("\u{1D5D4}"), "\\symbfsf{A}");
    assert_eq!(convert("\u{1D608}"), "\\symsfit{A}");
    assert_eq!(convert("\u{1D4D0}"), "\\symbfscr{A}");
    assert_eq!(convert("\u{2145}"), "\\symbbit{D}");
    assert_eq!(convert("\u{1D504}"), "\\symfrak{A}");
    assert_eq!(convert("\u{1D670}"), "\\symtt{A}");
}

#[test]
fn test_vulgar_fractions() {
    assert_eq!(convert("½"), "{\\sfrac{1}{2}}");
    assert_eq!(convert("¾"), "{\\sfrac{3}{4}}");
    assert_eq!(convert("⅞"), "{\\sfrac{7}{8}}");
}

#[test]
fn test_super_and_subscripts() {
    assert_eq!(convert("ℝⁿ"), "\\symbb{R}^{n}");
    assert_eq!(convert("H₂O"), "H_{2}O");
}

#[test]
fn test_ligatures() {
    assert_eq!(convert("ﬀ ﬂ"), "ff fl");
}

#[test]
fn test_greek_variants() {
    assert_eq!(convert("ϐ"), "\\varbeta ");
    assert_eq!(convert("ϕ"), "\\varphi ");
}

#[test]
fn test_sentence_snapshot() {
    let options = Options::default().with_quotes(true);
    assert_snapshot!(
        forward(options, "Café “naïve” x² ≤ ½"),
        @r#"Caf\'{e} ``na\"{i}ve'' x^{2} \leq  {\sfrac{1}{2}}"#
    );
}

#[test]
fn test_math_snapshot() {
    assert_snapshot!(convert("𝐱 ∈ ℝⁿ"), @r"\symbf{x} \in  \symbb{R}^{n}");
}

#[test]
fn test_unconvertible_characters_survive() {
    assert_eq!(convert("→ ㎏ ☃"), "\\rightarrow  ㎏ ☃");
}
