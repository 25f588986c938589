// Command definitions for both binaries.
//
// This file is also pulled into build.rs with `include!` to generate shell completions, so it
// may only depend on clap.

use clap::{Arg, ArgAction, Command, ValueHint};

/// Accent modes accepted by `--accent-mode`.
pub const ACCENT_MODES: &[&str] = &["text", "math", "auto"];

/// Encoding value that sniffs a byte-order mark and otherwise requires UTF-8.
pub const AUTO_ENCODING: &str = "AUTO";

/// Arguments shared by `unicode2latex` and `latex2unicode`.
fn common_args(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("text")
            .help("Text to convert")
            .num_args(0..)
            .value_hint(ValueHint::Other),
    )
    .arg(
        Arg::new("input")
            .short('i')
            .long("input")
            .help("Read the text to convert from a file")
            .value_name("PATH")
            .value_hint(ValueHint::FilePath),
    )
    .arg(
        Arg::new("stdin")
            .long("stdin")
            .help("Read the text to convert from standard input")
            .action(ArgAction::SetTrue),
    )
    .arg(
        Arg::new("output")
            .short('o')
            .long("output")
            .help("Write the result to a file ('-' for standard output)")
            .value_name("PATH")
            .value_hint(ValueHint::FilePath),
    )
    .arg(
        Arg::new("input-encoding")
            .long("input-encoding")
            .visible_alias("input-enc")
            .help("Encoding of file or stdin input, or AUTO to detect a byte-order mark")
            .value_name("ENCODING")
            .default_value("utf-8"),
    )
    .arg(
        Arg::new("config")
            .long("config")
            .help("Path to a u2l.toml configuration file")
            .value_name("PATH")
            .value_hint(ValueHint::FilePath),
    )
    .arg(
        Arg::new("dump-tables")
            .long("dump-tables")
            .help("Print the symbol tables as JSON and exit")
            .action(ArgAction::SetTrue),
    )
    .arg(
        Arg::new("verbose")
            .short('v')
            .long("verbose")
            .help("Log more details to stderr (repeat for more)")
            .action(ArgAction::Count),
    )
}

pub fn build_unicode2latex_cli() -> Command {
    let cmd = Command::new("unicode2latex")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Convert Unicode text to LaTeX commands")
        .long_about(
            "Convert Unicode text to LaTeX commands.\n\n\
             Accented letters become text accents (é → \\'{e}), stylized letters become font \
             commands (𝐱 → \\symbf{x}) and mathematical symbols become their unicode-math \
             macros (∩ → \\cap). Text arguments are converted one per line; file and stdin \
             input is converted line by line.",
        );
    common_args(cmd)
        .arg(
            Arg::new("prefer-unicode-math")
                .short('P')
                .long("prefer-unicode-math")
                .help("Prefer unicode-math commands over text-mode forms")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("no-fonts")
                .long("no-fonts")
                .help("Drop font styles instead of emitting \\symbf and friends")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("no-accents")
                .long("no-accents")
                .help("Leave combining accents unconverted")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("accent-mode")
                .long("accent-mode")
                .help("Which accent commands to emit")
                .value_parser(clap::builder::PossibleValuesParser::new(ACCENT_MODES)),
        )
        .arg(
            Arg::new("convert-quotes")
                .long("convert-quotes")
                .help("Convert typographic quotes to `` and ''")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("convert-dashes")
                .long("convert-dashes")
                .help("Convert en and em dashes to -- and ---")
                .action(ArgAction::SetTrue),
        )
}

pub fn build_latex2unicode_cli() -> Command {
    let cmd = Command::new("latex2unicode")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Replace LaTeX macros by Unicode characters")
        .long_about(
            "Replace LaTeX macros by Unicode characters.\n\n\
             Only the tables selected with --math and --greek (or the configuration) are used; \
             unknown macros, comments and groups are copied through unchanged. Text arguments \
             are joined with spaces.",
        );
    common_args(cmd)
        .arg(
            Arg::new("math")
                .short('M')
                .long("math")
                .help("Replace unicode-math symbol macros (\\cap → ∩)")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("greek")
                .short('G')
                .long("greek")
                .help("Replace Greek letter macros (\\alpha → 𝛼)")
                .action(ArgAction::SetTrue),
        )
}
