//! Command-line front end for unicode2latex and latex2unicode
//!
//! Both binaries share the same plumbing: pick exactly one input source (text arguments,
//! `--input` or `--stdin`), decode it, load the layered configuration, build the tables and write
//! the result to stdout or `--output`. Diagnostics from the converters go through `tracing`;
//! [`init_logging`] routes them to stderr.
//!
//! Configuration:
//!
//!     The defaults embedded in u2l-config are layered with an optional `u2l.toml` in the working
//!     directory, then with `--config <path>`. Command-line flags win over both: boolean flags
//!     can only switch a behavior on (or off, for `--no-*`), `--accent-mode` replaces the
//!     configured mode.
//!
//! Errors are reported on stderr and exit with status 1.

pub mod cli;
pub mod input;

use clap::ArgMatches;
use input::InputEncoding;
use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;
use u2l_babel::tables::{locate, SearchOptions, Seed, TableSet};
use u2l_babel::unicode2latex::Position;
use u2l_babel::{AccentMode, ConvertError, Latex2Unicode, Options, Unicode2Latex};
use u2l_config::{Loader, U2lConfig, LOCAL_CONFIG_FILE};

/// Where the text to convert comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    Text(Vec<String>),
    File(PathBuf),
    Stdin,
}

impl Source {
    /// The single input source selected on the command line, if exactly one was given.
    pub fn from_matches(matches: &ArgMatches) -> Option<Source> {
        let text: Vec<String> = matches
            .get_many::<String>("text")
            .map(|values| values.cloned().collect())
            .unwrap_or_default();
        let file = matches.get_one::<String>("input");
        let stdin = matches.get_flag("stdin");

        match (text.is_empty(), file, stdin) {
            (false, None, false) => Some(Source::Text(text)),
            (true, Some(path), false) => Some(Source::File(PathBuf::from(path))),
            (true, None, true) => Some(Source::Stdin),
            _ => None,
        }
    }

    /// Name used in diagnostics.
    pub fn label(&self) -> String {
        match self {
            Source::Text(_) => "cmdline".to_string(),
            Source::File(path) => path.display().to_string(),
            Source::Stdin => "stdin".to_string(),
        }
    }

    /// Read and decode file or stdin input. Text arguments are returned joined by `separator`.
    pub fn read(&self, encoding: InputEncoding, separator: &str) -> Result<String, String> {
        let bytes = match self {
            Source::Text(text) => return Ok(text.join(separator)),
            Source::File(path) => fs::read(path)
                .map_err(|e| format!("Error reading file '{}': {e}", path.display()))?,
            Source::Stdin => {
                let mut bytes = Vec::new();
                io::stdin()
                    .read_to_end(&mut bytes)
                    .map_err(|e| format!("Error reading stdin: {e}"))?;
                bytes
            }
        };
        encoding.decode(&bytes).map_err(|e| format!("Error: {e}"))
    }
}

/// Install the stderr subscriber. `RUST_LOG` takes precedence over `-v`.
pub fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}

pub fn load_cli_config(explicit_path: Option<&str>) -> U2lConfig {
    let loader = Loader::new().with_optional_file(LOCAL_CONFIG_FILE);
    let loader = if let Some(path) = explicit_path {
        loader.with_file(path)
    } else {
        loader
    };

    loader.build().unwrap_or_else(|err| {
        eprintln!("Failed to load configuration: {err}");
        std::process::exit(1);
    })
}

/// Tables for the configured definition sources; the shared standard set when nothing is
/// customized.
pub fn load_tables(config: &U2lConfig) -> Result<Arc<TableSet>, ConvertError> {
    let search = SearchOptions::from(&config.definitions);
    if search == SearchOptions::default() {
        return Ok(TableSet::standard());
    }
    let sources = locate::discover(&search)?;
    info!("building tables from {} definition sources", sources.len());
    Ok(Arc::new(TableSet::build(&Seed::default(), &sources)))
}

/// Forward options from the configuration with the command-line flags applied on top.
pub fn unicode2latex_options(
    matches: &ArgMatches,
    config: &U2lConfig,
) -> Result<Options, ConvertError> {
    let mut options = Options::try_from(&config.unicode2latex)?;
    if matches.get_flag("prefer-unicode-math") {
        options.prefer_unicode_math = true;
    }
    if matches.get_flag("no-fonts") {
        options.add_font_modifiers = false;
    }
    if matches.get_flag("no-accents") {
        options.convert_accents = false;
    }
    if matches.get_flag("convert-quotes") {
        options.convert_quotes = true;
    }
    if matches.get_flag("convert-dashes") {
        options.convert_dashes = true;
    }
    if let Some(mode) = matches.get_one::<String>("accent-mode") {
        options.accent_mode = mode.parse::<AccentMode>()?;
    }
    Ok(options)
}

/// Reverse converter from the configuration, with `-M`/`-G` OR'ed in.
pub fn latex2unicode_converter(
    matches: &ArgMatches,
    config: &U2lConfig,
    tables: &TableSet,
) -> Latex2Unicode {
    let mut reverse = config.latex2unicode.clone();
    reverse.math |= matches.get_flag("math");
    reverse.greek |= matches.get_flag("greek");
    reverse.converter(tables)
}

/// Convert input line by line, keeping the line endings.
pub fn convert_lines(converter: &Unicode2Latex, text: &str, position: &mut Position) -> String {
    let mut out = String::with_capacity(text.len());
    for line in text.split_inclusive('\n') {
        out.push_str(&converter.convert_at(line, position));
        position.next_line();
    }
    out
}

fn write_output(output: Option<&str>, data: &str) {
    match output {
        Some(path) if path != "-" => {
            fs::write(path, data).unwrap_or_else(|e| {
                eprintln!("Error writing file '{path}': {e}");
                std::process::exit(1);
            });
        }
        _ => {
            let mut stdout = io::stdout().lock();
            if let Err(e) = stdout.write_all(data.as_bytes()).and_then(|_| stdout.flush()) {
                eprintln!("Error writing output: {e}");
                std::process::exit(1);
            }
        }
    }
}

/// Everything both binaries do before converting.
struct Prepared {
    config: U2lConfig,
    tables: Arc<TableSet>,
    output: Option<String>,
}

fn prepare(matches: &ArgMatches) -> Option<Prepared> {
    init_logging(matches.get_count("verbose"));

    let config = load_cli_config(matches.get_one::<String>("config").map(|s| s.as_str()));
    let tables = load_tables(&config).unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        std::process::exit(1);
    });
    let output = matches.get_one::<String>("output").cloned();

    if matches.get_flag("dump-tables") {
        handle_dump_tables_command(&tables, output.as_deref());
        return None;
    }
    Some(Prepared {
        config,
        tables,
        output,
    })
}

fn handle_dump_tables_command(tables: &TableSet, output: Option<&str>) {
    let json = serde_json::to_string_pretty(tables).unwrap_or_else(|e| {
        eprintln!("Serialization error: {e}");
        std::process::exit(1);
    });
    write_output(output, &format!("{json}\n"));
}

fn select_source(matches: &ArgMatches, mut cmd: clap::Command) -> (Source, InputEncoding) {
    // Validate the encoding even when it ends up unused.
    let encoding = matches
        .get_one::<String>("input-encoding")
        .map(|label| label.parse::<InputEncoding>())
        .transpose()
        .unwrap_or_else(|e| {
            eprintln!("Error: {e}");
            std::process::exit(1);
        })
        .unwrap_or_default();

    match Source::from_matches(matches) {
        Some(source) => (source, encoding),
        None => {
            let _ = cmd.print_help();
            eprintln!("\nError: give exactly one of TEXT, --input or --stdin");
            std::process::exit(1);
        }
    }
}

/// Entry point of the `unicode2latex` binary.
pub fn handle_unicode2latex_command(matches: &ArgMatches) {
    let Some(prepared) = prepare(matches) else {
        return;
    };
    let (source, encoding) = select_source(matches, cli::build_unicode2latex_cli());

    let options = unicode2latex_options(matches, &prepared.config).unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        std::process::exit(1);
    });
    let converter = Unicode2Latex::with_tables(options, prepared.tables);
    let mut position = Position::new(source.label());

    let result: String = match &source {
        Source::Text(text) => text
            .iter()
            .map(|arg| {
                let line = converter.convert_at(arg, &mut position);
                position.next_line();
                format!("{line}\n")
            })
            .collect(),
        Source::File(_) | Source::Stdin => {
            let text = source.read(encoding, "").unwrap_or_else(|e| {
                eprintln!("{e}");
                std::process::exit(1);
            });
            convert_lines(&converter, &text, &mut position)
        }
    };

    write_output(prepared.output.as_deref(), &result);
}

/// Entry point of the `latex2unicode` binary.
pub fn handle_latex2unicode_command(matches: &ArgMatches) {
    let Some(prepared) = prepare(matches) else {
        return;
    };
    let (source, encoding) = select_source(matches, cli::build_latex2unicode_cli());

    let converter = latex2unicode_converter(matches, &prepared.config, &prepared.tables);
    let text = source.read(encoding, " ").unwrap_or_else(|e| {
        eprintln!("{e}");
        std::process::exit(1);
    });

    let mut result = converter.convert_str(&text);
    if matches!(source, Source::Text(_)) {
        result.push('\n');
    }
    write_output(prepared.output.as_deref(), &result);
}

#[cfg(test)]
mod tests {
    use super::*;
    use u2l_babel::tables::DefinitionSource;
    use u2l_config::load_defaults;

    fn u2l(args: &[&str]) -> ArgMatches {
        cli::build_unicode2latex_cli()
            .try_get_matches_from(std::iter::once("unicode2latex").chain(args.iter().copied()))
            .expect("arguments to parse")
    }

    fn l2u(args: &[&str]) -> ArgMatches {
        cli::build_latex2unicode_cli()
            .try_get_matches_from(std::iter::once("latex2unicode").chain(args.iter().copied()))
            .expect("arguments to parse")
    }

    fn bundled() -> TableSet {
        TableSet::build(
            &Seed::default(),
            &[
                DefinitionSource::bundled_symbols(),
                DefinitionSource::bundled_aliases(),
            ],
        )
    }

    #[test]
    fn test_source_selection() {
        assert_eq!(
            Source::from_matches(&u2l(&["a", "b"])),
            Some(Source::Text(vec!["a".to_string(), "b".to_string()]))
        );
        assert_eq!(
            Source::from_matches(&u2l(&["-i", "in.txt"])),
            Some(Source::File(PathBuf::from("in.txt")))
        );
        assert_eq!(Source::from_matches(&u2l(&["--stdin"])), Some(Source::Stdin));
    }

    #[test]
    fn test_source_selection_requires_exactly_one() {
        assert_eq!(Source::from_matches(&u2l(&[])), None);
        assert_eq!(Source::from_matches(&u2l(&["x", "--stdin"])), None);
        assert_eq!(Source::from_matches(&u2l(&["-i", "f", "--stdin"])), None);
    }

    #[test]
    fn test_source_labels() {
        assert_eq!(Source::Text(vec![]).label(), "cmdline");
        assert_eq!(Source::Stdin.label(), "stdin");
        assert_eq!(Source::File(PathBuf::from("a.tex")).label(), "a.tex");
    }

    #[test]
    fn test_text_arguments_are_joined() {
        let source = Source::Text(vec!["\\alpha".to_string(), "\\beta".to_string()]);
        assert_eq!(
            source.read(InputEncoding::default(), " ").unwrap(),
            "\\alpha \\beta"
        );
    }

    #[test]
    fn test_encoding_alias_is_accepted() {
        let matches = u2l(&["--input-enc", "latin1", "x"]);
        assert_eq!(
            matches.get_one::<String>("input-encoding").map(String::as_str),
            Some("latin1")
        );
    }

    #[test]
    fn test_flags_override_config() {
        let config = load_defaults().unwrap();
        let options = unicode2latex_options(
            &u2l(&[
                "-P",
                "--no-fonts",
                "--no-accents",
                "--convert-quotes",
                "--convert-dashes",
                "--accent-mode",
                "math",
                "x",
            ]),
            &config,
        )
        .unwrap();

        assert!(options.prefer_unicode_math);
        assert!(!options.add_font_modifiers);
        assert!(!options.convert_accents);
        assert!(options.convert_quotes);
        assert!(options.convert_dashes);
        assert_eq!(options.accent_mode, AccentMode::Math);
    }

    #[test]
    fn test_no_flags_keep_config() {
        let config = load_defaults().unwrap();
        let options = unicode2latex_options(&u2l(&["x"]), &config).unwrap();
        assert_eq!(options, Options::default());
    }

    #[test]
    fn test_invalid_accent_mode_is_rejected_by_clap() {
        assert!(cli::build_unicode2latex_cli()
            .try_get_matches_from(["unicode2latex", "--accent-mode", "bogus", "x"])
            .is_err());
    }

    #[test]
    fn test_reverse_flags_are_ored() {
        let config = load_defaults().unwrap();
        let tables = bundled();

        let none = latex2unicode_converter(&l2u(&["x"]), &config, &tables);
        assert_eq!(none.convert_str("\\alpha\\cap"), "\\alpha\\cap");

        let both = latex2unicode_converter(&l2u(&["-M", "-G", "x"]), &config, &tables);
        assert_eq!(both.convert_str("\\alpha\\cap"), "\u{1D6FC}∩");
    }

    #[test]
    fn test_convert_lines_keeps_line_endings() {
        let converter = Unicode2Latex::with_tables(Options::default(), Arc::new(bundled()));
        let mut position = Position::new("test");
        assert_eq!(
            convert_lines(&converter, "é\r\nx ∩ y\nlast", &mut position),
            "\\'{e}\r\nx \\cap  y\nlast"
        );
        assert_eq!(position.line(), 4);
    }

    #[test]
    fn test_default_definitions_use_standard_tables() {
        let config = load_defaults().unwrap();
        let tables = load_tables(&config).unwrap();
        assert!(Arc::ptr_eq(&tables, &TableSet::standard()));
    }
}
