use std::fs;
use std::sync::Arc;
use u2l_babel::tables::{locate, DefinitionSource, SearchOptions, Seed};
use u2l_babel::{Latex2Unicode, Options, TableSet, Unicode2Latex};

const TABLE: &str = r#"% test table
\UnicodeMathSymbol{"02208}{\in                       }{\mathrel}{/in element of}%
\UnicodeMathSymbol{"0220A}{\smallin                  }{\mathrel}{small element of}%
\UnicodeMathSymbol{"02218}{\vysmwhtcircle            }{\mathbin}{composite function (small circle)}%
\UnicodeMathSymbol{"0221A}{\sqrt                     }{\mathradical}{radical}%
\UnicodeMathSymbol{"00307}{\dot                      }{\mathaccent}{combining dot above}%
"#;

const ALIASES: &str = r"\def\elem{\in}
\def{\smallcirc}{\vysmwhtcircle}
\def\nowhere{\undefinedtarget}
";

fn write_definitions(dir: &std::path::Path) -> SearchOptions {
    let table = dir.join("unicode-math-table.tex");
    let aliases = dir.join("unicode-math-xetex.sty");
    fs::write(&table, TABLE).unwrap();
    fs::write(&aliases, ALIASES).unwrap();
    SearchOptions {
        search_system: false,
        fallback_dir: None,
        paths: vec![table, aliases],
    }
}

#[test]
fn test_tables_from_explicit_paths() {
    let dir = tempfile::tempdir().unwrap();
    let sources = locate::discover(&write_definitions(dir.path())).unwrap();
    let tables = TableSet::build(&Seed::default(), &sources);

    assert_eq!(tables.canonical_math('∈'), Some("\\in"));
    assert_eq!(tables.math_macros.get("\\elem"), Some(&vec!['∈']));
    assert_eq!(tables.math_macros.get("\\smallcirc"), Some(&vec!['\u{2218}']));
    assert!(!tables.math_macros.contains_key("\\nowhere"));
    assert!(!tables.math_macros.contains_key("\\sqrt"));
    assert_eq!(tables.math_accent_macros.get("\\dot"), Some(&vec!['\u{307}']));

    // bundled definitions are not mixed in when a table is given
    assert_eq!(tables.canonical_math('∩'), None);
}

#[test]
fn test_seed_overrides_definition_files() {
    let dir = tempfile::tempdir().unwrap();
    let sources = locate::discover(&write_definitions(dir.path())).unwrap();
    let tables = TableSet::build(&Seed::default(), &sources);

    assert_eq!(
        tables.math.get(&'\u{2218}'),
        Some(&vec!["\\circ".to_string(), "\\vysmwhtcircle".to_string()])
    );
    assert_eq!(
        tables.replacements.get("\\vysmwhtcircle"),
        Some(&"\\circ".to_string())
    );
    assert_eq!(tables.replacements.get("\\elem"), Some(&"\\in".to_string()));
}

#[test]
fn test_converters_use_custom_tables() {
    let dir = tempfile::tempdir().unwrap();
    let sources = locate::discover(&write_definitions(dir.path())).unwrap();
    let tables = Arc::new(TableSet::build(&Seed::default(), &sources));

    let forward = Unicode2Latex::with_tables(Options::default(), Arc::clone(&tables));
    assert_eq!(forward.convert_str("x∈A"), "x\\in A");

    let reverse = Latex2Unicode::from_tables(&tables, true, false);
    assert_eq!(reverse.convert_str("x \\elem A"), "x ∈ A");
}

#[test]
fn test_build_is_deterministic() {
    let dir = tempfile::tempdir().unwrap();
    let options = write_definitions(dir.path());
    let first = TableSet::build(&Seed::default(), &locate::discover(&options).unwrap());
    let second = TableSet::build(&Seed::default(), &locate::discover(&options).unwrap());
    assert_eq!(first, second);
    assert_eq!(
        first.math.keys().collect::<Vec<_>>(),
        second.math.keys().collect::<Vec<_>>()
    );
}

#[test]
fn test_seed_only_tables() {
    let tables = TableSet::build(&Seed::default(), &[]);
    assert_eq!(tables.canonical_math('×'), Some("\\times"));
    assert_eq!(tables.canonical_math('\u{2014}'), Some("---"));
    let forward = Unicode2Latex::with_tables(Options::default(), Arc::new(tables));
    assert_eq!(forward.convert_str("2×3"), "2\\times 3");
}

#[test]
fn test_in_memory_source() {
    let source = DefinitionSource::new(
        "inline",
        r#"\UnicodeMathSymbol{"02A00}{\bigodot }{\mathop}{n-ary circled dot operator}%"#,
    );
    let tables = TableSet::build(&Seed::empty(), &[source]);
    assert_eq!(tables.canonical_math('\u{2A00}'), Some("\\bigodot"));
}
