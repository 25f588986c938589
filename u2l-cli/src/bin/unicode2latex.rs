// Command-line interface for unicode2latex
//
// Usage:
//  unicode2latex <text>...                      - Convert each argument, one result per line
//  unicode2latex -i <file> [--input-enc <enc>]  - Convert a file line by line
//  unicode2latex --stdin [-o <file>]            - Convert standard input
//  unicode2latex --dump-tables                  - Print the symbol tables as JSON

use u2l_cli::{cli, handle_unicode2latex_command};

fn main() {
    let matches = cli::build_unicode2latex_cli().get_matches();
    handle_unicode2latex_command(&matches);
}
