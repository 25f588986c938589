// Command-line interface for latex2unicode
//
// Usage:
//  latex2unicode [-M] [-G] <text>...            - Convert the arguments joined by spaces
//  latex2unicode [-M] [-G] -i <file>            - Convert a file
//  latex2unicode [-M] [-G] --stdin [-o <file>]  - Convert standard input

use u2l_cli::{cli, handle_latex2unicode_command};

fn main() {
    let matches = cli::build_latex2unicode_cli().get_matches();
    handle_latex2unicode_command(&matches);
}
