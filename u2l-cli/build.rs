use clap_complete::{generate_to, shells::*};
use std::env;
use std::io::Error;

// The command definitions live in src/cli.rs, which only depends on clap.
#[allow(dead_code)]
mod cli {
    include!("src/cli.rs");
}

fn main() -> Result<(), Error> {
    println!("cargo:rerun-if-changed=src/cli.rs");

    let outdir = match env::var_os("OUT_DIR") {
        None => return Ok(()),
        Some(outdir) => outdir,
    };

    for (name, mut cmd) in [
        ("unicode2latex", cli::build_unicode2latex_cli()),
        ("latex2unicode", cli::build_latex2unicode_cli()),
    ] {
        generate_to(Bash, &mut cmd, name, &outdir)?;
        generate_to(Zsh, &mut cmd, name, &outdir)?;
        generate_to(Fish, &mut cmd, name, &outdir)?;
    }

    println!("cargo:warning=Shell completions generated in {outdir:?}");

    Ok(())
}
