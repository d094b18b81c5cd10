use clap::{Arg, ArgAction, Command, ValueHint};
use clap_complete::{generate_to, shells::*};
use std::env;
use std::io::Error;

// Mirror of the command tree in src/main.rs
// Build scripts can't access src/ modules, so the shape is repeated here
fn main() -> Result<(), Error> {
    let outdir = match env::var_os("OUT_DIR") {
        None => return Ok(()),
        Some(outdir) => outdir,
    };

    let mut cmd = Command::new("webster")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Turn Merriam-Webster dictionary lookups into Markdown notes")
        .arg_required_else_help(true)
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .help("Path to a webster.toml configuration file")
                .value_hint(ValueHint::FilePath)
                .global(true),
        )
        .subcommand(
            Command::new("lookup")
                .about("Look up a word and write its note")
                .arg(Arg::new("word").required(true).index(1))
                .arg(
                    Arg::new("dir")
                        .long("dir")
                        .short('d')
                        .value_hint(ValueHint::DirPath),
                )
                .arg(
                    Arg::new("print")
                        .long("print")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("refresh")
                .about("Re-fetch every note in a directory")
                .arg(
                    Arg::new("dir")
                        .index(1)
                        .value_hint(ValueHint::DirPath),
                ),
        )
        .subcommand(
            Command::new("convert")
                .about("Convert a saved API response to a note")
                .arg(
                    Arg::new("input")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .value_hint(ValueHint::FilePath),
                ),
        )
        .subcommand(
            Command::new("inspect")
                .about("Show the sense table of a saved API response as JSON")
                .arg(
                    Arg::new("input")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                ),
        );

    // Generate completions for bash
    generate_to(Bash, &mut cmd, "webster", &outdir)?;

    // Generate completions for zsh
    generate_to(Zsh, &mut cmd, "webster", &outdir)?;

    // Generate completions for fish
    generate_to(Fish, &mut cmd, "webster", &outdir)?;

    println!("cargo:warning=Shell completions generated in {outdir:?}");

    Ok(())
}
