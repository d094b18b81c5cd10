// Command-line interface for webster
//
// This binary looks words up in the Merriam-Webster Collegiate Dictionary and keeps a
// directory of Markdown notes, one per word. The conversion from the API's entry JSON
// to Markdown is done by the webster-babel crate; this crate deals with the network,
// the notes directory, configuration and the external formatter.
//
// Usage:
//  webster <word>                           - Look up a word and write its note (default)
//  webster <dir/>                           - Refresh every note in a directory (default when the input is a path)
//  webster lookup <word> [--dir DIR] [--print]
//  webster refresh [DIR]                    - Re-fetch every *.md stem in DIR (defaults to notes.directory)
//  webster convert <json-file> [-o FILE]    - Offline conversion of a saved API response
//  webster inspect <json-file>              - Sense table and skipped elements as JSON
//
// Extra Parameters:
//
// Rendering and pipeline knobs can be overridden with --extra-<parameter-name> [value].
// The CLI layer strips the "extra-" prefix and applies them on top of the loaded configuration.
// Example:
//  webster volume --extra-duplicates suffix --extra-no-postprocess

use clap::{Arg, ArgAction, Command, ValueHint};
use rayon::prelude::*;
use serde::Serialize;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use webster_babel::{entry_to_markdown, DuplicateSenses, EntryParser, RenderOptions, SenseTable};
use webster_cli::client::DictionaryClient;
use webster_cli::notes::{note_words, write_note};
use webster_cli::postprocess::format_notes;
use webster_cli::saved_entry;
use webster_config::{Loader, WebsterConfig};

const SUBCOMMANDS: &[&str] = &["lookup", "refresh", "convert", "inspect", "help"];

/// Parse extra-* arguments from command line args
/// Returns (cleaned_args_without_extras, extra_params_map)
///
/// Supports both:
/// - `--extra-<key> <value>` (explicit value)
/// - `--extra-<key>` (boolean flag, defaults to "true")
/// - `--extras-<key>` (alias for `--extra-<key>`)
fn parse_extra_args(args: &[String]) -> (Vec<String>, HashMap<String, String>) {
    let mut cleaned_args = Vec::new();
    let mut extra_params = HashMap::new();
    let mut i = 0;

    while i < args.len() {
        let arg = &args[i];

        let key_opt = if let Some(key) = arg.strip_prefix("--extra-") {
            Some(key)
        } else {
            arg.strip_prefix("--extras-")
        };

        if let Some(key) = key_opt {
            // A following token that is not a flag is this key's value
            let has_value = args.get(i + 1).is_some_and(|next| !next.starts_with('-'));

            if has_value {
                extra_params.insert(key.to_string(), args[i + 1].clone());
                i += 2;
            } else {
                extra_params.insert(key.to_string(), "true".to_string());
                i += 1;
            }
            continue;
        }

        cleaned_args.push(arg.clone());
        i += 1;
    }

    (cleaned_args, extra_params)
}

/// Pick the command for a bare input: paths refresh a directory, anything else is a word.
fn default_subcommand(input: &str) -> &'static str {
    if input.contains('/') || Path::new(input).is_dir() {
        "refresh"
    } else {
        "lookup"
    }
}

/// Insert the default subcommand in front of the first positional argument, unless
/// that argument already names a subcommand.
fn inject_default_subcommand(args: &[String]) -> Option<Vec<String>> {
    let mut i = 1;
    while i < args.len() {
        let arg = &args[i];
        if arg == "--config" {
            i += 2;
            continue;
        }
        if arg.starts_with('-') {
            i += 1;
            continue;
        }
        if SUBCOMMANDS.contains(&arg.as_str()) {
            return None;
        }
        let mut injected = args[..i].to_vec();
        injected.push(default_subcommand(arg).to_string());
        injected.extend_from_slice(&args[i..]);
        return Some(injected);
    }
    None
}

fn build_cli() -> Command {
    Command::new("webster")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Turn Merriam-Webster dictionary lookups into Markdown notes")
        .long_about(
            "webster looks words up in the Merriam-Webster Collegiate Dictionary API and\n\
            writes each entry as a Markdown note: front matter with the entry's stems,\n\
            one heading per sense, highlighted definitions and example sentences.\n\n\
            The API key is read from the MERRIAM_WEBSTER_DICTIONARY_KEY environment\n\
            variable (or api.key in webster.toml).\n\n\
            Extra Parameters:\n  \
            Use --extra-<name> [value] to override rendering options.\n  \
            Boolean flags can omit the value (defaults to 'true').\n  \
            highlight-color, base-url, duplicates (last|first|suffix),\n  \
            subdivision-illustrations, no-postprocess, log-level\n\n\
            Examples:\n  \
            webster voluminous                       # Write data/md/voluminous.md\n  \
            webster lookup voluminous --print        # Print the note instead\n  \
            webster data/md/                         # Refresh every note in data/md\n  \
            webster convert saved.json -o note.md    # Convert a saved response offline",
        )
        .arg_required_else_help(true)
        .subcommand_required(false)
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
                .about("Look up a word and write its note (default command)")
                .arg(
                    Arg::new("word")
                        .help("Word to look up")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("dir")
                        .long("dir")
                        .short('d')
                        .help("Notes directory (defaults to notes.directory from the config)")
                        .value_hint(ValueHint::DirPath),
                )
                .arg(
                    Arg::new("print")
                        .long("print")
                        .help("Print the note to stdout instead of writing it")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("refresh")
                .about("Re-fetch and rewrite every note in a directory")
                .long_about(
                    "Every *.md file in the directory is treated as a word: its note is\n\
                    fetched again and overwritten. Words that fail are reported and\n\
                    their existing notes are left untouched.",
                )
                .arg(
                    Arg::new("dir")
                        .help("Notes directory (defaults to notes.directory from the config)")
                        .index(1)
                        .value_hint(ValueHint::DirPath),
                ),
        )
        .subcommand(
            Command::new("convert")
                .about("Convert a saved API response to a note")
                .long_about(
                    "Reads a saved API response (the JSON array) or a single entry object\n\
                    and renders its note. Output goes to stdout by default, or use -o to\n\
                    write a file. No network access is needed.",
                )
                .arg(
                    Arg::new("input")
                        .help("Path to the saved JSON")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .help("Output file path (defaults to stdout)")
                        .value_hint(ValueHint::FilePath),
                ),
        )
        .subcommand(
            Command::new("inspect")
                .about("Show the sense table of a saved API response as JSON")
                .arg(
                    Arg::new("input")
                        .help("Path to the saved JSON")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                ),
        )
}

fn main() {
    let args: Vec<String> = std::env::args().collect();

    // Parse extra-* arguments before clap processing
    let (cleaned_args, mut extra_params) = parse_extra_args(&args);

    let cli = build_cli();
    let matches = match cli.clone().try_get_matches_from(&cleaned_args) {
        Ok(m) => m,
        Err(e) => match inject_default_subcommand(&cleaned_args) {
            Some(new_args) => match cli.try_get_matches_from(&new_args) {
                Ok(m) => m,
                Err(e2) => e2.exit(),
            },
            None => e.exit(),
        },
    };

    let mut config = load_cli_config(matches.get_one::<String>("config").map(|s| s.as_str()));
    apply_config_overrides(&mut config, &mut extra_params);
    init_logging(&config);

    for key in extra_params.keys() {
        log::warn!("ignoring unknown parameter --extra-{key}");
    }

    match matches.subcommand() {
        Some(("lookup", sub_matches)) => {
            let word = sub_matches
                .get_one::<String>("word")
                .expect("word is required");
            let dir = sub_matches.get_one::<String>("dir").map(PathBuf::from);
            let print = sub_matches.get_flag("print");
            handle_lookup_command(word, dir, print, &config);
        }
        Some(("refresh", sub_matches)) => {
            let dir = sub_matches.get_one::<String>("dir").map(PathBuf::from);
            handle_refresh_command(dir, &config);
        }
        Some(("convert", sub_matches)) => {
            let input = sub_matches
                .get_one::<String>("input")
                .expect("input is required");
            let output = sub_matches.get_one::<String>("output").map(|s| s.as_str());
            handle_convert_command(input, output, &config);
        }
        Some(("inspect", sub_matches)) => {
            let input = sub_matches
                .get_one::<String>("input")
                .expect("input is required");
            handle_inspect_command(input, &config);
        }
        _ => {
            eprintln!("Unknown subcommand. Use --help for usage information.");
            std::process::exit(1);
        }
    }
}

/// Handle the lookup command
fn handle_lookup_command(word: &str, dir: Option<PathBuf>, print: bool, config: &WebsterConfig) {
    let client = DictionaryClient::new(&config.api).unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        std::process::exit(1);
    });
    let options = RenderOptions::from(&config.render);

    let note = client.lookup(word, &options).unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        std::process::exit(1);
    });

    if print {
        print!("{note}");
        return;
    }

    let dir = dir.unwrap_or_else(|| config.notes.directory.clone());
    let path = write_note(&dir, word, &note).unwrap_or_else(|e| {
        eprintln!("Error writing note for '{word}' to '{}': {e}", dir.display());
        std::process::exit(1);
    });
    format_notes(&config.postprocess, std::slice::from_ref(&path));
    println!("{}", path.display());
}

/// Handle the refresh command
fn handle_refresh_command(dir: Option<PathBuf>, config: &WebsterConfig) {
    let dir = dir.unwrap_or_else(|| config.notes.directory.clone());
    let words = note_words(&dir).unwrap_or_else(|e| {
        eprintln!("Error reading notes directory '{}': {e}", dir.display());
        std::process::exit(1);
    });
    if words.is_empty() {
        log::warn!("no notes found in {}", dir.display());
        return;
    }

    let client = DictionaryClient::new(&config.api).unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        std::process::exit(1);
    });
    let options = RenderOptions::from(&config.render);

    let results: Vec<_> = words
        .par_iter()
        .map(|word| (word, client.lookup(word, &options)))
        .collect();

    let mut written = Vec::new();
    let mut failures = 0;
    for (word, result) in results {
        match result.map_err(|e| e.to_string()).and_then(|note| {
            write_note(&dir, word, &note).map_err(|e| format!("writing note: {e}"))
        }) {
            Ok(path) => written.push(path),
            Err(reason) => {
                log::error!("{word}: {reason}");
                failures += 1;
            }
        }
    }

    format_notes(&config.postprocess, &written);
    println!(
        "Refreshed {} of {} note(s) in {}",
        written.len(),
        words.len(),
        dir.display()
    );

    if failures > 0 {
        eprintln!("Error: {failures} note(s) could not be refreshed");
        std::process::exit(1);
    }
}

/// Handle the convert command
fn handle_convert_command(input: &str, output: Option<&str>, config: &WebsterConfig) {
    let source = fs::read_to_string(input).unwrap_or_else(|e| {
        eprintln!("Error reading file '{input}': {e}");
        std::process::exit(1);
    });

    let note = saved_entry(&source)
        .and_then(|entry| entry_to_markdown(&entry, &RenderOptions::from(&config.render)))
        .unwrap_or_else(|e| {
            eprintln!("Error converting '{input}': {e}");
            std::process::exit(1);
        });

    match output {
        Some(path) => {
            fs::write(path, &note).unwrap_or_else(|e| {
                eprintln!("Error writing file '{path}': {e}");
                std::process::exit(1);
            });
        }
        None => print!("{note}"),
    }
}

/// Shape of the inspect command's output. Sense order is kept as rendered.
#[derive(Serialize)]
struct InspectReport<'a> {
    id: &'a str,
    functional_label: &'a str,
    stems: &'a [String],
    senses: &'a SenseTable,
    diagnostics: Vec<String>,
}

/// Handle the inspect command
fn handle_inspect_command(input: &str, config: &WebsterConfig) {
    let source = fs::read_to_string(input).unwrap_or_else(|e| {
        eprintln!("Error reading file '{input}': {e}");
        std::process::exit(1);
    });

    let parser = saved_entry(&source)
        .and_then(|entry| EntryParser::build(&entry, RenderOptions::from(&config.render)))
        .unwrap_or_else(|e| {
            eprintln!("Error inspecting '{input}': {e}");
            std::process::exit(1);
        });

    let report = InspectReport {
        id: &parser.entry().id,
        functional_label: &parser.entry().functional_label,
        stems: &parser.entry().stems,
        senses: parser.senses(),
        diagnostics: parser.diagnostics().iter().map(|d| d.to_string()).collect(),
    };

    match serde_json::to_string_pretty(&report) {
        Ok(text) => println!("{text}"),
        Err(e) => {
            eprintln!("Error serializing report: {e}");
            std::process::exit(1);
        }
    }
}

fn load_cli_config(explicit_path: Option<&str>) -> WebsterConfig {
    let loader = Loader::new().with_optional_file("webster.toml");
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

fn init_logging(config: &WebsterConfig) {
    let env = env_logger::Env::default().default_filter_or(config.logging.level.as_str());
    env_logger::Builder::from_env(env)
        .format_timestamp(None)
        .init();
}

fn apply_config_overrides(config: &mut WebsterConfig, extra_params: &mut HashMap<String, String>) {
    if let Some(color) = take_override(extra_params, &["highlight-color", "color"]) {
        config.render.highlight_color = color;
    }
    if let Some(url) = take_override(extra_params, &["base-url"]) {
        config.render.base_url = url;
    }
    if let Some(raw) = take_override(extra_params, &["duplicates", "duplicate-senses"]) {
        config.render.duplicate_senses = raw.parse::<DuplicateSenses>().unwrap_or_else(|err| {
            eprintln!("Invalid value for --extra-duplicates: {err}");
            std::process::exit(1);
        });
    }
    if let Some(raw) = extra_params.remove("subdivision-illustrations") {
        config.render.subdivision_illustrations =
            parse_bool_arg("subdivision-illustrations", &raw);
    }
    if let Some(raw) = extra_params.remove("no-postprocess") {
        if parse_bool_arg("no-postprocess", &raw) {
            config.postprocess.enabled = false;
        }
    }
    if let Some(level) = take_override(extra_params, &["log-level"]) {
        config.logging.level = level;
    }
}

fn take_override(map: &mut HashMap<String, String>, keys: &[&str]) -> Option<String> {
    for key in keys {
        if let Some(value) = map.remove(*key) {
            return Some(value);
        }
    }
    None
}

fn parse_bool_arg(flag: &str, raw: &str) -> bool {
    match raw.to_lowercase().as_str() {
        "true" | "1" | "yes" | "y" => true,
        "false" | "0" | "no" | "n" => false,
        other => {
            eprintln!("Invalid boolean value '{other}' for --extra-{flag}");
            std::process::exit(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_extra_args_empty() {
        let input = args(&["webster", "lookup", "volume"]);
        let (cleaned, extra) = parse_extra_args(&input);

        assert_eq!(cleaned, input);
        assert!(extra.is_empty());
    }

    #[test]
    fn test_parse_extra_args_value_and_flag() {
        let input = args(&[
            "webster",
            "volume",
            "--extra-duplicates",
            "suffix",
            "--extra-no-postprocess",
            "--print",
        ]);
        let (cleaned, extra) = parse_extra_args(&input);

        assert_eq!(cleaned, args(&["webster", "volume", "--print"]));
        assert_eq!(extra.get("duplicates"), Some(&"suffix".to_string()));
        assert_eq!(extra.get("no-postprocess"), Some(&"true".to_string()));
    }

    #[test]
    fn test_parse_extra_args_flag_at_end_and_alias() {
        let input = args(&["webster", "refresh", "--extras-subdivision-illustrations"]);
        let (cleaned, extra) = parse_extra_args(&input);

        assert_eq!(cleaned, args(&["webster", "refresh"]));
        assert_eq!(
            extra.get("subdivision-illustrations"),
            Some(&"true".to_string())
        );
    }

    #[test]
    fn default_subcommand_follows_input_shape() {
        assert_eq!(default_subcommand("voluminous"), "lookup");
        assert_eq!(default_subcommand("data/md/"), "refresh");
        let tmp = tempfile::tempdir().unwrap();
        assert_eq!(default_subcommand(tmp.path().to_str().unwrap()), "refresh");
    }

    #[test]
    fn injects_before_first_positional() {
        assert_eq!(
            inject_default_subcommand(&args(&["webster", "volume", "--print"])),
            Some(args(&["webster", "lookup", "volume", "--print"]))
        );
        assert_eq!(
            inject_default_subcommand(&args(&["webster", "--config", "w.toml", "data/md"])),
            Some(args(&["webster", "--config", "w.toml", "refresh", "data/md"]))
        );
        assert_eq!(
            inject_default_subcommand(&args(&["webster", "convert", "x.json"])),
            None
        );
        assert_eq!(inject_default_subcommand(&args(&["webster", "--help"])), None);
    }

    #[test]
    fn injected_arguments_parse() {
        let injected = inject_default_subcommand(&args(&["webster", "volume", "--print"])).unwrap();
        let matches = build_cli().try_get_matches_from(&injected).unwrap();
        let (name, sub) = matches.subcommand().unwrap();
        assert_eq!(name, "lookup");
        assert_eq!(sub.get_one::<String>("word").unwrap(), "volume");
        assert!(sub.get_flag("print"));
    }

    #[test]
    fn apply_config_overrides_updates_known_flags() {
        let mut config = load_cli_config(None);
        let mut extra = HashMap::from([
            ("highlight-color".to_string(), "yellow".to_string()),
            ("duplicates".to_string(), "Suffix".to_string()),
            ("subdivision-illustrations".to_string(), "yes".to_string()),
            ("no-postprocess".to_string(), "true".to_string()),
            ("unrelated".to_string(), "1".to_string()),
        ]);

        apply_config_overrides(&mut config, &mut extra);

        assert_eq!(config.render.highlight_color, "yellow");
        assert_eq!(config.render.duplicate_senses, DuplicateSenses::Suffix);
        assert!(config.render.subdivision_illustrations);
        assert!(!config.postprocess.enabled);
        assert_eq!(extra.len(), 1);
        assert!(extra.contains_key("unrelated"));
    }

    #[test]
    fn render_options_follow_config() {
        let mut config = load_cli_config(None);
        config.render.base_url = "https://dict.example/".to_string();
        let options = RenderOptions::from(&config.render);
        assert_eq!(options.base_url, "https://dict.example/");
        assert_eq!(options.highlight_color, "#FFB8EBA6");
    }
}
