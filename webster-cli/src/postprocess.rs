//! External Markdown formatter
//!
//! Notes are written exactly as rendered; a formatter such as `mdformat` can then
//! normalize them. The formatter is optional: a missing binary is logged and the
//! notes are left as they are.

use std::path::PathBuf;
use std::process::Command;
use webster_config::PostprocessConfig;
use which::which;

/// What happened when the formatter was asked to run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Disabled,
    NothingToFormat,
    NotInstalled,
    Formatted,
    Failed(String),
}

/// Run the configured formatter over `files`.
pub fn format_notes(config: &PostprocessConfig, files: &[PathBuf]) -> Outcome {
    if !config.enabled {
        return Outcome::Disabled;
    }
    if files.is_empty() {
        return Outcome::NothingToFormat;
    }

    let program = match which(&config.command) {
        Ok(path) => path,
        Err(_) => {
            log::warn!(
                "'{}' not found on PATH; notes left unformatted",
                config.command
            );
            return Outcome::NotInstalled;
        }
    };

    let status = Command::new(&program)
        .args(&config.args)
        .args(files)
        .status();

    match status {
        Ok(status) if status.success() => {
            log::debug!("formatted {} note(s) with {}", files.len(), program.display());
            Outcome::Formatted
        }
        Ok(status) => {
            let reason = format!("{} exited with status {status}", config.command);
            log::warn!("{reason}");
            Outcome::Failed(reason)
        }
        Err(err) => {
            let reason = format!("failed to launch {}: {err}", program.display());
            log::warn!("{reason}");
            Outcome::Failed(reason)
        }
    }
}
