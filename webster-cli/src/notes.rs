//! The notes directory
//!
//! One note per word, named `{word}.md`. The directory doubles as the word list
//! for a refresh: every `.md` stem in it is looked up again.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

const NOTE_EXTENSION: &str = "md";

/// Words that have a note in `dir`, sorted.
pub fn note_words(dir: &Path) -> io::Result<Vec<String>> {
    let mut words = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if !path.is_file() || path.extension().and_then(|ext| ext.to_str()) != Some(NOTE_EXTENSION)
        {
            continue;
        }
        if let Some(stem) = path.file_stem().and_then(|stem| stem.to_str()) {
            words.push(stem.to_string());
        }
    }
    words.sort();
    Ok(words)
}

/// Where the note for `word` lives.
pub fn note_path(dir: &Path, word: &str) -> PathBuf {
    dir.join(format!("{word}.{NOTE_EXTENSION}"))
}

/// Write a note, creating `dir` if needed. Words that would escape `dir` are rejected.
pub fn write_note(dir: &Path, word: &str, markdown: &str) -> io::Result<PathBuf> {
    if word.is_empty() || word.contains(['/', '\\']) || word == "." || word == ".." {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("'{word}' cannot be used as a note name"),
        ));
    }
    fs::create_dir_all(dir)?;
    let path = note_path(dir, word);
    fs::write(&path, markdown)?;
    log::debug!("wrote {}", path.display());
    Ok(path)
}
