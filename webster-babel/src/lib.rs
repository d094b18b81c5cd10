//! Merriam-Webster entries to Markdown notes
//!
//!     This crate turns one entry of the Collegiate Dictionary API (nested JSON) into a
//!     Markdown note with front matter, a heading per sense, highlighted definitions and
//!     their example sentences.
//!
//!     This is a pure lib: it powers webster-cli but is shell agnostic. No code here may
//!     read env vars, print, touch the network or the file system.
//!
//! Architecture
//!
//!     The work happens in two stages:
//!
//!     1. The sense walk (./parser.rs). The entry's sense sequence is a tree of tagged
//!        arrays. It is decoded into typed elements (./entry/) and linearized into an
//!        ordered sense table (./senses.rs). Elements with an unexpected shape are
//!        skipped and reported as diagnostics instead of failing the whole note.
//!     2. Token formatting (./tokens.rs). Every text fragment the walk extracts goes
//!        through the token formatter, which rewrites the vendor's inline tokens
//!        (`{bc}`, `{a_link|..}`, `{sx|..}`, `{d_link|..}`, `{wi}..{/wi}`) into Markdown.
//!
//!     The table is then serialized by ./markdown.rs.
//!
//!     The file structure :
//!     .
//!     ├── error.rs
//!     ├── options.rs              # RenderOptions (link root, highlight colour, policies)
//!     ├── tokens.rs               # TokenFormatter
//!     ├── entry
//!     │   ├── mod.rs              # Typed entry model and diagnostics
//!     │   └── decode.rs           # JSON → model, skip-and-report
//!     ├── senses.rs               # Ordered sense table
//!     ├── parser.rs               # EntryParser (walk + render)
//!     ├── markdown.rs             # Note serialization
//!     └── response.rs             # Lookup URL and API response validation
//!
//! Testing
//!     tests
//!     ├── lib.rs
//!     ├── <area>
//!     │   └── <testname>.rs
//!     └── fixtures
//!         └── <word>.json         # Saved API responses
//!
//!     Note that rust does not by default discover tests in subdirectories, so we need to include these
//!     in the mod.
pub mod entry;
pub mod error;
pub mod markdown;
pub mod options;
pub mod parser;
pub mod response;
pub mod senses;
pub mod tokens;

pub use error::ConvertError;
pub use options::{DuplicateSenses, RenderOptions};
pub use parser::EntryParser;
pub use response::{convert_response, first_entry, lookup_url};
pub use senses::{SenseRecord, SenseTable};
pub use tokens::TokenFormatter;

/// Converts a single decoded entry object to a Markdown note.
///
/// Equivalent to building an [`EntryParser`] and rendering it once.
pub fn entry_to_markdown(
    entry: &serde_json::Value,
    options: &RenderOptions,
) -> Result<String, ConvertError> {
    EntryParser::build(entry, options.clone()).map(|parser| parser.render())
}
