//! Building blocks of the `webster` binary
//!
//!     ./client.rs        Collegiate API requests (blocking, one retry on HTTP status errors)
//!     ./notes.rs         The notes directory: which words it holds, where a note goes
//!     ./postprocess.rs   External Markdown formatter run over written notes
//!
//! Conversion itself lives in webster-babel; nothing here knows the entry format.

pub mod client;
pub mod notes;
pub mod postprocess;

use serde_json::Value;
use webster_babel::{first_entry, ConvertError};

/// Read a saved lookup. Accepts either a whole API response (an array) or a single
/// entry object.
pub fn saved_entry(text: &str) -> Result<Value, ConvertError> {
    let value: Value = serde_json::from_str(text)?;
    if value.is_object() {
        Ok(value)
    } else {
        first_entry(text)
    }
}
