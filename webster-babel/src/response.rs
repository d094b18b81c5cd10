//! API boundary: lookup URLs and response validation
//!
//! The Collegiate endpoint answers `GET {root}/{word}?key={key}` with a JSON array.
//! For a known word the array holds one object per homograph; only the first one
//! is converted. For an unknown word the array holds plain strings, the API's
//! spelling suggestions, or nothing at all.

use crate::error::{ConvertError, Result};
use crate::options::RenderOptions;
use crate::parser::EntryParser;
use crate::tokens::json_type_name;
use serde_json::Value;
use url::Url;

/// Default Collegiate Dictionary endpoint.
pub const DEFAULT_API_ROOT: &str =
    "https://www.dictionaryapi.com/api/v3/references/collegiate/json/";

/// Build the lookup URL for `word`. The word is percent-encoded as a path segment.
pub fn lookup_url(api_root: &str, word: &str, key: &str) -> Result<Url> {
    let mut url = Url::parse(api_root)?;
    url.path_segments_mut()
        .map_err(|_| {
            ConvertError::InvalidArgument(format!("'{api_root}' cannot be used as an API root"))
        })?
        .pop_if_empty()
        .push(word);
    url.query_pairs_mut().append_pair("key", key);
    Ok(url)
}

/// Parse a response body and return its first entry object.
pub fn first_entry(body: &str) -> Result<Value> {
    let value: Value = serde_json::from_str(body)?;
    let mut items = match value {
        Value::Array(items) => items,
        other => {
            return Err(ConvertError::ResponseShape(format!(
                "expected an array of entries, found {}",
                json_type_name(&other)
            )))
        }
    };

    if items.is_empty() {
        return Err(ConvertError::NotFound {
            word: None,
            suggestions: Vec::new(),
        });
    }

    if items.iter().all(Value::is_string) {
        let suggestions = items
            .iter()
            .filter_map(Value::as_str)
            .map(str::to_string)
            .collect();
        return Err(ConvertError::NotFound {
            word: None,
            suggestions,
        });
    }

    match items.swap_remove(0) {
        entry @ Value::Object(_) => Ok(entry),
        other => Err(ConvertError::ResponseShape(format!(
            "expected the first entry to be an object, found {}",
            json_type_name(&other)
        ))),
    }
}

/// Convert a raw response body straight to a note.
pub fn convert_response(body: &str, options: &RenderOptions) -> Result<String> {
    let entry = first_entry(body)?;
    let parser = EntryParser::build(&entry, options.clone())?;
    Ok(parser.render())
}
