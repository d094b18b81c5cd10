//! Collegiate API client
//!
//! A thin blocking wrapper over a shared [`ureq::Agent`]. An HTTP status failure is
//! retried once before giving up; transport failures are not retried.
//!
//! Errors never carry the request URL, since it contains the API key.

use std::env;
use thiserror::Error;
use webster_babel::{convert_response, lookup_url, ConvertError, RenderOptions};
use webster_config::ApiConfig;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("No API key: set the {0} environment variable or api.key in webster.toml")]
    MissingKey(String),

    #[error("Request for '{word}' failed with HTTP status {status}")]
    Status { word: String, status: u16 },

    #[error("Request for '{word}' failed: {reason}")]
    Transport { word: String, reason: String },

    #[error("Failed to read response for '{word}': {source}")]
    Body {
        word: String,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Convert(#[from] ConvertError),
}

/// Pick the API key: inline `api.key` first, then the variable named by `api.key_env`.
/// Empty values count as missing.
pub fn resolve_key(api: &ApiConfig) -> Result<String, FetchError> {
    api.key
        .clone()
        .filter(|key| !key.is_empty())
        .or_else(|| env::var(&api.key_env).ok().filter(|key| !key.is_empty()))
        .ok_or_else(|| FetchError::MissingKey(api.key_env.clone()))
}

/// Fetches dictionary entries and converts them to notes.
#[derive(Debug, Clone)]
pub struct DictionaryClient {
    agent: ureq::Agent,
    api_root: String,
    key: String,
}

impl DictionaryClient {
    pub fn new(api: &ApiConfig) -> Result<Self, FetchError> {
        let key = resolve_key(api)?;
        let agent = ureq::AgentBuilder::new().timeout(api.timeout()).build();
        Ok(DictionaryClient {
            agent,
            api_root: api.root.clone(),
            key,
        })
    }

    /// Raw response body for `word`.
    pub fn fetch(&self, word: &str) -> Result<String, FetchError> {
        let url = lookup_url(&self.api_root, word, &self.key)?;
        log::info!("fetching '{word}'");

        let response = match self.agent.request_url("GET", &url).call() {
            Ok(response) => response,
            Err(ureq::Error::Status(status, _)) => {
                log::warn!("'{word}': HTTP status {status}, retrying once");
                self.agent
                    .request_url("GET", &url)
                    .call()
                    .map_err(|err| request_error(word, err))?
            }
            Err(err) => return Err(request_error(word, err)),
        };

        response.into_string().map_err(|source| FetchError::Body {
            word: word.to_string(),
            source,
        })
    }

    /// Fetch `word` and render its first entry.
    pub fn lookup(&self, word: &str, options: &RenderOptions) -> Result<String, FetchError> {
        let body = self.fetch(word)?;
        convert_response(&body, options).map_err(|err| err.for_word(word).into())
    }
}

fn request_error(word: &str, err: ureq::Error) -> FetchError {
    match err {
        ureq::Error::Status(status, _) => FetchError::Status {
            word: word.to_string(),
            status,
        },
        ureq::Error::Transport(transport) => FetchError::Transport {
            word: word.to_string(),
            reason: match transport.message() {
                Some(message) => format!("{}: {message}", transport.kind()),
                None => transport.kind().to_string(),
            },
        },
    }
}
