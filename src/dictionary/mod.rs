//! Dictionary Lookup
//!
//! Thin client for the Free Dictionary API with a per-instance word cache.
//! Lookups that fail for any reason (network, timeout, bad status, bad shape)
//! uniformly report "no data" and are never cached, so a later call retries.

pub mod content;

pub use content::ContentResolver;

use crate::config::Config;
use serde::Deserialize;
use std::collections::HashMap;
use std::sync::RwLock;
use std::time::Duration;
use tracing::debug;

/// One entry of the API response for a word lookup
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LexicalEntry {
    #[serde(default)]
    pub word: String,
    #[serde(default)]
    pub meanings: Vec<Meaning>,
}

/// One part-of-speech sense of a word
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Meaning {
    #[serde(rename = "partOfSpeech", default)]
    pub part_of_speech: Option<PartOfSpeech>,
    #[serde(default)]
    pub definitions: Vec<Definition>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PartOfSpeech {
    Noun,
    Verb,
    Adjective,
    Adverb,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Definition {
    #[serde(rename = "definition")]
    pub text: String,
    #[serde(default)]
    pub example: Option<String>,
}

/// Dictionary API client. The cache lives on the instance rather than in a
/// process global so tests and multiple clients stay isolated.
pub struct DictionaryClient {
    client: reqwest::Client,
    base_url: String,
    /// Entries for every word that has fetched successfully
    cache: RwLock<HashMap<String, Vec<LexicalEntry>>>,
}

impl DictionaryClient {
    pub fn new(config: &Config) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .unwrap_or_default();
        Self {
            client,
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
            cache: RwLock::new(HashMap::new()),
        }
    }

    /// Look up a word, returning its entries or `None` when no data is
    /// available. Successful lookups are cached for the life of the client;
    /// failures are not, so transient errors can clear on a retry.
    pub async fn fetch(&self, word: &str) -> Option<Vec<LexicalEntry>> {
        let key = word.to_lowercase();
        {
            let cache = self.cache.read().unwrap();
            if let Some(entries) = cache.get(&key) {
                return Some(entries.clone());
            }
        }

        let url = format!("{}/{}", self.base_url, urlencoding::encode(&key));
        debug!("Dictionary lookup: {}", url);

        let resp = match self.client.get(&url).send().await {
            Ok(resp) => resp,
            Err(e) => {
                debug!("Lookup failed for '{}': {}", key, e);
                return None;
            }
        };
        if !resp.status().is_success() {
            debug!("Lookup for '{}' returned {}", key, resp.status());
            return None;
        }
        let entries: Vec<LexicalEntry> = match resp.json().await {
            Ok(entries) => entries,
            Err(e) => {
                debug!("Unexpected response shape for '{}': {}", key, e);
                return None;
            }
        };
        if entries.is_empty() {
            return None;
        }

        self.cache
            .write()
            .unwrap()
            .insert(key, entries.clone());
        Some(entries)
    }

    /// Whether a word has a cached entry
    pub fn is_cached(&self, word: &str) -> bool {
        self.cache.read().unwrap().contains_key(&word.to_lowercase())
    }

    #[cfg(test)]
    pub(crate) fn prime(&self, word: &str, entries: Vec<LexicalEntry>) {
        self.cache
            .write()
            .unwrap()
            .insert(word.to_lowercase(), entries);
    }
}
