pub mod merriam;
pub mod sentences;

use std::fs;
use std::path::PathBuf;

use anyhow::{Result, bail};
use thiserror::Error;

use crate::lookup::merriam::DictionaryClient;
use crate::lookup::sentences::SentenceClient;

/// Failures fetching a word's entry or its support material. All of these
/// are caught per word by the session driver: the word is logged and
/// skipped, never counted as attempted or missed.
#[derive(Debug, Error)]
pub enum LookupError {
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("unexpected dictionary response: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("\"{0}\" is not in the dictionary")]
    NotFound(String),
    #[error("no pronunciation audio for \"{0}\"")]
    NoPronunciation(String),
}

/// One dictionary entry as the drill consumes it.
pub struct WordEntry {
    /// Headword identifier with any `:n` homograph suffix stripped.
    pub headword: String,
    pub definitions: Vec<String>,
    /// Pronunciation WAVs, one per listed sound.
    pub audio: Vec<Vec<u8>>,
}

impl WordEntry {
    /// Whether the drilled word is the headword itself rather than an
    /// inflection listed under it.
    pub fn is_exact_for(&self, word: &str) -> bool {
        self.headword == word
    }
}

/// Seam between the session driver and the remote services, so the whole
/// session flow can run against a canned implementation in tests.
pub trait Lookup {
    fn entry(&self, word: &str) -> Result<WordEntry, LookupError>;
    fn examples(&self, word: &str) -> Result<Vec<String>, LookupError>;
}

pub struct HttpLookup {
    dictionary: DictionaryClient,
    sentences: SentenceClient,
}

impl HttpLookup {
    pub fn new(api_key: String) -> Result<Self, LookupError> {
        Ok(Self {
            dictionary: DictionaryClient::new(api_key)?,
            sentences: SentenceClient::new()?,
        })
    }
}

impl Lookup for HttpLookup {
    fn entry(&self, word: &str) -> Result<WordEntry, LookupError> {
        self.dictionary.lookup(word)
    }

    fn examples(&self, word: &str) -> Result<Vec<String>, LookupError> {
        self.sentences.fetch(word)
    }
}

const API_KEY_FILE: &str = "dict_api.key";

/// Resolve the dictionary API key: the configured value wins, then
/// `dict_api.key` in the working directory, next to the executable, and in
/// the home directory. Missing everywhere is fatal at startup.
pub fn resolve_api_key(configured: Option<&str>) -> Result<String> {
    if let Some(key) = configured {
        let key = key.trim();
        if !key.is_empty() {
            return Ok(key.to_string());
        }
    }

    let mut candidates: Vec<PathBuf> = Vec::new();
    if let Ok(cwd) = std::env::current_dir() {
        candidates.push(cwd.join(API_KEY_FILE));
    }
    if let Ok(exe) = std::env::current_exe()
        && let Some(dir) = exe.parent()
    {
        candidates.push(dir.join(API_KEY_FILE));
    }
    if let Some(home) = dirs::home_dir() {
        candidates.push(home.join(API_KEY_FILE));
    }

    for path in &candidates {
        if path.exists() {
            let key = fs::read_to_string(path)?.trim().to_string();
            if !key.is_empty() {
                return Ok(key);
            }
        }
    }

    bail!(
        "could not find {API_KEY_FILE}; put your dictionaryapi.com key in it \
         next to the program or in your home directory, or set api_key in the config"
    )
}
