use std::time::Duration;

use serde::Deserialize;

use crate::lookup::{LookupError, WordEntry};

const API_URL: &str = "https://www.dictionaryapi.com/api/v3/references/collegiate/json";
const SOUND_URL: &str = "https://media.merriam-webster.com/soundc11";

/// Merriam-Webster collegiate client: entry JSON plus pronunciation WAVs.
/// Every lookup is a single attempt; there are no retries.
pub struct DictionaryClient {
    client: reqwest::blocking::Client,
    api_key: String,
}

#[derive(Debug, Deserialize)]
struct Entry {
    meta: Meta,
    #[serde(default)]
    hwi: Hwi,
    #[serde(default)]
    shortdef: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct Meta {
    id: String,
}

#[derive(Debug, Default, Deserialize)]
struct Hwi {
    #[serde(default)]
    prs: Vec<Pronunciation>,
}

#[derive(Debug, Deserialize)]
struct Pronunciation {
    #[serde(default)]
    sound: Option<Sound>,
}

#[derive(Debug, Deserialize)]
struct Sound {
    audio: String,
}

#[derive(Debug)]
struct ParsedEntry {
    headword: String,
    definitions: Vec<String>,
    audio_files: Vec<String>,
}

/// Interpret the response body. Unknown words come back as a bare array of
/// suggestion strings, which fails entry deserialization — that is a
/// not-found, not a parse error.
fn parse_body(word: &str, body: serde_json::Value) -> Result<ParsedEntry, LookupError> {
    let entries: Vec<serde_json::Value> = serde_json::from_value(body)?;
    let first = entries
        .into_iter()
        .next()
        .ok_or_else(|| LookupError::NotFound(word.to_string()))?;
    let entry: Entry = serde_json::from_value(first)
        .map_err(|_| LookupError::NotFound(word.to_string()))?;

    let headword = entry
        .meta
        .id
        .split(':')
        .next()
        .unwrap_or(&entry.meta.id)
        .to_string();
    let audio_files: Vec<String> = entry
        .hwi
        .prs
        .into_iter()
        .filter_map(|pr| pr.sound)
        .map(|sound| sound.audio)
        .collect();
    if audio_files.is_empty() {
        return Err(LookupError::NoPronunciation(word.to_string()));
    }

    Ok(ParsedEntry {
        headword,
        definitions: entry.shortdef,
        audio_files,
    })
}

impl DictionaryClient {
    pub fn new(api_key: String) -> Result<Self, LookupError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(10))
            .build()?;
        Ok(Self { client, api_key })
    }

    pub fn lookup(&self, word: &str) -> Result<WordEntry, LookupError> {
        let url = format!("{API_URL}/{word}?key={}", self.api_key);
        let response = self.client.get(&url).send()?;
        if !response.status().is_success() {
            return Err(LookupError::NotFound(word.to_string()));
        }
        let body: serde_json::Value = serde_json::from_str(&response.text()?)?;
        let parsed = parse_body(word, body)?;

        let mut audio = Vec::with_capacity(parsed.audio_files.len());
        for file in &parsed.audio_files {
            audio.push(self.fetch_wav(file)?);
        }

        Ok(WordEntry {
            headword: parsed.headword,
            definitions: parsed.definitions,
            audio,
        })
    }

    /// WAVs live under a subdirectory named by the file's first character.
    fn fetch_wav(&self, file: &str) -> Result<Vec<u8>, LookupError> {
        let subdir: String = file.chars().take(1).collect();
        let url = format!("{SOUND_URL}/{subdir}/{file}.wav");
        let response = self.client.get(&url).send()?;
        if !response.status().is_success() {
            return Err(LookupError::NoPronunciation(file.to_string()));
        }
        Ok(response.bytes()?.to_vec())
    }
}
