use std::sync::LazyLock;
use std::time::Duration;

use regex::Regex;

use crate::lookup::LookupError;

const SENTENCE_URL: &str = "http://sentence.yourdictionary.com";

// The sentence site inlines its data as escaped JSON inside the page, so the
// literal text to match is `\"sentence\":\"...\"`.
static SENTENCE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"\\"sentence\\":\\"(.+?)\\""#).expect("static regex"));
static TAG_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<.+?>").expect("static regex"));

fn extract_sentences(page: &str) -> Vec<String> {
    SENTENCE_RE
        .captures_iter(page)
        .map(|caps| TAG_RE.replace_all(&caps[1], "").into_owned())
        .collect()
}

/// Example-sentence source. A page that cannot be fetched yields an empty
/// sequence, so the drill's first example request lands straight on the
/// "no other examples" sentinel.
pub struct SentenceClient {
    client: reqwest::blocking::Client,
}

impl SentenceClient {
    pub fn new() -> Result<Self, LookupError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(10))
            .build()?;
        Ok(Self { client })
    }

    pub fn fetch(&self, word: &str) -> Result<Vec<String>, LookupError> {
        let url = format!("{SENTENCE_URL}/{word}");
        let response = self.client.get(&url).send()?;
        if !response.status().is_success() {
            return Ok(Vec::new());
        }
        Ok(extract_sentences(&response.text()?))
    }
}
