use std::collections::HashSet;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rust_embed::Embed;

/// Sample lists shipped in the binary, used when no word-list file is given
/// on the command line.
#[derive(Embed)]
#[folder = "assets/wordlists/"]
struct BundledLists;

/// Parse one word-list body: one word per line, trimmed and lower-cased,
/// blank lines skipped.
fn parse_words(text: &str) -> impl Iterator<Item = String> + '_ {
    text.lines()
        .map(|line| line.trim())
        .filter(|line| !line.is_empty())
        .map(|line| line.to_lowercase())
}

/// Load the union of all given files, set-deduplicated. Order is
/// unspecified until [`shuffle`] fixes it for the run.
pub fn load(paths: &[impl AsRef<Path>]) -> Result<Vec<String>> {
    let mut seen: HashSet<String> = HashSet::new();
    for path in paths {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read word list {}", path.display()))?;
        seen.extend(parse_words(&content));
    }
    Ok(seen.into_iter().collect())
}

/// Deduplicated union of every bundled sample list.
pub fn bundled() -> Vec<String> {
    let mut seen: HashSet<String> = HashSet::new();
    for name in BundledLists::iter() {
        if let Some(file) = BundledLists::get(&name) {
            let content = String::from_utf8_lossy(&file.data).into_owned();
            seen.extend(parse_words(&content));
        }
    }
    seen.into_iter().collect()
}

/// Fix the drill order for this run.
pub fn shuffle(words: &mut [String], rng: &mut SmallRng) {
    words.shuffle(rng);
}
