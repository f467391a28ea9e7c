use std::collections::{HashMap, HashSet, VecDeque};
use std::fs;
use std::io::Write as _;
use std::path::PathBuf;

use anyhow::Result;
use tempfile::TempDir;

use spelldr::app::App;
use spelldr::config::Config;
use spelldr::lookup::{Lookup, LookupError, WordEntry};
use spelldr::prompt::Prompt;
use spelldr::speech::Narrator;
use spelldr::wordlist;

/// Canned lookup: every known word has one definition and one fake WAV;
/// words in `failing` error like a dead dictionary service.
struct FakeLookup {
    definitions: HashMap<String, Vec<String>>,
    failing: HashSet<String>,
}

impl FakeLookup {
    fn knowing(words: &[&str]) -> Self {
        let definitions = words
            .iter()
            .map(|word| (word.to_string(), vec![format!("meaning of {word}")]))
            .collect();
        Self {
            definitions,
            failing: HashSet::new(),
        }
    }

    fn failing_on(mut self, word: &str) -> Self {
        self.failing.insert(word.to_string());
        self
    }
}

impl Lookup for FakeLookup {
    fn entry(&self, word: &str) -> Result<WordEntry, LookupError> {
        if self.failing.contains(word) {
            return Err(LookupError::NotFound(word.to_string()));
        }
        Ok(WordEntry {
            headword: word.to_string(),
            definitions: self.definitions.get(word).cloned().unwrap_or_default(),
            audio: vec![vec![0u8; 4]],
        })
    }

    fn examples(&self, word: &str) -> Result<Vec<String>, LookupError> {
        Ok(vec![format!("a sentence with {word}")])
    }
}

#[derive(Default)]
struct ScriptPrompt {
    lines: VecDeque<String>,
    confirms: VecDeque<bool>,
    shown: Vec<String>,
    words_started: usize,
}

impl ScriptPrompt {
    fn typing(lines: &[&str]) -> Self {
        Self {
            lines: lines.iter().map(|s| s.to_string()).collect(),
            ..Self::default()
        }
    }
}

impl Prompt for ScriptPrompt {
    fn begin_word(&mut self, _current: usize, _total: usize) {
        self.words_started += 1;
    }

    fn read_line(&mut self) -> Result<String> {
        Ok(self.lines.pop_front().expect("script ran out of input"))
    }

    fn confirm_quit(&mut self) -> Result<bool> {
        Ok(self.confirms.pop_front().unwrap_or(true))
    }

    fn show(&mut self, text: &str) {
        self.shown.push(text.to_string());
    }
}

struct SilentNarrator;

impl Narrator for SilentNarrator {
    fn speak(&mut self, _text: &str, _rate: i32, _voice_offset: u32) {}
    fn play(&mut self, _wav: &[u8]) {}
}

fn make_app(
    words: &[&str],
    lookup: FakeLookup,
    missed_file: Option<PathBuf>,
) -> App<FakeLookup> {
    App::new(
        Config::default(),
        words.iter().map(|s| s.to_string()).collect(),
        lookup,
        Box::new(SilentNarrator),
        missed_file,
    )
}

#[test]
fn all_correct_session_scores_100_and_appends_nothing() {
    let dir = TempDir::new().unwrap();
    let missed = dir.path().join("_missed.txt");
    fs::write(&missed, "").unwrap();

    let words = ["apple", "brick"];
    let mut app = make_app(&words, FakeLookup::knowing(&words), Some(missed.clone()));
    let mut prompt = ScriptPrompt::typing(&["apple", "brick"]);
    app.run(&mut prompt).unwrap();

    assert_eq!(app.session.attempted, 2);
    assert!(app.session.is_clean());
    assert!(
        prompt
            .shown
            .contains(&"Congratulations! You got 100% from 2 words".to_string())
    );
    assert_eq!(fs::read_to_string(&missed).unwrap(), "");
}

#[test]
fn quit_mid_session_stops_processing_further_words() {
    let words = ["apple", "brick", "cloud"];
    let mut app = make_app(&words, FakeLookup::knowing(&words), None);
    // Correct first word, quit on the second; the third must never start.
    let mut prompt = ScriptPrompt::typing(&["apple", "q"]);
    app.run(&mut prompt).unwrap();

    assert_eq!(prompt.words_started, 2);
    // The quit-triggering word counts toward the denominator: 1 missed of 2.
    assert_eq!(app.session.attempted, 2);
    assert_eq!(app.session.distinct_missed(), 1);
    assert!(
        prompt
            .shown
            .contains(&"You got 50.0% of 2 words".to_string())
    );
}

#[test]
fn failed_lookup_skips_word_without_counting_it() {
    let words = ["apple", "brick"];
    let lookup = FakeLookup::knowing(&words).failing_on("apple");
    let mut app = make_app(&words, lookup, None);
    let mut prompt = ScriptPrompt::typing(&["brick"]);
    app.run(&mut prompt).unwrap();

    assert_eq!(prompt.words_started, 1);
    assert_eq!(app.session.attempted, 1);
    assert!(app.session.is_clean());
}

#[test]
fn every_lookup_failing_reports_no_words_attempted() {
    let words = ["apple"];
    let lookup = FakeLookup::knowing(&words).failing_on("apple");
    let mut app = make_app(&words, lookup, None);
    let mut prompt = ScriptPrompt::typing(&[]);
    app.run(&mut prompt).unwrap();

    assert_eq!(app.session.attempted, 0);
    assert!(prompt.shown.contains(&"no words attempted".to_string()));
}

#[test]
fn missed_words_append_to_preexisting_file_only() {
    let dir = TempDir::new().unwrap();
    let missed = dir.path().join("_missed.txt");
    fs::write(&missed, "earlier\n").unwrap();

    let words = ["apple", "brick"];
    let mut app = make_app(&words, FakeLookup::knowing(&words), Some(missed.clone()));
    // Give up on apple, spell brick right.
    let mut prompt = ScriptPrompt::typing(&["g", "brick"]);
    app.run(&mut prompt).unwrap();

    assert_eq!(fs::read_to_string(&missed).unwrap(), "earlier\napple\n");
    assert!(
        prompt
            .shown
            .contains(&"You got 50.0% of 2 words".to_string())
    );
}

#[test]
fn exhausting_max_try_reveals_word_and_records_every_guess() {
    let words = ["apple"];
    let mut app = make_app(&words, FakeLookup::knowing(&words), None);
    let mut prompt = ScriptPrompt::typing(&["aple", "appel", "appl"]);
    app.run(&mut prompt).unwrap();

    assert_eq!(app.session.distinct_missed(), 1);
    let (word, attempts) = app.session.missed().next().unwrap();
    assert_eq!(word, "apple");
    assert_eq!(attempts.len(), 3);
    assert!(
        prompt
            .shown
            .contains(&"wrong, the word is apple".to_string())
    );
}

#[test]
fn duplicate_entries_across_files_drill_once() {
    let dir = TempDir::new().unwrap();
    let first = dir.path().join("a.txt");
    let second = dir.path().join("b.txt");
    let mut f = fs::File::create(&first).unwrap();
    writeln!(f, "apple\nApple\nbrick").unwrap();
    let mut g = fs::File::create(&second).unwrap();
    writeln!(g, "APPLE").unwrap();

    let mut words = wordlist::load(&[first, second]).unwrap();
    words.sort();
    assert_eq!(words, vec!["apple", "brick"]);

    let refs: Vec<&str> = words.iter().map(|s| s.as_str()).collect();
    let mut app = make_app(&refs, FakeLookup::knowing(&refs), None);
    let mut prompt = ScriptPrompt::typing(&["apple", "brick"]);
    app.run(&mut prompt).unwrap();
    assert_eq!(app.session.attempted, 2);
}
