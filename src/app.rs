use std::path::PathBuf;

use anyhow::Result;
use tracing::warn;

use crate::config::Config;
use crate::drill::Outcome;
use crate::drill::engine::{Drill, WordSupport};
use crate::lookup::{Lookup, WordEntry};
use crate::prompt::Prompt;
use crate::session::{Session, report};
use crate::speech::Narrator;

/// Adapts the narrator and the lookup service to the engine's seam for one
/// word's loop. The definition sequence arrives with the entry; examples
/// are fetched lazily on the first request.
struct LiveSupport<'a> {
    word: &'a str,
    entry: &'a WordEntry,
    narrator: &'a mut dyn Narrator,
    lookup: &'a dyn Lookup,
    word_rate: i32,
    def_rate: i32,
}

impl LiveSupport<'_> {
    /// Play every listed pronunciation, joining them with a spoken "or".
    fn play_pronunciations(&mut self, variation: u32) {
        let mut first = true;
        for wav in &self.entry.audio {
            if !first {
                self.narrator.speak("or", self.word_rate, variation);
            }
            self.narrator.play(wav);
            first = false;
        }
    }
}

impl WordSupport for LiveSupport<'_> {
    fn pronounce(&mut self, variation: u32) {
        if self.entry.is_exact_for(self.word) {
            self.play_pronunciations(variation);
        } else {
            // The drilled word is an inflection listed under the headword.
            self.narrator.speak(self.word, self.word_rate, variation);
            self.narrator.speak("stems from", self.word_rate, variation);
            self.play_pronunciations(variation);
        }
    }

    fn say(&mut self, text: &str) {
        self.narrator.speak(text, self.def_rate, 0);
    }

    fn definitions(&mut self) -> Vec<String> {
        self.entry.definitions.clone()
    }

    fn fetch_examples(&mut self) -> Vec<String> {
        match self.lookup.examples(self.word) {
            Ok(sentences) => sentences,
            Err(err) => {
                warn!(word = self.word, error = %err, "example fetch failed");
                Vec::new()
            }
        }
    }
}

/// Outer session driver: one drill per word, in the order fixed at startup,
/// until the list ends or a word's loop returns Quit.
pub struct App<L: Lookup> {
    config: Config,
    words: Vec<String>,
    lookup: L,
    narrator: Box<dyn Narrator>,
    missed_file: Option<PathBuf>,
    pub session: Session,
}

impl<L: Lookup> App<L> {
    pub fn new(
        config: Config,
        words: Vec<String>,
        lookup: L,
        narrator: Box<dyn Narrator>,
        missed_file: Option<PathBuf>,
    ) -> Self {
        Self {
            config,
            words,
            lookup,
            narrator,
            missed_file,
            session: Session::new(),
        }
    }

    pub fn run(&mut self, prompt: &mut dyn Prompt) -> Result<()> {
        let words = self.words.clone();
        prompt.show(&format!("Total number of words: {}", words.len()));

        for word in &words {
            // One bad lookup must not abort the session: log and move on.
            // The word counts as neither attempted nor missed.
            let entry = match self.lookup.entry(word) {
                Ok(entry) => entry,
                Err(err) => {
                    warn!(%word, error = %err, "skipping word, lookup failed");
                    continue;
                }
            };

            self.session.attempted += 1;
            prompt.begin_word(self.session.attempted, words.len());

            let mut support = LiveSupport {
                word,
                entry: &entry,
                narrator: self.narrator.as_mut(),
                lookup: &self.lookup,
                word_rate: self.config.word_rate,
                def_rate: self.config.def_rate,
            };
            let run = Drill::new(word, self.config.max_try).run(&mut support, prompt)?;
            self.session.record(word, &run);

            if run.outcome == Outcome::Quit {
                break;
            }
        }

        for line in report::summary_lines(&self.session) {
            prompt.show(&line);
        }
        if let Some(path) = &self.missed_file {
            report::append_missed(&self.session, path)?;
        }
        Ok(())
    }
}
