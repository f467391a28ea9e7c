use anyhow::Result;

use crate::drill::cursor::Cursor;
use crate::drill::{Command, Input, Outcome, classify};
use crate::prompt::Prompt;

pub const HELP_TEXT: &str = "\
Please type the word or one of these commands:
'w' to say the word again, in a different voice,
'd' to say the next definition from the dictionary,
'e' to say the next example usage sentence,
'g' to give up on this word,
'q' to quit.";

/// Capabilities injected into the retry loop. The engine performs no I/O of
/// its own; speech and lookups happen behind this seam.
pub trait WordSupport {
    /// Announce the drilled word. `variation` starts at 0 and increments on
    /// every repeat request so the narrator can cycle voices.
    fn pronounce(&mut self, variation: u32);

    /// Speak a definition, an example sentence, or a sentinel notice.
    fn say(&mut self, text: &str);

    /// The definition sequence fetched along with the word entry.
    fn definitions(&mut self) -> Vec<String>;

    /// Fetch the example-sentence sequence. Called at most once per word,
    /// on the first example request.
    fn fetch_examples(&mut self) -> Vec<String>;
}

pub struct DrillRun {
    pub outcome: Outcome,
    /// Wrong guesses in typed order, plus the terminal "g"/"q" marker when
    /// the word was given up or quit on. Empty for a first-try correct.
    pub attempts: Vec<String>,
}

/// The retry loop for a single word. Owns the word's cursors and attempt
/// list; nothing here is shared across words.
pub struct Drill<'a> {
    word: &'a str,
    max_tries: usize,
}

impl<'a> Drill<'a> {
    pub fn new(word: &'a str, max_tries: usize) -> Self {
        Self { word, max_tries }
    }

    /// Drive the loop to its single terminal outcome. The word is announced
    /// on entry and again on each repeat command; all other commands and
    /// wrong guesses keep the current presentation.
    pub fn run(&self, support: &mut dyn WordSupport, prompt: &mut dyn Prompt) -> Result<DrillRun> {
        let mut attempts: Vec<String> = Vec::new();
        let mut variation: u32 = 0;
        let mut definitions = Cursor::new(support.definitions());
        let mut examples: Option<Cursor> = None;

        support.pronounce(variation);

        loop {
            let line = prompt.read_line()?;
            match classify(&line) {
                Input::Command(Command::Help) => prompt.show(HELP_TEXT),
                Input::Command(Command::Repeat) => {
                    variation += 1;
                    support.pronounce(variation);
                }
                Input::Command(Command::NextDefinition) => match definitions.advance() {
                    Some(text) => support.say(&text),
                    None => support.say("no other meaning"),
                },
                Input::Command(Command::NextExample) => {
                    let cursor = examples
                        .get_or_insert_with(|| Cursor::new(support.fetch_examples()));
                    match cursor.advance() {
                        Some(text) => support.say(&text),
                        None => support.say("no other examples"),
                    }
                }
                Input::Command(Command::GiveUp) => {
                    attempts.push("g".to_string());
                    prompt.show(&format!("the word is {}", self.word));
                    return Ok(DrillRun {
                        outcome: Outcome::GaveUp,
                        attempts,
                    });
                }
                Input::Command(Command::Quit) => {
                    if prompt.confirm_quit()? {
                        attempts.push("q".to_string());
                        return Ok(DrillRun {
                            outcome: Outcome::Quit,
                            attempts,
                        });
                    }
                    // Declined: back to the same presentation.
                }
                Input::Guess(guess) => {
                    if guess == self.word {
                        prompt.show("correct");
                        return Ok(DrillRun {
                            outcome: Outcome::Correct,
                            attempts,
                        });
                    }
                    attempts.push(guess);
                    if attempts.len() >= self.max_tries {
                        prompt.show(&format!("wrong, the word is {}", self.word));
                        return Ok(DrillRun {
                            outcome: Outcome::Exhausted,
                            attempts,
                        });
                    }
                    prompt.show("wrong, try again");
                }
            }
        }
    }
}
