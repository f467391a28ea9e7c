use std::io::{self, BufRead, Write};

use anyhow::Result;

/// Console seam for the drill loop: one line of input per iteration, the
/// quit confirmation, and message display. The engine only ever sees this
/// trait, so tests drive it with a scripted implementation.
pub trait Prompt {
    /// Called once per word before its loop starts, with the 1-based
    /// position of the word and the session total.
    fn begin_word(&mut self, _current: usize, _total: usize) {}

    fn read_line(&mut self) -> Result<String>;

    /// Nested confirmation guarding accidental session termination.
    fn confirm_quit(&mut self) -> Result<bool>;

    fn show(&mut self, text: &str);
}

pub struct ConsolePrompt {
    current: usize,
    total: usize,
}

impl ConsolePrompt {
    pub fn new() -> Self {
        Self {
            current: 0,
            total: 0,
        }
    }

    fn ask(&self, prompt: &str) -> Result<String> {
        print!("{prompt}");
        io::stdout().flush()?;
        let mut line = String::new();
        io::stdin().lock().read_line(&mut line)?;
        Ok(line)
    }
}

impl Default for ConsolePrompt {
    fn default() -> Self {
        Self::new()
    }
}

impl Prompt for ConsolePrompt {
    fn begin_word(&mut self, current: usize, total: usize) {
        self.current = current;
        self.total = total;
    }

    fn read_line(&mut self) -> Result<String> {
        self.ask(&format!(
            "({}/{}) Type word or <Enter> for help> ",
            self.current, self.total
        ))
    }

    fn confirm_quit(&mut self) -> Result<bool> {
        let answer = self.ask("Are you sure? ")?;
        Ok(matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"))
    }

    fn show(&mut self, text: &str) {
        println!("{text}");
    }
}
