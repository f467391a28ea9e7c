pub mod report;

use std::collections::BTreeMap;

use crate::drill::engine::DrillRun;

/// Cross-word state for one run: the attempted count and the missed-history
/// map. Mutated only at word boundaries; a word's entry is append-only once
/// created. The map is ordered so reporting iterates sorted.
pub struct Session {
    /// Words that entered the drill loop, including one that ended in Quit.
    /// Words whose lookup failed never count.
    pub attempted: usize,
    missed: BTreeMap<String, Vec<String>>,
}

impl Session {
    pub fn new() -> Self {
        Self {
            attempted: 0,
            missed: BTreeMap::new(),
        }
    }

    /// Fold one word's finished drill into the session. A first-try correct
    /// leaves no trace; anything else keeps the word's recorded attempts.
    pub fn record(&mut self, word: &str, run: &DrillRun) {
        if !run.attempts.is_empty() {
            self.missed
                .entry(word.to_string())
                .or_default()
                .extend(run.attempts.iter().cloned());
        }
    }

    pub fn distinct_missed(&self) -> usize {
        self.missed.len()
    }

    pub fn is_clean(&self) -> bool {
        self.missed.is_empty()
    }

    /// Missed words with their attempts, sorted by word.
    pub fn missed(&self) -> impl Iterator<Item = (&String, &Vec<String>)> {
        self.missed.iter()
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
