use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};

use crate::session::Session;

pub struct Summary {
    pub attempted: usize,
    pub distinct_missed: usize,
}

impl Summary {
    /// None when no words were attempted; the score never divides by zero.
    pub fn score_percent(&self) -> Option<f64> {
        if self.attempted == 0 {
            return None;
        }
        Some((1.0 - self.distinct_missed as f64 / self.attempted as f64) * 100.0)
    }
}

pub fn summarize(session: &Session) -> Summary {
    Summary {
        attempted: session.attempted,
        distinct_missed: session.distinct_missed(),
    }
}

/// Console lines for the end-of-session report.
pub fn summary_lines(session: &Session) -> Vec<String> {
    let summary = summarize(session);
    let Some(score) = summary.score_percent() else {
        return vec!["no words attempted".to_string()];
    };
    if session.is_clean() {
        return vec![format!(
            "Congratulations! You got 100% from {} words",
            summary.attempted
        )];
    }
    let mut lines = vec!["These are the words you got wrong:".to_string()];
    for (word, attempts) in session.missed() {
        lines.push(format!("{word} - typed {attempts:?}"));
    }
    lines.push(format!("You got {score:.1}% of {} words", summary.attempted));
    lines
}

/// Append each missed word (sorted, one per line) to `path`. The file must
/// already exist; an absent file or a clean session is a silent skip.
/// Returns whether anything was written.
pub fn append_missed(session: &Session, path: &Path) -> Result<bool> {
    if session.is_clean() || !path.exists() {
        return Ok(false);
    }
    let mut file = OpenOptions::new()
        .append(true)
        .open(path)
        .with_context(|| format!("failed to open missed-words file {}", path.display()))?;
    for (word, _) in session.missed() {
        writeln!(file, "{word}")?;
    }
    Ok(true)
}
