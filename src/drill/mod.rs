pub mod cursor;
pub mod engine;

/// Terminal result of one word's retry loop.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Correct,
    GaveUp,
    Quit,
    Exhausted,
}

/// Non-word inputs recognized inside the retry loop.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Repeat,
    NextDefinition,
    NextExample,
    GiveUp,
    Quit,
    Help,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Input {
    Command(Command),
    Guess(String),
}

/// Classify one typed line. Commands outrank guesses: a drilled word that
/// happens to be a command letter can never be typed as an answer.
pub fn classify(line: &str) -> Input {
    let typed = line.trim().to_lowercase();
    match typed.as_str() {
        "" => Input::Command(Command::Help),
        "w" => Input::Command(Command::Repeat),
        "d" => Input::Command(Command::NextDefinition),
        "e" => Input::Command(Command::NextExample),
        "g" => Input::Command(Command::GiveUp),
        "q" => Input::Command(Command::Quit),
        _ => Input::Guess(typed),
    }
}
