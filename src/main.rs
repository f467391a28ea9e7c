mod app;
mod config;
mod drill;
mod lookup;
mod prompt;
mod session;
mod speech;
mod wordlist;

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use tracing_subscriber::EnvFilter;

use app::App;
use config::Config;
use lookup::HttpLookup;
use prompt::ConsolePrompt;

#[derive(Parser)]
#[command(
    name = "spelldr",
    version,
    about = "Terminal spelling drill with spoken words and dictionary lookups"
)]
struct Cli {
    #[arg(help = "Word list file(s), one word per line; bundled sample lists when omitted")]
    wordlist: Vec<PathBuf>,

    #[arg(long, help = "Base voice index for synthesized speech")]
    voice_index: Option<usize>,

    #[arg(long, help = "Speech rate for saying the drilled word")]
    word_rate: Option<i32>,

    #[arg(long, help = "Speech rate for definitions and examples")]
    def_rate: Option<i32>,

    #[arg(long, help = "Wrong guesses allowed before the answer is revealed")]
    max_try: Option<usize>,

    #[arg(long, help = "Existing file to append missed words to")]
    missed_file: Option<PathBuf>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut config = Config::load()?;
    if let Some(voice_index) = cli.voice_index {
        config.voice_index = voice_index;
    }
    if let Some(word_rate) = cli.word_rate {
        config.word_rate = word_rate;
    }
    if let Some(def_rate) = cli.def_rate {
        config.def_rate = def_rate;
    }
    if let Some(max_try) = cli.max_try {
        config.max_try = max_try;
    }
    config.validate();

    // Fatal before any word is processed.
    let api_key = lookup::resolve_api_key(config.api_key.as_deref())?;

    let mut words = if cli.wordlist.is_empty() {
        wordlist::bundled()
    } else {
        wordlist::load(&cli.wordlist)?
    };
    let mut rng = SmallRng::from_entropy();
    wordlist::shuffle(&mut words, &mut rng);

    // Default missed-words file sits next to the first word list; there is
    // no default when drilling a bundled list.
    let missed_file = cli.missed_file.clone().or_else(|| {
        cli.wordlist
            .first()
            .map(|first| first.with_file_name("_missed.txt"))
    });

    let lookup = HttpLookup::new(api_key)?;
    let narrator = speech::narrator(config.voice_index);

    let mut app = App::new(config, words, lookup, narrator, missed_file);
    let mut prompt = ConsolePrompt::new();
    app.run(&mut prompt)
}
