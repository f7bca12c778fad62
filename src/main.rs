//! Spellbound - Terminal spelling practice
//!
//! Speaks a word out loud, offers a definition and an example sentence as
//! hints, and scores the typed attempt.

use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use spellbound::config::Config;
use spellbound::dictionary::{ContentResolver, DictionaryClient};
use spellbound::{game, tts, words};
use std::io::{self, BufRead, Write};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// TTS engine to use (auto, speechd, subprocess)
    #[arg(long)]
    engine: Option<String>,

    /// Maximum length of words to practice
    #[arg(long)]
    max_length: Option<usize>,

    /// Skip dictionary validation when picking words
    #[arg(long)]
    no_validate: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Setup logging
    let level = if args.verbose { Level::DEBUG } else { Level::WARN };
    let subscriber = FmtSubscriber::builder().with_max_level(level).finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let mut config = Config::load()?;
    if let Some(engine) = args.engine {
        config.tts_engine = engine;
    }
    if let Some(max_length) = args.max_length {
        config.max_word_length = max_length;
    }
    if args.no_validate {
        config.validate_words = false;
    }

    let tts_engine = match tts::create_engine(&config).await {
        Ok(engine) => engine,
        Err(e) => {
            eprintln!(
                "{}",
                format!("Failed to initialise text-to-speech: {}", e).red()
            );
            std::process::exit(1);
        }
    };
    info!("Spellbound v{} ready", env!("CARGO_PKG_VERSION"));

    let resolver = ContentResolver::new(DictionaryClient::new(&config));

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut out = io::stdout();

    writeln!(out, "{}\n", "Welcome to Spelling Bee!".bold())?;
    loop {
        let word = if config.validate_words {
            words::pick_validated(&resolver, config.max_word_length).await?
        } else {
            words::pick_any(config.max_word_length)?
        };
        game::play_round(&word, &resolver, tts_engine.as_ref(), &mut input, &mut out).await?;

        write!(out, "\nTry another word? (y/n): ")?;
        out.flush()?;
        let mut again = String::new();
        input.read_line(&mut again)?;
        if again.trim().to_lowercase() != "y" {
            writeln!(out, "\n{}", "Thanks for playing! Goodbye!".bold())?;
            break;
        }
        writeln!(out)?;
    }

    Ok(())
}
