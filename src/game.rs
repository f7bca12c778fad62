//! Game Round
//!
//! The interactive round: speak the word, offer hints through a small menu,
//! then score the typed attempt. Generic over reader/writer so tests can
//! drive a round with in-memory buffers and a mock TTS engine.

use crate::compare::{check_spelling, compare, Comparison};
use crate::dictionary::ContentResolver;
use crate::error::SpellResult;
use crate::tts::TtsEngine;
use colored::Colorize;
use std::io::{BufRead, Write};
use tracing::warn;

/// Outcome of one spelling round
#[derive(Debug, Clone, PartialEq)]
pub struct RoundOutcome {
    pub correct: bool,
    pub accuracy: f64,
}

/// Success banner shown on a correct spelling
pub fn format_success() -> String {
    "✅ Congrats! You spelled it correctly!"
        .green()
        .bold()
        .to_string()
}

/// Failure report: the correct word with matched characters in green and
/// missed ones in bold red, plus the accuracy percentage.
pub fn format_failure(target: &str, comparison: &Comparison) -> String {
    let mut word_display = String::new();
    for (ch, matched) in target.chars().zip(&comparison.matches) {
        let colored_ch = if *matched {
            ch.to_string().green().to_string()
        } else {
            ch.to_string().red().bold().to_string()
        };
        word_display.push_str(&colored_ch);
    }
    format!(
        "{}\n{}\n{}",
        "❌ Unlucky! The correct spelling is:".red(),
        word_display,
        format!("Accuracy: {:.0}%", comparison.accuracy).red()
    )
}

async fn speak(tts: &dyn TtsEngine, text: &str) {
    // Audio trouble is not fatal to the round; the player can still read
    // the hints and type an attempt
    if let Err(e) = tts.speak(text).await {
        warn!("TTS failed: {}", e);
    }
}

/// Read one line, `None` on end of input
fn read_line<R: BufRead>(input: &mut R) -> SpellResult<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}

/// Play one round for the given target word.
pub async fn play_round<R: BufRead, W: Write>(
    word: &str,
    resolver: &ContentResolver,
    tts: &dyn TtsEngine,
    input: &mut R,
    out: &mut W,
) -> SpellResult<RoundOutcome> {
    speak(tts, word).await;

    loop {
        writeln!(out, "\n1. Hear the word again")?;
        writeln!(out, "2. Get the definition")?;
        writeln!(out, "3. Hear the word in a sentence")?;
        writeln!(out, "4. Spell the word")?;
        write!(out, "\nChoose an option: ")?;
        out.flush()?;

        let choice = match read_line(input)? {
            Some(choice) => choice,
            None => break,
        };
        match choice.trim() {
            "1" => speak(tts, word).await,
            "2" => match resolver.definition(word).await {
                Some(definition) => writeln!(out, "\nDefinition: {}", definition)?,
                None => writeln!(out, "\nDefinition not available.")?,
            },
            "3" => {
                let sentence = resolver.sentence(word).await;
                writeln!(out, "\nSentence: {}", sentence)?;
                speak(tts, &sentence).await;
            }
            "4" => break,
            _ => {}
        }
    }

    write!(out, "Type your spelling: ")?;
    out.flush()?;
    let attempt = read_line(input)?.unwrap_or_default();

    if check_spelling(word, &attempt) {
        writeln!(out, "{}", format_success())?;
        Ok(RoundOutcome {
            correct: true,
            accuracy: 100.0,
        })
    } else {
        let comparison = compare(word, attempt.trim());
        writeln!(out, "{}", format_failure(word, &comparison))?;
        Ok(RoundOutcome {
            correct: false,
            accuracy: comparison.accuracy,
        })
    }
}
