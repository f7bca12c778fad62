//! Subprocess fallback TTS engine
//!
//! Shells out to whichever speech command the platform has. Covers plain
//! Linux (espeak-ng/espeak) and Termux on Android (termux-tts-speak), where
//! no speech daemon is available.

use super::TtsEngine;
use crate::config::Config;
use anyhow::Result;
use async_trait::async_trait;
use tokio::process::Command;
use tracing::debug;

/// Commands tried in order; the first one that runs successfully wins
const COMMANDS: &[&str] = &["espeak-ng", "espeak", "termux-tts-speak"];

#[derive(Debug)]
pub struct SubprocessEngine {
    rate: u32,
    voice: String,
}

impl SubprocessEngine {
    pub fn new(config: &Config) -> Self {
        Self {
            rate: config.voice_rate,
            voice: config.voice.clone(),
        }
    }
}

#[async_trait]
impl TtsEngine for SubprocessEngine {
    async fn speak(&self, text: &str) -> Result<()> {
        debug!("Subprocess speaking: {}", text);

        for program in COMMANDS {
            let mut cmd = Command::new(program);
            // Rate/voice flags only exist in the espeak family
            if program.starts_with("espeak") {
                cmd.arg("-s")
                    .arg(self.rate.to_string())
                    .arg("-v")
                    .arg(&self.voice);
            }
            cmd.arg(text);

            match cmd.output().await {
                Ok(output) if output.status.success() => return Ok(()),
                Ok(output) => {
                    debug!("{} exited with {}", program, output.status);
                }
                Err(e) => {
                    debug!("{} not runnable: {}", program, e);
                }
            }
        }

        Err(anyhow::anyhow!(
            "No TTS command found (tried espeak-ng, espeak, termux-tts-speak)"
        ))
    }

    fn name(&self) -> &str {
        "subprocess"
    }
}
