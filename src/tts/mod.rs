//! TTS (Text-to-Speech) Module
//!
//! Provides a unified interface over the available speech backends and
//! picks one at startup by probing capabilities.

use crate::config::Config;
use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{info, warn};

pub mod speechd;
pub mod subprocess;

/// Trait for TTS engines
#[async_trait]
pub trait TtsEngine: Send + Sync + std::fmt::Debug {
    /// Speak the given text, blocking until playback is done
    async fn speak(&self, text: &str) -> Result<()>;

    /// Get the engine name
    fn name(&self) -> &str;
}

/// Factory to create the configured TTS engine.
///
/// `"auto"` probes speechd-ng first and falls back to the subprocess chain;
/// naming an engine forces it. Probing happens once, here, rather than on
/// every speak call.
pub async fn create_engine(config: &Config) -> Result<Arc<dyn TtsEngine>> {
    info!("Creating TTS engine: {}", config.tts_engine);
    let engine: Arc<dyn TtsEngine> = match config.tts_engine.as_str() {
        "speechd" | "speechd_ng" => {
            let client = speechd::SpeechdEngine::connect().await?;
            Arc::new(client)
        }
        "subprocess" | "system" => Arc::new(subprocess::SubprocessEngine::new(config)),
        "auto" => match speechd::SpeechdEngine::connect().await {
            Ok(client) => Arc::new(client),
            Err(e) => {
                info!("speechd-ng unavailable ({}), using subprocess TTS", e);
                Arc::new(subprocess::SubprocessEngine::new(config))
            }
        },
        other => {
            warn!("Unknown TTS engine '{}', falling back to subprocess", other);
            Arc::new(subprocess::SubprocessEngine::new(config))
        }
    };
    info!("TTS engine '{}' initialized", engine.name());
    Ok(engine)
}
