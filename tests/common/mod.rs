//! Shared test helpers

pub mod mock_tts;

pub use mock_tts::MockTts;

use spellbound::config::Config;
use spellbound::dictionary::{ContentResolver, DictionaryClient};

/// Resolver pointed at an unreachable endpoint: every lookup fails fast and
/// the fallback chain takes over. No test here touches the real API.
pub fn offline_resolver() -> ContentResolver {
    let mut config = Config::default();
    config.api_base_url = "http://127.0.0.1:9".to_string();
    config.request_timeout_secs = 1;
    ContentResolver::new(DictionaryClient::new(&config))
}
