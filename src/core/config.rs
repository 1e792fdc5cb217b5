use std::env;
use std::time::Duration;

use crate::chat::session::DEFAULT_HISTORY_WINDOW;
use crate::openai::{CompletionGateway, SamplingParams};

/// Application configuration, read from the environment once at
/// startup. Components receive values from here; nothing else reads
/// the process environment.
#[derive(Clone, Debug)]
pub struct AppConfig {
    pub api_hostname: String,
    /// Absent credential is a handled condition: sessions degrade to
    /// canned lines instead of refusing to start.
    pub api_key: Option<String>,
    pub model: String,
    pub sampling: SamplingParams,
    pub history_window: usize,
    pub request_timeout: Duration,
}

impl Default for AppConfig {
    fn default() -> Self {
        let api_hostname = env::var("PARTYLINE_LLM_HOST")
            .unwrap_or_else(|_| "https://api.openai.com".to_string());
        let api_key = env::var("OPENAI_API_KEY").ok();
        let model = env::var("PARTYLINE_LLM_MODEL").unwrap_or_else(|_| "gpt-4".to_string());

        Self {
            api_hostname,
            api_key,
            model,
            sampling: SamplingParams::default(),
            history_window: DEFAULT_HISTORY_WINDOW,
            request_timeout: Duration::from_secs(30),
        }
    }
}

impl AppConfig {
    /// Builds the completion gateway this configuration describes.
    pub fn gateway(&self) -> CompletionGateway {
        CompletionGateway::new(&self.api_hostname, self.api_key.clone(), &self.model)
            .sampling(self.sampling)
            .timeout(self.request_timeout)
    }
}
