use std::time::Duration;

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use thiserror::Error;

#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub enum Role {
    #[serde(rename = "system")]
    System,
    #[serde(rename = "assistant")]
    Assistant,
    #[serde(rename = "user")]
    User,
}

#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

impl Message {
    pub fn new(role: Role, content: &str) -> Self {
        Message {
            role,
            content: content.to_string(),
        }
    }
}

/// Sampling knobs forwarded verbatim in the request body. These are
/// configuration, not protocol, and can be tuned freely.
#[derive(Clone, Copy, Debug)]
pub struct SamplingParams {
    pub max_tokens: u32,
    pub temperature: f32,
    pub presence_penalty: f32,
    pub frequency_penalty: f32,
}

impl Default for SamplingParams {
    fn default() -> Self {
        Self {
            max_tokens: 150,
            temperature: 0.8,
            presence_penalty: 0.1,
            frequency_penalty: 0.1,
        }
    }
}

/// Why a completion attempt produced no text. Callers substitute a
/// fallback line instead of surfacing these to the player.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum CompletionFailure {
    #[error("no API credential configured")]
    NoCredential,
    #[error("completion endpoint returned status {0}")]
    NonSuccessStatus(u16),
    #[error("transport error: {0}")]
    Transport(String),
    #[error("response body missing completion text")]
    MalformedPayload,
}

/// Client for an OpenAI compatible chat completion API.
///
/// One request per `complete` call, no retries. The credential is
/// injected at construction so nothing reads the process environment
/// at request time; a missing credential is a classified failure, not
/// a panic or a startup error.
pub struct CompletionGateway {
    http: reqwest::Client,
    api_hostname: String,
    api_key: Option<String>,
    model: String,
    sampling: SamplingParams,
    timeout: Duration,
}

impl CompletionGateway {
    pub fn new(api_hostname: &str, api_key: Option<String>, model: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_hostname: api_hostname.to_string(),
            api_key,
            model: model.to_string(),
            sampling: SamplingParams::default(),
            timeout: Duration::from_secs(30),
        }
    }

    pub fn sampling(mut self, sampling: SamplingParams) -> Self {
        self.sampling = sampling;
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Requests the next completion for `messages` and returns the
    /// trimmed completion text. Every failure path comes back as a
    /// `CompletionFailure`; the credential check happens before any
    /// network attempt.
    pub async fn complete(&self, messages: &[Message]) -> Result<String, CompletionFailure> {
        let Some(api_key) = &self.api_key else {
            return Err(CompletionFailure::NoCredential);
        };

        let payload = json!({
            "model": self.model,
            "messages": messages,
            "max_tokens": self.sampling.max_tokens,
            "temperature": self.sampling.temperature,
            "presence_penalty": self.sampling.presence_penalty,
            "frequency_penalty": self.sampling.frequency_penalty,
        });
        let url = format!(
            "{}/v1/chat/completions",
            self.api_hostname.trim_end_matches("/")
        );
        let response = self
            .http
            .post(url)
            .bearer_auth(api_key)
            .header("Content-Type", "application/json")
            .timeout(self.timeout)
            .json(&payload)
            .send()
            .await
            .map_err(|err| CompletionFailure::Transport(err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(CompletionFailure::NonSuccessStatus(status.as_u16()));
        }

        let body: Value = response
            .json()
            .await
            .map_err(|_| CompletionFailure::MalformedPayload)?;

        body["choices"][0]["message"]["content"]
            .as_str()
            .map(|text| text.trim().to_string())
            .ok_or(CompletionFailure::MalformedPayload)
    }
}
