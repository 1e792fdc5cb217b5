//! The core models for one stateful chat with an AI voiced party member.
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Speaker {
    #[serde(rename = "player")]
    Player,
    #[serde(rename = "character")]
    Character,
}

/// One utterance within a chat session.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ConversationTurn {
    pub speaker: Speaker,
    pub text: String,
    pub timestamp: DateTime<Utc>,
}

impl ConversationTurn {
    pub fn player(text: &str) -> Self {
        Self {
            speaker: Speaker::Player,
            text: text.to_string(),
            timestamp: Utc::now(),
        }
    }

    pub fn character(text: &str) -> Self {
        Self {
            speaker: Speaker::Character,
            text: text.to_string(),
            timestamp: Utc::now(),
        }
    }
}

/// Append-only turn sequence owned by a single session. Never
/// persisted; it is discarded with the session.
#[derive(Default, Clone, Debug)]
pub struct Transcript(Vec<ConversationTurn>);

impl Transcript {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn new_with_turns(turns: Vec<ConversationTurn>) -> Self {
        Self(turns)
    }

    pub fn push(&mut self, turn: ConversationTurn) {
        self.0.push(turn)
    }

    pub fn turns(&self) -> &[ConversationTurn] {
        &self.0
    }

    /// The most recent `window` turns in chronological order.
    pub fn recent(&self, window: usize) -> &[ConversationTurn] {
        let start = self.0.len().saturating_sub(window);
        &self.0[start..]
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ConversationTurn> {
        self.0.iter()
    }
}
