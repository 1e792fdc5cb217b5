//! The dialogue turn state machine for one chat session.

use thiserror::Error;
use uuid::Uuid;

use crate::openai::CompletionGateway;
use crate::party::CharacterProfile;

use super::context;
use super::fallback::FallbackResponder;
use super::models::{ConversationTurn, Transcript};

pub const DEFAULT_HISTORY_WINDOW: usize = 40;

/// Turn serialization state. `AwaitingCompletion` spans exactly the
/// provider round trip; a UI thinking indicator mirrors it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionState {
    Idle,
    AwaitingCompletion,
}

/// Input contract violations. Provider failures never appear here:
/// those are absorbed inside [`ChatSession::send`] and degrade to a
/// fallback line.
#[derive(Debug, PartialEq, Eq, Error)]
pub enum TurnError {
    #[error("utterance is empty after trimming")]
    EmptyUtterance,
    #[error("a turn is already awaiting completion")]
    TurnInProgress,
}

/// A chat with one party member.
///
/// Owns the transcript and the `Idle`/`AwaitingCompletion` flag; turns
/// are strictly serialized. Use `ChatSession::builder()` to construct
/// one.
pub struct ChatSession {
    id: Uuid,
    profile: CharacterProfile,
    gateway: CompletionGateway,
    fallback: FallbackResponder,
    transcript: Transcript,
    state: SessionState,
    history_window: usize,
}

impl ChatSession {
    pub fn builder(profile: CharacterProfile, gateway: CompletionGateway) -> ChatSessionBuilder {
        ChatSessionBuilder {
            profile,
            gateway,
            transcript: Transcript::new(),
            history_window: DEFAULT_HISTORY_WINDOW,
        }
    }

    pub fn profile(&self) -> &CharacterProfile {
        &self.profile
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn is_busy(&self) -> bool {
        self.state == SessionState::AwaitingCompletion
    }

    /// Runs one dialogue round: records the player turn, requests a
    /// completion, and records the character's reply.
    ///
    /// The reply text is always produced. Any gateway failure is
    /// logged and replaced with a canned line in the character's
    /// voice; the only errors a caller sees are its own input
    /// contract violations, which leave the transcript untouched.
    pub async fn send(&mut self, utterance: &str) -> Result<String, TurnError> {
        if self.state == SessionState::AwaitingCompletion {
            return Err(TurnError::TurnInProgress);
        }
        let utterance = utterance.trim();
        if utterance.is_empty() {
            return Err(TurnError::EmptyUtterance);
        }

        // The request context is the history before this round plus
        // the new utterance as the final user entry.
        let request =
            context::build_request(&self.profile, &self.transcript, utterance, self.history_window);

        self.transcript.push(ConversationTurn::player(utterance));
        self.state = SessionState::AwaitingCompletion;

        let reply = match self.gateway.complete(&request).await {
            Ok(text) => text,
            Err(failure) => {
                tracing::warn!(
                    session = %self.id,
                    character = %self.profile.name,
                    %failure,
                    "completion failed, substituting a fallback line"
                );
                self.fallback.respond(self.profile.id)
            }
        };

        self.transcript.push(ConversationTurn::character(&reply));
        self.state = SessionState::Idle;

        Ok(reply)
    }
}

pub struct ChatSessionBuilder {
    profile: CharacterProfile,
    gateway: CompletionGateway,
    transcript: Transcript,
    history_window: usize,
}

impl ChatSessionBuilder {
    pub fn transcript(mut self, turns: Vec<ConversationTurn>) -> Self {
        self.transcript = Transcript::new_with_turns(turns);
        self
    }

    pub fn history_window(mut self, window: usize) -> Self {
        self.history_window = window;
        self
    }

    pub fn build(self) -> ChatSession {
        ChatSession {
            id: Uuid::new_v4(),
            profile: self.profile,
            gateway: self.gateway,
            fallback: FallbackResponder::new(),
            transcript: self.transcript,
            state: SessionState::Idle,
            history_window: self.history_window,
        }
    }
}
