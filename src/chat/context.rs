//! Assembles the provider-facing request for one dialogue turn.

use crate::openai::{Message, Role};
use crate::party::CharacterProfile;

use super::models::{Speaker, Transcript};

/// Builds the role-tagged message sequence for a completion request:
/// the character's preamble first, then the most recent `window` prior
/// turns in chronological order, then `utterance` as the final user
/// entry.
///
/// The window bound exists because providers impose hard context
/// limits; the full transcript is never forwarded wholesale.
pub fn build_request(
    profile: &CharacterProfile,
    transcript: &Transcript,
    utterance: &str,
    window: usize,
) -> Vec<Message> {
    let recent = transcript.recent(window);
    let mut messages = Vec::with_capacity(recent.len() + 2);

    messages.push(Message::new(Role::System, &profile.preamble));
    for turn in recent {
        let role = match turn.speaker {
            Speaker::Player => Role::User,
            Speaker::Character => Role::Assistant,
        };
        messages.push(Message::new(role, &turn.text));
    }
    messages.push(Message::new(Role::User, utterance));

    messages
}
