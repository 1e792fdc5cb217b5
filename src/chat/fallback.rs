//! Canned offline responses, used whenever the completion provider
//! cannot produce a real reply. The player always hears something in
//! the character's voice.

use rand::Rng;

use crate::party::CharacterId;

const ARIA_LINES: &[&str] = &[
    "An intriguing question. Shall I explain the theory behind it?",
    "According to this ancient tome...",
    "Let us consider this calmly.",
    "In magical theory, such a phenomenon would be...",
    "Quite so. Viewed as a matter of scholarship...",
    "My research led me to exactly this conclusion.",
];

const GARETH_LINES: &[&str] = &[
    "Exactly! Protecting our companions comes first.",
    "As a knight, I will see justice done!",
    "Let's give it our all, together!",
    "If there is danger ahead, I will take the front.",
    "I fight for what is right!",
    "I believe in this party!",
];

const LUNA_LINES: &[&str] = &[
    "I am glad everyone is safe.",
    "May the goddess watch over us...",
    "I have no love for conflict, but I will lend my strength if needed.",
    "My healing arts are yours whenever you need them.",
    "Peace is what I wish for most.",
    "Goddess, please keep us from harm...",
];

/// Picks a canned line for a character. Total by construction: every
/// [`CharacterId`] maps to a non-empty list, so a response is always
/// produced.
#[derive(Default)]
pub struct FallbackResponder;

impl FallbackResponder {
    pub fn new() -> Self {
        Self
    }

    pub fn lines(id: CharacterId) -> &'static [&'static str] {
        match id {
            CharacterId::Aria => ARIA_LINES,
            CharacterId::Gareth => GARETH_LINES,
            CharacterId::Luna => LUNA_LINES,
        }
    }

    /// Uniformly random pick from the identity's fixed list.
    pub fn respond(&self, id: CharacterId) -> String {
        self.respond_with(&mut rand::thread_rng(), id)
    }

    /// Same as [`respond`](Self::respond) with an explicit RNG, for
    /// deterministic selection in tests.
    pub fn respond_with<R: Rng + ?Sized>(&self, rng: &mut R, id: CharacterId) -> String {
        let lines = Self::lines(id);
        lines[rng.gen_range(0..lines.len())].to_string()
    }
}
