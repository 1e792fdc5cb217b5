//! AI party member dialogue for a Wizardry style narrative RPG.
//!
//! The crate turns a player utterance into a bounded, role-tagged
//! completion request, submits it to an OpenAI compatible provider,
//! and degrades to a canned in-character line whenever the provider
//! cannot answer. The game's rendering layer is an external
//! collaborator; the `cli` module is a small terminal stand-in for it.

pub mod chat;
pub mod cli;
pub mod core;
pub mod openai;
pub mod party;
