//! The party roster: the AI voiced companions a player can talk to.
//!
//! Character preambles are rendered from Handlebars templates.
//! Handlebars adds additional security controls since it can't do much
//! out of the box without registering your own helpers, which is ideal
//! because transcript text ends up adjacent to these prompts.

use std::fmt;

use handlebars::Handlebars;
use serde_json::json;

/// Known party member identities.
///
/// Free-form names go through [`CharacterId::resolve`], which can
/// never produce an unknown identity, so every table keyed by this
/// enum is total.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum CharacterId {
    /// Also the resolution target for unrecognized names.
    #[default]
    Aria,
    Gareth,
    Luna,
}

impl CharacterId {
    pub const ALL: [CharacterId; 3] = [CharacterId::Aria, CharacterId::Gareth, CharacterId::Luna];

    /// Maps a player-facing name to an identity, case-insensitively.
    /// Unrecognized names resolve to the default identity rather than
    /// failing.
    pub fn resolve(name: &str) -> Self {
        match name.trim().to_lowercase().as_str() {
            "aria" => CharacterId::Aria,
            "gareth" => CharacterId::Gareth,
            "luna" => CharacterId::Luna,
            other => {
                tracing::debug!("unknown character name {other:?}, using default identity");
                CharacterId::default()
            }
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            CharacterId::Aria => "Aria",
            CharacterId::Gareth => "Gareth",
            CharacterId::Luna => "Luna",
        }
    }
}

/// Static configuration for one party member. Built once by
/// [`Roster::new`] and never mutated afterwards.
#[derive(Clone, Debug)]
pub struct CharacterProfile {
    pub id: CharacterId,
    pub name: String,
    pub class_label: String,
    pub personality: String,
    /// The system prompt prepended to every completion request.
    pub preamble: String,
    /// Display-only opening line. Never recorded in a transcript.
    pub greeting: String,
}

struct CharacterSeed {
    id: CharacterId,
    class_label: &'static str,
    personality: &'static str,
    traits: &'static [&'static str],
}

const SEEDS: [CharacterSeed; 3] = [
    CharacterSeed {
        id: CharacterId::Aria,
        class_label: "mage",
        personality: "calm and scholarly, deeply versed in magic",
        traits: &[
            "Calm and intellectual, with deep knowledge of magic",
            "A researcher of ancient spellcraft",
            "Excels at strategic thinking",
            "Speaks politely and addresses the player with courtesy",
            "Favors topics of magic and scholarship",
        ],
    },
    CharacterSeed {
        id: CharacterId::Gareth,
        class_label: "fighter",
        personality: "brave and loyal, with a strong sense of justice",
        traits: &[
            "Brave and devoted to his companions, with a strong sense of justice",
            "A former knight of the royal order",
            "Values protecting his comrades above all else",
            "Hot-blooded and straightforward",
            "Often speaks of justice and loyalty",
            "Treats the player as a trusted comrade in arms",
        ],
    },
    CharacterSeed {
        id: CharacterId::Luna,
        class_label: "priest",
        personality: "gentle and devoted, a lover of peace",
        traits: &[
            "Gentle and devoted, a lover of peace",
            "A priestess serving the goddess of healing",
            "Dislikes conflict and tends to the party's wounds",
            "Calm and compassionate in speech",
            "Sometimes uses prayers and religious turns of phrase",
            "Minds everyone's health and safety",
        ],
    },
];

#[derive(Debug)]
enum Prompt {
    DialoguePreamble,
    Greeting,
}

impl fmt::Display for Prompt {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

const DIALOGUE_PREAMBLE: &str = r#"You are "{{name}}", a {{class}} in a classic dungeon-crawling adventuring party. You have the following traits:
{{#each traits}}
- {{this}}
{{/each}}

Stay in character and answer the way {{name}} would, grounded in an old-school Wizardry style fantasy world. Keep replies short enough for a chat window.
"#;

const GREETING: &str = "Hello! I am {{name}}. Is there something you would like to talk about?";

fn templates<'a>() -> Handlebars<'a> {
    let mut registry = Handlebars::new();
    registry.set_strict_mode(true);
    registry
        .register_template_string(&Prompt::DialoguePreamble.to_string(), DIALOGUE_PREAMBLE)
        .expect("Failed to register template");
    registry
        .register_template_string(&Prompt::Greeting.to_string(), GREETING)
        .expect("Failed to register template");
    registry
}

/// The fixed set of character profiles, preambles rendered up front.
pub struct Roster {
    profiles: Vec<CharacterProfile>,
}

impl Roster {
    pub fn new() -> Self {
        let registry = templates();
        let profiles = SEEDS
            .iter()
            .map(|seed| {
                let data = json!({
                    "name": seed.id.name(),
                    "class": seed.class_label,
                    "traits": seed.traits,
                });
                let preamble = registry
                    .render(&Prompt::DialoguePreamble.to_string(), &data)
                    .expect("Failed to render preamble template");
                let greeting = registry
                    .render(&Prompt::Greeting.to_string(), &data)
                    .expect("Failed to render greeting template");
                CharacterProfile {
                    id: seed.id,
                    name: seed.id.name().to_string(),
                    class_label: seed.class_label.to_string(),
                    personality: seed.personality.to_string(),
                    preamble,
                    greeting,
                }
            })
            .collect();

        Self { profiles }
    }

    pub fn profile(&self, id: CharacterId) -> &CharacterProfile {
        self.profiles
            .iter()
            .find(|profile| profile.id == id)
            .unwrap_or(&self.profiles[0])
    }

    /// Looks up a profile by player-facing name, substituting the
    /// default identity for unrecognized names.
    pub fn resolve(&self, name: &str) -> &CharacterProfile {
        self.profile(CharacterId::resolve(name))
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CharacterProfile> {
        self.profiles.iter()
    }
}

impl Default for Roster {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_known_names_case_insensitive() {
        assert_eq!(CharacterId::resolve("Aria"), CharacterId::Aria);
        assert_eq!(CharacterId::resolve("gareth"), CharacterId::Gareth);
        assert_eq!(CharacterId::resolve("  LUNA "), CharacterId::Luna);
    }

    #[test]
    fn test_resolve_unknown_name_uses_default() {
        assert_eq!(CharacterId::resolve("Mordred"), CharacterId::default());
        assert_eq!(CharacterId::resolve(""), CharacterId::Aria);
    }

    #[test]
    fn test_roster_has_all_identities() {
        let roster = Roster::new();
        for id in CharacterId::ALL {
            let profile = roster.profile(id);
            assert_eq!(profile.id, id);
            assert!(!profile.preamble.is_empty());
        }
    }

    #[test]
    fn test_preamble_mentions_name_and_class() {
        let roster = Roster::new();
        let profile = roster.profile(CharacterId::Gareth);
        assert!(profile.preamble.contains("Gareth"));
        assert!(profile.preamble.contains("fighter"));
        assert!(profile.preamble.contains("former knight"));
    }

    #[test]
    fn test_greeting_mentions_name() {
        let roster = Roster::new();
        assert!(
            roster
                .profile(CharacterId::Luna)
                .greeting
                .contains("I am Luna")
        );
    }

    #[test]
    fn test_resolve_profile_for_unknown_name() {
        let roster = Roster::new();
        let profile = roster.resolve("no-such-adventurer");
        assert_eq!(profile.id, CharacterId::Aria);
    }
}
