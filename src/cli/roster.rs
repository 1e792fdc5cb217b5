use crate::party::Roster;

pub fn run() {
    let roster = Roster::new();
    for profile in roster.iter() {
        println!(
            "{:<8} {:<8} {}",
            profile.name, profile.class_label, profile.personality
        );
    }
}
