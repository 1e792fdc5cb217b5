use anyhow::Result;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;

use crate::chat::ChatSession;
use crate::core::AppConfig;
use crate::party::Roster;

pub async fn run(character: &str) -> Result<()> {
    let config = AppConfig::default();
    let roster = Roster::new();
    let profile = roster.resolve(character).clone();

    println!("{}: {}", profile.name, profile.greeting);

    let mut session = ChatSession::builder(profile, config.gateway())
        .history_window(config.history_window)
        .build();

    let mut rl = DefaultEditor::new()?;
    loop {
        let readline = rl.readline(">>> ");
        match readline {
            Ok(line) => {
                // The chat panel disables sending empty input; mirror
                // that here rather than reporting an error.
                if line.trim().is_empty() {
                    continue;
                }
                println!("({} is thinking...)", session.profile().name);
                let Ok(reply) = session.send(&line).await else {
                    continue;
                };
                println!("{}: {}", session.profile().name, reply);
            }
            Err(ReadlineError::Interrupted) => break,
            Err(ReadlineError::Eof) => break,
            Err(err) => {
                println!("Error: {:?}", err);
                break;
            }
        }
    }

    Ok(())
}
