use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

pub mod chat;
pub mod roster;

#[derive(Subcommand)]
enum Command {
    /// Start a chat session with a party member
    Chat {
        /// Party member to talk to (unknown names fall back to Aria)
        #[arg(long, default_value = "Aria")]
        character: String,
    },
    /// List the party members available to chat with
    Roster {},
}

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

pub async fn run() -> Result<()> {
    let args = Cli::parse();

    // Diagnostics only; nothing here is part of the player-facing
    // surface.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("{}=warn", env!("CARGO_CRATE_NAME")).into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    match args.command {
        Some(Command::Chat { character }) => {
            chat::run(&character).await?;
        }
        Some(Command::Roster {}) => {
            roster::run();
        }
        None => {}
    }

    Ok(())
}
