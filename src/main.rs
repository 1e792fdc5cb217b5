use anyhow::Result;
use partyline::cli;

#[tokio::main]
async fn main() -> Result<()> {
    cli::run().await
}
