//! Installs the global slash command catalogue, replacing whatever is there.

use duel_bot::protocol::commands::catalogue;
use duel_bot::telemetry;
use duel_bot::{Config, DiscordClient};
use tracing::error;

#[tokio::main]
async fn main() {
    telemetry::init_tracing();

    let result = async {
        let config = Config::from_env()?;
        let client = DiscordClient::new(&config.discord)?;
        client.install_global_commands(&catalogue()).await
    }
    .await;

    if let Err(e) = result {
        error!(error = %e, "Command install failed");
        std::process::exit(1);
    }
}
