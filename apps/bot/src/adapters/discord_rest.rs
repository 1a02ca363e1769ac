//! REST client for the platform's webhook and application endpoints.

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use reqwest::{Client, Response};
use tracing::{debug, info};

use crate::config::DiscordConfig;
use crate::error::AppError;
use crate::protocol::commands::CommandDefinition;
use crate::services::follow_up::{FollowUp, FollowUpError, FollowUpExecutor, MessageTarget};

const USER_AGENT: &str = concat!(
    "DiscordBot (https://github.com/duel-bot/duel-bot, ",
    env!("CARGO_PKG_VERSION"),
    ")"
);

#[derive(Debug, Clone)]
pub struct DiscordClient {
    http: Client,
    api_base: String,
    app_id: String,
}

impl DiscordClient {
    pub fn new(config: &DiscordConfig) -> Result<Self, AppError> {
        let mut headers = HeaderMap::new();
        let mut auth = HeaderValue::from_str(&format!("Bot {}", config.token))
            .map_err(|_| AppError::config("DISCORD_TOKEN contains invalid header characters"))?;
        auth.set_sensitive(true);
        headers.insert(AUTHORIZATION, auth);

        let http = Client::builder()
            .user_agent(USER_AGENT)
            .default_headers(headers)
            .timeout(config.timeout)
            .build()
            .map_err(|e| AppError::config(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            http,
            api_base: config.api_base.trim_end_matches('/').to_string(),
            app_id: config.app_id.clone(),
        })
    }

    fn message_url(&self, target: &MessageTarget) -> String {
        format!(
            "{}/webhooks/{}/{}/messages/{}",
            self.api_base, self.app_id, target.token, target.message_id
        )
    }

    fn commands_url(&self) -> String {
        format!("{}/applications/{}/commands", self.api_base, self.app_id)
    }

    /// Overwrite the global command set with `commands`.
    pub async fn install_global_commands(
        &self,
        commands: &[CommandDefinition],
    ) -> Result<(), AppError> {
        let response = self
            .http
            .put(self.commands_url())
            .json(commands)
            .send()
            .await
            .map_err(|e| AppError::upstream(format!("command install failed: {e}")))?;

        check(response).await.map_err(|err| AppError::upstream(err.to_string()))?;
        info!(count = commands.len(), "Global commands installed");
        Ok(())
    }
}

#[async_trait]
impl FollowUpExecutor for DiscordClient {
    async fn execute(&self, follow_up: &FollowUp) -> Result<(), FollowUpError> {
        let url = self.message_url(follow_up.target());
        let request = match follow_up {
            FollowUp::DeleteMessage(_) => self.http.delete(&url),
            FollowUp::PatchMessage(_, data) => self.http.patch(&url).json(data),
        };
        debug!(kind = follow_up.kind(), "Sending follow-up");

        let response = request
            .send()
            .await
            .map_err(|e| FollowUpError::Transport(e.to_string()))?;
        check(response).await
    }
}

async fn check(response: Response) -> Result<(), FollowUpError> {
    let status = response.status();
    if status.is_success() {
        return Ok(());
    }
    let body = response.text().await.unwrap_or_default();
    Err(FollowUpError::Rejected {
        status: status.as_u16(),
        body,
    })
}
