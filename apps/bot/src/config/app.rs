//! Application configuration loaded from environment variables.

use std::env;
use std::str::FromStr;
use std::time::Duration;

use crate::error::AppError;

pub const DEFAULT_API_BASE: &str = "https://discord.com/api/v10";

/// Credentials and endpoint for outbound platform calls.
#[derive(Clone)]
pub struct DiscordConfig {
    pub app_id: String,
    pub token: String,
    pub api_base: String,
    pub timeout: Duration,
}

// The bot token stays out of logs.
impl std::fmt::Debug for DiscordConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DiscordConfig")
            .field("app_id", &self.app_id)
            .field("token", &"<redacted>")
            .field("api_base", &self.api_base)
            .field("timeout", &self.timeout)
            .finish()
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    // Server
    pub host: String,
    pub port: u16,

    // Platform
    pub discord: DiscordConfig,
    pub public_key: String,

    // Sessions
    pub session_ttl: Duration,
    pub reap_interval: Duration,
}

impl Config {
    /// Load and validate configuration from the process environment.
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Same as [`Config::from_env`] over an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup("BOT_HOST").unwrap_or_else(|| "0.0.0.0".to_string());
        let port = parsed(&lookup, "PORT", 3000u16)?;

        let app_id = required(&lookup, "APP_ID")?;
        let token = required(&lookup, "DISCORD_TOKEN")?;
        let public_key = required(&lookup, "PUBLIC_KEY")?;
        let api_base = lookup("DISCORD_API_BASE")
            .map(|base| base.trim_end_matches('/').to_string())
            .unwrap_or_else(|| DEFAULT_API_BASE.to_string());
        let timeout = Duration::from_secs(parsed(&lookup, "FOLLOW_UP_TIMEOUT_SECS", 10u64)?);

        let session_ttl = Duration::from_secs(parsed(&lookup, "SESSION_TTL_SECS", 900u64)?);
        let reap_interval =
            Duration::from_secs(parsed(&lookup, "SESSION_REAP_INTERVAL_SECS", 60u64)?);
        if session_ttl.is_zero() || reap_interval.is_zero() {
            return Err(AppError::config(
                "SESSION_TTL_SECS and SESSION_REAP_INTERVAL_SECS must be positive",
            ));
        }

        Ok(Config {
            host,
            port,
            discord: DiscordConfig {
                app_id,
                token,
                api_base,
                timeout,
            },
            public_key,
            session_ttl,
            reap_interval,
        })
    }
}

fn required<F>(lookup: &F, name: &str) -> Result<String, AppError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(name) {
        Some(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(AppError::config(format!("{name} must be set"))),
    }
}

fn parsed<F, T>(lookup: &F, name: &str, default: T) -> Result<T, AppError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(name) {
        None => Ok(default),
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| AppError::config(format!("{name} must be a number, got '{raw}'"))),
    }
}
