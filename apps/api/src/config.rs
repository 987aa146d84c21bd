use std::time::Duration;

use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Every variable has a default; a value that does not parse fails startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Length of the simulated generation / analysis step.
    pub generation_delay: Duration,
    /// Idle time after which a session workspace is dropped.
    pub session_ttl: Duration,
}

const DEFAULT_GENERATION_DELAY_MS: u64 = 2000;
pub const DEFAULT_SESSION_TTL_SECS: u64 = 3600;

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            generation_delay: Duration::from_millis(parse_u64(
                "GENERATION_DELAY_MS",
                std::env::var("GENERATION_DELAY_MS").ok().as_deref(),
                DEFAULT_GENERATION_DELAY_MS,
            )?),
            session_ttl: Duration::from_secs(parse_session_ttl(
                std::env::var("SESSION_TTL_SECS").ok().as_deref(),
            )?),
        })
    }
}

fn parse_u64(name: &str, raw: Option<&str>, default: u64) -> Result<u64> {
    match raw {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse::<u64>()
            .with_context(|| format!("{name} must be a non-negative integer, got '{value}'")),
    }
}

fn parse_session_ttl(raw: Option<&str>) -> Result<u64> {
    let secs = parse_u64("SESSION_TTL_SECS", raw, DEFAULT_SESSION_TTL_SECS)?;
    if secs == 0 {
        anyhow::bail!("SESSION_TTL_SECS must be greater than zero");
    }
    Ok(secs)
}
