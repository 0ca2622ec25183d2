use anyhow::{Context, Result};
use dotenvy::dotenv;
use std::time::Duration;

const DEFAULT_TIMEOUT_SECS: u64 = 20;
const DEFAULT_RESULT_LIMIT: u32 = 10;
const MAX_RESULT_LIMIT: u32 = 50; // Spotify search page size cap

#[derive(Debug, Clone)]
pub struct Config {
    pub client_id: String,
    pub client_secret: String,
    pub redis_url: String,
    pub search_timeout: Duration,
    pub result_limit: u32,
}

impl Config {
    pub fn load() -> Result<Self> {
        dotenv().ok(); // Try loading .env file, ignore if it doesn't exist (e.g. env vars set manually)
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key/value source; `load` passes the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        // Spotipy-style names are accepted for existing setups.
        let client_id = lookup("SPOTIFY_CLIENT_ID")
            .or_else(|| lookup("SPOTIPY_CLIENT_ID"))
            .context("SPOTIFY_CLIENT_ID is missing from .env or environment!")?;
        let client_secret = lookup("SPOTIFY_CLIENT_SECRET")
            .or_else(|| lookup("SPOTIPY_CLIENT_SECRET"))
            .context("SPOTIFY_CLIENT_SECRET is missing from .env or environment!")?;

        let timeout_secs = match lookup("MELOBOT_TIMEOUT_SECS") {
            Some(raw) => raw
                .trim()
                .parse::<u64>()
                .with_context(|| format!("MELOBOT_TIMEOUT_SECS must be a whole number of seconds, got {raw:?}"))?,
            None => DEFAULT_TIMEOUT_SECS,
        };
        let result_limit = match lookup("MELOBOT_RESULT_LIMIT") {
            Some(raw) => raw
                .trim()
                .parse::<u32>()
                .with_context(|| format!("MELOBOT_RESULT_LIMIT must be a positive number, got {raw:?}"))?,
            None => DEFAULT_RESULT_LIMIT,
        };

        Ok(Config {
            client_id,
            client_secret,
            redis_url: lookup("REDIS_URL").unwrap_or_else(|| "redis://127.0.0.1:6379".to_string()),
            search_timeout: Duration::from_secs(timeout_secs.max(1)),
            result_limit: result_limit.clamp(1, MAX_RESULT_LIMIT),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Result<Config> {
        let env: HashMap<String, String> =
            pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        Config::from_lookup(|key| env.get(key).cloned())
    }

    #[test]
    fn defaults_apply() {
        let config = config_from(&[("SPOTIFY_CLIENT_ID", "id"), ("SPOTIFY_CLIENT_SECRET", "secret")]).unwrap();
        assert_eq!(config.client_id, "id");
        assert_eq!(config.search_timeout, Duration::from_secs(20));
        assert_eq!(config.result_limit, 10);
        assert_eq!(config.redis_url, "redis://127.0.0.1:6379");
    }

    #[test]
    fn spotipy_names_are_accepted() {
        let config = config_from(&[("SPOTIPY_CLIENT_ID", "a"), ("SPOTIPY_CLIENT_SECRET", "b")]).unwrap();
        assert_eq!(config.client_id, "a");
        assert_eq!(config.client_secret, "b");
    }

    #[test]
    fn missing_credentials_is_an_error() {
        let err = config_from(&[("SPOTIFY_CLIENT_ID", "id")]).unwrap_err();
        assert!(err.to_string().contains("SPOTIFY_CLIENT_SECRET"));
    }

    #[test]
    fn limit_is_clamped_and_timeout_parsed() {
        let config = config_from(&[
            ("SPOTIFY_CLIENT_ID", "id"),
            ("SPOTIFY_CLIENT_SECRET", "secret"),
            ("MELOBOT_RESULT_LIMIT", "500"),
            ("MELOBOT_TIMEOUT_SECS", " 5 "),
        ])
        .unwrap();
        assert_eq!(config.result_limit, 50);
        assert_eq!(config.search_timeout, Duration::from_secs(5));
    }

    #[test]
    fn bad_timeout_is_rejected() {
        let result = config_from(&[
            ("SPOTIFY_CLIENT_ID", "id"),
            ("SPOTIFY_CLIENT_SECRET", "secret"),
            ("MELOBOT_TIMEOUT_SECS", "soon"),
        ]);
        assert!(result.is_err());
    }
}
