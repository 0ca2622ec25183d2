use anyhow::{anyhow, Context, Result};
use chrono::Utc;
use rspotify::{ClientCredsSpotify, Config as SpotifyConfig, Credentials, Token};
use std::sync::Arc;
use tracing::{info, warn};

use crate::cache::Cache;
use crate::config::Config;

pub mod search;

const TOKEN_CACHE_KEY: &str = "melobot:spotify_token";

/// Client-credentials Spotify client. Catalog search needs no user login,
/// so there is no redirect flow; a cached token is reused while it is valid.
pub async fn build_spotify_client(config: &Config, cache: &Cache) -> Result<Arc<ClientCredsSpotify>> {
    let creds = Credentials::new(&config.client_id, &config.client_secret);
    let sp_config = SpotifyConfig {
        token_refreshing: true,
        ..Default::default()
    };
    let spotify = ClientCredsSpotify::with_config(creds, sp_config);

    if let Some(token) = cached_token(cache).await {
        info!("Loaded cached token from Redis");
        *spotify
            .token
            .lock()
            .await
            .map_err(|_| anyhow!("Spotify token lock poisoned"))? = Some(token);
        return Ok(Arc::new(spotify));
    }

    spotify
        .request_token()
        .await
        .context("Spotify rejected the client credentials")?;
    info!("Obtained Spotify access token");

    let token = spotify
        .token
        .lock()
        .await
        .map_err(|_| anyhow!("Spotify token lock poisoned"))?
        .clone();
    if let Some(token) = token {
        store_token(cache, &token).await;
    }

    Ok(Arc::new(spotify))
}

async fn cached_token(cache: &Cache) -> Option<Token> {
    let json = cache.get(TOKEN_CACHE_KEY).await?;
    match serde_json::from_str::<Token>(&json) {
        Ok(token) if !token.is_expired() => Some(token),
        Ok(_) => {
            cache.delete(TOKEN_CACHE_KEY).await;
            None
        }
        Err(e) => {
            warn!("Discarding unreadable cached token: {e}");
            cache.delete(TOKEN_CACHE_KEY).await;
            None
        }
    }
}

async fn store_token(cache: &Cache, token: &Token) {
    if !cache.is_enabled() {
        return;
    }
    let Some(ttl) = token_ttl_secs(token) else {
        return;
    };
    match serde_json::to_string(token) {
        Ok(json) => {
            cache.set(TOKEN_CACHE_KEY, &json, Some(ttl)).await;
            info!("Token saved to Redis cache for {ttl}s");
        }
        Err(e) => warn!("Could not serialize Spotify token: {e}"),
    }
}

/// Seconds until the token expires, if that is still in the future.
fn token_ttl_secs(token: &Token) -> Option<u64> {
    let expires_at = token.expires_at?;
    let remaining = (expires_at - Utc::now()).num_seconds();
    u64::try_from(remaining).ok().filter(|secs| *secs > 0)
}
