//! Optional Redis store for the Spotify access token.
//!
//! Every operation is best-effort: when Redis is absent the cache behaves
//! like an always-empty store and the app requests a fresh token instead.

use redis::AsyncCommands;
use tracing::{debug, warn};

pub struct Cache {
    client: Option<redis::Client>,
}

impl Cache {
    /// Opens a client for `redis_url`, falling back to a disabled cache.
    pub async fn connect(redis_url: &str) -> Self {
        let client = match redis::Client::open(redis_url) {
            Ok(client) => client,
            Err(e) => {
                warn!("Invalid REDIS_URL ({e}), running without token cache");
                return Cache::disabled();
            }
        };
        let cache = Cache { client: Some(client) };
        if cache.ping().await {
            tracing::info!("Redis connected at {redis_url}");
            cache
        } else {
            warn!("Redis not reachable, token caching disabled");
            Cache::disabled()
        }
    }

    pub fn disabled() -> Self {
        Cache { client: None }
    }

    pub fn is_enabled(&self) -> bool {
        self.client.is_some()
    }

    async fn connection(&self) -> Option<redis::aio::MultiplexedConnection> {
        let client = self.client.as_ref()?;
        match client.get_multiplexed_async_connection().await {
            Ok(conn) => Some(conn),
            Err(e) => {
                debug!("Redis connection failed: {e}");
                None
            }
        }
    }

    pub async fn get(&self, key: &str) -> Option<String> {
        let mut conn = self.connection().await?;
        conn.get::<_, Option<String>>(key).await.unwrap_or(None)
    }

    pub async fn set(&self, key: &str, value: &str, ttl_secs: Option<u64>) {
        if let Some(mut conn) = self.connection().await {
            let result: redis::RedisResult<()> = match ttl_secs {
                Some(ttl) => conn.set_ex(key, value, ttl).await,
                None => conn.set(key, value).await,
            };
            if let Err(e) = result {
                warn!("Failed to write {key} to Redis: {e}");
            }
        }
    }

    pub async fn delete(&self, key: &str) {
        if let Some(mut conn) = self.connection().await {
            let result: redis::RedisResult<()> = conn.del(key).await;
            if let Err(e) = result {
                warn!("Failed to delete {key} from Redis: {e}");
            }
        }
    }

    async fn ping(&self) -> bool {
        match self.connection().await {
            Some(mut conn) => {
                let result: redis::RedisResult<String> = redis::cmd("PING").query_async(&mut conn).await;
                result.is_ok()
            }
            None => false,
        }
    }
}
