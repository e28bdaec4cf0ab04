use async_trait::async_trait;
use redis::{AsyncCommands, Client as RedisClient, aio::ConnectionManager};

/// 键值缓存后端
#[async_trait]
pub trait CacheStore: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<String>, redis::RedisError>;

    /// 写入并设置过期时间（秒）
    async fn set_ex(&self, key: &str, value: String, ttl_secs: u64)
    -> Result<(), redis::RedisError>;

    async fn del(&self, key: &str) -> Result<(), redis::RedisError>;
}

/// Redis 缓存后端
///
/// 启动时建立一次连接，之后每个请求克隆同一个连接句柄，断线由
/// `ConnectionManager` 自动重连。
#[derive(Clone)]
pub struct RedisCache {
    conn: ConnectionManager,
}

impl RedisCache {
    pub async fn connect(redis_url: &str) -> Result<Self, redis::RedisError> {
        let client = RedisClient::open(redis_url)?;
        let conn = ConnectionManager::new(client).await?;
        Ok(Self { conn })
    }
}

#[async_trait]
impl CacheStore for RedisCache {
    async fn get(&self, key: &str) -> Result<Option<String>, redis::RedisError> {
        let mut conn = self.conn.clone();
        let value: Option<String> = conn.get(key).await?;
        Ok(value)
    }

    async fn set_ex(
        &self,
        key: &str,
        value: String,
        ttl_secs: u64,
    ) -> Result<(), redis::RedisError> {
        let mut conn = self.conn.clone();
        let _: () = conn.set_ex(key, value, ttl_secs).await?;
        Ok(())
    }

    async fn del(&self, key: &str) -> Result<(), redis::RedisError> {
        let mut conn = self.conn.clone();
        let _: () = conn.del(key).await?;
        Ok(())
    }
}
