use std::sync::Arc;

use cache::CacheStore;
use config::Config;
use database::TaskStore;

pub mod cache;
pub mod config;
pub mod database;
pub mod error;
pub mod middleware;
pub mod router;
pub mod routes;
pub mod utils;

/// 请求共享状态，启动时构建一次
///
/// 数据库和缓存都是可选的：`None` 表示该后端不可用，
/// 每个请求只根据这里的值判断一次。
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub store: Option<Arc<dyn TaskStore>>,
    pub cache: Option<Arc<dyn CacheStore>>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            config: Arc::new(config),
            store: None,
            cache: None,
        }
    }

    pub fn with_store(mut self, store: Arc<dyn TaskStore>) -> Self {
        self.store = Some(store);
        self
    }

    pub fn with_cache(mut self, cache: Arc<dyn CacheStore>) -> Self {
        self.cache = Some(cache);
        self
    }
}
