use std::error::Error;
use std::sync::Arc;

use taskboard::{
    AppState, cache::RedisCache, config::Config, database::PgTaskStore, router::api_router,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // 初始化日志
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // 加载配置
    let config = Config::from_env()?;
    let mut state = AppState::new(config.clone());

    // 连接数据库；失败时照常启动，任务接口返回 503
    match config.database_options() {
        Some(options) => match PgTaskStore::connect(options).await {
            Ok(store) => {
                tracing::info!("Connected to Postgres");
                state = state.with_store(Arc::new(store));
            }
            Err(e) => tracing::warn!("Postgres unavailable, serving without database: {}", e),
        },
        None => tracing::warn!("DB_HOST not set, serving without database"),
    }

    // 连接 Redis，只在启动时建立一次；失败时不使用缓存
    if config.cache_enabled {
        match RedisCache::connect(&config.redis_url()).await {
            Ok(cache) => {
                tracing::info!("Connected to Redis at {}", config.redis_url());
                state = state.with_cache(Arc::new(cache));
            }
            Err(e) => tracing::warn!("Redis unavailable, serving without cache: {}", e),
        }
    } else {
        tracing::info!("Cache disabled");
    }

    let app = api_router(state);

    // 启动服务器
    let addr = config.api_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Task service listening on {}", addr);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
    tracing::info!("Shutdown signal received");
}
