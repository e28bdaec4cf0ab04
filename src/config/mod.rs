use std::env;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use sqlx::postgres::PgConnectOptions;
use thiserror::Error;

const DEFAULT_DB_PORT: u16 = 5432;
const DEFAULT_REDIS_HOST: &str = "redis";
const DEFAULT_REDIS_PORT: u16 = 6379;
const DEFAULT_SERVER_HOST: &str = "0.0.0.0";
const DEFAULT_SERVER_PORT: u16 = 8000;
const DEFAULT_AUTH_SERVER_PORT: u16 = 8001;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value {value:?} for {key}")]
    Invalid { key: &'static str, value: String },
}

/// 数据库连接参数
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub host: String,
    pub port: u16,
    pub name: String,
    pub user: String,
    pub password: String,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub app_name: Option<String>,
    pub environment: Option<String>,
    /// 未设置 `DB_HOST` 时为 None，任务服务在没有数据库的情况下启动
    pub database: Option<DatabaseConfig>,
    pub redis_host: String,
    pub redis_port: u16,
    pub cache_enabled: bool,
    pub server_host: String,
    pub server_port: u16,
    pub auth_server_port: u16,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// 从任意键值来源构建配置
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let database = match var("DB_HOST") {
            Some(host) => Some(DatabaseConfig {
                host,
                port: parse_or(&var, "DB_PORT", DEFAULT_DB_PORT)?,
                name: var("DB_NAME").unwrap_or_default(),
                user: var("DB_USER").unwrap_or_default(),
                password: lookup("DB_PASSWORD").unwrap_or_default(),
            }),
            None => None,
        };

        Ok(Config {
            app_name: lookup("APP_NAME"),
            environment: lookup("ENVIRONMENT"),
            database,
            redis_host: var("REDIS_HOST").unwrap_or_else(|| DEFAULT_REDIS_HOST.into()),
            redis_port: parse_or(&var, "REDIS_PORT", DEFAULT_REDIS_PORT)?,
            cache_enabled: parse_or(&var, "CACHE_ENABLED", true)?,
            server_host: var("SERVER_HOST").unwrap_or_else(|| DEFAULT_SERVER_HOST.into()),
            server_port: parse_or(&var, "SERVER_PORT", DEFAULT_SERVER_PORT)?,
            auth_server_port: parse_or(&var, "AUTH_SERVER_PORT", DEFAULT_AUTH_SERVER_PORT)?,
        })
    }

    /// 按字段构建连接参数，密码等字段不经过 URL 解析
    pub fn database_options(&self) -> Option<PgConnectOptions> {
        self.database.as_ref().map(|db| {
            PgConnectOptions::new()
                .host(&db.host)
                .port(db.port)
                .username(&db.user)
                .password(&db.password)
                .database(&db.name)
        })
    }

    pub fn redis_url(&self) -> String {
        format!("redis://{}:{}/", self.redis_host, self.redis_port)
    }

    pub fn api_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind_ip(), self.server_port)
    }

    pub fn auth_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind_ip(), self.auth_server_port)
    }

    fn bind_ip(&self) -> IpAddr {
        self.server_host.parse().unwrap_or_else(|_| {
            tracing::warn!(
                "Invalid server_host {:?}, falling back to 0.0.0.0",
                self.server_host
            );
            IpAddr::V4(Ipv4Addr::UNSPECIFIED)
        })
    }
}

fn parse_or<T, F>(var: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    F: Fn(&str) -> Option<String>,
{
    match var(key) {
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { key, value }),
        None => Ok(default),
    }
}
