#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, StatusCode},
};
use serde_json::Value;
use taskboard::{cache::CacheStore, database::TaskEntity, database::TaskStore};
use tower::ServiceExt;

/// 内存任务表，记录调用次数
#[derive(Default)]
pub struct MemoryStore {
    rows: Mutex<Vec<TaskEntity>>,
    pub list_calls: AtomicUsize,
    pub insert_calls: AtomicUsize,
    pub fail_commit: bool,
    pub fail_list: bool,
}

impl MemoryStore {
    pub fn with_rows(rows: Vec<TaskEntity>) -> Self {
        Self {
            rows: Mutex::new(rows),
            ..Default::default()
        }
    }

    pub fn failing() -> Self {
        Self {
            fail_commit: true,
            ..Default::default()
        }
    }

    pub fn failing_list() -> Self {
        Self {
            fail_list: true,
            ..Default::default()
        }
    }

    pub fn list_calls(&self) -> usize {
        self.list_calls.load(Ordering::SeqCst)
    }

    pub fn insert_calls(&self) -> usize {
        self.insert_calls.load(Ordering::SeqCst)
    }

    pub fn titles(&self) -> Vec<String> {
        self.rows.lock().unwrap().iter().map(|t| t.title.clone()).collect()
    }
}

#[async_trait]
impl TaskStore for MemoryStore {
    async fn list_tasks(&self) -> Result<Vec<TaskEntity>, sqlx::Error> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_list {
            return Err(sqlx::Error::PoolTimedOut);
        }
        Ok(self.rows.lock().unwrap().clone())
    }

    async fn insert_task(&self, title: &str) -> Result<(), sqlx::Error> {
        self.insert_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_commit {
            return Err(sqlx::Error::PoolClosed);
        }
        let mut rows = self.rows.lock().unwrap();
        let id = rows.iter().map(|t| t.id).max().unwrap_or(0) + 1;
        rows.push(TaskEntity::new(id, title));
        Ok(())
    }
}

/// 内存键值缓存，记录每个键的 TTL 和调用次数
#[derive(Default)]
pub struct MemoryCache {
    entries: Mutex<HashMap<String, (String, u64)>>,
    pub get_calls: AtomicUsize,
    pub set_calls: AtomicUsize,
    pub del_calls: AtomicUsize,
    pub fail_get: bool,
    pub fail_del: bool,
}

fn cache_down() -> redis::RedisError {
    redis::RedisError::from((redis::ErrorKind::IoError, "cache unreachable"))
}

impl MemoryCache {
    pub fn with_entry(key: &str, value: &str) -> Self {
        let cache = Self::default();
        cache
            .entries
            .lock()
            .unwrap()
            .insert(key.to_string(), (value.to_string(), 30));
        cache
    }

    pub fn failing_get() -> Self {
        Self {
            fail_get: true,
            ..Default::default()
        }
    }

    pub fn failing_del() -> Self {
        Self {
            fail_del: true,
            ..Default::default()
        }
    }

    pub fn entry(&self, key: &str) -> Option<(String, u64)> {
        self.entries.lock().unwrap().get(key).cloned()
    }

    pub fn calls(&self) -> usize {
        self.get_calls.load(Ordering::SeqCst)
            + self.set_calls.load(Ordering::SeqCst)
            + self.del_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CacheStore for MemoryCache {
    async fn get(&self, key: &str) -> Result<Option<String>, redis::RedisError> {
        self.get_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_get {
            return Err(cache_down());
        }
        Ok(self.entries.lock().unwrap().get(key).map(|(v, _)| v.clone()))
    }

    async fn set_ex(
        &self,
        key: &str,
        value: String,
        ttl_secs: u64,
    ) -> Result<(), redis::RedisError> {
        self.set_calls.fetch_add(1, Ordering::SeqCst);
        self.entries
            .lock()
            .unwrap()
            .insert(key.to_string(), (value, ttl_secs));
        Ok(())
    }

    async fn del(&self, key: &str) -> Result<(), redis::RedisError> {
        self.del_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_del {
            return Err(cache_down());
        }
        self.entries.lock().unwrap().remove(key);
        Ok(())
    }
}

pub fn get(uri: &str, token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method("GET").uri(uri);
    if let Some(token) = token {
        builder = builder.header("authorization", token);
    }
    builder.body(Body::empty()).unwrap()
}

pub fn post_json(uri: &str, token: Option<&str>, body: Value) -> Request<Body> {
    let mut builder = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json");
    if let Some(token) = token {
        builder = builder.header("authorization", token);
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

pub async fn send(app: &Router, req: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(req).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), 64 * 1024).await.unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, body)
}
