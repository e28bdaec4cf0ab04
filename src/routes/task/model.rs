use serde::{Deserialize, Serialize};

use crate::{
    AppState,
    cache::TaskCacheOperations,
    database::TaskEntity,
    error::{AppError, AppResult},
};

/// 响应数据来自哪一层
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskSource {
    Cache,
    Database,
}

#[derive(Debug, Serialize)]
pub struct TaskListResponse {
    pub tasks: Vec<TaskEntity>,
    pub source: TaskSource,
}

#[derive(Debug, Deserialize)]
pub struct CreateTaskRequest {
    pub title: String,
}

#[derive(Debug, Serialize)]
pub struct CreateTaskResponse {
    pub status: &'static str,
    pub title: String,
}

impl TaskListResponse {
    /// 先查缓存，未命中再查数据库并回填缓存
    pub async fn load(state: &AppState) -> AppResult<Self> {
        if let Some(cache) = state.cache.as_deref() {
            if let Some(tasks) = TaskCacheOperations::get_task_list(cache).await? {
                return Ok(Self {
                    tasks,
                    source: TaskSource::Cache,
                });
            }
            tracing::debug!("Task list cache miss");
        }

        let store = state.store.as_deref().ok_or(AppError::ServiceUnavailable)?;
        let tasks = store.list_tasks().await?;

        if let Some(cache) = state.cache.as_deref() {
            TaskCacheOperations::cache_task_list(cache, &tasks).await?;
        }

        Ok(Self {
            tasks,
            source: TaskSource::Database,
        })
    }
}

impl CreateTaskResponse {
    /// 写入数据库后删除任务列表缓存；提交失败时直接返回错误，不删缓存
    pub async fn create(state: &AppState, req: CreateTaskRequest) -> AppResult<Self> {
        let store = state.store.as_deref().ok_or(AppError::ServiceUnavailable)?;
        store.insert_task(&req.title).await?;

        if let Some(cache) = state.cache.as_deref() {
            TaskCacheOperations::invalidate_task_list(cache).await?;
        }

        tracing::info!("Created task: {}", req.title);
        Ok(Self {
            status: "created",
            title: req.title,
        })
    }
}
