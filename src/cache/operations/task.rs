use crate::cache::keys::task_keys::{TASK_LIST_KEY, TASK_LIST_TTL_SECS};
use crate::cache::models::task::CachedTaskList;
use crate::cache::store::CacheStore;
use crate::error::AppResult;

/// 任务列表缓存操作
pub struct TaskCacheOperations;

impl TaskCacheOperations {
    /// 读取缓存的任务列表，未命中或值为空时返回 None
    pub async fn get_task_list(cache: &dyn CacheStore) -> AppResult<Option<CachedTaskList>> {
        match cache.get(TASK_LIST_KEY).await? {
            Some(json) if !json.is_empty() => {
                let tasks = serde_json::from_str(&json)?;
                tracing::debug!("Get task list from cache: {}", TASK_LIST_KEY);
                Ok(Some(tasks))
            }
            _ => Ok(None),
        }
    }

    /// 缓存任务列表，过期时间 30 秒
    pub async fn cache_task_list(cache: &dyn CacheStore, tasks: &CachedTaskList) -> AppResult<()> {
        let json = serde_json::to_string(tasks)?;
        cache
            .set_ex(TASK_LIST_KEY, json, TASK_LIST_TTL_SECS)
            .await?;
        Ok(())
    }

    /// 删除任务列表缓存
    pub async fn invalidate_task_list(cache: &dyn CacheStore) -> AppResult<()> {
        cache.del(TASK_LIST_KEY).await?;
        tracing::debug!("Invalidated cache key: {}", TASK_LIST_KEY);
        Ok(())
    }
}
