use crate::database::models::task::TaskEntity;

/// 任务列表缓存值，序列化为 `[{id, title}, ...]`
pub type CachedTaskList = Vec<TaskEntity>;
