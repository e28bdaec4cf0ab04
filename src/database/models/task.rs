use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// 任务数据库实体，对应 `tasks(id, title)` 表
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct TaskEntity {
    pub id: i32,
    pub title: String,
}

impl TaskEntity {
    pub fn new(id: i32, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
        }
    }
}
