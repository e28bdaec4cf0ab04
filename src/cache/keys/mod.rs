/// 缓存键模块
/// 提供各种缓存键和过期时间

// 任务缓存键模块
pub mod task_keys;

pub use task_keys::{TASK_LIST_KEY, TASK_LIST_TTL_SECS};
