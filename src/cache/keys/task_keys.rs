/// 任务列表缓存键
pub const TASK_LIST_KEY: &str = "tasks";

/// 任务列表缓存过期时间，单位秒
pub const TASK_LIST_TTL_SECS: u64 = 30;
