/// 缓存操作
pub mod task;

pub use task::TaskCacheOperations;
