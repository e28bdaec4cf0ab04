// 缓存模块
// 包含缓存后端抽象、缓存键和任务列表的缓存操作

pub mod keys;
pub mod models;
pub mod operations;
pub mod store;

// 重新导出常用类型和函数，方便其他模块使用
pub use operations::task::TaskCacheOperations;
pub use store::{CacheStore, RedisCache};
