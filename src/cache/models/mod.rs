/// 缓存数据模型
pub mod task;

pub use task::CachedTaskList;
