mod handler;
mod model;

pub use handler::{create_task, list_tasks};
pub use model::{CreateTaskRequest, CreateTaskResponse, TaskListResponse, TaskSource};
