use axum::{
    extract::{Json, State},
    http::StatusCode,
};

use super::model::{CreateTaskRequest, CreateTaskResponse, TaskListResponse};
use crate::{AppState, error::AppResult};

#[axum::debug_handler]
pub async fn list_tasks(State(state): State<AppState>) -> AppResult<Json<TaskListResponse>> {
    let response = TaskListResponse::load(&state).await?;
    Ok(Json(response))
}

#[axum::debug_handler]
pub async fn create_task(
    State(state): State<AppState>,
    Json(req): Json<CreateTaskRequest>,
) -> AppResult<(StatusCode, Json<CreateTaskResponse>)> {
    let response = CreateTaskResponse::create(&state, req).await?;
    Ok((StatusCode::OK, Json(response)))
}
