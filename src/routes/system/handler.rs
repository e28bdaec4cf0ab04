use axum::extract::{Json, State};

use super::model::{HealthResponse, ServiceInfoResponse};
use crate::AppState;

/// 存活探针，不检查数据库和缓存
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

pub async fn service_info(State(state): State<AppState>) -> Json<ServiceInfoResponse> {
    Json(ServiceInfoResponse {
        app: state.config.app_name.clone(),
        environment: state.config.environment.clone(),
    })
}
