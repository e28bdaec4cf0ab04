use axum::{
    Router,
    routing::{get, post},
};

use crate::{
    AppState,
    middleware::{log_errors, require_authorization},
    routes,
};

// 任务相关的路由，全部需要 Authorization 头
fn task_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/tasks",
            get(routes::task::list_tasks).post(routes::task::create_task),
        )
        .route_layer(axum::middleware::from_fn(require_authorization))
}

// 公开路由
fn system_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(routes::system::health))
        .route("/", get(routes::system::service_info))
}

/// 任务服务的主路由
pub fn api_router(state: AppState) -> Router {
    let router = Router::new()
        .merge(system_routes())
        .merge(task_routes())
        .layer(axum::middleware::from_fn(log_errors));

    with_cors(router).with_state(state)
}

/// 认证服务的主路由
pub fn auth_router() -> Router {
    let router = Router::new()
        .route("/login", post(routes::auth::login))
        .layer(axum::middleware::from_fn(log_errors));

    with_cors(router)
}

// 开发模式允许所有来源
#[cfg(debug_assertions)]
fn with_cors<S: Clone + Send + Sync + 'static>(router: Router<S>) -> Router<S> {
    tracing::debug!("Adding CORS layer for development mode");
    router.layer(tower_http::cors::CorsLayer::permissive())
}

#[cfg(not(debug_assertions))]
fn with_cors<S: Clone + Send + Sync + 'static>(router: Router<S>) -> Router<S> {
    router
}
