use axum::extract::Json;

use super::model::{LoginRequest, LoginResponse};
use crate::utils::generate_login_token;

/// 登录：不校验用户名，每次签发新的随机令牌
#[axum::debug_handler]
pub async fn login(Json(req): Json<LoginRequest>) -> Json<LoginResponse> {
    let token = generate_login_token();
    tracing::debug!("Issued login token for user: {}", req.username);

    Json(LoginResponse {
        token,
        user: req.username,
    })
}
