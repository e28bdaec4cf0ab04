use axum::{
    body::Body,
    http::{HeaderMap, Request, header::AUTHORIZATION},
    middleware::Next,
    response::Response,
};

use crate::error::AppError;

/// 只检查 Authorization 头是否存在且非空，不解析内容
pub fn has_authorization(headers: &HeaderMap) -> bool {
    headers
        .get(AUTHORIZATION)
        .is_some_and(|value| !value.as_bytes().is_empty())
}

pub async fn require_authorization(req: Request<Body>, next: Next) -> Result<Response, AppError> {
    if !has_authorization(req.headers()) {
        return Err(AppError::Unauthorized);
    }

    Ok(next.run(req).await)
}
