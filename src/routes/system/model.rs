use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

/// 服务元信息，未配置的字段输出为 null
#[derive(Debug, Serialize)]
pub struct ServiceInfoResponse {
    pub app: Option<String>,
    pub environment: Option<String>,
}
