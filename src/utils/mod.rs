use uuid::Uuid;

/// 生成登录令牌（UUID v4 字符串），不保存也不校验
pub fn generate_login_token() -> String {
    Uuid::new_v4().to_string()
}
