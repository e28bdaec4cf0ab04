mod auth;
mod error_handler;

pub use auth::{has_authorization, require_authorization};
pub use error_handler::log_errors;
