mod handler;
mod model;

pub use handler::{health, service_info};
