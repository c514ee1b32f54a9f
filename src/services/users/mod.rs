pub mod user_service;
pub mod email_service;

pub use user_service::*;
pub use email_service::*;
