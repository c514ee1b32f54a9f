pub mod token_service;
pub mod kakao_auth_service;

pub use token_service::*;
pub use kakao_auth_service::*;
