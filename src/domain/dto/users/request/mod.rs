pub mod sign_up_request;
pub mod auth_code_request;
pub mod kakao_request;

pub use sign_up_request::*;
pub use auth_code_request::*;
pub use kakao_request::*;
