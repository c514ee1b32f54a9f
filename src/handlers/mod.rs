//! HTTP 요청/응답 처리 핸들러 모듈

pub mod users;
pub mod papers;
pub mod pages;
pub mod auth;
