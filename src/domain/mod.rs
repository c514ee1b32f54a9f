//! 도메인 모듈
//!
//! - [`entities`] - MongoDB에 저장되는 영속 레코드
//! - [`dto`] - HTTP 요청/응답 형식
//! - [`models`] - 내부 모델 및 외부 API(카카오) 응답 형식

pub mod entities;
pub mod dto;
pub mod models;
