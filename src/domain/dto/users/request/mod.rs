//! # 사용자 관련 요청 DTO 모듈
//!
//! 클라이언트로부터 받은 JSON 본문과 쿼리 문자열을 구조화된 타입으로 변환하고
//! `validator` 크레이트로 검증합니다. 검증 실패 메시지는 400 응답의 `error` 값으로
//! 그대로 전달됩니다.

pub mod auth_request;

pub use auth_request::*;
