//! # 사용자 관련 응답 DTO 모듈
//!
//! 비즈니스 로직 처리 결과를 클라이언트에게 일관된 형태로 전달합니다.
//! 프로바이더 내부 식별자(`provider_id`)처럼 클라이언트에 필요 없는 값은 제외합니다.

pub mod user_response;

pub use user_response::*;
