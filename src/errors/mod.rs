//! 에러 모듈
//!
//! 애플리케이션 전역 에러 타입 [`AppError`]를 재export 합니다.

pub mod errors;

pub use errors::*;
