//! 온보딩 서비스 모듈
//!
//! 가입 직후 설문으로 수집한 투자 성향을 관리합니다.

pub mod preference_service;

pub use preference_service::*;
