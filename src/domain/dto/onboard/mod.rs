//! # Onboarding DTO Module
//!
//! 투자 성향 저장/조회 API의 요청·응답 구조를 정의합니다.

pub mod preference;

pub use preference::*;
