//! # Domain Models Module
//!
//! 영속화되지 않는 도메인 모델을 정의합니다.
//!
//! - [`auth`] - 요청 컨텍스트에 저장되는 인증 주체와 인증 모드
//! - [`token`] - JWT 액세스 토큰 클레임
//! - [`oauth`] - 외부 OAuth 프로바이더 응답과 프로바이더 중립 프로필
//!
//! 엔티티와 달리 이 모델들은 요청 하나의 수명 동안만 존재합니다.

pub mod auth;
pub mod token;
pub mod oauth;
