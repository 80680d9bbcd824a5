//! 카카오 OAuth 응답 모델
//!
//! `kauth.kakao.com` 토큰 응답, 에러 응답과 `kapi.kakao.com/v2/user/me` 사용자 정보를 매핑합니다.

pub mod kakao_user;

pub use kakao_user::*;
