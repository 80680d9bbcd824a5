//! 인증 서비스 모듈
//!
//! 카카오 인가 코드 교환, 로그인 시 사용자 생성/조회, JWT 액세스 토큰 발급과 검증을 담당합니다.
//!
//! # Security
//!
//! - HMAC-SHA256 토큰 서명
//! - 토큰 만료 시간 관리 (`JWT_EXPIRATION_HOURS`)
//! - 카카오 API 호출 타임아웃 (`KAKAO_TIMEOUT_SECONDS`)
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::auth::{KakaoAuthService, TokenService};
//!
//! let user = kakao_auth.process_login(&code).await?;
//! let access_token = token_service.issue(&user_id)?;
//! ```

pub mod token_service;
pub mod kakao_oauth_client;
pub mod kakao_auth_service;

pub use token_service::*;
pub use kakao_oauth_client::*;
pub use kakao_auth_service::*;
