//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! 서비스는 저장소와 외부 클라이언트를 trait 객체로 주입받으며,
//! [`AppState`](crate::state::AppState)에서 한 번 생성되어 모든 워커가 공유합니다.
//!
//! # Features
//!
//! - 카카오 OAuth 로그인 (인가 코드 교환, 사용자 생성/조회)
//! - JWT 액세스 토큰 발급 및 검증
//! - 현재 사용자 조회
//! - 온보딩 투자 성향 관리
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::auth::{KakaoAuthService, TokenService};
//!
//! let kakao_auth = KakaoAuthService::new(oauth_client, user_store.clone());
//! let token_service = TokenService::from_env()?;
//! ```

pub mod users;
pub mod auth;
pub mod onboard;
