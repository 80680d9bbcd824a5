//! 핀그로우 인증 백엔드
//!
//! 카카오 OAuth 로그인, JWT 액세스 토큰 발급과 현재 사용자 조회,
//! 그리고 온보딩 투자 성향 저장을 제공하는 Rust 기반 서비스입니다.
//!
//! # Features
//!
//! - **카카오 로그인**: 인가 코드 교환 후 사용자 생성/조회
//! - **JWT 인증**: HS256 서명의 상태 없는 액세스 토큰
//! - **온보딩**: 사용자별 투자 성향 조회/저장/삭제
//! - **MongoDB**: 사용자와 투자 성향 영구 저장 (`DATA_STORE=memory`로 인메모리 실행 가능)
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← REST API 엔드포인트 (/api/v1)
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 요청/응답 처리
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← 비즈니스 로직 (AppState로 조립)
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← 데이터 액세스 (UserStore, PreferenceStore)
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │     MongoDB     │ ← 저장소
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use fingrow_backend::routes::configure_all_routes;
//! use fingrow_backend::state::AppState;
//!
//! let state = AppState::from_env().await?;
//! let app = App::new().configure(|cfg| configure_all_routes(cfg, &state));
//! ```

pub mod config;
pub mod db;
pub mod domain;
pub mod repositories;
pub mod services;
pub mod state;
pub mod utils;
pub mod routes;
pub mod handlers;
pub mod errors;
pub mod middlewares;
