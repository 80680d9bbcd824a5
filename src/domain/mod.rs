//! # Domain Layer Module
//!
//! 도메인 계층을 구성하는 핵심 모듈로, 비즈니스 객체와 API 계약을 담당합니다.
//!
//! ## 아키텍처 개요
//!
//! ```text
//! Domain Layer (이 모듈)
//! ├── Entities      - 저장소에 영속되는 객체 (User, InvestmentPreference)
//! ├── DTOs          - 데이터 전송 객체 (Request/Response)
//! └── Models        - 인증 주체, 토큰 클레임, OAuth 프로바이더 모델
//!      │
//!      ▼
//! Application Layer (Services)
//!      │
//!      ▼
//! Infrastructure Layer (Repositories, DB)
//! ```
//!
//! `models`의 하위 모듈은 `crate::domain::auth`, `crate::domain::token`,
//! `crate::domain::oauth` 경로로도 접근할 수 있습니다.

pub mod entities;
pub mod dto;
pub mod models;

pub use models::*;
