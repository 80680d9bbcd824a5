//! # Configuration Module
//!
//! 백엔드 서비스의 설정 관리를 담당하는 모듈입니다.
//! 환경 변수 기반의 설정값들을 타입이 있는 접근자로 중앙집중식 관리합니다.
//!
//! ## 모듈 구성
//!
//! - [`data_config`] - 서버, 저장소, CORS, Rate Limit, 환경 관련 설정
//! - [`auth_config`] - 카카오 OAuth, JWT 관련 설정
//! - [`json_config`] - 요청/응답 JSON 처리 설정
//!
//! ## 환경 변수 설정 가이드
//!
//! ### 필수 환경 변수
//!
//! ```bash
//! # 카카오 OAuth
//! export KAKAO_CLIENT_ID="rest-api-key"
//! export KAKAO_REDIRECT_URI="http://localhost:3000/oauth/kakao/callback"
//!
//! # JWT (프로덕션 필수)
//! export JWT_SECRET="your-super-secret-key"
//! ```
//!
//! ### 선택적 환경 변수
//!
//! ```bash
//! export ENVIRONMENT="development"     # development, test, staging, production
//! export HOST="0.0.0.0"
//! export PORT="8080"
//! export DATA_STORE="mongodb"          # mongodb, memory
//! export MONGODB_URI="mongodb://localhost:27017"
//! export DATABASE_NAME="fingrow_dev"
//! export JWT_EXPIRATION_HOURS="1"
//! export KAKAO_CLIENT_SECRET="client-secret"
//! export KAKAO_TIMEOUT_SECONDS="10"
//! export CORS_ALLOWED_ORIGINS="http://localhost:3000,https://fingrow.app"
//! export RATE_LIMIT_PER_SECOND="100"
//! export RATE_LIMIT_BURST_SIZE="200"
//! ```

pub mod data_config;
pub mod auth_config;
pub mod json_config;

pub use data_config::*;
pub use auth_config::*;
pub use json_config::*;
