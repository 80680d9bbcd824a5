//! 미들웨어 모듈
//!
//! ActixWeb 애플리케이션의 요청 처리 파이프라인에서 사용되는 미들웨어들을 제공합니다.
//!
//! # 제공 미들웨어
//!
//! ### 1. 인증 미들웨어 (AuthMiddleware)
//! - Bearer 토큰 추출 및 JWT 검증
//! - 인증 주체를 request extension에 저장
//! - 선택적/강제 인증 모드 지원
//!
//! # 사용 방법
//!
//! ```rust,ignore
//! use actix_web::{web, App};
//!
//! App::new()
//!     .service(
//!         web::scope("/api/v1/onboard")
//!             .wrap(AuthMiddleware::required(token_service.clone()))
//!             .route("/preference", web::get().to(get_preference))
//!     )
//!     .service(
//!         web::scope("/api/v1/auth")
//!             .wrap(AuthMiddleware::optional(token_service.clone()))
//!             .route("/me", web::get().to(get_current_user))
//!     )
//! ```

pub mod auth_middleware;
mod auth_inner;

// 미들웨어 재export
pub use auth_middleware::AuthMiddleware;
