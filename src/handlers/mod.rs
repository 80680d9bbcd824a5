//! # HTTP Request Handlers Module
//!
//! HTTP 요청을 처리하는 핸들러 함수들을 정의하는 모듈입니다.
//! 핸들러는 요청을 DTO로 받아 서비스에 위임하고, 결과를 JSON 응답으로 돌려주는 얇은 계층입니다.
//!
//! ## 아키텍처 위치
//!
//! ```text
//! HTTP Layer Architecture
//! ┌─────────────────────────────────────────────┐
//!   Client (Browser, Mobile App)
//! └─────────────────────┬───────────────────────┘
//!                       │ HTTP Request/Response
//! ┌─────────────────────▼───────────────────────┐
//!   Handlers (이 모듈) - HTTP 엔드포인트 처리         ← Web Layer
//! ├─────────────────────────────────────────────┤
//!   Services - 비즈니스 로직                        ← Service Layer
//! ├─────────────────────────────────────────────┤
//!   Repositories - 데이터 접근                     ← Repository Layer
//! ├─────────────────────────────────────────────┤
//!   Entities/Models - 도메인 모델                  ← Domain Layer
//! └─────────────────────────────────────────────┘
//! ```
//!
//! 서비스는 [`AppState`](crate::state::AppState)에서 `web::Data`로 꺼내 씁니다.
//!
//! ```rust,ignore
//! #[get("/me")]
//! pub async fn get_current_user(
//!     state: web::Data<AppState>,
//!     principal: OptionalUser,
//! ) -> Result<HttpResponse, AppError> {
//!     // ...
//! }
//! ```
//!
//! ## 모듈 구성
//!
//! - **`auth`**: 인증 관련 엔드포인트
//!   - 카카오 로그인 (`POST /auth/kakao`)
//!   - 현재 사용자 (`GET /auth/me`)
//!   - 로그아웃 (`POST /auth/logout`)
//!   - 인가 코드 전달 (`GET /auth/kakao/code`)
//!   - 카카오 로그인 URL (`GET /auth/kakao/login`)
//!
//! - **`onboard`**: 온보딩 엔드포인트
//!   - 투자 성향 조회/저장/삭제 (`GET|PUT|DELETE /onboard/preference`)

pub mod auth;
pub mod onboard;
