//! # User Data Transfer Objects Module
//!
//! 인증 API의 요청/응답 데이터 구조를 정의합니다.
//!
//! | 엔드포인트 | 요청 | 응답 |
//! |------------|------|------|
//! | `POST /auth/kakao` | [`KakaoLoginRequest`] | [`LoginResponse`] |
//! | `GET /auth/me` | - | [`UserResponse`] |
//! | `POST /auth/logout` | - | [`MessageResponse`] |
//! | `GET /auth/kakao/code` | [`KakaoCodeQuery`] | [`KakaoCodeResponse`] |
//! | `GET /auth/kakao/login` | - | [`KakaoLoginUrlResponse`] |

pub mod request;
pub mod response;

pub use request::*;
pub use response::*;
