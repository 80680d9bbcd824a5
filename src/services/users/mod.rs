//! 사용자 서비스 모듈
//!
//! 사용자 계정은 카카오 로그인 흐름에서만 만들어지므로,
//! 이 모듈은 조회 기능만 제공합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::users::UserService;
//!
//! let user_service = UserService::new(user_store);
//! let profile = user_service.get_user_by_id(42).await?;
//! ```

pub mod user_service;

pub use user_service::*;
