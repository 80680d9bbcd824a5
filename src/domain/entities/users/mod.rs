//! Users Entity Module
//!
//! 사용자 도메인의 핵심 엔티티를 정의하는 모듈입니다.
//!
//! # 사용 예제
//!
//! ```rust,ignore
//! use crate::config::AuthProvider;
//! use crate::domain::entities::users::user::User;
//!
//! let user = User::new_oauth(AuthProvider::Kakao, profile);
//! let saved = user_store.save(user).await?;
//! assert!(saved.id.is_some());
//! ```

pub mod user;
