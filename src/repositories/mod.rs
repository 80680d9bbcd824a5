//! 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! 서비스 계층이 의존하는 저장소 trait과 그 구현체들을 제공합니다.
//!
//! | trait | MongoDB 구현 | 인메모리 구현 |
//! |-------|--------------|---------------|
//! | [`UserStore`](users::UserStore) | [`UserRepository`](users::UserRepository) | [`MemoryUserStore`](memory::MemoryUserStore) |
//! | [`PreferenceStore`](onboard::PreferenceStore) | [`InvestmentPreferenceRepository`](onboard::InvestmentPreferenceRepository) | [`MemoryPreferenceStore`](memory::MemoryPreferenceStore) |
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use crate::repositories::users::{UserRepository, UserStore};
//!
//! let user_store: Arc<dyn UserStore> = Arc::new(UserRepository::new(database));
//! let user = user_store.find_by_id(1).await?;
//! ```

pub mod users;
pub mod onboard;
pub mod memory;
