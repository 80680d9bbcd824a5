//! # Domain Entities Module
//!
//! 영속 저장소(MongoDB 컬렉션 또는 인메모리 저장소)에 그대로 저장되는 도메인 엔티티입니다.
//!
//! | 엔티티 | 컬렉션 | 식별자 |
//! |--------|--------|--------|
//! | [`users::user::User`] | `users` | `_id` (숫자 시퀀스) |
//! | [`onboard::investment_preference::InvestmentPreference`] | `investment_preferences` | `_id` (숫자 시퀀스) |
//!
//! 두 엔티티 모두 `id`가 `None`인 상태로 생성되고, 저장소가 저장 시점에 ID를 할당합니다.

pub mod users;
pub mod onboard;
