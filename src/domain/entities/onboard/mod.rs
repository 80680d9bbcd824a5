//! Onboarding Entity Module
//!
//! 온보딩 과정에서 수집되는 사용자 투자 성향 엔티티를 정의합니다.

pub mod investment_preference;
