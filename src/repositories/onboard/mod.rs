//! 온보딩(투자 성향) 리포지토리 모듈

pub mod investment_preference_repo;

pub use investment_preference_repo::*;
