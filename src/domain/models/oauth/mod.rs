//! # OAuth 도메인 모델
//!
//! 외부 인증 프로바이더 응답과 애플리케이션 내부 프로필 표현을 정의합니다.
//! 프로바이더별 원본 응답 모델(`kakao_oauth_model`)은 교환 클라이언트 안에서만 쓰이고,
//! 서비스 계층에는 프로바이더 중립적인 [`OAuthProfile`]만 전달됩니다.

pub mod kakao_oauth_model;

/// 프로바이더에서 검증된 사용자 프로필
#[derive(Debug, Clone, PartialEq)]
pub struct OAuthProfile {
    /// 프로바이더가 부여한 사용자 식별자
    pub provider_id: String,
    pub email: Option<String>,
    /// 표시 이름
    pub name: String,
    pub profile_image: Option<String>,
}
