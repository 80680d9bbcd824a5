//! # 카카오 사용자 정보 모델
//!
//! 카카오 로그인 REST API 응답을 그대로 역직렬화하기 위한 구조체들입니다.
//! 동의하지 않은 항목은 응답에서 빠지므로 대부분 선택 필드입니다.

use serde::Deserialize;
use crate::domain::oauth::OAuthProfile;
use crate::utils::string_utils::clean_optional_string;

/// 닉네임 동의 항목이 없을 때 사용하는 표시 이름
pub const DEFAULT_KAKAO_NICKNAME: &str = "카카오 사용자";

/// 인가 코드 → 토큰 교환 응답 (`POST /oauth/token`)
#[derive(Debug, Deserialize)]
pub struct KakaoTokenResponse {
    pub access_token: String,
    pub token_type: String,
    pub expires_in: i64,
    pub refresh_token: Option<String>,
    pub refresh_token_expires_in: Option<i64>,
    pub scope: Option<String>,
}

/// 카카오 인증 서버 에러 응답
///
/// ```json
/// {"error":"invalid_grant","error_description":"authorization code not found for code=...","error_code":"KOE320"}
/// ```
#[derive(Debug, Deserialize)]
pub struct KakaoErrorResponse {
    pub error: Option<String>,
    pub error_description: Option<String>,
    pub error_code: Option<String>,
    /// `kapi.kakao.com` 에러 응답 형식 (`{"msg": "...", "code": -401}`)
    pub msg: Option<String>,
}

impl KakaoErrorResponse {
    /// 사람이 읽을 수 있는 에러 설명
    pub fn describe(&self) -> String {
        let mut parts = Vec::new();
        if let Some(code) = &self.error_code {
            parts.push(format!("[{}]", code));
        }
        if let Some(error) = &self.error {
            parts.push(error.clone());
        }
        if let Some(description) = self.error_description.as_ref().or(self.msg.as_ref()) {
            parts.push(description.clone());
        }

        if parts.is_empty() {
            "알 수 없는 카카오 오류".to_string()
        } else {
            parts.join(" ")
        }
    }
}

/// 사용자 정보 조회 응답 (`GET /v2/user/me`)
#[derive(Debug, Deserialize)]
pub struct KakaoUserInfo {
    /// 카카오 회원번호
    pub id: i64,
    #[serde(default)]
    pub properties: Option<KakaoProperties>,
    #[serde(default)]
    pub kakao_account: Option<KakaoAccount>,
}

#[derive(Debug, Default, Deserialize)]
pub struct KakaoProperties {
    pub nickname: Option<String>,
    pub profile_image: Option<String>,
    pub thumbnail_image: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct KakaoAccount {
    pub email: Option<String>,
    pub is_email_valid: Option<bool>,
    pub is_email_verified: Option<bool>,
    pub profile: Option<KakaoProfile>,
}

#[derive(Debug, Default, Deserialize)]
pub struct KakaoProfile {
    pub nickname: Option<String>,
    pub profile_image_url: Option<String>,
    pub thumbnail_image_url: Option<String>,
}

impl KakaoUserInfo {
    /// 애플리케이션 내부 프로필로 변환합니다
    ///
    /// `kakao_account.profile`을 우선 사용하고 없으면 `properties` 값으로 대체합니다.
    /// 유효하지 않다고 표시된 이메일은 버립니다.
    pub fn into_profile(self) -> OAuthProfile {
        let account = self.kakao_account.unwrap_or_default();
        let properties = self.properties.unwrap_or_default();
        let profile = account.profile.unwrap_or_default();

        let email = match account.is_email_valid {
            Some(false) => None,
            _ => clean_optional_string(account.email),
        };

        let name = clean_optional_string(profile.nickname)
            .or_else(|| clean_optional_string(properties.nickname))
            .unwrap_or_else(|| DEFAULT_KAKAO_NICKNAME.to_string());

        let profile_image = clean_optional_string(profile.profile_image_url)
            .or_else(|| clean_optional_string(properties.profile_image));

        OAuthProfile {
            provider_id: self.id.to_string(),
            email,
            name,
            profile_image,
        }
    }
}
