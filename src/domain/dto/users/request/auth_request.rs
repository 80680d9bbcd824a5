//! 인증 요청관련 DTO
//!
//! 카카오 로그인 요청 본문과 인가 코드 콜백 쿼리를 매핑합니다.
use serde::Deserialize;
use validator::Validate;
use crate::utils::string_utils::deserialize_optional_string;

/// 인가 코드 누락 시 응답 메시지
pub const AUTHORIZATION_CODE_REQUIRED: &str = "Authorization code is required";

/// 카카오 로그인 요청 구조체
///
/// `code`가 없거나 빈 문자열이면 검증에 실패합니다.
#[derive(Debug, Deserialize, Validate)]
pub struct KakaoLoginRequest {
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    #[validate(required(message = "Authorization code is required"))]
    pub code: Option<String>,
}

/// 카카오 인가 코드 리다이렉트 쿼리 파라미터 구조체
///
/// 사용자가 동의를 거부하면 `error=access_denied`와 함께 돌아옵니다.
#[derive(Debug, Deserialize)]
pub struct KakaoCodeQuery {
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub code: Option<String>,

    /// 에러가 있을 경우 (사용자가 거부했거나 에러 발생)
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub error: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub error_description: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::string_utils::validation_message;

    #[test]
    fn test_login_request_requires_code() {
        for body in [r#"{}"#, r#"{"code": ""}"#, r#"{"code": "   "}"#, r#"{"code": null}"#] {
            let request: KakaoLoginRequest = serde_json::from_str(body).unwrap();
            let errors = request.validate().unwrap_err();

            assert_eq!(validation_message(&errors), AUTHORIZATION_CODE_REQUIRED, "body: {}", body);
        }
    }

    #[test]
    fn test_login_request_with_code() {
        let request: KakaoLoginRequest =
            serde_json::from_str(r#"{"code": "abc123", "redirectUri": "ignored"}"#).unwrap();

        assert!(request.validate().is_ok());
        assert_eq!(request.code.as_deref(), Some("abc123"));
    }
}
