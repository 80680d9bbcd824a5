//! 인증 관련 설정
//!
//! 카카오 OAuth, JWT 설정과 인증 프로바이더/역할 열거형을 정의합니다.
//! 모든 값은 환경 변수에서 읽어오며, 민감한 값은 기본값을 두지 않습니다.

use std::env;
use std::time::Duration;
use serde::{Deserialize, Serialize};
use crate::config::Environment;
use crate::errors::errors::AppError;

/// 카카오 OAuth 환경 변수 접근자
pub struct KakaoOAuthConfig;

impl KakaoOAuthConfig {
    pub fn client_id() -> Result<String, AppError> {
        env::var("KAKAO_CLIENT_ID")
            .map_err(|_| AppError::InternalError("KAKAO_CLIENT_ID must be set".to_string()))
    }

    /// 카카오 콘솔에서 Client Secret 사용을 끈 앱은 값이 없습니다.
    pub fn client_secret() -> Option<String> {
        env::var("KAKAO_CLIENT_SECRET")
            .ok()
            .filter(|secret| !secret.trim().is_empty())
    }

    pub fn redirect_uri() -> Result<String, AppError> {
        env::var("KAKAO_REDIRECT_URI")
            .map_err(|_| AppError::InternalError("KAKAO_REDIRECT_URI must be set".to_string()))
    }

    pub fn auth_uri() -> String {
        env::var("KAKAO_AUTH_URI")
            .unwrap_or_else(|_| "https://kauth.kakao.com/oauth/authorize".to_string())
    }

    pub fn token_uri() -> String {
        env::var("KAKAO_TOKEN_URI")
            .unwrap_or_else(|_| "https://kauth.kakao.com/oauth/token".to_string())
    }

    pub fn user_info_uri() -> String {
        env::var("KAKAO_USER_INFO_URI")
            .unwrap_or_else(|_| "https://kapi.kakao.com/v2/user/me".to_string())
    }

    /// 카카오 API 호출 타임아웃 (초)
    pub fn timeout_seconds() -> u64 {
        env::var("KAKAO_TIMEOUT_SECONDS")
            .unwrap_or_else(|_| "10".to_string())
            .parse()
            .unwrap_or(10)
    }
}

/// 카카오 OAuth 클라이언트 설정 묶음
///
/// 환경 변수에서 한 번에 읽어 [`KakaoOAuthClient`](crate::services::auth::KakaoOAuthClient)
/// 생성자에 전달합니다. 테스트에서는 목 서버 주소로 직접 구성합니다.
#[derive(Debug, Clone)]
pub struct KakaoOAuthSettings {
    pub client_id: String,
    pub client_secret: Option<String>,
    pub redirect_uri: String,
    pub auth_uri: String,
    pub token_uri: String,
    pub user_info_uri: String,
    pub timeout: Duration,
}

impl KakaoOAuthSettings {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            client_id: KakaoOAuthConfig::client_id()?,
            client_secret: KakaoOAuthConfig::client_secret(),
            redirect_uri: KakaoOAuthConfig::redirect_uri()?,
            auth_uri: KakaoOAuthConfig::auth_uri(),
            token_uri: KakaoOAuthConfig::token_uri(),
            user_info_uri: KakaoOAuthConfig::user_info_uri(),
            timeout: Duration::from_secs(KakaoOAuthConfig::timeout_seconds()),
        })
    }
}

pub struct JwtConfig;

impl JwtConfig {
    /// JWT 서명 비밀키
    ///
    /// 프로덕션 환경에서는 `JWT_SECRET`이 반드시 설정되어야 합니다.
    pub fn secret() -> Result<String, AppError> {
        Self::secret_for_env(&Environment::current())
    }

    pub fn secret_for_env(environment: &Environment) -> Result<String, AppError> {
        match env::var("JWT_SECRET") {
            Ok(secret) if !secret.is_empty() => Ok(secret),
            _ if *environment == Environment::Production => Err(AppError::InternalError(
                "JWT_SECRET must be set in production".to_string(),
            )),
            _ => {
                log::warn!("JWT_SECRET not set, using default (not secure for production!)");
                Ok("fingrow-dev-secret-key".to_string())
            }
        }
    }

    /// 액세스 토큰 유효 시간 (시간 단위)
    pub fn expiration_hours() -> i64 {
        env::var("JWT_EXPIRATION_HOURS")
            .unwrap_or_else(|_| "1".to_string())
            .parse()
            .unwrap_or(1)
    }
}

/// 인증 프로바이더
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AuthProvider {
    Kakao,
}

impl AuthProvider {
    pub fn as_str(&self) -> &'static str {
        match self {
            AuthProvider::Kakao => "KAKAO",
        }
    }
}

/// 사용자 역할
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserRole {
    User,
    Admin,
}
