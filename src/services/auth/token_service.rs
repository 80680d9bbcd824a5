//! JWT 토큰 관리 서비스 구현
//!
//! HS256으로 서명한 무상태(stateless) 액세스 토큰을 발급하고 검증합니다.
//! 서버는 발급한 토큰을 기록하지 않으며, 유효성은 서명과 만료 시각만으로 판단합니다.
//! 로그아웃은 클라이언트가 토큰을 폐기하는 것으로 끝납니다.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, errors::ErrorKind, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use uuid::Uuid;
use crate::config::JwtConfig;
use crate::domain::token::token::TokenClaims;
use crate::errors::errors::{AppError, ErrorContext};

/// JWT 토큰 관리 서비스
///
/// 생성 시점에 서명 키와 유효 시간을 고정합니다.
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    ttl: Duration,
}

impl TokenService {
    pub fn new(secret: &str, ttl: Duration) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            ttl,
        }
    }

    /// `JWT_SECRET`, `JWT_EXPIRATION_HOURS` 환경 변수로 생성
    pub fn from_env() -> Result<Self, AppError> {
        let secret = JwtConfig::secret()?;
        Ok(Self::new(&secret, Duration::hours(JwtConfig::expiration_hours())))
    }

    /// 사용자 ID를 주체로 하는 액세스 토큰 발급
    ///
    /// # Errors
    ///
    /// * `AppError::InternalError` - 토큰 서명 실패
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// let token = token_service.issue("42")?;
    /// let claims = token_service.verify(&token)?;
    /// assert_eq!(claims.sub, "42");
    /// ```
    pub fn issue(&self, user_id: &str) -> Result<String, AppError> {
        let now = Utc::now();
        let expiration = now + self.ttl;

        let claims = TokenClaims {
            sub: user_id.to_string(),
            iat: now.timestamp(),
            exp: expiration.timestamp(),
            jti: Uuid::new_v4().to_string(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .context("JWT 토큰 생성 실패")
    }

    /// JWT 토큰 검증 및 클레임 추출
    ///
    /// # Errors
    ///
    /// * `AppError::InvalidToken` - 서명 불일치, 형식 오류, 만료
    pub fn verify(&self, token: &str) -> Result<TokenClaims, AppError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;

        decode::<TokenClaims>(token, &self.decoding_key, &validation)
            .map(|token_data| token_data.claims)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => {
                    AppError::InvalidToken("토큰이 만료되었습니다".to_string())
                }
                ErrorKind::InvalidSignature => {
                    AppError::InvalidToken("토큰 서명이 올바르지 않습니다".to_string())
                }
                _ => AppError::InvalidToken(format!("유효하지 않은 토큰입니다: {}", e)),
            })
    }

    /// Bearer 토큰에서 실제 토큰 부분 추출
    ///
    /// HTTP Authorization 헤더의 "Bearer {token}" 형식에서 토큰 부분만을 추출합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::AuthenticationError` - 잘못된 헤더 형식 또는 빈 토큰
    pub fn extract_bearer_token<'a>(&self, auth_header: &'a str) -> Result<&'a str, AppError> {
        match auth_header.strip_prefix("Bearer ") {
            Some(token) if !token.trim().is_empty() => Ok(token.trim()),
            _ => Err(AppError::AuthenticationError("유효하지 않은 인증 헤더 형식입니다".to_string())),
        }
    }
}
