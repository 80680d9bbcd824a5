//! # 카카오 OAuth 교환 클라이언트
//!
//! 카카오 인가 코드를 검증된 사용자 프로필로 교환합니다.
//!
//! ## Authorization Code 교환 흐름
//!
//! ```text
//! ┌──────────┐        ┌──────────────┐        ┌──────────────────┐
//! │ 클라이언트 │        │   우리 서버   │        │   카카오 OAuth    │
//! └────┬─────┘        └──────┬───────┘        └────────┬─────────┘
//!      │ POST /auth/kakao    │                         │
//!      │ {code}              │                         │
//!      ├────────────────────►│ POST /oauth/token       │
//!      │                     ├────────────────────────►│ kauth.kakao.com
//!      │                     │ {access_token}          │
//!      │                     │◄────────────────────────┤
//!      │                     │ GET /v2/user/me         │
//!      │                     ├────────────────────────►│ kapi.kakao.com
//!      │                     │ {id, kakao_account}     │
//!      │                     │◄────────────────────────┤
//!      │ {accessToken, user} │                         │
//!      │◄────────────────────┤                         │
//! ```
//!
//! 인가 코드는 한 번만 사용할 수 있으며, 재사용하면 카카오가 `invalid_grant`(KOE320)를 반환합니다.
//! 모든 실패(빈 코드, 만료/재사용 코드, 2xx 이외 응답, 파싱 실패, 타임아웃)는
//! `AppError::AuthExchangeError`로 변환되며 재시도하지 않습니다.

use async_trait::async_trait;
use log::{debug, warn};
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use crate::config::KakaoOAuthSettings;
use crate::domain::oauth::kakao_oauth_model::kakao_user::{KakaoErrorResponse, KakaoTokenResponse, KakaoUserInfo};
use crate::domain::oauth::OAuthProfile;
use crate::errors::errors::{AppError, ErrorContext};

/// 인가 코드 교환 인터페이스
///
/// 엔드포인트 테스트에서는 네트워크 없이 동작하는 구현으로 교체합니다.
#[async_trait]
pub trait OAuthExchangeClient: Send + Sync {
    /// 인가 코드를 프로바이더 프로필로 교환합니다
    ///
    /// # Errors
    ///
    /// * `AppError::AuthExchangeError` - 교환 과정의 모든 실패
    async fn exchange_code(&self, code: &str) -> Result<OAuthProfile, AppError>;

    /// 사용자를 보낼 프로바이더 인가 페이지 URL
    fn authorize_url(&self) -> String;
}

/// `reqwest` 기반 카카오 OAuth 클라이언트
pub struct KakaoOAuthClient {
    http: Client,
    settings: KakaoOAuthSettings,
}

impl KakaoOAuthClient {
    pub fn new(settings: KakaoOAuthSettings) -> Result<Self, AppError> {
        let http = Client::builder()
            .timeout(settings.timeout)
            .build()
            .context("HTTP 클라이언트 생성 실패")?;

        Ok(Self { http, settings })
    }

    /// 인가 코드를 카카오 액세스 토큰으로 교환
    ///
    /// ```text
    /// POST https://kauth.kakao.com/oauth/token
    /// Content-Type: application/x-www-form-urlencoded
    ///
    /// grant_type=authorization_code&client_id=...&redirect_uri=...&code=...[&client_secret=...]
    /// ```
    async fn request_token(&self, code: &str) -> Result<KakaoTokenResponse, AppError> {
        let mut params: Vec<(&str, &str)> = vec![
            ("grant_type", "authorization_code"),
            ("client_id", self.settings.client_id.as_str()),
            ("redirect_uri", self.settings.redirect_uri.as_str()),
            ("code", code),
        ];
        if let Some(secret) = &self.settings.client_secret {
            params.push(("client_secret", secret.as_str()));
        }

        let response = self.http
            .post(&self.settings.token_uri)
            .form(&params)
            .send()
            .await
            .map_err(|e| transport_error("토큰 요청", e))?;

        read_json(response, "토큰 교환").await
    }

    /// 카카오 액세스 토큰으로 사용자 정보 조회
    async fn request_user_info(&self, access_token: &str) -> Result<KakaoUserInfo, AppError> {
        let response = self.http
            .get(&self.settings.user_info_uri)
            .bearer_auth(access_token)
            .send()
            .await
            .map_err(|e| transport_error("사용자 정보 요청", e))?;

        read_json(response, "사용자 정보 조회").await
    }
}

#[async_trait]
impl OAuthExchangeClient for KakaoOAuthClient {
    async fn exchange_code(&self, code: &str) -> Result<OAuthProfile, AppError> {
        let code = code.trim();
        if code.is_empty() {
            return Err(AppError::AuthExchangeError("인가 코드가 비어 있습니다".to_string()));
        }

        let token = self.request_token(code).await?;
        debug!("카카오 토큰 교환 성공 (expires_in: {}s)", token.expires_in);

        let user_info = self.request_user_info(&token.access_token).await?;

        Ok(user_info.into_profile())
    }

    /// ```text
    /// https://kauth.kakao.com/oauth/authorize?client_id=...&redirect_uri=...&response_type=code
    /// ```
    fn authorize_url(&self) -> String {
        let params = [
            ("client_id", self.settings.client_id.as_str()),
            ("redirect_uri", self.settings.redirect_uri.as_str()),
            ("response_type", "code"),
        ];

        let query_string = params
            .iter()
            .map(|(k, v)| format!("{}={}", k, urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&");

        format!("{}?{}", self.settings.auth_uri, query_string)
    }
}

fn transport_error(stage: &str, error: reqwest::Error) -> AppError {
    if error.is_timeout() {
        warn!("⏱️ 카카오 {} 시간 초과", stage);
        AppError::AuthExchangeError(format!("카카오 {} 시간 초과", stage))
    } else {
        AppError::AuthExchangeError(format!("카카오 {} 실패: {}", stage, error))
    }
}

/// 2xx 응답은 `T`로, 그 외에는 카카오 에러 본문을 해석해 에러로 변환합니다
async fn read_json<T: DeserializeOwned>(response: Response, stage: &str) -> Result<T, AppError> {
    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| transport_error(stage, e))?;

    if !status.is_success() {
        let detail = serde_json::from_str::<KakaoErrorResponse>(&body)
            .map(|error| error.describe())
            .unwrap_or_else(|_| body.clone());

        warn!("❌ 카카오 {} 실패 ({}): {}", stage, status.as_u16(), detail);
        return Err(AppError::AuthExchangeError(format!(
            "카카오 {} 실패 ({}): {}", stage, status.as_u16(), detail
        )));
    }

    serde_json::from_str::<T>(&body)
        .map_err(|e| AppError::AuthExchangeError(format!("카카오 {} 응답 파싱 실패: {}", stage, e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use httpmock::prelude::*;

    const TOKEN_BODY: &str = r#"{"access_token":"kakao-access","token_type":"bearer","expires_in":21599,"refresh_token":"kakao-refresh","refresh_token_expires_in":5183999}"#;
    const USER_BODY: &str = r#"{"id":3141592,"kakao_account":{"email":"user@example.com","is_email_valid":true,"profile":{"nickname":"홍길동"}}}"#;

    fn settings(server: &MockServer, timeout: Duration) -> KakaoOAuthSettings {
        KakaoOAuthSettings {
            client_id: "test-client".to_string(),
            client_secret: None,
            redirect_uri: "http://localhost:3000/auth/kakao/callback".to_string(),
            auth_uri: server.url("/oauth/authorize"),
            token_uri: server.url("/oauth/token"),
            user_info_uri: server.url("/v2/user/me"),
            timeout,
        }
    }

    fn client(server: &MockServer) -> KakaoOAuthClient {
        KakaoOAuthClient::new(settings(server, Duration::from_secs(5))).unwrap()
    }

    #[actix_web::test]
    async fn test_exchange_code_success() {
        let server = MockServer::start_async().await;
        let token_mock = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/oauth/token")
                    .header("content-type", "application/x-www-form-urlencoded");
                then.status(200)
                    .header("content-type", "application/json")
                    .body(TOKEN_BODY);
            })
            .await;
        let user_mock = server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/v2/user/me")
                    .header("authorization", "Bearer kakao-access");
                then.status(200)
                    .header("content-type", "application/json")
                    .body(USER_BODY);
            })
            .await;

        let profile = client(&server).exchange_code("abc123").await.unwrap();

        token_mock.assert_async().await;
        user_mock.assert_async().await;
        assert_eq!(profile.provider_id, "3141592");
        assert_eq!(profile.name, "홍길동");
        assert_eq!(profile.email.as_deref(), Some("user@example.com"));
    }

    #[actix_web::test]
    async fn test_consumed_code_is_exchange_error() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/oauth/token");
                then.status(400)
                    .header("content-type", "application/json")
                    .body(r#"{"error":"invalid_grant","error_description":"authorization code not found for code=abc123","error_code":"KOE320"}"#);
            })
            .await;

        let error = client(&server).exchange_code("abc123").await.unwrap_err();

        match error {
            AppError::AuthExchangeError(message) => {
                assert!(message.contains("KOE320"), "message: {}", message);
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[actix_web::test]
    async fn test_user_info_failure_is_exchange_error() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/oauth/token");
                then.status(200).body(TOKEN_BODY);
            })
            .await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/v2/user/me");
                then.status(401).body(r#"{"msg":"this access token does not exist","code":-401}"#);
            })
            .await;

        let result = client(&server).exchange_code("abc123").await;

        assert!(matches!(result, Err(AppError::AuthExchangeError(_))));
    }

    #[actix_web::test]
    async fn test_unparseable_body_is_exchange_error() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/oauth/token");
                then.status(200).body("<html>oops</html>");
            })
            .await;

        let result = client(&server).exchange_code("abc123").await;

        assert!(matches!(result, Err(AppError::AuthExchangeError(_))));
    }

    #[actix_web::test]
    async fn test_timeout_is_exchange_error() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/oauth/token");
                then.status(200).body(TOKEN_BODY).delay(Duration::from_secs(2));
            })
            .await;
        let client = KakaoOAuthClient::new(settings(&server, Duration::from_millis(200))).unwrap();

        let result = client.exchange_code("abc123").await;

        assert!(matches!(result, Err(AppError::AuthExchangeError(_))));
    }

    #[actix_web::test]
    async fn test_empty_code_skips_network() {
        let server = MockServer::start_async().await;

        let result = client(&server).exchange_code("  ").await;

        match result {
            Err(AppError::AuthExchangeError(message)) => assert_eq!(message, "인가 코드가 비어 있습니다"),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_authorize_url_is_encoded() {
        let server = MockServer::start();
        let url = client(&server).authorize_url();

        assert!(url.starts_with(&server.url("/oauth/authorize?")));
        assert!(url.contains("client_id=test-client"));
        assert!(url.contains("redirect_uri=http%3A%2F%2Flocalhost%3A3000%2Fauth%2Fkakao%2Fcallback"));
        assert!(url.ends_with("response_type=code"));
    }
}
