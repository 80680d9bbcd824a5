//! # 카카오 로그인 서비스
//!
//! 인가 코드 교환 결과로 사용자를 찾거나 새로 만듭니다.
//!
//! ```text
//! 인가 코드 ─► OAuthExchangeClient::exchange_code ─► OAuthProfile
//!                                                      │
//!                          (KAKAO, provider_id)로 사용자 조회
//!                                                      │
//!                      ├─ 있음 ──► 기존 사용자 그대로 반환
//!                      └─ 없음 ──► USER 역할로 생성
//!                                    └─ 동시 가입 충돌 ──► 먼저 저장된 사용자 재조회
//! ```

use std::sync::Arc;
use log::{info, warn};
use crate::{
    config::AuthProvider,
    domain::dto::users::request::AUTHORIZATION_CODE_REQUIRED,
    domain::entities::users::user::User,
    errors::errors::AppError,
    repositories::users::UserStore,
    services::auth::OAuthExchangeClient,
};

pub struct KakaoAuthService {
    oauth_client: Arc<dyn OAuthExchangeClient>,
    user_store: Arc<dyn UserStore>,
}

impl KakaoAuthService {
    pub fn new(oauth_client: Arc<dyn OAuthExchangeClient>, user_store: Arc<dyn UserStore>) -> Self {
        Self { oauth_client, user_store }
    }

    /// 카카오 로그인 페이지 URL
    pub fn login_url(&self) -> String {
        self.oauth_client.authorize_url()
    }

    /// 인가 코드로 로그인 처리
    ///
    /// # Errors
    ///
    /// * `AppError::ValidationError` - 빈 인가 코드
    /// * `AppError::AuthExchangeError` - 카카오 교환 실패
    /// * `AppError::DatabaseError` - 저장소 오류
    pub async fn process_login(&self, code: &str) -> Result<User, AppError> {
        if code.trim().is_empty() {
            return Err(AppError::ValidationError(AUTHORIZATION_CODE_REQUIRED.to_string()));
        }

        let profile = self.oauth_client.exchange_code(code).await?;
        let provider_id = profile.provider_id.clone();

        if let Some(existing) = self.user_store
            .find_by_provider_identity(AuthProvider::Kakao, &provider_id)
            .await?
        {
            info!("🔑 카카오 사용자 로그인: id={:?}", existing.id);
            return Ok(existing);
        }

        match self.user_store.save(User::new_oauth(AuthProvider::Kakao, profile)).await {
            Ok(created) => {
                info!("🆕 새 카카오 사용자 등록: id={:?}", created.id);
                Ok(created)
            }
            Err(AppError::ConflictError(_)) => {
                // 같은 계정의 동시 로그인이 먼저 저장한 사용자를 사용
                warn!("⚠️ 카카오 사용자 동시 가입 충돌, 기존 사용자 재조회: {}", provider_id);
                self.user_store
                    .find_by_provider_identity(AuthProvider::Kakao, &provider_id)
                    .await?
                    .ok_or_else(|| AppError::InternalError(
                        "충돌한 카카오 사용자를 찾을 수 없습니다".to_string()
                    ))
            }
            Err(e) => Err(e),
        }
    }
}
