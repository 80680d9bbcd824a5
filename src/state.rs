//! # 애플리케이션 상태
//!
//! 서비스 인스턴스를 생성자 주입으로 조립해 `web::Data`로 공유합니다.
//!
//! ```text
//! UserStore ─────────┬─► UserService
//!                    └─► KakaoAuthService ◄── OAuthExchangeClient
//! PreferenceStore ───► PreferenceService
//! TokenService (서명 키, TTL) ─► 핸들러, AuthMiddleware
//! ```

use std::sync::Arc;
use log::info;
use crate::{
    config::{KakaoOAuthSettings, StorageBackend, StorageConfig},
    db::Database,
    errors::errors::AppError,
    repositories::{
        memory::{MemoryPreferenceStore, MemoryUserStore},
        onboard::{InvestmentPreferenceRepository, PreferenceStore},
        users::{UserRepository, UserStore},
    },
    services::{
        auth::{KakaoAuthService, KakaoOAuthClient, OAuthExchangeClient, TokenService},
        onboard::PreferenceService,
        users::UserService,
    },
};

/// 모든 워커가 공유하는 서비스 묶음
#[derive(Clone)]
pub struct AppState {
    pub token_service: Arc<TokenService>,
    pub kakao_auth: Arc<KakaoAuthService>,
    pub user_service: Arc<UserService>,
    pub preference_service: Arc<PreferenceService>,
}

impl AppState {
    pub fn new(
        user_store: Arc<dyn UserStore>,
        preference_store: Arc<dyn PreferenceStore>,
        oauth_client: Arc<dyn OAuthExchangeClient>,
        token_service: Arc<TokenService>,
    ) -> Self {
        Self {
            token_service,
            kakao_auth: Arc::new(KakaoAuthService::new(oauth_client, user_store.clone())),
            user_service: Arc::new(UserService::new(user_store)),
            preference_service: Arc::new(PreferenceService::new(preference_store)),
        }
    }

    /// 환경 변수 설정으로 저장소와 외부 클라이언트를 골라 조립합니다
    ///
    /// `DATA_STORE=mongodb`이면 MongoDB에 연결하고 인덱스를 생성합니다.
    pub async fn from_env() -> Result<Self, AppError> {
        let (user_store, preference_store): (Arc<dyn UserStore>, Arc<dyn PreferenceStore>) =
            match StorageConfig::backend() {
                StorageBackend::MongoDb => {
                    let database = Arc::new(Database::new().await?);

                    let user_repo = UserRepository::new(database.clone());
                    user_repo.create_indexes().await?;

                    let preference_repo = InvestmentPreferenceRepository::new(database);
                    preference_repo.create_indexes().await?;

                    info!("🗄️ 저장소: MongoDB");
                    let user_store: Arc<dyn UserStore> = Arc::new(user_repo);
                    let preference_store: Arc<dyn PreferenceStore> = Arc::new(preference_repo);
                    (user_store, preference_store)
                }
                StorageBackend::Memory => {
                    info!("🧪 저장소: 인메모리 (재시작 시 데이터가 사라집니다)");
                    let user_store: Arc<dyn UserStore> = Arc::new(MemoryUserStore::new());
                    let preference_store: Arc<dyn PreferenceStore> = Arc::new(MemoryPreferenceStore::new());
                    (user_store, preference_store)
                }
            };

        let oauth_client = Arc::new(KakaoOAuthClient::new(KakaoOAuthSettings::from_env()?)?);
        let token_service = Arc::new(TokenService::from_env()?);

        Ok(Self::new(user_store, preference_store, oauth_client, token_service))
    }
}
