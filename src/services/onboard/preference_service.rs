//! # 투자 성향 서비스 구현
//!
//! 온보딩 설문 결과를 사용자당 하나의 투자 성향으로 유지합니다.
//! 생성과 갱신은 저장소의 `upsert_for_user` 한 번으로 처리되어, 같은 사용자의
//! 요청이 동시에 들어와도 문서는 하나만 남습니다.

use std::sync::Arc;
use log::info;
use validator::Validate;
use crate::{
    domain::dto::onboard::{PreferenceResponse, SavePreferenceRequest},
    domain::entities::onboard::investment_preference::InvestmentPreference,
    errors::errors::AppError,
    repositories::onboard::PreferenceStore,
    utils::string_utils::validation_message,
};

/// 저장 결과
#[derive(Debug)]
pub struct SavedPreference {
    pub preference: PreferenceResponse,
    /// 새로 생성되었으면 `true`, 기존 문서를 갱신했으면 `false`
    pub created: bool,
}

pub struct PreferenceService {
    preference_store: Arc<dyn PreferenceStore>,
}

impl PreferenceService {
    pub fn new(preference_store: Arc<dyn PreferenceStore>) -> Self {
        Self { preference_store }
    }

    /// 사용자의 최신 투자 성향 조회
    ///
    /// # Errors
    ///
    /// * `AppError::NotFound` - 저장된 투자 성향이 없음
    pub async fn get_latest(&self, user_id: i64) -> Result<PreferenceResponse, AppError> {
        self.preference_store
            .find_latest_by_user_id(user_id)
            .await?
            .map(PreferenceResponse::from)
            .ok_or_else(|| AppError::NotFound("투자 성향 정보가 없습니다".to_string()))
    }

    /// 투자 성향 생성 또는 갱신
    ///
    /// # Errors
    ///
    /// * `AppError::ValidationError` - 요청 값 검증 실패
    pub async fn save(&self, user_id: i64, request: SavePreferenceRequest) -> Result<SavedPreference, AppError> {
        request
            .validate()
            .map_err(|e| AppError::ValidationError(validation_message(&e)))?;

        let investment_type = request.resolved_type();
        let SavePreferenceRequest { risk_score, investment_goal, investment_period, .. } = request;

        let candidate = InvestmentPreference::new(
            user_id,
            investment_type,
            risk_score,
            investment_goal,
            investment_period,
        );
        let (saved, created) = self.preference_store.upsert_for_user(candidate).await?;
        info!(
            "📝 투자 성향 {}: user_id={}, type={:?}",
            if created { "생성" } else { "갱신" },
            user_id,
            saved.investment_type
        );

        Ok(SavedPreference {
            preference: PreferenceResponse::from(saved),
            created,
        })
    }

    /// 사용자의 투자 성향 삭제
    ///
    /// # Errors
    ///
    /// * `AppError::NotFound` - 삭제할 투자 성향이 없음
    pub async fn delete(&self, user_id: i64) -> Result<(), AppError> {
        if !self.preference_store.exists_by_user_id(user_id).await? {
            return Err(AppError::NotFound("투자 성향 정보가 없습니다".to_string()));
        }

        let deleted = self.preference_store.delete_by_user_id(user_id).await?;
        info!("🗑️ 투자 성향 삭제: user_id={}, count={}", user_id, deleted);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::onboard::investment_preference::InvestmentType;
    use crate::repositories::memory::MemoryPreferenceStore;
    use actix_web::rt::task::yield_now;
    use async_trait::async_trait;
    use futures_util::future::join;

    /// 저장소 호출마다 실행을 양보해 MongoDB 왕복 사이의 끼어들기를 흉내 냅니다
    struct YieldingStore {
        inner: MemoryPreferenceStore,
    }

    #[async_trait]
    impl PreferenceStore for YieldingStore {
        async fn find_by_user_id(&self, user_id: i64) -> Result<Option<InvestmentPreference>, AppError> {
            yield_now().await;
            self.inner.find_by_user_id(user_id).await
        }

        async fn find_latest_by_user_id(&self, user_id: i64) -> Result<Option<InvestmentPreference>, AppError> {
            yield_now().await;
            self.inner.find_latest_by_user_id(user_id).await
        }

        async fn exists_by_user_id(&self, user_id: i64) -> Result<bool, AppError> {
            yield_now().await;
            self.inner.exists_by_user_id(user_id).await
        }

        async fn delete_by_user_id(&self, user_id: i64) -> Result<u64, AppError> {
            yield_now().await;
            self.inner.delete_by_user_id(user_id).await
        }

        async fn save(&self, preference: InvestmentPreference) -> Result<InvestmentPreference, AppError> {
            yield_now().await;
            self.inner.save(preference).await
        }

        async fn upsert_for_user(
            &self,
            candidate: InvestmentPreference,
        ) -> Result<(InvestmentPreference, bool), AppError> {
            yield_now().await;
            self.inner.upsert_for_user(candidate).await
        }
    }

    fn request(json: &str) -> SavePreferenceRequest {
        serde_json::from_str(json).unwrap()
    }

    #[actix_web::test]
    async fn test_save_creates_then_updates_single_record() {
        let store = Arc::new(MemoryPreferenceStore::new());
        let service = PreferenceService::new(store.clone());

        let first = service.save(7, request(r#"{"riskScore": 10}"#)).await.unwrap();
        let second = service
            .save(7, request(r#"{"riskScore": 85, "investmentGoal": "노후 준비"}"#))
            .await
            .unwrap();

        assert!(first.created);
        assert!(!second.created);
        assert_eq!(first.preference.id, second.preference.id);
        assert_eq!(second.preference.investment_type, InvestmentType::Aggressive);
        assert_eq!(second.preference.investment_goal.as_deref(), Some("노후 준비"));
        assert_eq!(store.delete_by_user_id(7).await.unwrap(), 1);
    }

    #[actix_web::test]
    async fn test_get_latest_not_found() {
        let service = PreferenceService::new(Arc::new(MemoryPreferenceStore::new()));

        assert!(matches!(service.get_latest(1).await, Err(AppError::NotFound(_))));
    }

    #[actix_web::test]
    async fn test_invalid_score_rejected() {
        let service = PreferenceService::new(Arc::new(MemoryPreferenceStore::new()));

        match service.save(1, request(r#"{"riskScore": -5}"#)).await {
            Err(AppError::ValidationError(message)) => {
                assert_eq!(message, "위험 점수는 0에서 100 사이여야 합니다")
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[actix_web::test]
    async fn test_delete() {
        let service = PreferenceService::new(Arc::new(MemoryPreferenceStore::new()));
        service.save(3, request(r#"{"riskScore": 50}"#)).await.unwrap();

        service.delete(3).await.unwrap();

        assert!(matches!(service.delete(3).await, Err(AppError::NotFound(_))));
        assert!(matches!(service.get_latest(3).await, Err(AppError::NotFound(_))));
    }

    #[actix_web::test]
    async fn test_concurrent_saves_keep_single_record() {
        let store = Arc::new(YieldingStore { inner: MemoryPreferenceStore::new() });
        let service = PreferenceService::new(store.clone());

        let (a, b) = join(
            service.save(1, request(r#"{"riskScore": 30}"#)),
            service.save(1, request(r#"{"riskScore": 70}"#)),
        )
        .await;
        let (a, b) = (a.unwrap(), b.unwrap());

        assert_ne!(a.created, b.created);
        assert_eq!(a.preference.id, b.preference.id);
        assert_eq!(store.delete_by_user_id(1).await.unwrap(), 1);
    }
}
