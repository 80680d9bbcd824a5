//! # 투자 성향 리포지토리 구현
//!
//! 사용자별 투자 성향 문서를 `investment_preferences` 컬렉션에 저장합니다.
//! `user_id` 유니크 인덱스로 사용자당 하나의 문서만 허용하며, 생성/갱신은
//! [`PreferenceStore::upsert_for_user`] 한 번의 호출로 원자적으로 처리됩니다.
//! 인덱스 이전에 쌓인 중복 데이터가 있어도 "최신" 조회는 정렬 기준을 명시합니다.

use std::sync::Arc;
use async_trait::async_trait;
use log::debug;
use mongodb::{
    bson::{doc, to_bson, DateTime},
    options::{FindOneAndUpdateOptions, FindOneOptions, IndexOptions, ReturnDocument},
    Collection, IndexModel,
};
use crate::{
    db::{is_duplicate_key_error, Database},
    domain::entities::onboard::investment_preference::InvestmentPreference,
};
use crate::errors::errors::{AppError, ErrorContext};

/// 투자 성향 저장소 인터페이스
#[async_trait]
pub trait PreferenceStore: Send + Sync {
    /// 사용자 ID로 투자 성향 조회 (정렬 기준 없음)
    async fn find_by_user_id(&self, user_id: i64) -> Result<Option<InvestmentPreference>, AppError>;

    /// 사용자의 가장 최신 투자 성향 조회
    ///
    /// 수정 시각 내림차순, 같으면 생성 시각 내림차순으로 첫 번째 문서를 반환합니다.
    async fn find_latest_by_user_id(&self, user_id: i64) -> Result<Option<InvestmentPreference>, AppError>;

    async fn exists_by_user_id(&self, user_id: i64) -> Result<bool, AppError>;

    /// 사용자의 투자 성향을 모두 삭제하고 삭제된 개수를 반환합니다
    async fn delete_by_user_id(&self, user_id: i64) -> Result<u64, AppError>;

    /// `id`가 없으면 추가, 있으면 교체
    ///
    /// `updated_at`은 건드리지 않습니다. 갱신 시각은 엔티티의 `apply_survey`가 설정합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::ConflictError` - 같은 사용자의 투자 성향이 이미 존재
    /// * `AppError::NotFound` - 교체 대상 ID가 존재하지 않음
    async fn save(&self, preference: InvestmentPreference) -> Result<InvestmentPreference, AppError>;

    /// 사용자의 투자 성향을 원자적으로 생성하거나 갱신합니다
    ///
    /// 기존 문서가 있으면 설문 값과 `updated_at`만 바꾸고, 없으면 `candidate`를 추가합니다.
    /// 두 번째 반환값은 새로 추가되었는지 여부입니다. 동시에 호출되어도 문서는 하나만 남습니다.
    async fn upsert_for_user(
        &self,
        candidate: InvestmentPreference,
    ) -> Result<(InvestmentPreference, bool), AppError>;
}

pub const PREFERENCES_COLLECTION: &str = "investment_preferences";

pub struct InvestmentPreferenceRepository {
    db: Arc<Database>,
}

impl InvestmentPreferenceRepository {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    fn collection(&self) -> Collection<InvestmentPreference> {
        self.db.get_database().collection::<InvestmentPreference>(PREFERENCES_COLLECTION)
    }

    pub async fn create_indexes(&self) -> Result<(), AppError> {
        let user_index = IndexModel::builder()
            .keys(doc! { "user_id": 1 })
            .options(IndexOptions::builder()
                .unique(true)
                .name("user_unique".to_string())
                .build())
            .build();

        self.collection()
            .create_index(user_index)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}

#[async_trait]
impl PreferenceStore for InvestmentPreferenceRepository {
    async fn find_by_user_id(&self, user_id: i64) -> Result<Option<InvestmentPreference>, AppError> {
        self.collection()
            .find_one(doc! { "user_id": user_id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    async fn find_latest_by_user_id(&self, user_id: i64) -> Result<Option<InvestmentPreference>, AppError> {
        let options = FindOneOptions::builder()
            .sort(latest_first())
            .build();

        self.collection()
            .find_one(doc! { "user_id": user_id })
            .with_options(options)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    async fn exists_by_user_id(&self, user_id: i64) -> Result<bool, AppError> {
        let count = self.collection()
            .count_documents(doc! { "user_id": user_id })
            .limit(1)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(count > 0)
    }

    async fn delete_by_user_id(&self, user_id: i64) -> Result<u64, AppError> {
        let result = self.collection()
            .delete_many(doc! { "user_id": user_id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(result.deleted_count)
    }

    async fn save(&self, mut preference: InvestmentPreference) -> Result<InvestmentPreference, AppError> {
        match preference.id {
            None => {
                preference.id = Some(self.db.next_sequence(PREFERENCES_COLLECTION).await?);

                self.collection()
                    .insert_one(&preference)
                    .await
                    .map_err(|e| {
                        if is_duplicate_key_error(&e) {
                            AppError::ConflictError("이미 투자 성향이 등록된 사용자입니다".to_string())
                        } else {
                            AppError::DatabaseError(e.to_string())
                        }
                    })?;
            }
            Some(id) => {
                let result = self.collection()
                    .replace_one(doc! { "_id": id }, &preference)
                    .await
                    .map_err(|e| AppError::DatabaseError(e.to_string()))?;

                if result.matched_count == 0 {
                    return Err(AppError::NotFound(format!("투자 성향을 찾을 수 없습니다: {}", id)));
                }
            }
        }

        Ok(preference)
    }
    async fn upsert_for_user(
        &self,
        mut candidate: InvestmentPreference,
    ) -> Result<(InvestmentPreference, bool), AppError> {
        let investment_type = to_bson(&candidate.investment_type)
            .context("투자 성향 직렬화 실패")?;
        let update = doc! {
            "$set": {
                "investment_type": investment_type,
                "risk_score": candidate.risk_score,
                "investment_goal": candidate.investment_goal.clone(),
                "investment_period": candidate.investment_period.clone(),
                "updated_at": DateTime::now(),
            }
        };
        let options = FindOneAndUpdateOptions::builder()
            .sort(latest_first())
            .return_document(ReturnDocument::After)
            .build();

        // 갱신 → 없으면 추가 → 동시 추가에 밀렸으면 한 번 더 갱신
        for _ in 0..2 {
            let updated = self.collection()
                .find_one_and_update(doc! { "user_id": candidate.user_id }, update.clone())
                .with_options(options.clone())
                .await
                .map_err(|e| AppError::DatabaseError(e.to_string()))?;

            if let Some(updated) = updated {
                return Ok((updated, false));
            }

            if candidate.id.is_none() {
                candidate.id = Some(self.db.next_sequence(PREFERENCES_COLLECTION).await?);
            }

            match self.collection().insert_one(&candidate).await {
                Ok(_) => return Ok((candidate, true)),
                Err(e) if is_duplicate_key_error(&e) => {
                    debug!("투자 성향 동시 생성 감지, 기존 문서 갱신으로 전환: user_id={}", candidate.user_id);
                }
                Err(e) => return Err(AppError::DatabaseError(e.to_string())),
            }
        }

        Err(AppError::ConflictError(format!(
            "투자 성향 저장 충돌이 반복되었습니다: user_id={}", candidate.user_id
        )))
    }
}

fn latest_first() -> mongodb::bson::Document {
    doc! { "updated_at": -1, "created_at": -1 }
}
