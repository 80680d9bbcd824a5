//! # 사용자 리포지토리 구현
//!
//! 사용자 엔티티의 데이터 액세스 계층을 담당합니다.
//! 서비스 계층은 [`UserStore`] trait에만 의존하며, 운영 환경에서는 MongoDB 구현
//! [`UserRepository`]를, 로컬 개발과 테스트에서는
//! [`MemoryUserStore`](crate::repositories::memory::MemoryUserStore)를 사용합니다.
//!
//! ## 특징
//!
//! - **명시적 쿼리**: 메서드마다 필터 문서를 직접 작성
//! - **숫자 ID**: `counters` 시퀀스로 `_id` 할당
//! - **데이터 무결성**: (`provider`, `provider_id`) 유니크 인덱스

use std::sync::Arc;
use async_trait::async_trait;
use mongodb::{bson::{doc, DateTime}, options::IndexOptions, Collection, IndexModel};
use crate::{
    config::AuthProvider,
    db::{is_duplicate_key_error, Database},
    domain::entities::users::user::User,
};
use crate::errors::errors::AppError;

/// 사용자 저장소 인터페이스
#[async_trait]
pub trait UserStore: Send + Sync {
    /// ID로 사용자 조회
    async fn find_by_id(&self, id: i64) -> Result<Option<User>, AppError>;

    /// 프로바이더 식별자로 사용자 조회
    async fn find_by_provider_identity(
        &self,
        provider: AuthProvider,
        provider_id: &str,
    ) -> Result<Option<User>, AppError>;

    /// 사용자 저장
    ///
    /// `id`가 없으면 새 ID를 할당해 추가하고, 있으면 기존 문서를 교체하며 `updated_at`을 갱신합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::ConflictError` - 같은 프로바이더 식별자의 사용자가 이미 존재
    /// * `AppError::NotFound` - 교체 대상 ID가 존재하지 않음
    async fn save(&self, user: User) -> Result<User, AppError>;
}

pub const USERS_COLLECTION: &str = "users";

pub struct UserRepository {
    db: Arc<Database>,
}

impl UserRepository {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    fn collection(&self) -> Collection<User> {
        self.db.get_database().collection::<User>(USERS_COLLECTION)
    }

    pub async fn create_indexes(&self) -> Result<(), AppError> {
        // 프로바이더 식별자 유니크 인덱스
        let provider_index = IndexModel::builder()
            .keys(doc! { "provider": 1, "provider_id": 1 })
            .options(IndexOptions::builder()
                .unique(true)
                .name("provider_identity_unique".to_string())
                .build())
            .build();

        // 생성일 인덱스
        let created_at_index = IndexModel::builder()
            .keys(doc! { "created_at": -1 })
            .options(IndexOptions::builder()
                .name("created_at_desc".to_string())
                .build())
            .build();

        self.collection()
            .create_indexes([provider_index, created_at_index])
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}

#[async_trait]
impl UserStore for UserRepository {
    async fn find_by_id(&self, id: i64) -> Result<Option<User>, AppError> {
        self.collection()
            .find_one(doc! { "_id": id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    async fn find_by_provider_identity(
        &self,
        provider: AuthProvider,
        provider_id: &str,
    ) -> Result<Option<User>, AppError> {
        self.collection()
            .find_one(doc! { "provider": provider.as_str(), "provider_id": provider_id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    async fn save(&self, mut user: User) -> Result<User, AppError> {
        match user.id {
            None => {
                user.id = Some(self.db.next_sequence(USERS_COLLECTION).await?);

                self.collection()
                    .insert_one(&user)
                    .await
                    .map_err(|e| {
                        if is_duplicate_key_error(&e) {
                            AppError::ConflictError("이미 가입된 프로바이더 계정입니다".to_string())
                        } else {
                            AppError::DatabaseError(e.to_string())
                        }
                    })?;

                Ok(user)
            }
            Some(id) => {
                user.updated_at = DateTime::now();

                let result = self.collection()
                    .replace_one(doc! { "_id": id }, &user)
                    .await
                    .map_err(|e| AppError::DatabaseError(e.to_string()))?;

                if result.matched_count == 0 {
                    return Err(AppError::NotFound(format!("사용자를 찾을 수 없습니다: {}", id)));
                }

                Ok(user)
            }
        }
    }
}
