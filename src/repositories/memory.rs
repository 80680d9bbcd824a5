//! 인메모리 저장소 구현
//!
//! `DATA_STORE=memory`로 실행하는 로컬 개발 환경과 테스트에서 사용합니다.
//! MongoDB 구현과 같은 규칙을 지킵니다.
//!
//! - ID는 저장소별 카운터로 1부터 할당
//! - (`provider`, `provider_id`) 중복 추가는 `ConflictError`
//! - 사용자당 투자 성향은 하나이며, 생성/갱신은 쓰기 잠금 한 번 안에서 처리
//! - 최신 투자 성향은 수정 시각 → 생성 시각 내림차순

use std::collections::HashMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use async_trait::async_trait;
use mongodb::bson::DateTime;
use crate::{
    config::AuthProvider,
    domain::entities::{
        onboard::investment_preference::InvestmentPreference,
        users::user::User,
    },
    errors::errors::AppError,
    repositories::{onboard::PreferenceStore, users::UserStore},
};

struct Table<T> {
    next_id: i64,
    rows: HashMap<i64, T>,
}

impl<T> Default for Table<T> {
    fn default() -> Self {
        Self { next_id: 1, rows: HashMap::new() }
    }
}

impl<T> Table<T> {
    fn allocate_id(&mut self) -> i64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }
}

fn read<T>(lock: &RwLock<T>) -> Result<RwLockReadGuard<'_, T>, AppError> {
    lock.read()
        .map_err(|_| AppError::InternalError("인메모리 저장소 잠금 실패".to_string()))
}

fn write<T>(lock: &RwLock<T>) -> Result<RwLockWriteGuard<'_, T>, AppError> {
    lock.write()
        .map_err(|_| AppError::InternalError("인메모리 저장소 잠금 실패".to_string()))
}

/// 프로세스 메모리에 사용자를 보관하는 [`UserStore`]
#[derive(Default)]
pub struct MemoryUserStore {
    table: RwLock<Table<User>>,
}

impl MemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn find_by_id(&self, id: i64) -> Result<Option<User>, AppError> {
        Ok(read(&self.table)?.rows.get(&id).cloned())
    }

    async fn find_by_provider_identity(
        &self,
        provider: AuthProvider,
        provider_id: &str,
    ) -> Result<Option<User>, AppError> {
        let table = read(&self.table)?;

        Ok(table
            .rows
            .values()
            .find(|user| user.provider == provider && user.provider_id == provider_id)
            .cloned())
    }

    async fn save(&self, mut user: User) -> Result<User, AppError> {
        let mut table = write(&self.table)?;

        // 유니크 인덱스와 같은 검사 (자기 자신은 제외)
        let duplicated = table.rows.values().any(|existing| {
            existing.provider == user.provider
                && existing.provider_id == user.provider_id
                && existing.id != user.id
        });
        if duplicated {
            return Err(AppError::ConflictError("이미 가입된 프로바이더 계정입니다".to_string()));
        }

        match user.id {
            None => {
                let id = table.allocate_id();
                user.id = Some(id);
                table.rows.insert(id, user.clone());
            }
            Some(id) => {
                if !table.rows.contains_key(&id) {
                    return Err(AppError::NotFound(format!("사용자를 찾을 수 없습니다: {}", id)));
                }
                user.updated_at = DateTime::now();
                table.rows.insert(id, user.clone());
            }
        }

        Ok(user)
    }
}

/// 프로세스 메모리에 투자 성향을 보관하는 [`PreferenceStore`]
#[derive(Default)]
pub struct MemoryPreferenceStore {
    table: RwLock<Table<InvestmentPreference>>,
}

impl MemoryPreferenceStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PreferenceStore for MemoryPreferenceStore {
    async fn find_by_user_id(&self, user_id: i64) -> Result<Option<InvestmentPreference>, AppError> {
        let table = read(&self.table)?;

        Ok(table.rows.values().find(|p| p.user_id == user_id).cloned())
    }

    async fn find_latest_by_user_id(&self, user_id: i64) -> Result<Option<InvestmentPreference>, AppError> {
        let table = read(&self.table)?;

        Ok(latest_for_user(&table, user_id).cloned())
    }

    async fn exists_by_user_id(&self, user_id: i64) -> Result<bool, AppError> {
        Ok(read(&self.table)?.rows.values().any(|p| p.user_id == user_id))
    }

    async fn delete_by_user_id(&self, user_id: i64) -> Result<u64, AppError> {
        let mut table = write(&self.table)?;
        let before = table.rows.len();

        table.rows.retain(|_, p| p.user_id != user_id);

        Ok((before - table.rows.len()) as u64)
    }

    async fn save(&self, mut preference: InvestmentPreference) -> Result<InvestmentPreference, AppError> {
        let mut table = write(&self.table)?;

        let duplicated = table.rows.values().any(|existing| {
            existing.user_id == preference.user_id && existing.id != preference.id
        });
        if duplicated {
            return Err(AppError::ConflictError("이미 투자 성향이 등록된 사용자입니다".to_string()));
        }

        match preference.id {
            None => {
                let id = table.allocate_id();
                preference.id = Some(id);
                table.rows.insert(id, preference.clone());
            }
            Some(id) => {
                if !table.rows.contains_key(&id) {
                    return Err(AppError::NotFound(format!("투자 성향을 찾을 수 없습니다: {}", id)));
                }
                table.rows.insert(id, preference.clone());
            }
        }

        Ok(preference)
    }

    async fn upsert_for_user(
        &self,
        mut candidate: InvestmentPreference,
    ) -> Result<(InvestmentPreference, bool), AppError> {
        let mut table = write(&self.table)?;

        let latest_id = latest_for_user(&table, candidate.user_id).and_then(|p| p.id);
        if let Some(existing) = latest_id.and_then(|id| table.rows.get_mut(&id)) {
            existing.apply_survey(
                candidate.investment_type,
                candidate.risk_score,
                candidate.investment_goal,
                candidate.investment_period,
            );
            return Ok((existing.clone(), false));
        }

        let id = table.allocate_id();
        candidate.id = Some(id);
        table.rows.insert(id, candidate.clone());

        Ok((candidate, true))
    }
}

fn latest_for_user(table: &Table<InvestmentPreference>, user_id: i64) -> Option<&InvestmentPreference> {
    table
        .rows
        .values()
        .filter(|p| p.user_id == user_id)
        .max_by_key(|p| (p.updated_at, p.created_at, p.id))
}
