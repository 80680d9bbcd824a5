//! # 사용자 조회 서비스 구현
//!
//! 인증된 주체(Principal)의 사용자 정보를 응답 DTO로 변환해 제공합니다.
//! 로그인 응답의 `user`와 `GET /auth/me` 응답은 같은 [`UserResponse`] 구조를 사용합니다.

use std::sync::Arc;
use crate::{
    domain::dto::users::response::UserResponse,
    errors::errors::AppError,
    repositories::users::UserStore,
};

pub struct UserService {
    user_store: Arc<dyn UserStore>,
}

impl UserService {
    pub fn new(user_store: Arc<dyn UserStore>) -> Self {
        Self { user_store }
    }

    /// 사용자 ID로 사용자 정보 조회
    ///
    /// # Errors
    ///
    /// * `Err(AppError::NotFound)` - 해당 ID의 사용자가 존재하지 않음
    pub async fn get_user_by_id(&self, id: i64) -> Result<UserResponse, AppError> {
        let user = self.user_store
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("사용자를 찾을 수 없습니다".to_string()))?;

        Ok(UserResponse::from(user))
    }
}
