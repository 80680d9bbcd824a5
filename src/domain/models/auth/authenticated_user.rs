use std::future::{ready, Ready};
use actix_web::{Error, FromRequest, HttpMessage, HttpRequest};
use serde::{Deserialize, Serialize};
use crate::errors::errors::AppError;

/// 검증된 JWT 토큰에서 추출된 주체(Principal)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthenticatedUser {
    /// 사용자 고유 ID (토큰의 `sub` 클레임)
    pub user_id: String,
}

impl AuthenticatedUser {
    /// 저장소 조회용 숫자 ID로 변환
    pub fn numeric_id(&self) -> Result<i64, AppError> {
        self.user_id
            .parse::<i64>()
            .map_err(|_| AppError::AuthenticationError("유효하지 않은 사용자 식별자입니다".to_string()))
    }
}

/// ActixWeb FromRequest trait 구현
///
/// 인증 미들웨어가 저장한 주체가 없으면 401 응답을 반환합니다.
impl FromRequest for AuthenticatedUser {
    type Error = Error;
    type Future = Ready<actix_web::Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
        match req.extensions().get::<AuthenticatedUser>() {
            Some(user) => ready(Ok(user.clone())),
            None => ready(Err(AppError::AuthenticationError(
                "인증되지 않은 요청입니다".to_string()
            ).into())),
        }
    }
}

/// 선택적 인증 사용자 추출자
#[derive(Debug, Clone)]
pub struct OptionalUser(pub Option<AuthenticatedUser>);

impl FromRequest for OptionalUser {
    type Error = Error;
    type Future = Ready<actix_web::Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
        let user = req.extensions().get::<AuthenticatedUser>().cloned();
        ready(Ok(OptionalUser(user)))
    }
}
