use serde::{Deserialize, Serialize};
use crate::config::{AuthProvider, UserRole};
use crate::domain::entities::users::user::User;

/// 로그아웃 성공 메시지
pub const LOGOUT_MESSAGE: &str = "Successfully logged out";

/// 사용자 응답 DTO
///
/// 로그인 응답의 `user`와 `GET /auth/me` 응답이 같은 구조를 사용합니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: i64,
    pub email: Option<String>,
    pub name: String,
    pub profile_image: Option<String>,
    pub provider: AuthProvider,
    pub role: UserRole,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        let User {
            id,
            email,
            name,
            profile_image,
            provider,
            role,
            ..
        } = user;

        Self {
            id: id.unwrap_or_default(),
            email,
            name,
            profile_image,
            provider,
            role,
        }
    }
}

/// 로그인 응답 DTO
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub access_token: String,
    pub user: UserResponse,
}

impl LoginResponse {
    pub fn new(user: User, access_token: String) -> Self {
        Self {
            access_token,
            user: UserResponse::from(user),
        }
    }
}

/// 단순 메시지 응답
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn logged_out() -> Self {
        Self { message: LOGOUT_MESSAGE.to_string() }
    }
}

/// 인가 코드 전달 응답
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KakaoCodeResponse {
    pub code: String,
}

/// 카카오 로그인 페이지 URL 응답
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KakaoLoginUrlResponse {
    /// 클라이언트가 브라우저를 리다이렉트할 카카오 인가 페이지 URL
    pub login_url: String,
}
