//! User Entity Implementation
//!
//! 카카오 OAuth로 가입한 사용자를 표현하는 엔티티입니다.
//! 최초 로그인 시 생성되고, 이후 로그인에서는 프로바이더 식별자로 조회되며
//! 로그인 흐름에서 삭제되지 않습니다.

use mongodb::bson::DateTime;
use serde::{Deserialize, Serialize};
use crate::config::{AuthProvider, UserRole};
use crate::domain::oauth::OAuthProfile;

/// 사용자 엔티티
///
/// `id`는 저장 시점에 `counters` 시퀀스로 할당되는 숫자 ID이며 이후 변경되지 않습니다.
/// (`provider`, `provider_id`) 조합은 저장소 전체에서 유일합니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    /// 이메일 (카카오 계정 동의 항목, 없을 수 있음)
    #[serde(default)]
    pub email: Option<String>,
    /// 표시 이름 (카카오 닉네임)
    pub name: String,
    /// 프로필 이미지 URL
    #[serde(default)]
    pub profile_image: Option<String>,
    /// 인증 프로바이더
    pub provider: AuthProvider,
    /// 프로바이더가 부여한 사용자 식별자 (카카오 회원번호)
    pub provider_id: String,
    /// 사용자 역할
    pub role: UserRole,
    /// 생성 시간
    pub created_at: DateTime,
    /// 수정 시간
    pub updated_at: DateTime,
}

impl User {
    /// 새 OAuth 사용자 생성
    ///
    /// 프로바이더에서 검증된 프로필로 `USER` 역할의 사용자를 만듭니다.
    /// ID는 저장소에 저장될 때 할당됩니다.
    pub fn new_oauth(provider: AuthProvider, profile: OAuthProfile) -> Self {
        let now = DateTime::now();

        Self {
            id: None,
            email: profile.email,
            name: profile.name,
            profile_image: profile.profile_image,
            provider,
            provider_id: profile.provider_id,
            role: UserRole::User,
            created_at: now,
            updated_at: now,
        }
    }

    /// ID 문자열로 변환 (JWT `sub` 클레임 값)
    pub fn id_string(&self) -> Option<String> {
        self.id.map(|id| id.to_string())
    }
}
