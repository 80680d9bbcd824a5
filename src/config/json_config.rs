//! JSON 직렬화/역직렬화 설정
//!
//! 요청 본문과 쿼리 문자열의 추출 실패를 `{"error": ...}` 형태의 400 응답으로 통일하고,
//! 응답의 시각 필드를 epoch 숫자가 아닌 ISO-8601 문자열로 내보냅니다.
//!
//! 알 수 없는 요청 필드는 serde 기본 동작대로 무시되며, 선택 필드의 빈 문자열은
//! [`deserialize_optional_string`](crate::utils::string_utils::deserialize_optional_string)
//! 으로 값 없음으로 취급합니다.

use actix_web::{web, HttpRequest};
use mongodb::bson::DateTime;
use serde::Serializer;
use crate::errors::errors::AppError;

/// JSON 요청 본문 최대 크기 (바이트)
pub const JSON_PAYLOAD_LIMIT: usize = 64 * 1024;

/// `web::Json` 추출기 설정
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(JSON_PAYLOAD_LIMIT)
        .error_handler(|err, req: &HttpRequest| {
            log::debug!("JSON 본문 파싱 실패 [{}]: {}", req.path(), err);
            AppError::ValidationError(format!("잘못된 요청 본문입니다: {}", err)).into()
        })
}

/// `web::Query` 추출기 설정
pub fn query_config() -> web::QueryConfig {
    web::QueryConfig::default()
        .error_handler(|err, req: &HttpRequest| {
            log::debug!("쿼리 파라미터 파싱 실패 [{}]: {}", req.path(), err);
            AppError::ValidationError(format!("잘못된 쿼리 파라미터입니다: {}", err)).into()
        })
}

/// BSON 시각을 RFC 3339 문자열로 직렬화합니다
///
/// ```rust,ignore
/// #[derive(Serialize)]
/// struct Response {
///     #[serde(serialize_with = "serialize_iso8601")]
///     created_at: DateTime,
/// }
/// ```
pub fn serialize_iso8601<S>(value: &DateTime, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    let formatted = value
        .try_to_rfc3339_string()
        .map_err(serde::ser::Error::custom)?;
    serializer.serialize_str(&formatted)
}
