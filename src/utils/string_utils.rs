//! # 문자열 유틸리티
//!
//! 요청 DTO와 외부 프로바이더 응답 정규화에 쓰이는 공통 유틸리티 함수들입니다.

use serde::Deserialize;
use validator::ValidationErrors;

/// 선택적 문자열 정리 (빈 문자열이나 공백만 있으면 None)
pub fn clean_optional_string(value: Option<String>) -> Option<String> {
    value.and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}

/// serde 역직렬화용 선택적 문자열 필드 처리기
///
/// 빈 문자열을 값 없음으로 받아들입니다. 필드 자체가 빠진 경우를 위해
/// `#[serde(default)]`와 함께 사용해야 합니다.
pub fn deserialize_optional_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(clean_optional_string(opt))
}

/// 검증 에러에서 클라이언트에 보여줄 첫 번째 메시지를 꺼냅니다
///
/// 필드명 접두사 없이 `#[validate(..., message = "...")]`에 지정한 문구만 반환합니다.
pub fn validation_message(errors: &ValidationErrors) -> String {
    let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
    fields.sort_by(|a, b| a.0.cmp(&b.0));

    fields
        .into_iter()
        .flat_map(|(_, errs)| errs.iter())
        .find_map(|err| err.message.as_ref().map(|m| m.to_string()))
        .unwrap_or_else(|| errors.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[test]
    fn test_clean_optional_string() {
        assert_eq!(clean_optional_string(Some("Hello".to_string())), Some("Hello".to_string()));
        assert_eq!(clean_optional_string(Some("  World  ".to_string())), Some("World".to_string()));
        assert_eq!(clean_optional_string(Some("".to_string())), None);
        assert_eq!(clean_optional_string(Some("   ".to_string())), None);
        assert_eq!(clean_optional_string(None), None);
    }

    #[test]
    fn test_deserialize_optional_string() {
        #[derive(Deserialize)]
        struct TestStruct {
            #[serde(default, deserialize_with = "deserialize_optional_string")]
            optional_field: Option<String>,
        }

        // 유효한 문자열 - 공백이 제거되고 Some 반환
        let json = r#"{"optional_field": "  Hello World  "}"#;
        let result: TestStruct = serde_json::from_str(json).unwrap();
        assert_eq!(result.optional_field, Some("Hello World".to_string()));

        // 빈 문자열 - None 반환
        let json = r#"{"optional_field": ""}"#;
        let result: TestStruct = serde_json::from_str(json).unwrap();
        assert_eq!(result.optional_field, None);

        // null - None 반환
        let json = r#"{"optional_field": null}"#;
        let result: TestStruct = serde_json::from_str(json).unwrap();
        assert_eq!(result.optional_field, None);

        // 필드 없음 - None 반환
        let result: TestStruct = serde_json::from_str("{}").unwrap();
        assert_eq!(result.optional_field, None);
    }

    #[test]
    fn test_validation_message_uses_custom_message() {
        #[derive(Validate)]
        struct Sample {
            #[validate(range(min = 0, max = 100, message = "점수는 0에서 100 사이여야 합니다"))]
            score: i32,
        }

        let errors = Sample { score: 101 }.validate().unwrap_err();

        assert_eq!(validation_message(&errors), "점수는 0에서 100 사이여야 합니다");
    }
}
