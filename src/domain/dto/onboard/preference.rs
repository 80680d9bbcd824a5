use mongodb::bson::DateTime;
use serde::{Deserialize, Serialize};
use validator::Validate;
use crate::config::json_config::serialize_iso8601;
use crate::domain::entities::onboard::investment_preference::{InvestmentPreference, InvestmentType};
use crate::utils::string_utils::deserialize_optional_string;

/// 투자 성향 저장 요청
///
/// `investmentType`을 생략하면 `riskScore`로부터 성향을 산출합니다.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SavePreferenceRequest {
    #[validate(range(min = 0, max = 100, message = "위험 점수는 0에서 100 사이여야 합니다"))]
    pub risk_score: i32,

    #[serde(default)]
    pub investment_type: Option<InvestmentType>,

    #[serde(default, deserialize_with = "deserialize_optional_string")]
    #[validate(length(max = 200, message = "투자 목표는 200자 이하여야 합니다"))]
    pub investment_goal: Option<String>,

    #[serde(default, deserialize_with = "deserialize_optional_string")]
    #[validate(length(max = 50, message = "투자 기간은 50자 이하여야 합니다"))]
    pub investment_period: Option<String>,
}

impl SavePreferenceRequest {
    pub fn resolved_type(&self) -> InvestmentType {
        self.investment_type
            .unwrap_or_else(|| InvestmentType::from_risk_score(self.risk_score))
    }
}

/// 투자 성향 응답
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PreferenceResponse {
    pub id: i64,
    pub user_id: i64,
    pub investment_type: InvestmentType,
    pub investment_type_name: &'static str,
    pub risk_score: i32,
    pub investment_goal: Option<String>,
    pub investment_period: Option<String>,
    #[serde(serialize_with = "serialize_iso8601")]
    pub created_at: DateTime,
    #[serde(serialize_with = "serialize_iso8601")]
    pub updated_at: DateTime,
}

impl From<InvestmentPreference> for PreferenceResponse {
    fn from(preference: InvestmentPreference) -> Self {
        Self {
            id: preference.id.unwrap_or_default(),
            user_id: preference.user_id,
            investment_type: preference.investment_type,
            investment_type_name: preference.investment_type.display_name(),
            risk_score: preference.risk_score,
            investment_goal: preference.investment_goal,
            investment_period: preference.investment_period,
            created_at: preference.created_at,
            updated_at: preference.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolved_type_prefers_explicit_value() {
        let request: SavePreferenceRequest =
            serde_json::from_str(r#"{"riskScore": 90, "investmentType": "STABLE"}"#).unwrap();
        assert_eq!(request.resolved_type(), InvestmentType::Stable);

        let request: SavePreferenceRequest = serde_json::from_str(r#"{"riskScore": 90}"#).unwrap();
        assert_eq!(request.resolved_type(), InvestmentType::Aggressive);
    }

    #[test]
    fn test_risk_score_range_validated() {
        let request: SavePreferenceRequest = serde_json::from_str(r#"{"riskScore": 150}"#).unwrap();

        assert!(request.validate().is_err());
    }

    #[test]
    fn test_response_uses_iso_timestamps() {
        let mut preference = InvestmentPreference::new(3, InvestmentType::RiskNeutral, 50, None, Some("".into()));
        preference.id = Some(9);
        preference.created_at = DateTime::from_millis(0);

        let json = serde_json::to_value(PreferenceResponse::from(preference)).unwrap();

        assert_eq!(json["id"], 9);
        assert_eq!(json["userId"], 3);
        assert_eq!(json["investmentType"], "RISK_NEUTRAL");
        assert_eq!(json["investmentTypeName"], "위험중립형");
        assert_eq!(json["createdAt"], "1970-01-01T00:00:00Z");
    }
}
