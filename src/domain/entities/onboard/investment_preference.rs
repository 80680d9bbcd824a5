//! 투자 성향 엔티티
//!
//! 온보딩 설문 결과로 저장되는 사용자별 투자 성향입니다.
//! 사용자당 하나만 유지되며, 최신 여부는 수정 시각 → 생성 시각 내림차순으로 판단합니다.

use mongodb::bson::DateTime;
use serde::{Deserialize, Serialize};

/// 투자 성향 5단계 분류
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InvestmentType {
    /// 안정형
    Stable,
    /// 안정추구형
    StableSeeking,
    /// 위험중립형
    RiskNeutral,
    /// 적극투자형
    ActiveInvestment,
    /// 공격투자형
    Aggressive,
}

impl InvestmentType {
    /// 0~100 위험 점수를 5단계 성향으로 변환합니다
    pub fn from_risk_score(score: i32) -> Self {
        match score {
            i32::MIN..=20 => InvestmentType::Stable,
            21..=40 => InvestmentType::StableSeeking,
            41..=60 => InvestmentType::RiskNeutral,
            61..=80 => InvestmentType::ActiveInvestment,
            _ => InvestmentType::Aggressive,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            InvestmentType::Stable => "안정형",
            InvestmentType::StableSeeking => "안정추구형",
            InvestmentType::RiskNeutral => "위험중립형",
            InvestmentType::ActiveInvestment => "적극투자형",
            InvestmentType::Aggressive => "공격투자형",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvestmentPreference {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    /// 소유 사용자 ID (users._id)
    pub user_id: i64,
    pub investment_type: InvestmentType,
    /// 설문 위험 점수 (0~100)
    pub risk_score: i32,
    #[serde(default)]
    pub investment_goal: Option<String>,
    #[serde(default)]
    pub investment_period: Option<String>,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

impl InvestmentPreference {
    pub fn new(
        user_id: i64,
        investment_type: InvestmentType,
        risk_score: i32,
        investment_goal: Option<String>,
        investment_period: Option<String>,
    ) -> Self {
        let now = DateTime::now();

        Self {
            id: None,
            user_id,
            investment_type,
            risk_score,
            investment_goal,
            investment_period,
            created_at: now,
            updated_at: now,
        }
    }

    /// 설문 재응답 결과를 반영하고 수정 시각을 갱신합니다
    pub fn apply_survey(
        &mut self,
        investment_type: InvestmentType,
        risk_score: i32,
        investment_goal: Option<String>,
        investment_period: Option<String>,
    ) {
        self.investment_type = investment_type;
        self.risk_score = risk_score;
        self.investment_goal = investment_goal;
        self.investment_period = investment_period;
        self.updated_at = DateTime::now();
    }
}
