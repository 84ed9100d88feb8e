// ==========================================
// 学習計画管理システム - ドメイン型定義
// ==========================================
// ステータス・レベル系の列挙型を一元管理
// シリアライズ形式: SCREAMING_SNAKE_CASE (永続化層と一致)
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::i18n;

// ==========================================
// 学習計画ステータス (Study Plan Status)
// ==========================================
// 遷移規則はエンティティ側で強制する
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StudyPlanStatus {
    Active,    // 実施中
    Completed, // 完了
    Paused,    // 一時停止
    Cancelled, // キャンセル
}

impl fmt::Display for StudyPlanStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_code())
    }
}

impl StudyPlanStatus {
    /// 文字列コードから解析する
    pub fn from_code(s: &str) -> Option<Self> {
        match s.to_uppercase().as_str() {
            "ACTIVE" => Some(StudyPlanStatus::Active),
            "COMPLETED" => Some(StudyPlanStatus::Completed),
            "PAUSED" => Some(StudyPlanStatus::Paused),
            "CANCELLED" => Some(StudyPlanStatus::Cancelled),
            _ => None,
        }
    }

    /// 永続化用の文字列コードへ変換する
    pub fn as_code(&self) -> &'static str {
        match self {
            StudyPlanStatus::Active => "ACTIVE",
            StudyPlanStatus::Completed => "COMPLETED",
            StudyPlanStatus::Paused => "PAUSED",
            StudyPlanStatus::Cancelled => "CANCELLED",
        }
    }

    /// ロケールに応じた表示名
    pub fn display_name(&self) -> String {
        match self {
            StudyPlanStatus::Active => i18n::t("plan_status.active"),
            StudyPlanStatus::Completed => i18n::t("plan_status.completed"),
            StudyPlanStatus::Paused => i18n::t("plan_status.paused"),
            StudyPlanStatus::Cancelled => i18n::t("plan_status.cancelled"),
        }
    }

    /// 終端状態か（以後の遷移を受け付けない状態）
    pub fn is_terminal(&self) -> bool {
        matches!(self, StudyPlanStatus::Completed | StudyPlanStatus::Cancelled)
    }
}

// ==========================================
// 目標難易度 (Goal Difficulty)
// ==========================================
// 順序: VeryEasy < Easy < Medium < Hard < VeryHard
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GoalDifficulty {
    VeryEasy, // とても易しい
    Easy,     // 易しい
    Medium,   // 普通
    Hard,     // 難しい
    VeryHard, // とても難しい
}

impl fmt::Display for GoalDifficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GoalDifficulty::VeryEasy => write!(f, "VERY_EASY"),
            GoalDifficulty::Easy => write!(f, "EASY"),
            GoalDifficulty::Medium => write!(f, "MEDIUM"),
            GoalDifficulty::Hard => write!(f, "HARD"),
            GoalDifficulty::VeryHard => write!(f, "VERY_HARD"),
        }
    }
}

impl GoalDifficulty {
    /// ロケールに応じた表示名
    pub fn display_name(&self) -> String {
        match self {
            GoalDifficulty::VeryEasy => i18n::t("difficulty.very_easy.name"),
            GoalDifficulty::Easy => i18n::t("difficulty.easy.name"),
            GoalDifficulty::Medium => i18n::t("difficulty.medium.name"),
            GoalDifficulty::Hard => i18n::t("difficulty.hard.name"),
            GoalDifficulty::VeryHard => i18n::t("difficulty.very_hard.name"),
        }
    }
}

// ==========================================
// 目標進捗ステータス (Goal Progress Status)
// ==========================================
// 順序: FarBehind < Behind < OnTrack < AlmostDone < Completed
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GoalProgressStatus {
    FarBehind,  // 大幅遅れ
    Behind,     // 遅れ気味
    OnTrack,    // 順調
    AlmostDone, // もう少し
    Completed,  // 達成
}

impl fmt::Display for GoalProgressStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GoalProgressStatus::FarBehind => write!(f, "FAR_BEHIND"),
            GoalProgressStatus::Behind => write!(f, "BEHIND"),
            GoalProgressStatus::OnTrack => write!(f, "ON_TRACK"),
            GoalProgressStatus::AlmostDone => write!(f, "ALMOST_DONE"),
            GoalProgressStatus::Completed => write!(f, "COMPLETED"),
        }
    }
}

impl GoalProgressStatus {
    /// ロケールに応じた表示名
    pub fn display_name(&self) -> String {
        match self {
            GoalProgressStatus::FarBehind => i18n::t("progress.far_behind"),
            GoalProgressStatus::Behind => i18n::t("progress.behind"),
            GoalProgressStatus::OnTrack => i18n::t("progress.on_track"),
            GoalProgressStatus::AlmostDone => i18n::t("progress.almost_done"),
            GoalProgressStatus::Completed => i18n::t("progress.completed"),
        }
    }
}

// ==========================================
// 学習効率レベル (Efficiency Level)
// ==========================================
// 1日あたり平均学習時間から判定する (PlanPolicyService)
// 順序: Insufficient < Light < Balanced < Intensive < Overloaded
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EfficiencyLevel {
    Insufficient, // 不足
    Light,        // 軽め
    Balanced,     // バランス良好
    Intensive,    // 集中的
    Overloaded,   // 過負荷
}

impl fmt::Display for EfficiencyLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EfficiencyLevel::Insufficient => write!(f, "INSUFFICIENT"),
            EfficiencyLevel::Light => write!(f, "LIGHT"),
            EfficiencyLevel::Balanced => write!(f, "BALANCED"),
            EfficiencyLevel::Intensive => write!(f, "INTENSIVE"),
            EfficiencyLevel::Overloaded => write!(f, "OVERLOADED"),
        }
    }
}

impl EfficiencyLevel {
    /// ロケールに応じた表示名
    pub fn display_name(&self) -> String {
        match self {
            EfficiencyLevel::Insufficient => i18n::t("efficiency.insufficient.name"),
            EfficiencyLevel::Light => i18n::t("efficiency.light.name"),
            EfficiencyLevel::Balanced => i18n::t("efficiency.balanced.name"),
            EfficiencyLevel::Intensive => i18n::t("efficiency.intensive.name"),
            EfficiencyLevel::Overloaded => i18n::t("efficiency.overloaded.name"),
        }
    }
}

// ==========================================
// 計画リスクレベル (Plan Risk Level)
// ==========================================
// 順序: Low < Medium < High
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PlanRiskLevel {
    Low,    // 低
    Medium, // 中
    High,   // 高
}

impl fmt::Display for PlanRiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlanRiskLevel::Low => write!(f, "LOW"),
            PlanRiskLevel::Medium => write!(f, "MEDIUM"),
            PlanRiskLevel::High => write!(f, "HIGH"),
        }
    }
}

impl PlanRiskLevel {
    /// ロケールに応じた表示名
    pub fn display_name(&self) -> String {
        match self {
            PlanRiskLevel::Low => i18n::t("risk_level.low"),
            PlanRiskLevel::Medium => i18n::t("risk_level.medium"),
            PlanRiskLevel::High => i18n::t("risk_level.high"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plan_status_codes() {
        assert_eq!(StudyPlanStatus::Active.as_code(), "ACTIVE");
        assert_eq!(StudyPlanStatus::Cancelled.as_code(), "CANCELLED");
        assert_eq!(
            StudyPlanStatus::from_code("paused"),
            Some(StudyPlanStatus::Paused)
        );
        assert_eq!(StudyPlanStatus::from_code("UNKNOWN"), None);
    }

    #[test]
    fn test_plan_status_terminal() {
        assert!(!StudyPlanStatus::Active.is_terminal());
        assert!(!StudyPlanStatus::Paused.is_terminal());
        assert!(StudyPlanStatus::Completed.is_terminal());
        assert!(StudyPlanStatus::Cancelled.is_terminal());
    }

    #[test]
    fn test_plan_status_serde_format() {
        let json = serde_json::to_string(&StudyPlanStatus::Active).unwrap();
        assert_eq!(json, "\"ACTIVE\"");
        let parsed: StudyPlanStatus = serde_json::from_str("\"CANCELLED\"").unwrap();
        assert_eq!(parsed, StudyPlanStatus::Cancelled);
    }

    #[test]
    fn test_difficulty_ordering() {
        assert!(GoalDifficulty::VeryEasy < GoalDifficulty::Easy);
        assert!(GoalDifficulty::Medium < GoalDifficulty::Hard);
        assert!(GoalDifficulty::Hard < GoalDifficulty::VeryHard);
    }

    #[test]
    fn test_progress_status_ordering() {
        assert!(GoalProgressStatus::FarBehind < GoalProgressStatus::Behind);
        assert!(GoalProgressStatus::OnTrack < GoalProgressStatus::AlmostDone);
        assert!(GoalProgressStatus::AlmostDone < GoalProgressStatus::Completed);
    }

    #[test]
    fn test_efficiency_ordering() {
        assert!(EfficiencyLevel::Insufficient < EfficiencyLevel::Light);
        assert!(EfficiencyLevel::Balanced < EfficiencyLevel::Intensive);
        assert!(EfficiencyLevel::Intensive < EfficiencyLevel::Overloaded);
    }

    #[test]
    fn test_risk_level_ordering() {
        assert!(PlanRiskLevel::Low < PlanRiskLevel::Medium);
        assert!(PlanRiskLevel::Medium < PlanRiskLevel::High);
    }

    #[test]
    fn test_display_matches_code() {
        assert_eq!(StudyPlanStatus::Paused.to_string(), "PAUSED");
        assert_eq!(GoalDifficulty::VeryHard.to_string(), "VERY_HARD");
        assert_eq!(EfficiencyLevel::Overloaded.to_string(), "OVERLOADED");
        assert_eq!(PlanRiskLevel::High.to_string(), "HIGH");
    }
}
