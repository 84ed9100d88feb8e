// ==========================================
// 学習計画管理システム - エンジン層
// ==========================================
// 責務: 単一エンティティに閉じない判定ロジック
//   - 目標難易度の判定 (ルールテーブル方式)
//   - 計画ポリシー (重複・上限・効率・リスク)
// ==========================================

pub mod difficulty;
pub mod plan_policy;

// 再エクスポート
pub use difficulty::DifficultyEngine;
pub use plan_policy::{
    PlanEfficiencyAnalysis, PlanPolicyService, PlanRiskAssessment, PolicyError, PolicyResult,
};
