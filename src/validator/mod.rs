// ==========================================
// 学習計画管理システム - バリデータ層
// ==========================================
// 責務: 生入力の検証と正規化（純関数のみ）
// 禁止: データアクセス、エンティティ構築、可変状態
// ==========================================
// ハードエラーは ValidationError、助言レベルの判定は
// 構造化された評価結果 (Feasibility / Validity) で返す
// ==========================================

pub mod category;
pub mod email;
pub mod goal;
pub mod name;
pub mod plan;

// 評価結果型の再エクスポート
pub use goal::{GoalValidity, ProgressUpdateCheck};
pub use plan::PlanFeasibility;
