// ==========================================
// 学習計画管理システム - コアライブラリ
// ==========================================
// ドメイン不変条件エンジン (バリデーション・ファクトリ・ポリシー)
// 技術スタック: Rust + serde + tracing
// ==========================================

// 国際化システムの初期化
rust_i18n::i18n!("locales", fallback = "ja");

// ==========================================
// モジュール宣言
// ==========================================

// ドメイン層 - エンティティと型
pub mod domain;

// バリデータ層 - 純粋な検証規則
pub mod validator;

// ファクトリ層 - 検証済みエンティティの構築
pub mod factory;

// エンジン層 - 分析と複数集約ポリシー
pub mod engine;

// ストア層 - 永続化契約と参照実装
pub mod repository;

// 設定層 - ポリシー設定
pub mod config;

// ログシステム
pub mod logging;

// 国際化
pub mod i18n;

// ==========================================
// コア型の再エクスポート
// ==========================================

// ドメイン型
pub use domain::types::{
    EfficiencyLevel, GoalDifficulty, GoalProgressStatus, PlanRiskLevel, StudyPlanStatus,
};

// ドメインエンティティ
pub use domain::{StudyCategory, StudyGoal, StudyPlan, User};

// 識別子
pub use domain::ids::{StudyCategoryId, StudyGoalId, StudyPlanId, UserId};

// エラー
pub use domain::error::{StateError, ValidationError};

// ファクトリ
pub use factory::{StudyCategoryFactory, StudyGoalFactory, StudyPlanFactory, UserFactory};

// エンジン
pub use engine::{DifficultyEngine, PlanPolicyService, PolicyError};

// 設定
pub use config::PlanPolicyConfig;

// ==========================================
// 定数定義
// ==========================================

// システムバージョン
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// システム名称
pub const APP_NAME: &str = "学習計画管理システム";

// ==========================================
// コンパイル時チェック
// ==========================================

// 全モジュールがコンパイル時に可視であることを保証
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
