// ==========================================
// 学習計画管理システム - ファクトリ層
// ==========================================
// 責務: バリデータを通したエンティティ構築の唯一の入口
// 新規作成・定型レシピ・永続化層からの復元を提供する
// ==========================================

pub mod category_factory;
pub mod goal_factory;
pub mod plan_factory;
pub mod user_factory;

// ファクトリの再エクスポート
pub use category_factory::StudyCategoryFactory;
pub use goal_factory::StudyGoalFactory;
pub use plan_factory::StudyPlanFactory;
pub use user_factory::UserFactory;
