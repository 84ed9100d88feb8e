// ==========================================
// 学習計画管理システム - ドメイン層
// ==========================================
// 責務: エンティティ・識別子・型・ドメインエラーの定義
// 禁止: データアクセスロジック、複数集約にまたがる判断
// ==========================================

pub mod category;
pub mod error;
pub mod goal;
pub mod ids;
pub mod plan;
pub mod stamp;
pub mod types;
pub mod user;

// コア型の再エクスポート
pub use category::StudyCategory;
pub use error::{StateError, StateResult, ValidationError, ValidationResult};
pub use goal::StudyGoal;
pub use ids::{StudyCategoryId, StudyGoalId, StudyPlanId, UserId};
pub use plan::{StudyPlan, NEAR_DEADLINE_DAYS};
pub use stamp::EntityStamp;
pub use types::{
    EfficiencyLevel, GoalDifficulty, GoalProgressStatus, PlanRiskLevel, StudyPlanStatus,
};
pub use user::User;
