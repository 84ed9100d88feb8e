// ==========================================
// 学習計画管理システム - ストア層
// ==========================================
// 責務: データアクセスの契約（trait）と参照実装を提供する
// 規約: Repository は業務ロジックを持たない
// ==========================================
// 契約は Command（書き込み）と Query（読み込み）に分ける。
// 永続化層を差し替えても上位層は契約にしか依存しない
// ==========================================

pub mod category_repo;
pub mod error;
pub mod goal_repo;
pub mod memory;
pub mod plan_repo;
pub mod user_repo;

// 再エクスポート
pub use category_repo::{StudyCategoryCommandRepository, StudyCategoryQueryRepository};
pub use error::{RepositoryError, RepositoryResult};
pub use goal_repo::{
    GoalAchievementSummary, StudyGoalCommandRepository, StudyGoalQueryRepository,
};
pub use memory::{
    InMemoryStudyCategoryRepository, InMemoryStudyGoalRepository, InMemoryStudyPlanRepository,
    InMemoryUserRepository,
};
pub use plan_repo::{
    StudyPlanCommandRepository, StudyPlanQueryRepository, StudyPlanStatistics,
};
pub use user_repo::{UserCommandRepository, UserQueryRepository};
