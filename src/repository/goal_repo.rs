// ==========================================
// 学習計画管理システム - 学習目標ストア契約
// ==========================================
// 責務: 目標のデータアクセスインターフェースを定義する
// 規約: Repository は業務ロジックを持たない。データの出し入れのみ
// ==========================================

use serde::{Deserialize, Serialize};

use crate::domain::goal::StudyGoal;
use crate::domain::ids::{StudyCategoryId, StudyGoalId, StudyPlanId};
use crate::repository::error::RepositoryResult;

// ==========================================
// StudyGoalCommandRepository Trait (書き込み側)
// ==========================================
pub trait StudyGoalCommandRepository: Send + Sync {
    /// 目標を保存する（既存IDなら上書き）
    fn save(&self, goal: &StudyGoal) -> RepositoryResult<()>;

    /// 目標を削除する
    ///
    /// # エラー
    /// - `NotFound`: 指定IDが存在しない
    fn delete(&self, id: &StudyGoalId) -> RepositoryResult<()>;

    /// 複数目標を一括保存する
    fn save_all(&self, goals: &[StudyGoal]) -> RepositoryResult<()> {
        for goal in goals {
            self.save(goal)?;
        }
        Ok(())
    }

    /// 複数目標を一括削除する
    fn delete_all(&self, ids: &[StudyGoalId]) -> RepositoryResult<()> {
        for id in ids {
            self.delete(id)?;
        }
        Ok(())
    }

    /// 学習計画に紐づく全目標を削除する
    ///
    /// # 返り値
    /// 削除した件数
    fn delete_by_study_plan_id(&self, study_plan_id: &StudyPlanId) -> RepositoryResult<usize>;
}

// ==========================================
// StudyGoalQueryRepository Trait (読み込み側)
// ==========================================
pub trait StudyGoalQueryRepository: Send + Sync {
    /// IDで目標を取得する
    fn find_by_id(&self, id: &StudyGoalId) -> RepositoryResult<Option<StudyGoal>>;

    /// 全目標を取得する
    fn find_all(&self) -> RepositoryResult<Vec<StudyGoal>>;

    /// 存在チェック
    fn exists_by_id(&self, id: &StudyGoalId) -> RepositoryResult<bool>;

    /// 件数取得
    fn count(&self) -> RepositoryResult<u64>;

    /// 学習計画IDで目標を検索する
    fn find_by_study_plan_id(&self, study_plan_id: &StudyPlanId)
        -> RepositoryResult<Vec<StudyGoal>>;

    /// 学習計画IDとカテゴリIDで目標を取得する
    fn find_by_study_plan_id_and_category_id(
        &self,
        study_plan_id: &StudyPlanId,
        category_id: &StudyCategoryId,
    ) -> RepositoryResult<Option<StudyGoal>>;

    /// 達成済みの目標を検索する
    fn find_achieved_goals_by_study_plan_id(
        &self,
        study_plan_id: &StudyPlanId,
    ) -> RepositoryResult<Vec<StudyGoal>>;

    /// 学習計画の目標達成サマリを取得する
    fn achievement_summary_by_plan_id(
        &self,
        study_plan_id: &StudyPlanId,
    ) -> RepositoryResult<GoalAchievementSummary>;
}

/// 目標達成サマリ（読み取り専用の集計レコード）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoalAchievementSummary {
    pub goal_count: u64,
    pub achieved_count: u64,
    /// 総合達成率の平均（%）。目標がなければ 0.0
    pub average_achievement_rate: f64,
    pub total_target_hours: i64,
    pub total_studied_hours: i64,
}

impl GoalAchievementSummary {
    /// 目標ゼロ件のサマリ
    pub fn empty() -> Self {
        Self {
            goal_count: 0,
            achieved_count: 0,
            average_achievement_rate: 0.0,
            total_target_hours: 0,
            total_studied_hours: 0,
        }
    }
}
