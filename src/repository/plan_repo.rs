// ==========================================
// 学習計画管理システム - 学習計画ストア契約
// ==========================================
// 責務: 計画のデータアクセスインターフェースを定義する
// 規約: Repository は業務ロジックを持たない。データの出し入れのみ
// ==========================================
// 「今日」に依存する検索は today を引数で受け取る。
// ストア実装が現在時刻を暗黙に参照してはならない
// ==========================================

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::ids::{StudyPlanId, UserId};
use crate::domain::plan::StudyPlan;
use crate::domain::types::StudyPlanStatus;
use crate::repository::error::RepositoryResult;

// ==========================================
// StudyPlanCommandRepository Trait (書き込み側)
// ==========================================
pub trait StudyPlanCommandRepository: Send + Sync {
    /// 計画を保存する（既存IDなら上書き）
    fn save(&self, plan: &StudyPlan) -> RepositoryResult<()>;

    /// 計画を削除する
    ///
    /// # エラー
    /// - `NotFound`: 指定IDが存在しない
    fn delete(&self, id: &StudyPlanId) -> RepositoryResult<()>;

    /// 複数計画を一括保存する
    fn save_all(&self, plans: &[StudyPlan]) -> RepositoryResult<()> {
        for plan in plans {
            self.save(plan)?;
        }
        Ok(())
    }

    /// 複数計画を一括削除する
    fn delete_all(&self, ids: &[StudyPlanId]) -> RepositoryResult<()> {
        for id in ids {
            self.delete(id)?;
        }
        Ok(())
    }

    /// ユーザーに紐づく全計画を削除する
    ///
    /// # 返り値
    /// 削除した件数
    fn delete_by_user_id(&self, user_id: &UserId) -> RepositoryResult<usize>;
}

// ==========================================
// StudyPlanQueryRepository Trait (読み込み側)
// ==========================================
pub trait StudyPlanQueryRepository: Send + Sync {
    /// IDで計画を取得する
    fn find_by_id(&self, id: &StudyPlanId) -> RepositoryResult<Option<StudyPlan>>;

    /// 全計画を取得する
    fn find_all(&self) -> RepositoryResult<Vec<StudyPlan>>;

    /// 存在チェック
    fn exists_by_id(&self, id: &StudyPlanId) -> RepositoryResult<bool>;

    /// 件数取得
    fn count(&self) -> RepositoryResult<u64>;

    /// ユーザーIDで計画を検索する
    fn find_by_user_id(&self, user_id: &UserId) -> RepositoryResult<Vec<StudyPlan>>;

    /// ユーザーIDとステータスで計画を検索する
    fn find_by_user_id_and_status(
        &self,
        user_id: &UserId,
        status: StudyPlanStatus,
    ) -> RepositoryResult<Vec<StudyPlan>>;

    /// 指定期間と重複する計画を検索する
    ///
    /// 両端を含む区間の交差判定。隣接（end1 = start2 - 1）は
    /// 重複とみなさない。ステータスは問わない
    fn find_overlapping_plans(
        &self,
        user_id: &UserId,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> RepositoryResult<Vec<StudyPlan>>;

    /// 実施中の計画を検索する
    fn find_active_by_user_id(&self, user_id: &UserId) -> RepositoryResult<Vec<StudyPlan>>;

    /// 期限切れの計画を検索する（実施中のまま終了日を過ぎたもの）
    fn find_overdue_plans(&self, today: NaiveDate) -> RepositoryResult<Vec<StudyPlan>>;

    /// 期限が近い計画を検索する（残り1週間以内）
    fn find_near_deadline_plans(&self, today: NaiveDate) -> RepositoryResult<Vec<StudyPlan>>;

    /// ユーザーの計画統計を取得する
    fn statistics_by_user_id(&self, user_id: &UserId) -> RepositoryResult<StudyPlanStatistics>;
}

/// 学習計画統計（読み取り専用の集計レコード）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudyPlanStatistics {
    pub total_plans: u64,
    pub active_plans: u64,
    pub completed_plans: u64,
    /// 全計画の平均期間日数。計画がなければ 0.0
    pub average_duration_days: f64,
    /// 完了率（%）。計画がなければ 0.0
    pub completion_rate: f64,
}

impl StudyPlanStatistics {
    /// 計画ゼロ件の統計
    pub fn empty() -> Self {
        Self {
            total_plans: 0,
            active_plans: 0,
            completed_plans: 0,
            average_duration_days: 0.0,
            completion_rate: 0.0,
        }
    }
}
