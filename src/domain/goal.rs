// ==========================================
// 学習計画管理システム - 学習目標エンティティ
// ==========================================
// 計画×カテゴリごとの目標（スコア・学習時間）と進捗を持つ
// 進捗は単調増加（ベストスコア方式 + 累積時間）
// ==========================================
// 進捗更新は失敗しない: 範囲外の入力は黙って無視する
// （更新時刻のみ進む）。事前チェックが必要な場合は
// validator::goal::check_progress_update を使う
// ==========================================

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::error::ValidationResult;
use crate::domain::ids::{StudyCategoryId, StudyGoalId, StudyPlanId};
use crate::domain::stamp::EntityStamp;
use crate::domain::types::GoalProgressStatus;
use crate::validator::goal as goal_rules;

/// 学習目標エンティティ
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudyGoal {
    id: StudyGoalId,
    study_plan_id: StudyPlanId,
    category_id: StudyCategoryId,
    target_score: i32,
    target_study_hours: i32,
    current_best_score: i32,
    total_studied_hours: i32,
    #[serde(flatten)]
    stamp: EntityStamp,
}

impl StudyGoal {
    // ファクトリ専用の構築経路。検証済みの値のみ受け取る
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn from_parts(
        id: StudyGoalId,
        study_plan_id: StudyPlanId,
        category_id: StudyCategoryId,
        target_score: i32,
        target_study_hours: i32,
        current_best_score: i32,
        total_studied_hours: i32,
        stamp: EntityStamp,
    ) -> Self {
        Self {
            id,
            study_plan_id,
            category_id,
            target_score,
            target_study_hours,
            current_best_score,
            total_studied_hours,
            stamp,
        }
    }

    pub fn id(&self) -> &StudyGoalId {
        &self.id
    }

    pub fn study_plan_id(&self) -> &StudyPlanId {
        &self.study_plan_id
    }

    pub fn category_id(&self) -> &StudyCategoryId {
        &self.category_id
    }

    pub fn target_score(&self) -> i32 {
        self.target_score
    }

    pub fn target_study_hours(&self) -> i32 {
        self.target_study_hours
    }

    pub fn current_best_score(&self) -> i32 {
        self.current_best_score
    }

    pub fn total_studied_hours(&self) -> i32 {
        self.total_studied_hours
    }

    pub fn created_at(&self) -> NaiveDateTime {
        self.stamp.created_at
    }

    pub fn updated_at(&self) -> NaiveDateTime {
        self.stamp.updated_at
    }

    // ==========================================
    // 目標更新
    // ==========================================

    /// 目標値を更新した新しいインスタンスを返す
    ///
    /// 進捗（ベストスコア・累積時間）は引き継ぐ
    pub fn update_goal(&self, target_score: i32, target_study_hours: i32) -> ValidationResult<Self> {
        goal_rules::validate_target_score(target_score)?;
        goal_rules::validate_target_hours(target_study_hours)?;
        Ok(Self {
            id: self.id.clone(),
            study_plan_id: self.study_plan_id.clone(),
            category_id: self.category_id.clone(),
            target_score,
            target_study_hours,
            current_best_score: self.current_best_score,
            total_studied_hours: self.total_studied_hours,
            stamp: self.stamp.touched(),
        })
    }

    /// 進捗を記録した新しいインスタンスを返す
    ///
    /// # 規則
    /// - スコアは [0,100] の値のみ採用し、ベストスコアとの大きい方を残す
    /// - 追加時間は正の値のみ累積する
    /// - 範囲外・未指定の入力は該当項目を変更しない（失敗もしない）
    pub fn update_progress(&self, new_score: Option<i32>, additional_hours: Option<i32>) -> Self {
        let mut updated = self.clone();
        if let Some(score) = new_score {
            if (goal_rules::MIN_SCORE..=goal_rules::MAX_SCORE).contains(&score) {
                updated.current_best_score = updated.current_best_score.max(score);
            }
        }
        if let Some(hours) = additional_hours {
            if hours > 0 {
                updated.total_studied_hours = updated.total_studied_hours.saturating_add(hours);
            }
        }
        updated.stamp = self.stamp.touched();
        updated
    }

    // ==========================================
    // 達成度クエリ
    // ==========================================

    /// スコア達成率（0〜100、上限100）。目標0は達成済み扱いで100
    pub fn score_achievement_rate(&self) -> f64 {
        achievement_rate(self.current_best_score, self.target_score)
    }

    /// 時間達成率（0〜100、上限100）。目標0は達成済み扱いで100
    pub fn hours_achievement_rate(&self) -> f64 {
        achievement_rate(self.total_studied_hours, self.target_study_hours)
    }

    /// 総合達成率（スコアと時間の平均）
    pub fn overall_achievement_rate(&self) -> f64 {
        (self.score_achievement_rate() + self.hours_achievement_rate()) / 2.0
    }

    /// スコア目標を達成したか
    pub fn is_score_target_achieved(&self) -> bool {
        self.current_best_score >= self.target_score
    }

    /// 時間目標を達成したか
    pub fn is_hours_target_achieved(&self) -> bool {
        self.total_studied_hours >= self.target_study_hours
    }

    /// 両方の目標を達成したか
    pub fn is_goal_achieved(&self) -> bool {
        self.is_score_target_achieved() && self.is_hours_target_achieved()
    }

    /// 残りの学習時間（達成済みなら0）
    pub fn remaining_hours(&self) -> i32 {
        (self.target_study_hours - self.total_studied_hours).max(0)
    }

    /// 目標スコアとの差（達成済みなら0）
    pub fn score_gap(&self) -> i32 {
        (self.target_score - self.current_best_score).max(0)
    }

    /// 総合達成率による進捗分類
    pub fn progress_status(&self) -> GoalProgressStatus {
        let rate = self.overall_achievement_rate();
        if rate >= 100.0 {
            GoalProgressStatus::Completed
        } else if rate >= 80.0 {
            GoalProgressStatus::AlmostDone
        } else if rate >= 50.0 {
            GoalProgressStatus::OnTrack
        } else if rate >= 25.0 {
            GoalProgressStatus::Behind
        } else {
            GoalProgressStatus::FarBehind
        }
    }
}

// 達成率の共通計算。目標0は自明に達成済みとして100を返す
fn achievement_rate(current: i32, target: i32) -> f64 {
    if target == 0 {
        return 100.0;
    }
    (f64::from(current) * 100.0 / f64::from(target)).min(100.0)
}
