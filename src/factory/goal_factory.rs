// ==========================================
// 学習目標ファクトリ
// ==========================================
// 責務: 目標構築の唯一の入口と、厳格な進捗更新ゲートウェイ
// 定型レシピ: 高得点型・基礎型・集中型・合格ライン型、
// および試験8分野のデフォルト目標一括作成
// ==========================================
// エンティティの update_progress は黙殺方式だが、
// update_goal_progress は妥当性チェックに通らない入力を
// エラーとして拒否する
// ==========================================

use chrono::NaiveDateTime;
use tracing::debug;

use crate::domain::error::{ValidationError, ValidationResult};
use crate::domain::goal::StudyGoal;
use crate::domain::ids::{StudyCategoryId, StudyGoalId, StudyPlanId};
use crate::domain::stamp::EntityStamp;
use crate::validator::goal;

// デフォルト目標の必要カテゴリ数（試験8分野）
const REQUIRED_DEFAULT_CATEGORIES: usize = 8;

// デフォルト目標の（目標スコア, 目標学習時間）。カテゴリ順に対応
const DEFAULT_GOAL_TARGETS: [(i32, i32); 8] = [
    (70, 30),
    (80, 40),
    (60, 50),
    (60, 30),
    (85, 25),
    (75, 35),
    (70, 20),
    (65, 15),
];

// 高得点型レシピ
const HIGH_SCORE_TARGET: i32 = 90;
const HIGH_SCORE_MAX_HOURS: i32 = 100;

// 基礎型レシピ
const BASIC_SCORE_TARGET: i32 = 60;

// 集中型レシピ
const MIN_INTENSIVE_SCORE: i32 = 70;
const INTENSIVE_HIGH_SCORE_HOURS: i32 = 15;
const INTENSIVE_STANDARD_HOURS: i32 = 10;

// 合格ライン型レシピ
const PASSING_SCORE_TARGET: i32 = 65;
const PASSING_STUDY_HOURS: i32 = 20;

// ==========================================
// StudyGoalFactory
// ==========================================
pub struct StudyGoalFactory {
    // ステートレス。バリデータは純関数のため注入不要
}

impl StudyGoalFactory {
    /// コンストラクタ
    pub fn new() -> Self {
        Self {}
    }

    /// 新規学習目標を作成する
    ///
    /// # 検証順序
    /// 1. 目標スコアの範囲 [0, 100]
    /// 2. 目標学習時間の範囲 [0, 10000]
    /// 3. 目標の妥当性評価（不合理な組み合わせなら拒否）
    ///
    /// 進捗（ベストスコア・累積時間）はゼロで始まる
    pub fn create_goal(
        &self,
        study_plan_id: StudyPlanId,
        category_id: StudyCategoryId,
        target_score: i32,
        target_study_hours: i32,
    ) -> ValidationResult<StudyGoal> {
        goal::validate_target_score(target_score)?;
        goal::validate_target_hours(target_study_hours)?;

        let validity = goal::assess_goal_validity(target_score, target_study_hours);
        if !validity.valid {
            return Err(ValidationError::GoalUnreasonable(validity.message));
        }

        let created = StudyGoal::from_parts(
            StudyGoalId::generate(),
            study_plan_id,
            category_id,
            target_score,
            target_study_hours,
            0,
            0,
            EntityStamp::now(),
        );
        debug!(goal_id = %created.id(), "学習目標を作成しました");
        Ok(created)
    }

    /// 試験8分野のデフォルト目標を一括作成する
    ///
    /// カテゴリは表示順に8件以上必要。先頭8件に対して
    /// 分野ごとの標準目標値を割り当てる
    pub fn create_default_database_specialist_goals(
        &self,
        study_plan_id: StudyPlanId,
        category_ids: &[StudyCategoryId],
    ) -> ValidationResult<Vec<StudyGoal>> {
        if category_ids.len() < REQUIRED_DEFAULT_CATEGORIES {
            return Err(ValidationError::DefaultGoalsCategoryShortage {
                required: REQUIRED_DEFAULT_CATEGORIES,
            });
        }
        category_ids
            .iter()
            .take(REQUIRED_DEFAULT_CATEGORIES)
            .zip(DEFAULT_GOAL_TARGETS.iter())
            .map(|(category_id, (score, hours))| {
                self.create_goal(study_plan_id.clone(), category_id.clone(), *score, *hours)
            })
            .collect()
    }

    /// 高得点型目標を作成する（スコア90、時間は基準の2倍・上限100）
    pub fn create_high_score_goal(
        &self,
        study_plan_id: StudyPlanId,
        category_id: StudyCategoryId,
        base_hours: i32,
    ) -> ValidationResult<StudyGoal> {
        self.create_goal(
            study_plan_id,
            category_id,
            HIGH_SCORE_TARGET,
            (base_hours * 2).min(HIGH_SCORE_MAX_HOURS),
        )
    }

    /// 基礎型目標を作成する（スコア60固定）
    pub fn create_basic_goal(
        &self,
        study_plan_id: StudyPlanId,
        category_id: StudyCategoryId,
        target_study_hours: i32,
    ) -> ValidationResult<StudyGoal> {
        self.create_goal(
            study_plan_id,
            category_id,
            BASIC_SCORE_TARGET,
            target_study_hours,
        )
    }

    /// 集中型目標を作成する（スコア70以上を要求、時間は固定値）
    pub fn create_intensive_goal(
        &self,
        study_plan_id: StudyPlanId,
        category_id: StudyCategoryId,
        target_score: i32,
    ) -> ValidationResult<StudyGoal> {
        if target_score < MIN_INTENSIVE_SCORE {
            return Err(ValidationError::IntensiveScoreTooLow {
                min: MIN_INTENSIVE_SCORE,
            });
        }
        let hours = if target_score > 80 {
            INTENSIVE_HIGH_SCORE_HOURS
        } else {
            INTENSIVE_STANDARD_HOURS
        };
        self.create_goal(study_plan_id, category_id, target_score, hours)
    }

    /// 合格ライン型目標を作成する（スコア65・20時間）
    pub fn create_passing_goal(
        &self,
        study_plan_id: StudyPlanId,
        category_id: StudyCategoryId,
    ) -> ValidationResult<StudyGoal> {
        self.create_goal(
            study_plan_id,
            category_id,
            PASSING_SCORE_TARGET,
            PASSING_STUDY_HOURS,
        )
    }

    /// 進捗更新の厳格ゲートウェイ
    ///
    /// エンティティの黙殺方式と異なり、チェックに通らない入力は
    /// エラーとして拒否する。通った入力のみ反映する
    pub fn update_goal_progress(
        &self,
        current: &StudyGoal,
        new_score: Option<i32>,
        additional_hours: Option<i32>,
    ) -> ValidationResult<StudyGoal> {
        let check = goal::check_progress_update(new_score, additional_hours);
        if !check.valid {
            return Err(ValidationError::ProgressUpdateRejected(check.message));
        }
        Ok(current.update_progress(new_score, additional_hours))
    }

    /// 永続化層から既存目標を復元する
    ///
    /// 目標値は範囲を再検証する。進捗値は負なら0に切り上げる
    #[allow(clippy::too_many_arguments)]
    pub fn restore_goal(
        &self,
        id: StudyGoalId,
        study_plan_id: StudyPlanId,
        category_id: StudyCategoryId,
        target_score: i32,
        target_study_hours: i32,
        current_best_score: i32,
        total_studied_hours: i32,
        created_at: NaiveDateTime,
        updated_at: NaiveDateTime,
    ) -> ValidationResult<StudyGoal> {
        goal::validate_target_score(target_score)?;
        goal::validate_target_hours(target_study_hours)?;
        Ok(StudyGoal::from_parts(
            id,
            study_plan_id,
            category_id,
            target_score,
            target_study_hours,
            current_best_score.max(0),
            total_studied_hours.max(0),
            EntityStamp::of(created_at, updated_at),
        ))
    }
}

impl Default for StudyGoalFactory {
    fn default() -> Self {
        Self::new()
    }
}
