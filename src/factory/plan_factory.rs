// ==========================================
// 学習計画ファクトリ
// ==========================================
// 責務: 計画構築の唯一の入口
// 汎用作成に加え、試験対策・短期集中・長期プランの
// 定型レシピを提供する
// ==========================================
// 実現可能性評価はここではハード条件として扱う。
// 実現困難と評価された計画は作成させない
// ==========================================

use chrono::{Duration, NaiveDate, NaiveDateTime};
use tracing::debug;

use crate::domain::error::{ValidationError, ValidationResult};
use crate::domain::ids::{StudyPlanId, UserId};
use crate::domain::plan::StudyPlan;
use crate::domain::stamp::EntityStamp;
use crate::domain::types::StudyPlanStatus;
use crate::validator::plan;

/// 定型レシピが使う標準の1日あたり目標時間
pub const DEFAULT_TARGET_HOURS: i32 = 2;

// 試験対策プラン: 試験日まで最低限必要な準備期間（日）
const MIN_EXAM_PREPARATION_DAYS: i64 = 14;
// 試験対策プラン: 試験直前の予備日数
const EXAM_BUFFER_DAYS: i64 = 7;

// 短期集中プランの期間範囲（日）
const MIN_INTENSIVE_DURATION_DAYS: i64 = 7;
const MAX_INTENSIVE_DURATION_DAYS: i64 = 30;
// 短期集中プランの1日あたり目標時間
const INTENSIVE_TARGET_HOURS: i32 = 4;

// 長期プランの最低期間（日数差）
const MIN_LONG_TERM_SPAN_DAYS: i64 = 90;
// 長期プランの1日あたり目標時間（継続重視で控えめ）
const LONG_TERM_TARGET_HOURS: i32 = 1;

// ==========================================
// StudyPlanFactory
// ==========================================
pub struct StudyPlanFactory {
    // ステートレス。バリデータは純関数のため注入不要
}

impl StudyPlanFactory {
    /// コンストラクタ
    pub fn new() -> Self {
        Self {}
    }

    /// 新規学習計画を作成する
    ///
    /// # 引数
    /// - `target_hours_per_day`: 未指定なら標準値（2時間）を使う
    ///
    /// # 検証順序
    /// 1. タイトル（必須・長さ・禁止語）
    /// 2. 日付範囲（並び順・期間上限・開始日の新しさ）
    /// 3. 1日あたり目標時間の範囲
    /// 4. 実現可能性評価（実現困難なら拒否）
    pub fn create_plan(
        &self,
        user_id: UserId,
        title: &str,
        description: &str,
        start_date: NaiveDate,
        end_date: NaiveDate,
        target_hours_per_day: Option<i32>,
        today: NaiveDate,
    ) -> ValidationResult<StudyPlan> {
        let target_hours_per_day = target_hours_per_day.unwrap_or(DEFAULT_TARGET_HOURS);
        let validated_title = plan::validate_title(title)?;
        plan::validate_date_range(start_date, end_date, today)?;
        plan::validate_hours_per_day(target_hours_per_day)?;

        let feasibility = plan::evaluate_feasibility(start_date, end_date, target_hours_per_day);
        if !feasibility.feasible {
            return Err(ValidationError::PlanInfeasible(feasibility.message));
        }

        let created = StudyPlan::from_parts(
            StudyPlanId::generate(),
            user_id,
            validated_title,
            description.trim().to_string(),
            start_date,
            end_date,
            target_hours_per_day,
            StudyPlanStatus::Active,
            EntityStamp::now(),
        );
        debug!(plan_id = %created.id(), "学習計画を作成しました");
        Ok(created)
    }

    /// データベーススペシャリスト試験対策プランを作成する
    ///
    /// 今日から試験1週間前までを学習期間とする。
    /// 試験日まで2週間を切っている場合は作成できない
    pub fn create_database_specialist_plan(
        &self,
        user_id: UserId,
        exam_date: NaiveDate,
        today: NaiveDate,
    ) -> ValidationResult<StudyPlan> {
        if exam_date < today + Duration::days(MIN_EXAM_PREPARATION_DAYS) {
            return Err(ValidationError::ExamDateTooSoon);
        }
        self.create_plan(
            user_id,
            "データベーススペシャリスト合格への道",
            "データベーススペシャリスト試験に合格するための学習計画",
            today,
            exam_date - Duration::days(EXAM_BUFFER_DAYS),
            None,
            today,
        )
    }

    /// 短期集中プランを作成する（期間は7〜30日、1日4時間）
    pub fn create_intensive_plan(
        &self,
        user_id: UserId,
        title: &str,
        duration_days: i64,
        today: NaiveDate,
    ) -> ValidationResult<StudyPlan> {
        if !(MIN_INTENSIVE_DURATION_DAYS..=MAX_INTENSIVE_DURATION_DAYS).contains(&duration_days) {
            return Err(ValidationError::IntensiveDurationOutOfRange {
                min: MIN_INTENSIVE_DURATION_DAYS,
                max: MAX_INTENSIVE_DURATION_DAYS,
            });
        }
        self.create_plan(
            user_id,
            &format!("{}（短期集中）", title.trim()),
            &format!("短期集中学習計画（{}日間）", duration_days),
            today,
            today + Duration::days(duration_days),
            Some(INTENSIVE_TARGET_HOURS),
            today,
        )
    }

    /// 長期プランを作成する（期間90日以上、1日1時間）
    pub fn create_long_term_plan(
        &self,
        user_id: UserId,
        title: &str,
        description: &str,
        start_date: NaiveDate,
        end_date: NaiveDate,
        today: NaiveDate,
    ) -> ValidationResult<StudyPlan> {
        if (end_date - start_date).num_days() < MIN_LONG_TERM_SPAN_DAYS {
            return Err(ValidationError::LongTermSpanTooShort {
                min: MIN_LONG_TERM_SPAN_DAYS,
            });
        }
        self.create_plan(
            user_id,
            title,
            description,
            start_date,
            end_date,
            Some(LONG_TERM_TARGET_HOURS),
            today,
        )
    }

    /// 永続化層から既存計画を復元する
    ///
    /// 構造規則（タイトル・日付の並び順・期間上限・時間範囲）のみ
    /// 再検証する。開始日の新しさと実現可能性は作成時の規則であり、
    /// 過去に作成された計画には適用しない
    #[allow(clippy::too_many_arguments)]
    pub fn restore_plan(
        &self,
        id: StudyPlanId,
        user_id: UserId,
        title: &str,
        description: &str,
        start_date: NaiveDate,
        end_date: NaiveDate,
        status: StudyPlanStatus,
        target_hours_per_day: i32,
        created_at: NaiveDateTime,
        updated_at: NaiveDateTime,
    ) -> ValidationResult<StudyPlan> {
        let validated_title = plan::validate_title(title)?;
        plan::validate_structural_dates(start_date, end_date)?;
        plan::validate_hours_per_day(target_hours_per_day)?;
        Ok(StudyPlan::from_parts(
            id,
            user_id,
            validated_title,
            description.trim().to_string(),
            start_date,
            end_date,
            target_hours_per_day,
            status,
            EntityStamp::of(created_at, updated_at),
        ))
    }
}

impl Default for StudyPlanFactory {
    fn default() -> Self {
        Self::new()
    }
}
