// ==========================================
// 学習計画管理システム - 学習計画エンティティ
// ==========================================
// 集約ルート。期間・1日あたり目標時間・ライフサイクル状態を持つ
// 不変オブジェクト。状態遷移も新しいインスタンスを返す
// ==========================================
// 状態遷移規則:
//   ACTIVE -> PAUSED / COMPLETED / CANCELLED
//   PAUSED -> ACTIVE / COMPLETED / CANCELLED
//   COMPLETED / CANCELLED は終端（以後の遷移を拒否）
// ==========================================

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::domain::error::{StateError, StateResult, ValidationResult};
use crate::domain::ids::{StudyPlanId, UserId};
use crate::domain::stamp::EntityStamp;
use crate::domain::types::StudyPlanStatus;
use crate::validator::plan as plan_rules;

/// 期限接近とみなす残日数の上限
pub const NEAR_DEADLINE_DAYS: i64 = 7;

/// 学習計画エンティティ
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudyPlan {
    id: StudyPlanId,
    user_id: UserId,
    title: String,
    description: String,
    start_date: NaiveDate,
    end_date: NaiveDate,
    target_hours_per_day: i32,
    status: StudyPlanStatus,
    #[serde(flatten)]
    stamp: EntityStamp,
}

impl StudyPlan {
    // ファクトリ専用の構築経路。検証済みの値のみ受け取る
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn from_parts(
        id: StudyPlanId,
        user_id: UserId,
        title: String,
        description: String,
        start_date: NaiveDate,
        end_date: NaiveDate,
        target_hours_per_day: i32,
        status: StudyPlanStatus,
        stamp: EntityStamp,
    ) -> Self {
        Self {
            id,
            user_id,
            title,
            description,
            start_date,
            end_date,
            target_hours_per_day,
            status,
            stamp,
        }
    }

    pub fn id(&self) -> &StudyPlanId {
        &self.id
    }

    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn start_date(&self) -> NaiveDate {
        self.start_date
    }

    pub fn end_date(&self) -> NaiveDate {
        self.end_date
    }

    pub fn target_hours_per_day(&self) -> i32 {
        self.target_hours_per_day
    }

    pub fn status(&self) -> StudyPlanStatus {
        self.status
    }

    pub fn created_at(&self) -> NaiveDateTime {
        self.stamp.created_at
    }

    pub fn updated_at(&self) -> NaiveDateTime {
        self.stamp.updated_at
    }

    // ==========================================
    // 派生クエリ
    // ==========================================

    /// 実施中か
    pub fn is_active(&self) -> bool {
        self.status == StudyPlanStatus::Active
    }

    /// 期間日数（開始日と終了日の両方を含む）
    pub fn duration_days(&self) -> i64 {
        (self.end_date - self.start_date).num_days() + 1
    }

    /// 計画全体の目標学習時間
    pub fn total_target_hours(&self) -> i64 {
        self.duration_days() * i64::from(self.target_hours_per_day)
    }

    /// 終了日までの残日数。終了日を過ぎていれば負になる
    pub fn remaining_days(&self, today: NaiveDate) -> i64 {
        (self.end_date - today).num_days()
    }

    /// 期限が接近しているか（残り0〜7日）
    pub fn is_near_deadline(&self, today: NaiveDate) -> bool {
        (0..=NEAR_DEADLINE_DAYS).contains(&self.remaining_days(today))
    }

    /// 期限超過か（実施中のまま終了日を過ぎている）
    pub fn is_overdue(&self, today: NaiveDate) -> bool {
        today > self.end_date && self.status == StudyPlanStatus::Active
    }

    // ==========================================
    // 状態遷移
    // ==========================================

    /// 計画を完了する
    pub fn complete(&self) -> StateResult<Self> {
        match self.status {
            StudyPlanStatus::Completed => Err(StateError::AlreadyCompleted),
            StudyPlanStatus::Cancelled => Err(StateError::AlreadyCancelled),
            _ => Ok(self.with_status(StudyPlanStatus::Completed)),
        }
    }

    /// 計画を一時停止する
    pub fn pause(&self) -> StateResult<Self> {
        match self.status {
            StudyPlanStatus::Active => Ok(self.with_status(StudyPlanStatus::Paused)),
            _ => Err(StateError::NotActive),
        }
    }

    /// 一時停止中の計画を再開する
    pub fn resume(&self) -> StateResult<Self> {
        match self.status {
            StudyPlanStatus::Paused => Ok(self.with_status(StudyPlanStatus::Active)),
            _ => Err(StateError::NotPaused),
        }
    }

    /// 計画をキャンセルする
    pub fn cancel(&self) -> StateResult<Self> {
        match self.status {
            StudyPlanStatus::Completed => Err(StateError::CompletedCannotCancel),
            StudyPlanStatus::Cancelled => Err(StateError::AlreadyCancelled),
            _ => Ok(self.with_status(StudyPlanStatus::Cancelled)),
        }
    }

    // ==========================================
    // 内容更新
    // ==========================================

    /// 計画内容を更新した新しいインスタンスを返す
    ///
    /// 構造規則（タイトル・日付の並びと期間上限・時間範囲）を
    /// 再検証する。開始日の新しさは既存計画には問わない
    pub fn update_plan(
        &self,
        title: &str,
        description: &str,
        start_date: NaiveDate,
        end_date: NaiveDate,
        target_hours_per_day: i32,
    ) -> ValidationResult<Self> {
        let title = plan_rules::validate_title(title)?;
        plan_rules::validate_structural_dates(start_date, end_date)?;
        plan_rules::validate_hours_per_day(target_hours_per_day)?;
        Ok(Self {
            id: self.id.clone(),
            user_id: self.user_id.clone(),
            title,
            description: description.trim().to_string(),
            start_date,
            end_date,
            target_hours_per_day,
            status: self.status,
            stamp: self.stamp.touched(),
        })
    }

    fn with_status(&self, status: StudyPlanStatus) -> Self {
        Self {
            status,
            stamp: self.stamp.touched(),
            ..self.clone()
        }
    }
}
