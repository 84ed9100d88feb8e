// ==========================================
// 計画ポリシーサービス
// ==========================================
// 責務: 単一の計画に閉じないドメイン規則
//   - 期間重複チェック (Query Store 連携)
//   - 同時実行数の上限チェック
//   - 効率性分析・リスク評価・完了条件判定
// ==========================================
// 重複チェックと保存の間の競合防止は呼び出し側の責任。
// ここでは原子性を仮定しない
// ==========================================

use std::sync::Arc;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, instrument, warn};

use crate::config::PlanPolicyConfig;
use crate::domain::error::ValidationError;
use crate::domain::ids::UserId;
use crate::domain::plan::StudyPlan;
use crate::domain::types::{EfficiencyLevel, PlanRiskLevel};
use crate::i18n;
use crate::repository::error::RepositoryError;
use crate::repository::plan_repo::StudyPlanQueryRepository;

/// ポリシー判定のエラー型
#[derive(Error, Debug)]
pub enum PolicyError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

/// Result 型エイリアス
pub type PolicyResult<T> = Result<T, PolicyError>;

/// 効率性分析の結果
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanEfficiencyAnalysis {
    pub level: EfficiencyLevel,
    pub average_hours_per_day: f64,
    pub recommendation: String,
}

/// リスク評価の結果
///
/// `risk_factors` は検出された要因メッセージを検出順に連結した文字列。
/// 要因がなければ「リスク要因なし」のメッセージになる
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanRiskAssessment {
    pub risk_level: PlanRiskLevel,
    pub risk_factors: String,
}

// ==========================================
// PlanPolicyService - 計画ポリシーサービス
// ==========================================
pub struct PlanPolicyService {
    query: Arc<dyn StudyPlanQueryRepository>,
    config: PlanPolicyConfig,
}

impl PlanPolicyService {
    /// コンストラクタ（しきい値は既定値）
    pub fn new(query: Arc<dyn StudyPlanQueryRepository>) -> Self {
        Self::with_config(query, PlanPolicyConfig::default())
    }

    /// しきい値を指定して構築する
    pub fn with_config(query: Arc<dyn StudyPlanQueryRepository>, config: PlanPolicyConfig) -> Self {
        Self { query, config }
    }

    /// 計画作成時の期間重複チェック
    ///
    /// 既存計画（ステータス不問）と期間が交差していたらエラー。
    /// 隣接（前の計画の翌日から開始）は重複とみなさない
    #[instrument(skip(self), fields(user_id = %user_id, start = %start_date, end = %end_date))]
    pub fn validate_plan_creation(
        &self,
        user_id: &UserId,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> PolicyResult<()> {
        let overlapping = self
            .query
            .find_overlapping_plans(user_id, start_date, end_date)?;
        if !overlapping.is_empty() {
            warn!(
                count = overlapping.len(),
                "期間が重複する学習計画があるため作成を拒否します"
            );
            return Err(ValidationError::OverlappingPlan {
                start: start_date,
                end: end_date,
            }
            .into());
        }
        Ok(())
    }

    /// 同時に実行できる計画数の上限チェック
    #[instrument(skip(self), fields(user_id = %user_id))]
    pub fn validate_active_plan_limit(&self, user_id: &UserId) -> PolicyResult<()> {
        let active = self.query.find_active_by_user_id(user_id)?;
        if active.len() >= self.config.active_plan_limit {
            warn!(
                active = active.len(),
                "実施中の学習計画が上限に達しています"
            );
            return Err(ValidationError::ActivePlanLimitExceeded {
                max: self.config.active_plan_limit,
            }
            .into());
        }
        Ok(())
    }

    /// 計画の効率性を分析する
    ///
    /// 1日あたり平均時間（総目標時間 ÷ 期間日数）を5段階に分類する
    #[instrument(skip(self, plan), fields(plan_id = %plan.id()))]
    pub fn analyze_efficiency(&self, plan: &StudyPlan) -> PlanEfficiencyAnalysis {
        let average = plan.total_target_hours() as f64 / plan.duration_days() as f64;

        let (level, key) = if average > self.config.overloaded_hours_per_day {
            (EfficiencyLevel::Overloaded, "efficiency.overloaded.advice")
        } else if average > self.config.intensive_hours_per_day {
            (EfficiencyLevel::Intensive, "efficiency.intensive.advice")
        } else if average >= self.config.balanced_min_hours_per_day {
            (EfficiencyLevel::Balanced, "efficiency.balanced.advice")
        } else if average >= self.config.light_min_hours_per_day {
            (EfficiencyLevel::Light, "efficiency.light.advice")
        } else {
            (EfficiencyLevel::Insufficient, "efficiency.insufficient.advice")
        };

        debug!(level = %level, "効率性を分析しました");
        PlanEfficiencyAnalysis {
            level,
            average_hours_per_day: average,
            recommendation: i18n::t(key),
        }
    }

    /// 計画のリスクを評価する
    ///
    /// # 規則
    /// - LOW から開始する
    /// - 期間が30日未満 → HIGH
    /// - 1日4時間超 → LOW なら MEDIUM、そうでなければ HIGH
    /// - 期限接近 → 同上
    ///
    /// 要因メッセージは検出順に連結する
    #[instrument(skip(self, plan), fields(plan_id = %plan.id(), today = %today))]
    pub fn assess_risk(&self, plan: &StudyPlan, today: NaiveDate) -> PlanRiskAssessment {
        let mut risk_level = PlanRiskLevel::Low;
        let mut risk_factors = String::new();

        if plan.duration_days() < self.config.short_duration_risk_days {
            risk_level = PlanRiskLevel::High;
            risk_factors.push_str(&i18n::t("risk_factor.short_duration"));
        }

        if plan.target_hours_per_day() > self.config.heavy_daily_load_hours {
            risk_level = if risk_level == PlanRiskLevel::Low {
                PlanRiskLevel::Medium
            } else {
                PlanRiskLevel::High
            };
            risk_factors.push_str(&i18n::t("risk_factor.heavy_daily_load"));
        }

        if plan.is_near_deadline(today) {
            risk_level = if risk_level == PlanRiskLevel::Low {
                PlanRiskLevel::Medium
            } else {
                PlanRiskLevel::High
            };
            risk_factors.push_str(&i18n::t("risk_factor.near_deadline"));
        }

        if risk_factors.is_empty() {
            risk_factors = i18n::t("risk_factor.none");
        }

        debug!(level = %risk_level, "リスクを評価しました");
        PlanRiskAssessment {
            risk_level,
            risk_factors,
        }
    }

    /// 計画を完了にできるか
    ///
    /// 終了日を過ぎているか、全目標が達成済みなら完了できる。
    /// 目標の達成状況は呼び出し側が Query Store から集計して渡す
    pub fn is_plan_completable(
        &self,
        plan: &StudyPlan,
        today: NaiveDate,
        all_goals_achieved: bool,
    ) -> bool {
        today > plan.end_date() || all_goals_achieved
    }
}
