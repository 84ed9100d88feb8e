// ==========================================
// 学習計画バリデータ
// ==========================================
// ハード規則: タイトル・日付範囲・1日あたり目標時間
// 助言規則: 実現可能性評価 (PlanFeasibility)
// ==========================================
// 日数の数え方:
//   - 検証・実現可能性では開始日と終了日の差 (end - start)
//   - エンティティの期間日数は両端を含む (end - start + 1)
// ==========================================

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::domain::error::{ValidationError, ValidationResult};
use crate::i18n;

/// タイトルの最大文字数
pub const MAX_TITLE_LENGTH: usize = 200;

/// 計画期間の上限（日）
pub const MAX_PLAN_SPAN_DAYS: i64 = 365;

/// 開始日を過去に遡れる猶予（日）
pub const PAST_START_GRACE_DAYS: i64 = 7;

/// 1日あたり目標学習時間の下限
pub const MIN_HOURS_PER_DAY: i32 = 1;

/// 1日あたり目標学習時間の上限
pub const MAX_HOURS_PER_DAY: i32 = 24;

// タイトルの禁止語（部分一致、大文字小文字を区別しない）
const FORBIDDEN_TITLE_WORDS: [&str; 2] = ["test", "dummy"];

// 実現可能性のしきい値
const MIN_FEASIBLE_TOTAL_HOURS: i64 = 50;
const MAX_SUSTAINABLE_HOURS_PER_DAY: i32 = 8;
const SHORT_TERM_SPAN_DAYS: i64 = 30;

/// タイトルを検証し、正規化済みの値を返す
pub fn validate_title(title: &str) -> ValidationResult<String> {
    let trimmed = title.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::TitleRequired);
    }
    if trimmed.chars().count() > MAX_TITLE_LENGTH {
        return Err(ValidationError::TitleTooLong {
            max: MAX_TITLE_LENGTH,
        });
    }
    let lower = trimmed.to_lowercase();
    if FORBIDDEN_TITLE_WORDS.iter().any(|w| lower.contains(w)) {
        return Err(ValidationError::TitleForbidden);
    }
    Ok(trimmed.to_string())
}

/// 日付の構造規則（並び順・期間上限）を検証する
///
/// 既存計画の更新・復元でも適用される規則のみ。
/// 開始日の新しさは問わない
pub fn validate_structural_dates(start: NaiveDate, end: NaiveDate) -> ValidationResult<()> {
    if start > end {
        return Err(ValidationError::DateRangeReversed);
    }
    if (end - start).num_days() > MAX_PLAN_SPAN_DAYS {
        return Err(ValidationError::PlanSpanTooLong {
            max: MAX_PLAN_SPAN_DAYS,
        });
    }
    Ok(())
}

/// 新規作成時の日付範囲を検証する
///
/// 構造規則に加え、開始日が1週間より前の過去でないことを要求する
pub fn validate_date_range(
    start: NaiveDate,
    end: NaiveDate,
    today: NaiveDate,
) -> ValidationResult<()> {
    validate_structural_dates(start, end)?;
    if start < today - Duration::days(PAST_START_GRACE_DAYS) {
        return Err(ValidationError::StartDateTooOld);
    }
    Ok(())
}

/// 1日あたり目標学習時間を検証する
pub fn validate_hours_per_day(hours: i32) -> ValidationResult<()> {
    if !(MIN_HOURS_PER_DAY..=MAX_HOURS_PER_DAY).contains(&hours) {
        return Err(ValidationError::TargetHoursOutOfRange {
            min: MIN_HOURS_PER_DAY,
            max: MAX_HOURS_PER_DAY,
        });
    }
    Ok(())
}

// ==========================================
// 実現可能性評価 (助言レベル)
// ==========================================

/// 計画の実現可能性評価の結果
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanFeasibility {
    pub feasible: bool,
    pub message: String,
}

/// 計画の実現可能性を評価する
///
/// # 規則
/// - 総学習時間（日数差 × 1日あたり時間）が50時間未満 → 実現困難
/// - 1日8時間超 → 実現困難
/// - 30日未満 → 実現可能だが短期集中の注意を付す
pub fn evaluate_feasibility(
    start: NaiveDate,
    end: NaiveDate,
    hours_per_day: i32,
) -> PlanFeasibility {
    let span_days = (end - start).num_days();
    let total_hours = span_days * i64::from(hours_per_day);

    if total_hours < MIN_FEASIBLE_TOTAL_HOURS {
        return PlanFeasibility {
            feasible: false,
            message: i18n::t("feasibility.total_too_low"),
        };
    }
    if hours_per_day > MAX_SUSTAINABLE_HOURS_PER_DAY {
        return PlanFeasibility {
            feasible: false,
            message: i18n::t("feasibility.daily_hours_excessive"),
        };
    }
    if span_days < SHORT_TERM_SPAN_DAYS {
        return PlanFeasibility {
            feasible: true,
            message: i18n::t("feasibility.short_term"),
        };
    }
    PlanFeasibility {
        feasible: true,
        message: i18n::t("feasibility.ok"),
    }
}
