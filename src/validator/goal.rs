// ==========================================
// 学習目標バリデータ
// ==========================================
// ハード規則: スコア [0,100]、目標時間 [0,10000]
// 助言規則: 目標の組み合わせ妥当性 (GoalValidity) と
//           進捗更新の事前チェック (ProgressUpdateCheck)
// ==========================================

use serde::{Deserialize, Serialize};

use crate::domain::error::{ValidationError, ValidationResult};
use crate::i18n;

/// 目標スコアの下限
pub const MIN_SCORE: i32 = 0;

/// 目標スコアの上限
pub const MAX_SCORE: i32 = 100;

/// 目標学習時間の上限
pub const MAX_TARGET_HOURS: i32 = 10000;

/// 1日に設定できる学習時間の上限
pub const MAX_DAILY_STUDY_HOURS: i32 = 24;

// 妥当性判定のしきい値
const HIGH_SCORE_THRESHOLD: i32 = 90;
const HIGH_SCORE_MIN_HOURS: i32 = 20;
const LOW_SCORE_THRESHOLD: i32 = 50;
const LOW_SCORE_MAX_HOURS: i32 = 100;
const EXCESSIVE_HOURS_THRESHOLD: i32 = 500;

/// 目標スコアを検証する
pub fn validate_target_score(score: i32) -> ValidationResult<()> {
    if !(MIN_SCORE..=MAX_SCORE).contains(&score) {
        return Err(ValidationError::ScoreOutOfRange {
            min: MIN_SCORE,
            max: MAX_SCORE,
        });
    }
    Ok(())
}

/// 目標学習時間を検証する
pub fn validate_target_hours(hours: i32) -> ValidationResult<()> {
    if hours < 0 {
        return Err(ValidationError::HoursNegative);
    }
    if hours > MAX_TARGET_HOURS {
        return Err(ValidationError::HoursTooLarge {
            max: MAX_TARGET_HOURS,
        });
    }
    Ok(())
}

// ==========================================
// 目標妥当性評価 (助言レベル)
// ==========================================

/// 目標の組み合わせ妥当性評価の結果
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GoalValidity {
    pub valid: bool,
    pub message: String,
}

/// スコアと学習時間の組み合わせの妥当性を評価する
///
/// ハードエラーではなく助言として返す。呼び出し側が
/// ブロックするか警告に留めるかを決める
pub fn assess_goal_validity(score: i32, hours: i32) -> GoalValidity {
    if score >= HIGH_SCORE_THRESHOLD && hours < HIGH_SCORE_MIN_HOURS {
        return GoalValidity {
            valid: false,
            message: i18n::t("goal_validity.high_score_needs_hours"),
        };
    }
    if score <= LOW_SCORE_THRESHOLD && hours > LOW_SCORE_MAX_HOURS {
        return GoalValidity {
            valid: false,
            message: i18n::t("goal_validity.low_score_excess_hours"),
        };
    }
    if hours > EXCESSIVE_HOURS_THRESHOLD {
        return GoalValidity {
            valid: false,
            message: i18n::t("goal_validity.hours_excessive"),
        };
    }
    GoalValidity {
        valid: true,
        message: i18n::t("goal_validity.ok"),
    }
}

// ==========================================
// 進捗更新の事前チェック (助言レベル)
// ==========================================

/// 進捗更新入力の事前チェック結果
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressUpdateCheck {
    pub valid: bool,
    pub message: String,
}

/// 進捗更新の入力値を事前チェックする
///
/// エンティティ側の更新は不正値を黙って無視するため、
/// 利用者へ理由を提示したい場合はこのチェックを先に呼ぶ。
/// 未指定 (None) の項目はチェック対象外
pub fn check_progress_update(
    new_score: Option<i32>,
    additional_hours: Option<i32>,
) -> ProgressUpdateCheck {
    if let Some(score) = new_score {
        if !(MIN_SCORE..=MAX_SCORE).contains(&score) {
            return ProgressUpdateCheck {
                valid: false,
                message: i18n::t("progress_check.score_out_of_range"),
            };
        }
    }
    if let Some(hours) = additional_hours {
        if hours < 0 {
            return ProgressUpdateCheck {
                valid: false,
                message: i18n::t("progress_check.hours_negative"),
            };
        }
        if hours > MAX_DAILY_STUDY_HOURS {
            return ProgressUpdateCheck {
                valid: false,
                message: i18n::t("progress_check.hours_over_daily_limit"),
            };
        }
    }
    ProgressUpdateCheck {
        valid: true,
        message: i18n::t("progress_check.ok"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_range() {
        assert!(validate_target_score(0).is_ok());
        assert!(validate_target_score(100).is_ok());
        assert_eq!(
            validate_target_score(-1),
            Err(ValidationError::ScoreOutOfRange { min: 0, max: 100 })
        );
        assert_eq!(
            validate_target_score(101),
            Err(ValidationError::ScoreOutOfRange { min: 0, max: 100 })
        );
    }

    #[test]
    fn test_hours_range() {
        assert!(validate_target_hours(0).is_ok());
        assert!(validate_target_hours(10000).is_ok());
        assert_eq!(
            validate_target_hours(-1),
            Err(ValidationError::HoursNegative)
        );
        assert_eq!(
            validate_target_hours(10001),
            Err(ValidationError::HoursTooLarge { max: 10000 })
        );
    }

    #[test]
    fn test_high_score_needs_hours() {
        let result = assess_goal_validity(90, 19);
        assert!(!result.valid);

        // 20時間以上なら妥当
        assert!(assess_goal_validity(90, 20).valid);
    }

    #[test]
    fn test_low_score_excess_hours() {
        let result = assess_goal_validity(50, 101);
        assert!(!result.valid);

        assert!(assess_goal_validity(50, 100).valid);
        // スコア51なら低スコア規則の対象外
        assert!(assess_goal_validity(51, 101).valid);
    }

    #[test]
    fn test_excessive_hours() {
        let result = assess_goal_validity(70, 501);
        assert!(!result.valid);

        assert!(assess_goal_validity(70, 500).valid);
    }

    #[test]
    fn test_rule_order_high_score_wins() {
        // スコア90・時間19は「高スコア」規則が先に適用される
        let result = assess_goal_validity(90, 19);
        assert!(!result.valid);
        assert_ne!(result, assess_goal_validity(90, 501));
    }

    #[test]
    fn test_progress_update_check() {
        assert!(check_progress_update(Some(80), Some(3)).valid);
        assert!(!check_progress_update(Some(-1), Some(3)).valid);
        assert!(!check_progress_update(Some(101), Some(3)).valid);
        assert!(!check_progress_update(Some(80), Some(-1)).valid);
        assert!(!check_progress_update(Some(80), Some(25)).valid);
        // 境界: 24時間ちょうどは許容
        assert!(check_progress_update(Some(80), Some(24)).valid);
        // 未指定の項目はチェックしない
        assert!(check_progress_update(None, None).valid);
        assert!(check_progress_update(None, Some(5)).valid);
    }
}
