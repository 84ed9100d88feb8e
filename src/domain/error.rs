// ==========================================
// 学習計画管理システム - ドメインエラー定義
// ==========================================
// thiserror による構造化エラー型
// 検証エラー (ValidationError) と状態遷移エラー (StateError) を分離
// ==========================================

use chrono::NaiveDate;
use thiserror::Error;

/// ドメイン検証エラー
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    // ===== 識別子 =====
    #[error("Identity value must not be null or empty")]
    EmptyId,

    // ===== ユーザー名 =====
    #[error("名前は必須です")]
    NameRequired,

    #[error("名前は{max}文字以内で入力してください")]
    NameTooLong { max: usize },

    #[error("不適切な文字が含まれています")]
    NameForbidden,

    #[error("管理者名として不適切です")]
    AdminNameInvalid,

    // ===== メールアドレス =====
    #[error("メールアドレスは必須です")]
    EmailRequired,

    #[error("有効なメールアドレスを入力してください")]
    EmailInvalid,

    #[error("企業ドメインのメールアドレスが必要です")]
    CorporateEmailRequired,

    #[error("管理者は企業ドメインのメールアドレスが必要です")]
    AdminCorporateEmailRequired,

    // ===== 学習カテゴリ =====
    #[error("カテゴリ名は必須です")]
    CategoryNameRequired,

    #[error("カテゴリ名は{max}文字以内で入力してください")]
    CategoryNameTooLong { max: usize },

    #[error("カテゴリ名に無効な文字が含まれています")]
    CategoryNameForbiddenChars,

    #[error("試験分野は午前、午後、実践、理論のいずれかを含む必要があります")]
    ExamCategoryNameInvalid,

    // ===== 学習計画 =====
    #[error("学習計画のタイトルは必須です")]
    TitleRequired,

    #[error("タイトルは{max}文字以内で入力してください")]
    TitleTooLong { max: usize },

    #[error("タイトルに不適切な単語が含まれています")]
    TitleForbidden,

    #[error("開始日は終了日より前である必要があります")]
    DateRangeReversed,

    #[error("学習計画の期間は{max}日以内で設定してください")]
    PlanSpanTooLong { max: i64 },

    #[error("開始日は過去1週間より前に設定できません")]
    StartDateTooOld,

    #[error("1日の目標学習時間は{min}-{max}時間の範囲で設定してください")]
    TargetHoursOutOfRange { min: i32, max: i32 },

    #[error("{0}")]
    PlanInfeasible(String),

    #[error("試験日は最低2週間後に設定してください")]
    ExamDateTooSoon,

    #[error("短期集中学習計画は{min}-{max}日の範囲で設定してください")]
    IntensiveDurationOutOfRange { min: i64, max: i64 },

    #[error("長期学習計画は{min}日以上で設定してください")]
    LongTermSpanTooShort { min: i64 },

    // ===== 学習目標 =====
    #[error("スコアは{min}-{max}の範囲で設定してください")]
    ScoreOutOfRange { min: i32, max: i32 },

    #[error("目標学習時間は0時間以上で設定してください")]
    HoursNegative,

    #[error("目標学習時間は{max}時間以内で設定してください")]
    HoursTooLarge { max: i32 },

    #[error("{0}")]
    GoalUnreasonable(String),

    #[error("{0}")]
    ProgressUpdateRejected(String),

    #[error("短期集中目標のスコアは{min}以上で設定してください")]
    IntensiveScoreTooLow { min: i32 },

    #[error("デフォルト目標作成には{required}つのカテゴリが必要です")]
    DefaultGoalsCategoryShortage { required: usize },

    // ===== 計画ポリシー =====
    #[error("指定期間（{start}〜{end}）に重複する学習計画が存在します")]
    OverlappingPlan { start: NaiveDate, end: NaiveDate },

    #[error("同時に実行できる学習計画は{max}つまでです")]
    ActivePlanLimitExceeded { max: usize },
}

/// 検証結果型エイリアス
pub type ValidationResult<T> = Result<T, ValidationError>;

/// 状態遷移エラー
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StateError {
    #[error("学習計画は既に完了しています")]
    AlreadyCompleted,

    #[error("学習計画は既にキャンセルされています")]
    AlreadyCancelled,

    #[error("完了した学習計画はキャンセルできません")]
    CompletedCannotCancel,

    #[error("実施中の学習計画のみ一時停止できます")]
    NotActive,

    #[error("一時停止中の学習計画のみ再開できます")]
    NotPaused,
}

/// 状態遷移結果型エイリアス
pub type StateResult<T> = Result<T, StateError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_messages() {
        assert_eq!(
            ValidationError::NameTooLong { max: 100 }.to_string(),
            "名前は100文字以内で入力してください"
        );
        assert_eq!(
            ValidationError::TargetHoursOutOfRange { min: 1, max: 24 }.to_string(),
            "1日の目標学習時間は1-24時間の範囲で設定してください"
        );
        assert_eq!(
            ValidationError::EmptyId.to_string(),
            "Identity value must not be null or empty"
        );
    }

    #[test]
    fn test_overlapping_plan_message_embeds_dates() {
        let err = ValidationError::OverlappingPlan {
            start: NaiveDate::from_ymd_opt(2024, 4, 1).unwrap(),
            end: NaiveDate::from_ymd_opt(2024, 6, 30).unwrap(),
        };
        assert_eq!(
            err.to_string(),
            "指定期間（2024-04-01〜2024-06-30）に重複する学習計画が存在します"
        );
    }

    #[test]
    fn test_state_error_messages() {
        assert_eq!(
            StateError::AlreadyCompleted.to_string(),
            "学習計画は既に完了しています"
        );
        assert_eq!(
            StateError::NotPaused.to_string(),
            "一時停止中の学習計画のみ再開できます"
        );
    }
}
