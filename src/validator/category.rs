// ==========================================
// 学習カテゴリバリデータ
// ==========================================
// 規則: 名前は必須・最大100文字・マークアップ系文字を拒否
// 表示順は [0, 999] に丸める（拒否ではなくクランプ）
// ==========================================

use crate::domain::error::{ValidationError, ValidationResult};

/// カテゴリ名の最大文字数
pub const MAX_CATEGORY_NAME_LENGTH: usize = 100;

/// 表示順の上限
pub const MAX_DISPLAY_ORDER: i32 = 999;

// カテゴリ名に含めてはならない文字
const FORBIDDEN_CHARS: [char; 5] = ['<', '>', '"', '\'', '&'];

// 試験分野カテゴリが含むべきキーワード
pub const EXAM_KEYWORDS: [&str; 4] = ["午前", "午後", "実践", "理論"];

/// カテゴリ名を検証し、正規化済みの値を返す
pub fn validate_category_name(name: &str) -> ValidationResult<String> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::CategoryNameRequired);
    }
    if trimmed.chars().count() > MAX_CATEGORY_NAME_LENGTH {
        return Err(ValidationError::CategoryNameTooLong {
            max: MAX_CATEGORY_NAME_LENGTH,
        });
    }
    if trimmed.chars().any(|c| FORBIDDEN_CHARS.contains(&c)) {
        return Err(ValidationError::CategoryNameForbiddenChars);
    }
    Ok(trimmed.to_string())
}

/// 試験分野カテゴリ名を検証し、正規化済みの値を返す
///
/// 通常のカテゴリ名規則に加え、試験分野キーワードの
/// いずれかを含むことを要求する
pub fn validate_exam_category_name(name: &str) -> ValidationResult<String> {
    let normalized = validate_category_name(name)?;
    if !EXAM_KEYWORDS.iter().any(|k| normalized.contains(k)) {
        return Err(ValidationError::ExamCategoryNameInvalid);
    }
    Ok(normalized)
}

/// 説明文を正規化する（前後の空白を除去）
pub fn normalize_description(description: &str) -> String {
    description.trim().to_string()
}

/// 表示順を [0, 999] の範囲に丸める
pub fn clamp_display_order(order: i32) -> i32 {
    order.clamp(0, MAX_DISPLAY_ORDER)
}
