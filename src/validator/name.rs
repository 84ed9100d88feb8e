// ==========================================
// ユーザー名バリデータ
// ==========================================
// 規則: 必須・最大100文字・禁止語を含まない
// 正規化: 前後の空白を除去した値を返す
// ==========================================

use crate::domain::error::{ValidationError, ValidationResult};

/// ユーザー名の最大文字数
pub const MAX_NAME_LENGTH: usize = 100;

// 一般ユーザー名の禁止語（部分一致、大文字小文字を区別しない）
const FORBIDDEN_NAME_WORDS: [&str; 2] = ["admin", "root"];

// 管理者名で追加拒否する語
const FORBIDDEN_ADMIN_NAME_WORDS: [&str; 2] = ["admin", "test"];

/// ユーザー名を検証し、正規化済みの値を返す
///
/// # 規則
/// - 空白のみは拒否
/// - 100文字以内
/// - "admin" / "root" を含む名前は拒否
pub fn validate_user_name(name: &str) -> ValidationResult<String> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::NameRequired);
    }
    if trimmed.chars().count() > MAX_NAME_LENGTH {
        return Err(ValidationError::NameTooLong {
            max: MAX_NAME_LENGTH,
        });
    }
    let lower = trimmed.to_lowercase();
    if FORBIDDEN_NAME_WORDS.iter().any(|w| lower.contains(w)) {
        return Err(ValidationError::NameForbidden);
    }
    Ok(trimmed.to_string())
}

/// 管理者名を検証し、正規化済みの値を返す
///
/// 管理者名固有の禁止語チェックを先に行い、その後に
/// 一般ユーザー名の規則を適用する
pub fn validate_admin_name(name: &str) -> ValidationResult<String> {
    let lower = name.trim().to_lowercase();
    if FORBIDDEN_ADMIN_NAME_WORDS.iter().any(|w| lower.contains(w)) {
        return Err(ValidationError::AdminNameInvalid);
    }
    validate_user_name(name)
}
