// ==========================================
// 学習計画管理システム - ユーザーエンティティ
// ==========================================
// 不変オブジェクト。更新は新しいインスタンスを返す
// 構築はファクトリ経由のみ（from_parts は crate 内限定）
// ==========================================

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::error::ValidationResult;
use crate::domain::ids::UserId;
use crate::domain::stamp::EntityStamp;
use crate::validator::{email, name};

/// ユーザーエンティティ
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    id: UserId,
    name: String,
    email: String,
    #[serde(flatten)]
    stamp: EntityStamp,
}

impl User {
    // ファクトリ専用の構築経路。検証済みの値のみ受け取る
    pub(crate) fn from_parts(id: UserId, name: String, email: String, stamp: EntityStamp) -> Self {
        Self {
            id,
            name,
            email,
            stamp,
        }
    }

    pub fn id(&self) -> &UserId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn created_at(&self) -> NaiveDateTime {
        self.stamp.created_at
    }

    pub fn updated_at(&self) -> NaiveDateTime {
        self.stamp.updated_at
    }

    /// プロフィールを更新した新しいインスタンスを返す
    ///
    /// 識別子と作成時刻は引き継ぎ、更新時刻のみ進む
    pub fn update_profile(&self, name: &str, email: &str) -> ValidationResult<Self> {
        let name = name::validate_user_name(name)?;
        let email = email::validate_email(email)?;
        Ok(Self {
            id: self.id.clone(),
            name,
            email,
            stamp: self.stamp.touched(),
        })
    }

    /// メールアドレスのドメイン部（`@` 以降）
    pub fn email_domain(&self) -> Option<&str> {
        let domain = email::extract_domain(&self.email);
        (!domain.is_empty()).then_some(domain)
    }

    /// 企業ドメインのメールアドレスを持つか
    pub fn is_corporate_email(&self) -> bool {
        email::is_corporate_email(&self.email)
    }

    /// 表示名。現状は氏名をそのまま返す
    pub fn display_name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_user() -> User {
        User::from_parts(
            UserId::generate(),
            "山田太郎".to_string(),
            "taro@example.com".to_string(),
            EntityStamp::now(),
        )
    }

    #[test]
    fn test_update_profile_returns_new_instance() {
        let user = sample_user();
        let updated = user.update_profile("  佐藤花子 ", "HANAKO@Example.COM").unwrap();

        assert_eq!(updated.id(), user.id());
        assert_eq!(updated.created_at(), user.created_at());
        assert_eq!(updated.name(), "佐藤花子");
        assert_eq!(updated.email(), "hanako@example.com");
        // 元のインスタンスは変化しない
        assert_eq!(user.name(), "山田太郎");
    }

    #[test]
    fn test_update_profile_rejects_invalid_input() {
        let user = sample_user();
        assert!(user.update_profile("", "taro@example.com").is_err());
        assert!(user.update_profile("山田太郎", "broken-email").is_err());
    }

    #[test]
    fn test_email_domain() {
        let user = sample_user();
        assert_eq!(user.email_domain(), Some("example.com"));
        assert_eq!(user.display_name(), "山田太郎");
    }

    #[test]
    fn test_corporate_email_detection() {
        let corporate = sample_user();
        assert!(corporate.is_corporate_email());

        let consumer = User::from_parts(
            UserId::generate(),
            "山田太郎".to_string(),
            "taro@gmail.com".to_string(),
            EntityStamp::now(),
        );
        assert!(!consumer.is_corporate_email());
    }
}
