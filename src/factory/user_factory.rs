// ==========================================
// ユーザーファクトリ
// ==========================================
// 責務: ユーザーエンティティ構築の唯一の入口
// 一般・企業・管理者・テスト用の各経路を提供する
// ==========================================

use chrono::NaiveDateTime;
use tracing::debug;

use crate::domain::error::{ValidationError, ValidationResult};
use crate::domain::ids::UserId;
use crate::domain::stamp::EntityStamp;
use crate::domain::user::User;
use crate::validator::{email, name};

// ==========================================
// UserFactory
// ==========================================
pub struct UserFactory {
    // ステートレス。バリデータは純関数のため注入不要
}

impl UserFactory {
    /// コンストラクタ
    pub fn new() -> Self {
        Self {}
    }

    /// 新規ユーザーを作成する
    ///
    /// # 引数
    /// - `name`: ユーザー名（前後の空白は除去される）
    /// - `email`: メールアドレス（小文字へ正規化される）
    pub fn create_user(&self, name: &str, email: &str) -> ValidationResult<User> {
        let validated_name = name::validate_user_name(name)?;
        let validated_email = email::validate_email(email)?;

        let user = User::from_parts(
            UserId::generate(),
            validated_name,
            validated_email,
            EntityStamp::now(),
        );
        debug!(user_id = %user.id(), "ユーザーを作成しました");
        Ok(user)
    }

    /// 企業ユーザーを作成する
    ///
    /// 企業ドメイン（コンシューマ向け以外）のメールアドレスを要求する
    pub fn create_corporate_user(&self, name: &str, email: &str) -> ValidationResult<User> {
        let validated_email = email::validate_email(email)?;
        if !email::is_corporate_email(&validated_email) {
            return Err(ValidationError::CorporateEmailRequired);
        }
        self.create_user(name, email)
    }

    /// 管理者ユーザーを作成する
    ///
    /// 管理者名の追加規則と企業ドメインの両方を要求する
    pub fn create_admin_user(&self, name: &str, email: &str) -> ValidationResult<User> {
        let validated_name = name::validate_admin_name(name)?;
        let validated_email = email::validate_email(email)?;
        if !email::is_corporate_email(&validated_email) {
            return Err(ValidationError::AdminCorporateEmailRequired);
        }

        let user = User::from_parts(
            UserId::generate(),
            validated_name,
            validated_email,
            EntityStamp::now(),
        );
        debug!(user_id = %user.id(), "管理者ユーザーを作成しました");
        Ok(user)
    }

    /// テスト用ユーザーを作成する
    ///
    /// 名前から example.com ドメインのメールアドレスを導出する
    pub fn create_test_user(&self, name: &str) -> ValidationResult<User> {
        let test_email = derive_test_email(name);
        self.create_user(name, &test_email)
    }

    /// 永続化層から既存ユーザーを復元する
    ///
    /// 保存時と同じ正規化規則を通し、時刻印は保存値を引き継ぐ
    pub fn restore_user(
        &self,
        id: UserId,
        name: &str,
        email: &str,
        created_at: NaiveDateTime,
        updated_at: NaiveDateTime,
    ) -> ValidationResult<User> {
        let validated_name = name::validate_user_name(name)?;
        let validated_email = email::validate_email(email)?;
        Ok(User::from_parts(
            id,
            validated_name,
            validated_email,
            EntityStamp::of(created_at, updated_at),
        ))
    }
}

impl Default for UserFactory {
    fn default() -> Self {
        Self::new()
    }
}

// 名前から導出するテスト用メールアドレス
// 小文字化し、空白をドットへ置換、英数字とドット以外を除去する
fn derive_test_email(name: &str) -> String {
    let safe_name: String = name
        .to_lowercase()
        .replace(' ', ".")
        .chars()
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || *c == '.')
        .collect();
    format!("{safe_name}@example.com")
}
