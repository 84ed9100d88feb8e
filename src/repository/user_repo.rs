// ==========================================
// 学習計画管理システム - ユーザーストア契約
// ==========================================
// 責務: ユーザーのデータアクセスインターフェースを定義する
// 規約: Repository は業務ロジックを持たない。データの出し入れのみ
// ==========================================

use crate::domain::ids::UserId;
use crate::domain::user::User;
use crate::repository::error::RepositoryResult;

// ==========================================
// UserCommandRepository Trait (書き込み側)
// ==========================================
pub trait UserCommandRepository: Send + Sync {
    /// ユーザーを保存する（既存IDなら上書き）
    fn save(&self, user: &User) -> RepositoryResult<()>;

    /// ユーザーを削除する
    ///
    /// # エラー
    /// - `NotFound`: 指定IDが存在しない
    fn delete(&self, id: &UserId) -> RepositoryResult<()>;

    /// 複数ユーザーを一括保存する
    fn save_all(&self, users: &[User]) -> RepositoryResult<()> {
        for user in users {
            self.save(user)?;
        }
        Ok(())
    }

    /// 複数ユーザーを一括削除する
    fn delete_all(&self, ids: &[UserId]) -> RepositoryResult<()> {
        for id in ids {
            self.delete(id)?;
        }
        Ok(())
    }
}

// ==========================================
// UserQueryRepository Trait (読み込み側)
// ==========================================
pub trait UserQueryRepository: Send + Sync {
    /// IDでユーザーを取得する
    fn find_by_id(&self, id: &UserId) -> RepositoryResult<Option<User>>;

    /// 全ユーザーを取得する
    fn find_all(&self) -> RepositoryResult<Vec<User>>;

    /// 存在チェック
    fn exists_by_id(&self, id: &UserId) -> RepositoryResult<bool>;

    /// 件数取得
    fn count(&self) -> RepositoryResult<u64>;

    /// メールアドレスでユーザーを取得する（完全一致）
    fn find_by_email(&self, email: &str) -> RepositoryResult<Option<User>>;

    /// 名前の部分一致でユーザーを検索する
    fn find_by_name_containing(&self, name: &str) -> RepositoryResult<Vec<User>>;

    /// メールドメインでユーザーを検索する
    fn find_by_email_domain(&self, domain: &str) -> RepositoryResult<Vec<User>>;
}
