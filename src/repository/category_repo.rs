// ==========================================
// 学習計画管理システム - 学習カテゴリストア契約
// ==========================================
// 責務: カテゴリのデータアクセスインターフェースを定義する
// 規約: Repository は業務ロジックを持たない。データの出し入れのみ
// ==========================================

use crate::domain::category::StudyCategory;
use crate::domain::ids::StudyCategoryId;
use crate::repository::error::RepositoryResult;

// ==========================================
// StudyCategoryCommandRepository Trait (書き込み側)
// ==========================================
pub trait StudyCategoryCommandRepository: Send + Sync {
    /// カテゴリを保存する（既存IDなら上書き）
    fn save(&self, category: &StudyCategory) -> RepositoryResult<()>;

    /// カテゴリを削除する
    ///
    /// # エラー
    /// - `NotFound`: 指定IDが存在しない
    fn delete(&self, id: &StudyCategoryId) -> RepositoryResult<()>;

    /// 複数カテゴリを一括保存する
    fn save_all(&self, categories: &[StudyCategory]) -> RepositoryResult<()> {
        for category in categories {
            self.save(category)?;
        }
        Ok(())
    }

    /// 複数カテゴリを一括削除する
    fn delete_all(&self, ids: &[StudyCategoryId]) -> RepositoryResult<()> {
        for id in ids {
            self.delete(id)?;
        }
        Ok(())
    }

    /// 表示順を一括更新する
    ///
    /// 存在しないIDが含まれる場合は `NotFound`
    fn update_display_orders(&self, orders: &[(StudyCategoryId, i32)]) -> RepositoryResult<()>;
}

// ==========================================
// StudyCategoryQueryRepository Trait (読み込み側)
// ==========================================
pub trait StudyCategoryQueryRepository: Send + Sync {
    /// IDでカテゴリを取得する
    fn find_by_id(&self, id: &StudyCategoryId) -> RepositoryResult<Option<StudyCategory>>;

    /// 全カテゴリを取得する
    fn find_all(&self) -> RepositoryResult<Vec<StudyCategory>>;

    /// 存在チェック
    fn exists_by_id(&self, id: &StudyCategoryId) -> RepositoryResult<bool>;

    /// 件数取得
    fn count(&self) -> RepositoryResult<u64>;

    /// 全カテゴリを表示順で取得する
    fn find_all_ordered(&self) -> RepositoryResult<Vec<StudyCategory>>;

    /// 名前の部分一致でカテゴリを検索する
    fn find_by_name_containing(&self, name: &str) -> RepositoryResult<Vec<StudyCategory>>;

    /// 試験分野カテゴリを取得する
    fn find_exam_categories(&self) -> RepositoryResult<Vec<StudyCategory>>;

    /// 実践系カテゴリを取得する
    fn find_practical_categories(&self) -> RepositoryResult<Vec<StudyCategory>>;
}
