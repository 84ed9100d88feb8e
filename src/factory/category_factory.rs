// ==========================================
// 学習カテゴリファクトリ
// ==========================================
// 責務: カテゴリ構築の唯一の入口
// 定型レシピ: データベーススペシャリスト試験向けの
// デフォルト8カテゴリ一括作成
// ==========================================

use chrono::NaiveDateTime;
use tracing::debug;

use crate::domain::category::StudyCategory;
use crate::domain::error::ValidationResult;
use crate::domain::ids::StudyCategoryId;
use crate::domain::stamp::EntityStamp;
use crate::validator::category;

// デフォルトカテゴリ定義（名前・説明・表示順）
const DEFAULT_CATEGORIES: [(&str, &str, i32); 8] = [
    ("午前I", "基本情報技術者レベルの基礎知識", 1),
    ("午前II", "データベース専門分野", 2),
    ("午後I", "記述式問題（データベース設計・SQL）", 3),
    ("午後II", "論述式問題（システム提案）", 4),
    ("SQL実践", "SQL文法とクエリ最適化", 5),
    ("データベース設計", "概念設計・論理設計・物理設計", 6),
    ("パフォーマンス", "インデックス・実行計画・チューニング", 7),
    ("運用管理", "バックアップ・リカバリ・セキュリティ", 8),
];

// ユーザー定義カテゴリは末尾に配置する
const CUSTOM_CATEGORY_ORDER: i32 = 999;

// ==========================================
// StudyCategoryFactory
// ==========================================
pub struct StudyCategoryFactory {
    // ステートレス。バリデータは純関数のため注入不要
}

impl StudyCategoryFactory {
    /// コンストラクタ
    pub fn new() -> Self {
        Self {}
    }

    /// 新規カテゴリを作成する
    ///
    /// # 引数
    /// - `name`: カテゴリ名（前後の空白は除去される）
    /// - `description`: 説明文（前後の空白は除去される）
    /// - `display_order`: 表示順（[0, 999] へ丸める）
    pub fn create_category(
        &self,
        name: &str,
        description: &str,
        display_order: i32,
    ) -> ValidationResult<StudyCategory> {
        let validated_name = category::validate_category_name(name)?;
        let category = StudyCategory::from_parts(
            StudyCategoryId::generate(),
            validated_name,
            category::normalize_description(description),
            category::clamp_display_order(display_order),
            EntityStamp::now(),
        );
        debug!(category_id = %category.id(), "学習カテゴリを作成しました");
        Ok(category)
    }

    /// 試験分野カテゴリを作成する
    ///
    /// 名前に試験分野キーワード（午前・午後・実践・理論）の
    /// いずれかを含むことを要求する
    pub fn create_exam_category(
        &self,
        exam_type: &str,
        description: &str,
        display_order: i32,
    ) -> ValidationResult<StudyCategory> {
        category::validate_exam_category_name(exam_type)?;
        self.create_category(exam_type, description, display_order)
    }

    /// ユーザー定義カテゴリを作成する（表示順は常に末尾）
    pub fn create_custom_category(
        &self,
        name: &str,
        description: &str,
    ) -> ValidationResult<StudyCategory> {
        self.create_category(name, description, CUSTOM_CATEGORY_ORDER)
    }

    /// デフォルトカテゴリ（試験8分野）を一括作成する
    pub fn create_default_categories(&self) -> ValidationResult<Vec<StudyCategory>> {
        DEFAULT_CATEGORIES
            .iter()
            .map(|(name, description, order)| self.create_category(name, description, *order))
            .collect()
    }

    /// 永続化層から既存カテゴリを復元する
    pub fn restore_category(
        &self,
        id: StudyCategoryId,
        name: &str,
        description: &str,
        display_order: i32,
        created_at: NaiveDateTime,
        updated_at: NaiveDateTime,
    ) -> ValidationResult<StudyCategory> {
        let validated_name = category::validate_category_name(name)?;
        Ok(StudyCategory::from_parts(
            id,
            validated_name,
            category::normalize_description(description),
            category::clamp_display_order(display_order),
            EntityStamp::of(created_at, updated_at),
        ))
    }
}

impl Default for StudyCategoryFactory {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::error::ValidationError;

    #[test]
    fn test_create_category_normalizes_fields() {
        let factory = StudyCategoryFactory::new();
        let category = factory
            .create_category("  午前I  ", "  基礎知識  ", -3)
            .unwrap();
        assert_eq!(category.name(), "午前I");
        assert_eq!(category.description(), "基礎知識");
        assert_eq!(category.display_order(), 0);
    }

    #[test]
    fn test_create_category_rejects_markup_chars() {
        let factory = StudyCategoryFactory::new();
        assert_eq!(
            factory.create_category("<午前>", "", 1),
            Err(ValidationError::CategoryNameForbiddenChars)
        );
    }

    #[test]
    fn test_exam_category_requires_keyword() {
        let factory = StudyCategoryFactory::new();
        assert!(factory.create_exam_category("午後II", "論述式", 4).is_ok());
        assert_eq!(
            factory.create_exam_category("一般教養", "その他", 9),
            Err(ValidationError::ExamCategoryNameInvalid)
        );
    }

    #[test]
    fn test_custom_category_is_placed_last() {
        let factory = StudyCategoryFactory::new();
        let category = factory.create_custom_category("自由研究", "").unwrap();
        assert_eq!(category.display_order(), 999);
    }

    #[test]
    fn test_default_categories_recipe() {
        let factory = StudyCategoryFactory::new();
        let categories = factory.create_default_categories().unwrap();
        assert_eq!(categories.len(), 8);
        assert_eq!(categories[0].name(), "午前I");
        assert_eq!(categories[7].name(), "運用管理");
        // 表示順は 1..=8 の連番
        for (i, category) in categories.iter().enumerate() {
            assert_eq!(category.display_order(), i as i32 + 1);
        }
    }
}
