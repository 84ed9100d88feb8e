// ==========================================
// 学習計画管理システム - 学習カテゴリエンティティ
// ==========================================
// 試験分野などの学習主題。表示順を持つ
// 不変オブジェクト。構築はファクトリ経由のみ
// ==========================================

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::error::ValidationResult;
use crate::domain::ids::StudyCategoryId;
use crate::domain::stamp::EntityStamp;
use crate::validator::category;

/// 学習カテゴリエンティティ
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudyCategory {
    id: StudyCategoryId,
    name: String,
    description: String,
    display_order: i32,
    #[serde(flatten)]
    stamp: EntityStamp,
}

impl StudyCategory {
    // ファクトリ専用の構築経路。検証済みの値のみ受け取る
    pub(crate) fn from_parts(
        id: StudyCategoryId,
        name: String,
        description: String,
        display_order: i32,
        stamp: EntityStamp,
    ) -> Self {
        Self {
            id,
            name,
            description,
            display_order,
            stamp,
        }
    }

    pub fn id(&self) -> &StudyCategoryId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn display_order(&self) -> i32 {
        self.display_order
    }

    pub fn created_at(&self) -> NaiveDateTime {
        self.stamp.created_at
    }

    pub fn updated_at(&self) -> NaiveDateTime {
        self.stamp.updated_at
    }

    /// カテゴリ内容を更新した新しいインスタンスを返す
    pub fn update_category(
        &self,
        name: &str,
        description: &str,
        display_order: i32,
    ) -> ValidationResult<Self> {
        let name = category::validate_category_name(name)?;
        Ok(Self {
            id: self.id.clone(),
            name,
            description: category::normalize_description(description),
            display_order: category::clamp_display_order(display_order),
            stamp: self.stamp.touched(),
        })
    }

    // 表示順のみ差し替えた新しいインスタンスを返す（一括並べ替え用）
    pub(crate) fn with_display_order(&self, display_order: i32) -> Self {
        Self {
            id: self.id.clone(),
            name: self.name.clone(),
            description: self.description.clone(),
            display_order: category::clamp_display_order(display_order),
            stamp: self.stamp.touched(),
        }
    }

    /// 試験科目系カテゴリか（午前・午後）
    pub fn is_exam_category(&self) -> bool {
        self.name.contains("午前") || self.name.contains("午後")
    }

    /// 実技系カテゴリか（実践・SQL・設計）
    pub fn is_practical_category(&self) -> bool {
        self.name.contains("実践") || self.name.contains("SQL") || self.name.contains("設計")
    }
}
