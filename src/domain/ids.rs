// ==========================================
// 学習計画管理システム - 識別子定義
// ==========================================
// UUID 文字列を内包する新型識別子
// 空文字列の識別子は構築段階で拒否する
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::domain::error::ValidationError;

// ==========================================
// ユーザー識別子 (User Id)
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(String);

impl UserId {
    /// 新しい識別子を生成する
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// 既存の値から識別子を構築する
    pub fn of(value: &str) -> Result<Self, ValidationError> {
        if value.trim().is_empty() {
            return Err(ValidationError::EmptyId);
        }
        Ok(Self(value.to_string()))
    }

    /// 内部値への参照
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ==========================================
// 学習カテゴリ識別子 (Study Category Id)
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StudyCategoryId(String);

impl StudyCategoryId {
    /// 新しい識別子を生成する
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// 既存の値から識別子を構築する
    pub fn of(value: &str) -> Result<Self, ValidationError> {
        if value.trim().is_empty() {
            return Err(ValidationError::EmptyId);
        }
        Ok(Self(value.to_string()))
    }

    /// 内部値への参照
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StudyCategoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ==========================================
// 学習計画識別子 (Study Plan Id)
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StudyPlanId(String);

impl StudyPlanId {
    /// 新しい識別子を生成する
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// 既存の値から識別子を構築する
    pub fn of(value: &str) -> Result<Self, ValidationError> {
        if value.trim().is_empty() {
            return Err(ValidationError::EmptyId);
        }
        Ok(Self(value.to_string()))
    }

    /// 内部値への参照
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StudyPlanId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ==========================================
// 学習目標識別子 (Study Goal Id)
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StudyGoalId(String);

impl StudyGoalId {
    /// 新しい識別子を生成する
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// 既存の値から識別子を構築する
    pub fn of(value: &str) -> Result<Self, ValidationError> {
        if value.trim().is_empty() {
            return Err(ValidationError::EmptyId);
        }
        Ok(Self(value.to_string()))
    }

    /// 内部値への参照
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StudyGoalId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
