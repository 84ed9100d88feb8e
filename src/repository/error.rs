// ==========================================
// 学習計画管理システム - ストア層エラー型
// ==========================================
// ツール: thiserror 派生マクロ
// ==========================================

use thiserror::Error;

/// ストア層エラー型
#[derive(Error, Debug)]
pub enum RepositoryError {
    #[error("レコードが見つかりません: {entity} (id={id})")]
    NotFound { entity: String, id: String },

    #[error("ロック取得に失敗しました: {0}")]
    LockError(String),

    #[error("内部エラー: {0}")]
    InternalError(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result 型エイリアス
pub type RepositoryResult<T> = Result<T, RepositoryError>;
