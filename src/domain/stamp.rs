// ==========================================
// 学習計画管理システム - エンティティ時刻印
// ==========================================
// 作成時刻と更新時刻の組。エンティティはコピーオンライトで
// 更新されるため、時刻印も新しい値を返す形で扱う
// ==========================================

use chrono::{NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

/// 作成・更新時刻の組
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityStamp {
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl EntityStamp {
    /// 現在時刻で新規作成する（作成時刻 = 更新時刻）
    pub fn now() -> Self {
        let now = Utc::now().naive_utc();
        Self {
            created_at: now,
            updated_at: now,
        }
    }

    /// 既存の時刻から復元する
    pub fn of(created_at: NaiveDateTime, updated_at: NaiveDateTime) -> Self {
        Self {
            created_at,
            updated_at,
        }
    }

    /// 更新時刻のみ現在時刻へ進めた時刻印を返す
    pub fn touched(&self) -> Self {
        Self {
            created_at: self.created_at,
            updated_at: Utc::now().naive_utc(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_now_aligns_created_and_updated() {
        let stamp = EntityStamp::now();
        assert_eq!(stamp.created_at, stamp.updated_at);
    }

    #[test]
    fn test_touched_keeps_created_at() {
        let stamp = EntityStamp::now();
        let touched = stamp.touched();
        assert_eq!(touched.created_at, stamp.created_at);
        assert!(touched.updated_at >= stamp.updated_at);
    }
}
