// ==========================================
// 学習計画管理システム - 設定層
// ==========================================
// 責務: 計画ポリシーのしきい値管理
// 既定値はドメイン規則の標準値。JSON による部分上書きに対応
// ==========================================

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// 計画ポリシー設定
///
/// すべての項目に既定値があり、JSON では変更したい項目だけを
/// 指定すればよい
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlanPolicyConfig {
    /// 同時に実行できる学習計画数の上限
    pub active_plan_limit: usize,

    /// 効率性レベル: 過負荷とみなす1日あたり時間（これを超えたら）
    pub overloaded_hours_per_day: f64,

    /// 効率性レベル: 集中的とみなす1日あたり時間（これを超えたら）
    pub intensive_hours_per_day: f64,

    /// 効率性レベル: バランス良好の下限（これ以上なら）
    pub balanced_min_hours_per_day: f64,

    /// 効率性レベル: 軽めの下限（これ以上なら）。未満は不足
    pub light_min_hours_per_day: f64,

    /// リスク評価: 期間が短すぎるとみなす日数（未満なら）
    pub short_duration_risk_days: i64,

    /// リスク評価: 1日の負荷が重いとみなす時間（これを超えたら）
    pub heavy_daily_load_hours: i32,
}

impl Default for PlanPolicyConfig {
    fn default() -> Self {
        Self {
            active_plan_limit: 3,
            overloaded_hours_per_day: 6.0,
            intensive_hours_per_day: 4.0,
            balanced_min_hours_per_day: 2.0,
            light_min_hours_per_day: 1.0,
            short_duration_risk_days: 30,
            heavy_daily_load_hours: 4,
        }
    }
}

impl PlanPolicyConfig {
    /// JSON 文字列から設定を読み込む
    ///
    /// 指定のない項目は既定値のまま
    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("計画ポリシー設定の読み込みに失敗しました")
    }
}
