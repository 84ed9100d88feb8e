// ==========================================
// ログシステム初期化
// ==========================================
// tracing と tracing-subscriber を使用
// 環境変数によるログレベル設定に対応
// ==========================================

use tracing_subscriber::{fmt, EnvFilter};

/// ログシステムを初期化する
///
/// # 環境変数
/// - RUST_LOG: ログレベルフィルタ（デフォルト: info）
///   例: RUST_LOG=debug または RUST_LOG=study_plan_engine=trace
///
/// # 例
/// ```no_run
/// use study_plan_engine::logging;
/// logging::init();
/// ```
pub fn init() {
    // 環境変数からログレベルを読み込む。デフォルトは info
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    // ログフォーマットの設定
    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_line_number(true)
        .init();
}

/// テスト環境向けのログシステムを初期化する
///
/// デバッグしやすいよう、より詳細なログレベルを使用する
pub fn init_test() {
    let _ = fmt()
        .with_env_filter(EnvFilter::new("debug"))
        .with_test_writer()
        .try_init();
}
