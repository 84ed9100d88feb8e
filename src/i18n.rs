// ==========================================
// 国際化 (i18n) モジュール
// ==========================================
// rust-i18n ライブラリを使用
// 日本語（デフォルト）と英語に対応
// ==========================================
// 注意: rust_i18n::i18n! マクロは lib.rs で初期化済み
// ==========================================

/// 現在のロケールを取得する
pub fn current_locale() -> String {
    rust_i18n::locale().to_string()
}

/// ロケールを設定する
///
/// # 引数
/// - locale: ロケールコード（"ja" または "en"）
pub fn set_locale(locale: &str) {
    rust_i18n::set_locale(locale);
}

/// メッセージを翻訳する（引数なし）
///
/// # 例
/// ```no_run
/// use study_plan_engine::i18n::t;
/// let msg = t("feasibility.ok");
/// ```
pub fn t(key: &str) -> String {
    rust_i18n::t!(key).to_string()
}

/// メッセージを翻訳する（引数あり）
///
/// # 例
/// ```no_run
/// use study_plan_engine::i18n::t_with_args;
/// let msg = t_with_args("feasibility.ok", &[("days", "30")]);
/// ```
pub fn t_with_args(key: &str, args: &[(&str, &str)]) -> String {
    let mut result = rust_i18n::t!(key).to_string();
    for (k, v) in args {
        let placeholder = format!("%{{{}}}", k);
        result = result.replace(&placeholder, v);
    }
    result
}

// rust-i18n のロケールはグローバル状態であり、Rust のテストは並列実行される。
// ロケールを切り替えるテストと、翻訳結果を比較するテストはこのロックで直列化する
#[cfg(test)]
pub(crate) static LOCALE_TEST_LOCK: std::sync::Mutex<()> = std::sync::Mutex::new(());
