// ==========================================
// メールアドレスバリデータ
// ==========================================
// 形式規則: local@domain.tld
//   - local: 英数字と . _ % + - のみ
//   - domain: 英数字と . - のみ、末尾は2文字以上の英字 TLD
// 正規化: 前後の空白を除去し小文字化した値を返す
// ==========================================

use crate::domain::error::{ValidationError, ValidationResult};

// コンシューマ向けドメイン。これら以外を企業ドメインとみなす
pub const CONSUMER_DOMAINS: [&str; 4] = ["gmail.com", "yahoo.com", "hotmail.com", "outlook.com"];

/// メールアドレスを検証し、正規化済みの値を返す
pub fn validate_email(email: &str) -> ValidationResult<String> {
    let trimmed = email.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::EmailRequired);
    }
    let normalized = trimmed.to_lowercase();
    if !is_valid_format(&normalized) {
        return Err(ValidationError::EmailInvalid);
    }
    Ok(normalized)
}

/// '@' 以降のドメイン部を取り出す。'@' が無ければ空文字列
pub fn extract_domain(email: &str) -> &str {
    email.find('@').map(|at| &email[at + 1..]).unwrap_or("")
}

/// 企業ドメインのメールアドレスか
///
/// ドメイン部があり、かつコンシューマ向けドメイン集合に
/// 含まれなければ企業ドメイン扱い
pub fn is_corporate_email(email: &str) -> bool {
    let domain = extract_domain(email).to_lowercase();
    !domain.is_empty() && !CONSUMER_DOMAINS.contains(&domain.as_str())
}

// 形式チェック本体。正規表現は使わず1パスで走査する
fn is_valid_format(s: &str) -> bool {
    let Some(at) = s.find('@') else {
        return false;
    };
    let local = &s[..at];
    let domain = &s[at + 1..];

    if local.is_empty() || domain.contains('@') {
        return false;
    }
    if !local
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '%' | '+' | '-'))
    {
        return false;
    }

    // ドメインは「英数字 . - の並び」+「.」+「2文字以上の英字」で終わる
    let Some(dot) = domain.rfind('.') else {
        return false;
    };
    let head = &domain[..dot];
    let tld = &domain[dot + 1..];
    if head.is_empty() {
        return false;
    }
    if !head
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '-'))
    {
        return false;
    }
    tld.len() >= 2 && tld.chars().all(|c| c.is_ascii_alphabetic())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_email_is_normalized() {
        assert_eq!(
            validate_email("  ALICE@EXAMPLE.COM  ").unwrap(),
            "alice@example.com"
        );
        assert_eq!(
            validate_email("taro.yamada+study@mail.example.co.jp").unwrap(),
            "taro.yamada+study@mail.example.co.jp"
        );
    }

    #[test]
    fn test_blank_email_rejected() {
        assert_eq!(validate_email(""), Err(ValidationError::EmailRequired));
        assert_eq!(validate_email("  "), Err(ValidationError::EmailRequired));
    }

    #[test]
    fn test_malformed_email_rejected() {
        for bad in [
            "no-at-mark.example.com",
            "@example.com",
            "user@",
            "user@no-tld",
            "user@example.c",      // TLD は2文字以上
            "user@example.co1",    // TLD は英字のみ
            "user@@example.com",
            "user name@example.com",
            "user@exam ple.com",
            "太郎@example.com",
        ] {
            assert_eq!(
                validate_email(bad),
                Err(ValidationError::EmailInvalid),
                "accepted: {bad}"
            );
        }
    }

    #[test]
    fn test_extract_domain() {
        assert_eq!(extract_domain("user@example.com"), "example.com");
        assert_eq!(extract_domain("no-at-mark"), "");
    }

    #[test]
    fn test_consumer_domains_are_not_corporate() {
        for consumer in [
            "a@gmail.com",
            "b@yahoo.com",
            "c@hotmail.com",
            "d@outlook.com",
        ] {
            assert!(!is_corporate_email(consumer), "corporate: {consumer}");
        }
        assert!(is_corporate_email("alice@example.com"));
        assert!(is_corporate_email("staff@company.co.jp"));
        // ドメイン部が無ければ企業ドメインとは判定しない
        assert!(!is_corporate_email("no-at-mark"));
    }
}
