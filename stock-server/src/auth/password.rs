//! 口令摘要与校验
//!
//! 存储格式：`hash = hex(sha256(salt ‖ password))`，salt 为 16 随机字节的
//! hex 编码。该格式是凭证文件的既定模式，登录与注册两端都依赖它。

use rand::RngCore;
use sha2::{Digest, Sha256};

/// 口令最短长度
pub const MIN_PASSWORD_LEN: usize = 8;

/// Hex-encode a fresh 16-byte random salt
pub fn generate_salt() -> String {
    let mut bytes = [0u8; 16];
    rand::thread_rng().fill_bytes(&mut bytes);
    hex::encode(bytes)
}

/// Hex SHA-256 digest of salt ‖ password
pub fn hash_password(password: &str, salt: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(salt.as_bytes());
    hasher.update(password.as_bytes());
    hex::encode(hasher.finalize())
}

/// Verify a password against a stored salt + digest
///
/// 对 hex 摘要做常量时间比较，避免逐字节短路泄露前缀信息。
pub fn verify_password(password: &str, salt: &str, expected_hash: &str) -> bool {
    let computed = hash_password(password, salt);
    if computed.len() != expected_hash.len() {
        return false;
    }
    computed
        .bytes()
        .zip(expected_hash.bytes())
        .fold(0u8, |acc, (a, b)| acc | (a ^ b))
        == 0
}

/// Registration-time complexity policy
///
/// 至少 8 字符，含一个数字和一个大写字母。
pub fn check_complexity(password: &str) -> Result<(), &'static str> {
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err("Password too short (min 8 chars)");
    }
    if !password.chars().any(|c| c.is_ascii_digit()) {
        return Err("Password must contain a digit");
    }
    if !password.chars().any(|c| c.is_ascii_uppercase()) {
        return Err("Password must contain an uppercase letter");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_is_deterministic_and_salt_sensitive() {
        let a = hash_password("Secret123", "aa");
        let b = hash_password("Secret123", "aa");
        let c = hash_password("Secret123", "bb");

        assert_eq!(a, b);
        assert_ne!(a, c);
        // hex sha256 digest
        assert_eq!(a.len(), 64);
    }

    #[test]
    fn verify_accepts_correct_and_rejects_wrong_password() {
        let salt = generate_salt();
        let hash = hash_password("Secret123", &salt);

        assert!(verify_password("Secret123", &salt, &hash));
        assert!(!verify_password("Secret124", &salt, &hash));
        assert!(!verify_password("Secret123", &generate_salt(), &hash));
    }

    #[test]
    fn generated_salts_are_distinct_hex() {
        let a = generate_salt();
        let b = generate_salt();

        assert_eq!(a.len(), 32);
        assert!(a.chars().all(|c| c.is_ascii_hexdigit()));
        assert_ne!(a, b);
    }

    #[test]
    fn complexity_policy_enforces_length_digit_and_uppercase() {
        assert!(check_complexity("Ab1defgh").is_ok());
        assert!(check_complexity("Ab1").is_err());
        assert!(check_complexity("abcdefgh1").is_err());
        assert!(check_complexity("Abcdefgh").is_err());
    }
}
