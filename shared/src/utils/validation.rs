//! Common validation patterns
//!
//! Patterns are compiled once and shared by the domain validators and the
//! request DTOs.

use once_cell::sync::Lazy;
use regex::Regex;

/// Account email pattern. Applied after trimming and lowercasing. Word
/// characters are ASCII only.
pub static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?-u:\w)+([.-]?(?-u:\w)+)*@(?-u:\w)+([.-]?(?-u:\w)+)*(\.(?-u:\w){2,3})+$")
        .expect("valid email regex")
});

/// International WhatsApp number: `+`, a non-zero country digit, 2-15 digits in total.
pub static WHATSAPP_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\+[1-9]\d{1,14}$").expect("valid whatsapp regex"));

/// Minimum length of a plaintext password before hashing
pub const MIN_PASSWORD_LENGTH: usize = 6;

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}

pub fn is_valid_whatsapp(number: &str) -> bool {
    WHATSAPP_REGEX.is_match(number)
}

/// Canonical form of an account email: trimmed and lowercased
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// Mask an email for logging: `ana.perez@mail.com` becomes `an***@mail.com`
pub fn mask_email(email: &str) -> String {
    match email.split_once('@') {
        Some((local, domain)) => {
            let visible: String = local.chars().take(2).collect();
            format!("{}***@{}", visible, domain)
        }
        None => "***".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_pattern() {
        assert!(is_valid_email("admin@restaurante.com"));
        assert!(is_valid_email("ana.perez@mail.co"));
        assert!(is_valid_email("juan-p@sub.dominio.mx"));
        assert!(!is_valid_email("sin-arroba.com"));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("a@dominio.comercial"));
        assert!(!is_valid_email("ñandu@mail.com"));
        assert!(!is_valid_email("ana@dominió.com"));
    }

    #[test]
    fn test_whatsapp_pattern() {
        assert!(is_valid_whatsapp("+573001234567"));
        assert!(is_valid_whatsapp("+12"));
        assert!(is_valid_whatsapp("+123456789012345"));
        assert!(!is_valid_whatsapp("+1234567890123456"));
        assert!(!is_valid_whatsapp("+0123456"));
        assert!(!is_valid_whatsapp("3001234567"));
        assert!(!is_valid_whatsapp("+1"));
    }

    #[test]
    fn test_normalize_email() {
        assert_eq!(normalize_email("  Admin@Restaurante.COM "), "admin@restaurante.com");
    }

    #[test]
    fn test_mask_email() {
        assert_eq!(mask_email("ana.perez@mail.com"), "an***@mail.com");
        assert_eq!(mask_email("a@mail.com"), "a***@mail.com");
        assert_eq!(mask_email("invalid"), "***");
    }
}
