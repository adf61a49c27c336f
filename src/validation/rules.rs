//! Field rules shared by the entity validators.
//!
//! Each rule records a violation and returns `None` when the value fails,
//! or returns the normalized value.

use std::sync::OnceLock;

use regex::Regex;

use super::Violations;

fn email_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("email pattern is a valid regex")
    })
}

/// Trimmed text with at least `min_len` characters.
pub fn text(v: &mut Violations, field: &'static str, raw: String, min_len: usize) -> Option<String> {
    let trimmed = raw.trim();
    let len = trimmed.chars().count();
    if len == 0 {
        v.add(field, "must not be empty");
        return None;
    }
    if len < min_len {
        v.add(field, format!("must be at least {min_len} characters"));
        return None;
    }
    Some(trimmed.to_owned())
}

/// Trimmed, non-empty text shaped like `local@domain.tld`.
pub fn email(v: &mut Violations, field: &'static str, raw: String) -> Option<String> {
    let email = text(v, field, raw, 1)?;
    if !email_pattern().is_match(&email) {
        v.add(field, "must be a valid email address");
        return None;
    }
    Some(email)
}

pub fn non_negative(v: &mut Violations, field: &'static str, value: i64) -> Option<i64> {
    if value < 0 {
        v.add(field, "must be a non-negative integer");
        return None;
    }
    Some(value)
}

/// Trimmed text where an empty string means "no value".
pub fn optional_text(raw: String) -> Option<String> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_is_trimmed() {
        let mut v = Violations::new();
        assert_eq!(text(&mut v, "name", "  Ana  ".to_string(), 2), Some("Ana".to_string()));
        assert!(v.is_empty());
    }

    #[test]
    fn test_text_length_counts_after_trim() {
        let mut v = Violations::new();
        assert_eq!(text(&mut v, "name", " A ".to_string(), 2), None);
        assert_eq!(text(&mut v, "other", "   ".to_string(), 1), None);
        let err = v.finish().unwrap_err();
        assert_eq!(err.violations().len(), 2);
        assert_eq!(err.violations()[1].message, "must not be empty");
    }

    #[test]
    fn test_email_shape() {
        let mut v = Violations::new();
        assert_eq!(
            email(&mut v, "email", " a@x.com ".to_string()),
            Some("a@x.com".to_string())
        );
        assert_eq!(email(&mut v, "email", "not-an-email".to_string()), None);
        assert!(v.finish().unwrap_err().has_field("email"));
    }

    #[test]
    fn test_non_negative_accepts_zero() {
        let mut v = Violations::new();
        assert_eq!(non_negative(&mut v, "age", 0), Some(0));
        assert_eq!(non_negative(&mut v, "age", -1), None);
        assert_eq!(v.finish().unwrap_err().violations().len(), 1);
    }

    #[test]
    fn test_optional_text_blank_is_none() {
        assert_eq!(optional_text("  ".to_string()), None);
        assert_eq!(optional_text(" 555 ".to_string()), Some("555".to_string()));
    }
}
