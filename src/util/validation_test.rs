use super::*;

// =============================================================
// Email
// =============================================================

#[test]
fn accepts_plain_addresses() {
    assert!(validate_email("ada@example.com"));
    assert!(validate_email("first.last@sub.example.co"));
}

#[test]
fn rejects_malformed_addresses() {
    assert!(!validate_email(""));
    assert!(!validate_email("no-at-sign.com"));
    assert!(!validate_email("@example.com"));
    assert!(!validate_email("ada@example"));
    assert!(!validate_email("ada@.com"));
    assert!(!validate_email("ada@example."));
    assert!(!validate_email("a da@example.com"));
    assert!(!validate_email("ada@@example.com"));
}

// =============================================================
// Password
// =============================================================

#[test]
fn password_requires_length_and_character_classes() {
    assert!(validate_password("Secret12"));
    assert!(!validate_password("Short1a"));
    assert!(!validate_password("alllowercase1"));
    assert!(!validate_password("ALLUPPERCASE1"));
    assert!(!validate_password("NoDigitsHere"));
}

#[test]
fn strength_scores_accumulate() {
    assert_eq!(password_strength(""), 0);
    assert_eq!(password_strength("abc"), 1);
    assert_eq!(password_strength("abcdefgh"), 2);
    assert_eq!(password_strength("Abcdefgh"), 3);
    assert_eq!(password_strength("Abcdefg1"), 4);
}

#[test]
fn strength_labels() {
    assert_eq!(strength_label(0), "Weak");
    assert_eq!(strength_label(2), "Weak");
    assert_eq!(strength_label(3), "Medium");
    assert_eq!(strength_label(4), "Strong");
}
