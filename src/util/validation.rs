//! Signup form field validation.

#[cfg(test)]
#[path = "validation_test.rs"]
mod validation_test;

/// Minimal email shape check: `local@domain.tld`, no whitespace, non-empty
/// segments on both sides of the `@` and the final dot.
pub fn validate_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}

/// Passwords need 8+ characters with at least one lowercase letter, one
/// uppercase letter, and one digit.
pub fn validate_password(password: &str) -> bool {
    password.chars().count() >= 8
        && password.chars().any(|c| c.is_ascii_lowercase())
        && password.chars().any(|c| c.is_ascii_uppercase())
        && password.chars().any(|c| c.is_ascii_digit())
}

/// Score a password 0-4: one point each for length, uppercase, lowercase,
/// and a digit. Drives the strength meter on the signup form.
pub fn password_strength(password: &str) -> u8 {
    let mut score = 0;
    if password.chars().count() >= 8 {
        score += 1;
    }
    if password.chars().any(|c| c.is_ascii_uppercase()) {
        score += 1;
    }
    if password.chars().any(|c| c.is_ascii_lowercase()) {
        score += 1;
    }
    if password.chars().any(|c| c.is_ascii_digit()) {
        score += 1;
    }
    score
}

/// Human label for a strength score.
pub fn strength_label(score: u8) -> &'static str {
    match score {
        0..=2 => "Weak",
        3 => "Medium",
        _ => "Strong",
    }
}
