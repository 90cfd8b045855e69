//! Field-level validation helpers shared by the auth forms and the
//! application wizard. All checks are synchronous and purely local;
//! anything that fails here must never reach the network.

/// Minimum password length accepted by the auth forms.
pub const MIN_PASSWORD_LEN: usize = 6;

/// Password length at which the strength meter awards its length point.
pub const STRONG_PASSWORD_LEN: usize = 8;

/// Checks an email address against the `local@domain.tld` shape: no
/// whitespace, exactly one `@`, a non-empty local part, and a dotted
/// domain that neither starts nor ends with the dot.
pub fn email_is_valid(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }

    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };

    if local.is_empty() || domain.contains('@') {
        return false;
    }

    domain.contains('.') && !domain.starts_with('.') && !domain.ends_with('.')
}

/// Scores a password from 0 to 4 for the registration strength meter.
///
/// One point each for: length of at least [`STRONG_PASSWORD_LEN`], an
/// uppercase letter, a digit, and a symbol. Display-only; the score never
/// gates submission.
pub fn password_strength(password: &str) -> u8 {
    if password.is_empty() {
        return 0;
    }

    let mut strength = 0;
    if password.len() >= STRONG_PASSWORD_LEN {
        strength += 1;
    }
    if password.chars().any(|c| c.is_ascii_uppercase()) {
        strength += 1;
    }
    if password.chars().any(|c| c.is_ascii_digit()) {
        strength += 1;
    }
    if password.chars().any(|c| !c.is_ascii_alphanumeric()) {
        strength += 1;
    }

    strength
}

/// Human label for a strength score.
pub fn strength_label(strength: u8) -> &'static str {
    match strength {
        0 => "Very weak",
        1 => "Weak",
        2 => "Fair",
        3 => "Good",
        _ => "Strong",
    }
}
