use regex::Regex;
use serde_json::Value;
use std::sync::LazyLock;

/// Overall address bound from the RFC 5321 envelope.
pub const MIN_EMAIL_LENGTH: usize = 5;
pub const MAX_EMAIL_LENGTH: usize = 254;
pub const MAX_LOCAL_PART_LENGTH: usize = 64;
pub const MAX_DOMAIN_LENGTH: usize = 253;

/// Characters allowed in each segment: anything but `@` and ECMAScript
/// whitespace. Spelled out because the regex crate's `\s` is a different set
/// (it includes U+0085 and omits U+FEFF).
const SEGMENT: &str = r"[^\t\n\x0B\x0C\r \xA0\x{1680}\x{2000}-\x{200A}\x{2028}\x{2029}\x{202F}\x{205F}\x{3000}\x{FEFF}@]+";

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"^{SEGMENT}@{SEGMENT}\.{SEGMENT}$"))
        .expect("email pattern is a valid regex")
});

/// Validates the shape of an email address.
///
/// This is a syntactic check only. The rules are applied in order and the
/// first failing rule rejects the address:
/// 1. `local@domain.tld` shape with no whitespace and no extra `@`
/// 2. Total length between 5 and 254
/// 3. Exactly one `@`
/// 4. Local part between 1 and 64
/// 5. Domain part between 1 and 253, containing at least one `.`
///
/// Lengths are counted in UTF-16 code units.
///
/// Consecutive or trailing dots are *not* rejected.
///
/// # Examples
/// ```
/// use email_validator::validation::syntax::is_valid_email;
///
/// assert!(is_valid_email("test@example.com"));
/// assert!(is_valid_email("a@b.c"));
/// assert!(!is_valid_email("test@domain"));
/// ```
pub fn is_valid_email(email: &str) -> bool {
    if !EMAIL_PATTERN.is_match(email) {
        return false;
    }

    let length = utf16_len(email);
    if !(MIN_EMAIL_LENGTH..=MAX_EMAIL_LENGTH).contains(&length) {
        return false;
    }

    let parts: Vec<&str> = email.split('@').collect();
    let [local_part, domain] = parts.as_slice() else {
        return false;
    };

    if !(1..=MAX_LOCAL_PART_LENGTH).contains(&utf16_len(local_part)) {
        return false;
    }

    if !(1..=MAX_DOMAIN_LENGTH).contains(&utf16_len(domain)) {
        return false;
    }

    domain.contains('.')
}

/// Validates an arbitrary JSON value. Anything that is not a string is invalid.
pub fn is_valid_candidate(candidate: &Value) -> bool {
    candidate.as_str().is_some_and(is_valid_email)
}

fn utf16_len(s: &str) -> usize {
    s.encode_utf16().count()
}
