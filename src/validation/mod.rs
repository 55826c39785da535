/// Syntactic email address validation.
///
/// Checks the `local@domain.tld` shape and the RFC 5321 length bounds.
/// No network lookups are performed.
///
/// # Examples
/// ```
/// use email_validator::validation::syntax::is_valid_email;
///
/// assert!(is_valid_email("user.name@domain.co.uk"));
/// assert!(!is_valid_email("invalid-email"));
/// ```
pub mod syntax;
