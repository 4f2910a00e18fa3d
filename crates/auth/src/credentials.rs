//! Form-boundary checks for the login and signup forms.
//!
//! The identity store accepts anything; callers run these first.

use crate::error::AuthError;

pub const MIN_PASSWORD_CHARS: usize = 6;

pub fn validate_login(email: &str, password: &str) -> Result<(), AuthError> {
    validate_email(email)?;
    validate_password(password)
}

pub fn validate_signup(
    first_name: &str,
    last_name: &str,
    email: &str,
    password: &str,
) -> Result<(), AuthError> {
    if first_name.trim().is_empty() {
        return Err(AuthError::InvalidCredentials("first name is required".to_string()));
    }
    if last_name.trim().is_empty() {
        return Err(AuthError::InvalidCredentials("last name is required".to_string()));
    }
    validate_login(email, password)
}

fn validate_email(email: &str) -> Result<(), AuthError> {
    let invalid = || AuthError::InvalidCredentials(format!("invalid email `{email}`"));

    if email.chars().any(char::is_whitespace) {
        return Err(invalid());
    }
    let (local, domain) = email.split_once('@').ok_or_else(invalid)?;
    if local.is_empty() || domain.contains('@') {
        return Err(invalid());
    }
    let dotted = domain
        .split('.')
        .collect::<Vec<_>>();
    if dotted.len() < 2 || dotted.iter().any(|label| label.is_empty()) {
        return Err(invalid());
    }
    Ok(())
}

fn validate_password(password: &str) -> Result<(), AuthError> {
    if password.chars().count() < MIN_PASSWORD_CHARS {
        return Err(AuthError::InvalidCredentials(format!(
            "password must be at least {MIN_PASSWORD_CHARS} characters"
        )));
    }
    Ok(())
}
