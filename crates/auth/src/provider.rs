//! Identity providers.

use crate::error::AuthError;
use crate::identity::Identity;

/// First name used when the email's local part yields nothing.
pub const DEFAULT_FIRST_NAME: &str = "User";

/// Turns submitted credentials into an identity.
///
/// A real provider verifies the password and may reject; the store does not
/// care which one it talks to.
pub trait IdentityProvider {
    fn authenticate(&self, email: &str, password: &str) -> Result<Identity, AuthError>;

    fn register(
        &self,
        first_name: &str,
        last_name: &str,
        email: &str,
        password: &str,
    ) -> Result<Identity, AuthError>;
}

/// Accepts every credential pair and derives names from the email.
///
/// `alice.martin@example.com` becomes first name `alice`, last name `martin`.
/// No case normalization is applied.
#[derive(Debug, Clone, Copy, Default)]
pub struct MockIdentityProvider;

impl MockIdentityProvider {
    /// Split the local part of `email` on `.` into (first, last).
    pub fn derive_names(email: &str) -> (String, String) {
        let local = email.split('@').next().unwrap_or_default();
        let mut segments = local.split('.');
        let first = segments
            .next()
            .filter(|s| !s.is_empty())
            .unwrap_or(DEFAULT_FIRST_NAME);
        let last = segments.next().unwrap_or_default();
        (first.to_string(), last.to_string())
    }
}

impl IdentityProvider for MockIdentityProvider {
    fn authenticate(&self, email: &str, _password: &str) -> Result<Identity, AuthError> {
        let (first_name, last_name) = Self::derive_names(email);
        Ok(Identity::new(first_name, last_name, email))
    }

    fn register(
        &self,
        first_name: &str,
        last_name: &str,
        email: &str,
        _password: &str,
    ) -> Result<Identity, AuthError> {
        Ok(Identity::new(first_name, last_name, email))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derives_names_without_normalizing_case() {
        assert_eq!(
            MockIdentityProvider::derive_names("alice.martin@example.com"),
            ("alice".to_string(), "martin".to_string())
        );
        assert_eq!(
            MockIdentityProvider::derive_names("Bob.DURAND@example.com"),
            ("Bob".to_string(), "DURAND".to_string())
        );
    }

    #[test]
    fn missing_segments_fall_back() {
        assert_eq!(
            MockIdentityProvider::derive_names("charlie@example.com"),
            ("charlie".to_string(), String::new())
        );
        assert_eq!(
            MockIdentityProvider::derive_names("@example.com"),
            (DEFAULT_FIRST_NAME.to_string(), String::new())
        );
        assert_eq!(
            MockIdentityProvider::derive_names(".leroy@example.com"),
            (DEFAULT_FIRST_NAME.to_string(), "leroy".to_string())
        );
    }

    #[test]
    fn extra_segments_are_ignored() {
        assert_eq!(
            MockIdentityProvider::derive_names("a.b.c@example.com"),
            ("a".to_string(), "b".to_string())
        );
    }

    #[test]
    fn authenticate_keeps_email_and_mints_fresh_ids() {
        let provider = MockIdentityProvider;
        let first = provider.authenticate("diane.leroy@example.com", "x").unwrap();
        let second = provider.authenticate("diane.leroy@example.com", "x").unwrap();

        assert_eq!(first.email, "diane.leroy@example.com");
        assert_ne!(first.id, second.id);
    }
}
