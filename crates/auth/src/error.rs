use thiserror::Error;

/// Authentication failure.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// Submitted credentials failed form-boundary checks.
    #[error("invalid credentials: {0}")]
    InvalidCredentials(String),

    /// The identity provider refused the login or registration.
    #[error("rejected by identity provider: {0}")]
    Rejected(String),
}

/// Durable slot access failure.
#[derive(Debug, Error)]
pub enum SlotError {
    #[error("slot io: {0}")]
    Io(#[from] std::io::Error),

    #[error("slot unavailable: {0}")]
    Unavailable(String),
}
