//! Authorization port for the bearer-token check.

/// Validates bearer tokens presented in the `Authorization` header.
pub trait TokenService: Send + Sync {
    /// Accept or reject a raw token (the part after `Bearer `).
    fn validate_token(&self, token: &str) -> Result<(), AuthError>;
}

/// Authentication errors.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("Missing authorization header")]
    MissingAuth,

    #[error("Malformed authorization header: {0}")]
    MalformedHeader(String),

    #[error("Invalid token")]
    InvalidToken,
}
