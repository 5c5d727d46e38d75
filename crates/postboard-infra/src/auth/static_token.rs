//! Fixed bearer-token check.
//!
//! There is no token issuance: a request is authorized when it presents
//! exactly the configured string.

use postboard_core::ports::{AuthError, TokenService};

/// Token accepted by the demonstration endpoint.
pub const DEMO_BEARER_TOKEN: &str = "secreto123";

/// Token service comparing against a single static token.
#[derive(Debug, Clone)]
pub struct StaticTokenService {
    token: String,
}

impl StaticTokenService {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }
}

impl Default for StaticTokenService {
    fn default() -> Self {
        Self::new(DEMO_BEARER_TOKEN)
    }
}

impl TokenService for StaticTokenService {
    fn validate_token(&self, token: &str) -> Result<(), AuthError> {
        if token == self.token {
            Ok(())
        } else {
            tracing::debug!("Rejected bearer token");
            Err(AuthError::InvalidToken)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_match_only() {
        let service = StaticTokenService::default();
        assert!(service.validate_token("secreto123").is_ok());
        assert!(matches!(
            service.validate_token("wrong"),
            Err(AuthError::InvalidToken)
        ));
        assert!(service.validate_token("secreto123 ").is_err());
        assert!(service.validate_token("SECRETO123").is_err());
    }
}
