//! Login service — credential verification and token issue.

use std::sync::Arc;

use tracing::info;

use smthub_auth::{IssuedToken, PasswordHasher, Principal, PrincipalLoader, TokenEncoder};
use smthub_core::error::{AppError, ErrorKind};

/// Authenticates credentials and issues tokens.
#[derive(Debug, Clone)]
pub struct AuthService {
    principal_loader: Arc<PrincipalLoader>,
    password_hasher: Arc<PasswordHasher>,
    token_encoder: Arc<TokenEncoder>,
}

/// Result of a successful login.
#[derive(Debug, Clone)]
pub struct LoginOutcome {
    /// The authenticated principal.
    pub principal: Principal,
    /// The issued token.
    pub issued: IssuedToken,
}

impl AuthService {
    /// Creates a new auth service.
    pub fn new(
        principal_loader: Arc<PrincipalLoader>,
        password_hasher: Arc<PasswordHasher>,
        token_encoder: Arc<TokenEncoder>,
    ) -> Self {
        Self {
            principal_loader,
            password_hasher,
            token_encoder,
        }
    }

    /// Verifies credentials and issues a token.
    ///
    /// Inactive accounts are rejected before the password is checked, so
    /// the failure mode is independent of password correctness. Unknown
    /// users and wrong passwords both surface as a generic credential
    /// failure to avoid confirming which usernames exist.
    pub async fn login(&self, username: &str, password: &str) -> Result<LoginOutcome, AppError> {
        let principal = match self.principal_loader.load_by_username(username).await {
            Ok(p) => p,
            Err(e) if e.kind == ErrorKind::NotFound => {
                return Err(AppError::authentication("Invalid username or password"));
            }
            Err(e) => return Err(e),
        };

        let matches = self
            .password_hasher
            .verify_password(password, &principal.password_hash)?;
        if !matches {
            return Err(AppError::authentication("Invalid username or password"));
        }

        let issued = self.token_encoder.generate(&principal)?;

        info!(username = %principal.username, "User logged in");

        Ok(LoginOutcome { principal, issued })
    }
}
