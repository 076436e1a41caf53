//! Principal loading — turns a username into an authenticated identity.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use smthub_core::error::AppError;
use smthub_database::repositories::UserRepository;

/// An authenticated identity plus its authority set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Principal {
    /// The username.
    pub username: String,
    /// Argon2 password hash from storage.
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// Whether the account is active.
    pub active: bool,
    /// Authority strings derived 1:1 from the user's role names.
    pub authorities: Vec<String>,
}

/// Loads principals from user storage.
#[derive(Debug, Clone)]
pub struct PrincipalLoader {
    user_repo: Arc<UserRepository>,
}

impl PrincipalLoader {
    /// Creates a new principal loader.
    pub fn new(user_repo: Arc<UserRepository>) -> Self {
        Self { user_repo }
    }

    /// Loads the principal for a username.
    ///
    /// Fails with NotFound when no such user exists, and with an
    /// authentication error when the account is inactive — independent of
    /// any password check.
    pub async fn load_by_username(&self, username: &str) -> Result<Principal, AppError> {
        let user = self
            .user_repo
            .find_by_username(username)
            .await?
            .ok_or_else(|| AppError::not_found(format!("User not found: {username}")))?;

        if !user.active {
            return Err(AppError::authentication(format!(
                "User is inactive: {username}"
            )));
        }

        let authorities = self
            .user_repo
            .roles_for(username)
            .await?
            .into_iter()
            .map(|role| role.authority().to_string())
            .collect();

        Ok(Principal {
            username: user.username,
            password_hash: user.password_hash,
            active: user.active,
            authorities,
        })
    }
}
