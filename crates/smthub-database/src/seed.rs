//! Startup seed data: default roles and users.
//!
//! Mirrors what an operator would otherwise have to insert by hand before
//! the first login. Idempotent; safe to run on every startup.

use tracing::info;

use smthub_core::result::AppResult;
use smthub_entity::user::{CreateUser, UserRole};

use crate::repositories::UserRepository;

/// Ensure both roles and the default `admin` / `operator` accounts exist.
///
/// Password hashes are computed by the caller so this crate stays free of
/// hashing dependencies.
pub async fn seed_defaults(
    user_repo: &UserRepository,
    admin_password_hash: &str,
    operator_password_hash: &str,
) -> AppResult<()> {
    user_repo.ensure_role(UserRole::Admin).await?;
    user_repo.ensure_role(UserRole::Operator).await?;

    if !user_repo.exists("admin").await? {
        user_repo
            .create(&CreateUser {
                username: "admin".to_string(),
                password_hash: admin_password_hash.to_string(),
                active: true,
                roles: vec![UserRole::Admin],
            })
            .await?;
        info!(role = %UserRole::Admin, "Default admin user created");
    }

    if !user_repo.exists("operator").await? {
        user_repo
            .create(&CreateUser {
                username: "operator".to_string(),
                password_hash: operator_password_hash.to_string(),
                active: true,
                roles: vec![UserRole::Operator],
            })
            .await?;
        info!(role = %UserRole::Operator, "Default operator user created");
    }

    Ok(())
}
