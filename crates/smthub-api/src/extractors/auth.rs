//! Identity extractors — turn the middleware-installed identity into
//! handler arguments, rejecting where the route demands more.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use smthub_core::error::AppError;
use smthub_entity::user::UserRole;

use crate::error::ApiError;

/// Authenticated identity installed by the auth middleware.
#[derive(Debug, Clone)]
pub struct CurrentUser {
    /// Account username.
    pub username: String,
    /// Granted authorities, e.g. `ROLE_ADMIN`.
    pub authorities: Vec<String>,
}

impl CurrentUser {
    /// Whether the user holds the given authority.
    pub fn has_authority(&self, authority: &str) -> bool {
        self.authorities.iter().any(|a| a == authority)
    }

    /// Whether the user holds the administrator role.
    pub fn is_admin(&self) -> bool {
        self.has_authority(UserRole::Admin.authority())
    }
}

/// Extractor that requires an authenticated user.
///
/// Rejects with 401 when the request carries no valid identity.
#[derive(Debug, Clone)]
pub struct AuthUser(pub CurrentUser);

impl std::ops::Deref for AuthUser {
    type Target = CurrentUser;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<S: Send + Sync> FromRequestParts<S> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<CurrentUser>()
            .cloned()
            .map(AuthUser)
            .ok_or_else(|| AppError::authentication("Authentication required").into())
    }
}

/// Extractor that requires the administrator role.
///
/// Rejects with 401 when anonymous and 403 when authenticated without
/// `ROLE_ADMIN`.
#[derive(Debug, Clone)]
pub struct RequireAdmin(pub CurrentUser);

impl std::ops::Deref for RequireAdmin {
    type Target = CurrentUser;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<S: Send + Sync> FromRequestParts<S> for RequireAdmin {
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let AuthUser(user) = AuthUser::from_request_parts(parts, state).await?;
        if !user.is_admin() {
            return Err(AppError::authorization("Administrator role required").into());
        }
        Ok(RequireAdmin(user))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn admin_authority_is_recognized() {
        let user = CurrentUser {
            username: "admin".to_string(),
            authorities: vec!["ROLE_ADMIN".to_string()],
        };
        assert!(user.is_admin());
        assert!(user.has_authority("ROLE_ADMIN"));
        assert!(!user.has_authority("ROLE_OPERATOR"));
    }

    #[test]
    fn operator_is_not_admin() {
        let user = CurrentUser {
            username: "operator".to_string(),
            authorities: vec!["ROLE_OPERATOR".to_string()],
        };
        assert!(!user.is_admin());
    }
}
