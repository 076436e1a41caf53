//! JWT resolution middleware.
//!
//! Resolves a token from the `Authorization` header or the auth cookie,
//! validates it against the stored account, and installs a `CurrentUser`
//! extension. Requests without a usable token pass through anonymously;
//! route-level extractors decide whether anonymity is acceptable.

use axum::extract::{Request, State};
use axum::http::{HeaderMap, header};
use axum::middleware::Next;
use axum::response::Response;
use axum_extra::extract::cookie::CookieJar;

use crate::extractors::CurrentUser;
use crate::state::AppState;

const BEARER_PREFIX: &str = "Bearer ";

/// Pulls a token from the `Authorization: Bearer` header, falling back
/// to the named cookie. The header wins when both are present.
pub fn resolve_token(headers: &HeaderMap, cookie_name: &str) -> Option<String> {
    if let Some(value) = headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        && let Some(token) = value.strip_prefix(BEARER_PREFIX)
    {
        return Some(token.to_string());
    }

    CookieJar::from_headers(headers)
        .get(cookie_name)
        .map(|c| c.value().to_string())
}

/// Installs the authenticated identity, if any, into request extensions.
///
/// Malformed, expired, or otherwise invalid tokens are discarded and the
/// request continues anonymously. An identity installed by an earlier
/// layer is never overwritten.
pub async fn authenticate(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Response {
    if request.extensions().get::<CurrentUser>().is_none()
        && let Some(token) = resolve_token(request.headers(), &state.config.auth.cookie_name)
    {
        match establish_identity(&state, &token).await {
            Some(user) => {
                request.extensions_mut().insert(user);
            }
            None => tracing::debug!("Discarding unusable auth token"),
        }
    }

    next.run(request).await
}

async fn establish_identity(state: &AppState, token: &str) -> Option<CurrentUser> {
    let username = state.token_decoder.extract_username(token).ok()?;
    let principal = state
        .principal_loader
        .load_by_username(&username)
        .await
        .ok()?;

    if !state.token_decoder.validate(token, &principal) {
        return None;
    }

    Some(CurrentUser {
        username: principal.username,
        authorities: principal.authorities,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers(pairs: &[(&str, &str)]) -> HeaderMap {
        let mut map = HeaderMap::new();
        for (name, value) in pairs {
            map.append(
                axum::http::HeaderName::try_from(*name).unwrap(),
                HeaderValue::from_str(value).unwrap(),
            );
        }
        map
    }

    #[test]
    fn bearer_header_is_resolved() {
        let h = headers(&[("authorization", "Bearer abc.def.ghi")]);
        assert_eq!(resolve_token(&h, "JWT"), Some("abc.def.ghi".to_string()));
    }

    #[test]
    fn cookie_is_resolved_when_header_missing() {
        let h = headers(&[("cookie", "JWT=tok123; other=x")]);
        assert_eq!(resolve_token(&h, "JWT"), Some("tok123".to_string()));
    }

    #[test]
    fn header_wins_over_cookie() {
        let h = headers(&[
            ("authorization", "Bearer from-header"),
            ("cookie", "JWT=from-cookie"),
        ]);
        assert_eq!(resolve_token(&h, "JWT"), Some("from-header".to_string()));
    }

    #[test]
    fn non_bearer_scheme_falls_back_to_cookie() {
        let h = headers(&[("authorization", "Basic dXNlcjpwYXNz"), ("cookie", "JWT=tok")]);
        assert_eq!(resolve_token(&h, "JWT"), Some("tok".to_string()));
    }

    #[test]
    fn no_token_resolves_to_none() {
        let h = headers(&[("cookie", "other=x")]);
        assert_eq!(resolve_token(&h, "JWT"), None);
    }

    #[test]
    fn cookie_name_is_configurable() {
        let h = headers(&[("cookie", "SESSION=tok")]);
        assert_eq!(resolve_token(&h, "SESSION"), Some("tok".to_string()));
        assert_eq!(resolve_token(&h, "JWT"), None);
    }
}
