//! JWT token validation and subject extraction.

use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};

use smthub_core::config::auth::AuthConfig;
use smthub_core::error::AppError;

use super::claims::Claims;
use crate::principal::Principal;

/// Validates JWT tokens against the shared secret and clock.
///
/// Pure over the secret key and clock; no side effects.
#[derive(Clone)]
pub struct TokenDecoder {
    /// HMAC secret key for verification.
    decoding_key: DecodingKey,
    /// Validation configuration.
    validation: Validation,
}

impl std::fmt::Debug for TokenDecoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenDecoder")
            .field("validation", &self.validation)
            .finish()
    }
}

impl TokenDecoder {
    /// Creates a new decoder from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        validation.leeway = 5; // 5 seconds leeway for clock skew

        Self {
            decoding_key: DecodingKey::from_secret(config.jwt_secret.as_bytes()),
            validation,
        }
    }

    /// Extracts the embedded username from a token.
    ///
    /// Fails with an authentication error when the token is malformed,
    /// carries an invalid signature, or has expired.
    pub fn extract_username(&self, token: &str) -> Result<String, AppError> {
        self.decode_token(token).map(|claims| claims.sub)
    }

    /// Checks a token against a loaded principal.
    ///
    /// Returns `true` iff the token decodes under our key, is unexpired,
    /// and its subject matches the principal's username.
    pub fn validate(&self, token: &str, principal: &Principal) -> bool {
        match self.decode_token(token) {
            Ok(claims) => claims.sub == principal.username,
            Err(_) => false,
        }
    }

    /// Internal decode with signature and expiry checks.
    fn decode_token(&self, token: &str) -> Result<Claims, AppError> {
        let token_data =
            decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(|e| {
                match e.kind() {
                    jsonwebtoken::errors::ErrorKind::ExpiredSignature => {
                        AppError::authentication("Token has expired")
                    }
                    jsonwebtoken::errors::ErrorKind::InvalidToken => {
                        AppError::authentication("Invalid token format")
                    }
                    jsonwebtoken::errors::ErrorKind::InvalidSignature => {
                        AppError::authentication("Invalid token signature")
                    }
                    _ => AppError::authentication(format!("Token validation failed: {e}")),
                }
            })?;

        Ok(token_data.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::jwt::encoder::TokenEncoder;

    fn config_with_secret(secret: &str) -> AuthConfig {
        AuthConfig {
            jwt_secret: secret.to_string(),
            ..AuthConfig::default()
        }
    }

    fn principal(username: &str) -> Principal {
        Principal {
            username: username.to_string(),
            password_hash: String::new(),
            active: true,
            authorities: vec!["ROLE_OPERATOR".to_string()],
        }
    }

    #[test]
    fn test_generate_then_extract_round_trips() {
        let config = config_with_secret("unit-test-secret");
        let encoder = TokenEncoder::new(&config);
        let decoder = TokenDecoder::new(&config);

        let issued = encoder.generate(&principal("operator1")).unwrap();
        let username = decoder.extract_username(&issued.token).unwrap();
        assert_eq!(username, "operator1");
        assert!(decoder.validate(&issued.token, &principal("operator1")));
    }

    #[test]
    fn test_validate_rejects_other_principal() {
        let config = config_with_secret("unit-test-secret");
        let encoder = TokenEncoder::new(&config);
        let decoder = TokenDecoder::new(&config);

        let issued = encoder.generate(&principal("operator1")).unwrap();
        assert!(!decoder.validate(&issued.token, &principal("admin")));
    }

    #[test]
    fn test_foreign_key_is_rejected() {
        let encoder = TokenEncoder::new(&config_with_secret("key-a"));
        let decoder = TokenDecoder::new(&config_with_secret("key-b"));

        let issued = encoder.generate(&principal("operator1")).unwrap();
        assert!(decoder.extract_username(&issued.token).is_err());
        assert!(!decoder.validate(&issued.token, &principal("operator1")));
    }

    #[test]
    fn test_expired_token_is_rejected() {
        use jsonwebtoken::{EncodingKey, Header, encode};

        let config = config_with_secret("unit-test-secret");
        let decoder = TokenDecoder::new(&config);

        // Expired well past the decoder's leeway.
        let now = chrono::Utc::now().timestamp();
        let claims = Claims {
            sub: "operator1".to_string(),
            iat: now - 600,
            exp: now - 300,
            jti: uuid::Uuid::new_v4(),
        };
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(config.jwt_secret.as_bytes()),
        )
        .unwrap();

        assert!(decoder.extract_username(&token).is_err());
        assert!(!decoder.validate(&token, &principal("operator1")));
    }

    #[test]
    fn test_garbage_token_is_rejected() {
        let decoder = TokenDecoder::new(&config_with_secret("unit-test-secret"));
        assert!(decoder.extract_username("not-a-jwt").is_err());
    }
}
