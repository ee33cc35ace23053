//! JWT (JSON Web Token) utilities for authentication.
//!
//! Access tokens are HS256 tokens signed with [`JwtConfig::secret`]. They are
//! minted by the `schoolhouse-cli issue-token` command and verified by the
//! `AuthUser` extractor on every mutating route.

use chrono::Utc;
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};

use schoolhouse_config::JwtConfig;
use schoolhouse_core::AppError;

use crate::claims::Claims;

/// Creates an access token for `subject`.
///
/// The token expires `jwt_config.access_token_expiry` seconds from now.
///
/// # Errors
///
/// Returns an internal error if token encoding fails.
pub fn create_access_token(
    subject: &str,
    name: &str,
    jwt_config: &JwtConfig,
) -> Result<String, AppError> {
    let now = Utc::now().timestamp() as usize;
    let exp = now + jwt_config.access_token_expiry.max(0) as usize;

    let claims = Claims {
        sub: subject.to_string(),
        name: name.to_string(),
        exp,
        iat: now,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(jwt_config.secret.as_bytes()),
    )
    .map_err(|e| AppError::internal(anyhow::anyhow!("Failed to create token: {}", e)))
}

/// Verifies an access token and returns the embedded claims.
///
/// # Errors
///
/// Returns an unauthorized error if the signature is invalid, the token has
/// expired, or the token is malformed.
pub fn verify_token(token: &str, jwt_config: &JwtConfig) -> Result<Claims, AppError> {
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(jwt_config.secret.as_bytes()),
        &Validation::default(),
    )
    .map(|data| data.claims)
    .map_err(|_| AppError::unauthorized("Invalid or expired token"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn get_test_jwt_config() -> JwtConfig {
        JwtConfig {
            secret: "test-secret-key-at-least-32-characters-long".to_string(),
            access_token_expiry: 3600,
        }
    }

    #[test]
    fn test_create_access_token_success() {
        let config = get_test_jwt_config();
        let token = create_access_token("operator-1", "Operator", &config).unwrap();
        assert!(!token.is_empty());
    }

    #[test]
    fn test_verify_token_success() {
        let config = get_test_jwt_config();
        let token = create_access_token("operator-1", "Operator", &config).unwrap();

        let claims = verify_token(&token, &config).unwrap();

        assert_eq!(claims.sub, "operator-1");
        assert_eq!(claims.name, "Operator");
        assert_eq!(claims.exp - claims.iat, 3600);
    }

    #[test]
    fn test_verify_token_invalid() {
        let config = get_test_jwt_config();
        let err = verify_token("invalid-token", &config).unwrap_err();
        assert!(err.is_unauthorized());
    }

    #[test]
    fn test_verify_token_wrong_secret() {
        let config = get_test_jwt_config();
        let token = create_access_token("operator-1", "Operator", &config).unwrap();

        let wrong_config = JwtConfig {
            secret: "different-secret-key-at-least-32-characters".to_string(),
            access_token_expiry: 3600,
        };

        let err = verify_token(&token, &wrong_config).unwrap_err();
        assert!(err.is_unauthorized());
    }

    #[test]
    fn test_verify_token_expired() {
        let config = get_test_jwt_config();
        let now = Utc::now().timestamp() as usize;
        let claims = Claims {
            sub: "operator-1".to_string(),
            name: String::new(),
            exp: now - 3600,
            iat: now - 7200,
        };
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(config.secret.as_bytes()),
        )
        .unwrap();

        assert!(verify_token(&token, &config).is_err());
    }
}
