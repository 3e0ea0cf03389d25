//! JWT token generation and validation.
//!
//! Provides HS256 access and refresh tokens.

use chrono::{Duration, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use thiserror::Error;
use uuid::Uuid;

use crate::auth::{Claims, TokenKind, TokenPair};
use crate::config::JwtSettings;

/// JWT configuration.
#[derive(Debug, Clone)]
pub struct JwtConfig {
    /// Secret key for signing tokens.
    pub secret: String,
    /// Access token lifetime in seconds.
    pub access_token_expires_secs: i64,
    /// Refresh token lifetime in seconds.
    pub refresh_token_expires_secs: i64,
}

impl Default for JwtConfig {
    fn default() -> Self {
        Self {
            secret: "change-me-in-production".to_string(),
            access_token_expires_secs: 900,
            refresh_token_expires_secs: 604_800,
        }
    }
}

impl From<&JwtSettings> for JwtConfig {
    fn from(settings: &JwtSettings) -> Self {
        Self {
            secret: settings.secret.clone(),
            access_token_expires_secs: i64::try_from(settings.access_token_expiry_secs)
                .unwrap_or(i64::MAX),
            refresh_token_expires_secs: i64::try_from(settings.refresh_token_expiry_secs)
                .unwrap_or(i64::MAX),
        }
    }
}

/// Errors that can occur during JWT operations.
#[derive(Debug, Error)]
pub enum JwtError {
    /// Token encoding failed.
    #[error("failed to encode token: {0}")]
    EncodingError(String),

    /// Token decoding failed.
    #[error("failed to decode token: {0}")]
    DecodingError(String),

    /// Token has expired.
    #[error("token has expired")]
    Expired,

    /// Token is valid but of the wrong kind for this use.
    #[error("wrong token kind: expected {expected:?}")]
    WrongKind {
        /// Kind the caller required.
        expected: TokenKind,
    },
}

/// JWT service for token operations.
#[derive(Clone)]
pub struct JwtService {
    config: JwtConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

impl std::fmt::Debug for JwtService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtService")
            .field("access_token_expires_secs", &self.config.access_token_expires_secs)
            .field("refresh_token_expires_secs", &self.config.refresh_token_expires_secs)
            .field("secret", &"[hidden]")
            .finish()
    }
}

impl JwtService {
    /// Creates a new JWT service with the given configuration.
    #[must_use]
    pub fn new(config: JwtConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.secret.as_bytes());
        Self {
            config,
            encoding_key,
            decoding_key,
        }
    }

    fn generate(&self, user_id: Uuid, kind: TokenKind, lifetime_secs: i64) -> Result<String, JwtError> {
        let expires_at = Utc::now() + Duration::seconds(lifetime_secs);
        let claims = Claims::new(user_id, kind, expires_at);

        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| JwtError::EncodingError(e.to_string()))
    }

    /// Generates an access token for a user.
    ///
    /// # Errors
    ///
    /// Returns `JwtError::EncodingError` if token generation fails.
    pub fn generate_access_token(&self, user_id: Uuid) -> Result<String, JwtError> {
        self.generate(user_id, TokenKind::Access, self.config.access_token_expires_secs)
    }

    /// Generates a refresh token for a user.
    ///
    /// # Errors
    ///
    /// Returns `JwtError::EncodingError` if token generation fails.
    pub fn generate_refresh_token(&self, user_id: Uuid) -> Result<String, JwtError> {
        self.generate(user_id, TokenKind::Refresh, self.config.refresh_token_expires_secs)
    }

    /// Issues a fresh access/refresh pair.
    ///
    /// # Errors
    ///
    /// Returns `JwtError::EncodingError` if either token fails to encode.
    pub fn issue_pair(&self, user_id: Uuid) -> Result<TokenPair, JwtError> {
        Ok(TokenPair {
            access_token: self.generate_access_token(user_id)?,
            refresh_token: self.generate_refresh_token(user_id)?,
            expires_in: self.access_token_expires_in(),
        })
    }

    /// Validates and decodes a token of any kind.
    ///
    /// # Errors
    ///
    /// Returns `JwtError::Expired` if the token has expired.
    /// Returns `JwtError::DecodingError` if the token is malformed.
    pub fn validate_token(&self, token: &str) -> Result<Claims, JwtError> {
        let validation = Validation::default();

        decode::<Claims>(token, &self.decoding_key, &validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => JwtError::Expired,
                _ => JwtError::DecodingError(e.to_string()),
            })
    }

    /// Validates a token and checks its kind.
    ///
    /// # Errors
    ///
    /// Same as [`Self::validate_token`], plus `JwtError::WrongKind`.
    pub fn validate_kind(&self, token: &str, expected: TokenKind) -> Result<Claims, JwtError> {
        let claims = self.validate_token(token)?;
        if claims.typ == expected {
            Ok(claims)
        } else {
            Err(JwtError::WrongKind { expected })
        }
    }

    /// Returns the access token expiration in seconds.
    #[must_use]
    pub const fn access_token_expires_in(&self) -> i64 {
        self.config.access_token_expires_secs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_service() -> JwtService {
        JwtService::new(JwtConfig {
            secret: "test-secret-key-for-testing".to_string(),
            access_token_expires_secs: 900,
            refresh_token_expires_secs: 3600,
        })
    }

    #[test]
    fn test_validate_access_token() {
        let service = create_test_service();
        let user_id = Uuid::new_v4();

        let token = service.generate_access_token(user_id).unwrap();
        let claims = service.validate_kind(&token, TokenKind::Access).unwrap();

        assert_eq!(claims.user_id(), user_id);
        assert_eq!(claims.typ, TokenKind::Access);
    }

    #[test]
    fn test_refresh_token_rejected_as_access() {
        let service = create_test_service();
        let token = service.generate_refresh_token(Uuid::new_v4()).unwrap();

        let result = service.validate_kind(&token, TokenKind::Access);
        assert!(matches!(
            result,
            Err(JwtError::WrongKind {
                expected: TokenKind::Access
            })
        ));
    }

    #[test]
    fn test_issue_pair() {
        let service = create_test_service();
        let pair = service.issue_pair(Uuid::new_v4()).unwrap();
        assert_ne!(pair.access_token, pair.refresh_token);
        assert_eq!(pair.expires_in, 900);
    }

    #[test]
    fn test_invalid_token() {
        let service = create_test_service();
        let result = service.validate_token("invalid.token.here");
        assert!(matches!(result, Err(JwtError::DecodingError(_))));
    }

    #[test]
    fn test_expired_token() {
        let service = JwtService::new(JwtConfig {
            access_token_expires_secs: -3600,
            ..JwtConfig::default()
        });
        let token = service.generate_access_token(Uuid::new_v4()).unwrap();
        assert!(matches!(service.validate_token(&token), Err(JwtError::Expired)));
    }

    #[test]
    fn test_other_secret_rejected() {
        let issuer = create_test_service();
        let other = JwtService::new(JwtConfig::default());
        let token = issuer.generate_access_token(Uuid::new_v4()).unwrap();
        assert!(other.validate_token(&token).is_err());
    }
}
