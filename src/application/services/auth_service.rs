//! Token issuing and verification for the admin API.

use chrono::{Duration, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde_json::Value;

use crate::domain::entities::Document;
use crate::error::AppError;

/// Default lifetime of issued tokens.
pub const DEFAULT_TOKEN_TTL_DAYS: i64 = 30;

/// Longest accepted token lifetime, in days.
pub const MAX_TOKEN_TTL_DAYS: i64 = 36_500;

/// Claims decoded from a verified token.
///
/// The payload is opaque: whatever object was posted when the token was
/// issued, plus `iat` and `exp`. Only `email` carries meaning for
/// authorization.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthClaims(pub Document);

impl AuthClaims {
    /// The identity claim checked against the administrator email.
    pub fn email(&self) -> Option<&str> {
        self.0.get("email").and_then(Value::as_str)
    }
}

/// Service for signing and verifying HS256 bearer tokens.
///
/// Holds the signing keys and the single administrator identity. Constructed
/// once at startup from [`crate::config::Config`].
pub struct AuthService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    admin_email: String,
    token_ttl: Duration,
}

impl AuthService {
    /// Creates a new authentication service.
    ///
    /// # Arguments
    ///
    /// - `secret` - HMAC key shared by signing and verification
    /// - `admin_email` - the only identity allowed on admin routes
    /// - `token_ttl` - lifetime of issued tokens
    pub fn new(secret: &str, admin_email: String, token_ttl: Duration) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;
        validation.validate_aud = false;
        validation.set_required_spec_claims(&["exp"]);

        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation,
            admin_email,
            token_ttl,
        }
    }

    /// Signs `claims` into a token expiring after the configured TTL.
    ///
    /// No validation is performed on the claim shape. `iat` and `exp` are
    /// always set by the issuer, overwriting any supplied values.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if signing fails or the expiry cannot
    /// be represented.
    pub fn issue_token(&self, mut claims: Document) -> Result<String, AppError> {
        let now = Utc::now();
        let expires_at = now.checked_add_signed(self.token_ttl).ok_or_else(|| {
            tracing::error!(ttl = %self.token_ttl, "token lifetime overflows the calendar");
            AppError::internal("token lifetime out of range")
        })?;

        claims.insert("iat".to_string(), now.timestamp().into());
        claims.insert("exp".to_string(), expires_at.timestamp().into());

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key).map_err(|e| {
            tracing::error!(error = %e, "failed to sign token");
            AppError::internal("failed to sign token")
        })
    }

    /// Verifies signature and expiry of `token` and returns its claims.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unauthorized`] if the token is malformed, signed
    /// with another secret or expired.
    pub fn verify(&self, token: &str) -> Result<AuthClaims, AppError> {
        decode::<Document>(token, &self.decoding_key, &self.validation)
            .map(|data| AuthClaims(data.claims))
            .map_err(|e| {
                tracing::debug!(error = %e, "token rejected");
                AppError::unauthorized()
            })
    }

    /// Checks that `claims` identify the configured administrator.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Forbidden`] on any other (or missing) email.
    pub fn authorize_admin(&self, claims: &AuthClaims) -> Result<(), AppError> {
        if claims.email() == Some(self.admin_email.as_str()) {
            Ok(())
        } else {
            tracing::warn!(email = ?claims.email(), "non-admin identity on admin route");
            Err(AppError::forbidden())
        }
    }
}
