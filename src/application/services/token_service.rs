//! Session Token Service
//!
//! Signs and verifies the JWTs carried in the session cookie.
//!
//! Tokens embed whatever identity claim the caller posted; there is no
//! credential check behind `/jwt`. The server only fixes the timestamps.

use chrono::{Duration, Utc};
use jsonwebtoken::{
    decode, encode, errors::ErrorKind, Algorithm, DecodingKey, EncodingKey, Header, Validation,
};
use serde::{Deserialize, Serialize};

use crate::config::JwtSettings;
use crate::domain::Document;
use crate::shared::error::AppError;

/// Claims the server controls; caller-supplied values for these are dropped.
const RESERVED_CLAIMS: [&str; 2] = ["iat", "exp"];

/// Session token service trait for dependency injection
pub trait TokenService: Send + Sync {
    /// Sign a token for `email`, embedding `extra` claims.
    fn issue(&self, email: &str, extra: Document) -> Result<String, TokenError>;

    /// Verify signature and expiry, returning the embedded claims.
    fn verify(&self, token: &str) -> Result<SessionClaims, TokenError>;
}

/// JWT claims structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionClaims {
    /// Identity the token was issued for
    pub email: String,

    /// Any other caller-supplied claims
    #[serde(flatten)]
    pub extra: Document,

    /// Issued at time (Unix timestamp)
    pub iat: i64,

    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

/// Token errors
#[derive(Debug, thiserror::Error)]
pub enum TokenError {
    #[error("Token expired")]
    Expired,

    #[error("Invalid token")]
    Invalid,

    #[error("Token signing failed: {0}")]
    Signing(String),
}

impl From<TokenError> for AppError {
    fn from(error: TokenError) -> Self {
        match error {
            TokenError::Expired | TokenError::Invalid => AppError::unauthorized(),
            TokenError::Signing(msg) => AppError::Internal(msg),
        }
    }
}

/// HS256 implementation backed by the configured secret
pub struct JwtTokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    expiry: Duration,
}

impl JwtTokenService {
    pub fn new(settings: &JwtSettings) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(settings.secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(settings.secret.as_bytes()),
            validation: session_validation(),
            expiry: Duration::minutes(settings.token_expiry_minutes),
        }
    }
}

/// HS256 with expiry checked. Audience is a caller-supplied claim like any
/// other, so it is carried but never enforced.
fn session_validation() -> Validation {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.validate_aud = false;
    validation
}

impl TokenService for JwtTokenService {
    fn issue(&self, email: &str, mut extra: Document) -> Result<String, TokenError> {
        for claim in RESERVED_CLAIMS {
            extra.remove(claim);
        }

        let now = Utc::now();
        let claims = SessionClaims {
            email: email.to_string(),
            extra,
            iat: now.timestamp(),
            exp: (now + self.expiry).timestamp(),
        };

        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| TokenError::Signing(e.to_string()))
    }

    fn verify(&self, token: &str) -> Result<SessionClaims, TokenError> {
        decode::<SessionClaims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => TokenError::Expired,
                _ => TokenError::Invalid,
            })
    }
}
