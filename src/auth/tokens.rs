// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Credential issuance and verification (HS256).
//!
//! Issuance is stateless: nothing is persisted, so an issued token stays
//! cryptographically valid until it expires. Whether its account still
//! exists is checked on every use by the guard, not here.

use std::fmt::Debug;
use std::time::Duration;

use chrono::Utc;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use super::claims::{Claims, TokenType};
use super::AuthError;
use crate::config::AppConfig;

/// Access and refresh credentials minted for one login.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: String,
}

#[derive(Debug, thiserror::Error)]
pub enum TokenError {
    #[error("failed to sign token: {0}")]
    Signing(#[from] jsonwebtoken::errors::Error),

    #[error("token lifetime of {0:?} does not fit a timestamp")]
    TtlOverflow(Duration),
}

/// Signs and verifies credentials with a shared secret.
pub struct TokenIssuer {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    access_ttl: Duration,
    refresh_ttl: Duration,
}

impl Debug for TokenIssuer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenIssuer")
            .field("encoding_key", &"[hidden]")
            .field("decoding_key", &"[hidden]")
            .field("access_ttl", &self.access_ttl)
            .field("refresh_ttl", &self.refresh_ttl)
            .finish()
    }
}

impl TokenIssuer {
    pub fn new(secret: &[u8], access_ttl: Duration, refresh_ttl: Duration) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            access_ttl,
            refresh_ttl,
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(
            config.jwt_secret.as_bytes(),
            config.access_token_ttl,
            config.refresh_token_ttl,
        )
    }

    /// Mint an access/refresh pair for an account the caller has already
    /// resolved.
    pub fn issue(&self, account_id: i64) -> Result<TokenPair, TokenError> {
        Ok(TokenPair {
            access_token: self.mint(account_id, TokenType::Access, self.access_ttl)?,
            refresh_token: self.mint(account_id, TokenType::Refresh, self.refresh_ttl)?,
        })
    }

    fn mint(
        &self,
        account_id: i64,
        token_type: TokenType,
        ttl: Duration,
    ) -> Result<String, TokenError> {
        let now = Utc::now().timestamp();
        let exp = i64::try_from(ttl.as_secs())
            .ok()
            .and_then(|secs| now.checked_add(secs))
            .ok_or(TokenError::TtlOverflow(ttl))?;
        let claims = Claims {
            sub: account_id.to_string(),
            iat: now,
            exp,
            jti: Uuid::new_v4().to_string(),
            token_type,
        };
        self.sign(&claims)
    }

    pub(crate) fn sign(&self, claims: &Claims) -> Result<String, TokenError> {
        Ok(encode(&Header::new(Algorithm::HS256), claims, &self.encoding_key)?)
    }

    /// Verify signature and expiry and require an access token.
    pub fn verify_access(&self, token: &str) -> Result<Claims, AuthError> {
        self.verify(token, TokenType::Access)
    }

    /// Verify signature and expiry and require the given token type.
    pub fn verify(&self, token: &str, expected: TokenType) -> Result<Claims, AuthError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;
        validation.validate_aud = false;

        let token_data = decode::<Claims>(token, &self.decoding_key, &validation).map_err(|e| {
            match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => AuthError::TokenExpired,
                jsonwebtoken::errors::ErrorKind::InvalidSignature => AuthError::InvalidSignature,
                _ => AuthError::MalformedToken,
            }
        })?;

        if token_data.claims.token_type != expected {
            return Err(AuthError::WrongTokenType);
        }
        Ok(token_data.claims)
    }
}
