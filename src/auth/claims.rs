// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! JWT claims carried by issued credentials.

use serde::{Deserialize, Serialize};

use super::AuthError;

/// Which of the two credentials minted at login a token is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenType {
    /// Short-lived credential accepted by protected routes.
    Access,
    /// Longer-lived credential meant for obtaining a fresh access token.
    Refresh,
}

/// Claims embedded in every issued credential.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject: the account id, rendered as a string
    pub sub: String,

    /// Issued at (Unix seconds)
    pub iat: i64,

    /// Expiration (Unix seconds)
    pub exp: i64,

    /// Unique token id
    pub jti: String,

    #[serde(rename = "type")]
    pub token_type: TokenType,
}

impl Claims {
    /// Account id named by the subject claim.
    pub fn account_id(&self) -> Result<i64, AuthError> {
        self.sub.parse().map_err(|_| AuthError::MalformedToken)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_claims() -> Claims {
        Claims {
            sub: "42".to_string(),
            iat: 1700000000,
            exp: 1700000900,
            jti: "b6b3c1e4-2c55-4d1f-9a1a-3f0c2f0a9e11".to_string(),
            token_type: TokenType::Access,
        }
    }

    #[test]
    fn account_id_parses_subject() {
        assert_eq!(sample_claims().account_id().unwrap(), 42);
    }

    #[test]
    fn non_numeric_subject_is_malformed() {
        let mut claims = sample_claims();
        claims.sub = "user_123".to_string();
        assert!(matches!(claims.account_id(), Err(AuthError::MalformedToken)));
    }

    #[test]
    fn token_type_serializes_under_type_key() {
        let json = serde_json::to_value(sample_claims()).unwrap();
        assert_eq!(json["type"], "access");
        assert!(json.get("token_type").is_none());
    }
}
