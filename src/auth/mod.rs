// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! # Authentication Module
//!
//! Bearer-token authentication for the coursework API.
//!
//! ## Auth Flow
//!
//! 1. Client calls `POST /login` with a username
//! 2. Server mints an access token (short-lived) and a refresh token
//!    (long-lived), both HS256 JWTs with the account id as `sub`
//! 3. Client sends `Authorization: Bearer <access token>` on every other route
//! 4. The access guard verifies signature, expiry and token type, then
//!    resolves `sub` against the account table
//!
//! ## Failure Modes
//!
//! - Missing, malformed, expired or wrong-type credential → 401
//! - Valid credential whose account no longer exists → 403
//!
//! There is no revocation list. Deleting the account is the only way to stop
//! a credential before it expires.

pub mod claims;
pub mod error;
pub mod extractor;
pub mod middleware;
pub mod tokens;

pub use claims::{Claims, TokenType};
pub use error::AuthError;
pub use extractor::CurrentAccount;
pub use middleware::require_account;
pub use tokens::{TokenError, TokenIssuer, TokenPair};
