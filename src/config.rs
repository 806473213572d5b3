// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! # Runtime Configuration
//!
//! This module defines environment variable names and default values used
//! throughout the application. Configuration is loaded from the environment
//! once at startup into an [`AppConfig`] and handed to the constructors that
//! need it.
//!
//! ## Environment Variables
//!
//! | Variable | Description | Default |
//! |----------|-------------|---------|
//! | `HOST` | Server bind address | `0.0.0.0` |
//! | `PORT` | Server bind port | `8080` |
//! | `DATABASE_URL` | SQLite database URL | `sqlite://coursework.db` |
//! | `JWT_SECRET` | HMAC secret for signing tokens | `your_secret_key` |
//! | `ACCESS_TOKEN_TTL_SECS` | Access token lifetime | `900` |
//! | `REFRESH_TOKEN_TTL_SECS` | Refresh token lifetime | `2592000` |
//! | `SEED_DEMO_USER` | Seed the `john_doe` account at startup | off |
//! | `LOG_FORMAT` | Logging format (`json` or `pretty`) | `pretty` |
//! | `RUST_LOG` | Log level filter | `info,tower_http=debug` |

use std::time::Duration;

pub const HOST_ENV: &str = "HOST";
pub const PORT_ENV: &str = "PORT";
pub const DATABASE_URL_ENV: &str = "DATABASE_URL";
pub const JWT_SECRET_ENV: &str = "JWT_SECRET";
pub const ACCESS_TOKEN_TTL_ENV: &str = "ACCESS_TOKEN_TTL_SECS";
pub const REFRESH_TOKEN_TTL_ENV: &str = "REFRESH_TOKEN_TTL_SECS";
pub const SEED_DEMO_USER_ENV: &str = "SEED_DEMO_USER";
pub const LOG_FORMAT_ENV: &str = "LOG_FORMAT";

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_DATABASE_URL: &str = "sqlite://coursework.db";

/// Development-only signing secret. A warning is logged when it is in use.
pub const DEFAULT_JWT_SECRET: &str = "your_secret_key";

/// 15 minutes.
pub const DEFAULT_ACCESS_TOKEN_TTL_SECS: u64 = 15 * 60;

/// 30 days.
pub const DEFAULT_REFRESH_TOKEN_TTL_SECS: u64 = 30 * 24 * 60 * 60;

/// Upper bound for either token lifetime (10 years).
pub const MAX_TOKEN_TTL_SECS: u64 = 10 * 365 * 24 * 60 * 60;

/// Filter used when `RUST_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "info,tower_http=debug";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{var} must be a number, got {value:?}")]
    InvalidNumber { var: &'static str, value: String },

    #[error("{var} must be at most {max} seconds, got {value}")]
    TtlTooLarge {
        var: &'static str,
        value: u64,
        max: u64,
    },

    #[error("access token TTL ({access}s) must be shorter than refresh token TTL ({refresh}s)")]
    InvalidTokenTtl { access: u64, refresh: u64 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Pretty,
    Json,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub database_url: String,
    pub jwt_secret: String,
    pub access_token_ttl: Duration,
    pub refresh_token_ttl: Duration,
    pub seed_demo_user: bool,
    pub log_format: LogFormat,
}

impl AppConfig {
    /// Read the configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = parse_or(&lookup, PORT_ENV, DEFAULT_PORT)?;
        let access = parse_or(&lookup, ACCESS_TOKEN_TTL_ENV, DEFAULT_ACCESS_TOKEN_TTL_SECS)?;
        let refresh = parse_or(&lookup, REFRESH_TOKEN_TTL_ENV, DEFAULT_REFRESH_TOKEN_TTL_SECS)?;
        for (var, value) in [(ACCESS_TOKEN_TTL_ENV, access), (REFRESH_TOKEN_TTL_ENV, refresh)] {
            if value > MAX_TOKEN_TTL_SECS {
                return Err(ConfigError::TtlTooLarge {
                    var,
                    value,
                    max: MAX_TOKEN_TTL_SECS,
                });
            }
        }
        if access >= refresh {
            return Err(ConfigError::InvalidTokenTtl { access, refresh });
        }

        let log_format = match lookup(LOG_FORMAT_ENV).as_deref().map(str::trim) {
            Some(f) if f.eq_ignore_ascii_case("json") => LogFormat::Json,
            _ => LogFormat::Pretty,
        };
        let seed_demo_user = matches!(
            lookup(SEED_DEMO_USER_ENV).as_deref().map(str::trim),
            Some("1") | Some("true") | Some("TRUE") | Some("yes")
        );

        Ok(Self {
            host: lookup(HOST_ENV).unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port,
            database_url: lookup(DATABASE_URL_ENV)
                .unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string()),
            jwt_secret: lookup(JWT_SECRET_ENV).unwrap_or_else(|| DEFAULT_JWT_SECRET.to_string()),
            access_token_ttl: Duration::from_secs(access),
            refresh_token_ttl: Duration::from_secs(refresh),
            seed_demo_user,
            log_format,
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn uses_default_secret(&self) -> bool {
        self.jwt_secret == DEFAULT_JWT_SECRET
    }
}

fn parse_or<F, T>(lookup: &F, var: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    match lookup(var) {
        None => Ok(default),
        Some(value) => {
            let parsed = value.trim().parse::<T>();
            parsed.map_err(|_| ConfigError::InvalidNumber { var, value })
        }
    }
}
