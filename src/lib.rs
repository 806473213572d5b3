// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Coursework Server - Courses, Accounts and Enrollments
//!
//! A JSON API over SQLite where every route except `/login` and the health
//! probes requires a bearer access token for an existing account.
//!
//! ## Modules
//!
//! - `api` - HTTP API handlers and router (Axum)
//! - `auth` - Token issuance, verification and the access guard
//! - `services` - Input validation in front of the repositories
//! - `storage` - SQLite schema and repositories (sqlx)

pub mod api;
pub mod auth;
pub mod config;
pub mod error;
pub mod models;
pub mod seed;
pub mod services;
pub mod state;
pub mod storage;
