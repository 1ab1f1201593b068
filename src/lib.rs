// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Firestore Gateway: document CRUD over HTTP
//!
//! This crate exposes create/read/update/delete endpoints that forward each
//! request to a single Firestore call and translate the outcome into an
//! HTTP response.

pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod routes;

use config::Config;
use db::FirestoreDb;

/// Shared application state.
pub struct AppState {
    pub config: Config,
    pub db: FirestoreDb,
}
