// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Database layer (Firestore).

pub mod auto_id;
pub mod firestore;
pub mod memory;
pub mod value;

pub use firestore::FirestoreDb;
pub use memory::MemoryStore;

/// Errors raised by the document database layer.
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("Database not connected (offline mode)")]
    Offline,

    #[error("No document to update: {collection}/{id}")]
    DocumentMissing { collection: String, id: String },

    #[error("Document already exists: {collection}/{id}")]
    AlreadyExists { collection: String, id: String },

    #[error("Invalid document path: {0}")]
    InvalidPath(String),

    #[error("Failed to generate document ID")]
    IdGeneration,

    #[error("Firestore error: {0}")]
    Firestore(String),
}
