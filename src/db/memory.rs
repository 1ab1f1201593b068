// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Process-local document store used when no Firestore connection is wanted.
//!
//! Mirrors the Firestore semantics the router depends on: `update` merges
//! top-level fields and fails on a missing document, `delete` of a missing
//! document succeeds, and path segments follow Firestore's naming rules.
//! Data is stored in its Firestore-encoded form, so reads return exactly what
//! the real backend would (nulls kept, oversized integers as doubles).

use crate::db::{value, DbError};
use crate::models::DocumentData;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use std::sync::Arc;

/// In-memory documents keyed by `(collection, id)`.
#[derive(Clone, Default)]
pub struct MemoryStore {
    documents: Arc<DashMap<(String, String), DocumentData>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a new document; fails if the ID is already taken.
    pub fn create(&self, collection: &str, id: &str, data: &DocumentData) -> Result<(), DbError> {
        let key = document_key(collection, id)?;
        match self.documents.entry(key) {
            Entry::Occupied(_) => Err(DbError::AlreadyExists {
                collection: collection.to_string(),
                id: id.to_string(),
            }),
            Entry::Vacant(slot) => {
                slot.insert(value::normalize(data));
                Ok(())
            }
        }
    }

    pub fn get(&self, collection: &str, id: &str) -> Result<Option<DocumentData>, DbError> {
        let key = document_key(collection, id)?;
        Ok(self.documents.get(&key).map(|doc| doc.value().clone()))
    }

    /// Overwrite the given top-level fields of an existing document.
    pub fn update(&self, collection: &str, id: &str, data: &DocumentData) -> Result<(), DbError> {
        let key = document_key(collection, id)?;
        let mut doc = self
            .documents
            .get_mut(&key)
            .ok_or_else(|| DbError::DocumentMissing {
                collection: collection.to_string(),
                id: id.to_string(),
            })?;

        doc.extend(value::normalize(data));
        Ok(())
    }

    pub fn delete(&self, collection: &str, id: &str) -> Result<(), DbError> {
        let key = document_key(collection, id)?;
        self.documents.remove(&key);
        Ok(())
    }

    /// Number of stored documents across all collections.
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}

fn document_key(collection: &str, id: &str) -> Result<(String, String), DbError> {
    check_segment("collection", collection)?;
    check_segment("document ID", id)?;
    Ok((collection.to_string(), id.to_string()))
}

/// Firestore rejects empty segments, `.`/`..`, slashes, and `__reserved__` names.
fn check_segment(kind: &str, segment: &str) -> Result<(), DbError> {
    let reserved = segment.len() >= 4 && segment.starts_with("__") && segment.ends_with("__");
    if segment.is_empty()
        || segment == "."
        || segment == ".."
        || segment.contains('/')
        || reserved
    {
        return Err(DbError::InvalidPath(format!(
            "{} '{}' is not a valid path segment",
            kind, segment
        )));
    }
    Ok(())
}
