// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Document payloads exchanged over the API.

use serde::{Deserialize, Serialize};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// Untyped document contents, passed through to Firestore unmodified.
pub type DocumentData = serde_json::Map<String, serde_json::Value>;

/// Body of `POST /create`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateDocumentRequest {
    /// Collection that receives the new document
    pub collection: String,
    pub data: DocumentData,
}

/// Response to a successful create.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "bindings/")
)]
pub struct CreateDocumentResponse {
    /// ID assigned to the new document
    pub id: String,
}

/// Body of `PUT /update/{collection}/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateDocumentRequest {
    /// Top-level fields to overwrite
    pub data: DocumentData,
}
