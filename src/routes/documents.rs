// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Document CRUD routes.
//!
//! Each handler performs exactly one database call. Request bodies are not
//! validated beyond JSON decoding, and a body that fails to decode is
//! reported the same way as a database failure.

use crate::error::{AppError, Operation, Result};
use crate::models::{
    CreateDocumentRequest, CreateDocumentResponse, DocumentData, UpdateDocumentRequest,
};
use crate::AppState;
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    routing::{delete, get, post, put},
    Json, Router,
};
use std::sync::Arc;

pub const UPDATED_MESSAGE: &str = "Document updated successfully";
pub const DELETED_MESSAGE: &str = "Document deleted successfully";

/// Document routes, mounted under the configured path in routes/mod.rs.
pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/create", post(create_document))
        .route("/read/{collection}/{id}", get(read_document))
        .route("/update/{collection}/{id}", put(update_document))
        .route("/delete/{collection}/{id}", delete(delete_document))
}

/// Create a document with a generated ID.
async fn create_document(
    State(state): State<Arc<AppState>>,
    body: std::result::Result<Json<CreateDocumentRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<CreateDocumentResponse>)> {
    let Json(request) = body.map_err(|e| AppError::failed(Operation::Create, e))?;

    let id = state
        .db
        .add(&request.collection, &request.data)
        .await
        .map_err(|e| AppError::failed(Operation::Create, e))?;

    tracing::info!(
        collection = %request.collection,
        document_id = %id,
        "Document created"
    );

    Ok((StatusCode::CREATED, Json(CreateDocumentResponse { id })))
}

/// Return a document's data.
async fn read_document(
    State(state): State<Arc<AppState>>,
    Path((collection, id)): Path<(String, String)>,
) -> Result<Json<DocumentData>> {
    let data = state
        .db
        .get(&collection, &id)
        .await
        .map_err(|e| AppError::failed(Operation::Read, e))?;

    data.map(Json).ok_or(AppError::NotFound { collection, id })
}

/// Merge the body's `data` fields into an existing document.
async fn update_document(
    State(state): State<Arc<AppState>>,
    Path((collection, id)): Path<(String, String)>,
    body: std::result::Result<Json<UpdateDocumentRequest>, JsonRejection>,
) -> Result<(StatusCode, &'static str)> {
    let Json(request) = body.map_err(|e| AppError::failed(Operation::Update, e))?;

    state
        .db
        .update(&collection, &id, &request.data)
        .await
        .map_err(|e| AppError::failed(Operation::Update, e))?;

    tracing::info!(
        collection = %collection,
        document_id = %id,
        fields = request.data.len(),
        "Document updated"
    );

    Ok((StatusCode::OK, UPDATED_MESSAGE))
}

async fn delete_document(
    State(state): State<Arc<AppState>>,
    Path((collection, id)): Path<(String, String)>,
) -> Result<(StatusCode, &'static str)> {
    state
        .db
        .delete(&collection, &id)
        .await
        .map_err(|e| AppError::failed(Operation::Delete, e))?;

    tracing::info!(collection = %collection, document_id = %id, "Document deleted");

    Ok((StatusCode::OK, DELETED_MESSAGE))
}
