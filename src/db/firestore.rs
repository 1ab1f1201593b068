// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Firestore client wrapper exposing untyped document operations.
//!
//! The four primitives (`add`, `get`, `update`, `delete`) follow the
//! semantics of the Firestore client SDKs:
//! - `add` assigns a fresh auto-ID and creates the document
//! - `get` returns `None` for a missing document
//! - `update` merges top-level fields and fails if the document is missing
//! - `delete` succeeds whether or not the document exists
//!
//! Documents travel as raw Firestore `Document`s built by [`value`], not
//! through the `firestore` crate's serde layer, so data is stored and read
//! back without loss.
//!
//! [`value`]: crate::db::value

use crate::db::{auto_id, value, DbError, MemoryStore};
use crate::models::DocumentData;
use firestore::FirestoreWritePrecondition;
use gcloud_sdk::google::firestore::v1::Document;
use ring::rand::SystemRandom;

#[derive(Clone)]
enum Backend {
    Firestore(firestore::FirestoreDb),
    Memory(MemoryStore),
    Offline,
}

/// Firestore database client.
#[derive(Clone)]
pub struct FirestoreDb {
    backend: Backend,
    rng: SystemRandom,
}

impl FirestoreDb {
    /// Create a new Firestore client.
    ///
    /// For local development with emulator, set FIRESTORE_EMULATOR_HOST.
    pub async fn new(project_id: &str) -> Result<Self, DbError> {
        // If the emulator environment variable is set, use unauthenticated connection
        // to avoid local credential warnings and leakage.
        if std::env::var("FIRESTORE_EMULATOR_HOST").is_ok() {
            return Self::create_emulator_client(project_id).await;
        }

        let client = firestore::FirestoreDb::new(project_id)
            .await
            .map_err(|e| DbError::Firestore(format!("Failed to connect to Firestore: {}", e)))?;

        tracing::info!(project = project_id, "Connected to Firestore");

        Ok(Self::with_backend(Backend::Firestore(client)))
    }

    /// Create a Firestore client for the emulator with unauthenticated access.
    async fn create_emulator_client(project_id: &str) -> Result<Self, DbError> {
        tracing::info!("Using unauthenticated connection for Firestore Emulator");

        let token_source = gcloud_sdk::ExternalJwtFunctionSource::new(|| async {
            Ok(gcloud_sdk::Token {
                token_type: "Bearer".to_string(),
                token: gcloud_sdk::SecretValue::new(
                    "eyJhbGciOiJub25lIn0.eyJ1aWQiOiJ0ZXN0In0."
                        .to_string()
                        .into(),
                ),
                expiry: chrono::Utc::now() + chrono::Duration::hours(1),
            })
        });

        let options = firestore::FirestoreDbOptions::new(project_id.to_string());

        let client = firestore::FirestoreDb::with_options_token_source(
            options,
            gcloud_sdk::GCP_DEFAULT_SCOPES.clone(),
            gcloud_sdk::TokenSourceType::ExternalSource(Box::new(token_source)),
        )
        .await
        .map_err(|e| {
            DbError::Firestore(format!("Failed to connect to Firestore Emulator: {}", e))
        })?;

        tracing::info!(
            project = project_id,
            "Connected to Firestore (Emulator/Unauthenticated)"
        );

        Ok(Self::with_backend(Backend::Firestore(client)))
    }

    /// Create a mock Firestore client for testing (offline mode).
    ///
    /// All database operations will return an error if called.
    pub fn new_mock() -> Self {
        Self::with_backend(Backend::Offline)
    }

    /// Create a client backed by a process-local store.
    ///
    /// Behaves like Firestore for the operations below, without any network.
    pub fn new_in_memory() -> Self {
        Self::with_backend(Backend::Memory(MemoryStore::new()))
    }

    fn with_backend(backend: Backend) -> Self {
        Self {
            backend,
            rng: SystemRandom::new(),
        }
    }

    /// Add a document under a freshly generated ID and return that ID.
    pub async fn add(&self, collection: &str, data: &DocumentData) -> Result<String, DbError> {
        let id = auto_id::generate(&self.rng)?;

        match &self.backend {
            Backend::Firestore(client) => {
                let doc = Document {
                    fields: value::to_fields(data),
                    ..Default::default()
                };

                client
                    .fluent()
                    .insert()
                    .into(collection)
                    .document_id(&id)
                    .document(doc)
                    .execute()
                    .await
                    .map_err(|e| DbError::Firestore(e.to_string()))?;
            }
            Backend::Memory(store) => store.create(collection, &id, data)?,
            Backend::Offline => return Err(DbError::Offline),
        }

        Ok(id)
    }

    /// Fetch a document's data, or `None` if it does not exist.
    pub async fn get(&self, collection: &str, id: &str) -> Result<Option<DocumentData>, DbError> {
        match &self.backend {
            Backend::Firestore(client) => {
                let doc: Option<Document> = client
                    .fluent()
                    .select()
                    .by_id_in(collection)
                    .one(id)
                    .await
                    .map_err(|e| DbError::Firestore(e.to_string()))?;

                Ok(doc.map(|doc| value::from_fields(doc.fields)))
            }
            Backend::Memory(store) => store.get(collection, id),
            Backend::Offline => Err(DbError::Offline),
        }
    }

    /// Merge `data` into an existing document.
    ///
    /// Only the top-level keys present in `data` are written; each one
    /// replaces the stored field wholesale.
    pub async fn update(
        &self,
        collection: &str,
        id: &str,
        data: &DocumentData,
    ) -> Result<(), DbError> {
        match &self.backend {
            Backend::Firestore(client) => {
                let mask: Vec<String> = data.keys().map(|k| quote_field_path(k)).collect();
                // A raw document is addressed by its full resource name
                let doc = Document {
                    name: format!("{}/{}/{}", client.get_documents_path(), collection, id),
                    fields: value::to_fields(data),
                    ..Default::default()
                };

                client
                    .fluent()
                    .update()
                    .fields(mask)
                    .in_col(collection)
                    .precondition(FirestoreWritePrecondition::Exists(true))
                    .document(doc)
                    .execute()
                    .await
                    .map_err(|e| DbError::Firestore(e.to_string()))?;
                Ok(())
            }
            Backend::Memory(store) => store.update(collection, id, data),
            Backend::Offline => Err(DbError::Offline),
        }
    }

    /// Delete a document. Deleting a missing document is not an error.
    pub async fn delete(&self, collection: &str, id: &str) -> Result<(), DbError> {
        match &self.backend {
            Backend::Firestore(client) => {
                client
                    .fluent()
                    .delete()
                    .from(collection)
                    .document_id(id)
                    .execute()
                    .await
                    .map_err(|e| DbError::Firestore(e.to_string()))?;
                Ok(())
            }
            Backend::Memory(store) => store.delete(collection, id),
            Backend::Offline => Err(DbError::Offline),
        }
    }
}

/// Render a top-level key as a Firestore field path.
///
/// Simple names (`[A-Za-z_][A-Za-z0-9_]*`) are used as-is; anything else is
/// wrapped in backticks with `` ` `` and `\` escaped.
pub fn quote_field_path(key: &str) -> String {
    let mut chars = key.chars();
    let simple = match chars.next() {
        Some(first) => {
            (first.is_ascii_alphabetic() || first == '_')
                && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        None => false,
    };

    if simple {
        return key.to_string();
    }

    let mut quoted = String::with_capacity(key.len() + 2);
    quoted.push('`');
    for c in key.chars() {
        if c == '`' || c == '\\' {
            quoted.push('\\');
        }
        quoted.push(c);
    }
    quoted.push('`');
    quoted
}
