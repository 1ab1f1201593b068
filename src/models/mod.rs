// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Data models for the application.

pub mod document;

pub use document::{
    CreateDocumentRequest, CreateDocumentResponse, DocumentData, UpdateDocumentRequest,
};
