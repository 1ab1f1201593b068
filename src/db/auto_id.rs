// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Client-side document ID generation.
//!
//! Produces the same shape of ID Firestore client SDKs assign on `add()`:
//! 20 characters drawn uniformly from `[A-Za-z0-9]`.

use crate::db::DbError;
use ring::rand::{SecureRandom, SystemRandom};

pub const AUTO_ID_LEN: usize = 20;

const ALPHABET: &[u8; 62] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

// Largest multiple of 62 that fits in a byte; bytes at or above it are
// discarded so every character is equally likely.
const MAX_UNBIASED: u8 = 248;

/// Generate a new random document ID.
pub fn generate(rng: &SystemRandom) -> Result<String, DbError> {
    let mut id = String::with_capacity(AUTO_ID_LEN);
    let mut buf = [0u8; AUTO_ID_LEN * 2];

    while id.len() < AUTO_ID_LEN {
        rng.fill(&mut buf).map_err(|_| DbError::IdGeneration)?;
        for byte in buf.iter().copied().filter(|b| *b < MAX_UNBIASED) {
            id.push(ALPHABET[(byte % 62) as usize] as char);
            if id.len() == AUTO_ID_LEN {
                break;
            }
        }
    }

    Ok(id)
}
