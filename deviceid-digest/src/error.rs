// Copyright 2025 Kore Ledger, SL
// SPDX-License-Identifier: AGPL-3.0-or-later

//! Errors module
//!

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Unknown hash algorithm: {0}")]
    UnknownAlgorithm(String),

    #[error("Unknown byte encoding: {0}")]
    UnknownEncoding(String),

    #[error("Decoding error: {0}")]
    Decoding(String),
}
