// Copyright 2025 Kore Ledger, SL
// SPDX-License-Identifier: AGPL-3.0-or-later

//! # Error module.
//!

use thiserror::Error;

use serde::{Deserialize, Serialize};

/// Error type.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Error {
    /// Invalid or incomplete configuration.
    #[error("Configuration error: {0}")]
    Configuration(String),
    /// Digest or byte encoding error.
    #[error("Digest error: {0}")]
    Digest(String),
    /// The active formatter does not support the operation.
    #[error("Unsupported operation: {0}")]
    Unsupported(String),
    /// An external command could not be run or returned a failure.
    #[error("Command execution failed: {0}")]
    CommandExecutionFailed(String),
}

impl From<deviceid_digest::Error> for Error {
    fn from(error: deviceid_digest::Error) -> Self {
        match error {
            deviceid_digest::Error::UnknownAlgorithm(_)
            | deviceid_digest::Error::UnknownEncoding(_) => {
                Error::Configuration(error.to_string())
            }
            deviceid_digest::Error::Decoding(_) => Error::Digest(error.to_string()),
        }
    }
}
