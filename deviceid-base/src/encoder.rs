// Copyright 2025 Kore Ledger, SL
// SPDX-License-Identifier: AGPL-3.0-or-later

//! # Component encoders.
//!
//! Turn the value of one component into canonical text. An absent value is
//! always encoded as the empty string.
//!

use crate::component::Component;

use deviceid_digest::{ByteArrayEncoder, ByteEncoding, HashAlgorithm};
use serde::{Deserialize, Serialize};

/// Encodes a single component value.
pub trait ComponentEncoder: Send + Sync {
    fn encode(&self, component: &dyn Component) -> String;
}

/// Returns the value unchanged.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PlainTextComponentEncoder;

impl ComponentEncoder for PlainTextComponentEncoder {
    fn encode(&self, component: &dyn Component) -> String {
        component.value().unwrap_or_default()
    }
}

/// Hashes the UTF-8 bytes of the value and encodes the digest.
pub struct HashComponentEncoder {
    algorithm: HashAlgorithm,
    encoder: Box<dyn ByteArrayEncoder>,
}

impl HashComponentEncoder {
    pub fn new<E>(algorithm: HashAlgorithm, encoder: E) -> Self
    where
        E: ByteArrayEncoder + 'static,
    {
        Self {
            algorithm,
            encoder: Box::new(encoder),
        }
    }
}

impl ComponentEncoder for HashComponentEncoder {
    fn encode(&self, component: &dyn Component) -> String {
        let value = component.value().unwrap_or_default();
        let digest = self.algorithm.digest(value.as_bytes());
        self.encoder.encode(&digest)
    }
}

/// Named selection of a [`ComponentEncoder`], usable from configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ComponentEncoding {
    #[default]
    Plain,
    Hash {
        #[serde(default)]
        algorithm: HashAlgorithm,
        #[serde(default)]
        encoding: ByteEncoding,
    },
}

impl ComponentEncoder for ComponentEncoding {
    fn encode(&self, component: &dyn Component) -> String {
        match self {
            Self::Plain => PlainTextComponentEncoder.encode(component),
            Self::Hash {
                algorithm,
                encoding,
            } => HashComponentEncoder::new(*algorithm, *encoding).encode(component),
        }
    }
}
