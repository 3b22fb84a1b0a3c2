// Copyright 2025 Kore Ledger, SL
// SPDX-License-Identifier: AGPL-3.0-or-later

use super::Formatter;
use crate::collection::ComponentSet;

use deviceid_digest::{ByteArrayEncoder, HashAlgorithm};
use serde::{Deserialize, Serialize};

pub(crate) const DEFAULT_HASH_DELIMITER: &str = ",";

/// What each component contributes to the hashed string.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HashPayload {
    /// The value alone.
    #[default]
    Values,
    /// `name:value`, as the v4 builders hashed it.
    NameValue,
}

/// Hashes the whole component set at once.
///
/// The payload holds one entry per component in canonical order, joined by
/// the delimiter and UTF-8 encoded. An absent value is the empty string, so
/// a set whose only component has no value hashes like the empty set.
pub struct HashFormatter {
    algorithm: HashAlgorithm,
    encoder: Box<dyn ByteArrayEncoder>,
    delimiter: String,
    payload: HashPayload,
}

impl HashFormatter {
    pub fn new<E>(algorithm: HashAlgorithm, encoder: E) -> Self
    where
        E: ByteArrayEncoder + 'static,
    {
        Self {
            algorithm,
            encoder: Box::new(encoder),
            delimiter: DEFAULT_HASH_DELIMITER.to_owned(),
            payload: HashPayload::default(),
        }
    }

    pub fn with_delimiter(mut self, delimiter: impl Into<String>) -> Self {
        self.delimiter = delimiter.into();
        self
    }

    pub fn with_payload(mut self, payload: HashPayload) -> Self {
        self.payload = payload;
        self
    }

    pub fn algorithm(&self) -> HashAlgorithm {
        self.algorithm
    }

    /// The string that is hashed.
    pub fn payload(&self, components: &ComponentSet) -> String {
        components
            .sorted()
            .into_iter()
            .map(|(name, component)| {
                let value = component.value().unwrap_or_default();
                match self.payload {
                    HashPayload::Values => value,
                    HashPayload::NameValue => format!("{}:{}", name, value),
                }
            })
            .collect::<Vec<String>>()
            .join(&self.delimiter)
    }

    pub fn digest(&self, components: &ComponentSet) -> Vec<u8> {
        self.algorithm.digest(self.payload(components).as_bytes())
    }
}

impl Formatter for HashFormatter {
    fn device_id(&self, components: &ComponentSet) -> String {
        self.encoder.encode(&self.digest(components))
    }

    fn device_id_bytes(&self, components: &ComponentSet) -> Option<Vec<u8>> {
        Some(self.digest(components))
    }
}
