// Copyright 2025 Kore Ledger, SL
// SPDX-License-Identifier: AGPL-3.0-or-later

use super::ByteArrayEncoder;
use crate::Error;

/// Lowercase hexadecimal, two characters per byte.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HexEncoder;

impl ByteArrayEncoder for HexEncoder {
    fn encode(&self, bytes: &[u8]) -> String {
        hex::encode(bytes)
    }

    fn decode(&self, text: &str) -> Result<Vec<u8>, Error> {
        hex::decode(text).map_err(|e| Error::Decoding(e.to_string()))
    }
}
