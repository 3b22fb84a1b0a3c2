// Copyright 2025 Kore Ledger, SL
// SPDX-License-Identifier: AGPL-3.0-or-later

use super::ByteArrayEncoder;
use crate::Error;

use base64::{Engine as _, engine::general_purpose};

/// URL-safe base64 (`-` and `_`), without `=` padding.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Base64UrlEncoder;

impl ByteArrayEncoder for Base64UrlEncoder {
    fn encode(&self, bytes: &[u8]) -> String {
        general_purpose::URL_SAFE_NO_PAD.encode(bytes)
    }

    fn decode(&self, text: &str) -> Result<Vec<u8>, Error> {
        general_purpose::URL_SAFE_NO_PAD
            .decode(text)
            .map_err(|e| Error::Decoding(e.to_string()))
    }
}

/// Standard base64 with `=` padding.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Base64Encoder;

impl ByteArrayEncoder for Base64Encoder {
    fn encode(&self, bytes: &[u8]) -> String {
        general_purpose::STANDARD.encode(bytes)
    }

    fn decode(&self, text: &str) -> Result<Vec<u8>, Error> {
        general_purpose::STANDARD
            .decode(text)
            .map_err(|e| Error::Decoding(e.to_string()))
    }
}
