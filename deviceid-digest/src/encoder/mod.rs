// Copyright 2025 Kore Ledger, SL
// SPDX-License-Identifier: AGPL-3.0-or-later

//! Byte array encoders
//!
//! Encoders turn raw bytes, usually a digest, into a canonical text
//! representation. Every encoder is total over its input: any byte
//! sequence, the empty one included, has exactly one encoding.
//!

mod base32;
mod base64;
mod hex;

pub use self::base32::{Base32Alphabet, Base32Encoder};
pub use self::base64::{Base64Encoder, Base64UrlEncoder};
pub use self::hex::HexEncoder;

use crate::Error;

use serde::{Deserialize, Serialize};

use std::{fmt, str::FromStr};

/// Converts a byte sequence into text and back.
pub trait ByteArrayEncoder: Send + Sync {
    fn encode(&self, bytes: &[u8]) -> String;

    fn decode(&self, text: &str) -> Result<Vec<u8>, Error>;
}

/// Named selection of a [`ByteArrayEncoder`], usable from configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ByteEncoding {
    Hex,
    #[default]
    Base32Crockford,
    Base32Rfc4648,
    Base64,
    Base64Url,
}

impl ByteEncoding {
    fn encoder(&self) -> &'static dyn ByteArrayEncoder {
        const CROCKFORD: Base32Encoder = Base32Encoder::new(Base32Alphabet::Crockford);
        const RFC4648: Base32Encoder = Base32Encoder::new(Base32Alphabet::Rfc4648);
        match self {
            Self::Hex => &HexEncoder,
            Self::Base32Crockford => &CROCKFORD,
            Self::Base32Rfc4648 => &RFC4648,
            Self::Base64 => &Base64Encoder,
            Self::Base64Url => &Base64UrlEncoder,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Hex => "hex",
            Self::Base32Crockford => "base32_crockford",
            Self::Base32Rfc4648 => "base32_rfc4648",
            Self::Base64 => "base64",
            Self::Base64Url => "base64_url",
        }
    }
}

impl ByteArrayEncoder for ByteEncoding {
    fn encode(&self, bytes: &[u8]) -> String {
        self.encoder().encode(bytes)
    }

    fn decode(&self, text: &str) -> Result<Vec<u8>, Error> {
        self.encoder().decode(text)
    }
}

impl fmt::Display for ByteEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ByteEncoding {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().replace('-', "_").as_str() {
            "hex" => Ok(Self::Hex),
            "base32" | "base32_crockford" | "crockford" => Ok(Self::Base32Crockford),
            "base32_rfc4648" | "rfc4648" => Ok(Self::Base32Rfc4648),
            "base64" => Ok(Self::Base64),
            "base64_url" | "base64url" => Ok(Self::Base64Url),
            _ => Err(Error::UnknownEncoding(s.to_owned())),
        }
    }
}
