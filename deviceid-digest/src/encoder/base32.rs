// Copyright 2025 Kore Ledger, SL
// SPDX-License-Identifier: AGPL-3.0-or-later

use super::ByteArrayEncoder;
use crate::Error;

use serde::{Deserialize, Serialize};

/// Symbol table used by [`Base32Encoder`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Base32Alphabet {
    /// `0123456789ABCDEFGHJKMNPQRSTVWXYZ`
    #[default]
    Crockford,
    /// `ABCDEFGHIJKLMNOPQRSTUVWXYZ234567`
    Rfc4648,
}

impl Base32Alphabet {
    fn alphabet(&self) -> base32::Alphabet {
        match self {
            Self::Crockford => base32::Alphabet::Crockford,
            Self::Rfc4648 => base32::Alphabet::Rfc4648 { padding: false },
        }
    }
}

/// Base32 without padding.
///
/// Bits are consumed from the most significant end of the first byte, five
/// at a time. A trailing group shorter than five bits is filled with zero
/// bits on the low-order side before the symbol lookup.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Base32Encoder {
    alphabet: Base32Alphabet,
}

impl Base32Encoder {
    pub const fn new(alphabet: Base32Alphabet) -> Self {
        Self { alphabet }
    }

    pub fn alphabet(&self) -> Base32Alphabet {
        self.alphabet
    }
}

impl ByteArrayEncoder for Base32Encoder {
    fn encode(&self, bytes: &[u8]) -> String {
        base32::encode(self.alphabet.alphabet(), bytes)
    }

    fn decode(&self, text: &str) -> Result<Vec<u8>, Error> {
        base32::decode(self.alphabet.alphabet(), text).ok_or_else(|| {
            Error::Decoding(format!("Invalid base32 ({:?}) input", self.alphabet))
        })
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn test_rfc4648_vectors() {
        let encoder = Base32Encoder::new(Base32Alphabet::Rfc4648);
        assert_eq!(encoder.encode(b""), "");
        assert_eq!(encoder.encode(b"f"), "MY");
        assert_eq!(encoder.encode(b"fo"), "MZXQ");
        assert_eq!(encoder.encode(b"foo"), "MZXW6");
        assert_eq!(encoder.encode(b"foobar"), "MZXW6YTBOI");
    }

    #[test]
    fn test_crockford_vectors() {
        let encoder = Base32Encoder::default();
        assert_eq!(encoder.alphabet(), Base32Alphabet::Crockford);
        assert_eq!(encoder.encode(&[0xff]), "ZW");
        assert_eq!(encoder.encode(&[0x00]), "00");
        assert_eq!(encoder.encode(b"foobar"), "CSQPYRK1E8");
    }

    #[test]
    fn test_output_length() {
        let encoder = Base32Encoder::default();
        for len in 0..=20usize {
            let bytes = vec![0xa5u8; len];
            assert_eq!(encoder.encode(&bytes).len(), (len * 8).div_ceil(5));
        }
    }

    #[test]
    fn test_low_order_padding() {
        // 0x80 -> 10000 000(00)
        let encoder = Base32Encoder::new(Base32Alphabet::Rfc4648);
        assert_eq!(encoder.encode(&[0x80]), "QA");
        // 0x01 -> 00000 001(00)
        assert_eq!(encoder.encode(&[0x01]), "AE");
    }
}
