// Copyright 2025 Kore Ledger, SL
// SPDX-License-Identifier: AGPL-3.0-or-later

//! Ready-made formatters.
//!
//! These replace process-wide default instances: callers construct the one
//! they want and hand it to the builder.
//!

use super::HashFormatter;

use deviceid_digest::{
    Base32Alphabet, Base32Encoder, Base64Encoder, Base64UrlEncoder, HashAlgorithm,
    HexEncoder,
};

/// SHA-256 digest encoded as base64url.
pub fn default_v5() -> HashFormatter {
    HashFormatter::new(HashAlgorithm::SHA2_256, Base64UrlEncoder)
}

/// SHA-256 digest encoded as Crockford base32. Used by
/// [`DeviceIdBuilder::new`](crate::DeviceIdBuilder::new).
pub fn default_v6() -> HashFormatter {
    HashFormatter::new(
        HashAlgorithm::SHA2_256,
        Base32Encoder::new(Base32Alphabet::Crockford),
    )
}

/// Whole-set digest as lowercase hex.
pub fn legacy_hex(algorithm: HashAlgorithm) -> HashFormatter {
    HashFormatter::new(algorithm, HexEncoder)
}

/// Whole-set digest as standard base64, or base64url when `url_safe`.
pub fn legacy_base64(algorithm: HashAlgorithm, url_safe: bool) -> HashFormatter {
    if url_safe {
        HashFormatter::new(algorithm, Base64UrlEncoder)
    } else {
        HashFormatter::new(algorithm, Base64Encoder)
    }
}
