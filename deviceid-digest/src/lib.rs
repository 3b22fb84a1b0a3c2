// Copyright 2025 Kore Ledger, SL
// SPDX-License-Identifier: AGPL-3.0-or-later

//! Digest and byte encoding primitives
//!
//! Hash algorithms are selected through [`HashAlgorithm`] and raw digests are
//! turned into text through a [`ByteArrayEncoder`].
//!

pub mod derive;
pub mod encoder;
pub mod error;

pub use derive::HashAlgorithm;
pub use encoder::{
    Base32Alphabet, Base32Encoder, Base64Encoder, Base64UrlEncoder,
    ByteArrayEncoder, ByteEncoding, HexEncoder,
};
pub use error::Error;
