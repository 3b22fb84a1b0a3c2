// Copyright 2025 Kore Ledger, SL
// SPDX-License-Identifier: AGPL-3.0-or-later

//! Hash algorithms used to derive digests
//!

use crate::Error;

use blake2::Blake2b512;
use md5::Md5;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use sha1::Sha1;
use sha2::{Digest, Sha256, Sha384, Sha512};
use sha3::{Sha3_256, Sha3_512};

use std::{fmt, str::FromStr};

/// Enumeration with the supported whole-message hash algorithms.
#[allow(non_camel_case_types)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum HashAlgorithm {
    MD5,
    SHA1,
    #[default]
    SHA2_256,
    SHA2_384,
    SHA2_512,
    SHA3_256,
    SHA3_512,
    Blake2b_512,
    Blake3_256,
}

impl HashAlgorithm {
    /// Computes the digest of `data`.
    ///
    /// A fresh hasher is created for every call and dropped before
    /// returning, so the algorithm value itself carries no state.
    pub fn digest(&self, data: &[u8]) -> Vec<u8> {
        match self {
            Self::MD5 => Md5::digest(data).to_vec(),
            Self::SHA1 => Sha1::digest(data).to_vec(),
            Self::SHA2_256 => Sha256::digest(data).to_vec(),
            Self::SHA2_384 => Sha384::digest(data).to_vec(),
            Self::SHA2_512 => Sha512::digest(data).to_vec(),
            Self::SHA3_256 => Sha3_256::digest(data).to_vec(),
            Self::SHA3_512 => Sha3_512::digest(data).to_vec(),
            Self::Blake2b_512 => Blake2b512::digest(data).to_vec(),
            Self::Blake3_256 => blake3::hash(data).as_bytes().to_vec(),
        }
    }

    /// Length in bytes of the digests produced by this algorithm.
    pub fn output_len(&self) -> usize {
        match self {
            Self::MD5 => 16,
            Self::SHA1 => 20,
            Self::SHA2_256 | Self::SHA3_256 | Self::Blake3_256 => 32,
            Self::SHA2_384 => 48,
            Self::SHA2_512 | Self::SHA3_512 | Self::Blake2b_512 => 64,
        }
    }

    /// Canonical name, accepted back by [`FromStr`].
    pub fn name(&self) -> &'static str {
        match self {
            Self::MD5 => "MD5",
            Self::SHA1 => "SHA1",
            Self::SHA2_256 => "SHA256",
            Self::SHA2_384 => "SHA384",
            Self::SHA2_512 => "SHA512",
            Self::SHA3_256 => "SHA3-256",
            Self::SHA3_512 => "SHA3-512",
            Self::Blake2b_512 => "BLAKE2b-512",
            Self::Blake3_256 => "BLAKE3-256",
        }
    }
}

impl fmt::Display for HashAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for HashAlgorithm {
    type Err = Error;

    /// Parses an algorithm name ignoring case, `-` and `_`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(|c| *c != '-' && *c != '_')
            .collect::<String>()
            .to_ascii_lowercase();
        match normalized.as_str() {
            "md5" => Ok(Self::MD5),
            "sha1" => Ok(Self::SHA1),
            "sha256" | "sha2256" => Ok(Self::SHA2_256),
            "sha384" | "sha2384" => Ok(Self::SHA2_384),
            "sha512" | "sha2512" => Ok(Self::SHA2_512),
            "sha3256" => Ok(Self::SHA3_256),
            "sha3512" => Ok(Self::SHA3_512),
            "blake2b" | "blake2b512" => Ok(Self::Blake2b_512),
            "blake3" | "blake3256" => Ok(Self::Blake3_256),
            _ => Err(Error::UnknownAlgorithm(s.to_owned())),
        }
    }
}

impl Serialize for HashAlgorithm {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.name())
    }
}

impl<'de> Deserialize<'de> for HashAlgorithm {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        HashAlgorithm::from_str(&s).map_err(serde::de::Error::custom)
    }
}
