// Copyright 2025 Kore Ledger, SL
// SPDX-License-Identifier: AGPL-3.0-or-later

use super::Component;

use deviceid_digest::{ByteArrayEncoder, HashAlgorithm, HexEncoder};
use tracing::{debug, warn};
use uuid::Uuid;

use std::{
    fs,
    io::ErrorKind,
    path::{Path, PathBuf},
};

const TARGET_FILE: &str = "DeviceId-Component-File";

/// Component that reads the contents of the first readable file among a
/// list of candidate paths.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileComponent {
    paths: Vec<PathBuf>,
    hash_contents: bool,
}

impl FileComponent {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self::with_paths([path])
    }

    pub fn with_paths<I, P>(paths: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        Self {
            paths: paths.into_iter().map(Into::into).collect(),
            hash_contents: false,
        }
    }

    /// Replace the contents by their uppercase hex MD5.
    pub fn hash_contents(mut self, hash_contents: bool) -> Self {
        self.hash_contents = hash_contents;
        self
    }

    fn read(&self, path: &Path) -> Option<String> {
        // read_to_string works on pseudo files such as
        // /sys/class/dmi/id/product_uuid that report a zero length.
        match fs::read_to_string(path) {
            Ok(contents) => Some(contents.trim().to_owned()),
            Err(e) if e.kind() == ErrorKind::NotFound => None,
            Err(e) => {
                debug!(TARGET_FILE, "Can not read {}: {}", path.display(), e);
                None
            }
        }
    }
}

impl Component for FileComponent {
    fn value(&self) -> Option<String> {
        let contents = self.paths.iter().find_map(|path| self.read(path))?;
        if self.hash_contents {
            let digest = HashAlgorithm::MD5.digest(contents.as_bytes());
            Some(HexEncoder.encode(&digest).to_uppercase())
        } else {
            Some(contents)
        }
    }
}

/// Component holding a random token persisted in a file.
///
/// The first call generates an uppercase UUID and writes it to `path` as
/// ASCII. Later calls return the stored token. When the file exists but can
/// not be read the value is absent; a fresh token is never handed out in
/// place of the stored one. A token that can not be written is still
/// returned for the current call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileTokenComponent {
    path: PathBuf,
}

impl FileTokenComponent {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Component for FileTokenComponent {
    fn value(&self) -> Option<String> {
        if self.path.exists() {
            return match fs::read(&self.path) {
                Ok(bytes) => Some(String::from_utf8_lossy(&bytes).into_owned()),
                Err(e) => {
                    warn!(
                        TARGET_FILE,
                        "Can not read token file {}: {}",
                        self.path.display(),
                        e
                    );
                    None
                }
            };
        }

        let token = Uuid::new_v4().to_string().to_uppercase();
        if let Err(e) = fs::write(&self.path, token.as_bytes()) {
            warn!(
                TARGET_FILE,
                "Can not write token file {}: {}",
                self.path.display(),
                e
            );
        }

        Some(token)
    }
}
