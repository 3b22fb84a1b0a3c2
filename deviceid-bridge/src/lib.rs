// Copyright 2025 Kore Ledger, SL
// SPDX-License-Identifier: AGPL-3.0-or-later

pub use deviceid_base::{
    Component, DeviceIdBuilder, Error,
    component,
    config::{Config, FormatterConfig},
    encoder::ComponentEncoding,
    formatter,
};
pub use deviceid_digest::{ByteEncoding, HashAlgorithm};

pub mod settings;

/// Creates a [`DeviceIdBuilder`] whose formatter comes from the environment
/// (when `env` is set) and from the settings `file` (when not empty).
pub fn build_builder(env: bool, file: &str) -> Result<DeviceIdBuilder, Error> {
    let config = settings::build_config(env, file)?;
    Ok(DeviceIdBuilder::from_config(&config))
}
