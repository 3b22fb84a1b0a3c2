// Copyright 2025 Kore Ledger, SL
// SPDX-License-Identifier: AGPL-3.0-or-later

use config::Config;
use deviceid_base::{Error, config::Config as DeviceIdConfig};
use params::Params;
use tracing::error;

mod params;

const TARGET_SETTINGS: &str = "DeviceId-Bridge-Settings";

/// Builds the configuration from `DEVICEID_*` environment variables and a
/// json, toml or yaml `file`. Values from the file take precedence.
pub fn build_config(env: bool, file: &str) -> Result<DeviceIdConfig, Error> {
    // Env configuration
    let mut params_env = Params::default();
    if env {
        params_env = Params::from_env()?;
    }

    // file configuration (json, yaml or toml)
    let mut params_file = Params::default();
    if !file.is_empty() {
        let mut config = Config::builder();

        config = config.add_source(config::File::with_name(file));

        let config = config.build().map_err(|e| {
            error!(TARGET_SETTINGS, "Error building config: {}", e);
            Error::Configuration(e.to_string())
        })?;

        params_file = config.try_deserialize().map_err(|e| {
            error!(TARGET_SETTINGS, "Error try deserialize config: {}", e);
            Error::Configuration(e.to_string())
        })?;
    }

    // Mix configurations.
    Ok(DeviceIdConfig::from(params_env.mix_config(params_file)))
}
