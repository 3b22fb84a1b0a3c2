// Copyright 2025 Kore Ledger, SL
// SPDX-License-Identifier: AGPL-3.0-or-later

use deviceid_base::{
    Error,
    config::{Config, FormatterConfig, default_hash_delimiter, default_string_delimiter},
    encoder::ComponentEncoding,
    formatter::HashPayload,
};
use deviceid_digest::{ByteEncoding, HashAlgorithm};
use serde::Deserialize;
use tracing::error;

const TARGET_PARAMS: &str = "DeviceId-Bridge-Params";

#[derive(Debug, Deserialize, Default)]
pub struct Params {
    #[serde(default)]
    deviceid: DeviceIdParams,
}

impl Params {
    pub fn from_env() -> Result<Self, Error> {
        Ok(Self {
            deviceid: DeviceIdParams::from_env("DEVICEID")?,
        })
    }

    pub fn mix_config(&self, other_config: Params) -> Self {
        Self {
            deviceid: self.deviceid.mix_config(other_config.deviceid),
        }
    }
}

impl From<Params> for Config {
    fn from(params: Params) -> Self {
        let params = params.deviceid;
        let formatter = match params.kind {
            FormatterKind::Hash => FormatterConfig::Hash {
                algorithm: params.algorithm,
                encoding: params.encoding,
                delimiter: params.delimiter.unwrap_or_else(default_hash_delimiter),
                payload: params.payload,
            },
            FormatterKind::String => FormatterConfig::String {
                encoder: params.component.encoding(),
                delimiter: params.delimiter.unwrap_or_else(default_string_delimiter),
            },
            FormatterKind::Xml => FormatterConfig::Xml {
                encoder: params.component.encoding(),
            },
        };
        Config::new(formatter)
    }
}

#[derive(Debug, Deserialize, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
enum FormatterKind {
    #[default]
    Hash,
    String,
    Xml,
}

fn build_env<T>(prefix: &str) -> Result<T, Error>
where
    T: for<'de> Deserialize<'de>,
{
    let mut config = config::Config::builder();
    config = config.add_source(config::Environment::with_prefix(prefix));

    let config = config.build().map_err(|e| {
        error!(TARGET_PARAMS, "Error building config: {}", e);
        Error::Configuration(e.to_string())
    })?;

    config.try_deserialize().map_err(|e| {
        error!(TARGET_PARAMS, "Error try deserialize config: {}", e);
        Error::Configuration(e.to_string())
    })
}

#[derive(Debug, Deserialize, Clone, Default, PartialEq, Eq)]
struct DeviceIdParams {
    #[serde(default)]
    kind: FormatterKind,
    #[serde(default)]
    algorithm: HashAlgorithm,
    #[serde(default)]
    encoding: ByteEncoding,
    #[serde(default)]
    delimiter: Option<String>,
    #[serde(default)]
    payload: HashPayload,
    #[serde(default)]
    component: ComponentParams,
}

impl DeviceIdParams {
    fn from_env(parent: &str) -> Result<Self, Error> {
        let params: DeviceIdParams = build_env(parent)?;

        Ok(Self {
            component: ComponentParams::from_env(&format!("{parent}_COMPONENT"))?,
            ..params
        })
    }

    fn mix_config(&self, other_config: DeviceIdParams) -> Self {
        let kind = if other_config.kind != FormatterKind::default() {
            other_config.kind
        } else {
            self.kind
        };

        let algorithm = if other_config.algorithm != HashAlgorithm::default() {
            other_config.algorithm
        } else {
            self.algorithm
        };

        let encoding = if other_config.encoding != ByteEncoding::default() {
            other_config.encoding
        } else {
            self.encoding
        };

        let payload = if other_config.payload != HashPayload::default() {
            other_config.payload
        } else {
            self.payload
        };

        Self {
            kind,
            algorithm,
            encoding,
            payload,
            delimiter: other_config.delimiter.or_else(|| self.delimiter.clone()),
            component: self.component.mix_config(other_config.component),
        }
    }
}

#[derive(Debug, Deserialize, Clone, Default, PartialEq, Eq)]
struct ComponentParams {
    #[serde(default)]
    hashed: bool,
    #[serde(default)]
    algorithm: HashAlgorithm,
    #[serde(default)]
    encoding: ByteEncoding,
}

impl ComponentParams {
    fn from_env(parent: &str) -> Result<Self, Error> {
        build_env(parent)
    }

    fn mix_config(&self, other_config: ComponentParams) -> Self {
        let algorithm = if other_config.algorithm != HashAlgorithm::default() {
            other_config.algorithm
        } else {
            self.algorithm
        };

        let encoding = if other_config.encoding != ByteEncoding::default() {
            other_config.encoding
        } else {
            self.encoding
        };

        Self {
            hashed: self.hashed || other_config.hashed,
            algorithm,
            encoding,
        }
    }

    fn encoding(&self) -> ComponentEncoding {
        if self.hashed {
            ComponentEncoding::Hash {
                algorithm: self.algorithm,
                encoding: self.encoding,
            }
        } else {
            ComponentEncoding::Plain
        }
    }
}
