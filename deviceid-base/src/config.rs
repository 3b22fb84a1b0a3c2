// Copyright 2025 Kore Ledger, SL
// SPDX-License-Identifier: AGPL-3.0-or-later

//! # Configuration module

use crate::{
    encoder::ComponentEncoding,
    formatter::{
        DEFAULT_HASH_DELIMITER, DEFAULT_STRING_DELIMITER, Formatter, HashFormatter,
        HashPayload, StringFormatter, XmlFormatter,
    },
};

use deviceid_digest::{ByteEncoding, HashAlgorithm};
use serde::{Deserialize, Serialize};

/// Device identifier configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Formatter used to render the identifier.
    #[serde(default)]
    pub formatter: FormatterConfig,
}

impl Config {
    pub fn new(formatter: FormatterConfig) -> Self {
        Self { formatter }
    }
}

/// Formatter configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FormatterConfig {
    /// Single digest over every `name:value` pair.
    Hash {
        #[serde(default)]
        algorithm: HashAlgorithm,
        #[serde(default)]
        encoding: ByteEncoding,
        #[serde(default = "default_hash_delimiter")]
        delimiter: String,
        #[serde(default)]
        payload: HashPayload,
    },
    /// Encoded values joined by a delimiter.
    String {
        #[serde(default)]
        encoder: ComponentEncoding,
        #[serde(default = "default_string_delimiter")]
        delimiter: String,
    },
    /// Compact XML tree.
    Xml {
        #[serde(default)]
        encoder: ComponentEncoding,
    },
}

impl FormatterConfig {
    pub fn build(&self) -> Box<dyn Formatter> {
        match self {
            Self::Hash {
                algorithm,
                encoding,
                delimiter,
                payload,
            } => Box::new(
                HashFormatter::new(*algorithm, *encoding)
                    .with_delimiter(delimiter.clone())
                    .with_payload(*payload),
            ),
            Self::String { encoder, delimiter } => {
                Box::new(StringFormatter::new(*encoder).with_delimiter(delimiter.clone()))
            }
            Self::Xml { encoder } => Box::new(XmlFormatter::new(*encoder)),
        }
    }
}

impl Default for FormatterConfig {
    fn default() -> Self {
        Self::Hash {
            algorithm: HashAlgorithm::SHA2_256,
            encoding: ByteEncoding::Base32Crockford,
            delimiter: default_hash_delimiter(),
            payload: HashPayload::Values,
        }
    }
}

pub fn default_hash_delimiter() -> String {
    DEFAULT_HASH_DELIMITER.to_owned()
}

pub fn default_string_delimiter() -> String {
    DEFAULT_STRING_DELIMITER.to_owned()
}

#[cfg(test)]
mod tests {

    use super::*;
    use crate::{DeviceIdBuilder, component::TextComponent, formatter::presets};

    #[test]
    fn test_default_matches_builder_default() {
        let config = Config::default();
        let from_config = DeviceIdBuilder::from_config(&config)
            .add_component("a", TextComponent::new("1"));
        let default = DeviceIdBuilder::new().add_component("a", TextComponent::new("1"));
        assert_eq!(from_config.to_string(), default.to_string());
        assert_eq!(
            from_config.to_string(),
            presets::default_v6().device_id(default.components())
        );
    }

    #[test]
    fn test_deserialize_with_defaults() {
        let config: Config = serde_json::from_str(r#"{}"#).unwrap();
        assert_eq!(config, Config::default());

        let config: Config =
            serde_json::from_str(r#"{"formatter":{"kind":"hash","algorithm":"md5","encoding":"hex"}}"#)
                .unwrap();
        assert_eq!(
            config.formatter,
            FormatterConfig::Hash {
                algorithm: HashAlgorithm::MD5,
                encoding: ByteEncoding::Hex,
                delimiter: ",".to_owned(),
                payload: HashPayload::Values
            }
        );
        let builder = DeviceIdBuilder::from_config(&config)
            .add_component("Test1", TextComponent::new("Test1"))
            .add_component("Test2", TextComponent::new("Test2"));
        assert_eq!(builder.to_string(), "b02f4481c190173f05192bc08a1b14bc");
    }

    #[test]
    fn test_string_and_xml() {
        let config: Config = serde_json::from_str(
            r#"{"formatter":{"kind":"string","delimiter":"-"}}"#,
        )
        .unwrap();
        let builder = DeviceIdBuilder::from_config(&config)
            .add_component("b", TextComponent::new("2"))
            .add_component("a", TextComponent::new("1"));
        assert_eq!(builder.to_string(), "1-2");

        let config: Config = serde_json::from_str(
            r#"{"formatter":{"kind":"xml","encoder":{"kind":"plain"}}}"#,
        )
        .unwrap();
        let builder =
            DeviceIdBuilder::from_config(&config).add_component("a", TextComponent::new("1"));
        assert_eq!(
            builder.to_string(),
            "<DeviceId><Component Name=\"a\" Value=\"1\" /></DeviceId>"
        );
    }

    #[test]
    fn test_name_value_payload() {
        let config: Config = serde_json::from_str(
            r#"{"formatter":{"kind":"hash","algorithm":"md5","encoding":"hex","payload":"name_value"}}"#,
        )
        .unwrap();
        let builder = DeviceIdBuilder::from_config(&config)
            .add_component("Test1", TextComponent::new("Test1"))
            .add_component("Test2", TextComponent::new("Test2"));
        assert_eq!(builder.to_string(), "60b0434849ffb5c64c5dbaf0af921200");
    }

    #[test]
    fn test_unknown_algorithm_is_rejected() {
        let result: Result<Config, _> =
            serde_json::from_str(r#"{"formatter":{"kind":"hash","algorithm":"crc32"}}"#);
        assert!(result.is_err());
    }
}
