// Copyright 2025 Kore Ledger, SL
// SPDX-License-Identifier: AGPL-3.0-or-later

use deviceid_base::{
    DeviceIdBuilder, Error,
    component::{
        CommandComponent, CommandExecutor, FileComponent, FileTokenComponent, TextComponent,
    },
    encoder::{ComponentEncoding, HashComponentEncoder},
    formatter::{HashFormatter, StringFormatter, XmlFormatter, presets},
};
use deviceid_digest::{ByteArrayEncoder, ByteEncoding, HashAlgorithm, HexEncoder};
use test_log::test;

struct UnavailableExecutor;

impl CommandExecutor for UnavailableExecutor {
    fn execute(&self, command: &str) -> Result<String, Error> {
        Err(Error::CommandExecutionFailed(format!("{} not found", command)))
    }
}

fn md5_hex() -> HashFormatter {
    HashFormatter::new(HashAlgorithm::MD5, HexEncoder)
}

#[test]
fn test_empty_builder_md5_hex() {
    let builder = DeviceIdBuilder::new().with_formatter(md5_hex());
    assert_eq!(builder.to_string(), "d41d8cd98f00b204e9800998ecf8427e");
}

#[test]
fn test_two_components_md5_hex() {
    let builder = DeviceIdBuilder::new()
        .with_formatter(md5_hex())
        .add_component("Test2", TextComponent::new("Test2"))
        .add_component("Test1", TextComponent::new("Test1"));
    assert_eq!(builder.to_string(), "b02f4481c190173f05192bc08a1b14bc");
    assert_eq!(
        HexEncoder.encode(&builder.to_bytes().unwrap()),
        "b02f4481c190173f05192bc08a1b14bc"
    );
}

#[test]
fn test_single_absent_component_matches_empty_builder() {
    let empty = DeviceIdBuilder::new().with_formatter(md5_hex());
    let absent = DeviceIdBuilder::new()
        .with_formatter(md5_hex())
        .add_component("Name", TextComponent::absent());
    assert_eq!(absent.to_string(), "d41d8cd98f00b204e9800998ecf8427e");
    assert_eq!(absent.to_string(), empty.to_string());
}

#[test]
fn test_every_formatter_ignores_registration_order() {
    let formatters: Vec<fn() -> DeviceIdBuilder> = vec![
        DeviceIdBuilder::new,
        || DeviceIdBuilder::new().with_formatter(presets::default_v5()),
        || DeviceIdBuilder::new().with_formatter(StringFormatter::new(ComponentEncoding::Plain)),
        || {
            DeviceIdBuilder::new().with_formatter(XmlFormatter::new(HashComponentEncoder::new(
                HashAlgorithm::SHA2_256,
                ByteEncoding::Base64Url,
            )))
        },
    ];

    for builder in formatters {
        let ab = builder()
            .add_component("A", TextComponent::new("1"))
            .add_component("B", TextComponent::new("2"));
        let ba = builder()
            .add_component("B", TextComponent::new("2"))
            .add_component("A", TextComponent::new("1"));
        assert_eq!(ab.to_string(), ba.to_string());
    }
}

#[test]
fn test_unavailable_components_degrade_to_empty_values() {
    let dir = tempfile::tempdir().unwrap();
    let builder = DeviceIdBuilder::new()
        .with_formatter(StringFormatter::new(ComponentEncoding::Plain).with_delimiter("|"))
        .add_component(
            "Command",
            CommandComponent::with_executor("ioreg -l", UnavailableExecutor),
        )
        .add_component("File", FileComponent::new(dir.path().join("missing")))
        .add_component("Text", TextComponent::new("ok"));

    assert_eq!(builder.to_string(), "||ok");
}

#[test]
fn test_file_token_gives_stable_id_across_builders() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("device.token");

    let first = DeviceIdBuilder::new()
        .add_component("FileToken", FileTokenComponent::new(&path))
        .to_string();
    let second = DeviceIdBuilder::new()
        .add_component("FileToken", FileTokenComponent::new(&path))
        .to_string();
    assert_eq!(first, second);
}

#[test]
fn test_name_only_differs_in_case_replaces() {
    let builder = DeviceIdBuilder::new()
        .with_formatter(md5_hex().with_delimiter(","))
        .add_component("Test", TextComponent::new("a"))
        .add_component("TEST", TextComponent::new("b"));
    let expected = DeviceIdBuilder::new()
        .with_formatter(md5_hex())
        .add_component("TEST", TextComponent::new("b"));
    assert_eq!(builder.components().len(), 1);
    assert_eq!(builder.to_string(), expected.to_string());
}
