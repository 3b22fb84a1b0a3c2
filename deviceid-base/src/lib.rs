// Copyright 2025 Kore Ledger, SL
// SPDX-License-Identifier: AGPL-3.0-or-later

//! # Device identifiers.
//!
//! Named [`Component`]s are registered in a [`DeviceIdBuilder`] and combined
//! by the configured [`Formatter`] into a single reproducible identifier.
//! Components are always processed in ascending ordinal order of their
//! names, so the registration order never changes the result.
//!
//! ```
//! use deviceid_base::{DeviceIdBuilder, component::TextComponent, formatter::HashFormatter};
//! use deviceid_digest::{HashAlgorithm, HexEncoder};
//!
//! let id = DeviceIdBuilder::new()
//!     .with_formatter(HashFormatter::new(HashAlgorithm::MD5, HexEncoder))
//!     .add_component("Test1", TextComponent::new("Test1"))
//!     .add_component("Test2", TextComponent::new("Test2"))
//!     .to_string();
//! assert_eq!(id, "b02f4481c190173f05192bc08a1b14bc");
//! ```

pub mod builder;
pub mod collection;
pub mod component;
pub mod config;
pub mod encoder;
pub mod error;
pub mod formatter;

pub use builder::DeviceIdBuilder;
pub use collection::ComponentSet;
pub use component::Component;
pub use encoder::ComponentEncoder;
pub use error::Error;
pub use formatter::Formatter;

pub use deviceid_digest::{ByteArrayEncoder, ByteEncoding, HashAlgorithm};
