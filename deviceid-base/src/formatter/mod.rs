// Copyright 2025 Kore Ledger, SL
// SPDX-License-Identifier: AGPL-3.0-or-later

//! # Formatters.
//!
//! A formatter consumes the whole component set and produces the final
//! identifier. Every formatter walks the components in canonical order
//! (see [`ComponentSet::sorted`]) and substitutes the empty string for an
//! absent value, so one unavailable component never aborts generation.
//!

mod hash;
pub mod presets;
mod string;
mod xml;

pub use hash::{HashFormatter, HashPayload};
pub(crate) use hash::DEFAULT_HASH_DELIMITER;
pub use string::StringFormatter;
pub(crate) use string::DEFAULT_STRING_DELIMITER;
pub use xml::XmlFormatter;

use crate::collection::ComponentSet;

/// Combines a set of components into a device identifier.
pub trait Formatter: Send + Sync {
    fn device_id(&self, components: &ComponentSet) -> String;

    /// Raw digest behind the identifier, for formatters that hash.
    fn device_id_bytes(&self, _components: &ComponentSet) -> Option<Vec<u8>> {
        None
    }
}
