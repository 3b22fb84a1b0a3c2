// Copyright 2025 Kore Ledger, SL
// SPDX-License-Identifier: AGPL-3.0-or-later

use super::Formatter;
use crate::{collection::ComponentSet, encoder::ComponentEncoder};

pub(crate) const DEFAULT_STRING_DELIMITER: &str = ".";

/// Joins the encoded value of every component.
pub struct StringFormatter {
    encoder: Box<dyn ComponentEncoder>,
    delimiter: String,
}

impl StringFormatter {
    pub fn new<E>(encoder: E) -> Self
    where
        E: ComponentEncoder + 'static,
    {
        Self {
            encoder: Box::new(encoder),
            delimiter: DEFAULT_STRING_DELIMITER.to_owned(),
        }
    }

    pub fn with_delimiter(mut self, delimiter: impl Into<String>) -> Self {
        self.delimiter = delimiter.into();
        self
    }
}

impl Formatter for StringFormatter {
    fn device_id(&self, components: &ComponentSet) -> String {
        components
            .sorted()
            .into_iter()
            .map(|(_, component)| self.encoder.encode(component))
            .collect::<Vec<String>>()
            .join(&self.delimiter)
    }
}
