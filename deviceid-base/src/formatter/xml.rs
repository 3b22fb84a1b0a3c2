// Copyright 2025 Kore Ledger, SL
// SPDX-License-Identifier: AGPL-3.0-or-later

use super::Formatter;
use crate::{collection::ComponentSet, encoder::ComponentEncoder};

const ROOT_ELEMENT: &str = "DeviceId";
const COMPONENT_ELEMENT: &str = "Component";

/// Serializes the components as a compact XML tree.
///
/// ```text
/// <DeviceId><Component Name="a" Value="..." /><Component Name="b" Value="..." /></DeviceId>
/// ```
///
/// Children follow canonical order and carry the encoded value. No
/// whitespace is emitted between elements.
pub struct XmlFormatter {
    encoder: Box<dyn ComponentEncoder>,
}

impl XmlFormatter {
    pub fn new<E>(encoder: E) -> Self
    where
        E: ComponentEncoder + 'static,
    {
        Self {
            encoder: Box::new(encoder),
        }
    }
}

impl Formatter for XmlFormatter {
    fn device_id(&self, components: &ComponentSet) -> String {
        let components = components.sorted();
        if components.is_empty() {
            return format!("<{} />", ROOT_ELEMENT);
        }

        let mut xml = format!("<{}>", ROOT_ELEMENT);
        for (name, component) in components {
            let value = self.encoder.encode(component);
            xml.push_str(&format!(
                "<{} Name=\"{}\" Value=\"{}\" />",
                COMPONENT_ELEMENT,
                escape_attribute(name),
                escape_attribute(&value)
            ));
        }
        xml.push_str(&format!("</{}>", ROOT_ELEMENT));
        xml
    }
}

fn escape_attribute(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\t' => escaped.push_str("&#x9;"),
            '\n' => escaped.push_str("&#xA;"),
            '\r' => escaped.push_str("&#xD;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
