// Copyright 2025 Kore Ledger, SL
// SPDX-License-Identifier: AGPL-3.0-or-later

//! # Device identifier builder.
//!

use crate::{
    Error,
    collection::ComponentSet,
    component::Component,
    config::Config,
    formatter::{Formatter, presets},
};

use tracing::debug;

use std::fmt;

const TARGET_BUILDER: &str = "DeviceId-Builder";

/// Collects components and renders them with the active formatter.
pub struct DeviceIdBuilder {
    components: ComponentSet,
    formatter: Box<dyn Formatter>,
}

impl DeviceIdBuilder {
    /// Builder with the [`presets::default_v6`] formatter.
    pub fn new() -> Self {
        Self {
            components: ComponentSet::new(),
            formatter: Box::new(presets::default_v6()),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self {
            components: ComponentSet::new(),
            formatter: config.formatter.build(),
        }
    }

    pub fn with_formatter<F>(mut self, formatter: F) -> Self
    where
        F: Formatter + 'static,
    {
        self.formatter = Box::new(formatter);
        self
    }

    pub fn with_boxed_formatter(mut self, formatter: Box<dyn Formatter>) -> Self {
        self.formatter = formatter;
        self
    }

    /// Registers `component` under `name`. A previous component whose name
    /// matches ignoring case is replaced.
    pub fn add_component<C>(mut self, name: impl Into<String>, component: C) -> Self
    where
        C: Component + 'static,
    {
        self.components.add(name, component);
        self
    }

    /// Applies `configure` only when `condition` holds.
    ///
    /// ```
    /// # use deviceid_base::{DeviceIdBuilder, component::EnvComponent};
    /// let builder = DeviceIdBuilder::new()
    ///     .on(cfg!(unix), |builder| builder.add_component("User", EnvComponent::new("USER")))
    ///     .on(cfg!(windows), |builder| builder.add_component("User", EnvComponent::new("USERNAME")));
    /// assert_eq!(builder.components().len(), 1);
    /// ```
    pub fn on<F>(self, condition: bool, configure: F) -> Self
    where
        F: FnOnce(Self) -> Self,
    {
        if condition { configure(self) } else { self }
    }

    pub fn components(&self) -> &ComponentSet {
        &self.components
    }

    pub fn to_device_id(&self) -> String {
        debug!(
            TARGET_BUILDER,
            "Formatting device id from {} components",
            self.components.len()
        );
        self.formatter.device_id(&self.components)
    }

    /// Raw digest of the identifier, before text encoding.
    pub fn to_bytes(&self) -> Result<Vec<u8>, Error> {
        debug!(
            TARGET_BUILDER,
            "Computing device id digest from {} components",
            self.components.len()
        );
        self.formatter
            .device_id_bytes(&self.components)
            .ok_or_else(|| {
                Error::Unsupported(
                    "The active formatter does not produce a digest".to_owned(),
                )
            })
    }
}

impl Default for DeviceIdBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for DeviceIdBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_device_id())
    }
}

impl fmt::Debug for DeviceIdBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DeviceIdBuilder")
            .field("components", &self.components)
            .finish_non_exhaustive()
    }
}
