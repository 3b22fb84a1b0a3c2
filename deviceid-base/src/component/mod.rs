// Copyright 2025 Kore Ledger, SL
// SPDX-License-Identifier: AGPL-3.0-or-later

//! # Components.
//!
//! A component is one fact about the machine. Retrieving it is lazy and
//! independent of every other component. A source that is missing, denied
//! or unsupported yields `None`; it never fails the whole identifier.
//!

mod command;
mod file;

pub use command::{CommandComponent, CommandExecutor, ShellCommandExecutor};
pub use file::{FileComponent, FileTokenComponent};

use tracing::debug;

const TARGET_COMPONENT: &str = "DeviceId-Component";

/// A unit of identity evidence.
///
/// Implementations must return the same value on repeated calls against an
/// unchanged system.
pub trait Component: Send + Sync {
    fn value(&self) -> Option<String>;
}

impl<F> Component for F
where
    F: Fn() -> Option<String> + Send + Sync,
{
    fn value(&self) -> Option<String> {
        self()
    }
}

/// Component with a fixed value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextComponent {
    value: Option<String>,
}

impl TextComponent {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: Some(value.into()),
        }
    }

    /// A component that is registered but has no value.
    pub fn absent() -> Self {
        Self { value: None }
    }
}

impl From<Option<String>> for TextComponent {
    fn from(value: Option<String>) -> Self {
        Self { value }
    }
}

impl Component for TextComponent {
    fn value(&self) -> Option<String> {
        self.value.clone()
    }
}

/// Component backed by an environment variable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvComponent {
    key: String,
}

impl EnvComponent {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }
}

impl Component for EnvComponent {
    fn value(&self) -> Option<String> {
        match std::env::var(&self.key) {
            Ok(value) => Some(value),
            Err(e) => {
                debug!(TARGET_COMPONENT, "Env {} unavailable: {}", self.key, e);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    use serial_test::serial;

    #[test]
    fn test_text_component() {
        assert_eq!(TextComponent::new("abc").value(), Some("abc".to_owned()));
        assert_eq!(TextComponent::absent().value(), None);
        assert_eq!(TextComponent::from(None).value(), None);
    }

    #[test]
    fn test_closure_component() {
        let component = || Some("from closure".to_owned());
        assert_eq!(component.value(), Some("from closure".to_owned()));
        let missing = || -> Option<String> { None };
        assert_eq!(missing.value(), None);
    }

    #[test]
    #[serial]
    fn test_env_component() {
        unsafe {
            std::env::set_var("DEVICEID_TEST_ENV_COMPONENT", "value");
        }
        assert_eq!(
            EnvComponent::new("DEVICEID_TEST_ENV_COMPONENT").value(),
            Some("value".to_owned())
        );
        unsafe {
            std::env::remove_var("DEVICEID_TEST_ENV_COMPONENT");
        }
        assert_eq!(EnvComponent::new("DEVICEID_TEST_ENV_COMPONENT").value(), None);
    }
}
