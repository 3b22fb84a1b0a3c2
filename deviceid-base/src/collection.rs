// Copyright 2025 Kore Ledger, SL
// SPDX-License-Identifier: AGPL-3.0-or-later

//! # Component collection.
//!
//! Components are keyed by their name compared case-insensitively. Adding a
//! component whose name is already present replaces the previous entry, and
//! the stored name becomes the one of the latest registration.
//!
//! Names are folded one character at a time to their simple uppercase
//! mapping. Characters whose uppercase form expands to several characters
//! (`ß` to `SS`) are kept as they are, so `ß` and `ss` stay distinct, and
//! so do `K` (Kelvin sign) and `k`.
//!

use crate::component::Component;

use std::{collections::HashMap, fmt};

struct Entry {
    name: String,
    component: Box<dyn Component>,
}

/// Name-deduplicated set of components.
///
/// Mutation requires `&mut self`; callers sharing a set across threads must
/// serialize access to [`ComponentSet::add`] themselves.
#[derive(Default)]
pub struct ComponentSet {
    entries: HashMap<String, Entry>,
}

impl ComponentSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts `component` under `name`, replacing any entry whose name is
    /// equal ignoring case.
    pub fn add<C>(&mut self, name: impl Into<String>, component: C)
    where
        C: Component + 'static,
    {
        self.add_boxed(name, Box::new(component));
    }

    pub fn add_boxed(
        &mut self,
        name: impl Into<String>,
        component: Box<dyn Component>,
    ) {
        let name = name.into();
        self.entries.insert(key(&name), Entry { name, component });
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(&key(name))
    }

    pub fn get(&self, name: &str) -> Option<&dyn Component> {
        self.entries
            .get(&key(name))
            .map(|entry| entry.component.as_ref())
    }

    /// Components in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &dyn Component)> {
        self.entries
            .values()
            .map(|entry| (entry.name.as_str(), entry.component.as_ref()))
    }

    /// Components in canonical order: ascending by name, compared byte-wise.
    ///
    /// The comparison does not depend on locale, so every formatter that
    /// walks this sequence produces the same output on every host.
    pub fn sorted(&self) -> Vec<(&str, &dyn Component)> {
        let mut components: Vec<_> = self.iter().collect();
        components.sort_unstable_by(|(a, _), (b, _)| a.cmp(b));
        components
    }
}

impl fmt::Debug for ComponentSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set()
            .entries(self.sorted().into_iter().map(|(name, _)| name))
            .finish()
    }
}

fn key(name: &str) -> String {
    name.chars()
        .map(|c| {
            let mut upper = c.to_uppercase();
            match (upper.next(), upper.next()) {
                (Some(u), None) => u,
                _ => c,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {

    use super::*;
    use crate::component::TextComponent;

    fn value(set: &ComponentSet, name: &str) -> Option<String> {
        set.get(name).and_then(|component| component.value())
    }

    #[test]
    fn test_add_and_get() {
        let mut set = ComponentSet::new();
        assert!(set.is_empty());
        set.add("MachineName", TextComponent::new("host"));
        assert_eq!(set.len(), 1);
        assert!(set.contains("machinename"));
        assert_eq!(value(&set, "MACHINENAME"), Some("host".to_owned()));
        assert!(set.get("UserName").is_none());
    }

    #[test]
    fn test_names_differing_in_case_replace() {
        let mut set = ComponentSet::new();
        set.add("Test", TextComponent::new("first"));
        set.add("TEST", TextComponent::new("second"));

        assert_eq!(set.len(), 1);
        assert_eq!(value(&set, "test"), Some("second".to_owned()));
        let names: Vec<&str> = set.iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["TEST"]);
    }

    #[test]
    fn test_fold_is_uppercase_per_char() {
        let mut set = ComponentSet::new();
        set.add("k", TextComponent::new("latin"));
        set.add("\u{212A}", TextComponent::new("kelvin"));
        set.add("ss", TextComponent::new("double"));
        set.add("ß", TextComponent::new("sharp"));
        set.add("é", TextComponent::new("lower"));
        set.add("É", TextComponent::new("upper"));

        assert_eq!(set.len(), 5);
        assert_eq!(value(&set, "K"), Some("latin".to_owned()));
        assert_eq!(value(&set, "\u{212A}"), Some("kelvin".to_owned()));
        assert_eq!(value(&set, "SS"), Some("double".to_owned()));
        assert_eq!(value(&set, "ß"), Some("sharp".to_owned()));
        assert_eq!(value(&set, "é"), Some("upper".to_owned()));
    }

    #[test]
    fn test_sorted_is_ordinal() {
        let mut set = ComponentSet::new();
        set.add("b", TextComponent::new("1"));
        set.add("Z", TextComponent::new("2"));
        set.add("a", TextComponent::new("3"));
        set.add("_x", TextComponent::new("4"));
        set.add("Éclair", TextComponent::new("5"));

        let names: Vec<&str> = set.sorted().into_iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["Z", "_x", "a", "b", "Éclair"]);
    }

    #[test]
    fn test_debug_lists_names_in_order() {
        let mut set = ComponentSet::new();
        set.add("b", TextComponent::new("1"));
        set.add("a", TextComponent::absent());
        assert_eq!(format!("{:?}", set), r#"{"a", "b"}"#);
    }
}
