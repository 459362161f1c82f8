// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Style-group mappings on both sides of the renderer.
//!
//! [`StyleSet`] is what a style source produces: a mapping from a logical
//! group name (`"root"`, `"label"`, ...) to an opaque style value `S`.
//! [`ClassNames`] is what the renderer hands back: the same group names
//! mapped to rendered identifier strings.

use alloc::string::String;
use alloc::vec::Vec;

/// A mapping from style-group name to an opaque style value.
///
/// Entries are kept sorted by group name for binary search lookup, so
/// iteration order is deterministic regardless of insertion order.
///
/// # Example
///
/// ```rust
/// use understory_style_memo::StyleSet;
///
/// let styles = StyleSet::new()
///     .with("root", "color: red")
///     .with("label", "font-weight: 600");
///
/// assert_eq!(styles.get("root"), Some(&"color: red"));
/// assert_eq!(styles.len(), 2);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct StyleSet<S> {
    /// Sorted by group name.
    groups: Vec<(String, S)>,
}

impl<S> Default for StyleSet<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> StyleSet<S> {
    /// Creates an empty style set.
    #[must_use]
    pub fn new() -> Self {
        Self { groups: Vec::new() }
    }

    /// Adds (or replaces) a group and returns the set.
    #[must_use]
    pub fn with(mut self, group: impl Into<String>, style: S) -> Self {
        self.insert(group, style);
        self
    }

    /// Inserts a group, returning the style it replaced, if any.
    pub fn insert(&mut self, group: impl Into<String>, style: S) -> Option<S> {
        let group = group.into();
        match self
            .groups
            .binary_search_by(|(name, _)| name.as_str().cmp(&group))
        {
            Ok(idx) => Some(core::mem::replace(&mut self.groups[idx].1, style)),
            Err(idx) => {
                self.groups.insert(idx, (group, style));
                None
            }
        }
    }

    /// Returns the style for a group, if present.
    #[must_use]
    pub fn get(&self, group: &str) -> Option<&S> {
        self.groups
            .binary_search_by(|(name, _)| name.as_str().cmp(group))
            .ok()
            .map(|idx| &self.groups[idx].1)
    }

    /// Returns the number of groups.
    #[must_use]
    #[inline]
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Returns `true` if there are no groups.
    #[must_use]
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Iterates `(group, style)` pairs in group-name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &S)> + '_ {
        self.groups.iter().map(|(name, style)| (name.as_str(), style))
    }
}

impl<S, G: Into<String>> FromIterator<(G, S)> for StyleSet<S> {
    fn from_iter<I: IntoIterator<Item = (G, S)>>(iter: I) -> Self {
        let mut set = Self::new();
        for (group, style) in iter {
            set.insert(group, style);
        }
        set
    }
}

/// Rendered identifiers, one per style group.
///
/// This is the value memoized by [`UseStyles`](crate::UseStyles); callers
/// receive it behind an `Rc` so repeated hits are pointer-equal.
///
/// # Example
///
/// ```rust
/// use understory_style_memo::ClassNames;
///
/// let names: ClassNames = [("root", "root-0"), ("label", "label-1")]
///     .into_iter()
///     .collect();
///
/// assert_eq!(names.get("root"), Some("root-0"));
/// assert_eq!(names.get("missing"), None);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct ClassNames {
    /// Sorted by group name.
    entries: Vec<(String, String)>,
}

impl ClassNames {
    /// Creates an empty mapping.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the identifier for a group, replacing any previous one.
    pub fn insert(&mut self, group: impl Into<String>, class_name: impl Into<String>) {
        let group = group.into();
        let class_name = class_name.into();
        match self
            .entries
            .binary_search_by(|(name, _)| name.as_str().cmp(&group))
        {
            Ok(idx) => self.entries[idx].1 = class_name,
            Err(idx) => self.entries.insert(idx, (group, class_name)),
        }
    }

    /// Returns the identifier rendered for a group.
    #[must_use]
    pub fn get(&self, group: &str) -> Option<&str> {
        self.entries
            .binary_search_by(|(name, _)| name.as_str().cmp(group))
            .ok()
            .map(|idx| self.entries[idx].1.as_str())
    }

    /// Returns the number of groups.
    #[must_use]
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no group was rendered.
    #[must_use]
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates `(group, identifier)` pairs in group-name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.entries
            .iter()
            .map(|(name, class_name)| (name.as_str(), class_name.as_str()))
    }
}

impl<G: Into<String>, C: Into<String>> FromIterator<(G, C)> for ClassNames {
    fn from_iter<I: IntoIterator<Item = (G, C)>>(iter: I) -> Self {
        let mut names = Self::new();
        for (group, class_name) in iter {
            names.insert(group, class_name);
        }
        names
    }
}
