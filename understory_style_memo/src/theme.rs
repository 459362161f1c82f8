// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Themes with identity.
//!
//! This module provides [`Theme`], an immutable bundle of themed resources
//! plus a right-to-left flag. Every built theme carries a fresh [`ThemeId`];
//! memoized style sets are keyed by that id rather than by theme contents.

use alloc::rc::Rc;
use alloc::vec::Vec;
use core::any::Any;
use core::fmt;

use crate::key::ThemeId;

/// A key for looking up resources in a [`Theme`].
///
/// # Example
///
/// ```rust
/// use understory_style_memo::ResourceKey;
///
/// const IS_DARK: ResourceKey = ResourceKey::new(0);
/// const ACCENT: ResourceKey = ResourceKey::new(1);
/// assert_ne!(IS_DARK, ACCENT);
/// ```
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ResourceKey(u16);

impl ResourceKey {
    /// Creates a new resource key with the given index.
    #[must_use]
    #[inline]
    pub const fn new(index: u16) -> Self {
        Self(index)
    }

    /// Returns the underlying index of this resource key.
    #[must_use]
    #[inline]
    pub const fn index(self) -> u16 {
        self.0
    }
}

impl fmt::Debug for ResourceKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ResourceKey").field(&self.0).finish()
    }
}

/// An immutable visual theme.
///
/// Cloning is cheap (`Rc`) and preserves identity: a clone has the same
/// [`ThemeId`] and hits the same memoized style sets. Building a second theme
/// with identical resources yields a different id, and therefore a cache miss.
///
/// Equality is identity.
///
/// # Example
///
/// ```rust
/// use understory_style_memo::{ResourceKey, ThemeBuilder};
///
/// const IS_DARK: ResourceKey = ResourceKey::new(0);
///
/// let light = ThemeBuilder::new().set(IS_DARK, false).build();
/// let light_again = ThemeBuilder::new().set(IS_DARK, false).build();
///
/// assert_eq!(light.get::<bool>(IS_DARK), Some(&false));
/// assert_eq!(light, light.clone());
/// assert_ne!(light, light_again);
/// ```
#[derive(Clone, Debug)]
pub struct Theme {
    inner: Rc<ThemeData>,
}

#[derive(Debug)]
struct ThemeData {
    id: ThemeId,
    rtl: bool,
    /// Sorted by `ResourceKey` for binary search lookup.
    resources: Vec<(ResourceKey, Rc<dyn Any>)>,
}

impl Theme {
    /// Returns the identity of this theme.
    #[must_use]
    #[inline]
    pub fn id(&self) -> ThemeId {
        self.inner.id
    }

    /// Returns `true` if content should be laid out right-to-left.
    #[must_use]
    #[inline]
    pub fn rtl(&self) -> bool {
        self.inner.rtl
    }

    /// Gets the value for a resource key, if present with type `T`.
    #[must_use]
    pub fn get<T: 'static>(&self, key: ResourceKey) -> Option<&T> {
        self.inner
            .resources
            .binary_search_by_key(&key, |(k, _)| *k)
            .ok()
            .and_then(|idx| self.inner.resources[idx].1.downcast_ref())
    }

    /// Returns `true` if this theme has a value for the resource key.
    #[must_use]
    pub fn contains(&self, key: ResourceKey) -> bool {
        self.inner
            .resources
            .binary_search_by_key(&key, |(k, _)| *k)
            .is_ok()
    }

    /// Returns the number of resources in this theme.
    #[must_use]
    #[inline]
    pub fn len(&self) -> usize {
        self.inner.resources.len()
    }

    /// Returns `true` if this theme has no resources.
    #[must_use]
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.inner.resources.is_empty()
    }
}

impl PartialEq for Theme {
    fn eq(&self, other: &Self) -> bool {
        self.inner.id == other.inner.id
    }
}

impl Eq for Theme {}

impl Default for Theme {
    fn default() -> Self {
        ThemeBuilder::new().build()
    }
}

/// Builder for constructing [`Theme`] instances.
#[derive(Debug, Default)]
pub struct ThemeBuilder {
    rtl: bool,
    resources: Vec<(ResourceKey, Rc<dyn Any>)>,
}

impl ThemeBuilder {
    /// Creates a new empty left-to-right theme builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the right-to-left flag.
    #[must_use]
    pub fn rtl(mut self, rtl: bool) -> Self {
        self.rtl = rtl;
        self
    }

    /// Sets a resource value in the theme.
    ///
    /// If the resource was already set, the value is replaced.
    #[must_use]
    pub fn set<T: 'static>(mut self, key: ResourceKey, value: T) -> Self {
        let value: Rc<dyn Any> = Rc::new(value);
        match self.resources.binary_search_by_key(&key, |(k, _)| *k) {
            Ok(idx) => self.resources[idx].1 = value,
            Err(idx) => self.resources.insert(idx, (key, value)),
        }
        self
    }

    /// Builds the theme, assigning it a fresh identity.
    #[must_use]
    pub fn build(self) -> Theme {
        Theme {
            inner: Rc::new(ThemeData {
                id: ThemeId::next(),
                rtl: self.rtl,
                resources: self.resources,
            }),
        }
    }
}
