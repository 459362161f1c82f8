// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Style sources: what gets registered with [`make_styles`](crate::make_styles).

use alloc::boxed::Box;
use core::fmt;

use crate::style_set::StyleSet;
use crate::theme::Theme;

/// A registered style description.
///
/// Either a fixed [`StyleSet`] or a pure function of the [`Theme`]. Static
/// sources are theme-invariant and share one cache entry across all themes;
/// themed sources get one entry per theme identity.
pub enum StyleSource<S> {
    /// A style set that does not depend on the theme.
    Static(StyleSet<S>),
    /// A style set computed from the theme.
    ///
    /// The function must be pure: its result for a given theme is computed
    /// once and reused.
    Themed(Box<dyn Fn(&Theme) -> StyleSet<S>>),
}

impl<S> StyleSource<S> {
    /// Wraps a theme-dependent style function.
    pub fn themed(f: impl Fn(&Theme) -> StyleSet<S> + 'static) -> Self {
        Self::Themed(Box::new(f))
    }

    /// Returns `true` for theme-dependent sources.
    #[must_use]
    #[inline]
    pub fn is_themed(&self) -> bool {
        matches!(self, Self::Themed(_))
    }

    /// Calls `f` with the concrete style set for `theme`.
    ///
    /// Static sources ignore the theme and are lent without cloning.
    pub fn with_styles<T>(&self, theme: &Theme, f: impl FnOnce(&StyleSet<S>) -> T) -> T {
        match self {
            Self::Static(styles) => f(styles),
            Self::Themed(make) => f(&make(theme)),
        }
    }
}

impl<S> From<StyleSet<S>> for StyleSource<S> {
    fn from(styles: StyleSet<S>) -> Self {
        Self::Static(styles)
    }
}

impl<S: fmt::Debug> fmt::Debug for StyleSource<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Static(styles) => f.debug_tuple("Static").field(styles).finish(),
            Self::Themed(_) => f.write_str("Themed(..)"),
        }
    }
}
