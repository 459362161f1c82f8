// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Identity handles used to address memoized style sets.
//!
//! Every dimension a rendered style set depends on is reduced to a small
//! `Copy` handle compared by value. The handles carry identity, not content:
//! two themes built from the same resources still get distinct [`ThemeId`]s.

use core::fmt;
use core::sync::atomic::{AtomicU32, Ordering};

/// Identity of a style renderer instance.
///
/// Returned by [`StyleRenderer::id`](crate::StyleRenderer::id). Swapping the
/// renderer (for example a fake one in tests) changes the id and therefore
/// misses every entry rendered by the previous renderer.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RendererId(u32);

impl RendererId {
    /// Creates a renderer id from a raw value.
    #[must_use]
    #[inline]
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    /// Returns the raw value of this id.
    #[must_use]
    #[inline]
    pub const fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Debug for RendererId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("RendererId").field(&self.0).finish()
    }
}

/// Identity of a rendering surface (a top-level window or an embedded frame).
///
/// Styles rendered into one surface are not visible in another, so each
/// window gets its own cache entries.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WindowId(u64);

impl WindowId {
    /// The primary surface of the application.
    pub const MAIN: Self = Self(0);

    /// Creates a window id from a raw value.
    #[must_use]
    #[inline]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Returns the raw value of this id.
    #[must_use]
    #[inline]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl Default for WindowId {
    fn default() -> Self {
        Self::MAIN
    }
}

impl fmt::Debug for WindowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("WindowId").field(&self.0).finish()
    }
}

/// Identity of a built [`Theme`](crate::Theme).
///
/// Allocated once per [`ThemeBuilder::build`](crate::ThemeBuilder::build)
/// call from a process-wide 32-bit counter, which only needs 32-bit atomics
/// on the target. Ids repeat only after 2^32 builds.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ThemeId(u32);

static NEXT_THEME_ID: AtomicU32 = AtomicU32::new(1);

impl ThemeId {
    pub(crate) fn next() -> Self {
        Self(NEXT_THEME_ID.fetch_add(1, Ordering::Relaxed))
    }

    /// Returns the raw value of this id.
    #[must_use]
    #[inline]
    pub const fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Debug for ThemeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ThemeId").field(&self.0).finish()
    }
}

/// One segment of a memoization key path.
///
/// Paths are `[Renderer, Window]` for static style sources and
/// `[Renderer, Window, Theme]` for theme-dependent ones.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum StyleKey {
    /// The active renderer.
    Renderer(RendererId),
    /// The target surface.
    Window(WindowId),
    /// The effective theme.
    Theme(ThemeId),
}

impl From<RendererId> for StyleKey {
    fn from(id: RendererId) -> Self {
        Self::Renderer(id)
    }
}

impl From<WindowId> for StyleKey {
    fn from(id: WindowId) -> Self {
        Self::Window(id)
    }
}

impl From<ThemeId> for StyleKey {
    fn from(id: ThemeId) -> Self {
        Self::Theme(id)
    }
}
