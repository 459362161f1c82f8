// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Collaborators consulted on every resolve.
//!
//! The memoization layer does not know where the current theme or window
//! comes from, nor how styles are turned into class names. Those are
//! supplied through the traits in this module and bundled per call in a
//! [`StyleCx`].

use core::fmt;

use crate::key::{RendererId, WindowId};
use crate::style_set::{ClassNames, StyleSet};
use crate::theme::Theme;

/// Supplies the ambient theme.
///
/// Implemented for [`Theme`] itself (a fixed theme) and for closures
/// returning a theme.
pub trait ThemeSource {
    /// Returns the theme currently in effect.
    fn current_theme(&self) -> Theme;
}

impl ThemeSource for Theme {
    fn current_theme(&self) -> Theme {
        self.clone()
    }
}

impl<F> ThemeSource for F
where
    F: Fn() -> Theme,
{
    fn current_theme(&self) -> Theme {
        self()
    }
}

/// Supplies the surface styles are rendered into.
///
/// Implemented for [`WindowId`] itself and for closures returning one.
pub trait WindowSource {
    /// Returns the window currently being rendered.
    fn current_window(&self) -> WindowId;
}

impl WindowSource for WindowId {
    fn current_window(&self) -> WindowId {
        *self
    }
}

impl<F> WindowSource for F
where
    F: Fn() -> WindowId,
{
    fn current_window(&self) -> WindowId {
        self()
    }
}

/// Options passed to [`StyleRenderer::render_styles`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct RenderOptions {
    /// The surface the rendered rules belong to.
    pub target_window: WindowId,
    /// Whether the effective theme is right-to-left.
    pub rtl: bool,
}

/// Turns style sets into rendered class names.
///
/// The memoization layer treats the renderer as a black box that is
/// idempotent per input: it is called at most once per distinct
/// (renderer, window[, theme]) combination for a given style source.
/// Implementations that inject rules into a surface are expected to use
/// interior mutability.
pub trait StyleRenderer<S> {
    /// Returns the identity of this renderer instance.
    ///
    /// Must be stable for the lifetime of the instance.
    fn id(&self) -> RendererId;

    /// Renders `styles` and returns one class name per style group.
    fn render_styles(&self, styles: &StyleSet<S>, options: &RenderOptions) -> ClassNames;
}

/// Everything a resolve needs from its environment.
///
/// A `StyleCx` is cheap to build and is typically created once per frame
/// (or per surface) and passed to every [`UseStyles::resolve`] call made
/// while rendering it.
///
/// [`UseStyles::resolve`]: crate::UseStyles::resolve
pub struct StyleCx<'a, R: ?Sized> {
    theme: &'a dyn ThemeSource,
    window: &'a dyn WindowSource,
    renderer: &'a R,
}

impl<'a, R: ?Sized> StyleCx<'a, R> {
    /// Creates a context from its three collaborators.
    pub fn new(
        theme: &'a dyn ThemeSource,
        window: &'a dyn WindowSource,
        renderer: &'a R,
    ) -> Self {
        Self {
            theme,
            window,
            renderer,
        }
    }

    /// Returns the ambient theme.
    #[must_use]
    pub fn theme(&self) -> Theme {
        self.theme.current_theme()
    }

    /// Returns the current window.
    #[must_use]
    pub fn window(&self) -> WindowId {
        self.window.current_window()
    }

    /// Returns the active renderer.
    #[must_use]
    pub fn renderer(&self) -> &'a R {
        self.renderer
    }
}

impl<R: ?Sized> fmt::Debug for StyleCx<'_, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Sources are not queried here; they may not be pure.
        f.debug_struct("StyleCx")
            .field("renderer", &core::any::type_name::<R>())
            .finish_non_exhaustive()
    }
}
