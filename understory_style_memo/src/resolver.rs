// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Memoized style resolution.
//!
//! [`make_styles`] registers a [`StyleSource`] and returns a [`UseStyles`]
//! handle that owns the source together with its private cache. Each
//! [`UseStyles::resolve`] call consults the cache under the key path
//! `[renderer, window]` (static sources) or `[renderer, window, theme]`
//! (themed sources) and only calls the renderer on a miss.

use alloc::rc::Rc;
use core::fmt;

use crate::cache::KeyedCache;
use crate::context::{RenderOptions, StyleCx, StyleRenderer};
use crate::key::StyleKey;
use crate::source::StyleSource;
use crate::style_set::{ClassNames, StyleSet};
use crate::theme::Theme;

/// Per-call options for [`UseStyles::resolve`].
#[derive(Clone, Debug, Default)]
pub struct UseStylesOptions {
    /// Overrides the ambient theme for this call.
    pub theme: Option<Theme>,
}

impl UseStylesOptions {
    /// Options that use the ambient theme.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Uses `theme` instead of the ambient theme.
    #[must_use]
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = Some(theme);
        self
    }
}

/// Registers a style source and returns its memoizing handle.
///
/// Nothing is rendered until the handle is first resolved.
///
/// # Example
///
/// ```rust
/// use std::cell::Cell;
/// use understory_style_memo::{
///     make_styles, ClassNames, RenderOptions, RendererId, StyleCx, StyleRenderer, StyleSet,
///     Theme, UseStylesOptions, WindowId,
/// };
///
/// struct CountingRenderer(Cell<u32>);
///
/// impl StyleRenderer<&'static str> for CountingRenderer {
///     fn id(&self) -> RendererId {
///         RendererId::new(0)
///     }
///
///     fn render_styles(
///         &self,
///         styles: &StyleSet<&'static str>,
///         _options: &RenderOptions,
///     ) -> ClassNames {
///         let n = self.0.get();
///         self.0.set(n + 1);
///         styles.iter().map(|(group, _)| (group, format!("{group}-{n}"))).collect()
///     }
/// }
///
/// let mut use_styles = make_styles(StyleSet::new().with("root", "color: red"));
///
/// let renderer = CountingRenderer(Cell::new(0));
/// let theme = Theme::default();
/// let cx = StyleCx::new(&theme, &WindowId::MAIN, &renderer);
///
/// let first = use_styles.resolve(&cx, UseStylesOptions::new());
/// let second = use_styles.resolve(&cx, UseStylesOptions::new());
///
/// assert_eq!(first.get("root"), Some("root-0"));
/// assert!(std::rc::Rc::ptr_eq(&first, &second));
/// assert_eq!(renderer.0.get(), 1);
/// ```
pub fn make_styles<S>(source: impl Into<StyleSource<S>>) -> UseStyles<S> {
    UseStyles::new(source)
}

/// Registers a theme-dependent style function.
///
/// Shorthand for `make_styles(StyleSource::themed(f))`.
pub fn make_styles_fn<S>(f: impl Fn(&Theme) -> StyleSet<S> + 'static) -> UseStyles<S> {
    UseStyles::new(StyleSource::themed(f))
}

/// A registered style source bundled with its exclusive cache.
///
/// The cache lives as long as the handle and is never shared with another
/// handle, even one registered from identical styles. It grows by one entry
/// per distinct key path observed and never evicts.
pub struct UseStyles<S> {
    source: StyleSource<S>,
    cache: KeyedCache<StyleKey, Rc<ClassNames>>,
}

impl<S> UseStyles<S> {
    /// Registers `source`. See [`make_styles`].
    #[must_use]
    pub fn new(source: impl Into<StyleSource<S>>) -> Self {
        Self {
            source: source.into(),
            cache: KeyedCache::new(),
        }
    }

    /// Returns the registered source.
    #[must_use]
    pub fn source(&self) -> &StyleSource<S> {
        &self.source
    }

    /// Returns `true` if the registered source depends on the theme.
    #[must_use]
    pub fn is_themed(&self) -> bool {
        self.source.is_themed()
    }

    /// Returns the number of memoized results.
    #[must_use]
    pub fn cached_len(&self) -> usize {
        self.cache.len()
    }

    /// Returns the class names for the current environment.
    ///
    /// The effective theme is `options.theme` if set, otherwise the ambient
    /// theme from `cx`. Repeated calls with the same renderer, window, and
    /// (for themed sources) theme identity return the same `Rc` without
    /// calling the renderer again.
    ///
    /// A panic in a themed style function propagates and leaves nothing
    /// cached.
    pub fn resolve<R>(
        &mut self,
        cx: &StyleCx<'_, R>,
        options: UseStylesOptions,
    ) -> Rc<ClassNames>
    where
        R: StyleRenderer<S> + ?Sized,
    {
        let theme = options.theme.unwrap_or_else(|| cx.theme());
        let window = cx.window();
        let renderer = cx.renderer();

        let full_path = [
            StyleKey::Renderer(renderer.id()),
            StyleKey::Window(window),
            StyleKey::Theme(theme.id()),
        ];
        // Static sources are theme-invariant: leave the theme out of the key.
        let path = if self.source.is_themed() {
            &full_path[..]
        } else {
            &full_path[..2]
        };

        if let Some(hit) = self.cache.get(path) {
            log::trace!("style cache hit for {path:?}");
            return Rc::clone(hit);
        }

        let render_options = RenderOptions {
            target_window: window,
            rtl: theme.rtl(),
        };
        let rendered = Rc::new(
            self.source
                .with_styles(&theme, |styles| renderer.render_styles(styles, &render_options)),
        );
        log::debug!("rendered {} style groups for {path:?}", rendered.len());

        match self.cache.insert(path, Rc::clone(&rendered)) {
            Ok(stored) => Rc::clone(stored),
            Err(err) => {
                log::warn!("serving uncached styles: {err}");
                rendered
            }
        }
    }
}

impl<S> fmt::Debug for UseStyles<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UseStyles")
            .field("themed", &self.is_themed())
            .field("cached", &self.cache.len())
            .finish_non_exhaustive()
    }
}
