// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Understory Style Memo: identity-keyed memoization of rendered style sets.
//!
//! A component that renders styles on every frame should not re-run its
//! style function nor re-inject rules when nothing it depends on changed.
//! This crate decides *when* to call a style renderer and when to reuse its
//! previous output; it does not render anything itself.
//!
//! ## Core Concepts
//!
//! - [`StyleSource`]: what a component registers, either a static
//!   [`StyleSet`] or a function of the [`Theme`].
//! - [`make_styles`] / [`UseStyles`]: registration returns a handle owning
//!   the source and its private [`KeyedCache`].
//! - [`StyleCx`]: the collaborators consulted on each resolve, namely a
//!   [`ThemeSource`], a [`WindowSource`], and a [`StyleRenderer`].
//! - [`ClassNames`]: the rendered result, shared as `Rc<ClassNames>` so
//!   repeated hits are pointer-equal.
//!
//! ## Cache Keys
//!
//! Results are keyed by identity, never by content:
//!
//! | Source   | Key path                      |
//! |----------|-------------------------------|
//! | static   | `[renderer, window]`          |
//! | themed   | `[renderer, window, theme]`   |
//!
//! A rebuilt theme with identical resources is a new [`ThemeId`] and misses.
//! A static source ignores the theme entirely when keying, including its
//! `rtl` flag: the first rendering for a renderer and window is reused.
//!
//! ## Example
//!
//! ```rust
//! use std::cell::Cell;
//! use std::rc::Rc;
//! use understory_style_memo::{
//!     make_styles, ClassNames, RenderOptions, RendererId, ResourceKey, StyleCx, StyleRenderer,
//!     StyleSet, StyleSource, ThemeBuilder, UseStylesOptions, WindowId,
//! };
//!
//! const IS_DARK: ResourceKey = ResourceKey::new(0);
//!
//! struct Renderer {
//!     next: Cell<u32>,
//! }
//!
//! impl StyleRenderer<String> for Renderer {
//!     fn id(&self) -> RendererId {
//!         RendererId::new(0)
//!     }
//!
//!     fn render_styles(&self, styles: &StyleSet<String>, _: &RenderOptions) -> ClassNames {
//!         styles
//!             .iter()
//!             .map(|(group, _)| {
//!                 let n = self.next.get();
//!                 self.next.set(n + 1);
//!                 (group, format!("{group}-{n}"))
//!             })
//!             .collect()
//!     }
//! }
//!
//! let mut use_styles = make_styles(StyleSource::themed(|theme| {
//!     let dark = theme.get::<bool>(IS_DARK).copied().unwrap_or(false);
//!     StyleSet::new().with("root", format!("color: {}", if dark { "white" } else { "black" }))
//! }));
//!
//! let renderer = Renderer { next: Cell::new(0) };
//! let light = ThemeBuilder::new().set(IS_DARK, false).build();
//! let dark = ThemeBuilder::new().set(IS_DARK, true).build();
//! let cx = StyleCx::new(&light, &WindowId::MAIN, &renderer);
//!
//! let a = use_styles.resolve(&cx, UseStylesOptions::new());
//! let b = use_styles.resolve(&cx, UseStylesOptions::new());
//! let c = use_styles.resolve(&cx, UseStylesOptions::new().with_theme(dark));
//!
//! assert!(Rc::ptr_eq(&a, &b));
//! assert_eq!(a.get("root"), Some("root-0"));
//! assert_eq!(c.get("root"), Some("root-1"));
//! ```
//!
//! ## Threading
//!
//! [`UseStyles::resolve`] takes `&mut self`, so the lookup and the population
//! of a miss are never interleaved for one handle. Results and themes are
//! `Rc`-based and stay on one thread.
//!
//! ## Logging
//!
//! Cache hits are logged at `trace` level and renderer calls at `debug` level
//! through the [`log`] facade. No logger is installed by this crate.
//!
//! ## `no_std` Support
//!
//! This crate is `no_std` and uses `alloc`. It does not depend on `std`.
//! Theme identities need 32-bit atomics on the target.

#![no_std]

extern crate alloc;

mod cache;
mod context;
mod key;
mod resolver;
mod source;
mod style_set;
mod theme;

pub use cache::{KeyedCache, PathError};
pub use context::{RenderOptions, StyleCx, StyleRenderer, ThemeSource, WindowSource};
pub use key::{RendererId, StyleKey, ThemeId, WindowId};
pub use resolver::{UseStyles, UseStylesOptions, make_styles, make_styles_fn};
pub use source::StyleSource;
pub use style_set::{ClassNames, StyleSet};
pub use theme::{ResourceKey, Theme, ThemeBuilder};
