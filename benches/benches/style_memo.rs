// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Benchmarks for `understory_style_memo`.

use criterion::{BatchSize, BenchmarkId, Criterion, black_box, criterion_group, criterion_main};

use understory_style_memo::{
    ClassNames, KeyedCache, RenderOptions, RendererId, ResourceKey, StyleCx, StyleRenderer,
    StyleSet, StyleSource, Theme, ThemeBuilder, UseStylesOptions, WindowId, make_styles,
};

const IS_DARK: ResourceKey = ResourceKey::new(0);

/// Formats one class name per group; no injection.
struct FormatRenderer;

impl StyleRenderer<&'static str> for FormatRenderer {
    fn id(&self) -> RendererId {
        RendererId::new(0)
    }

    fn render_styles(
        &self,
        styles: &StyleSet<&'static str>,
        options: &RenderOptions,
    ) -> ClassNames {
        styles
            .iter()
            .map(|(group, style)| {
                (group, format!("{group}-{}-{}", style.len(), u8::from(options.rtl)))
            })
            .collect()
    }
}

fn themed_source() -> StyleSource<&'static str> {
    StyleSource::themed(|theme: &Theme| {
        let dark = theme.get::<bool>(IS_DARK).copied().unwrap_or(false);
        StyleSet::new()
            .with("root", if dark { "color: white" } else { "color: black" })
            .with("label", "font-weight: 600")
            .with("icon", "width: 16px")
    })
}

fn bench_style_memo(c: &mut Criterion) {
    let theme = ThemeBuilder::new().set(IS_DARK, true).build();
    let renderer = FormatRenderer;
    let cx = StyleCx::new(&theme, &WindowId::MAIN, &renderer);

    let mut group = c.benchmark_group("style_memo/resolve");

    group.bench_function("static_hit", |b| {
        let mut use_styles = make_styles(StyleSet::new().with("root", "color: red"));
        let _ = use_styles.resolve(&cx, UseStylesOptions::new());
        b.iter(|| black_box(use_styles.resolve(&cx, UseStylesOptions::new())))
    });

    group.bench_function("themed_hit", |b| {
        let mut use_styles = make_styles(themed_source());
        let _ = use_styles.resolve(&cx, UseStylesOptions::new());
        b.iter(|| black_box(use_styles.resolve(&cx, UseStylesOptions::new())))
    });

    group.bench_function("themed_miss", |b| {
        b.iter_batched(
            || make_styles(themed_source()),
            |mut use_styles| black_box(use_styles.resolve(&cx, UseStylesOptions::new())),
            BatchSize::SmallInput,
        )
    });

    group.finish();

    let mut group = c.benchmark_group("style_memo/keyed_cache");

    for depth in [1_usize, 3, 8] {
        let path: Vec<u64> = (0..depth as u64).collect();
        let mut cache = KeyedCache::new();
        cache.insert(&path, depth).unwrap();

        group.bench_function(BenchmarkId::new("get_hit", depth), |b| {
            b.iter(|| black_box(cache.get(black_box(&path))))
        });

        let mut missing = path.clone();
        missing[depth - 1] = u64::MAX;
        group.bench_function(BenchmarkId::new("get_miss", depth), |b| {
            b.iter(|| black_box(cache.get(black_box(&missing))))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_style_memo);
criterion_main!(benches);
