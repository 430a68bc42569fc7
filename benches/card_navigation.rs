// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for gallery and lightbox navigation.
//!
//! Measures the performance of:
//! - Filtering the gallery (visibility recomputation)
//! - Keyboard cursor cycling over visible cards
//! - Lightbox stepping and full-size source derivation

use criterion::{criterion_group, criterion_main, Criterion};
use iced_folio::portfolio::{full_size_source, Photo};
use iced_folio::ui::filters::Filter;
use iced_folio::ui::gallery::State as Gallery;
use iced_folio::ui::lightbox::State as Lightbox;
use std::hint::black_box;

/// A synthetic portfolio large enough to make filtering measurable.
fn photos(count: usize) -> Vec<Photo> {
    let categories = ["portrait", "travel", "editorial"];
    (0..count)
        .map(|i| Photo {
            source: format!("https://images.example/{i}.jpg?q=80&w=800"),
            alt: format!("photo {i}"),
            title: None,
            category: categories[i % categories.len()].to_string(),
        })
        .collect()
}

fn bench_filtering(c: &mut Criterion) {
    let mut group = c.benchmark_group("card_navigation");
    let photos = photos(300);
    let filter = Filter::Category("travel".to_string());

    group.bench_function("apply_filter", |b| {
        b.iter(|| {
            let mut gallery = Gallery::new(&photos);
            gallery.apply_filter(&filter);
            black_box(gallery.visible_cards());
        });
    });

    group.finish();
}

fn bench_cursor_cycling(c: &mut Criterion) {
    let mut group = c.benchmark_group("card_navigation");
    let photos = photos(300);

    let mut filtered = Gallery::new(&photos);
    filtered.apply_filter(&Filter::Category("portrait".to_string()));

    group.bench_function("focus_next_full_cycle", |b| {
        b.iter(|| {
            let mut gallery = filtered.clone();
            for _ in 0..gallery.visible_cards().len() {
                gallery.focus_next();
            }
            black_box(gallery.focused_card());
        });
    });

    group.finish();
}

fn bench_lightbox_stepping(c: &mut Criterion) {
    let mut group = c.benchmark_group("card_navigation");
    let photos = photos(300);
    let gallery = Gallery::new(&photos);

    group.bench_function("open_and_step", |b| {
        b.iter(|| {
            let mut lightbox = Lightbox::new();
            lightbox.open(0, gallery.visible_cards(), None);
            for _ in 0..32 {
                lightbox.step(1);
            }
            black_box(lightbox.session().map(|s| s.current_card()));
        });
    });

    group.bench_function("full_size_source", |b| {
        b.iter(|| {
            for photo in &photos {
                black_box(full_size_source(&photo.source));
            }
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_filtering,
    bench_cursor_cycling,
    bench_lightbox_stepping
);
criterion_main!(benches);
