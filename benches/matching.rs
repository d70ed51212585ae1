//! Performance measurement for nearest-tile lookup at varying palette sizes

// Criterion macros generate undocumented functions
#![allow(missing_docs)]

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use image::{Rgba, RgbaImage};
use quadmosaic::color::ColorSignature;
use quadmosaic::palette::Palette;
use std::hint::black_box;

fn varied_palette(tile_count: u32) -> Option<Palette> {
    let images = (0..tile_count)
        .map(|i| {
            // Spread signatures across the RGB cube
            let red = ((i * 37) % 256) as u8;
            let green = ((i * 101) % 256) as u8;
            let blue = ((i * 197) % 256) as u8;
            RgbaImage::from_pixel(8, 8, Rgba([red, green, blue, 255]))
        })
        .collect();
    Palette::from_images(images).ok()
}

/// Measures linear-scan lookup cost for palettes of 10 to 500 tiles
fn bench_nearest(c: &mut Criterion) {
    let mut group = c.benchmark_group("nearest");

    let queries: Vec<ColorSignature> = (0..64_u32)
        .map(|i| {
            ColorSignature::new(
                ((i * 53) % 256) as u8,
                ((i * 149) % 256) as u8,
                ((i * 223) % 256) as u8,
            )
        })
        .collect();

    for tile_count in &[10_u32, 50, 500] {
        let Some(palette) = varied_palette(*tile_count) else {
            group.finish();
            return;
        };

        group.bench_with_input(
            BenchmarkId::from_parameter(tile_count),
            tile_count,
            |b, _| {
                b.iter(|| {
                    for query in &queries {
                        let tile = palette.nearest(black_box(*query));
                        black_box(tile.ok());
                    }
                });
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_nearest);
criterion_main!(benches);
