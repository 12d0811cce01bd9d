use criterion::{criterion_group, criterion_main, Criterion};

use mandelview_core::{Complex, Viewport};
use mandelview_engine::{palette, FrameDispatcher, PaletteKind, ViewParameters};

fn bench_full_frame(c: &mut Criterion) {
    let params = ViewParameters::default();
    let viewport = Viewport::new(640, 480).unwrap();
    let mut dispatcher = FrameDispatcher::new(viewport, &params).unwrap();

    c.bench_function("full_frame_640x480", |b| {
        b.iter(|| dispatcher.compute_frame(params.center, params.zoom).unwrap());
    });
}

fn bench_deep_zoom_frame(c: &mut Criterion) {
    // Seahorse valley at high magnification — iteration-heavy pixels.
    let params = ViewParameters {
        center: Complex::new(-0.7436, 0.1318),
        zoom: 1e5,
        iteration_bound: 1000,
        palette: PaletteKind::Rainbow,
        color_phase: 0.0,
    };
    let viewport = Viewport::new(256, 256).unwrap();
    let mut dispatcher = FrameDispatcher::new(viewport, &params).unwrap();

    c.bench_function("frame_256x256_1000iter", |b| {
        b.iter(|| dispatcher.compute_frame(params.center, params.zoom).unwrap());
    });
}

fn bench_palette_mapping(c: &mut Criterion) {
    // Coloring alone, over a representative spread of counts.
    let bound = 1000u32;
    let counts: Vec<u32> = (0..640 * 480).map(|i| (i * 7) as u32 % (bound + 1)).collect();

    c.bench_function("palette_mapping_640x480", |b| {
        b.iter(|| {
            let mut acc = 0u64;
            for &count in &counts {
                let rgb = palette::to_rgb8(palette::color_for(
                    count,
                    bound,
                    PaletteKind::Neon,
                    1.8,
                ));
                acc = acc.wrapping_add(u64::from(rgb[0]));
            }
            acc
        });
    });
}

criterion_group!(
    benches,
    bench_full_frame,
    bench_deep_zoom_frame,
    bench_palette_mapping
);
criterion_main!(benches);
