use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};

use fractal_viewer::core::actions::generate_fractal::generate_fractal_parallel_rayon::generate_fractal_parallel_rayon;
use fractal_viewer::core::actions::generate_fractal::generate_fractal_serial::generate_fractal_serial;
use fractal_viewer::core::fractals::escape_time::EscapeTimeAlgorithm;
use fractal_viewer::{Formula, PalettePreset, PixelRect, Viewport, render_frame};

fn bench_escape_iterations(c: &mut Criterion) {
    let mut group = c.benchmark_group("escape_iterations/320x180");
    let pixel_rect = PixelRect::from_size(320, 180).unwrap();
    let mut viewport = Viewport::new(Formula::Mandelbrot, true);
    viewport.apply_iteration_policy(pixel_rect.width());
    let algorithm = EscapeTimeAlgorithm::for_viewport(&viewport, pixel_rect);

    group.bench_function("serial", |b| {
        b.iter(|| black_box(generate_fractal_serial(pixel_rect, &algorithm).unwrap()))
    });

    group.bench_function("rayon", |b| {
        b.iter(|| black_box(generate_fractal_parallel_rayon(pixel_rect, &algorithm).unwrap()))
    });

    group.finish();
}

fn bench_render_frame(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_frame/640x360");
    let pixel_rect = PixelRect::from_size(640, 360).unwrap();
    let palette = PalettePreset::default().palette();

    for &formula in Formula::ALL {
        group.bench_with_input(
            BenchmarkId::from_parameter(formula.slug()),
            &formula,
            |b, &formula| {
                let mut viewport = Viewport::new(formula, true);
                b.iter(|| black_box(render_frame(&mut viewport, &palette, pixel_rect).unwrap()))
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_escape_iterations, bench_render_frame);
criterion_main!(benches);
