use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use image::DynamicImage;
use pixel_lens::image_loader::{display_dimensions, scale_for_display, HistogramBuilder, PixelView};
use pixel_lens::viewport::DisplayTransform;

fn full_hd_rgb() -> DynamicImage {
    DynamicImage::ImageRgb8(image::RgbImage::from_fn(1920, 1080, |x, y| {
        image::Rgb([(x % 256) as u8, (y % 256) as u8, ((x + y) % 256) as u8])
    }))
}

fn bench_histogram(c: &mut Criterion) {
    let rgb = full_hd_rgb();
    let luma = DynamicImage::ImageLuma8(rgb.to_luma8());
    let pixel_count = (rgb.width() * rgb.height()) as u64;

    let mut group = c.benchmark_group("histogram_1920x1080");
    group.throughput(Throughput::Elements(pixel_count));

    for buckets in [50, 256] {
        let builder = HistogramBuilder::new(buckets);

        let view = PixelView::from_image(&rgb).unwrap();
        group.bench_with_input(BenchmarkId::new("rgb", buckets), &view, |b, view| {
            b.iter(|| black_box(builder.build(black_box(view)).unwrap()))
        });

        let view = PixelView::from_image(&luma).unwrap();
        group.bench_with_input(BenchmarkId::new("gray", buckets), &view, |b, view| {
            b.iter(|| black_box(builder.build(black_box(view)).unwrap()))
        });
    }

    group.finish();
}

fn bench_display_scaling(c: &mut Criterion) {
    let test_image = full_hd_rgb();

    c.bench_function("display_scale_1920x1080_into_600x400", |b| {
        b.iter(|| black_box(scale_for_display(&test_image, (600, 400))))
    });
}

fn bench_pointer_mapping(c: &mut Criterion) {
    let display = display_dimensions((1920, 1080), (600, 400));
    let transform = DisplayTransform::new((1920, 1080), display).unwrap();

    c.bench_function("map_point_full_display_sweep", |b| {
        b.iter(|| {
            let mut hits = 0u32;
            for y in 0..display.1 {
                for x in 0..display.0 {
                    if transform.map_point(x as f32 + 0.5, y as f32 + 0.5).is_some() {
                        hits += 1;
                    }
                }
            }
            black_box(hits)
        })
    });
}

criterion_group!(benches, bench_histogram, bench_display_scaling, bench_pointer_mapping);
criterion_main!(benches);
