use criterion::{black_box, criterion_group, criterion_main, Criterion, BenchmarkId};
use banner_logo_rs::banner_pipeline::{locate_content, BackgroundMatch, locate_content_with};
use image::{Rgba, RgbaImage};

fn generate_banner(width: u32, height: u32) -> RgbaImage {
    let mut pixels = RgbaImage::from_pixel(width, height, Rgba([255, 255, 255, 255]));
    for y in height / 6..height * 5 / 6 {
        for x in width / 25..width / 4 {
            pixels.put_pixel(x, y, Rgba([(x % 256) as u8, (y % 256) as u8, 90, 255]));
        }
    }
    pixels
}

fn benchmark_locate_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("locate_content_by_size");

    let sizes = vec![
        (493, 58, "493x58"),
        (500, 63, "500x63"),
        (1000, 1000, "1000x1000"),
    ];

    for (width, height, label) in sizes {
        let banner = generate_banner(width, height);
        let background = *banner.get_pixel(0, 0);

        group.bench_with_input(BenchmarkId::from_parameter(label), &banner, |b, pixels| {
            b.iter(|| locate_content(black_box(pixels), &background));
        });
    }

    group.finish();
}

fn benchmark_match_policies(c: &mut Criterion) {
    let mut group = c.benchmark_group("background_match");
    let banner = generate_banner(500, 63);
    let background = *banner.get_pixel(0, 0);

    for (matcher, label) in [
        (BackgroundMatch::Exact, "exact"),
        (BackgroundMatch::Tolerance(8), "tolerance_8"),
    ] {
        group.bench_function(label, |b| {
            b.iter(|| {
                locate_content_with(black_box(&banner), &background, |p, bg| matcher.matches(p, bg))
            });
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_locate_sizes, benchmark_match_policies);
criterion_main!(benches);
