use anyhow::Result;
use ascent_core::ride::parse_time;
use ascent_core::{render_chart, svg, Container, Dataset, Rasterizer, RenderOptions, Ride};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn build_dataset(n: usize) -> Dataset {
    let rides = (0..n)
        .map(|i| Ride {
            year: 1990 + (i % 30) as i32,
            time: parse_time(&format!("{:02}:{:02}", 36 + (i % 4), (i * 7) % 60)).expect("valid time"),
            name: format!("Rider {i}"),
            nationality: "FRA".into(),
            doping: if i % 3 == 0 { "Alleged drug use".into() } else { String::new() },
            place: Some(i as u32 + 1),
            seconds: None,
            url: None,
        })
        .collect();
    Dataset::new(rides).expect("non-empty")
}

fn bench_render(c: &mut Criterion) {
    let container = Container::default();
    let mut opts = RenderOptions::default();
    opts.draw_labels = false;

    let mut group = c.benchmark_group("chart_document");
    for &n in &[35usize, 5_000usize] {
        let ds = build_dataset(n);
        group.bench_function(format!("build_{n}"), |b| {
            b.iter(|| black_box(render_chart(&container, &ds, &opts)));
        });
        group.bench_function(format!("html_{n}"), |b| {
            let doc = render_chart(&container, &ds, &opts);
            b.iter(|| black_box(svg::html_document(&doc)));
        });
    }
    group.finish();

    let mut group = c.benchmark_group("render_png_bytes");
    let ds = build_dataset(35);
    let doc = render_chart(&container, &ds, &opts);
    let raster = Rasterizer::new(false);
    group.bench_function("page_35", |b| {
        b.iter(|| -> Result<()> {
            let bytes = raster.render_to_png_bytes(&doc, None)?;
            black_box(bytes);
            Ok(())
        });
    });
    group.finish();
}

criterion_group!(benches, bench_render);
criterion_main!(benches);
