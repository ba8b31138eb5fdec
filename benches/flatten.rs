use criterion::{black_box, criterion_group, criterion_main, Criterion};

use pathwork::{FillMode, Path, Pen, Point, Rect, DEFAULT_FLATNESS};

fn curve_heavy_path() -> Path {
    let mut path = Path::new(FillMode::Alternate);
    for i in 0..50 {
        let x = (i * 20) as f64;
        path.add_ellipse(Rect::new(x, 0.0, 18.0, 12.0)).unwrap();
        path.add_bezier(x, 20.0, x + 5.0, 40.0, x + 15.0, 40.0, x + 20.0, 20.0)
            .unwrap();
    }
    let wave: Vec<Point> = (0..100)
        .map(|i| Point::new(i as f64 * 10.0, if i % 2 == 0 { 0.0 } else { 30.0 }))
        .collect();
    path.add_curve(&wave).unwrap();
    path
}

fn bench_flatten(c: &mut Criterion) {
    let path = curve_heavy_path();

    c.bench_function("flatten", |b| {
        b.iter(|| {
            let mut p = path.clone();
            p.flatten(None, black_box(DEFAULT_FLATNESS)).unwrap();
            p.point_count()
        })
    });

    c.bench_function("widen", |b| {
        let pen = Pen::new(3.0);
        b.iter(|| {
            let mut p = path.clone();
            p.widen(&pen, None, black_box(DEFAULT_FLATNESS)).unwrap();
            p.point_count()
        })
    });
}

criterion_group!(benches, bench_flatten);
criterion_main!(benches);
