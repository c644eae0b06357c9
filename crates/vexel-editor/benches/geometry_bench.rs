use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use vexel_editor::{
    deepest_shape_at_point, sample_path, shape_intersects_rect, shapes_bounding_box, Anchor,
    BBox, EllipseShape, GroupShape, PathShape, Point, RectShape, Shape,
};

fn wavy_path(anchors: usize) -> PathShape {
    let pts = (0..anchors)
        .map(|i| {
            let x = i as f64 * 25.0;
            let y = if i % 2 == 0 { 0.0 } else { 40.0 };
            Anchor::new(
                Point::new(x, y),
                Point::new(x - 8.0, y + 5.0),
                Point::new(x + 8.0, y - 5.0),
            )
        })
        .collect();
    PathShape::new(pts, false, 2.0)
}

fn shape_grid(count: usize) -> Vec<Shape> {
    (0..count)
        .map(|i| {
            let x = (i % 10) as f64 * 60.0;
            let y = (i / 10) as f64 * 60.0;
            if i % 3 == 0 {
                Shape::Ellipse(EllipseShape::new(x, y, 40.0, 25.0).with_rotation(0.6))
            } else if i % 3 == 1 {
                Shape::Rect(RectShape::new(x, y, 40.0, 40.0).with_rotation(0.3))
            } else {
                Shape::Path(wavy_path(6))
            }
        })
        .collect()
}

fn bench_path_sampling(c: &mut Criterion) {
    let mut group = c.benchmark_group("sampler/sample_path");
    for anchors in [4usize, 16, 64] {
        let path = wavy_path(anchors);
        group.bench_with_input(BenchmarkId::from_parameter(anchors), &path, |b, path| {
            b.iter(|| black_box(sample_path(black_box(&path.anchors), 20, false)));
        });
    }
    group.finish();
}

fn bench_bounding_boxes(c: &mut Criterion) {
    let mut group = c.benchmark_group("bbox/shapes_bounding_box");
    for count in [10usize, 100, 500] {
        let shapes = shape_grid(count);
        group.bench_with_input(BenchmarkId::from_parameter(count), &shapes, |b, shapes| {
            b.iter(|| black_box(shapes_bounding_box(black_box(shapes), true)));
        });
    }
    group.finish();
}

fn bench_hit_testing(c: &mut Criterion) {
    let mut group = c.benchmark_group("hit_test/deepest_shape_at_point");
    for count in [10usize, 100, 500] {
        // Wrap every tenth run of shapes in a group so the search recurses.
        let doc: Vec<Shape> = shape_grid(count)
            .chunks(10)
            .map(|chunk| Shape::Group(GroupShape::new(chunk.to_vec())))
            .collect();
        group.bench_with_input(BenchmarkId::from_parameter(count), &doc, |b, doc| {
            b.iter(|| black_box(deepest_shape_at_point(Point::new(125.0, 125.0), doc, 1.0)));
        });
    }
    group.finish();
}

fn bench_marquee(c: &mut Criterion) {
    let shapes = shape_grid(200);
    let marquee = BBox::new(50.0, 50.0, 300.0, 300.0);
    c.bench_function("selection/marquee_200_shapes", |b| {
        b.iter(|| {
            let hits = shapes
                .iter()
                .filter(|s| shape_intersects_rect(s, &marquee))
                .count();
            black_box(hits)
        });
    });
}

criterion_group!(
    benches,
    bench_path_sampling,
    bench_bounding_boxes,
    bench_hit_testing,
    bench_marquee
);
criterion_main!(benches);
