//! Integration tests for the geometry engine: end-to-end scenarios across
//! the shape model, transforms, bounding boxes and selection.

use vexel_editor::{
    deepest_shape_at_point, flip_shape, is_point_hitting_shape, is_shape_in_polygon, resize_shape,
    rotate_shape, shape_bounding_box, shapes_bounding_box, Anchor, ArcShape, Axis, BrushShape,
    EllipseShape, GroupShape, Handle, PathShape, Point, RectShape, ResizeHandle, Shape,
};

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-6
}

fn close_pt(a: Point, b: Point) -> bool {
    close(a.x, b.x) && close(a.y, b.y)
}

#[test]
fn rect_center_hits_far_point_misses() {
    let rect = Shape::Rect(RectShape::new(0.0, 0.0, 100.0, 100.0));
    assert!(is_point_hitting_shape(Point::new(50.0, 50.0), &rect, 1.0));
    assert!(!is_point_hitting_shape(Point::new(500.0, 500.0), &rect, 1.0));
}

#[test]
fn lasso_selects_contained_rect_but_not_partial_group() {
    let lasso = vec![
        Point::new(0.0, 0.0),
        Point::new(60.0, 0.0),
        Point::new(60.0, 60.0),
        Point::new(0.0, 60.0),
    ];
    let contained = Shape::Rect(RectShape::new(10.0, 10.0, 20.0, 20.0));
    assert!(is_shape_in_polygon(&contained, &lasso));

    let group = Shape::Group(GroupShape::new(vec![
        Shape::Rect(RectShape::new(10.0, 10.0, 20.0, 20.0)),
        Shape::Rect(RectShape::new(100.0, 100.0, 15.0, 15.0)),
    ]));
    assert!(!is_shape_in_polygon(&group, &lasso));
}

#[test]
fn aggregate_bounding_box_contract() {
    assert!(shapes_bounding_box(&[], true).is_none());

    let shape = Shape::Ellipse(EllipseShape::new(10.0, 10.0, 40.0, 20.0));
    let single = shapes_bounding_box(std::slice::from_ref(&shape), true).unwrap();
    assert_eq!(single, shape_bounding_box(&shape, true));
}

#[test]
fn rotated_ellipse_matches_closed_form() {
    let e = EllipseShape::new(-50.0, -30.0, 100.0, 60.0)
        .with_rotation(std::f64::consts::FRAC_PI_4);
    let b = shape_bounding_box(&Shape::Ellipse(e), false);
    let theta = std::f64::consts::FRAC_PI_4;
    let expected_w = 2.0 * ((50.0 * theta.cos()).powi(2) + (30.0 * theta.sin()).powi(2)).sqrt();
    let expected_h = 2.0 * ((50.0 * theta.sin()).powi(2) + (30.0 * theta.cos()).powi(2)).sqrt();
    assert!(close(b.width, expected_w));
    assert!(close(b.height, expected_h));
}

#[test]
fn rotate_by_zero_is_identity_for_every_variant() {
    let shapes = vec![
        Shape::Brush(BrushShape::new(vec![Point::new(1.0, 2.0), Point::new(3.0, 4.0)], 2.0)),
        Shape::Rect(RectShape::new(0.0, 0.0, 10.0, 10.0)),
        Shape::Arc(ArcShape::new(
            Point::new(0.0, 0.0),
            Point::new(5.0, 5.0),
            Point::new(10.0, 0.0),
            1.0,
        )),
        Shape::Group(GroupShape::new(vec![Shape::Rect(RectShape::new(5.0, 5.0, 2.0, 2.0))])),
    ];
    for shape in shapes {
        let rotated = rotate_shape(&shape, Point::new(33.0, -7.0), 0.0);
        assert_eq!(shape, rotated);
    }
}

/// The opposite anchor must keep its world position through a resize,
/// for every compass handle, including on a rotated shape.
#[test]
fn resize_anchor_is_invariant_for_all_handles() {
    use vexel_core::rotate_point;

    for &rotation in &[0.0, 0.4, -1.1] {
        for handle in ResizeHandle::ALL {
            let rect = RectShape::new(10.0, 20.0, 40.0, 30.0).with_rotation(rotation);
            let shape = Shape::Rect(rect);
            let center = Point::new(30.0, 35.0);

            // Local handle and anchor positions on the box.
            let local = |h: ResizeHandle| -> (Point, Point) {
                let (x0, y0, x1, y1) = (10.0, 20.0, 50.0, 50.0);
                let (cx, cy) = (30.0, 35.0);
                let handle_pos = match h {
                    ResizeHandle::TopLeft => Point::new(x0, y0),
                    ResizeHandle::Top => Point::new(cx, y0),
                    ResizeHandle::TopRight => Point::new(x1, y0),
                    ResizeHandle::Right => Point::new(x1, cy),
                    ResizeHandle::BottomRight => Point::new(x1, y1),
                    ResizeHandle::Bottom => Point::new(cx, y1),
                    ResizeHandle::BottomLeft => Point::new(x0, y1),
                    ResizeHandle::Left => Point::new(x0, cy),
                };
                let anchor = Point::new(
                    cx + (cx - handle_pos.x),
                    cy + (cy - handle_pos.y),
                );
                (handle_pos, anchor)
            };

            let (handle_pos, anchor_local) = local(handle);
            let init = rotate_point(handle_pos, center, rotation);
            let drag = Point::new(6.0, -4.0);
            let cur = Point::new(init.x + drag.x, init.y + drag.y);
            let anchor_world = rotate_point(anchor_local, center, rotation);

            let resized =
                resize_shape(&shape, Handle::Resize(handle), cur, init, false, None).unwrap();
            let Shape::Rect(r) = &resized else { panic!() };

            // The anchor's new local position is the matching box point.
            let b = &r.bounds;
            let (cx2, cy2) = (b.x + b.width / 2.0, b.y + b.height / 2.0);
            let anchor_new = match handle {
                ResizeHandle::TopLeft => Point::new(b.x + b.width, b.y + b.height),
                ResizeHandle::Top => Point::new(cx2, b.y + b.height),
                ResizeHandle::TopRight => Point::new(b.x, b.y + b.height),
                ResizeHandle::Right => Point::new(b.x, cy2),
                ResizeHandle::BottomRight => Point::new(b.x, b.y),
                ResizeHandle::Bottom => Point::new(cx2, b.y),
                ResizeHandle::BottomLeft => Point::new(b.x + b.width, b.y),
                ResizeHandle::Left => Point::new(b.x + b.width, cy2),
            };
            let anchor_world_after =
                rotate_point(anchor_new, Point::new(cx2, cy2), b.rotation);

            assert!(
                close_pt(anchor_world, anchor_world_after),
                "anchor drifted for {:?} at rotation {}: {:?} vs {:?}",
                handle,
                rotation,
                anchor_world,
                anchor_world_after
            );
        }
    }
}

#[test]
fn resize_through_anchor_mirrors_instead_of_collapsing() {
    let shape = Shape::Rect(RectShape::new(0.0, 0.0, 10.0, 10.0));
    let resized = resize_shape(
        &shape,
        Handle::Resize(ResizeHandle::Right),
        Point::new(-15.0, 5.0),
        Point::new(10.0, 5.0),
        false,
        None,
    )
    .unwrap();
    let Shape::Rect(r) = resized else { panic!() };
    assert!(r.bounds.width > 0.0);
    assert!(r.bounds.scale_x < 0.0);
}

#[test]
fn flip_twice_reconstructs_path_geometry() {
    let anchors = vec![
        Anchor::new(
            Point::new(0.0, 0.0),
            Point::new(-5.0, -5.0),
            Point::new(5.0, 5.0),
        ),
        Anchor::new(
            Point::new(30.0, 10.0),
            Point::new(25.0, 12.0),
            Point::new(35.0, 8.0),
        ),
        Anchor::corner(Point::new(40.0, -10.0)),
    ];
    let center = Point::new(7.0, -3.0);
    for axis in [Axis::X, Axis::Y] {
        for closed in [false, true] {
            let path = Shape::Path(PathShape::new(anchors.clone(), closed, 2.0));
            let twice = flip_shape(&flip_shape(&path, center, axis), center, axis);
            let Shape::Path(p) = &twice else { panic!() };
            let Shape::Path(orig) = &path else { panic!() };
            assert_eq!(p.anchors.len(), orig.anchors.len());
            for (a, b) in p.anchors.iter().zip(orig.anchors.iter()) {
                assert!(close_pt(a.point, b.point));
                assert!(close_pt(a.handle_in, b.handle_in));
                assert!(close_pt(a.handle_out, b.handle_out));
            }
        }
    }
}

#[test]
fn flip_twice_reconstructs_box_outline() {
    // Box variants come back as paths; compare sampled extents.
    let rect = Shape::Rect(RectShape::new(5.0, 5.0, 30.0, 20.0));
    let center = Point::new(0.0, 0.0);
    for axis in [Axis::X, Axis::Y] {
        let twice = flip_shape(&flip_shape(&rect, center, axis), center, axis);
        let before = shape_bounding_box(&rect, false);
        let after = shape_bounding_box(&twice, false);
        assert!(close(before.x, after.x));
        assert!(close(before.y, after.y));
        assert!(close(before.width, after.width));
        assert!(close(before.height, after.height));
    }
}

#[test]
fn deepest_hit_lands_on_most_specific_shape() {
    let leaf = Shape::Rect(RectShape::new(10.0, 10.0, 20.0, 20.0).with_id("leaf"));
    let sibling = Shape::Rect(RectShape::new(200.0, 200.0, 5.0, 5.0).with_id("sibling"));
    let inner_group = Shape::Group(GroupShape::new(vec![leaf]).with_id("inner"));
    let outer = Shape::Group(GroupShape::new(vec![inner_group, sibling]).with_id("outer"));
    let doc = vec![outer];

    let hit = deepest_shape_at_point(Point::new(20.0, 20.0), &doc, 1.0).unwrap();
    assert_eq!(hit.id(), "leaf");
    assert!(deepest_shape_at_point(Point::new(400.0, 400.0), &doc, 1.0).is_none());
}

#[test]
fn marquee_agrees_with_aabb_for_unrotated_boxes() {
    use vexel_editor::{shape_intersects_rect, BBox};

    let marquee = BBox::new(50.0, 50.0, 40.0, 40.0);
    // Offsets chosen so no box edge lands exactly on the marquee edge.
    for dx in [-70.0, -30.0, 0.0, 30.0, 70.0] {
        for dy in [-70.0, -30.0, 0.0, 30.0, 70.0] {
            let rect = RectShape::new(55.0 + dx, 55.0 + dy, 30.0, 30.0);
            let aabb = BBox::new(55.0 + dx, 55.0 + dy, 30.0, 30.0);
            assert_eq!(
                shape_intersects_rect(&Shape::Rect(rect), &marquee),
                aabb.intersects(&marquee),
                "disagreement at offset ({dx}, {dy})"
            );
        }
    }
}

#[test]
fn warped_rect_geometry_follows_the_dragged_corner() {
    use vexel_editor::{warp_corner, QuadCorner};

    let rect = Shape::Rect(RectShape::new(0.0, 0.0, 100.0, 100.0));
    let warped = warp_corner(&rect, QuadCorner::TopRight, Point::new(40.0, -20.0)).unwrap();

    let b = shape_bounding_box(&warped, false);
    assert!(close(b.max_x(), 140.0));
    assert!(close(b.y, -20.0));

    // A point near the pulled corner is now inside; the same point misses
    // the unwarped rectangle.
    let probe = Point::new(110.0, 5.0);
    assert!(is_point_hitting_shape(probe, &warped, 1.0));
    assert!(!is_point_hitting_shape(probe, &rect, 1.0));
}

#[test]
fn mask_group_defers_to_its_clip_child() {
    use vexel_editor::{is_shape_in_polygon, shape_intersects_rect, BBox};

    // Content is a huge rect, the clip child (last) a small one.
    let content = Shape::Rect(RectShape::new(-500.0, -500.0, 1000.0, 1000.0).with_id("content"));
    let clip = Shape::Rect(RectShape::new(10.0, 10.0, 20.0, 20.0).with_id("clip"));
    let mask = Shape::Group(GroupShape::mask(vec![content, clip]));
    let doc = vec![mask];

    // Hits resolve against the clip child's geometry and return the group.
    let hit = deepest_shape_at_point(Point::new(20.0, 20.0), &doc, 1.0).unwrap();
    assert!(matches!(hit, Shape::Group(_)));
    assert!(deepest_shape_at_point(Point::new(200.0, 200.0), &doc, 1.0).is_none());

    // Marquee and lasso likewise ignore the clipped-away content.
    let far_marquee = BBox::new(300.0, 300.0, 50.0, 50.0);
    assert!(!shape_intersects_rect(&doc[0], &far_marquee));
    let lasso = vec![
        Point::new(0.0, 0.0),
        Point::new(50.0, 0.0),
        Point::new(50.0, 50.0),
        Point::new(0.0, 50.0),
    ];
    assert!(is_shape_in_polygon(&doc[0], &lasso));
}

#[test]
fn shapes_round_trip_through_serde() {
    let shapes = vec![
        Shape::Brush(BrushShape::new(vec![Point::new(0.0, 1.0), Point::new(2.0, 3.0)], 2.0)),
        Shape::Path(PathShape::new(
            vec![
                Anchor::corner(Point::new(0.0, 0.0)),
                Anchor::new(
                    Point::new(10.0, 0.0),
                    Point::new(8.0, -2.0),
                    Point::new(12.0, 2.0),
                ),
            ],
            false,
            1.5,
        )),
        Shape::Rect(RectShape::new(0.0, 0.0, 10.0, 10.0).with_corner_radius(2.0)),
        Shape::Group(GroupShape::new(vec![Shape::Rect(RectShape::new(1.0, 1.0, 2.0, 2.0))])),
    ];
    for shape in shapes {
        let json = serde_json::to_string(&shape).unwrap();
        let back: Shape = serde_json::from_str(&json).unwrap();
        assert_eq!(shape, back);
    }
}
