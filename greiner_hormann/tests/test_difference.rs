mod test_utils;

use greiner_hormann::{
    polygon,
    polygon::{difference, BooleanOp, BooleanOptions, Polygon},
};
use test_utils::{
    components_match, create_property_set, property_sets_match, total_area, PolygonProperties,
};

fn square(x: f64, y: f64, size: f64) -> Polygon {
    polygon![(x, y), (x + size, y), (x + size, y + size), (x, y + size)]
}

#[test]
fn overlapping_squares() {
    let subject = square(0.0, 0.0, 4.0);
    let clip = square(2.0, 2.0, 4.0);
    let result = subject.difference(&clip).unwrap();
    let expected_outline: Polygon = polygon![
        (0.0, 0.0),
        (4.0, 0.0),
        (4.0, 2.0),
        (2.0, 2.0),
        (2.0, 4.0),
        (0.0, 4.0)
    ];
    assert!(components_match(&result.polygons, &[expected_outline]));
    let expected = [PolygonProperties::new(6, 12.0, 16.0, 0.0, 0.0, 4.0, 4.0)];
    assert!(property_sets_match(
        &create_property_set(&result.polygons),
        &expected
    ));
}

#[test]
fn plus_bars_split_in_two() {
    let horizontal: Polygon = polygon![(0.0, 1.0), (3.0, 1.0), (3.0, 2.0), (0.0, 2.0)];
    let vertical: Polygon = polygon![(1.0, 0.0), (2.0, 0.0), (2.0, 3.0), (1.0, 3.0)];
    let result = difference(&horizontal, &vertical).unwrap();
    assert!(components_match(
        &result.polygons,
        &[square(0.0, 1.0, 1.0), square(2.0, 1.0, 1.0)]
    ));
}

#[test]
fn touching_band_splits_subject() {
    let subject = square(0.0, 0.0, 4.0);
    let band: Polygon = polygon![(0.0, 1.0), (4.0, 1.0), (4.0, 3.0), (0.0, 3.0)];
    let result = subject.difference(&band).unwrap();
    assert_eq!(result.polygons.len(), 2);
    let expected: [Polygon; 2] = [
        polygon![(0.0, 0.0), (4.0, 0.0), (4.0, 1.0), (0.0, 1.0)],
        polygon![(0.0, 3.0), (4.0, 3.0), (4.0, 4.0), (0.0, 4.0)],
    ];
    assert!(components_match(&result.polygons, &expected));
}

#[test]
fn contained_clip_is_cut_out() {
    let outer = square(0.0, 0.0, 10.0);
    let inner = square(3.0, 3.0, 3.0);
    let result = outer.difference(&inner).unwrap();
    assert!((total_area(&result.polygons) - 91.0).abs() < 1e-8);
    let expected = [
        PolygonProperties::new(8, 40.5, 32.0, 0.0, 0.0, 10.0, 4.5),
        PolygonProperties::new(8, 50.5, 34.0, 0.0, 4.5, 10.0, 10.0),
    ];
    assert!(property_sets_match(
        &create_property_set(&result.polygons),
        &expected
    ));
}

#[test]
fn contained_clip_without_split_depth() {
    let outer = square(0.0, 0.0, 10.0);
    let inner = square(3.0, 3.0, 3.0);
    let mut options = BooleanOptions::new();
    options.max_split_depth = 0;
    let result = outer
        .boolean_opt(&inner, BooleanOp::Difference, &options)
        .unwrap();
    assert_eq!(result.polygons, vec![outer]);
}

#[test]
fn subject_inside_clip_is_empty() {
    let outer = square(0.0, 0.0, 10.0);
    let inner = square(3.0, 3.0, 3.0);
    let result = inner.difference(&outer).unwrap();
    assert_eq!(result.polygons, vec![Polygon::new()]);
}

#[test]
fn disjoint_returns_subject() {
    let a = square(0.0, 0.0, 1.0);
    let b = square(5.0, 5.0, 1.0);
    assert_eq!(a.difference(&b).unwrap().polygons, vec![a.clone()]);

    let adjacent = square(1.0, 0.0, 1.0);
    assert_eq!(a.difference(&adjacent).unwrap().polygons, vec![a]);
}

#[test]
fn identical_is_empty() {
    let p = square(0.0, 0.0, 4.0);
    let result = p.difference(&p.clone()).unwrap();
    assert_eq!(result.polygons, vec![Polygon::new()]);
}

#[test]
fn empty_operands() {
    let p = square(0.0, 0.0, 1.0);
    let empty = Polygon::new();
    assert_eq!(p.difference(&empty).unwrap().polygons, vec![p.clone()]);
    assert_eq!(empty.difference(&p).unwrap().polygons, vec![Polygon::new()]);
}

#[test]
fn contained_clip_touching_at_vertices() {
    // every touch is bouncing, the subject is split through the reflex vertex (2, 1)
    let subject: Polygon = polygon![(0.0, 0.0), (4.0, 0.0), (2.0, 1.0), (4.0, 2.0), (0.0, 2.0)];
    let diamond: Polygon = polygon![(1.0, 0.0), (2.0, 1.0), (1.0, 2.0), (0.0, 1.0)];
    let result = subject.difference(&diamond).unwrap();
    assert!((total_area(&result.polygons) - 4.0).abs() < 1e-8);
    for p in result.iter_non_empty() {
        assert!(p.vertex_count() >= 3);
        assert!(p.remove_repeat_points(1e-8).is_none(), "{p:?}");
        assert!(p.area().abs() < subject.area().abs());
    }
}

#[test]
fn repeated_vertex_on_intersection() {
    let subject: Polygon = polygon![
        (0.0, 0.0),
        (4.0, 0.0),
        (4.0, 2.0),
        (4.0, 2.0),
        (4.0, 4.0),
        (0.0, 4.0)
    ];
    let clip: Polygon = polygon![(2.0, 2.0), (4.0, 2.0), (6.0, 2.0), (6.0, 6.0), (2.0, 6.0)];
    let result = subject.difference(&clip).unwrap();
    assert_eq!(result.polygons.len(), 1);
    assert!((total_area(&result.polygons) - 12.0).abs() < 1e-8);
    assert!(result.polygons[0].remove_repeat_points(1e-8).is_none());
}

#[test]
fn near_zero_length_edges_absorbed() {
    let subject: Polygon = polygon![
        (0.0, 0.0),
        (4.0, 0.0),
        (4.0, 1e-10),
        (4.0, 4.0),
        (0.0, 4.0),
        (0.0, 0.0)
    ];
    let clip = square(2.0, 2.0, 4.0);
    let result = subject.difference(&clip).unwrap();
    let expected = [PolygonProperties::new(6, 12.0, 16.0, 0.0, 0.0, 4.0, 4.0)];
    assert!(property_sets_match(
        &create_property_set(&result.polygons),
        &expected
    ));
}
