mod test_utils;

use greiner_hormann::{
    polygon,
    polygon::{union, BooleanOp, Polygon},
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
    let result = subject.union(&clip).unwrap();
    let expected_outline: Polygon = polygon![
        (0.0, 0.0),
        (4.0, 0.0),
        (4.0, 2.0),
        (6.0, 2.0),
        (6.0, 6.0),
        (2.0, 6.0),
        (2.0, 4.0),
        (0.0, 4.0)
    ];
    assert!(components_match(&result.polygons, &[expected_outline]));
    let expected = [PolygonProperties::new(8, 28.0, 24.0, 0.0, 0.0, 6.0, 6.0)];
    assert!(property_sets_match(
        &create_property_set(&result.polygons),
        &expected
    ));
}

#[test]
fn overlapping_squares_commute() {
    let a = square(0.0, 0.0, 4.0);
    let b = square(2.0, 2.0, 4.0);
    let ab = union(&a, &b).unwrap();
    let ba = union(&b, &a).unwrap();
    assert!(components_match(&ab.polygons, &ba.polygons));
}

#[test]
fn plus_bars_outline() {
    let horizontal: Polygon = polygon![(0.0, 1.0), (3.0, 1.0), (3.0, 2.0), (0.0, 2.0)];
    let vertical: Polygon = polygon![(1.0, 0.0), (2.0, 0.0), (2.0, 3.0), (1.0, 3.0)];
    let result = horizontal.union(&vertical).unwrap();
    let expected = [PolygonProperties::new(12, 5.0, 12.0, 0.0, 0.0, 3.0, 3.0)];
    assert!(property_sets_match(
        &create_property_set(&result.polygons),
        &expected
    ));
}

#[test]
fn contained_returns_outer() {
    let outer = square(0.0, 0.0, 10.0);
    let inner = square(3.0, 3.0, 3.0);
    assert_eq!(outer.union(&inner).unwrap().polygons, vec![outer.clone()]);
    assert_eq!(inner.union(&outer).unwrap().polygons, vec![outer]);
}

#[test]
fn disjoint_keeps_both() {
    let a = square(0.0, 0.0, 1.0);
    let b = square(5.0, 5.0, 1.0);
    let result = a.union(&b).unwrap();
    assert_eq!(result.polygons, vec![a, b]);
}

#[test]
fn touching_c_shapes_are_not_merged() {
    let subject: Polygon = polygon![
        (0.0, 0.0),
        (0.0, 1.0),
        (-2.0, 1.0),
        (-2.0, 2.0),
        (0.0, 2.0),
        (0.0, 3.0),
        (-3.0, 3.0),
        (-3.0, 0.0)
    ];
    let clip: Polygon = subject
        .iter()
        .map(|p| greiner_hormann::core::math::vec2(-p.x, p.y))
        .collect();
    let result = subject.union(&clip).unwrap();
    assert_eq!(result.polygons.len(), 2);
    assert!(components_match(&result.polygons, &[subject, clip]));
}

#[test]
fn identical_returns_subject() {
    let p: Polygon = polygon![(0.0, 0.0), (5.0, 0.0), (5.0, 5.0), (2.0, 2.0), (0.0, 5.0)];
    let result = p.boolean(&p.clone(), BooleanOp::Union).unwrap();
    assert_eq!(result.polygons, vec![p]);
}

#[test]
fn empty_operands() {
    let p = square(0.0, 0.0, 1.0);
    let empty = Polygon::new();
    assert_eq!(p.union(&empty).unwrap().polygons, vec![p.clone()]);
    assert_eq!(empty.union(&p).unwrap().polygons, vec![p.clone()]);
    assert!((total_area(&p.union(&empty).unwrap().polygons) - 1.0).abs() < 1e-8);
}
