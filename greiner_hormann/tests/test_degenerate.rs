use greiner_hormann::{
    error::ClipError,
    polygon,
    polygon::{BooleanOp, BooleanOptions, Polygon, PolygonRole},
};

const OPS: [BooleanOp; 3] = [BooleanOp::Intersect, BooleanOp::Union, BooleanOp::Difference];

fn square() -> Polygon {
    polygon![(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)]
}

fn too_few_points() -> Vec<Polygon> {
    vec![polygon![(0.5, 0.5)], polygon![(0.0, 0.0), (2.0, 2.0)]]
}

#[test]
fn insufficient_subject_vertices() {
    for op in OPS {
        for subject in too_few_points() {
            let err = subject.boolean(&square(), op).unwrap_err();
            assert_eq!(
                err,
                ClipError::InsufficientVertices {
                    role: PolygonRole::Subject,
                    count: subject.vertex_count()
                },
                "op: {op:?}"
            );
        }
    }
}

#[test]
fn insufficient_clip_vertices() {
    for op in OPS {
        for clip in too_few_points() {
            let err = square().boolean(&clip, op).unwrap_err();
            assert_eq!(err.role(), PolygonRole::Clip, "op: {op:?}");
        }
    }
}

#[test]
fn insufficient_vertices_with_empty_operand() {
    let empty: Polygon = Polygon::new();
    for op in OPS {
        for p in too_few_points() {
            assert!(empty.boolean(&p, op).is_err(), "op: {op:?}");
            assert!(p.boolean(&empty, op).is_err(), "op: {op:?}");
        }
    }
}

#[test]
fn both_empty() {
    let empty: Polygon = Polygon::new();
    for op in OPS {
        let result = empty
            .boolean_opt(&empty, op, &BooleanOptions::new())
            .unwrap();
        assert_eq!(result.polygons, vec![Polygon::new()], "op: {op:?}");
    }
}

#[test]
fn error_message_names_operand() {
    let point: Polygon = polygon![(0.0, 0.0)];
    let err = point.intersect(&square()).unwrap_err();
    assert_eq!(
        err.to_string(),
        "subject polygon has insufficient vertices (1), at least 3 are required"
    );
}

#[test]
fn repeated_vertices_in_every_op() {
    let clip: Polygon = polygon![(2.0, 2.0), (4.0, 2.0), (6.0, 2.0), (6.0, 6.0), (2.0, 6.0)];
    let subjects: [Polygon; 3] = [
        // exact repeat on an intersection point
        polygon![(0.0, 0.0), (4.0, 0.0), (4.0, 2.0), (4.0, 2.0), (4.0, 4.0), (0.0, 4.0)],
        // repeat within epsilon
        polygon![(0.0, 0.0), (4.0, 0.0), (4.0, 2.0), (4.0, 2.0 + 1e-10), (4.0, 4.0), (0.0, 4.0)],
        // closing point repeated
        polygon![(0.0, 0.0), (4.0, 0.0), (4.0, 4.0), (0.0, 4.0), (0.0, 0.0)],
    ];
    let expected_areas = [4.0, 28.0, 12.0];

    for subject in &subjects {
        for (op, expected_area) in OPS.into_iter().zip(expected_areas) {
            let result = subject.boolean(&clip, op).unwrap();
            let area: f64 = result.iter_non_empty().map(|p| p.area().abs()).sum();
            assert!(
                (area - expected_area).abs() < 1e-8,
                "op: {op:?}, subject: {subject:?}, area: {area}"
            );
            assert_eq!(result.iter_non_empty().count(), 1, "op: {op:?}");
        }
    }
}
