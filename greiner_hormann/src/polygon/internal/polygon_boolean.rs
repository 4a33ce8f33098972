use super::{
    boolean_policy::{TrivialCase, TrivialResult},
    hole_split::difference_with_inner_clip,
    intersection_phase::find_intersections,
    labeling_phase::{label_intersections, LabelingOutcome},
    tracing_phase::{remove_collinear, trace_components, Containment, TraceOutcome},
    vertex_store::ClipGraph,
};
use crate::{
    core::traits::Real,
    error::ClipError,
    polygon::{BooleanOp, BooleanOptions, BooleanResult, Polygon, PolygonRole},
};

/// Perform the boolean operation `op` between `subject` and `clip`.
///
/// Either polygon may be empty (zero points), a polygon with 1 or 2 points is rejected with
/// [ClipError::InsufficientVertices]. Consecutive fuzzy equal points are merged first, a polygon
/// left with fewer than 3 points is then treated as empty.
pub fn polygon_boolean<T>(
    subject: &Polygon<T>,
    clip: &Polygon<T>,
    op: BooleanOp,
    options: &BooleanOptions<T>,
) -> Result<BooleanResult<T>, ClipError>
where
    T: Real,
{
    boolean_at_depth(subject, clip, op, options, 0)
}

/// Same as [polygon_boolean] with the current difference split recursion `depth`.
pub fn boolean_at_depth<T>(
    subject: &Polygon<T>,
    clip: &Polygon<T>,
    op: BooleanOp,
    options: &BooleanOptions<T>,
    depth: usize,
) -> Result<BooleanResult<T>, ClipError>
where
    T: Real,
{
    validate(subject, PolygonRole::Subject)?;
    validate(clip, PolygonRole::Clip)?;

    // zero length edges are absorbed before the vertex stores are built
    let subject_owned = subject.remove_repeat_points(options.epsilon);
    let subject = subject_owned.as_ref().unwrap_or(subject);
    let clip_owned = clip.remove_repeat_points(options.epsilon);
    let clip_changed = clip_owned.is_some();
    let clip = clip_owned.as_ref().unwrap_or(clip);

    if subject.vertex_count() < 3 {
        return resolve_trivial(op, TrivialCase::SubjectEmpty, subject, clip, options, depth);
    }

    if clip.vertex_count() < 3 {
        return resolve_trivial(op, TrivialCase::ClipEmpty, subject, clip, options, depth);
    }

    // a given index refers to the clip edges before repeat points were removed
    let constructed_index;
    let clip_aabb_index = match options.clip_aabb_index {
        Some(index) if !clip_changed => index,
        _ => {
            constructed_index = clip.create_aabb_index();
            &constructed_index
        }
    };

    // spatial index is reused if the subject gets split
    let options = BooleanOptions {
        epsilon: options.epsilon,
        clip_aabb_index: Some(clip_aabb_index),
        max_split_depth: options.max_split_depth,
    };

    let mut graph = ClipGraph::new(&subject.points, &clip.points);
    let stats = find_intersections(&mut graph, clip_aabb_index, options.epsilon);
    log::debug!("{op:?}: {} intersections found {stats:?}", stats.total());

    if label_intersections(&mut graph, options.epsilon) == LabelingOutcome::Identical {
        return resolve_trivial(op, TrivialCase::Identical, subject, clip, &options, depth);
    }

    let components = match trace_components(&mut graph, op) {
        TraceOutcome::Components(c) => c,
        TraceOutcome::NoCrossings(containment) => {
            let case = match containment {
                Containment::ClipInSubject => TrivialCase::ClipContained,
                Containment::SubjectInClip => TrivialCase::SubjectContained,
                Containment::Disjoint => TrivialCase::Disjoint,
            };
            return resolve_trivial(op, case, subject, clip, &options, depth);
        }
    };

    let polygons: Vec<Polygon<T>> = components
        .into_iter()
        .filter_map(|mut points| {
            remove_collinear(&mut points);
            if points.len() < 3 {
                None
            } else {
                Some(Polygon::from_points(points))
            }
        })
        .collect();

    log::debug!("{op:?}: {} components traced", polygons.len());

    if polygons.is_empty() {
        return Ok(BooleanResult::empty());
    }

    Ok(BooleanResult::new(polygons))
}

fn validate<T>(polygon: &Polygon<T>, role: PolygonRole) -> Result<(), ClipError>
where
    T: Real,
{
    let count = polygon.vertex_count();
    if count == 1 || count == 2 {
        return Err(ClipError::InsufficientVertices { role, count });
    }

    Ok(())
}

fn resolve_trivial<T>(
    op: BooleanOp,
    case: TrivialCase,
    subject: &Polygon<T>,
    clip: &Polygon<T>,
    options: &BooleanOptions<T>,
    depth: usize,
) -> Result<BooleanResult<T>, ClipError>
where
    T: Real,
{
    log::debug!("{op:?}: {case:?}");
    match op.trivial_result(case, subject, clip) {
        TrivialResult::Done(result) => Ok(result),
        TrivialResult::SplitSubject => difference_with_inner_clip(subject, clip, options, depth),
    }
}
