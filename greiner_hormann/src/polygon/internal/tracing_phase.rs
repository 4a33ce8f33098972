//! Tracing phase: walk the labeled vertex stores, switching stores at crossing intersections, to
//! assemble the output boundaries.
use super::{
    predicates::inside_store,
    vertex_store::{ClipGraph, CrossingLabel, EntryLabel, NodeRef, VertexStore},
};
use crate::{
    core::{
        math::{signed_area2, Vector2},
        traits::Real,
    },
    polygon::BooleanOp,
};

/// Traversal direction along a vertex store.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Direction {
    /// Follow `next` links.
    Forward,
    /// Follow `prev` links.
    Backward,
}

/// Relationship between the polygons when no crossing intersection exists.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Containment {
    /// Clip lies inside the subject (boundaries may touch).
    ClipInSubject,
    /// Subject lies inside the clip (boundaries may touch).
    SubjectInClip,
    /// Neither polygon lies inside the other.
    Disjoint,
}

/// Result of [trace_components].
#[derive(Debug, Clone, PartialEq)]
pub enum TraceOutcome<T> {
    /// Traced closed boundaries (collinear vertices not yet removed). A walk that fails to
    /// return to its start is not included.
    Components(Vec<Vec<Vector2<T>>>),
    /// No crossing intersections exist, output is decided by the containment relationship.
    NoCrossings(Containment),
}

/// Trace the output boundaries of `op` from a labeled `graph`.
pub fn trace_components<T>(graph: &mut ClipGraph<T>, op: BooleanOp) -> TraceOutcome<T>
where
    T: Real,
{
    let mut start = match first_unprocessed_crossing(graph) {
        Some(i) => i,
        None => return TraceOutcome::NoCrossings(containment(graph)),
    };

    // each component step visits a distinct node except for the final wrap
    let max_steps = graph.subject.len() + graph.clip.len() + 1;
    let mut components = Vec::new();
    loop {
        let start_ref = NodeRef::subject(start);
        let start_partner = graph.node(start_ref).corresponding;
        let mut current = start_ref;
        let mut entry = graph.node(current).entry;
        let mut dir = op.initial_direction(entry);
        let mut component = vec![graph.node(current).point];
        graph.mark_processed(current);

        let mut steps = 0;
        let mut closed = false;
        'component: while steps <= max_steps {
            let opposite = opposite_entry(entry);
            loop {
                let store = graph.store(current.role);
                let next = match dir {
                    Direction::Forward => store.next(current.index),
                    Direction::Backward => store.prev(current.index),
                };
                current = NodeRef::new(current.role, next);
                component.push(store.point(next));
                steps += 1;
                if graph.node(current).entry == opposite {
                    break;
                }
                if steps > max_steps {
                    break 'component;
                }
            }

            graph.mark_processed(current);
            current = match graph.node(current).corresponding {
                Some(partner) => partner,
                None => {
                    debug_assert!(false, "crossing node without partner");
                    break 'component;
                }
            };
            entry = graph.node(current).entry;
            dir = op.direction(current.role, entry);

            if current == start_ref || Some(current) == start_partner {
                closed = true;
                break;
            }
        }

        if closed {
            // last point repeats the start point
            component.pop();
            components.push(component);
        } else {
            log::warn!(
                "tracing did not return to its start point after {steps} steps, component dropped"
            );
        }

        start = match first_unprocessed_crossing(graph) {
            Some(i) => i,
            None => break,
        };
    }

    TraceOutcome::Components(components)
}

fn first_unprocessed_crossing<T>(graph: &ClipGraph<T>) -> Option<usize>
where
    T: Real,
{
    graph
        .subject
        .find_first(|n| n.is_intersection && n.crossing == CrossingLabel::Crossing && !n.processed)
}

/// Label a walk stops at, an unlabeled start stops at the first entry.
#[inline]
fn opposite_entry(entry: EntryLabel) -> EntryLabel {
    match entry {
        EntryLabel::Unset => EntryLabel::Entry,
        e => e.flipped(),
    }
}

/// Decide containment using only nodes that are not on the other polygon's boundary.
pub fn containment<T>(graph: &ClipGraph<T>) -> Containment
where
    T: Real,
{
    let any_inside = |store: &VertexStore<T>, other: &VertexStore<T>| {
        store.iter().any(|i| {
            let node = store.node(i);
            !node.is_intersection && inside_store(node.point, other)
        })
    };

    if any_inside(&graph.clip, &graph.subject) {
        Containment::ClipInSubject
    } else if any_inside(&graph.subject, &graph.clip) {
        Containment::SubjectInClip
    } else {
        Containment::Disjoint
    }
}

/// Remove every vertex exactly collinear with its neighbors, scanning from the end so removals
/// don't shift unexamined indexes.
///
/// # Examples
///
/// ```
/// # use greiner_hormann::core::math::*;
/// # use greiner_hormann::polygon::internal::tracing_phase::remove_collinear;
/// let mut pts = vec![
///     vec2(0.0, 0.0),
///     vec2(1.0, 0.0),
///     vec2(2.0, 0.0),
///     vec2(2.0, 2.0),
///     vec2(0.0, 2.0),
/// ];
/// remove_collinear(&mut pts);
/// assert_eq!(pts.len(), 4);
/// assert_eq!(pts[1], vec2(2.0, 0.0));
/// ```
pub fn remove_collinear<T>(points: &mut Vec<Vector2<T>>)
where
    T: Real,
{
    let mut i = points.len();
    while i > 0 {
        i -= 1;
        let n = points.len();
        if n < 3 {
            break;
        }
        if i >= n {
            continue;
        }
        let prev = points[(i + n - 1) % n];
        let next = points[(i + 1) % n];
        if signed_area2(prev, points[i], next) == T::zero() {
            points.remove(i);
        }
    }
}
