//! Intersection phase: classify every subject/clip source edge pair and insert the resulting
//! intersection nodes into both vertex stores.
use super::vertex_store::{ClipGraph, NodeRef, VertexNode};
use crate::core::{
    math::{fuzzy_sign, min_max, point_from_parametric, projected_parametric, signed_area2, Vector2},
    traits::Real,
};
use static_aabb2d_index::StaticAABB2DIndex;
use std::cmp::Ordering;

/// Interaction between a subject edge `p0 -> p1` and a clip edge `q0 -> q1`.
///
/// Only the start points of the edges are ever marked or inserted, an interaction at an end point
/// is found when the following edge is tested.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum EdgePairIntersect<T> {
    /// No interaction (parallel, disjoint, or touching only at an edge end point).
    None,
    /// Edges cross at a point interior to both edges.
    XIntersection { alpha: T, beta: T, point: Vector2<T> },
    /// `p0` lies on the interior of the clip edge (edges not parallel).
    TIntersectionSubject { beta: T },
    /// `q0` lies on the interior of the subject edge (edges not parallel).
    TIntersectionClip { alpha: T },
    /// `p0` and `q0` coincide (edges not parallel).
    VIntersection,
    /// Collinear edges each with their start point on the other edge's interior.
    XOverlap { alpha: T, beta: T },
    /// Collinear edges, `p0` lies on the clip edge interior, `q0` lies outside the subject edge.
    TOverlapSubject { beta: T },
    /// Collinear edges, `q0` lies on the subject edge interior, `p0` lies outside the clip edge.
    TOverlapClip { alpha: T },
    /// Collinear edges sharing their start point.
    SharedStart,
}

/// Classify the interaction between subject edge `p0 -> p1` and clip edge `q0 -> q1`.
///
/// `alpha` is the parametric position along the subject edge, `beta` along the clip edge.
/// Parameters are compared against 0 and 1 using `epsilon`.
///
/// # Examples
///
/// ```
/// # use greiner_hormann::core::math::*;
/// # use greiner_hormann::polygon::internal::intersection_phase::*;
/// let r = classify_edge_pair(
///     vec2(0.0, 0.0),
///     vec2(2.0, 0.0),
///     vec2(1.0, -1.0),
///     vec2(1.0, 1.0),
///     1e-8,
/// );
/// assert!(matches!(r, EdgePairIntersect::XIntersection { .. }));
/// ```
pub fn classify_edge_pair<T>(
    p0: Vector2<T>,
    p1: Vector2<T>,
    q0: Vector2<T>,
    q1: Vector2<T>,
    epsilon: T,
) -> EdgePairIntersect<T>
where
    T: Real,
{
    let is_zero = |t: T| fuzzy_sign(t, epsilon) == Ordering::Equal;
    let is_interior = |t: T| t.fuzzy_in_unit_interval_eps(epsilon);
    let is_outside = |t: T| {
        fuzzy_sign(t, epsilon) == Ordering::Less
            || fuzzy_sign(t - T::one(), epsilon) != Ordering::Less
    };

    let area_p0 = signed_area2(p0, q0, q1);
    let area_p1 = signed_area2(p1, q0, q1);
    let area_q0 = signed_area2(q0, p0, p1);
    let area_q1 = signed_area2(q1, p0, p1);

    if (area_p0 - area_p1).abs() > epsilon {
        // not parallel
        let alpha = area_p0 / (area_p0 - area_p1);
        let beta = area_q0 / (area_q0 - area_q1);

        if is_interior(alpha) && is_interior(beta) {
            EdgePairIntersect::XIntersection {
                alpha,
                beta,
                point: point_from_parametric(p0, p1, alpha),
            }
        } else if is_zero(alpha) && is_interior(beta) {
            EdgePairIntersect::TIntersectionSubject { beta }
        } else if is_interior(alpha) && is_zero(beta) {
            EdgePairIntersect::TIntersectionClip { alpha }
        } else if is_zero(alpha) && is_zero(beta) {
            EdgePairIntersect::VIntersection
        } else {
            EdgePairIntersect::None
        }
    } else if is_zero(area_p0) && is_zero(area_p1) && is_zero(area_q0) && is_zero(area_q1) {
        // collinear
        let alpha = projected_parametric(q0, p0, p1);
        let beta = projected_parametric(p0, q0, q1);

        if is_interior(alpha) && is_interior(beta) {
            EdgePairIntersect::XOverlap { alpha, beta }
        } else if is_outside(alpha) && is_interior(beta) {
            EdgePairIntersect::TOverlapSubject { beta }
        } else if is_interior(alpha) && is_outside(beta) {
            EdgePairIntersect::TOverlapClip { alpha }
        } else if is_zero(alpha) && is_zero(beta) {
            EdgePairIntersect::SharedStart
        } else {
            EdgePairIntersect::None
        }
    } else {
        EdgePairIntersect::None
    }
}

/// Counts of the edge pair interactions applied to a [ClipGraph].
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct IntersectionStats {
    pub x_intersections: usize,
    pub t_intersections: usize,
    pub v_intersections: usize,
    pub x_overlaps: usize,
    pub t_overlaps: usize,
    pub shared_starts: usize,
}

impl IntersectionStats {
    /// Total count of interactions found.
    pub fn total(&self) -> usize {
        self.x_intersections
            + self.t_intersections
            + self.v_intersections
            + self.x_overlaps
            + self.t_overlaps
            + self.shared_starts
    }
}

/// Find all intersections between the subject and clip source edges and insert/mark them in both
/// stores of `graph`.
///
/// `clip_aabb_index` holds the bounding box of every clip source edge (item `j` is the edge from
/// clip point `j` to `j + 1`). Edge pairs are visited in ascending subject then clip edge order.
pub fn find_intersections<T>(
    graph: &mut ClipGraph<T>,
    clip_aabb_index: &StaticAABB2DIndex<T>,
    epsilon: T,
) -> IntersectionStats
where
    T: Real,
{
    let mut stats = IntersectionStats::default();
    let subject_count = graph.subject.source_count();
    let clip_count = graph.clip.source_count();
    let mut query_results = Vec::new();
    let mut query_stack = Vec::with_capacity(8);

    for i in 0..subject_count {
        let i_next = graph.subject.next_source(i);
        let p0 = graph.subject.point(i);
        let p1 = graph.subject.point(i_next);

        query_results.clear();
        let mut query_visitor = |j: usize| {
            if j < clip_count {
                query_results.push(j);
            }
        };
        let (min_x, max_x) = min_max(p0.x, p1.x);
        let (min_y, max_y) = min_max(p0.y, p1.y);
        clip_aabb_index.visit_query_with_stack(
            min_x - epsilon,
            min_y - epsilon,
            max_x + epsilon,
            max_y + epsilon,
            &mut query_visitor,
            &mut query_stack,
        );
        query_results.sort_unstable();

        for &j in query_results.iter() {
            let j_next = graph.clip.next_source(j);
            let q0 = graph.clip.point(j);
            let q1 = graph.clip.point(j_next);
            let kind = classify_edge_pair(p0, p1, q0, q1, epsilon);
            if kind != EdgePairIntersect::None {
                log::trace!("subject edge {i} / clip edge {j}: {kind:?}");
            }
            apply_edge_pair(graph, kind, (i, i_next), (j, j_next), &mut stats);
        }
    }

    stats
}

fn apply_edge_pair<T>(
    graph: &mut ClipGraph<T>,
    kind: EdgePairIntersect<T>,
    (i, i_next): (usize, usize),
    (j, j_next): (usize, usize),
    stats: &mut IntersectionStats,
) where
    T: Real,
{
    let p0 = graph.subject.point(i);
    let q0 = graph.clip.point(j);
    match kind {
        EdgePairIntersect::None => {}
        EdgePairIntersect::XIntersection { alpha, beta, point } => {
            let p = graph
                .subject
                .insert_on_edge(i, i_next, VertexNode::intersection(point, alpha));
            let q = graph
                .clip
                .insert_on_edge(j, j_next, VertexNode::intersection(point, beta));
            graph.link(NodeRef::subject(p), NodeRef::clip(q));
            stats.x_intersections += 1;
        }
        EdgePairIntersect::TIntersectionSubject { beta } => {
            let q = graph
                .clip
                .insert_on_edge(j, j_next, VertexNode::intersection(p0, beta));
            graph.link(NodeRef::subject(i), NodeRef::clip(q));
            stats.t_intersections += 1;
        }
        EdgePairIntersect::TIntersectionClip { alpha } => {
            let p = graph
                .subject
                .insert_on_edge(i, i_next, VertexNode::intersection(q0, alpha));
            graph.link(NodeRef::subject(p), NodeRef::clip(j));
            stats.t_intersections += 1;
        }
        EdgePairIntersect::VIntersection => {
            graph.link(NodeRef::subject(i), NodeRef::clip(j));
            stats.v_intersections += 1;
        }
        EdgePairIntersect::XOverlap { alpha, beta } => {
            // q0 goes into the subject linked to the existing clip node, p0 into the clip linked
            // to the existing subject node
            let p = graph
                .subject
                .insert_on_edge(i, i_next, VertexNode::intersection(q0, alpha));
            let q = graph
                .clip
                .insert_on_edge(j, j_next, VertexNode::intersection(p0, beta));
            graph.link(NodeRef::subject(p), NodeRef::clip(j));
            graph.link(NodeRef::subject(i), NodeRef::clip(q));
            stats.x_overlaps += 1;
        }
        EdgePairIntersect::TOverlapSubject { beta } => {
            let q = graph
                .clip
                .insert_on_edge(j, j_next, VertexNode::intersection(p0, beta));
            graph.link(NodeRef::subject(i), NodeRef::clip(q));
            stats.t_overlaps += 1;
        }
        EdgePairIntersect::TOverlapClip { alpha } => {
            let p = graph
                .subject
                .insert_on_edge(i, i_next, VertexNode::intersection(q0, alpha));
            graph.link(NodeRef::subject(p), NodeRef::clip(j));
            stats.t_overlaps += 1;
        }
        EdgePairIntersect::SharedStart => {
            graph.link(NodeRef::subject(i), NodeRef::clip(j));
            stats.shared_starts += 1;
        }
    }
}
