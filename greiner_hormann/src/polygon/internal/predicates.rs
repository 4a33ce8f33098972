//! Geometric predicates used by the labeling and tracing phases.
use super::vertex_store::VertexStore;
use crate::core::{
    math::{fuzzy_sign, signed_area2, winding_number, Vector2},
    traits::Real,
};
use std::cmp::Ordering;

/// Side of a polygonal chain a point lies on.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

/// Classify `q` as left or right of the chain `p1 -> p2 -> p3`.
///
/// The sign of the turn at `p2` (using `epsilon`) decides how the two single edge tests combine:
/// at a left turn the point must be left of both edges, at a right turn left of either edge, and
/// for a straight chain only the first edge is tested.
pub fn side<T>(q: Vector2<T>, p1: Vector2<T>, p2: Vector2<T>, p3: Vector2<T>, epsilon: T) -> Side
where
    T: Real,
{
    let s1 = signed_area2(q, p1, p2);
    let s2 = signed_area2(q, p2, p3);
    let s3 = signed_area2(p1, p2, p3);
    let zero = T::zero();

    let is_left = match fuzzy_sign(s3, epsilon) {
        Ordering::Greater => s1 > zero && s2 > zero,
        Ordering::Equal => s1 > zero,
        Ordering::Less => s1 > zero || s2 > zero,
    };

    if is_left {
        Side::Left
    } else {
        Side::Right
    }
}

/// Returns true if the winding number of `boundary` around `point` is odd.
///
/// Only odd counts are inside (not merely non-zero), so boundary orientation does not matter.
#[inline]
pub fn inside_odd<T, I>(point: Vector2<T>, boundary: I) -> bool
where
    T: Real,
    I: IntoIterator<Item = (Vector2<T>, Vector2<T>)>,
{
    winding_number(boundary, point) % 2 != 0
}

/// [inside_odd] against the boundary of a vertex store.
#[inline]
pub fn inside_store<T>(point: Vector2<T>, store: &VertexStore<T>) -> bool
where
    T: Real,
{
    inside_odd(point, store.iter_segments())
}
