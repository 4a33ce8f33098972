//! Supporting public types used by the polygon boolean operations.

use super::Polygon;
use crate::core::traits::Real;
use static_aabb2d_index::StaticAABB2DIndex;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Represents the orientation of a polygon.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PolygonOrientation {
    /// Polygon has fewer than 3 points or zero area.
    Degenerate,
    /// Polygon is directionally clockwise.
    Clockwise,
    /// Polygon is directionally counter clockwise.
    CounterClockwise,
}

/// Role of a polygon operand in a boolean operation.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum PolygonRole {
    /// First operand, the polygon being clipped.
    Subject,
    /// Second operand, the polygon clipping the subject.
    Clip,
}

impl PolygonRole {
    /// The role of the other operand.
    #[inline]
    pub fn other(self) -> Self {
        match self {
            PolygonRole::Subject => PolygonRole::Clip,
            PolygonRole::Clip => PolygonRole::Subject,
        }
    }
}

impl fmt::Display for PolygonRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PolygonRole::Subject => write!(f, "subject"),
            PolygonRole::Clip => write!(f, "clip"),
        }
    }
}

/// Boolean operation to apply to polygons.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum BooleanOp {
    /// Region inside both the subject and the clip.
    Intersect,
    /// Region inside either the subject or the clip.
    Union,
    /// Region inside the subject and outside the clip.
    Difference,
}

/// Result of performing a boolean operation between two polygons.
///
/// An empty result is represented by a single empty polygon component, a result with no
/// components at all is never returned.
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "camelCase"),
    serde(bound(
        serialize = "T: Serialize",
        deserialize = "T: Deserialize<'de>",
    ))
)]
#[derive(Debug, Clone, PartialEq)]
pub struct BooleanResult<T = f64>
where
    T: Real,
{
    /// Resultant polygon components.
    pub polygons: Vec<Polygon<T>>,
}

impl<T> BooleanResult<T>
where
    T: Real,
{
    #[inline]
    pub fn new(polygons: Vec<Polygon<T>>) -> Self {
        Self { polygons }
    }

    /// Empty result (a single empty component).
    #[inline]
    pub fn empty() -> Self {
        Self::new(vec![Polygon::new()])
    }

    /// Result holding exactly the polygon given.
    #[inline]
    pub fn single(polygon: Polygon<T>) -> Self {
        Self::new(vec![polygon])
    }

    /// Returns true if the result covers no region (every component is empty).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.polygons.iter().all(|p| p.is_empty())
    }

    /// Iterate the non-empty components.
    #[inline]
    pub fn iter_non_empty(&self) -> impl Iterator<Item = &Polygon<T>> + '_ {
        self.polygons.iter().filter(|p| !p.is_empty())
    }

    /// Append all components of `other` to this result, empty placeholder components are dropped
    /// unless the combined result would otherwise have no components.
    pub fn extend(&mut self, other: BooleanResult<T>) {
        self.polygons.retain(|p| !p.is_empty());
        self.polygons
            .extend(other.polygons.into_iter().filter(|p| !p.is_empty()));
        if self.polygons.is_empty() {
            self.polygons.push(Polygon::new());
        }
    }
}

/// Struct to hold options parameters when performing a polygon boolean operation.
#[derive(Debug, Clone)]
pub struct BooleanOptions<'a, T>
where
    T: Real,
{
    /// Tolerance used when determining the sign of signed areas and intersection parameters,
    /// absolute values below it are treated as zero.
    pub epsilon: T,
    /// Spatial index of the clip polygon's edge bounding boxes (in edge order, e.g. created with
    /// [Polygon::create_aabb_index]). If `None` is given then it will be computed internally.
    pub clip_aabb_index: Option<&'a StaticAABB2DIndex<T>>,
    /// Maximum recursion depth when splitting the subject of a difference operation around a
    /// fully contained clip polygon.
    pub max_split_depth: usize,
}

impl<'a, T> BooleanOptions<'a, T>
where
    T: Real,
{
    #[inline]
    pub fn new() -> Self {
        Self {
            epsilon: T::fuzzy_epsilon(),
            clip_aabb_index: None,
            max_split_depth: 8,
        }
    }
}

impl<'a, T> Default for BooleanOptions<'a, T>
where
    T: Real,
{
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}
