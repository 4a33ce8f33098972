use super::{
    internal::polygon_boolean::polygon_boolean, BooleanOp, BooleanOptions, BooleanResult,
    PolygonOrientation,
};
use crate::{
    core::{
        math::{min_max, winding_number, Vector2},
        traits::Real,
    },
    error::ClipError,
};
use static_aabb2d_index::{
    IndexableNum, StaticAABB2DIndex, StaticAABB2DIndexBuildError, StaticAABB2DIndexBuilder, AABB,
};
use std::ops::Index;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Closed polygon boundary represented as an ordered sequence of points.
///
/// The last point connects back to the first, the closing point is never repeated. A polygon with
/// zero points is the empty polygon.
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "camelCase"),
    serde(bound(
        serialize = "T: Serialize",
        deserialize = "T: Deserialize<'de>",
    ))
)]
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Polygon<T = f64> {
    /// Boundary points in order.
    pub points: Vec<Vector2<T>>,
}

impl<T> Polygon<T>
where
    T: Real,
{
    /// Create a new empty polygon.
    #[inline]
    pub fn new() -> Self {
        Polygon { points: Vec::new() }
    }

    /// Create a new empty polygon with `capacity` reserved.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Polygon {
            points: Vec::with_capacity(capacity),
        }
    }

    #[inline]
    pub fn from_points(points: Vec<Vector2<T>>) -> Self {
        Polygon { points }
    }

    /// Add a point to the end of the polygon.
    #[inline]
    pub fn add(&mut self, x: T, y: T) {
        self.points.push(Vector2::new(x, y));
    }

    #[inline]
    pub fn add_point(&mut self, point: Vector2<T>) {
        self.points.push(point);
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Point at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    #[inline]
    pub fn at(&self, index: usize) -> Vector2<T> {
        self.points[index]
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<Vector2<T>> {
        self.points.get(index).copied()
    }

    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = Vector2<T>> + '_ {
        self.points.iter().copied()
    }

    /// Iterate all edges as `(start, end)` point pairs, including the closing edge.
    ///
    /// # Examples
    ///
    /// ```
    /// # use greiner_hormann::polygon::*;
    /// # use greiner_hormann::core::math::*;
    /// # use greiner_hormann::polygon;
    /// let triangle: Polygon = polygon![(0.0, 0.0), (1.0, 0.0), (0.0, 1.0)];
    /// let edges: Vec<_> = triangle.iter_segments().collect();
    /// assert_eq!(edges.len(), 3);
    /// assert_eq!(edges[2], (vec2(0.0, 1.0), vec2(0.0, 0.0)));
    /// ```
    pub fn iter_segments(&self) -> impl Iterator<Item = (Vector2<T>, Vector2<T>)> + '_ {
        let n = self.points.len();
        let count = if n < 2 { 0 } else { n };
        (0..count).map(move |i| (self.points[i], self.points[(i + 1) % n]))
    }

    /// Remove all consecutive repeat position points, including a last point repeating the first.
    ///
    /// Returns `None` to avoid allocation and copy in the case that no points are removed.
    ///
    /// # Examples
    ///
    /// ```
    /// # use greiner_hormann::polygon::*;
    /// # use greiner_hormann::core::math::*;
    /// # use greiner_hormann::polygon;
    /// let square: Polygon = polygon![(0.0, 0.0), (2.0, 0.0), (2.0, 0.0), (2.0, 2.0), (0.0, 2.0), (0.0, 0.0)];
    /// let result = square.remove_repeat_points(1e-8).expect("repeat points were removed");
    /// assert_eq!(result.points, vec![vec2(0.0, 0.0), vec2(2.0, 0.0), vec2(2.0, 2.0), vec2(0.0, 2.0)]);
    /// assert!(result.remove_repeat_points(1e-8).is_none());
    /// ```
    pub fn remove_repeat_points(&self, pos_equal_eps: T) -> Option<Polygon<T>> {
        if self.points.len() < 2 {
            return None;
        }

        let mut result: Option<Polygon<T>> = None;
        let mut prev = self.points[0];
        for (i, &p) in self.points.iter().enumerate().skip(1) {
            if p.fuzzy_eq_eps(prev, pos_equal_eps) {
                result.get_or_insert_with(|| self.points[..i].iter().copied().collect());
            } else {
                if let Some(r) = result.as_mut() {
                    r.add_point(p);
                }
                prev = p;
            }
        }

        let kept = result.as_ref().map_or(self.points.len(), |r| r.vertex_count());
        if kept > 1 && prev.fuzzy_eq_eps(self.points[0], pos_equal_eps) {
            result.get_or_insert_with(|| self.clone()).points.pop();
        }

        result
    }

    /// Signed area of the polygon, positive if counter clockwise and negative if clockwise.
    ///
    /// # Examples
    ///
    /// ```
    /// # use greiner_hormann::polygon::*;
    /// # use greiner_hormann::core::traits::*;
    /// # use greiner_hormann::polygon;
    /// let mut square: Polygon = polygon![(0.0, 0.0), (2.0, 0.0), (2.0, 2.0), (0.0, 2.0)];
    /// assert!(square.area().fuzzy_eq(4.0));
    /// square.invert_direction_mut();
    /// assert!(square.area().fuzzy_eq(-4.0));
    /// ```
    pub fn area(&self) -> T {
        if self.points.len() < 3 {
            return T::zero();
        }

        let double_area = self
            .iter_segments()
            .fold(T::zero(), |acc, (v1, v2)| acc + v1.perp_dot(v2));

        double_area / T::two()
    }

    /// Orientation of the polygon, degenerate if it has fewer than 3 points or zero area.
    pub fn orientation(&self) -> PolygonOrientation {
        if self.points.len() < 3 {
            return PolygonOrientation::Degenerate;
        }

        let area = self.area();
        if area > T::zero() {
            PolygonOrientation::CounterClockwise
        } else if area < T::zero() {
            PolygonOrientation::Clockwise
        } else {
            PolygonOrientation::Degenerate
        }
    }

    /// Axis aligned bounding box of the polygon, `None` if the polygon is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// # use greiner_hormann::polygon::*;
    /// # use greiner_hormann::polygon;
    /// let triangle: Polygon = polygon![(-1.0, 0.0), (3.0, 1.0), (0.0, 5.0)];
    /// let extents = triangle.extents().unwrap();
    /// assert_eq!((extents.min_x, extents.min_y, extents.max_x, extents.max_y), (-1.0, 0.0, 3.0, 5.0));
    /// ```
    pub fn extents(&self) -> Option<AABB<T>> {
        let first = self.points.first()?;
        let mut result = AABB::new(first.x, first.y, first.x, first.y);
        for p in self.points.iter().skip(1) {
            if p.x < result.min_x {
                result.min_x = p.x;
            } else if p.x > result.max_x {
                result.max_x = p.x;
            }

            if p.y < result.min_y {
                result.min_y = p.y;
            } else if p.y > result.max_y {
                result.max_y = p.y;
            }
        }

        Some(result)
    }

    /// Total length of all edges including the closing edge.
    pub fn path_length(&self) -> T {
        self.iter_segments()
            .fold(T::zero(), |acc, (v1, v2)| acc + (v2 - v1).length())
    }

    /// Winding number of the polygon around `point`.
    ///
    /// Positive for counter clockwise polygons, negative for clockwise polygons, zero if `point` is
    /// outside.
    #[inline]
    pub fn winding_number(&self, point: Vector2<T>) -> i32 {
        if self.points.len() < 3 {
            return 0;
        }

        winding_number(self.iter_segments(), point)
    }

    /// Returns true if `point` is inside the polygon by the odd crossing count rule.
    ///
    /// # Examples
    ///
    /// ```
    /// # use greiner_hormann::polygon::*;
    /// # use greiner_hormann::core::math::*;
    /// # use greiner_hormann::polygon;
    /// let mut square: Polygon = polygon![(0.0, 0.0), (2.0, 0.0), (2.0, 2.0), (0.0, 2.0)];
    /// assert!(square.contains_odd(vec2(1.0, 1.0)));
    /// assert!(!square.contains_odd(vec2(3.0, 1.0)));
    /// square.invert_direction_mut();
    /// assert!(square.contains_odd(vec2(1.0, 1.0)));
    /// ```
    #[inline]
    pub fn contains_odd(&self, point: Vector2<T>) -> bool {
        self.winding_number(point) % 2 != 0
    }

    /// Translate all points by `x` and `y`.
    pub fn translate_mut(&mut self, x: T, y: T) {
        let offset = Vector2::new(x, y);
        for p in self.points.iter_mut() {
            *p = *p + offset;
        }
    }

    /// Reverse the direction of the polygon, keeping the first point in place.
    pub fn invert_direction_mut(&mut self) {
        if self.points.len() < 2 {
            return;
        }

        self.points[1..].reverse();
    }

    /// Creates a spatial index of all the polygon edges.
    ///
    /// The edge's starting point index is used as the key to the edge bounding box in the
    /// `StaticAABB2DIndex`.
    ///
    /// # Panics
    ///
    /// Panics if `T` fails to cast to/from a `u16`.
    pub fn create_aabb_index(&self) -> StaticAABB2DIndex<T> {
        let n = self.points.len();
        if n < 2 {
            return unwrap_spatial_index(StaticAABB2DIndexBuilder::new(0));
        }

        let mut builder = StaticAABB2DIndexBuilder::new(n);
        for (v1, v2) in self.iter_segments() {
            let (min_x, max_x) = min_max(v1.x, v2.x);
            let (min_y, max_y) = min_max(v1.y, v2.y);
            builder.add(min_x, min_y, max_x, max_y);
        }

        unwrap_spatial_index(builder)
    }

    /// Perform a boolean `op` between this polygon (subject) and `clip` with default options.
    #[inline]
    pub fn boolean(&self, clip: &Polygon<T>, op: BooleanOp) -> Result<BooleanResult<T>, ClipError> {
        polygon_boolean(self, clip, op, &BooleanOptions::new())
    }

    /// Perform a boolean `op` between this polygon (subject) and `clip`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use greiner_hormann::polygon::*;
    /// # use greiner_hormann::polygon;
    /// let outer: Polygon = polygon![(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0)];
    /// let inner: Polygon = polygon![(3.0, 3.0), (6.0, 3.0), (6.0, 6.0), (3.0, 6.0)];
    /// let index = inner.create_aabb_index();
    /// let mut options = BooleanOptions::new();
    /// options.clip_aabb_index = Some(&index);
    /// let result = outer.boolean_opt(&inner, BooleanOp::Difference, &options).unwrap();
    /// let area: f64 = result.polygons.iter().map(|p| p.area().abs()).sum();
    /// assert!((area - 91.0).abs() < 1e-8);
    /// ```
    #[inline]
    pub fn boolean_opt(
        &self,
        clip: &Polygon<T>,
        op: BooleanOp,
        options: &BooleanOptions<T>,
    ) -> Result<BooleanResult<T>, ClipError> {
        polygon_boolean(self, clip, op, options)
    }

    /// Region inside both this polygon and `clip`.
    #[inline]
    pub fn intersect(&self, clip: &Polygon<T>) -> Result<BooleanResult<T>, ClipError> {
        self.boolean(clip, BooleanOp::Intersect)
    }

    /// Region inside either this polygon or `clip`.
    #[inline]
    pub fn union(&self, clip: &Polygon<T>) -> Result<BooleanResult<T>, ClipError> {
        self.boolean(clip, BooleanOp::Union)
    }

    /// Region inside this polygon and outside `clip`.
    #[inline]
    pub fn difference(&self, clip: &Polygon<T>) -> Result<BooleanResult<T>, ClipError> {
        self.boolean(clip, BooleanOp::Difference)
    }
}

impl<T> Index<usize> for Polygon<T> {
    type Output = Vector2<T>;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.points[index]
    }
}

impl<T> FromIterator<Vector2<T>> for Polygon<T> {
    fn from_iter<I: IntoIterator<Item = Vector2<T>>>(iter: I) -> Self {
        Polygon {
            points: iter.into_iter().collect(),
        }
    }
}

/// Perform a boolean `op` between `subject` and `clip` using `options`.
#[inline]
pub fn boolean<T>(
    subject: &Polygon<T>,
    clip: &Polygon<T>,
    op: BooleanOp,
    options: &BooleanOptions<T>,
) -> Result<BooleanResult<T>, ClipError>
where
    T: Real,
{
    polygon_boolean(subject, clip, op, options)
}

/// Region inside both `subject` and `clip`.
#[inline]
pub fn intersect<T>(subject: &Polygon<T>, clip: &Polygon<T>) -> Result<BooleanResult<T>, ClipError>
where
    T: Real,
{
    subject.intersect(clip)
}

/// Region inside either `subject` or `clip`.
#[inline]
pub fn union<T>(subject: &Polygon<T>, clip: &Polygon<T>) -> Result<BooleanResult<T>, ClipError>
where
    T: Real,
{
    subject.union(clip)
}

/// Region inside `subject` and outside `clip`.
#[inline]
pub fn difference<T>(
    subject: &Polygon<T>,
    clip: &Polygon<T>,
) -> Result<BooleanResult<T>, ClipError>
where
    T: Real,
{
    subject.difference(clip)
}

/// Helper function to unwrap a spatial index from a builder or panic for the unexpected case of
/// failure.
fn unwrap_spatial_index<T>(builder: StaticAABB2DIndexBuilder<T>) -> StaticAABB2DIndex<T>
where
    T: IndexableNum,
{
    match builder.build() {
        Ok(x) => x,
        Err(e) => match e {
            StaticAABB2DIndexBuildError::ItemCountError { .. } => {
                unreachable!("internal library error: count mismatch when building spatial index")
            }
            StaticAABB2DIndexBuildError::NumericCastError => {
                panic!("failed to cast T type: {e}")
            }
        },
    }
}
