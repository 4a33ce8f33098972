use super::Vector2;
use crate::core::traits::Real;
use std::cmp::Ordering;

/// Returns the (min, max) values from `v1` and `v2`.
///
/// # Examples
///
/// ```
/// # use greiner_hormann::core::math::*;
/// let (min_val, max_val) = min_max(8, 4);
/// assert_eq!(min_val, 4);
/// assert_eq!(max_val, 8);
/// ```
#[inline]
pub fn min_max<T>(v1: T, v2: T) -> (T, T)
where
    T: PartialOrd,
{
    if v1 < v2 {
        (v1, v2)
    } else {
        (v2, v1)
    }
}

/// Returns twice the signed area of the triangle formed by `p`, `q`, and `r`.
///
/// Result is positive if `p -> q -> r` turns counter clockwise (`r` is left of the line `p -> q`),
/// negative if it turns clockwise, and zero if the three points are collinear.
///
/// # Examples
///
/// ```
/// # use greiner_hormann::core::math::*;
/// let p = Vector2::new(0.0, 0.0);
/// let q = Vector2::new(2.0, 0.0);
/// assert_eq!(signed_area2(p, q, Vector2::new(0.0, 2.0)), 4.0);
/// assert_eq!(signed_area2(p, q, Vector2::new(0.0, -2.0)), -4.0);
/// assert_eq!(signed_area2(p, q, Vector2::new(5.0, 0.0)), 0.0);
/// ```
#[inline]
pub fn signed_area2<T>(p: Vector2<T>, q: Vector2<T>, r: Vector2<T>) -> T
where
    T: Real,
{
    (q.x - p.x) * (r.y - p.y) - (q.y - p.y) * (r.x - p.x)
}

/// Returns the sign of `value` as an [Ordering] relative to zero, treating any value with an
/// absolute value less than `epsilon` as zero.
///
/// # Examples
///
/// ```
/// # use greiner_hormann::core::math::*;
/// use std::cmp::Ordering;
/// assert_eq!(fuzzy_sign(1e-9, 1e-8), Ordering::Equal);
/// assert_eq!(fuzzy_sign(-1e-9, 1e-8), Ordering::Equal);
/// assert_eq!(fuzzy_sign(0.5, 1e-8), Ordering::Greater);
/// assert_eq!(fuzzy_sign(-0.5, 1e-8), Ordering::Less);
/// ```
#[inline]
pub fn fuzzy_sign<T>(value: T, epsilon: T) -> Ordering
where
    T: Real,
{
    value.fuzzy_sign_eps(epsilon)
}

/// Returns true if `point` is strictly left of the direction vector going from `p0` to `p1`.
#[inline]
pub fn is_left<T>(p0: Vector2<T>, p1: Vector2<T>, point: Vector2<T>) -> bool
where
    T: Real,
{
    signed_area2(p0, p1, point) > T::zero()
}

/// Returns true if `point` is strictly right of the direction vector going from `p0` to `p1`.
#[inline]
pub fn is_right<T>(p0: Vector2<T>, p1: Vector2<T>, point: Vector2<T>) -> bool
where
    T: Real,
{
    signed_area2(p0, p1, point) < T::zero()
}

/// Returns the midpoint of the segment `p0` to `p1`.
///
/// # Examples
///
/// ```
/// # use greiner_hormann::core::math::*;
/// let m = midpoint(Vector2::new(0.0, 1.0), Vector2::new(4.0, 1.0));
/// assert_eq!(m, Vector2::new(2.0, 1.0));
/// ```
#[inline]
pub fn midpoint<T>(p0: Vector2<T>, p1: Vector2<T>) -> Vector2<T>
where
    T: Real,
{
    Vector2::new(T::midway(p0.x, p1.x), T::midway(p0.y, p1.y))
}

/// Returns the point on the line through `p0` and `p1` at parametric value `t` (`t = 0` is `p0`,
/// `t = 1` is `p1`).
#[inline]
pub fn point_from_parametric<T>(p0: Vector2<T>, p1: Vector2<T>, t: T) -> Vector2<T>
where
    T: Real,
{
    p0 + (p1 - p0).scale(t)
}

/// Returns the parametric value of `point` projected onto the line through `p0` and `p1`
/// (`0` at `p0`, `1` at `p1`).
///
/// The segment must not be degenerate (`p0 != p1`).
///
/// # Examples
///
/// ```
/// # use greiner_hormann::core::math::*;
/// let p0 = Vector2::new(4.0, 0.0);
/// let p1 = Vector2::new(4.0, 4.0);
/// assert_eq!(projected_parametric(Vector2::new(4.0, 1.0), p0, p1), 0.25);
/// assert_eq!(projected_parametric(Vector2::new(9.0, -2.0), p0, p1), -0.5);
/// ```
#[inline]
pub fn projected_parametric<T>(point: Vector2<T>, p0: Vector2<T>, p1: Vector2<T>) -> T
where
    T: Real,
{
    let dir = p1 - p0;
    (point - p0).dot(dir) / dir.length_squared()
}

/// Computes the winding number of the closed boundary formed by `segments` around `point`.
///
/// Upward crossings (segment starts at or below the point and ends above it, point left of the
/// segment) count `+1`, downward crossings (segment starts above and ends at or below, point right
/// of the segment) count `-1`. Counter clockwise boundaries give positive values for points inside.
///
/// # Examples
///
/// ```
/// # use greiner_hormann::core::math::*;
/// let square = [
///     Vector2::new(0.0, 0.0),
///     Vector2::new(2.0, 0.0),
///     Vector2::new(2.0, 2.0),
///     Vector2::new(0.0, 2.0),
/// ];
/// let segments = || (0..4).map(|i| (square[i], square[(i + 1) % 4]));
/// assert_eq!(winding_number(segments(), Vector2::new(1.0, 1.0)), 1);
/// assert_eq!(winding_number(segments(), Vector2::new(3.0, 1.0)), 0);
/// let reversed = || (0..4).rev().map(|i| (square[(i + 1) % 4], square[i]));
/// assert_eq!(winding_number(reversed(), Vector2::new(1.0, 1.0)), -1);
/// ```
pub fn winding_number<T, I>(segments: I, point: Vector2<T>) -> i32
where
    T: Real,
    I: IntoIterator<Item = (Vector2<T>, Vector2<T>)>,
{
    let mut winding = 0;
    for (v1, v2) in segments {
        if v1.y <= point.y {
            if v2.y > point.y && is_left(v1, v2, point) {
                // left and upward crossing
                winding += 1;
            }
        } else if v2.y <= point.y && is_right(v1, v2, point) {
            // right and downward crossing
            winding -= 1;
        }
    }

    winding
}
