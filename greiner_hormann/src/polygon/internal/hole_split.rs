//! Difference with a clip polygon lying entirely inside the subject.
//!
//! A single boundary loop cannot represent the resulting hole, so the subject is cut into two
//! pieces along a horizontal chord passing through the clip, and the difference of each piece with
//! the clip is computed separately. Each piece now has crossing intersections with the clip.
use super::polygon_boolean::boolean_at_depth;
use crate::{
    core::{
        math::{fuzzy_sign, Vector2},
        traits::Real,
    },
    error::ClipError,
    polygon::{BooleanOp, BooleanOptions, BooleanResult, Polygon},
};

/// Horizontal chord cutting a subject polygon in two.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SplitChord<T> {
    /// Chord start point, on the subject edge starting at `start_edge`.
    pub start: Vector2<T>,
    pub start_edge: usize,
    /// Chord end point, on the subject edge starting at `end_edge`.
    pub end: Vector2<T>,
    pub end_edge: usize,
}

/// Find a chord of `subject` along the horizontal line halfway through the `clip` y range.
///
/// The chord starts at the upward subject edge crossing closest to a clip crossing `C` and ends at
/// the first following downward subject edge crossing on the other side of `C`. Returned with
/// `start_edge < end_edge`. Returns `None` if no such chord exists.
pub fn find_split_chord<T>(
    subject: &[Vector2<T>],
    clip: &[Vector2<T>],
    epsilon: T,
) -> Option<SplitChord<T>>
where
    T: Real,
{
    let n = subject.len();
    let m = clip.len();
    let first = clip.first()?;
    let (min_y, max_y) = clip.iter().fold((first.y, first.y), |(lo, hi), p| {
        (if p.y < lo { p.y } else { lo }, if p.y > hi { p.y } else { hi })
    });
    let y = T::midway(min_y, max_y);

    let x_at_y = |a: Vector2<T>, b: Vector2<T>| a.x + (y - a.y) / (b.y - a.y) * (b.x - a.x);
    let upward = |a: Vector2<T>, b: Vector2<T>| a.y <= y && b.y > y;
    let downward = |a: Vector2<T>, b: Vector2<T>| a.y > y && b.y <= y;

    let cx = (0..m).find_map(|i| {
        let (q1, q2) = (clip[i], clip[(i + 1) % m]);
        if upward(q1, q2) || downward(q1, q2) {
            Some(x_at_y(q1, q2))
        } else {
            None
        }
    })?;

    let mut closest: Option<(T, usize)> = None;
    for i in 0..n {
        let (p1, p2) = (subject[i], subject[(i + 1) % n]);
        if upward(p1, p2) {
            let x = x_at_y(p1, p2);
            if closest.map_or(true, |(best, _)| (x - cx).abs() < (best - cx).abs()) {
                closest = Some((x, i));
            }
        }
    }
    let (s1_x, i1) = closest?;
    let s1_side = fuzzy_sign(s1_x - cx, epsilon);

    let (s2_x, i2) = (1..n).find_map(|j| {
        let k = (i1 + j) % n;
        let (p1, p2) = (subject[k], subject[(k + 1) % n]);
        if downward(p1, p2) {
            let x = x_at_y(p1, p2);
            if fuzzy_sign(x - cx, epsilon) != s1_side {
                return Some((x, k));
            }
        }
        None
    })?;

    let s1 = Vector2::new(s1_x, y);
    let s2 = Vector2::new(s2_x, y);
    Some(if i1 < i2 {
        SplitChord {
            start: s1,
            start_edge: i1,
            end: s2,
            end_edge: i2,
        }
    } else {
        SplitChord {
            start: s2,
            start_edge: i2,
            end: s1,
            end_edge: i1,
        }
    })
}

/// Split `subject` along `chord` into two polygons.
///
/// The first holds points `0..=start_edge`, the chord, and points after `end_edge`. The second
/// holds points `start_edge + 1..=end_edge` closed by the chord in reverse. A chord end point
/// fuzzy equal to an adjacent subject point is not added, so neither piece has a zero length edge.
pub fn split_at_chord<T>(
    subject: &[Vector2<T>],
    chord: &SplitChord<T>,
    epsilon: T,
) -> (Polygon<T>, Polygon<T>)
where
    T: Real,
{
    let n = subject.len();
    let i1 = chord.start_edge;
    let i2 = chord.end_edge;
    debug_assert!(i1 < i2 && i2 < n);

    // add `p` unless it repeats the last point added or the point that follows it
    let push_chord_point = |points: &mut Vec<Vector2<T>>, p: Vector2<T>, following: Vector2<T>| {
        let repeats_last = points.last().map_or(false, |last| last.fuzzy_eq_eps(p, epsilon));
        if !repeats_last && !following.fuzzy_eq_eps(p, epsilon) {
            points.push(p);
        }
    };

    let mut first = Vec::with_capacity(i1 + 3 + n - i2);
    first.extend_from_slice(&subject[..=i1]);
    push_chord_point(&mut first, chord.start, chord.end);
    push_chord_point(&mut first, chord.end, subject[(i2 + 1) % n]);
    first.extend_from_slice(&subject[i2 + 1..]);

    let mut second = Vec::with_capacity(i2 - i1 + 2);
    second.extend_from_slice(&subject[i1 + 1..=i2]);
    push_chord_point(&mut second, chord.end, chord.start);
    push_chord_point(&mut second, chord.start, subject[i1 + 1]);

    (Polygon::from_points(first), Polygon::from_points(second))
}

/// Difference of `subject` and a `clip` lying inside it, by splitting the subject and recursing.
///
/// Splitting stops at `options.max_split_depth`, the subject is then returned unsplit.
pub fn difference_with_inner_clip<T>(
    subject: &Polygon<T>,
    clip: &Polygon<T>,
    options: &BooleanOptions<T>,
    depth: usize,
) -> Result<BooleanResult<T>, ClipError>
where
    T: Real,
{
    if depth >= options.max_split_depth {
        log::warn!(
            "difference split depth limit ({}) reached, returning subject unsplit",
            options.max_split_depth
        );
        return Ok(BooleanResult::single(subject.clone()));
    }

    let chord = match find_split_chord(&subject.points, &clip.points, options.epsilon) {
        Some(c) => c,
        None => {
            log::warn!("no chord found to split difference subject, returning subject unsplit");
            return Ok(BooleanResult::single(subject.clone()));
        }
    };

    log::debug!(
        "splitting difference subject along {:?} -> {:?} (depth {depth})",
        chord.start,
        chord.end
    );
    let (first, second) = split_at_chord(&subject.points, &chord, options.epsilon);
    let mut result = boolean_at_depth(&first, clip, BooleanOp::Difference, options, depth + 1)?;
    result.extend(boolean_at_depth(
        &second,
        clip,
        BooleanOp::Difference,
        options,
        depth + 1,
    )?);

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::math::vec2;

    fn square(size: f64) -> Vec<Vector2<f64>> {
        vec![
            vec2(0.0, 0.0),
            vec2(size, 0.0),
            vec2(size, size),
            vec2(0.0, size),
        ]
    }

    #[test]
    fn chord_through_inner_square() {
        let subject = square(10.0);
        let clip = vec![vec2(3.0, 3.0), vec2(6.0, 3.0), vec2(6.0, 6.0), vec2(3.0, 6.0)];
        let chord = find_split_chord(&subject, &clip, 1e-8).unwrap();
        assert_eq!(chord.start_edge, 1);
        assert_eq!(chord.end_edge, 3);
        assert_eq!(chord.start, vec2(10.0, 4.5));
        assert_eq!(chord.end, vec2(0.0, 4.5));

        let (a, b) = split_at_chord(&subject, &chord, 1e-8);
        assert_eq!(
            a.points,
            vec![vec2(0.0, 0.0), vec2(10.0, 0.0), vec2(10.0, 4.5), vec2(0.0, 4.5)]
        );
        assert_eq!(
            b.points,
            vec![vec2(10.0, 10.0), vec2(0.0, 10.0), vec2(0.0, 4.5), vec2(10.0, 4.5)]
        );
        assert!((a.area().abs() + b.area().abs() - 100.0).abs() < 1e-8);
    }

    #[test]
    fn chord_edges_normalized_for_clockwise_subject() {
        let subject: Vec<_> = square(10.0).into_iter().rev().collect();
        let clip = vec![vec2(3.0, 3.0), vec2(6.0, 3.0), vec2(6.0, 6.0), vec2(3.0, 6.0)];
        let chord = find_split_chord(&subject, &clip, 1e-8).unwrap();
        assert!(chord.start_edge < chord.end_edge);
        let (a, b) = split_at_chord(&subject, &chord, 1e-8);
        assert!((a.area().abs() + b.area().abs() - 100.0).abs() < 1e-8);
    }

    #[test]
    fn chord_starting_on_subject_vertex() {
        let subject: Vec<Vector2<f64>> = vec![
            vec2(0.0, 0.0),
            vec2(4.0, 0.0),
            vec2(2.0, 1.0),
            vec2(4.0, 2.0),
            vec2(0.0, 2.0),
        ];
        let clip = vec![vec2(1.0, 0.0), vec2(2.0, 1.0), vec2(1.0, 2.0), vec2(0.0, 1.0)];
        let chord = find_split_chord(&subject, &clip, 1e-8).unwrap();
        assert_eq!(chord.start, vec2(2.0, 1.0));
        assert_eq!(chord.end, vec2(0.0, 1.0));

        let (a, b) = split_at_chord(&subject, &chord, 1e-8);
        assert_eq!(
            a.points,
            vec![vec2(0.0, 0.0), vec2(4.0, 0.0), vec2(2.0, 1.0), vec2(0.0, 1.0)]
        );
        assert_eq!(
            b.points,
            vec![vec2(4.0, 2.0), vec2(0.0, 2.0), vec2(0.0, 1.0), vec2(2.0, 1.0)]
        );
        assert!((a.area().abs() + b.area().abs() - 6.0).abs() < 1e-8);
    }

    #[test]
    fn flat_clip_has_no_chord() {
        let subject = square(10.0);
        let clip = vec![vec2(3.0, 3.0), vec2(6.0, 3.0), vec2(5.0, 3.0)];
        assert!(find_split_chord(&subject, &clip, 1e-8).is_none());
    }
}
