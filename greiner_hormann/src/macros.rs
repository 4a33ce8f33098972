/// Assert two values are fuzzy equal (values must have `fuzzy_eq` and `fuzzy_eq_eps` methods, for
/// scalars bring [FuzzyEq](crate::core::traits::FuzzyEq) into scope).
#[doc(hidden)]
#[macro_export]
macro_rules! assert_fuzzy_eq {
    ($left:expr, $right:expr) => {{
        let (left, right) = (&$left, &$right);
        assert!(
            left.fuzzy_eq(*right),
            "fuzzy equality assertion failed\n  left: `{:?}`\n right: `{:?}`",
            left,
            right
        );
    }};
    ($left:expr, $right:expr, $eps:expr) => {{
        let (left, right, eps) = (&$left, &$right, $eps);
        assert!(
            left.fuzzy_eq_eps(*right, eps),
            "fuzzy equality assertion failed (eps: `{:?}`)\n  left: `{:?}`\n right: `{:?}`",
            eps,
            left,
            right
        );
    }};
}

/// Expands to `$sub` while consuming a token tree, used to count macro repetitions.
#[doc(hidden)]
#[macro_export]
macro_rules! replace_expr {
    ($_t:tt $sub:expr) => {
        $sub
    };
}

/// Construct a polygon with the points given as a list of (x, y) tuples.
///
/// The closing point is implied, do not repeat the first point at the end.
///
/// # Examples
///
/// ```
/// # use greiner_hormann::polygon;
/// # use greiner_hormann::polygon::*;
/// # use greiner_hormann::core::math::Vector2;
/// let square: Polygon = polygon![(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)];
/// assert_eq!(square.vertex_count(), 4);
/// assert_eq!(square[2], Vector2::new(1.0, 1.0));
///
/// let empty: Polygon = polygon![];
/// assert!(empty.is_empty());
/// ```
#[macro_export]
macro_rules! polygon {
    ($( $x:expr ),* $(,)?) => {
        {
            let size = <[()]>::len(&[$($crate::replace_expr!(($x) ())),*]);
            #[allow(unused_mut)]
            let mut poly = $crate::polygon::Polygon::with_capacity(size);
            $(
                poly.add($x.0, $x.1);
            )*
            poly
        }
    };
}
