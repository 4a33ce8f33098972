use super::FuzzyEq;
use static_aabb2d_index::IndexableNum;

/// Floating point scalar that can be fuzzy compared and stored in a spatial index.
///
/// All polygon coordinates, intersection parameters, and signed areas are generic over this trait.
pub trait Real:
    num_traits::real::Real
    + num_traits::Bounded
    + FuzzyEq
    + std::default::Default
    + std::fmt::Debug
    + IndexableNum
    + 'static
{
    #[inline]
    fn two() -> Self {
        Self::one() + Self::one()
    }

    /// Halfway value between `a` and `b`.
    #[inline]
    fn midway(a: Self, b: Self) -> Self {
        (a + b) / Self::two()
    }
}

impl Real for f32 {
    #[inline]
    fn two() -> Self {
        2.0f32
    }
}

impl Real for f64 {
    #[inline]
    fn two() -> Self {
        2.0f64
    }
}
