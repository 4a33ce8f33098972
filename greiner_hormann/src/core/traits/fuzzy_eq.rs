use std::cmp::Ordering;

/// Trait for tolerant comparisons of floating point values against each other and against zero.
///
/// The clipping engine never branches on an exact sign of a computed value. Signed areas and
/// intersection parameters are classified with an epsilon so that the same geometric situation
/// computed from different edge pairs lands in the same branch.
///
/// # Examples
///
/// ```
/// # use greiner_hormann::core::traits::*;
/// use std::cmp::Ordering;
/// let a = 0.1 + 0.2;
/// assert_ne!(a, 0.3);
/// assert!(a.fuzzy_eq(0.3));
///
/// assert_eq!((a - 0.3).fuzzy_sign(), Ordering::Equal);
/// assert!(0.5f64.fuzzy_in_unit_interval());
/// assert!(!1.0f64.fuzzy_in_unit_interval());
/// ```
pub trait FuzzyEq: Sized + Copy {
    /// Default epsilon, also the default of the boolean operation options.
    fn fuzzy_epsilon() -> Self;

    /// Returns `true` if the absolute difference to `other` is less than `fuzzy_epsilon`.
    fn fuzzy_eq_eps(&self, other: Self, fuzzy_epsilon: Self) -> bool;

    #[inline]
    fn fuzzy_eq(&self, other: Self) -> bool {
        self.fuzzy_eq_eps(other, Self::fuzzy_epsilon())
    }

    /// Sign of the value relative to zero, values with an absolute value less than
    /// `fuzzy_epsilon` are [Ordering::Equal].
    fn fuzzy_sign_eps(&self, fuzzy_epsilon: Self) -> Ordering;

    #[inline]
    fn fuzzy_sign(&self) -> Ordering {
        self.fuzzy_sign_eps(Self::fuzzy_epsilon())
    }

    /// Returns `true` if the value lies strictly inside (0, 1) after fuzzy sign classification of
    /// `self` and `self - 1`, i.e. a parametric position interior to an edge.
    fn fuzzy_in_unit_interval_eps(&self, fuzzy_epsilon: Self) -> bool;

    #[inline]
    fn fuzzy_in_unit_interval(&self) -> bool {
        self.fuzzy_in_unit_interval_eps(Self::fuzzy_epsilon())
    }
}

macro_rules! impl_fuzzy_eq {
    ($ty:ty, $eps:expr) => {
        impl FuzzyEq for $ty {
            #[inline]
            fn fuzzy_epsilon() -> Self {
                $eps
            }

            #[inline]
            fn fuzzy_eq_eps(&self, other: Self, fuzzy_epsilon: Self) -> bool {
                (*self - other).abs() < fuzzy_epsilon
            }

            #[inline]
            fn fuzzy_sign_eps(&self, fuzzy_epsilon: Self) -> Ordering {
                if self.abs() < fuzzy_epsilon {
                    Ordering::Equal
                } else if *self > 0.0 {
                    Ordering::Greater
                } else {
                    Ordering::Less
                }
            }

            #[inline]
            fn fuzzy_in_unit_interval_eps(&self, fuzzy_epsilon: Self) -> bool {
                self.fuzzy_sign_eps(fuzzy_epsilon) == Ordering::Greater
                    && (*self - 1.0).fuzzy_sign_eps(fuzzy_epsilon) == Ordering::Less
            }
        }
    };
}

impl_fuzzy_eq!(f32, 1.0e-8);
impl_fuzzy_eq!(f64, 1.0e-8);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sign_respects_epsilon() {
        assert_eq!(0.0f64.fuzzy_sign(), Ordering::Equal);
        assert_eq!((-0.0f64).fuzzy_sign(), Ordering::Equal);
        assert_eq!(1e-3f64.fuzzy_sign_eps(1e-2), Ordering::Equal);
        assert_eq!(1e-3f64.fuzzy_sign_eps(1e-4), Ordering::Greater);
        assert_eq!((-1e-3f32).fuzzy_sign_eps(1e-4), Ordering::Less);
    }

    #[test]
    fn unit_interval_excludes_end_points() {
        assert!(!0.0f64.fuzzy_in_unit_interval());
        assert!(!1e-9f64.fuzzy_in_unit_interval());
        assert!(!(1.0f64 - 1e-9).fuzzy_in_unit_interval());
        assert!(1e-6f64.fuzzy_in_unit_interval());
        assert!(!(-0.5f64).fuzzy_in_unit_interval());
        assert!(!1.5f64.fuzzy_in_unit_interval());
    }
}
