use core::ops::Sub;

/// A closed interval `[self.0, self.1]`.
///
/// This is the range of values a point set covers once projected on an axis.
/// Every constructor of this crate keeps `self.0 <= self.1`.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Interval<T>(pub T, pub T);

impl<T> Interval<T> {
    /// Create the interval `[e, e]` (single value).
    #[must_use]
    pub fn splat(e: T) -> Self
    where
        T: Clone,
    {
        Self(e.clone(), e)
    }

    /// The lower bound of this interval.
    #[inline]
    pub fn min(self) -> T {
        self.0
    }

    /// The upper bound of this interval.
    #[inline]
    pub fn max(self) -> T {
        self.1
    }

    /// Computes a new interval that contains both `self` and `t`.
    #[must_use]
    pub fn enclose(self, t: T) -> Self
    where
        T: PartialOrd,
    {
        if t < self.0 {
            Interval(t, self.1)
        } else if t > self.1 {
            Interval(self.0, t)
        } else {
            self
        }
    }

    /// Do these two intervals share at least one value?
    ///
    /// Bounds are inclusive: two intervals touching at a single value
    /// intersect.
    #[inline]
    #[must_use]
    pub fn intersects(&self, other: &Self) -> bool
    where
        T: PartialOrd,
    {
        self.0 <= other.1 && other.0 <= self.1
    }

    /// The signed length of the overlap of both intervals.
    ///
    /// Positive if the intervals overlap, zero if they touch, negative (minus
    /// the gap length) if they are disjoint.
    #[must_use]
    pub fn overlap(self, other: Self) -> T::Output
    where
        T: PartialOrd + Sub<T>,
    {
        let lo = if self.0 > other.0 { self.0 } else { other.0 };
        let hi = if self.1 < other.1 { self.1 } else { other.1 };
        hi - lo
    }
}

impl<T: approx::AbsDiffEq> approx::AbsDiffEq for Interval<T>
where
    T::Epsilon: Copy,
{
    type Epsilon = T::Epsilon;

    #[inline]
    fn default_epsilon() -> Self::Epsilon {
        T::default_epsilon()
    }

    #[inline]
    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.0.abs_diff_eq(&other.0, epsilon) && self.1.abs_diff_eq(&other.1, epsilon)
    }
}

impl<T: approx::RelativeEq> approx::RelativeEq for Interval<T>
where
    T::Epsilon: Copy,
{
    #[inline]
    fn default_max_relative() -> Self::Epsilon {
        T::default_max_relative()
    }

    #[inline]
    fn relative_eq(
        &self,
        other: &Self,
        epsilon: Self::Epsilon,
        max_relative: Self::Epsilon,
    ) -> bool {
        self.0.relative_eq(&other.0, epsilon, max_relative)
            && self.1.relative_eq(&other.1, epsilon, max_relative)
    }
}
