/// Observed minimum and maximum of a set of values.
///
/// A `ValueRange` is the result of the first pass of min-max normalization:
/// it is computed over the whole dataset before any single value can be
/// rescaled. The reduction is associative, so partial ranges computed over
/// disjoint chunks can be combined with [`merge`](Self::merge) in any order.
///
/// # Examples
///
/// ```
/// use phonerank_stats::range::ValueRange;
///
/// let left = ValueRange::single(3.0).merge(ValueRange::single(7.0));
/// let right = ValueRange::single(1.0).merge(ValueRange::single(5.0));
/// let whole = left.merge(right);
///
/// assert_eq!(whole.min(), 1.0);
/// assert_eq!(whole.max(), 7.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValueRange {
    min: f64,
    max: f64,
}

impl ValueRange {
    /// Creates a range containing a single value.
    #[must_use]
    pub const fn single(value: f64) -> Self {
        Self {
            min: value,
            max: value,
        }
    }

    /// Combines two ranges into the smallest range covering both.
    ///
    /// A NaN endpoint on one side is replaced by the other side's endpoint.
    #[must_use]
    pub fn merge(self, other: Self) -> Self {
        Self {
            min: f64::min(self.min, other.min),
            max: f64::max(self.max, other.max),
        }
    }

    #[must_use]
    pub const fn min(&self) -> f64 {
        self.min
    }

    #[must_use]
    pub const fn max(&self) -> f64 {
        self.max
    }

    /// Distance between the maximum and the minimum.
    ///
    /// May be `+inf` for finite endpoints of opposite sign near `f64::MAX`.
    #[must_use]
    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    /// Returns `true` when every observed value was identical.
    ///
    /// A degenerate range has no span to divide by, so [`rescale`](Self::rescale)
    /// cannot produce a meaningful value for it.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.span() <= 0.0
    }

    /// Linearly maps `value` from this range onto `[0, 1]`.
    ///
    /// ```text
    /// rescaled = (value - min) / (max - min)
    /// ```
    ///
    /// When `max - min` overflows, both operands are halved first, so finite
    /// endpoints always give a finite result. The result is clamped to
    /// `[0, 1]`, so values outside the observed range saturate at the
    /// endpoints.
    ///
    /// # Returns
    ///
    /// * `Some(f64)` - the rescaled value
    /// * `None` - if the range is degenerate
    ///
    /// # Examples
    ///
    /// ```
    /// use phonerank_stats::range::ValueRange;
    ///
    /// let range = ValueRange::single(0.0).merge(ValueRange::single(200.0));
    /// assert_eq!(range.rescale(0.0), Some(0.0));
    /// assert_eq!(range.rescale(200.0), Some(1.0));
    /// assert_eq!(range.rescale(50.0), Some(0.25));
    ///
    /// let flat = ValueRange::single(42.0);
    /// assert_eq!(flat.rescale(42.0), None);
    /// ```
    #[must_use]
    pub fn rescale(&self, value: f64) -> Option<f64> {
        if self.is_degenerate() {
            return None;
        }
        let span = self.span();
        let rescaled = if span.is_finite() {
            (value - self.min) / span
        } else {
            (value / 2.0 - self.min / 2.0) / (self.max / 2.0 - self.min / 2.0)
        };
        Some(rescaled.clamp(0.0, 1.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn range_of(values: &[f64]) -> ValueRange {
        let (first, rest) = values.split_first().unwrap();
        rest.iter().fold(ValueRange::single(*first), |range, value| {
            range.merge(ValueRange::single(*value))
        })
    }

    #[test]
    fn test_single_value_is_degenerate() {
        let range = ValueRange::single(7.5);
        assert_eq!(range.min(), 7.5);
        assert_eq!(range.max(), 7.5);
        assert!(range.is_degenerate());
        assert_eq!(range.rescale(7.5), None);
    }

    #[test]
    fn test_unsorted_values() {
        let range = range_of(&[4.0, -2.0, 9.0, 0.5]);
        assert_eq!(range.min(), -2.0);
        assert_eq!(range.max(), 9.0);
        assert_eq!(range.span(), 11.0);
    }

    #[test]
    fn test_merge_is_order_independent() {
        let a = range_of(&[1.0, 3.0]);
        let b = range_of(&[-4.0, 2.0]);
        let c = ValueRange::single(10.0);

        assert_eq!(a.merge(b).merge(c), c.merge(a.merge(b)));
        assert_eq!(a.merge(b), b.merge(a));
    }

    #[test]
    fn test_rescale_endpoints() {
        let range = range_of(&[1500.0, 4000.0, 6000.0]);
        assert_eq!(range.rescale(1500.0), Some(0.0));
        assert_eq!(range.rescale(6000.0), Some(1.0));
    }

    #[test]
    fn test_rescale_clamps_out_of_range() {
        let range = range_of(&[10.0, 20.0]);
        assert_eq!(range.rescale(5.0), Some(0.0));
        assert_eq!(range.rescale(25.0), Some(1.0));
    }

    #[test]
    fn test_rescale_overflowing_span() {
        let range = range_of(&[-1e308, 1e308]);
        assert!(range.span().is_infinite());
        assert!(!range.is_degenerate());
        assert_eq!(range.rescale(-1e308), Some(0.0));
        assert_eq!(range.rescale(1e308), Some(1.0));
        assert_eq!(range.rescale(0.0), Some(0.5));

        let widest = range_of(&[f64::MIN, f64::MAX]);
        assert_eq!(widest.rescale(f64::MIN), Some(0.0));
        assert_eq!(widest.rescale(f64::MAX), Some(1.0));
    }

    #[test]
    fn test_nan_is_ignored() {
        let range = range_of(&[f64::NAN, 2.0, 8.0]);
        assert_eq!(range.min(), 2.0);
        assert_eq!(range.max(), 8.0);
    }
}
