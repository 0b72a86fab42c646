/// Five-number summary plus mean of one numeric column.
///
/// Quartiles use the nearest-rank method: the `p`-th percentile of `n`
/// sorted values is the value at index `floor(n * p / 100)`, capped at the
/// last index. The median averages the two middle values of an even-sized
/// column.
///
/// # Examples
///
/// ```
/// use phonerank_stats::descriptive::DescriptiveStats;
///
/// let battery = [4500.0, 5000.0, 4000.0, 6000.0, 5000.0];
/// let stats = DescriptiveStats::new(battery).unwrap();
///
/// assert_eq!(stats.count, 5);
/// assert_eq!((stats.min, stats.max), (4000.0, 6000.0));
/// assert_eq!((stats.p25, stats.median, stats.p75), (4500.0, 5000.0, 5000.0));
/// assert_eq!(stats.mean, 4900.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct DescriptiveStats {
    pub count: usize,
    pub min: f64,
    pub p25: f64,
    pub median: f64,
    pub p75: f64,
    pub max: f64,
    pub mean: f64,
}

impl DescriptiveStats {
    /// Summarizes `values`, or returns `None` if there are none.
    ///
    /// NaN values are not filtered; callers pass only usable values.
    #[expect(clippy::cast_precision_loss)]
    #[must_use]
    pub fn new<I>(values: I) -> Option<Self>
    where
        I: IntoIterator<Item = f64>,
    {
        let mut sorted = values.into_iter().collect::<Vec<_>>();
        sorted.sort_by(f64::total_cmp);

        let (&min, &max) = (sorted.first()?, sorted.last()?);
        let count = sorted.len();
        let mid = count / 2;
        let median = if count % 2 == 0 {
            f64::midpoint(sorted[mid - 1], sorted[mid])
        } else {
            sorted[mid]
        };

        Some(Self {
            count,
            min,
            p25: nearest_rank(&sorted, 25),
            median,
            p75: nearest_rank(&sorted, 75),
            max,
            mean: sorted.iter().sum::<f64>() / count as f64,
        })
    }
}

fn nearest_rank(sorted: &[f64], percent: usize) -> f64 {
    let idx = (sorted.len() * percent / 100).min(sorted.len() - 1);
    sorted[idx]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_column() {
        assert_eq!(DescriptiveStats::new(Vec::new()), None);
    }

    #[test]
    fn test_single_value() {
        let stats = DescriptiveStats::new([6000.0]).unwrap();
        assert_eq!(stats.count, 1);
        assert_eq!(
            [stats.min, stats.p25, stats.median, stats.p75, stats.max, stats.mean],
            [6000.0; 6]
        );
    }

    #[test]
    fn test_even_count_median() {
        let stats = DescriptiveStats::new([8.0, 2.0, 6.0, 4.0]).unwrap();
        assert_eq!(stats.median, 5.0);
        assert_eq!(stats.mean, 5.0);
    }

    #[test]
    fn test_quartiles_nearest_rank() {
        let prices = (1..=10).map(f64::from);
        let stats = DescriptiveStats::new(prices).unwrap();
        assert_eq!(stats.p25, 3.0);
        assert_eq!(stats.p75, 8.0);
        assert_eq!(stats.median, 5.5);
    }

    #[test]
    fn test_order_independent() {
        let a = DescriptiveStats::new([3.0, 1.0, 2.0, 9.0]).unwrap();
        let b = DescriptiveStats::new([9.0, 2.0, 1.0, 3.0]).unwrap();
        assert_eq!(a, b);
    }
}
