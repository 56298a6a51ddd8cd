//! Transforms applied to a dated count series before plotting.

use crate::state::GraphType;

/// Running-sum transform: entry `i` becomes the sum of entries `0..=i`.
/// Dates and order are untouched.
pub fn cumulative<D: Clone>(series: &[(D, i64)]) -> Vec<(D, i64)> {
    let mut total = 0;
    series
        .iter()
        .map(|(date, count)| {
            total += count;
            (date.clone(), total)
        })
        .collect()
}

/// The series as the graph type presents it: daily counts untouched,
/// cumulative as the running total.
pub fn transform<D: Clone>(series: &[(D, i64)], graph_type: GraphType) -> Vec<(D, i64)> {
    match graph_type {
        GraphType::Daily => series.to_vec(),
        GraphType::Cumulative => cumulative(series),
    }
}

/// The trailing window of a series; `None` keeps the whole series.
pub fn tail<T>(series: &[T], window: Option<usize>) -> &[T] {
    match window {
        Some(len) => &series[series.len().saturating_sub(len)..],
        None => series,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cumulative_running_sum() {
        let series = [("d1", 3), ("d2", 5), ("d3", 2)];
        assert_eq!(cumulative(&series), [("d1", 3), ("d2", 8), ("d3", 10)]);
    }

    #[test]
    fn test_cumulative_of_empty_is_empty() {
        assert!(cumulative::<&str>(&[]).is_empty());
    }

    #[test]
    fn test_cumulative_carries_negative_corrections() {
        let series = [("d1", 10), ("d2", -4), ("d3", 1)];
        assert_eq!(cumulative(&series), [("d1", 10), ("d2", 6), ("d3", 7)]);
    }

    #[test]
    fn test_transform_daily_is_identity() {
        let series = [("d1", 3), ("d2", 5)];
        assert_eq!(transform(&series, GraphType::Daily), series);
    }

    #[test]
    fn test_transform_cumulative_sums() {
        let series = [("d1", 3), ("d2", 5)];
        assert_eq!(
            transform(&series, GraphType::Cumulative),
            [("d1", 3), ("d2", 8)]
        );
    }

    #[test]
    fn test_tail_windows() {
        let series = [1, 2, 3, 4, 5];
        assert_eq!(tail(&series, Some(2)), [4, 5]);
        assert_eq!(tail(&series, Some(5)), series);
        assert_eq!(tail(&series, Some(9)), series);
        assert_eq!(tail(&series, None), series);
        assert!(tail::<i64>(&[], Some(3)).is_empty());
    }
}
