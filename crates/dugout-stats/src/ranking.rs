//! Fractional ranking.

/// Ranks `values` from 1 (worst) to `n` (best); tied values share the average of
/// the ranks they span.
///
/// Higher values rank better unless `reverse` is set, in which case lower values do.
///
/// # Examples
///
/// ```
/// # use dugout_stats::ranking::rank_values;
/// assert_eq!(rank_values(&[0.5, 0.4, 0.3, 0.6], false), [3.0, 2.0, 1.0, 4.0]);
/// assert_eq!(rank_values(&[2.0, 1.0], true), [1.0, 2.0]);
/// ```
#[expect(clippy::cast_precision_loss)]
#[must_use]
pub fn rank_values(values: &[f64], reverse: bool) -> Vec<f64> {
    let mut order = (0..values.len()).collect::<Vec<_>>();
    order.sort_by(|&a, &b| {
        let ord = values[a].total_cmp(&values[b]);
        if reverse { ord.reverse() } else { ord }
    });

    let mut ranks = vec![0.0; values.len()];
    let mut start = 0;
    while start < order.len() {
        let mut end = start + 1;
        while end < order.len() && values[order[end]] == values[order[start]] {
            end += 1;
        }
        // positions start..end hold ranks start+1..=end
        let rank = (start + 1 + end) as f64 / 2.0;
        for &index in &order[start..end] {
            ranks[index] = rank;
        }
        start = end;
    }
    ranks
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ties_share_average_rank() {
        assert_eq!(
            rank_values(&[1.0, 1.0, 1.0, 1.0, 2.0], false),
            [2.5, 2.5, 2.5, 2.5, 5.0]
        );
    }

    #[test]
    fn test_reverse_ranks_lower_as_better() {
        assert_eq!(rank_values(&[3.2, 2.9, 4.1], true), [2.0, 3.0, 1.0]);
    }

    #[test]
    fn test_empty() {
        assert!(rank_values(&[], false).is_empty());
    }
}
