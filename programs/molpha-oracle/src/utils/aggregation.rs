//! Median-of-N aggregation.
//!
//! Both functions are pure over the submitted values so that every node
//! replaying a round arrives at the same answer.

use crate::constants::BPS_DENOMINATOR;

/// Median of `values`, or `None` when empty.
///
/// For an even count the two middle elements are averaged with integer
/// division rounding down: `{10, 20, 30, 40}` yields `25`.
pub fn median(values: &[u64]) -> Option<u64> {
    if values.is_empty() {
        return None;
    }

    let mut sorted = values.to_vec();
    sorted.sort_unstable();

    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 1 {
        Some(sorted[mid])
    } else {
        let sum = u128::from(sorted[mid - 1]) + u128::from(sorted[mid]);
        Some((sum / 2) as u64)
    }
}

/// Distance of `value` from `median` in basis points of the median.
///
/// A zero median has no scale: an exact zero is 0 bps, anything else is
/// treated as a full 10000 bps deviation. The result saturates at `u64::MAX`.
pub fn deviation_bps(value: u64, median: u64) -> u64 {
    if median == 0 {
        return if value == 0 { 0 } else { BPS_DENOMINATOR };
    }

    let diff = u128::from(value.abs_diff(median));
    let bps = diff * u128::from(BPS_DENOMINATOR) / u128::from(median);
    u64::try_from(bps).unwrap_or(u64::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn odd_count_takes_middle_element() {
        assert_eq!(median(&[10, 20, 30]), Some(20));
        assert_eq!(median(&[30, 10, 20]), Some(20));
        assert_eq!(median(&[150, 100, 102]), Some(102));
    }

    #[test]
    fn even_count_floor_averages_middle_pair() {
        assert_eq!(median(&[10, 20, 30, 40]), Some(25));
        assert_eq!(median(&[40, 10, 31, 20]), Some(25));
        assert_eq!(median(&[1, 2, 2, 3]), Some(2));
    }

    #[test]
    fn even_average_does_not_overflow() {
        assert_eq!(
            median(&[u64::MAX, u64::MAX - 1, 0, u64::MAX]),
            Some(u64::MAX - 1)
        );
    }

    #[test]
    fn median_depends_only_on_the_multiset() {
        let a = [7, 3, 9, 3, 1, 12];
        let b = [12, 1, 3, 9, 3, 7];
        assert_eq!(median(&a), median(&b));
    }

    #[test]
    fn empty_input_has_no_median() {
        assert_eq!(median(&[]), None);
    }

    #[test]
    fn deviation_in_basis_points() {
        assert_eq!(deviation_bps(102, 102), 0);
        assert_eq!(deviation_bps(100, 102), 196);
        assert_eq!(deviation_bps(150, 102), 4_705);
        assert_eq!(deviation_bps(300, 100), 20_000);
    }

    #[test]
    fn zero_median_edge_case() {
        assert_eq!(deviation_bps(0, 0), 0);
        assert_eq!(deviation_bps(1, 0), 10_000);
        assert_eq!(deviation_bps(u64::MAX, 0), 10_000);
    }

    #[test]
    fn huge_deviation_saturates() {
        assert_eq!(deviation_bps(u64::MAX, 1), u64::MAX);
    }
}
