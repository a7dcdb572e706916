// src/integer_math/binary_search.rs
//
// Insertion-point lookups over ascending slices.
//
//   bisect_left(values, t)  = leftmost index i with values[i] >= t
//   bisect_right(values, t) = leftmost index i with values[i] >  t
//
// Both return values.len() when no such index exists. For a slice holding
// the same value more than once, bisect_left lands before the run and
// bisect_right after it.

/// Leftmost index whose value is `>= target`.
pub fn bisect_left(values: &[u64], target: u64) -> usize {
    let mut low = 0;
    let mut high = values.len();
    while low < high {
        let mid = low + (high - low) / 2;
        if values[mid] < target {
            low = mid + 1;
        } else {
            high = mid;
        }
    }
    low
}

/// Leftmost index whose value is `> target`.
pub fn bisect_right(values: &[u64], target: u64) -> usize {
    let mut low = 0;
    let mut high = values.len();
    while low < high {
        let mid = low + (high - low) / 2;
        if values[mid] <= target {
            low = mid + 1;
        } else {
            high = mid;
        }
    }
    low
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bisect_empty() {
        assert_eq!(bisect_left(&[], 5), 0);
        assert_eq!(bisect_right(&[], 5), 0);
    }

    #[test]
    fn test_bisect_tie_breaking() {
        let values = [1, 3, 3, 3, 7];
        assert_eq!(bisect_left(&values, 3), 1);
        assert_eq!(bisect_right(&values, 3), 4);
    }

    #[test]
    fn test_bisect_out_of_range_targets() {
        let values = [10, 20, 30];
        assert_eq!(bisect_left(&values, 0), 0);
        assert_eq!(bisect_right(&values, 0), 0);
        assert_eq!(bisect_left(&values, 31), 3);
        assert_eq!(bisect_right(&values, 30), 3);
    }

    #[test]
    fn test_bisect_agrees_with_partition_point() {
        let values: Vec<u64> = (0..50).map(|x| x * 3).collect();
        for target in 0..160 {
            assert_eq!(bisect_left(&values, target), values.partition_point(|&v| v < target));
            assert_eq!(bisect_right(&values, target), values.partition_point(|&v| v <= target));
        }
    }
}
