// src/integer_math/filter_criteria.rs
//
// Filter criteria: small primes used as trial divisors before the primality
// test runs. The list is 2 followed by the odd primes below
// min(100, 4 * digit_count). The same list doubles as the source of the small
// palindromic primes 2, 3, 5, 7 and 11, which stripping multiples would
// otherwise remove from the candidates (every criterion divides itself).

use std::cmp::min;

use log::debug;

use crate::integer_math::binary_search::{bisect_left, bisect_right};
use crate::integer_math::primality::is_prime;

/// Upper cap on the trial divisors, whatever the digit count.
pub const FILTER_BOUND_CAP: u64 = 100;

/// Trial divisors grow by this much per digit of the upper limit.
pub const DIVISORS_PER_DIGIT: u64 = 4;

/// Only this many leading criteria are ever palindromes (2, 3, 5, 7, 11).
/// Must be re-checked if FILTER_BOUND_CAP is raised past 101.
pub const PALINDROMIC_CRITERIA_LIMIT: usize = 5;

/// Exclusive upper bound for the criteria of a `digit_count`-digit limit.
pub fn filter_bound(digit_count: u32) -> u64 {
    min(FILTER_BOUND_CAP, DIVISORS_PER_DIGIT * digit_count as u64)
}

/// Returns the ascending trial divisors for an upper limit with
/// `digit_count` digits.
///
/// 2 is always present. Odd candidates are confirmed with the Fermat test,
/// which is exact below 341.
///
/// # Examples
/// ```
/// use palprimes::integer_math::filter_criteria::generate_filter_criteria;
///
/// assert_eq!(generate_filter_criteria(3), vec![2, 3, 5, 7, 11]);
/// ```
pub fn generate_filter_criteria(digit_count: u32) -> Vec<u64> {
    let bound = filter_bound(digit_count);
    let criteria: Vec<u64> = std::iter::once(2)
        .chain((3..bound).step_by(2).filter(|&n| is_prime(n)))
        .collect();

    debug!("Filter criteria for {} digits (bound {}): {:?}", digit_count, bound, criteria);
    criteria
}

/// Keeps the criteria that can themselves be reported: the first
/// `PALINDROMIC_CRITERIA_LIMIT` entries that fall inside `[lower, upper]`.
pub fn trim_filter_criteria(values: &[u64], lower: u64, upper: u64) -> Vec<u64> {
    let head = &values[..min(values.len(), PALINDROMIC_CRITERIA_LIMIT)];
    let left = bisect_left(head, lower);
    let right = bisect_right(head, upper);

    if left >= right {
        return Vec::new();
    }
    head[left..right].to_vec()
}
