// src/core/special_numbers.rs
//
// Palindromic prime search over an inclusive range [lower, upper]:
//
//   1. compose every palindrome up to `upper` (odd digit counts only)
//   2. drop those below `lower`
//   3. strip multiples of the filter criteria (small primes < min(100, 4d))
//   4. keep survivors that pass the primality test
//   5. prepend the criteria that are palindromic primes inside the range
//
// Step 3 also removes 2, 3, 5, 7 and 11 themselves, which is why step 5
// recovers them from the criteria list. Results from the default Fermat test
// are probabilistic; see `integer_math::primality`.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::core::search_range::SearchRange;
use crate::integer_math::binary_search::bisect_left;
use crate::integer_math::digits::digit_count;
use crate::integer_math::filter_criteria::{generate_filter_criteria, trim_filter_criteria};
use crate::integer_math::primality::{FermatBase2, PrimalityTest};
use crate::palindrome::generate_palindromes;

/// Criteria are generated for at least this many digits so that 11 is always
/// a criterion (4 * 2 = 8 would leave it out for two-digit upper limits).
pub const MIN_CRITERIA_DIGITS: u32 = 3;

/// Sizes of the intermediate sequences of one search.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    pub palindromes_generated: usize,
    pub candidates_in_range: usize,
    pub filter_criteria: usize,
    pub survivors_after_trial_division: usize,
    pub probable_primes: usize,
    pub criteria_recovered: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchOutcome {
    pub numbers: Vec<u64>,
    pub stats: SearchStats,
}

/// All palindromic primes in `[lower_limit, upper_limit]`, ascending.
///
/// Requires `upper_limit > lower_limit > 0`; other inputs are not checked
/// (use `SearchRange` to validate). Uses the Fermat base-2 test, so base-2
/// pseudoprimes with no factor below the filter bound would be reported.
///
/// # Examples
/// ```
/// use palprimes::core::special_numbers::generate_special_numbers;
///
/// assert_eq!(generate_special_numbers(100, 200), vec![101, 131, 151, 181, 191]);
/// ```
pub fn generate_special_numbers(lower_limit: u64, upper_limit: u64) -> Vec<u64> {
    generate_special_numbers_with(lower_limit, upper_limit, &FermatBase2)
}

/// Same as `generate_special_numbers` with a caller-chosen primality test.
pub fn generate_special_numbers_with(lower_limit: u64, upper_limit: u64, tester: &dyn PrimalityTest) -> Vec<u64> {
    run_pipeline(lower_limit, upper_limit, tester).numbers
}

/// Runs the search over a validated range and reports stage sizes.
pub fn search(range: &SearchRange, tester: &dyn PrimalityTest) -> SearchOutcome {
    run_pipeline(range.lower(), range.upper(), tester)
}

fn run_pipeline(lower_limit: u64, upper_limit: u64, tester: &dyn PrimalityTest) -> SearchOutcome {
    let digits = digit_count(upper_limit);

    let palindromes = generate_palindromes(upper_limit, digits);
    let candidates = bound_candidates(&palindromes, lower_limit);

    let criteria = generate_filter_criteria(criteria_digit_count(digits));
    let survivors = strip_multiples(&candidates, &criteria);
    let primes = retain_probable_primes(&survivors, tester);

    let recovered = trim_filter_criteria(&criteria, lower_limit, upper_limit);
    let stats = SearchStats {
        palindromes_generated: palindromes.len(),
        candidates_in_range: candidates.len(),
        filter_criteria: criteria.len(),
        survivors_after_trial_division: survivors.len(),
        probable_primes: primes.len(),
        criteria_recovered: recovered.len(),
    };
    debug!("Search [{}, {}] with {}: {:?}", lower_limit, upper_limit, tester.name(), stats);

    SearchOutcome {
        numbers: merge_recovered(&recovered, &primes),
        stats,
    }
}

/// Digit count handed to the criteria generator for an upper limit with
/// `digits` digits.
pub fn criteria_digit_count(digits: u32) -> u32 {
    digits.max(MIN_CRITERIA_DIGITS)
}

/// The suffix of the ascending `palindromes` that is `>= lower_limit`.
pub fn bound_candidates(palindromes: &[u64], lower_limit: u64) -> Vec<u64> {
    palindromes[bisect_left(palindromes, lower_limit)..].to_vec()
}

/// Candidates not divisible by any criterion. Order is preserved.
pub fn strip_multiples(candidates: &[u64], criteria: &[u64]) -> Vec<u64> {
    candidates
        .iter()
        .copied()
        .filter(|candidate| criteria.iter().all(|&divisor| candidate % divisor != 0))
        .collect()
}

/// Candidates accepted by `tester`. Order is preserved.
pub fn retain_probable_primes(candidates: &[u64], tester: &dyn PrimalityTest) -> Vec<u64> {
    candidates.iter().copied().filter(|&candidate| tester.is_prime(candidate)).collect()
}

// Recovered criteria are at most 11 and every surviving candidate is at least
// 101, so concatenation stays ascending.
fn merge_recovered(recovered: &[u64], primes: &[u64]) -> Vec<u64> {
    let mut numbers = Vec::with_capacity(recovered.len() + primes.len());
    numbers.extend_from_slice(recovered);
    numbers.extend_from_slice(primes);
    debug_assert!(numbers.windows(2).all(|w| w[0] < w[1]));
    numbers
}
