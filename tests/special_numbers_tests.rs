// tests/special_numbers_tests.rs
//
// End-to-end checks of the palindromic prime search against brute force.

use palprimes::core::special_numbers::search;
use palprimes::core::SearchRange;
use palprimes::integer_math::digits::is_palindrome;
use palprimes::integer_math::primality::{FermatBase2, MillerRabin, PrimalityTest};
use palprimes::{generate_special_numbers, generate_special_numbers_with};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

#[cfg(test)]
mod special_numbers_tests {
    use super::*;

    fn is_prime_by_trial_division(n: u64) -> bool {
        n >= 2 && (2..).take_while(|d| d * d <= n).all(|d| n % d != 0)
    }

    fn brute_force(lower: u64, upper: u64) -> Vec<u64> {
        (lower..=upper)
            .filter(|&n| is_palindrome(n) && is_prime_by_trial_division(n))
            .collect()
    }

    #[test]
    fn test_known_ranges() {
        assert_eq!(generate_special_numbers(2, 50), vec![2, 3, 5, 7, 11]);
        assert_eq!(generate_special_numbers(100, 200), vec![101, 131, 151, 181, 191]);
    }

    #[test]
    fn test_identical_calls_return_identical_results() {
        let first = generate_special_numbers(1, 1_000_000);
        let second = generate_special_numbers(1, 1_000_000);
        assert_eq!(first, second);
    }

    #[test]
    fn test_matches_brute_force_for_small_ranges() {
        for (lower, upper) in [(1, 2), (1, 10), (2, 3), (7, 11), (10, 100), (11, 12), (1, 1000), (300, 400), (10_000, 20_000)] {
            assert_eq!(generate_special_numbers(lower, upper), brute_force(lower, upper), "[{}, {}]", lower, upper);
        }
    }

    #[test]
    fn test_random_ranges_match_brute_force() {
        let mut rng = ChaCha8Rng::seed_from_u64(0x5eed);
        for _ in 0..200 {
            let lower = rng.random_range(1..200_000u64);
            let upper = lower + rng.random_range(1..50_000u64);
            let expected = brute_force(lower, upper);

            assert_eq!(generate_special_numbers(lower, upper), expected, "[{}, {}]", lower, upper);
            assert_eq!(generate_special_numbers_with(lower, upper, &MillerRabin), expected);
        }
    }

    #[test]
    fn test_results_stay_inside_range() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for _ in 0..100 {
            let lower = rng.random_range(1..5_000_000u64);
            let upper = lower + rng.random_range(1..5_000_000u64);
            let numbers = generate_special_numbers(lower, upper);
            assert!(numbers.iter().all(|&n| lower <= n && n <= upper));
            assert!(numbers.windows(2).all(|w| w[0] < w[1]));
        }
    }

    #[test]
    fn test_counts_up_to_ten_million() {
        // 113 palindromic primes below 10^5 and 781 below 10^7
        assert_eq!(generate_special_numbers(1, 100_000).len(), 113);

        let numbers = generate_special_numbers(1, 10_000_000);
        assert_eq!(numbers.len(), 781);
        assert_eq!(&numbers[..3], &[2, 3, 5]);
        assert_eq!(&numbers[numbers.len() - 3..], &[9_980_899, 9_981_899, 9_989_899]);
    }

    #[test]
    fn test_fermat_agrees_with_miller_rabin_up_to_ten_million() {
        // Trial division removes every base-2 liar in this range
        let fermat = generate_special_numbers_with(1, 10_000_000, &FermatBase2);
        let exact = generate_special_numbers_with(1, 10_000_000, &MillerRabin);
        assert_eq!(fermat, exact);
    }

    #[test]
    fn test_search_reports_stats() {
        let range = SearchRange::new(1, 1000).unwrap();
        let outcome = search(&range, &FermatBase2);
        assert_eq!(outcome.numbers, brute_force(1, 1000));
        assert_eq!(outcome.stats.criteria_recovered, 5);
        assert_eq!(outcome.stats.probable_primes, 15);
        assert_eq!(outcome.numbers.len(), outcome.stats.criteria_recovered + outcome.stats.probable_primes);
    }

    #[test]
    fn test_fermat_liars_are_accepted_by_the_raw_test() {
        // The filter criteria keep these out of results, the test alone does not
        for liar in [341u64, 561, 645, 1105] {
            assert!(FermatBase2.is_prime(liar));
            assert!(!MillerRabin.is_prime(liar));
        }
    }
}
