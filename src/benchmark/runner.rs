// src/benchmark/runner.rs

use std::time::{Duration, Instant};

use log::{info, warn};

use crate::benchmark::results::{BenchmarkSuite, RangeBenchmark, StageTimings};
use crate::core::special_numbers::{bound_candidates, criteria_digit_count, retain_probable_primes, strip_multiples};
use crate::core::{SearchRange, SearchStats};
use crate::error::Result;
use crate::integer_math::digits::pow10;
use crate::integer_math::filter_criteria::{generate_filter_criteria, trim_filter_criteria};
use crate::integer_math::primality::{PrimalityMode, PrimalityTest};
use crate::palindrome::generate_palindromes;

/// Largest digit count whose full range [1, 10^d - 1] fits in u64.
pub const MAX_BENCHMARK_DIGITS: u32 = 19;

pub struct BenchmarkRunner {
    suite: BenchmarkSuite,
    tester: Box<dyn PrimalityTest>,
}

impl BenchmarkRunner {
    pub fn new(mode: PrimalityMode) -> Self {
        Self::with_suite(BenchmarkSuite::new(), mode)
    }

    pub fn with_suite(suite: BenchmarkSuite, mode: PrimalityMode) -> Self {
        BenchmarkRunner {
            suite,
            tester: mode.tester(),
        }
    }

    /// Benchmarks [1, 10^d - 1] for each digit count d.
    pub fn run_range_benchmarks(&mut self, digit_counts: &[u32]) {
        for &digits in digit_counts {
            if digits == 0 || digits > MAX_BENCHMARK_DIGITS {
                warn!("Skipping unsupported digit count {}", digits);
                continue;
            }

            let range = match SearchRange::new(1, pow10(digits) - 1) {
                Ok(range) => range,
                Err(err) => {
                    warn!("Skipping {} digits: {}", digits, err);
                    continue;
                }
            };

            info!("Benchmarking {}-digit range {}", digits, range);
            let result = self.benchmark_range(&range);
            info!("{} palindromic primes in {}", result.palindromic_primes,
                BenchmarkSuite::format_micros(result.stage_times.total_us));
            self.suite.add_range_benchmark(result);
        }
    }

    /// Runs the search pipeline stage by stage, timing each one.
    pub fn benchmark_range(&self, range: &SearchRange) -> RangeBenchmark {
        let (lower, upper) = (range.lower(), range.upper());
        let digits = range.upper_digit_count();
        let start_total = Instant::now();

        let start = Instant::now();
        let palindromes = generate_palindromes(upper, digits);
        let generation = start.elapsed();

        let start = Instant::now();
        let candidates = bound_candidates(&palindromes, lower);
        let bounding = start.elapsed();

        let start = Instant::now();
        let criteria = generate_filter_criteria(criteria_digit_count(digits));
        let survivors = strip_multiples(&candidates, &criteria);
        let trial_division = start.elapsed();

        let start = Instant::now();
        let primes = retain_probable_primes(&survivors, self.tester.as_ref());
        let primality = start.elapsed();

        let recovered = trim_filter_criteria(&criteria, lower, upper);
        let total = start_total.elapsed();

        RangeBenchmark {
            lower,
            upper,
            digit_count: digits,
            primality: self.tester.name().to_string(),
            palindromic_primes: recovered.len() + primes.len(),
            stats: SearchStats {
                palindromes_generated: palindromes.len(),
                candidates_in_range: candidates.len(),
                filter_criteria: criteria.len(),
                survivors_after_trial_division: survivors.len(),
                probable_primes: primes.len(),
                criteria_recovered: recovered.len(),
            },
            stage_times: StageTimings {
                generation_us: micros(generation),
                bounding_us: micros(bounding),
                trial_division_us: micros(trial_division),
                primality_us: micros(primality),
                total_us: micros(total),
            },
        }
    }

    pub fn suite(&self) -> &BenchmarkSuite {
        &self.suite
    }

    pub fn print_summary(&self) {
        self.suite.print_summary();
    }

    pub fn save_results<P: AsRef<std::path::Path>>(&self, path: P) -> Result<()> {
        self.suite.save_to_file(path)
    }
}

fn micros(duration: Duration) -> u64 {
    duration.as_micros() as u64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::special_numbers::search;

    #[test]
    fn test_benchmark_range_matches_search() {
        let runner = BenchmarkRunner::new(PrimalityMode::Fermat);
        let range = SearchRange::new(1, 99_999).unwrap();
        let result = runner.benchmark_range(&range);

        let outcome = search(&range, runner.tester.as_ref());
        assert_eq!(result.palindromic_primes, outcome.numbers.len());
        assert_eq!(result.stats, outcome.stats);
        assert_eq!(result.digit_count, 5);
        assert!(result.stage_times.total_us >= result.stage_times.generation_us);
    }

    #[test]
    fn test_run_skips_unsupported_digit_counts() {
        let mut runner = BenchmarkRunner::new(PrimalityMode::MillerRabin);
        runner.run_range_benchmarks(&[0, 1, 3, 20]);

        let ranges = &runner.suite().ranges;
        assert_eq!(ranges.len(), 2);
        assert_eq!((ranges[0].lower, ranges[0].upper), (1, 9));
        assert_eq!(ranges[0].palindromic_primes, 4);
        assert_eq!((ranges[1].lower, ranges[1].upper), (1, 999));
        assert_eq!(ranges[1].palindromic_primes, 20);
        assert_eq!(ranges[1].primality, "Miller-Rabin (deterministic u64)");
    }
}
