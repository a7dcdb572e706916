// src/benchmark_cli.rs
// CLI benchmark runner - separated to keep main.rs small

use std::path::PathBuf;

use chrono::Utc;
use log::info;

use crate::benchmark::runner::BenchmarkRunner;
use crate::config::PalprimeConfig;
use crate::error::Result;

/// Runs the benchmark suite and returns the path of the saved JSON results.
///
/// An empty `digit_counts` falls back to `config.benchmark.digit_counts`.
pub fn run_benchmarks(digit_counts: &[u32], config: &PalprimeConfig) -> Result<PathBuf> {
    let digit_counts = if digit_counts.is_empty() {
        config.benchmark.digit_counts.as_slice()
    } else {
        digit_counts
    };

    println!("\n{}", "=".repeat(80));
    println!("PALPRIMES BENCHMARK SUITE");
    println!("{}", "=".repeat(80));
    println!("\nBenchmarking digit counts: {:?}", digit_counts);
    info!("Primality test: {}", config.primality.mode);

    let mut runner = BenchmarkRunner::new(config.primality.mode);
    runner.run_range_benchmarks(digit_counts);
    runner.print_summary();

    let timestamp = Utc::now().format("%Y%m%d_%H%M%S");
    let path = PathBuf::from(&config.benchmark.output_dir)
        .join(format!("benchmark_results_{}.json", timestamp));
    runner.save_results(&path)?;

    println!("\nResults saved to: {}", path.display());
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::benchmark::BenchmarkSuite;

    #[test]
    fn test_run_benchmarks_writes_results() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = PalprimeConfig::default();
        config.benchmark.output_dir = dir.path().to_string_lossy().into_owned();
        config.benchmark.digit_counts = vec![1, 3];

        let path = run_benchmarks(&[], &config).unwrap();
        let suite = BenchmarkSuite::load_from_file(&path).unwrap();
        assert_eq!(suite.ranges.len(), 2);
        assert_eq!(suite.ranges[1].palindromic_primes, 20);
    }
}
