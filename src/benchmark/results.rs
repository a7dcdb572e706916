// src/benchmark/results.rs

use std::path::Path;

use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};

use crate::benchmark::system_info::SystemInfo;
use crate::core::SearchStats;
use crate::error::Result;

/// Wall-clock time of each pipeline stage, in microseconds.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StageTimings {
    pub generation_us: u64,
    pub bounding_us: u64,
    pub trial_division_us: u64,
    pub primality_us: u64,
    pub total_us: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RangeBenchmark {
    pub lower: u64,
    pub upper: u64,
    pub digit_count: u32,
    pub primality: String,
    pub palindromic_primes: usize,
    pub stats: SearchStats,
    pub stage_times: StageTimings,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkSuite {
    pub timestamp: DateTime<Utc>,
    pub system_info: SystemInfo,
    pub ranges: Vec<RangeBenchmark>,
}

impl BenchmarkSuite {
    pub fn new() -> Self {
        Self::with_system_info(SystemInfo::collect())
    }

    pub fn with_system_info(system_info: SystemInfo) -> Self {
        BenchmarkSuite {
            timestamp: Utc::now(),
            system_info,
            ranges: Vec::new(),
        }
    }

    pub fn add_range_benchmark(&mut self, result: RangeBenchmark) {
        self.ranges.push(result);
    }

    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        let suite = serde_json::from_str(&json)?;
        Ok(suite)
    }

    pub fn print_summary(&self) {
        println!("\n{}", "=".repeat(80));
        println!("PALINDROMIC PRIME BENCHMARKS");
        println!("{}", "=".repeat(80));
        println!("\nTimestamp: {}", self.timestamp);
        println!("{}", self.system_info);

        if self.ranges.is_empty() {
            println!("\nNo ranges were benchmarked.");
        } else {
            println!("\n{}", "-".repeat(80));
            println!("{:<26} {:>8} {:>10} {:>10} {:>10} {:>10}",
                "Range", "Found", "Generate", "Trial div", "Primality", "Total");
            println!("{}", "-".repeat(80));

            for bench in &self.ranges {
                let times = &bench.stage_times;
                println!("{:<26} {:>8} {:>10} {:>10} {:>10} {:>10}",
                    format!("[{}, {}]", bench.lower, bench.upper),
                    bench.palindromic_primes,
                    Self::format_micros(times.generation_us),
                    Self::format_micros(times.trial_division_us),
                    Self::format_micros(times.primality_us),
                    Self::format_micros(times.total_us));
            }
        }

        println!("\n{}", "=".repeat(80));
    }

    pub fn format_micros(us: u64) -> String {
        if us < 1_000 {
            format!("{} µs", us)
        } else if us < 1_000_000 {
            format!("{:.2} ms", us as f64 / 1_000.0)
        } else {
            format!("{:.2} s", us as f64 / 1_000_000.0)
        }
    }
}

impl Default for BenchmarkSuite {
    fn default() -> Self {
        Self::new()
    }
}
