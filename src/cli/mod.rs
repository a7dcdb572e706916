// src/cli/mod.rs

pub mod args;
pub mod prompt;

use std::time::Instant;

use log::info;

use crate::config::PalprimeConfig;
use crate::core::special_numbers::search;
use crate::core::SearchRange;
use crate::report::RunReport;

pub use args::{Cli, Command};
pub use prompt::prompt_for_range;

/// Runs one search and times it, including the preview truncation.
pub fn execute_search(range: &SearchRange, config: &PalprimeConfig) -> RunReport {
    let tester = config.primality.mode.tester();
    info!("Searching {} using {}", range, tester.name());

    let start = Instant::now();
    let outcome = search(range, tester.as_ref());
    let report = RunReport::new(&outcome.numbers, config.report.preview_count, start.elapsed());

    info!("Found {} palindromic primes in {:?}", report.count, report.elapsed);
    report
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_execute_search() {
        let range = SearchRange::new(100, 1000).unwrap();
        let report = execute_search(&range, &PalprimeConfig::default());
        assert_eq!(report.count, 15);
        assert_eq!(report.preview, vec![101, 131, 151, 797, 919, 929]);
    }
}
