// src/cli/args.rs

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::core::SearchRange;
use crate::error::Result;

#[derive(Debug, Parser)]
#[command(name = "palprimes")]
#[command(about = "Find the palindromic primes in an inclusive range")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Lower limit (skips the interactive prompt when given with --upper)
    #[arg(short, long, requires = "upper")]
    pub lower: Option<u64>,

    /// Upper limit
    #[arg(short, long, requires = "lower")]
    pub upper: Option<u64>,

    /// Configuration file (defaults to ./palprimes.toml if present)
    #[arg(short, long, env = "PALPRIMES_CONFIG")]
    pub config: Option<PathBuf>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Time the pipeline for upper limits of 10^d - 1 and save the results as JSON
    Benchmark {
        /// Digit counts to benchmark (defaults to the configured list)
        digit_counts: Vec<u32>,
    },
}

impl Cli {
    /// The range given on the command line, if any.
    pub fn range(&self) -> Option<Result<SearchRange>> {
        match (self.lower, self.upper) {
            (Some(lower), Some(upper)) => Some(SearchRange::new(lower, upper)),
            _ => None,
        }
    }
}
