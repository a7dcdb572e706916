// src/lib.rs

pub mod benchmark;
pub mod benchmark_cli;
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod integer_math;
pub mod palindrome;
pub mod report;

pub use crate::core::special_numbers::{generate_special_numbers, generate_special_numbers_with};
pub use crate::error::{PalprimeError, Result};
