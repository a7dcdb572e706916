// src/core/mod.rs

pub mod search_range;
pub mod special_numbers;

pub use search_range::SearchRange;
pub use special_numbers::{generate_special_numbers, generate_special_numbers_with, search, SearchOutcome, SearchStats};
