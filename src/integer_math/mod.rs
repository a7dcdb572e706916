// src/integer_math/mod.rs

pub mod binary_search;
pub mod digits;
pub mod filter_criteria;
pub mod mod_pow;
pub mod primality;
