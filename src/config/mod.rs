// src/config/mod.rs

pub mod palprime_config;

// Re-export main types for convenience
pub use palprime_config::{BenchmarkConfig, PalprimeConfig, PrimalityConfig, ReportConfig};
