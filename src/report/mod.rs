// src/report/mod.rs

pub mod run_report;

pub use run_report::{preview, RunReport};
