// src/config/palprime_config.rs

use serde::{Deserialize, Serialize};
use config::{Config, ConfigBuilder, ConfigError, Environment, File};
use config::builder::DefaultState;
use std::path::Path;

use crate::integer_math::primality::PrimalityMode;

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PalprimeConfig {
    /// Logging level (error, warn, info, debug, trace)
    pub log_level: String,

    /// Primality test applied after trial division
    pub primality: PrimalityConfig,

    /// Result reporting
    pub report: ReportConfig,

    /// Benchmark suite settings
    pub benchmark: BenchmarkConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrimalityConfig {
    /// `fermat` (default, probabilistic) or `miller_rabin` (deterministic)
    pub mode: PrimalityMode,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Entries shown from each end of the result (default: 3)
    pub preview_count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkConfig {
    /// Directory that receives benchmark JSON files
    pub output_dir: String,

    /// Upper limits of 10^d - 1 are benchmarked for each d (default: 3, 5, 7)
    pub digit_counts: Vec<u32>,
}

impl Default for PalprimeConfig {
    fn default() -> Self {
        PalprimeConfig {
            log_level: "warn".to_string(),
            primality: PrimalityConfig::default(),
            report: ReportConfig::default(),
            benchmark: BenchmarkConfig::default(),
        }
    }
}

impl Default for PrimalityConfig {
    fn default() -> Self {
        PrimalityConfig {
            mode: PrimalityMode::Fermat,
        }
    }
}

impl Default for ReportConfig {
    fn default() -> Self {
        ReportConfig { preview_count: 3 }
    }
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        BenchmarkConfig {
            output_dir: ".".to_string(),
            digit_counts: vec![3, 5, 7],
        }
    }
}

impl PalprimeConfig {
    /// Load configuration with precedence: config file → env vars → defaults
    pub fn load() -> Result<Self, ConfigError> {
        let mut builder = Self::defaults()?;

        // Try to load from config files (TOML preferred, YAML fallback)
        if Path::new("palprimes.toml").exists() {
            builder = builder.add_source(File::with_name("palprimes.toml"));
        } else if Path::new("palprimes.yaml").exists() {
            builder = builder.add_source(File::with_name("palprimes.yaml"));
        }

        Self::finish(builder)
    }

    /// Load configuration with custom file path. The file must exist.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let builder = Self::defaults()?
            .add_source(File::from(path.as_ref()).required(true));

        Self::finish(builder)
    }

    fn defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        Config::builder()
            .set_default("log_level", "warn")?
            .set_default("primality.mode", "fermat")?
            .set_default("report.preview_count", 3)?
            .set_default("benchmark.output_dir", ".")?
            .set_default("benchmark.digit_counts", vec![3, 5, 7])
    }

    fn finish(builder: ConfigBuilder<DefaultState>) -> Result<Self, ConfigError> {
        // Override with environment variables, e.g. PALPRIMES_PRIMALITY__MODE
        let config = builder
            .add_source(
                Environment::with_prefix("PALPRIMES")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;
        config.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = PalprimeConfig::default();
        assert_eq!(config.log_level, "warn");
        assert_eq!(config.primality.mode, PrimalityMode::Fermat);
        assert_eq!(config.report.preview_count, 3);
        assert_eq!(config.benchmark.output_dir, ".");
        assert_eq!(config.benchmark.digit_counts, vec![3, 5, 7]);
    }

    #[test]
    fn test_load_without_file() {
        // Should successfully load defaults when no config file exists
        let config = PalprimeConfig::load().unwrap_or_else(|_| PalprimeConfig::default());
        assert_eq!(config.report.preview_count, 3);
    }

    #[test]
    fn test_load_from_toml_file() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "log_level = \"debug\"").unwrap();
        writeln!(file, "[primality]").unwrap();
        writeln!(file, "mode = \"miller_rabin\"").unwrap();
        writeln!(file, "[report]").unwrap();
        writeln!(file, "preview_count = 2").unwrap();
        file.flush().unwrap();

        let config = PalprimeConfig::load_from_file(file.path()).unwrap();
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.primality.mode, PrimalityMode::MillerRabin);
        assert_eq!(config.report.preview_count, 2);
        // untouched sections keep their defaults
        assert_eq!(config.benchmark, BenchmarkConfig::default());
    }

    #[test]
    fn test_load_from_missing_file_fails() {
        let result = PalprimeConfig::load_from_file("does/not/exist/palprimes.toml");
        assert!(result.is_err());
    }
}
