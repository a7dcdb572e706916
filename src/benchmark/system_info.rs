// src/benchmark/system_info.rs

use std::fmt;

use serde::{Deserialize, Serialize};

/// Machine and checkout the benchmark ran on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SystemInfo {
    pub hostname: String,
    pub os: String,
    pub cpu_model: String,
    pub cpu_threads: usize,
    pub total_memory_mb: u64,
    pub git_commit: Option<String>,
    pub git_dirty: bool,
    pub crate_version: String,
}

impl SystemInfo {
    pub fn collect() -> Self {
        use sysinfo::System;

        let mut sys = System::new();
        sys.refresh_cpu_all();
        sys.refresh_memory();

        let cpu_model = sys.cpus()
            .first()
            .map(|cpu| cpu.brand().trim().to_string())
            .unwrap_or_else(|| "Unknown".to_string());

        let os = match (System::name(), System::os_version()) {
            (Some(name), Some(version)) => format!("{} {}", name, version),
            (Some(name), None) => name,
            _ => "Unknown".to_string(),
        };

        let (git_commit, git_dirty) = match Self::git_state() {
            Some((commit, dirty)) => (Some(commit), dirty),
            None => (None, false),
        };

        SystemInfo {
            hostname: System::host_name().unwrap_or_else(|| "Unknown".to_string()),
            os,
            cpu_model,
            cpu_threads: sys.cpus().len(),
            total_memory_mb: sys.total_memory() / 1024 / 1024,
            git_commit,
            git_dirty,
            crate_version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }

    // HEAD commit of the working directory's repository and whether it has changes
    fn git_state() -> Option<(String, bool)> {
        let repo = git2::Repository::discover(".").ok()?;
        let commit = repo.head().ok()?.peel_to_commit().ok()?.id().to_string();
        let dirty = repo.statuses(None)
            .map(|statuses| !statuses.is_empty())
            .unwrap_or(false);
        Some((commit, dirty))
    }
}

impl fmt::Display for SystemInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Host:     {} ({})", self.hostname, self.os)?;
        writeln!(f, "CPU:      {} ({} threads)", self.cpu_model, self.cpu_threads)?;
        writeln!(f, "Memory:   {} MB", self.total_memory_mb)?;
        let commit = self.git_commit.as_deref().map(|c| &c[..c.len().min(8)]).unwrap_or("none");
        write!(f, "Build:    palprimes {} @ {}{}", self.crate_version, commit,
            if self.git_dirty { " [dirty]" } else { "" })
    }
}
