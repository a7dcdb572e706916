// src/report/run_report.rs

use std::fmt;
use std::time::Duration;

/// First and last `per_side` entries of `values`, or all of them when there
/// are no more than `2 * per_side`.
pub fn preview(values: &[u64], per_side: usize) -> Vec<u64> {
    if values.len() <= 2 * per_side {
        return values.to_vec();
    }
    let mut shown = Vec::with_capacity(2 * per_side);
    shown.extend_from_slice(&values[..per_side]);
    shown.extend_from_slice(&values[values.len() - per_side..]);
    shown
}

/// Summary of one search as printed by the CLI:
///
/// ```text
/// 5: 101, 131, 151, 181, 191
/// Time taken: 0.000041 seconds
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct RunReport {
    pub count: usize,
    pub preview: Vec<u64>,
    pub elapsed: Duration,
}

impl RunReport {
    pub fn new(numbers: &[u64], per_side: usize, elapsed: Duration) -> Self {
        RunReport {
            count: numbers.len(),
            preview: preview(numbers, per_side),
            elapsed,
        }
    }

    /// The first output line, `"{count}: a, b, c"`.
    pub fn summary_line(&self) -> String {
        let joined: Vec<String> = self.preview.iter().map(u64::to_string).collect();
        format!("{}: {}", self.count, joined.join(", "))
    }
}

impl fmt::Display for RunReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.summary_line())?;
        write!(f, "Time taken: {} seconds", self.elapsed.as_secs_f64())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preview_keeps_short_lists() {
        assert_eq!(preview(&[], 3), Vec::<u64>::new());
        assert_eq!(preview(&[2, 3, 5, 7, 11], 3), vec![2, 3, 5, 7, 11]);
        assert_eq!(preview(&[1, 2, 3, 4, 5, 6], 3), vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_preview_truncates_middle() {
        let values: Vec<u64> = (1..=10).collect();
        assert_eq!(preview(&values, 3), vec![1, 2, 3, 8, 9, 10]);
        assert_eq!(preview(&values, 1), vec![1, 10]);
        assert_eq!(preview(&values, 0), Vec::<u64>::new());
    }

    #[test]
    fn test_report_display() {
        let report = RunReport::new(&[101, 131, 151, 181, 191, 313, 353], 3, Duration::from_millis(1500));
        assert_eq!(report.count, 7);
        assert_eq!(report.summary_line(), "7: 101, 131, 151, 191, 313, 353");
        assert_eq!(report.to_string(), format!("{}\nTime taken: 1.5 seconds", report.summary_line()));
    }

    #[test]
    fn test_empty_report() {
        let report = RunReport::new(&[], 3, Duration::ZERO);
        assert_eq!(report.to_string(), "0: \nTime taken: 0 seconds");
    }
}
