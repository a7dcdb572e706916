// src/core/search_range.rs

use std::fmt;

use crate::error::{PalprimeError, Result};
use crate::integer_math::digits::digit_count;

/// An inclusive range `[lower, upper]` with `upper > lower > 0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchRange {
    lower: u64,
    upper: u64,
}

impl SearchRange {
    pub fn new(lower: u64, upper: u64) -> Result<Self> {
        if lower == 0 || upper <= lower {
            return Err(PalprimeError::InvalidRange {
                lower: lower as i128,
                upper: upper as i128,
            });
        }
        Ok(SearchRange { lower, upper })
    }

    /// Validates limits as entered, which may be negative or exceed `u64`.
    pub fn from_limits(lower: i128, upper: i128) -> Result<Self> {
        if lower <= 0 || upper <= lower {
            return Err(PalprimeError::InvalidRange { lower, upper });
        }
        let upper = u64::try_from(upper).map_err(|_| PalprimeError::InvalidNumber(upper.to_string()))?;
        // lower < upper, so it fits as well
        SearchRange::new(lower as u64, upper)
    }

    pub fn lower(&self) -> u64 {
        self.lower
    }

    pub fn upper(&self) -> u64 {
        self.upper
    }

    pub fn contains(&self, value: u64) -> bool {
        self.lower <= value && value <= self.upper
    }

    /// Decimal digits of the upper limit.
    pub fn upper_digit_count(&self) -> u32 {
        digit_count(self.upper)
    }
}

impl fmt::Display for SearchRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.lower, self.upper)
    }
}
