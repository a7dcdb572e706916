// src/palindrome/palindrome_table.rs
//
// Palindromes are composed from shorter palindromes instead of scanning every
// integer. A d-digit palindrome (d odd) is an outer frame i0...0i plus an
// inner palindrome shifted into place:
//
//     12321 = 10001 + 232 * 10^1
//     10201 = 10001 +   2 * 10^2
//
// The table keeps one ascending entry per digit count. Entry d only reads
// entries d-2, d-4, ..., 1, which are always built first. Even digit counts
// stay empty: an even-length palindrome is a multiple of 11, and 11 itself is
// reported through the filter criteria.

use log::{debug, trace};
use num::Integer;

use crate::integer_math::digits::pow10;

/// Palindromes up to a ceiling, grouped by digit count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PalindromeTable {
    ceiling: u64,
    // entries[d - 1] holds the d-digit palindromes
    entries: Vec<Vec<u64>>,
}

impl PalindromeTable {
    pub fn new(ceiling: u64) -> Self {
        PalindromeTable {
            ceiling,
            entries: Vec::new(),
        }
    }

    /// Builds entries for digit counts 1..=max_digits in increasing order.
    pub fn build(ceiling: u64, max_digits: u32) -> Self {
        let mut table = PalindromeTable::new(ceiling);
        for digit_count in 1..=max_digits {
            table.push_next_entry();
            trace!("Palindrome table: {} digits -> {} values",
                digit_count, table.entries[digit_count as usize - 1].len());
        }
        debug!("Built palindrome table up to {} ({} digit counts, {} values)",
            ceiling, max_digits, table.len());
        table
    }

    /// Appends the entry for the next digit count and returns it.
    pub fn push_next_entry(&mut self) -> &[u64] {
        let digit_count = self.max_digits() + 1;
        let entry = generate_palindromes_in_digit(digit_count, self.ceiling, self);
        self.entries.push(entry);
        &self.entries[self.entries.len() - 1]
    }

    pub fn ceiling(&self) -> u64 {
        self.ceiling
    }

    /// Highest digit count built so far.
    pub fn max_digits(&self) -> u32 {
        self.entries.len() as u32
    }

    /// The ascending `digit_count`-digit palindromes, if that entry exists.
    pub fn entry(&self, digit_count: u32) -> Option<&[u64]> {
        if digit_count == 0 {
            return None;
        }
        self.entries.get(digit_count as usize - 1).map(Vec::as_slice)
    }

    /// Total number of palindromes across all entries.
    pub fn len(&self) -> usize {
        self.entries.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// All entries concatenated in digit-count order, which is ascending.
    pub fn flatten(&self) -> Vec<u64> {
        self.entries.iter().flatten().copied().collect()
    }

    pub fn into_flattened(self) -> Vec<u64> {
        self.entries.into_iter().flatten().collect()
    }
}

/// Returns the `digit_count`-digit palindromes not exceeding `ceiling`, in
/// ascending order.
///
/// `table` must already hold every shorter digit count; entries are only read
/// for digit counts of the same parity below `digit_count`.
///
/// # Panics
/// If `table` has not been built up to `digit_count - 2`.
pub fn generate_palindromes_in_digit(digit_count: u32, ceiling: u64, table: &PalindromeTable) -> Vec<u64> {
    if digit_count == 0 || digit_count.is_even() {
        return Vec::new();
    }

    if digit_count == 1 {
        return (0..=9).filter(|&n| n <= ceiling).collect();
    }

    assert!(
        table.max_digits() >= digit_count - 2,
        "palindrome table holds {} digit counts, {} are needed for {}-digit palindromes",
        table.max_digits(), digit_count - 2, digit_count
    );

    // Each shell wraps an inner palindrome of (digit_count - 2 * shell) digits
    // placed at 10^shell. Walking from the outermost position down to 10^1
    // keeps the output ascending within a frame.
    let shells = (digit_count - 1) / 2;
    let inner_entries: Vec<(u64, &[u64])> = (1..=shells)
        .rev()
        .map(|shell| {
            let inner = table.entry(digit_count - 2 * shell).unwrap_or(&[]);
            (pow10(shell), inner)
        })
        .collect();

    let outer_scale = pow10(digit_count - 1);
    let mut palindromes = Vec::new();

    for leading in 1..=9u64 {
        let frame = leading * outer_scale + leading;

        for &(position, inner) in &inner_entries {
            for &k in inner {
                let palindrome = frame + k * position;
                if palindrome > ceiling {
                    return palindromes;
                }
                palindromes.push(palindrome);
            }
        }
    }

    palindromes
}

/// Every palindrome with an odd digit count (plus 0) up to `ceiling`, using
/// at most `max_digits` digits, as one ascending sequence.
///
/// # Examples
/// ```
/// use palprimes::palindrome::generate_palindromes;
///
/// let palindromes = generate_palindromes(131, 3);
/// assert_eq!(palindromes, vec![0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 101, 111, 121, 131]);
/// ```
pub fn generate_palindromes(ceiling: u64, max_digits: u32) -> Vec<u64> {
    PalindromeTable::build(ceiling, max_digits).into_flattened()
}
