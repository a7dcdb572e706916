// src/cli/prompt.rs
//
// Interactive range entry. Keeps asking until two integers with
// upper > lower > 0 are entered.

use std::io::{BufRead, Write};

use log::warn;

use crate::core::SearchRange;
use crate::error::{PalprimeError, Result};

pub const LOWER_PROMPT: &str = "Enter the lower limit: ";
pub const UPPER_PROMPT: &str = "Enter the upper limit: ";
pub const INVALID_NUMBER_MESSAGE: &str = "Both limits must be valid integers!";
pub const INVALID_RANGE_MESSAGE: &str = "Lower limit must be less than the upper limit and both greater than 0!";

/// Parses one limit as typed, allowing surrounding whitespace and a sign.
pub fn parse_limit(text: &str) -> Result<i128> {
    let trimmed = text.trim();
    trimmed
        .parse::<i128>()
        .map_err(|_| PalprimeError::InvalidNumber(trimmed.to_string()))
}

/// Prompts on `output` and reads from `input` until a valid range is entered.
///
/// Returns `PalprimeError::InputClosed` if `input` ends first.
pub fn prompt_for_range<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<SearchRange> {
    loop {
        match read_range(input, output) {
            Ok(range) => return Ok(range),
            Err(PalprimeError::InvalidNumber(text)) => {
                warn!("Rejected limit '{}'", text);
                writeln!(output, "{}\n", INVALID_NUMBER_MESSAGE)?;
            }
            Err(PalprimeError::InvalidRange { lower, upper }) => {
                warn!("Rejected range {}..{}", lower, upper);
                writeln!(output, "{}\n", INVALID_RANGE_MESSAGE)?;
            }
            Err(err) => return Err(err),
        }
    }
}

fn read_range<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<SearchRange> {
    let lower = read_limit(input, output, LOWER_PROMPT)?;
    let upper = read_limit(input, output, UPPER_PROMPT)?;
    SearchRange::from_limits(lower, upper)
}

fn read_limit<R: BufRead, W: Write>(input: &mut R, output: &mut W, prompt: &str) -> Result<i128> {
    write!(output, "{}", prompt)?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(PalprimeError::InputClosed);
    }
    parse_limit(&line)
}
